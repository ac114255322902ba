/// Path segments marking vendored or in-tree module code
const INTERNAL_PATH_SEGMENTS: &[&str] = &["modules/", "vendor/"];

/// Manifest and lockfile names that SBOM generators sometimes emit as components
const MANIFEST_FILE_SUFFIXES: &[&str] = &[
    ".go.mod",
    "/go.mod",
    "requirements.txt",
    "package-lock.json",
    "bun.lock",
    "yarn.lock",
    "pnpm-lock.yaml",
];

const MANIFEST_FILE_NAMES: &[&str] = &["go.mod"];

/// InternalClassifier policy for components that belong to the project itself
///
/// Such components are labelled `Proprietary` without any external lookup.
pub struct InternalClassifier;

impl InternalClassifier {
    /// Returns true for vendored paths, blank names and manifest/lockfile entries
    pub fn is_internal(name: &str) -> bool {
        name.trim().is_empty()
            || INTERNAL_PATH_SEGMENTS
                .iter()
                .any(|segment| name.contains(segment))
            || MANIFEST_FILE_NAMES.contains(&name)
            || MANIFEST_FILE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix))
    }
}
