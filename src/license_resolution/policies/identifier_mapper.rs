/// Built-in Go vanity import prefixes and the GitHub organisations behind them.
/// Order matters: the first matching prefix wins.
const BUILTIN_VANITY_MAPPINGS: &[(&str, &str)] = &[
    ("golang.org/x/", "github.com/golang/"),
    ("go.uber.org/", "github.com/uber-go/"),
    ("go.etcd.io/", "github.com/etcd-io/"),
];

/// Ordered prefix → replacement table for vanity import paths
#[derive(Debug, Clone)]
pub struct VanityMappings {
    entries: Vec<(String, String)>,
}

impl VanityMappings {
    /// A table with no entries; every name passes through unchanged
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends entries after the existing ones
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(entries);
        self
    }

    /// True when `name` starts with any configured prefix
    pub fn has_prefix(&self, name: &str) -> bool {
        self.entries.iter().any(|(prefix, _)| name.starts_with(prefix))
    }

    /// Rewrites the first matching prefix; unmatched names are returned as-is
    pub fn map(&self, name: &str) -> String {
        self.entries
            .iter()
            .find_map(|(prefix, replacement)| {
                name.strip_prefix(prefix.as_str())
                    .map(|rest| format!("{}{}", replacement, rest))
            })
            .unwrap_or_else(|| name.to_string())
    }
}

impl Default for VanityMappings {
    fn default() -> Self {
        Self::empty().with_entries(
            BUILTIN_VANITY_MAPPINGS
                .iter()
                .map(|(prefix, replacement)| (prefix.to_string(), replacement.to_string())),
        )
    }
}

/// Package URL helpers (`scheme:type/namespace/name@version?qualifiers#subpath`)
pub struct PackageIdentifier;

impl PackageIdentifier {
    /// Derives a bare lookup name from a package URL.
    ///
    /// `pkg:npm/hasown@2.0.2` → `hasown`,
    /// `pkg:npm/%40babel/core@7.0.0` → `@babel/core`,
    /// `pkg:golang/github.com/golang/sync@v0.6.0` → `github.com/golang/sync`.
    ///
    /// Returns `None` for anything that does not look like `scheme:type/...`
    /// or that leaves an empty name.
    pub fn lookup_name(purl: &str) -> Option<String> {
        let purl = purl.trim();
        let (head, body) = purl.split_once('/')?;
        if !head.contains(':') {
            return None;
        }

        let body = body.split('#').next().unwrap_or_default();
        let body = body.split('?').next().unwrap_or_default();
        let decoded = urlencoding::decode(body).ok()?;

        let name = match decoded.rsplit_once('@') {
            // a leading '@' belongs to an npm scope, not a version
            Some((name, _version)) if !name.is_empty() => name,
            _ => decoded.as_ref(),
        };

        let name = name.trim_matches('/');
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
