use crate::license_resolution::domain::LicenseLabel;
use serde_json::Value;

/// Case-folded alias → canonical SPDX identifier
const SPDX_ALIASES: &[(&str, &str)] = &[
    ("unlicense", "Unlicense"),
    ("mit", "MIT"),
    ("apache-2.0", "Apache-2.0"),
    ("bsd-3-clause", "BSD-3-Clause"),
    ("bsd-2-clause", "BSD-2-Clause"),
    ("mpl-2.0", "MPL-2.0"),
    ("gpl-3.0", "GPL-3.0"),
    ("lgpl-3.0", "LGPL-3.0"),
];

/// Marker used by npm packages that point at a bundled license file
const SEE_LICENSE_MARKER: &str = "SEE LICENSE";

/// LicenseNormalizer policy for turning raw registry data into labels
///
/// Total over its input: anything unusable maps to `UNKNOWN`, anything
/// unrecognised but meaningful is returned trimmed and otherwise untouched.
/// Normalizing an already-normalized label returns it unchanged.
pub struct LicenseNormalizer;

impl LicenseNormalizer {
    /// Normalizes a license string.
    ///
    /// - absent, empty or whitespace-only → `UNKNOWN`
    /// - contains `SEE LICENSE` (any case) → `UNKNOWN`
    /// - known alias (any case) → canonical SPDX id
    /// - otherwise the trimmed input
    pub fn normalize(raw: Option<&str>) -> LicenseLabel {
        let Some(raw) = raw else {
            return LicenseLabel::unknown();
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.to_uppercase().contains(SEE_LICENSE_MARKER) {
            return LicenseLabel::unknown();
        }

        match Self::canonical_alias(trimmed) {
            Some(canonical) => LicenseLabel::new(canonical),
            None => LicenseLabel::new(trimmed),
        }
    }

    /// Normalizes a JSON license value as found in registry metadata.
    ///
    /// Strings are normalized directly; objects carrying a string `type`
    /// field (`{"type": "MIT", "url": "..."}`) use that field. Any other
    /// shape is `UNKNOWN`.
    pub fn normalize_value(raw: Option<&Value>) -> LicenseLabel {
        match raw {
            Some(Value::String(s)) => Self::normalize(Some(s)),
            Some(Value::Object(map)) => Self::normalize(map.get("type").and_then(Value::as_str)),
            _ => LicenseLabel::unknown(),
        }
    }

    /// Canonical SPDX ids known to the alias table, in table order
    pub fn known_identifiers() -> impl Iterator<Item = &'static str> {
        SPDX_ALIASES.iter().map(|(_, canonical)| *canonical)
    }

    fn canonical_alias(value: &str) -> Option<&'static str> {
        let folded = value.to_lowercase();
        SPDX_ALIASES
            .iter()
            .find(|(alias, _)| *alias == folded)
            .map(|(_, canonical)| *canonical)
    }
}
