use std::fmt;

/// Canonical license label: an SPDX-style token, `Proprietary`, or `UNKNOWN`.
///
/// Construction does not normalize. Labels coming from external data go
/// through [`LicenseNormalizer`](crate::license_resolution::policies::LicenseNormalizer);
/// override values are taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseLabel(String);

impl LicenseLabel {
    pub const UNKNOWN: &'static str = "UNKNOWN";
    pub const PROPRIETARY: &'static str = "Proprietary";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn proprietary() -> Self {
        Self(Self::PROPRIETARY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    pub fn is_proprietary(&self) -> bool {
        self.0 == Self::PROPRIETARY
    }
}

impl fmt::Display for LicenseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
