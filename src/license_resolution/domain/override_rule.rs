use crate::license_resolution::domain::LicenseLabel;
use crate::shared::Result;
use globset::{GlobBuilder, GlobMatcher};

/// Maximum length of a single override pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// An operator-supplied rule: component names matching `pattern` get `license`.
///
/// Patterns use fnmatch-style globs: `*` matches any run of characters
/// (including `/`), `?` a single character, `[...]` a character class.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    pattern: String,
    matcher: GlobMatcher,
    license: LicenseLabel,
}

impl OverrideRule {
    /// Compiles a rule.
    ///
    /// # Errors
    /// - Empty or overlong pattern
    /// - Pattern that is not a valid glob (e.g. an unclosed `[`)
    pub fn new(pattern: impl Into<String>, license: LicenseLabel) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            anyhow::bail!("Override pattern cannot be empty");
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            anyhow::bail!(
                "Override pattern is too long ({} characters). Maximum allowed: {} characters",
                pattern.len(),
                MAX_PATTERN_LENGTH
            );
        }

        let matcher = GlobBuilder::new(&pattern)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid override pattern '{}': {}", pattern, e))?
            .compile_matcher();

        Ok(Self {
            pattern,
            matcher,
            license,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn license(&self) -> &LicenseLabel {
        &self.license
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }
}

/// Ordered, read-only override rules. The first matching rule wins.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    rules: Vec<OverrideRule>,
}

impl OverrideTable {
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from `(pattern, label)` pairs, failing on the first bad pattern
    pub fn from_pairs<I, P, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .map(|(pattern, label)| OverrideRule::new(pattern, LicenseLabel::new(label)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    pub fn first_match(&self, name: &str) -> Option<&OverrideRule> {
        self.rules.iter().find(|rule| rule.matches(name))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, license: &str) -> OverrideRule {
        OverrideRule::new(pattern, LicenseLabel::new(license)).unwrap()
    }

    #[test]
    fn test_exact_pattern() {
        let r = rule("left-pad", "MIT");
        assert!(r.matches("left-pad"));
        assert!(!r.matches("left-pad2"));
    }

    #[test]
    fn test_star_matches_across_slashes() {
        let r = rule("github.com/acme/*", "Proprietary");
        assert!(r.matches("github.com/acme/tool"));
        assert!(r.matches("github.com/acme/tool/v2"));
        assert!(!r.matches("github.com/other/tool"));
    }

    #[test]
    fn test_question_mark_matches_one_char() {
        let r = rule("lib?", "MIT");
        assert!(r.matches("libx"));
        assert!(!r.matches("lib"));
        assert!(!r.matches("libxy"));
    }

    #[test]
    fn test_character_class() {
        let r = rule("pkg-[ab]", "MIT");
        assert!(r.matches("pkg-a"));
        assert!(!r.matches("pkg-c"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let r = rule("Internal-*", "Proprietary");
        assert!(!r.matches("internal-tool"));
    }

    #[test]
    fn test_star_matches_empty_name() {
        assert!(rule("*", "MIT").matches(""));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = OverrideRule::new("", LicenseLabel::new("MIT"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_overlong_pattern_rejected() {
        let result = OverrideRule::new("a".repeat(256), LicenseLabel::new("MIT"));
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let result = OverrideRule::new("pkg-[ab", LicenseLabel::new("MIT"));
        assert!(result.unwrap_err().to_string().contains("Invalid override pattern"));
    }

    #[test]
    fn test_first_match_wins_in_insertion_order() {
        let table =
            OverrideTable::from_pairs([("internal-*", "Proprietary"), ("internal-tool", "MIT")])
                .unwrap();
        let matched = table.first_match("internal-tool").unwrap();
        assert_eq!(matched.pattern(), "internal-*");
        assert_eq!(matched.license().as_str(), "Proprietary");
    }

    #[test]
    fn test_no_match() {
        let table = OverrideTable::from_pairs([("internal-*", "Proprietary")]).unwrap();
        assert!(table.first_match("left-pad").is_none());
        assert_eq!(table.len(), 1);
        assert!(OverrideTable::empty().is_empty());
    }
}
