use crate::error::{GitBumpError, Result};

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Format a version name according to the pattern.
    /// Example: pattern="v{version}", name="1.5.0" -> "v1.5.0"
    pub fn format(&self, version_name: &str) -> String {
        self.pattern.replace("{version}", version_name)
    }

    /// Matcher used to recognize release tags during resolution.
    ///
    /// Anchored at the start only, so tag names may carry extra qualifier
    /// text after the version (e.g. "v1.2.3-4-SNAPSHOT", "v1.2.3-rc1").
    /// For the default pattern this is `^v\d+\.\d+\.\d+`.
    pub fn resolve_matcher(&self) -> Result<regex::Regex> {
        if !self.pattern.contains("{version}") {
            return Err(GitBumpError::tag(
                "Pattern must contain {version} placeholder",
            ));
        }

        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"\d+\.\d+\.\d+");

        regex::Regex::new(&format!("^{}", regex_pattern))
            .map_err(|_| GitBumpError::tag("Invalid pattern"))
    }

    /// Validate whether a tag name matches this pattern exactly.
    ///
    /// The `{version}` placeholder accepts both release names ("1.2.3") and
    /// snapshot names ("1.2.3-4-SNAPSHOT").
    pub fn matches(&self, tag: &str) -> Result<bool> {
        if !self.pattern.contains("{version}") {
            return Err(GitBumpError::tag(
                "Pattern must contain {version} placeholder",
            ));
        }

        // Escape everything, then replace the placeholder with the version regex
        let escaped = regex::escape(&self.pattern);
        let regex_pattern =
            escaped.replace(r"\{version\}", r"(\d+\.\d+\.\d+(?:-\d+-SNAPSHOT)?)");

        match regex::Regex::new(&format!("^{}$", regex_pattern)) {
            Ok(re) => Ok(re.is_match(tag)),
            Err(_) => Err(GitBumpError::tag("Invalid pattern")),
        }
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("v{version}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}");
        assert_eq!(pattern.format("1.5.0"), "v1.5.0");
    }

    #[test]
    fn test_pattern_format_snapshot() {
        let pattern = TagPattern::new("v{version}");
        assert_eq!(pattern.format("2.0.0-4-SNAPSHOT"), "v2.0.0-4-SNAPSHOT");
    }

    #[test]
    fn test_pattern_format_with_prefix() {
        let pattern = TagPattern::new("release-{version}");
        assert_eq!(pattern.format("1.2.3"), "release-1.2.3");
    }

    #[test]
    fn test_pattern_matches() {
        let pattern = TagPattern::default();
        assert!(pattern.matches("v1.2.3").unwrap());
        assert!(pattern.matches("v2.0.0-4-SNAPSHOT").unwrap());
        assert!(!pattern.matches("release-1.2.3").unwrap());
        assert!(!pattern.matches("v1.2").unwrap());
    }

    #[test]
    fn test_pattern_without_placeholder() {
        let pattern = TagPattern::new("static-name");
        assert!(pattern.matches("static-name").is_err());
        assert!(pattern.resolve_matcher().is_err());
    }

    #[test]
    fn test_resolve_matcher_allows_qualifier_text() {
        let matcher = TagPattern::default().resolve_matcher().unwrap();
        assert!(matcher.is_match("v1.2.3"));
        assert!(matcher.is_match("v1.2.3-4-SNAPSHOT"));
        assert!(matcher.is_match("v1.2.3-rc1"));
        assert!(!matcher.is_match("v1.2"));
        assert!(!matcher.is_match("release-1.2.3"));
    }

    #[test]
    fn test_resolve_matcher_with_custom_prefix() {
        let matcher = TagPattern::new("release-{version}").resolve_matcher().unwrap();
        assert!(matcher.is_match("release-1.2.3"));
        assert!(!matcher.is_match("v1.2.3"));
    }
}
