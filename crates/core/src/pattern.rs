//! Word-segment patterns over title-case tokens.
//!
//! A word-segment is one uppercase letter followed by one or more lowercase
//! letters or digits. `UsersController` has the segments `Users` and `Controller`.

use namescope_api::{ApiResult, NamespaceError};
use regex::Regex;
use std::borrow::Cow;

/// Token made of two or more word-segments.
pub const MULTI_SEGMENT: &str = r"^(?:[A-Z][a-z0-9]+){2,}$";

/// Everything but the final word-segment (`MyUsersController` -> `MyUsers`).
/// Lazy on the prefix so the optional trailing segment is taken whenever possible.
const RESOURCE_CLEAN: &str = r"^((?:[A-Z][a-z0-9]+)+?)(?:[A-Z][a-z0-9]+)?$";

/// Only the final word-segment (`MyUsersController` -> `Controller`).
const CONCEPT_CLEAN: &str = r"^(?:[A-Z][a-z0-9]+)+([A-Z][a-z0-9]+)$";

#[derive(Debug, Clone)]
pub struct SegmentPatterns {
    detect: Regex,
    resource_clean: Regex,
    concept_clean: Regex,
}

impl Default for SegmentPatterns {
    fn default() -> Self {
        Self::with_detect(MULTI_SEGMENT).expect("builtin segment patterns must compile")
    }
}

impl SegmentPatterns {
    /// Use a custom pattern to pick the token `concept` and `resource` operate on.
    pub fn with_detect(detect: &str) -> ApiResult<Self> {
        Ok(Self {
            detect: compile(detect)?,
            resource_clean: compile(RESOURCE_CLEAN)?,
            concept_clean: compile(CONCEPT_CLEAN)?,
        })
    }

    pub fn detect_pattern(&self) -> &str {
        self.detect.as_str()
    }

    pub fn is_detected(&self, token: &str) -> bool {
        self.detect.is_match(token)
    }

    /// Strip the final word-segment. Tokens outside the segment grammar and
    /// single-segment tokens come back unchanged.
    pub fn strip_last_segment<'a>(&self, token: &'a str) -> Cow<'a, str> {
        self.resource_clean.replace(token, "${1}")
    }

    /// Keep only the final word-segment. Tokens outside the grammar come back unchanged.
    pub fn last_segment<'a>(&self, token: &'a str) -> Cow<'a, str> {
        self.concept_clean.replace(token, "${1}")
    }
}

fn compile(pattern: &str) -> ApiResult<Regex> {
    Regex::new(pattern).map_err(|e| NamespaceError::InvalidPattern(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_multi_segment_tokens() {
        let patterns = SegmentPatterns::default();
        assert!(patterns.is_detected("UsersController"));
        assert!(patterns.is_detected("CategoriesInitializer"));
        assert!(patterns.is_detected("V2Api"));
        assert!(!patterns.is_detected("Dummy"));
        assert!(!patterns.is_detected("HTMLParser"));
        assert!(!patterns.is_detected("usersController"));
    }

    #[test]
    fn test_strip_last_segment() {
        let patterns = SegmentPatterns::default();
        assert_eq!(patterns.strip_last_segment("UsersController"), "Users");
        assert_eq!(patterns.strip_last_segment("MyUsersController"), "MyUsers");
        assert_eq!(patterns.strip_last_segment("Dummy"), "Dummy");
        assert_eq!(patterns.strip_last_segment("HTMLParser"), "HTMLParser");
    }

    #[test]
    fn test_last_segment() {
        let patterns = SegmentPatterns::default();
        assert_eq!(patterns.last_segment("UsersController"), "Controller");
        assert_eq!(patterns.last_segment("MyUsersController"), "Controller");
        assert_eq!(patterns.last_segment("Dummy"), "Dummy");
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let err = SegmentPatterns::with_detect("(unclosed").unwrap_err();
        assert!(matches!(err, NamespaceError::InvalidPattern(_)));
    }
}
