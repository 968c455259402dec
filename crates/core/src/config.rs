//! Configuration for assembling a resolver.

use crate::error::{NamescopeError, Result};
use crate::pattern::SegmentPatterns;
use namescope_api::SEPARATOR;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamescopeConfig {
    /// Qualifier separator used to split and join names.
    pub separator: String,

    /// Overrides the multi-segment pattern `concept` and `resource` detect tokens with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_pattern: Option<String>,

    /// Qualified names built into the registry when a resolver is assembled.
    pub preload: Vec<String>,
}

impl Default for NamescopeConfig {
    fn default() -> Self {
        Self {
            separator: SEPARATOR.to_string(),
            detect_pattern: None,
            preload: Vec::new(),
        }
    }
}

impl NamescopeConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: NamescopeConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(NamescopeError::Config(
                "separator must not be empty".to_string(),
            ));
        }
        if let Some(pattern) = &self.detect_pattern {
            SegmentPatterns::with_detect(pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: NamescopeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NamescopeConfig::default());
        assert_eq!(config.separator, "::");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"detect_pattern": "^(?:[A-Z][a-z]+){{3,}}$", "preload": ["Dummy::Cell::Index"]}}"#
        )
        .unwrap();

        let config = NamescopeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.preload, ["Dummy::Cell::Index"]);
        assert_eq!(config.detect_pattern.as_deref(), Some("^(?:[A-Z][a-z]+){3,}$"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = NamescopeConfig {
            separator: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(NamescopeError::Config(_))));

        let config = NamescopeConfig {
            detect_pattern: Some("(".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(NamescopeError::Namespace(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = NamescopeConfig::from_file("/nonexistent/namescope.json").unwrap_err();
        assert!(matches!(err, NamescopeError::Io(_)));
    }
}
