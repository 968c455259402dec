use namescope_api::{NamespaceError, NamingConvention};

/// A convention with a configurable qualifier separator.
#[derive(Debug, Clone)]
pub struct SeparatorConvention {
    separator: String,
}

impl SeparatorConvention {
    pub fn new(separator: impl Into<String>) -> Result<Self, NamespaceError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(NamespaceError::InvalidName(
                "separator must not be empty".to_string(),
            ));
        }
        Ok(Self { separator })
    }
}

impl NamingConvention for SeparatorConvention {
    fn separator(&self) -> &str {
        &self.separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namescope_api::DoubleColonConvention;

    #[test]
    fn test_tokenize_and_render() {
        let convention = DoubleColonConvention;
        let path = convention.tokenize("User::Endpoint::Index").unwrap();
        assert_eq!(path.tokens(), ["User", "Endpoint", "Index"]);
        assert_eq!(convention.render(&path), "User::Endpoint::Index");
    }

    #[test]
    fn test_custom_separator() {
        let convention = SeparatorConvention::new("/").unwrap();
        let path = convention.tokenize("Admin/Home/Cell").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(convention.render(&path), "Admin/Home/Cell");
        assert!(SeparatorConvention::new("").is_err());
    }
}
