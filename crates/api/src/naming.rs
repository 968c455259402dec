use crate::error::ApiResult;
use crate::models::{NamePath, SEPARATOR};
use std::fmt::Debug;

/// Defines how qualified names are split into tokens and joined back.
pub trait NamingConvention: Send + Sync + Debug {
    /// The qualifier separator (e.g. "::").
    fn separator(&self) -> &str;

    /// Parse a flat qualified name into its tokens.
    fn tokenize(&self, qualified: &str) -> ApiResult<NamePath> {
        NamePath::parse_with(qualified, self.separator())
    }

    /// Render a path back into a flat qualified name.
    fn render(&self, path: &NamePath) -> String {
        path.render_with(self.separator())
    }
}

/// The default "::" convention (`User::Endpoint::Index`).
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleColonConvention;

impl NamingConvention for DoubleColonConvention {
    fn separator(&self) -> &str {
        SEPARATOR
    }
}

/// Word-casing transforms the analyzer depends on.
///
/// Implementations only need to honor the contracts below; the analyzer
/// never inspects how they are achieved.
pub trait WordCasing: Send + Sync + Debug {
    /// Arbitrary word or identifier to a singular title-case token
    /// (`"open_tags"` -> `"OpenTag"`, `"commands"` -> `"Command"`).
    fn classify(&self, word: &str) -> String;

    /// Title-case token to lowercase underscored form (`"UserHandler"` -> `"user_handler"`).
    fn underscore(&self, token: &str) -> String;

    /// Plural word to singular (`"categories"` -> `"category"`).
    fn singularize(&self, word: &str) -> String;
}
