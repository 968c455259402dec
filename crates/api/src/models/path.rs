use super::token::Token;
use crate::error::{ApiResult, NamespaceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The qualifier separator of the title-case naming convention.
pub const SEPARATOR: &str = "::";

/// An ordered, non-empty sequence of tokens naming a nested entity.
///
/// Every token is non-empty, free of the separator and does not begin or end
/// with part of it, so rendering a path and parsing it back yields the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct NamePath {
    tokens: Vec<Token>,
}

impl NamePath {
    pub fn new<I, T>(tokens: I) -> ApiResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let tokens: Vec<Token> = tokens.into_iter().map(Into::into).collect();
        Self::from_tokens(tokens, SEPARATOR)
    }

    /// Split a `::`-qualified name into its tokens.
    pub fn parse(qualified: &str) -> ApiResult<Self> {
        Self::parse_with(qualified, SEPARATOR)
    }

    /// Split a qualified name on a custom separator.
    pub fn parse_with(qualified: &str, separator: &str) -> ApiResult<Self> {
        if separator.is_empty() {
            return Err(NamespaceError::InvalidName(format!(
                "empty separator for '{}'",
                qualified
            )));
        }
        let tokens = qualified.split(separator).map(Token::from).collect();
        Self::from_tokens(tokens, separator)
    }

    fn from_tokens(tokens: Vec<Token>, separator: &str) -> ApiResult<Self> {
        if tokens.is_empty() {
            return Err(NamespaceError::InvalidName("path has no tokens".to_string()));
        }
        for token in &tokens {
            let raw = token.as_str();
            if raw.is_empty() || straddles(raw, SEPARATOR) || straddles(raw, separator) {
                return Err(NamespaceError::InvalidName(format!(
                    "invalid token '{}' in [{}]",
                    raw,
                    tokens
                        .iter()
                        .map(Token::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
        }
        Ok(Self { tokens })
    }

    pub fn render(&self) -> String {
        self.render_with(SEPARATOR)
    }

    pub fn render_with(&self, separator: &str) -> String {
        self.tokens
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens. Always at least one.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &Token {
        &self.tokens[0]
    }

    pub fn last(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Sequence indexing where negative positions count from the end.
    pub fn get(&self, pos: isize) -> Option<&Token> {
        let len = self.tokens.len() as isize;
        let index = if pos < 0 { len + pos } else { pos };
        if (0..len).contains(&index) {
            self.tokens.get(index as usize)
        } else {
            None
        }
    }

    /// The path made of the first `len` tokens.
    pub fn prefix(&self, len: usize) -> Option<NamePath> {
        if len == 0 || len > self.tokens.len() {
            return None;
        }
        Some(Self {
            tokens: self.tokens[..len].to_vec(),
        })
    }

    /// Cumulative prefixes from the root token down to the full path.
    pub fn prefixes(&self) -> impl Iterator<Item = NamePath> + '_ {
        (1..=self.tokens.len()).map(|len| Self {
            tokens: self.tokens[..len].to_vec(),
        })
    }

    pub fn parent(&self) -> Option<NamePath> {
        self.prefix(self.tokens.len() - 1)
    }
}

/// Whether `token` would merge with a neighbouring separator once rendered:
/// it contains the separator, or begins or ends with part of it (`"A:"` for `::`).
fn straddles(token: &str, separator: &str) -> bool {
    token.contains(separator)
        || separator
            .char_indices()
            .skip(1)
            .any(|(i, _)| token.ends_with(&separator[..i]) || token.starts_with(&separator[i..]))
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for NamePath {
    type Err = NamespaceError;

    fn from_str(s: &str) -> ApiResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Token>> for NamePath {
    type Error = NamespaceError;

    fn try_from(tokens: Vec<Token>) -> ApiResult<Self> {
        Self::from_tokens(tokens, SEPARATOR)
    }
}

impl From<NamePath> for Vec<Token> {
    fn from(path: NamePath) -> Self {
        path.tokens
    }
}
