use super::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A derived semantic view over a name path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Scope,
    Concept,
    Resource,
    Service,
    /// Token at a position; negative positions count from the end.
    Section(isize),
    Handle,
}

impl Role {
    /// The `__role__` spelling used for role references in render requests.
    pub fn reference(&self) -> String {
        match self {
            Role::Scope => "__scope__".to_string(),
            Role::Concept => "__concept__".to_string(),
            Role::Resource => "__resource__".to_string(),
            Role::Service => "__service__".to_string(),
            Role::Section(0) => "__section__".to_string(),
            Role::Section(pos) => format!("__section:{}__", pos),
            Role::Handle => "__handle__".to_string(),
        }
    }

    /// Parse a `__role__` reference. `__section:N__` selects a section position.
    pub fn from_reference(s: &str) -> Option<Role> {
        let inner = s.strip_prefix("__")?.strip_suffix("__")?;
        match inner {
            "scope" => Some(Role::Scope),
            "concept" => Some(Role::Concept),
            "resource" => Some(Role::Resource),
            "service" => Some(Role::Service),
            "section" => Some(Role::Section(0)),
            "handle" => Some(Role::Handle),
            other => other
                .strip_prefix("section:")
                .and_then(|pos| pos.parse().ok())
                .map(Role::Section),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_reference(s).ok_or_else(|| format!("not a role reference: {}", s))
    }
}

/// One element of a render request: a literal word or a role to look up on the subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderItem {
    Literal(String),
    Role(Role),
}

impl RenderItem {
    /// Treats `__role__` spellings as role references and anything else as a literal.
    pub fn parse(s: &str) -> Self {
        match Role::from_reference(s) {
            Some(role) => RenderItem::Role(role),
            None => RenderItem::Literal(s.to_string()),
        }
    }
}

impl From<&str> for RenderItem {
    fn from(s: &str) -> Self {
        RenderItem::Literal(s.to_string())
    }
}

impl From<String> for RenderItem {
    fn from(s: String) -> Self {
        RenderItem::Literal(s)
    }
}

impl From<&Token> for RenderItem {
    fn from(t: &Token) -> Self {
        RenderItem::Literal(t.to_string())
    }
}

impl From<Role> for RenderItem {
    fn from(role: Role) -> Self {
        RenderItem::Role(role)
    }
}
