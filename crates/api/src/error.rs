use crate::models::entity::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    #[error("Not found: {path} ({missing} is undefined)")]
    NotFound { path: String, missing: String },
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),
    #[error("Collision at {path}: existing {kind} entry cannot be replaced or extended")]
    Collision { path: String, kind: EntityKind },
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

impl NamespaceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, NamespaceError::NotFound { .. })
    }
}

pub type ApiResult<T> = std::result::Result<T, NamespaceError>;
