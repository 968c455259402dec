use namescope_api::NamespaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamescopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Namespace(#[from] NamespaceError),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NamescopeError>;
