pub mod error;
pub mod models;
pub mod naming;
pub mod registry;
pub mod subject;

// Re-export commonly used types
pub use error::{ApiResult, NamespaceError};
pub use models::*;
pub use naming::{DoubleColonConvention, NamingConvention, WordCasing};
pub use registry::NamespaceRegistry;
pub use subject::Named;
