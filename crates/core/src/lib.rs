pub mod analyzer;
pub mod config;
pub mod error;
pub mod inflect;
pub mod info;
pub mod logging;
pub mod namespace;
pub mod naming;
pub mod pattern;
pub mod registry;
pub mod resolver;

pub use analyzer::{RoleAnalyzer, RoleSet};
pub use config::NamescopeConfig;
pub use error::Result;
pub use inflect::EnglishInflector;
pub use namespace::{Namespace, NamespaceExt};
pub use naming::SeparatorConvention;
pub use registry::{InMemoryRegistry, global_registry};
pub use resolver::{Resolver, Transformed};

/// Version of the namescope crates.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
