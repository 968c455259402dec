use crate::error::{ApiResult, NamespaceError};
use crate::models::{Entity, EntityKind, NamePath};
use std::fmt::Debug;

/// Store of realized entities keyed by name path.
///
/// Entries are only ever added. An entry that exists is never replaced,
/// whatever its kind.
pub trait NamespaceRegistry: Send + Sync + Debug {
    /// Fetch the entry stored at exactly this path.
    fn lookup(&self, path: &NamePath) -> Option<Entity>;

    /// Ensure every segment of `path` exists, creating missing ones as empty
    /// namespaces from left to right, then return the entity at `path`.
    fn build(&self, path: &NamePath) -> ApiResult<Entity>;

    /// Register a single entity under an existing namespace parent.
    fn define(&self, path: &NamePath, kind: EntityKind) -> ApiResult<Entity>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, path: &NamePath) -> bool {
        self.lookup(path).is_some()
    }

    /// Fetch an existing entity, failing on the first undefined segment.
    fn resolve(&self, path: &NamePath) -> ApiResult<Entity> {
        let mut found = None;
        for prefix in path.prefixes() {
            match self.lookup(&prefix) {
                Some(entity) => found = Some(entity),
                None => {
                    return Err(NamespaceError::NotFound {
                        path: path.render(),
                        missing: prefix.render(),
                    });
                }
            }
        }
        found.ok_or_else(|| NamespaceError::NotFound {
            path: path.render(),
            missing: path.render(),
        })
    }
}
