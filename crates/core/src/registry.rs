//! In-memory implementation of NamespaceRegistry.
//!
//! Each path segment is created through the map's entry API, so concurrent
//! builds over overlapping prefixes create every missing segment exactly once.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use namescope_api::{
    ApiResult, Entity, EntityId, EntityKind, NamePath, NamespaceError, NamespaceRegistry,
};
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Thread-safe in-memory registry
#[derive(Debug)]
pub struct InMemoryRegistry {
    entries: DashMap<NamePath, Entity>,
    next_id: AtomicU32,
}

/// Process-wide registry shared by every caller that does not inject its own.
static GLOBAL_REGISTRY: Lazy<Arc<InMemoryRegistry>> =
    Lazy::new(|| Arc::new(InMemoryRegistry::new()));

pub fn global_registry() -> Arc<dyn NamespaceRegistry> {
    GLOBAL_REGISTRY.clone()
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    fn allocate(&self, path: &NamePath, kind: EntityKind) -> Entity {
        Entity {
            id: EntityId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            path: path.clone(),
            kind,
        }
    }

    /// Get or create one segment. Returns the stored entity and whether it was created.
    fn ensure_namespace(&self, path: &NamePath) -> (Entity, bool) {
        match self.entries.entry(path.clone()) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => {
                let entity = self.allocate(path, EntityKind::Namespace);
                entry.insert(entity.clone());
                (entity, true)
            }
        }
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<NamePath> {
        let mut paths: Vec<NamePath> = self.entries.iter().map(|e| e.key().clone()).collect();
        paths.sort();
        paths
    }
}

impl NamespaceRegistry for InMemoryRegistry {
    fn lookup(&self, path: &NamePath) -> Option<Entity> {
        self.entries.get(path).map(|e| e.value().clone())
    }

    fn build(&self, path: &NamePath) -> ApiResult<Entity> {
        let depth = path.len();
        for (index, prefix) in path.prefixes().enumerate() {
            let (entity, created) = self.ensure_namespace(&prefix);
            if created {
                tracing::debug!("Created namespace {}", prefix);
            } else {
                tracing::trace!("Reusing {} {}", entity.kind, prefix);
            }

            let is_target = index + 1 == depth;
            if !is_target && !entity.kind.is_container() {
                tracing::warn!("Cannot build {} through {} {}", path, entity.kind, prefix);
                return Err(NamespaceError::Collision {
                    path: prefix.render(),
                    kind: entity.kind,
                });
            }
        }

        self.resolve(path)
    }

    fn define(&self, path: &NamePath, kind: EntityKind) -> ApiResult<Entity> {
        if let Some(parent) = path.parent() {
            let parent_entity = self.resolve(&parent)?;
            if !parent_entity.kind.is_container() {
                return Err(NamespaceError::Collision {
                    path: parent.render(),
                    kind: parent_entity.kind,
                });
            }
        }

        match self.entries.entry(path.clone()) {
            Entry::Occupied(entry) if entry.get().kind == kind => Ok(entry.get().clone()),
            Entry::Occupied(entry) => Err(NamespaceError::Collision {
                path: path.render(),
                kind: entry.get().kind,
            }),
            Entry::Vacant(entry) => {
                let entity = self.allocate(path, kind);
                entry.insert(entity.clone());
                tracing::debug!("Defined {} {}", kind, path);
                Ok(entity)
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
