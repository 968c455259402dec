//! Registry build/resolve semantics

use namescope_api::{EntityKind, NamePath, NamespaceError, NamespaceRegistry};
use namescope_core::InMemoryRegistry;
use std::sync::Arc;
use std::thread;

fn path(s: &str) -> NamePath {
    NamePath::parse(s).unwrap()
}

#[test]
fn test_resolve_missing_path() {
    let registry = InMemoryRegistry::new();
    let err = registry.resolve(&path("NoSuch::Path")).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Not found: NoSuch::Path (NoSuch is undefined)"
    );
}

#[test]
fn test_build_is_idempotent() {
    let registry = InMemoryRegistry::new();

    let first = registry.build(&path("Dummy::Cell::Index")).unwrap();
    let second = registry.build(&path("Dummy::Cell::Index")).unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_build_leaves_siblings_untouched() {
    let registry = InMemoryRegistry::new();

    let cell = registry.build(&path("Dummy::Cell::Index")).unwrap();
    let root = registry.resolve(&path("Dummy")).unwrap();
    let endpoint = registry.build(&path("Dummy::Endpoint::Index")).unwrap();

    assert_ne!(cell.id, endpoint.id);
    assert_eq!(registry.resolve(&path("Dummy")).unwrap(), root);
    assert_eq!(registry.resolve(&path("Dummy::Cell::Index")).unwrap(), cell);
    assert_eq!(registry.len(), 5);
}

#[test]
fn test_build_reuses_existing_leaf_target() {
    let registry = InMemoryRegistry::new();
    registry.build(&path("Dummy")).unwrap();
    let leaf = registry.define(&path("Dummy::Base"), EntityKind::Leaf).unwrap();

    let built = registry.build(&path("Dummy::Base")).unwrap();
    assert_eq!(built, leaf);
    assert_eq!(built.kind, EntityKind::Leaf);
}

#[test]
fn test_build_through_leaf_is_a_collision() {
    let registry = InMemoryRegistry::new();
    registry.build(&path("Dummy")).unwrap();
    registry.define(&path("Dummy::Base"), EntityKind::Leaf).unwrap();

    let err = registry.build(&path("Dummy::Base::Child")).unwrap_err();
    assert_eq!(
        err,
        NamespaceError::Collision {
            path: "Dummy::Base".to_string(),
            kind: EntityKind::Leaf,
        }
    );
    assert!(!registry.contains(&path("Dummy::Base::Child")));
    assert_eq!(registry.lookup(&path("Dummy::Base")).unwrap().kind, EntityKind::Leaf);
}

#[test]
fn test_concurrent_builds_create_each_segment_once() {
    let registry = Arc::new(InMemoryRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let target = if i % 2 == 0 {
                    "Shared::Prefix::Left"
                } else {
                    "Shared::Prefix::Right"
                };
                registry.build(&path(target)).unwrap()
            })
        })
        .collect();

    let built: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(registry.len(), 4);
    let left = registry.resolve(&path("Shared::Prefix::Left")).unwrap();
    for (i, entity) in built.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(entity, &left);
        }
    }
}
