//! Path rendering, resolution and transformation through the resolver

use namescope_api::{EntityKind, NamePath, NamespaceError, NamespaceRegistry, RenderItem, Role};
use namescope_core::{InMemoryRegistry, Resolver, Transformed};
use std::sync::Arc;

fn path(s: &str) -> NamePath {
    NamePath::parse(s).unwrap()
}

/// Registry seeded with the Dummy fixture tree.
fn fixture() -> Resolver {
    let resolver = Resolver::new(Arc::new(InMemoryRegistry::new()));
    for name in [
        "Dummy::Cell::Index",
        "Dummy::Cell::Show",
        "Dummy::Endpoint::Index",
        "Dummy::Dummy::Index",
        "Dummy::UsersController",
    ] {
        resolver.registry().build(&path(name)).unwrap();
    }
    resolver
}

#[test]
fn test_path_classifies_items() {
    let resolver = fixture();

    assert_eq!(resolver.path(["dummy", "cell", "Index"]).unwrap(), "Dummy::Cell::Index");
    assert_eq!(
        resolver.path(["user", "Models", "open_tags", "find"]).unwrap(),
        "User::Model::OpenTag::Find"
    );
    assert_eq!(resolver.path(["Dummy::Cell", "index"]).unwrap(), "Dummy::Cell::Index");
}

#[test]
fn test_path_rejects_empty_items() {
    let resolver = fixture();
    let err = resolver.path(["dummy", ""]).unwrap_err();
    assert!(matches!(err, NamespaceError::InvalidName(_)));
}

#[test]
fn test_resolve_existing() {
    let resolver = fixture();
    let entity = resolver.resolve(["dummy", "cell", "Show"]).unwrap();
    assert_eq!(entity.qualified_name(), "Dummy::Cell::Show");
}

#[test]
fn test_resolve_missing() {
    let resolver = fixture();
    let err = resolver.resolve(["no_such", "path"]).unwrap_err();
    assert_eq!(
        err,
        NamespaceError::NotFound {
            path: "NoSuch::Path".to_string(),
            missing: "NoSuch".to_string(),
        }
    );
}

#[test]
fn test_build_classifies_and_creates() {
    let resolver = fixture();
    assert!(resolver.resolve(["hammer", "commands", "Enter"]).is_err());

    let entity = resolver.build(["hammer", "commands", "Enter"]).unwrap();
    assert_eq!(entity.qualified_name(), "Hammer::Command::Enter");
    assert_eq!(entity.kind, EntityKind::Namespace);
    assert_eq!(resolver.resolve(["Hammer::Command::Enter"]).unwrap(), entity);
}

#[test]
fn test_transform_resolves_role_references() {
    let resolver = fixture();
    let subject = path("Dummy::Cell::Index");

    let result = resolver
        .transform(
            &subject,
            &[Role::Resource.into(), "endpoint".into(), Role::Handle.into()],
            true,
        )
        .unwrap();
    assert_eq!(result.entity().unwrap().qualified_name(), "Dummy::Endpoint::Index");

    let result = resolver
        .transform(
            &subject,
            &[Role::Resource.into(), Role::Section(0).into(), Role::Handle.into()],
            true,
        )
        .unwrap();
    assert_eq!(result.entity().unwrap().qualified_name(), "Dummy::Dummy::Index");

    let result = resolver
        .transform(&path("Dummy::Cell"), &[Role::Scope.into(), "UsersController".into()], true)
        .unwrap();
    assert_eq!(result.entity().unwrap().qualified_name(), "Dummy::UsersController");
}

#[test]
fn test_transform_without_resolving() {
    let resolver = fixture();

    let result = resolver
        .transform(
            &path("Dummy::UsersController"),
            &[Role::Concept.into(), "test".into()],
            false,
        )
        .unwrap();
    assert_eq!(result, Transformed::Path("Controller::Test".to_string()));

    let request: Vec<RenderItem> = ["__resource__", "__service__", "__handle__"]
        .into_iter()
        .map(RenderItem::parse)
        .collect();
    let result = resolver.transform(&path("Dummy::Cell::Index"), &request, false).unwrap();
    assert_eq!(result.path(), Some("Dummy::Cell::Index"));
}

#[test]
fn test_transform_to_missing_target_fails() {
    let resolver = fixture();
    let err = resolver
        .transform(
            &path("Dummy::Cell::Index"),
            &[Role::Resource.into(), "missing".into(), Role::Handle.into()],
            true,
        )
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(!resolver.registry().contains(&path("Dummy::Missing")));
}

#[test]
fn test_transform_with_absent_role() {
    let resolver = fixture();
    let err = resolver
        .transform(&path("Dummy::Cell"), &[Role::Handle.into()], false)
        .unwrap_err();
    assert!(matches!(err, NamespaceError::InvalidName(_)));
}

#[test]
fn test_components() {
    let resolver = fixture();
    let components = resolver.components(&path("Dummy::Cell::Index")).unwrap();
    let names: Vec<String> = components.iter().map(|e| e.qualified_name()).collect();
    assert_eq!(names, ["Dummy", "Dummy::Cell", "Dummy::Cell::Index"]);

    assert!(resolver.components(&path("Dummy::Nope::Index")).is_err());
}
