#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use apispec_gen::registry::{load_registry, ModelResolver, SqlType, TypeRef};
use common::temp_files::create_temp_registry;

#[test]
fn test_load_fixture_registry() {
    let registry = load_registry(&common::fixture_registry()).unwrap();

    let names: Vec<_> = registry.collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["vms", "templates", "hosts", "ping", "settings"]);
    assert_eq!(registry.models.len(), 2);

    let vms = &registry.collections[0];
    assert_eq!(vms.backing_model, Some(TypeRef::new("Vm")));
    assert_eq!(vms.verbs, ["get", "post", "patch", "delete"]);
    assert!(registry.collections[4].verbs.is_empty());
}

#[test]
fn test_column_types_are_normalised() {
    let (_dir, path) = create_temp_registry(
        r#"
models:
  Event:
    columns:
      - { name: id, type: " Integer " }
      - { name: at, type: DATETIME }
      - { name: payload, type: " HStore " }
"#,
    );
    let registry = load_registry(&path).unwrap();
    let event = registry.models.resolve(&TypeRef::new("Event")).unwrap();
    let types: Vec<_> = event.columns.iter().map(|c| c.sql_type.clone()).collect();
    assert_eq!(
        types,
        [
            SqlType::Integer,
            SqlType::Datetime,
            SqlType::Other(" HStore ".to_string())
        ]
    );
}

#[test]
fn test_unknown_model_resolution_error() {
    let (_dir, path) = create_temp_registry("collections:\n  vms:\n    klass: Vm\n");
    let registry = load_registry(&path).unwrap();
    let err = registry.models.resolve(&TypeRef::new("Vm")).unwrap_err();
    assert_eq!(err.model, TypeRef::new("Vm"));
    assert_eq!(err.to_string(), "unknown backing model `Vm`");
}

#[test]
fn test_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yml");
    let err = load_registry(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.yml"));
}

#[test]
fn test_malformed_column_is_error() {
    let (_dir, path) = create_temp_registry("models:\n  Vm:\n    columns:\n      - { name: id }\n");
    let err = load_registry(&path).unwrap_err();
    assert!(format!("{err:#}").contains("api.yml"));
}
