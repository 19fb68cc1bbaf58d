//! Tests for registry construction and finishing.

use runtype::{
    array, create_validator, num, optional, props, str, Property, RegistryError, ValidatorRegistry,
};
use serde_json::json;

#[test]
fn test_index_and_get() {
    let registry = ValidatorRegistry::new();
    registry.index("Email", str());
    registry.index("UserId", num());

    assert!(registry.get("Email").is_some());
    assert!(registry.get("Unknown").is_none());
    assert_eq!(registry.keys(), vec!["Email", "UserId"]);
    assert!(!registry.is_empty());
}

#[test]
fn test_manual_finish() {
    let registry = ValidatorRegistry::new();
    let user = props([
        Property::field("id", registry.provider("UserId")),
        Property::field("email", registry.provider("Email")),
    ]);
    registry.index("UserId", num());
    registry.index("Email", str());

    assert!(registry.unresolved().is_empty());
    let user = registry.finish(user).unwrap();
    assert!(user.is_valid(&json!({"id": 1, "email": "a@b.c"})));
    assert!(!user.is_valid(&json!({"id": "1", "email": "a@b.c"})));
}

#[test]
fn test_unresolved_keys_reported_together() {
    let result = create_validator(|registry| {
        props([
            Property::field("a", registry.provider("Beta")),
            Property::field("b", array(registry.provider("Alpha"))),
            Property::field("c", optional(registry.provider("Beta"))),
        ])
    });

    let err = result.unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnresolvedKeys(vec!["Alpha".to_string(), "Beta".to_string()])
    );
    assert!(err.to_string().contains("Alpha"));
}

#[test]
fn test_duplicate_key_error_message() {
    let err = create_validator(|registry| {
        registry.index("Node", num());
        registry.index("Node", num())
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "validator key 'Node' already registered");
}

#[test]
fn test_provider_key() {
    let registry = ValidatorRegistry::new();
    let provider = registry.provider("Thing");
    assert_eq!(provider.key(), "Thing");
}

#[test]
fn test_unregistered_provider_error_message() {
    let registry = ValidatorRegistry::new();
    let err = registry.provider("Ghost").resolve().unwrap_err();
    assert_eq!(err.to_string(), "unable to find validator for key 'Ghost'");
}

#[test]
fn test_finished_graph_keeps_storage_alive() {
    let validator = {
        let registry = ValidatorRegistry::new();
        let list = registry.index(
            "List",
            props([
                Property::field("head", num()),
                Property::field("tail", optional(registry.provider("List"))),
            ]),
        );
        registry.finish(list).unwrap()
    };

    let clone = validator.clone();
    drop(validator);
    assert!(clone.is_valid(&json!({"head": 1, "tail": {"head": 2}})));
}
