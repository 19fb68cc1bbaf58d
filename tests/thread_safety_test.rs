//! Tests for sharing one validator graph across threads.

use runtype::{create_validator, num, optional, props, str, Property, Validator};
use serde_json::json;
use std::thread;

fn user_validator() -> Validator {
    create_validator(|registry| {
        registry.index(
            "User",
            props([
                Property::field("name", str()),
                Property::field("age", num()),
                Property::field("manager", optional(registry.provider("User"))),
            ]),
        )
    })
    .unwrap()
}

#[test]
fn test_concurrent_validation() {
    let validator = user_validator();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let validator = validator.clone();
            thread::spawn(move || {
                let result = validator.validate(&json!({
                    "name": format!("User{}", i),
                    "age": 20 + i,
                    "manager": {"name": "Boss", "age": 50}
                }));
                assert!(result.is_valid());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_failures_are_identical() {
    let validator = user_validator();
    let candidate = json!({"name": "A", "age": "x", "manager": {"name": 1, "age": 2}});
    let expected = validator.validate(&candidate);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let validator = validator.clone();
            let candidate = candidate.clone();
            thread::spawn(move || validator.validate(&candidate))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_validate_batch() {
    let validator = user_validator();
    let values: Vec<_> = (0..100)
        .map(|i| {
            if i % 10 == 0 {
                json!({"name": i, "age": i})
            } else {
                json!({"name": format!("User{}", i), "age": i})
            }
        })
        .collect();

    let results = validator.validate_batch(&values);
    assert_eq!(results.len(), 100);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.is_valid(), i % 10 != 0, "index {}", i);
    }
}
