//! Fail-fast entry point for values crossing a trust boundary.

use std::borrow::Borrow;

use serde_json::Value;
use tracing::debug;

use crate::describe::Describer;
use crate::error::TypeAssertionError;
use crate::validator::Validator;

/// Asserts that `value` has the shape `validator` describes.
///
/// On success the value is handed back unchanged, so the call can sit in
/// expression position. On failure the error message is the full report,
/// with paths rooted at `name`.
///
/// # Errors
///
/// Returns `TypeAssertionError` if validation fails.
///
/// # Example
///
/// ```rust
/// use runtype::{assert_valid_type, num, props, Property};
/// use serde_json::json;
///
/// let point = props([Property::field("x", num()), Property::field("y", num())]);
///
/// let value = assert_valid_type("point", json!({"x": 1, "y": 2}), &point).unwrap();
/// assert_eq!(value["x"], 1);
///
/// let err = assert_valid_type("point", &json!({"x": 1}), &point).unwrap_err();
/// assert!(err.to_string().contains(r#"point.y: expected type "number" but was undefined"#));
/// ```
pub fn assert_valid_type<V>(
    name: &str,
    value: V,
    validator: &Validator,
) -> Result<V, TypeAssertionError>
where
    V: Borrow<Value>,
{
    let result = validator.validate(value.borrow());
    if result.is_valid() {
        return Ok(value);
    }

    let report = Describer::default().describe(&result, name);
    debug!(root = name, mismatches = result.leaf_count(), "runtime type assertion failed");
    Err(TypeAssertionError::new(name, report, result))
}
