//! Sum-type validation.

use serde_json::Value;

use crate::result::ValidationResult;

use super::primitive::{undefined, value};
use super::traits::{Validator, ValidatorOrProvider, ValueValidator};

/// Accepts a value matching at least one alternative.
///
/// Alternatives are tried in order and the first match wins. When none
/// match, every alternative's failure is kept, in order.
#[derive(Debug, Clone)]
pub struct UnionValidator {
    alternatives: Vec<ValidatorOrProvider>,
}

impl UnionValidator {
    /// # Panics
    ///
    /// Panics if `alternatives` is empty; such a union can never succeed.
    pub fn new(alternatives: Vec<ValidatorOrProvider>) -> Self {
        assert!(
            !alternatives.is_empty(),
            "a union needs at least one alternative"
        );
        Self { alternatives }
    }

    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Always false; see [`UnionValidator::new`].
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl ValueValidator for UnionValidator {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        let mut parts = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.get().validate_optional(value) {
                ValidationResult::Valid => return ValidationResult::Valid,
                failure => parts.push(failure),
            }
        }
        ValidationResult::InvalidUnion { parts }
    }
}

/// Builds a union of alternatives.
///
/// # Panics
///
/// Panics if no alternative is given.
///
/// # Example
///
/// ```rust
/// use runtype::{num, or, props, value, Property, ValidationResult};
/// use serde_json::json;
///
/// let maybe_item = or([value(json!(null)), props([Property::field("id", num())])]);
///
/// assert!(maybe_item.is_valid(&json!(null)));
/// match maybe_item.validate(&json!({"id": "x"})) {
///     ValidationResult::InvalidUnion { parts } => assert_eq!(parts.len(), 2),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
pub fn or<I>(alternatives: I) -> Validator
where
    I: IntoIterator,
    I::Item: Into<ValidatorOrProvider>,
{
    Validator::new(UnionValidator::new(
        alternatives.into_iter().map(Into::into).collect(),
    ))
}

/// Accepts an absent value, `null`, or anything `inner` accepts.
///
/// This is `or(undefined(), value(null), inner)`.
pub fn optional(inner: impl Into<ValidatorOrProvider>) -> Validator {
    or([
        ValidatorOrProvider::from(undefined()),
        ValidatorOrProvider::from(value(Value::Null)),
        inner.into(),
    ])
}
