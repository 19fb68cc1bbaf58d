//! Kind checks and exact-value checks.

use serde_json::Value;

use crate::kind::{type_name, TypeName};
use crate::result::{Literal, ValidationResult};

use super::traits::{Validator, ValueValidator};

/// Accepts exactly one runtime kind.
#[derive(Debug, Clone, Copy)]
pub struct KindValidator {
    expected: TypeName,
}

impl KindValidator {
    /// Creates a validator accepting only `expected`.
    pub fn new(expected: TypeName) -> Self {
        Self { expected }
    }

    /// Returns the accepted kind.
    pub fn expected(&self) -> TypeName {
        self.expected
    }
}

impl ValueValidator for KindValidator {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        let actual = type_name(value);
        if actual == self.expected {
            ValidationResult::Valid
        } else {
            ValidationResult::InvalidType {
                expected: self.expected,
                actual,
            }
        }
    }
}

/// Accepts only values equal to one literal.
#[derive(Debug, Clone)]
pub struct LiteralValidator {
    expected: Literal,
}

impl LiteralValidator {
    /// Creates a validator accepting only `expected`.
    pub fn new(expected: Literal) -> Self {
        Self { expected }
    }
}

impl ValueValidator for LiteralValidator {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        if self.expected.matches(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::InvalidValue {
                expected: self.expected.clone(),
                actual: Literal::of(value),
            }
        }
    }
}

/// Accepts any number.
pub fn num() -> Validator {
    Validator::new(KindValidator::new(TypeName::Number))
}

/// Accepts any string.
pub fn str() -> Validator {
    Validator::new(KindValidator::new(TypeName::String))
}

/// Accepts `true` and `false`.
pub fn bool() -> Validator {
    Validator::new(KindValidator::new(TypeName::Boolean))
}

/// Accepts only `expected`, compared with same-value semantics.
///
/// Literal types such as `null`, enum members, or tag strings are encoded
/// with this validator.
///
/// # Example
///
/// ```rust
/// use runtype::{value, ValidationResult};
/// use serde_json::json;
///
/// let tag = value("ping");
/// assert!(tag.is_valid(&json!("ping")));
/// assert!(matches!(
///     tag.validate(&json!("pang")),
///     ValidationResult::InvalidValue { .. }
/// ));
/// ```
pub fn value(expected: impl Into<Literal>) -> Validator {
    Validator::new(LiteralValidator::new(expected.into()))
}

/// Accepts only an absent value.
pub fn undefined() -> Validator {
    value(Literal::Undefined)
}
