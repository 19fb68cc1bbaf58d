//! Validation outcomes.
//!
//! A [`ValidationResult`] is plain data: every mismatch found during
//! evaluation is recorded in the tree and returned, nothing is raised.

use std::fmt::{self, Display};

use serde_json::Value;

use crate::kind::{type_name, TypeName};

/// A concrete literal, or the undefined marker.
///
/// This is the payload of [`ValidationResult::InvalidValue`] and the argument
/// of [`value`](crate::value).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Undefined,
    Value(Value),
    /// `NaN` or an infinity. A JSON value cannot hold one, so this never
    /// matches a candidate.
    NonFinite(f64),
}

impl Literal {
    /// Builds a literal from an evaluated candidate.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            Some(v) => Literal::Value(v.clone()),
            None => Literal::Undefined,
        }
    }

    /// Returns the runtime kind of this literal.
    pub fn type_name(&self) -> TypeName {
        match self {
            Literal::Undefined => TypeName::Undefined,
            Literal::Value(v) => type_name(Some(v)),
            Literal::NonFinite(_) => TypeName::Number,
        }
    }

    /// Returns true if `candidate` is the same value as this literal.
    ///
    /// Numbers compare numerically, so `1` and `1.0` match while `0` and
    /// `-0.0` do not. Arrays and objects compare member by member.
    pub fn matches(&self, candidate: Option<&Value>) -> bool {
        match (self, candidate) {
            (Literal::Undefined, None) => true,
            (Literal::Value(expected), Some(actual)) => same_value(expected, actual),
            _ => false,
        }
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        Literal::Value(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Value(Value::from(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Value(Value::Bool(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Value(Value::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(number) => Literal::Value(Value::Number(number)),
            None => Literal::NonFinite(value),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Undefined => f.write_str("undefined"),
            Literal::Value(Value::String(s)) => f.write_str(s),
            Literal::Value(v) => write!(f, "{}", v),
            Literal::NonFinite(n) if n.is_nan() => f.write_str("NaN"),
            Literal::NonFinite(n) if *n > 0.0 => f.write_str("Infinity"),
            Literal::NonFinite(_) => f.write_str("-Infinity"),
        }
    }
}

fn same_value(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                return a == b;
            }
            if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                return a == b;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a.to_bits() == b.to_bits(),
                _ => false,
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_value(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| same_value(x, y)))
        }
        (a, b) => a == b,
    }
}

/// A named property whose value failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidProperty {
    pub name: String,
    pub result: ValidationResult,
}

/// A sequence element that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidItem {
    pub index: usize,
    pub result: ValidationResult,
}

/// The outcome of evaluating a validator against one candidate.
///
/// Nested failures always lead down to an `InvalidType` or `InvalidValue`
/// leaf, and every step carries the property name or index it descended
/// through, so the full access path of each mismatch can be rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    InvalidType {
        expected: TypeName,
        actual: TypeName,
    },
    InvalidValue {
        expected: Literal,
        actual: Literal,
    },
    InvalidProperties {
        properties: Vec<InvalidProperty>,
    },
    /// Every alternative of a union failed; parts are in declaration order.
    InvalidUnion {
        parts: Vec<ValidationResult>,
    },
    InvalidArrayItems {
        items: Vec<InvalidItem>,
    },
}

impl ValidationResult {
    /// Builds a kind mismatch for `actual`.
    pub fn invalid_type(expected: TypeName, actual: Option<&Value>) -> Self {
        ValidationResult::InvalidType {
            expected,
            actual: type_name(actual),
        }
    }

    /// Returns true for [`ValidationResult::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns true for any mismatch.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Counts the `InvalidType` and `InvalidValue` leaves in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            ValidationResult::Valid => 0,
            ValidationResult::InvalidType { .. } | ValidationResult::InvalidValue { .. } => 1,
            ValidationResult::InvalidProperties { properties } => {
                properties.iter().map(|p| p.result.leaf_count()).sum()
            }
            ValidationResult::InvalidUnion { parts } => parts.iter().map(Self::leaf_count).sum(),
            ValidationResult::InvalidArrayItems { items } => {
                items.iter().map(|i| i.result.leaf_count()).sum()
            }
        }
    }
}
