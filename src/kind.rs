//! Runtime kind classification.
//!
//! Every primitive and structural check classifies its candidate through
//! [`type_name`], so `null` and arrays are never mistaken for objects.

use std::fmt::{self, Display};

use serde_json::Value;

/// The runtime kind of a candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Number,
    String,
    Boolean,
    Null,
    Object,
    Array,
    /// The candidate is absent, e.g. a property the accessor could not find.
    Undefined,
}

impl TypeName {
    /// Returns the name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Number => "number",
            TypeName::String => "string",
            TypeName::Boolean => "boolean",
            TypeName::Null => "null",
            TypeName::Object => "object",
            TypeName::Array => "Array",
            TypeName::Undefined => "undefined",
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a candidate value. `None` is the undefined marker.
///
/// # Example
///
/// ```rust
/// use runtype::{type_name, TypeName};
/// use serde_json::json;
///
/// assert_eq!(type_name(Some(&json!(null))), TypeName::Null);
/// assert_eq!(type_name(Some(&json!([1, 2]))), TypeName::Array);
/// assert_eq!(type_name(None), TypeName::Undefined);
/// ```
pub fn type_name(value: Option<&Value>) -> TypeName {
    match value {
        None => TypeName::Undefined,
        Some(Value::Null) => TypeName::Null,
        Some(Value::Bool(_)) => TypeName::Boolean,
        Some(Value::Number(_)) => TypeName::Number,
        Some(Value::String(_)) => TypeName::String,
        Some(Value::Array(_)) => TypeName::Array,
        Some(Value::Object(_)) => TypeName::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifies_every_kind() {
        assert_eq!(type_name(Some(&json!(1.5))), TypeName::Number);
        assert_eq!(type_name(Some(&json!("a"))), TypeName::String);
        assert_eq!(type_name(Some(&json!(false))), TypeName::Boolean);
        assert_eq!(type_name(Some(&json!(null))), TypeName::Null);
        assert_eq!(type_name(Some(&json!({}))), TypeName::Object);
        assert_eq!(type_name(Some(&json!([]))), TypeName::Array);
        assert_eq!(type_name(None), TypeName::Undefined);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TypeName::Boolean.to_string(), "boolean");
        assert_eq!(TypeName::Array.to_string(), "Array");
        assert_eq!(TypeName::Undefined.to_string(), "undefined");
    }
}
