//! Structural validation of an object's declared properties.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::kind::TypeName;
use crate::result::{InvalidProperty, ValidationResult};

use super::traits::{Validator, ValidatorOrProvider, ValueValidator};

/// Extracts a member from a candidate object. `None` means absent.
pub type Accessor = Arc<dyn for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync>;

/// A declared property: its name, how to read it, and its expected shape.
#[derive(Clone)]
pub struct Property {
    name: String,
    accessor: Accessor,
    validator: ValidatorOrProvider,
}

impl Property {
    /// Creates a property with a custom accessor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runtype::{num, Property};
    /// use serde_json::Value;
    ///
    /// let first = Property::new("first", |v: &Value| v.get("coords")?.get(0), num());
    /// assert_eq!(first.name(), "first");
    /// ```
    pub fn new<F>(
        name: impl Into<String>,
        accessor: F,
        validator: impl Into<ValidatorOrProvider>,
    ) -> Self
    where
        F: for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            accessor: Arc::new(accessor),
            validator: validator.into(),
        }
    }

    /// Creates a property read as the object member of the same name.
    pub fn field(name: impl Into<String>, validator: impl Into<ValidatorOrProvider>) -> Self {
        let name = name.into();
        let key = name.clone();
        Self::new(name, move |value: &Value| value.get(key.as_str()), validator)
    }

    /// The member name used in access paths.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, object: &Value) -> Option<InvalidProperty> {
        let member = (self.accessor)(object);
        let result = self.validator.get().validate_optional(member);
        if result.is_valid() {
            None
        } else {
            Some(InvalidProperty {
                name: self.name.clone(),
                result,
            })
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

/// Validates that a candidate is an object and that every declared
/// property matches.
///
/// All properties are checked; failures are kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct PropsValidator {
    properties: Vec<Property>,
}

impl PropsValidator {
    /// Creates a validator checking `properties` in the given order.
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Returns the declared properties.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl ValueValidator for PropsValidator {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        let object = match value {
            Some(object @ Value::Object(_)) => object,
            other => return ValidationResult::invalid_type(TypeName::Object, other),
        };

        let properties: Vec<_> = self
            .properties
            .iter()
            .filter_map(|property| property.check(object))
            .collect();

        if properties.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::InvalidProperties { properties }
        }
    }
}

/// Builds an object validator from its declared properties.
///
/// # Example
///
/// ```rust
/// use runtype::{num, props, str, Property, ValidationResult};
/// use serde_json::json;
///
/// let validator = props([Property::field("a", str()), Property::field("b", num())]);
///
/// match validator.validate(&json!({"a": 1, "b": "x"})) {
///     ValidationResult::InvalidProperties { properties } => {
///         let names: Vec<_> = properties.iter().map(|p| p.name.as_str()).collect();
///         assert_eq!(names, vec!["a", "b"]);
///     }
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
pub fn props(properties: impl IntoIterator<Item = Property>) -> Validator {
    Validator::new(PropsValidator::new(properties.into_iter().collect()))
}
