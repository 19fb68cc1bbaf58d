//! Sequence validation.

use serde_json::Value;

use crate::kind::TypeName;
use crate::result::{InvalidItem, ValidationResult};

use super::traits::{Validator, ValidatorOrProvider, ValueValidator};

/// Validates every element of a sequence against one item validator.
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    item: ValidatorOrProvider,
}

impl ArrayValidator {
    pub fn new(item: impl Into<ValidatorOrProvider>) -> Self {
        Self { item: item.into() }
    }
}

impl ValueValidator for ArrayValidator {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        let elements = match value {
            Some(Value::Array(elements)) => elements,
            other => return ValidationResult::invalid_type(TypeName::Array, other),
        };
        if elements.is_empty() {
            return ValidationResult::Valid;
        }

        let item = self.item.get();
        let items: Vec<_> = elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                let result = item.validate(element);
                result.is_invalid().then_some(InvalidItem { index, result })
            })
            .collect();

        if items.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::InvalidArrayItems { items }
        }
    }
}

/// Builds a sequence validator.
///
/// # Example
///
/// ```rust
/// use runtype::{array, num, ValidationResult};
/// use serde_json::json;
///
/// let numbers = array(num());
/// assert!(numbers.is_valid(&json!([])));
///
/// match numbers.validate(&json!([1, "two", 3])) {
///     ValidationResult::InvalidArrayItems { items } => assert_eq!(items[0].index, 1),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
pub fn array(item: impl Into<ValidatorOrProvider>) -> Validator {
    Validator::new(ArrayValidator::new(item))
}
