//! The validator seam and the shared handle every combinator works with.
//!
//! Combinators are plain structs implementing [`ValueValidator`]; they are
//! composed through the type-erased, cheaply cloned [`Validator`] handle.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;
use stillwater::Validation;

use crate::describe::Describer;
use crate::registry::Provider;
use crate::result::ValidationResult;
use crate::Checked;

/// A pure check from a candidate value to a [`ValidationResult`].
///
/// `None` is the undefined marker: the candidate is absent. Implementations
/// hold no mutable state, so the `Send + Sync` bounds let one graph be
/// evaluated from many threads at once.
pub trait ValueValidator: Send + Sync {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult;
}

struct FnValidator<F>(F);

impl<F> ValueValidator for FnValidator<F>
where
    F: Fn(Option<&Value>) -> ValidationResult + Send + Sync,
{
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        (self.0)(value)
    }
}

/// A shared, immutable validator.
///
/// Cloning a `Validator` clones a handle; the underlying check is shared.
///
/// # Example
///
/// ```rust
/// use runtype::{num, props, str, Property};
/// use serde_json::json;
///
/// let point = props([
///     Property::field("x", num()),
///     Property::field("label", str()),
/// ]);
///
/// assert!(point.is_valid(&json!({"x": 1, "label": "origin"})));
/// assert!(!point.is_valid(&json!({"x": "1", "label": "origin"})));
/// ```
#[derive(Clone)]
pub struct Validator(Arc<dyn ValueValidator>);

impl Validator {
    /// Wraps a [`ValueValidator`] implementation in a shared handle.
    pub fn new<V>(validator: V) -> Self
    where
        V: ValueValidator + 'static,
    {
        Self(Arc::new(validator))
    }

    /// Wraps a closure as a validator.
    ///
    /// The closure must be pure: it is called once per evaluation and may be
    /// called concurrently.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> ValidationResult + Send + Sync + 'static,
    {
        Self::new(FnValidator(f))
    }

    /// Evaluates this validator against a present value.
    pub fn validate(&self, value: &Value) -> ValidationResult {
        self.0.validate_value(Some(value))
    }

    /// Evaluates this validator against a value that may be absent.
    pub fn validate_optional(&self, value: Option<&Value>) -> ValidationResult {
        self.0.validate_value(value)
    }

    /// Boolean predicate form of [`validate`](Self::validate).
    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_valid()
    }

    /// Evaluates `value` and converts the outcome into a stillwater
    /// `Validation`, with failures rendered as diagnostics rooted at `name`.
    pub fn check<'a>(&self, name: &str, value: &'a Value) -> Checked<&'a Value> {
        match Describer::default().diagnostics(&self.validate(value), name) {
            None => Validation::Success(value),
            Some(diagnostics) => Validation::Failure(diagnostics),
        }
    }

    /// Evaluates many candidates in parallel. Results keep the input order.
    pub fn validate_batch(&self, values: &[Value]) -> Vec<ValidationResult> {
        values.par_iter().map(|value| self.validate(value)).collect()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl ValueValidator for Validator {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        self.0.validate_value(value)
    }
}

/// Either a built validator, or a deferred reference resolved at
/// evaluation time.
#[derive(Clone, Debug)]
pub enum ValidatorOrProvider {
    Validator(Validator),
    Provider(Provider),
}

impl ValidatorOrProvider {
    /// Resolves to the validator to evaluate.
    ///
    /// # Panics
    ///
    /// Panics if this is a provider whose key is not registered. Graphs
    /// built through [`ValidatorRegistry::finish`](crate::ValidatorRegistry::finish)
    /// are checked for this before they are handed out.
    pub fn get(&self) -> Validator {
        match self {
            ValidatorOrProvider::Validator(validator) => validator.clone(),
            ValidatorOrProvider::Provider(provider) => provider
                .resolve()
                .unwrap_or_else(|err| panic!("{}", err)),
        }
    }
}

impl From<Validator> for ValidatorOrProvider {
    fn from(validator: Validator) -> Self {
        ValidatorOrProvider::Validator(validator)
    }
}

impl From<&Validator> for ValidatorOrProvider {
    fn from(validator: &Validator) -> Self {
        ValidatorOrProvider::Validator(validator.clone())
    }
}

impl From<Provider> for ValidatorOrProvider {
    fn from(provider: Provider) -> Self {
        ValidatorOrProvider::Provider(provider)
    }
}

// Validators are shared across threads; keep that guarantee visible.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
    assert_send::<ValidatorOrProvider>();
    assert_sync::<ValidatorOrProvider>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TypeName;
    use serde_json::json;

    fn even() -> Validator {
        Validator::from_fn(|value| match value.and_then(Value::as_i64) {
            Some(n) if n % 2 == 0 => ValidationResult::Valid,
            _ => ValidationResult::invalid_type(TypeName::Number, value),
        })
    }

    #[test]
    fn test_from_fn_validator() {
        assert!(even().is_valid(&json!(4)));
        assert!(!even().is_valid(&json!(3)));
        assert_eq!(
            even().validate_optional(None),
            ValidationResult::InvalidType {
                expected: TypeName::Number,
                actual: TypeName::Undefined,
            }
        );
    }

    #[test]
    fn test_check_success_passes_value_through() {
        let value = json!(8);
        let checked = even().check("n", &value);
        assert!(checked.is_success());
        assert_eq!(checked.into_result().unwrap(), &json!(8));
    }

    #[test]
    fn test_check_failure_carries_diagnostics() {
        let value = json!("x");
        let errors = even().check("n", &value).into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().path.to_string(), "n");
    }

    #[test]
    fn test_validate_batch_keeps_order() {
        let values = vec![json!(2), json!(3), json!(6), json!("x")];
        let results = even().validate_batch(&values);
        let valid: Vec<bool> = results.iter().map(ValidationResult::is_valid).collect();
        assert_eq!(valid, vec![true, false, true, false]);
    }
}
