//! The error raised when a runtime type assertion fails.

use crate::result::ValidationResult;

/// A value did not have the shape it was asserted to have.
///
/// The message is the full diagnostic report, one mismatch per line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("runtime type assertion failed for '{name}':\n{report}")]
pub struct TypeAssertionError {
    name: String,
    report: String,
    result: ValidationResult,
}

impl TypeAssertionError {
    /// Creates an error for the value named `name`.
    pub fn new(
        name: impl Into<String>,
        report: impl Into<String>,
        result: ValidationResult,
    ) -> Self {
        Self {
            name: name.into(),
            report: report.into(),
            result,
        }
    }

    /// The name the asserted value was reported under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered diagnostics, one per line.
    pub fn report(&self) -> &str {
        &self.report
    }

    /// The failing result tree.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Consumes the error, returning the failing result tree.
    pub fn into_result(self) -> ValidationResult {
        self.result
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<TypeAssertionError>();
    assert_sync::<TypeAssertionError>();
};
