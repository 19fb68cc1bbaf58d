//! Diagnostics and error types.
//!
//! [`Diagnostic`]s are the rendered form of a failing validation result.
//! [`TypeAssertionError`] is the one error raised by the assertion layer.

mod assertion;
mod diagnostic;

pub use assertion::TypeAssertionError;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
