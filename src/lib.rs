//! # Runtype
//!
//! Runtime enforcement of statically declared shapes for untyped values.
//!
//! ## Overview
//!
//! A static type system says nothing about values that cross a trust
//! boundary, such as deserialized input or responses from external calls.
//! Runtype checks such a value against a validator graph and returns a
//! [`ValidationResult`] tree that records every mismatch along with the
//! property names and indices leading to it. Evaluation never stops at the
//! first failure (unions stop at their first *match*).
//!
//! ## Core Types
//!
//! - [`Validator`]: a shared, immutable check built from [`num`], [`str`],
//!   [`bool`], [`value`], [`props`], [`array`] and [`or`]
//! - [`ValidatorRegistry`] / [`Provider`]: named, lazily resolved validators
//!   for recursive shapes
//! - [`ValidationResult`]: the result tree
//! - [`describe()`] / [`Describer`](describe::Describer): render a result tree
//!   as text
//! - [`assert_valid_type`]: fail-fast entry point raising
//!   [`TypeAssertionError`]
//!
//! ## Example
//!
//! ```rust
//! use runtype::{assert_valid_type, create_validator, optional, props, str, Property};
//! use serde_json::json;
//!
//! let comment = create_validator(|registry| {
//!     registry.index(
//!         "Comment",
//!         props([
//!             Property::field("text", str()),
//!             Property::field("reply", optional(registry.provider("Comment"))),
//!         ]),
//!     )
//! })
//! .unwrap();
//!
//! let ok = json!({"text": "a", "reply": {"text": "b", "reply": null}});
//! assert!(comment.is_valid(&ok));
//!
//! let bad = json!({"text": "a", "reply": {"text": 2}});
//! let err = assert_valid_type("comment", &bad, &comment).unwrap_err();
//! assert!(err.report().contains(r#"comment.reply.text: expected type "string" but was number"#));
//! ```

pub mod assertion;
pub mod describe;
pub mod error;
pub mod kind;
pub mod path;
pub mod registry;
pub mod result;
pub mod validator;

pub use assertion::assert_valid_type;
pub use describe::describe;
pub use error::{Diagnostic, DiagnosticKind, Diagnostics, TypeAssertionError};
pub use kind::{type_name, TypeName};
pub use path::{AccessPath, PathSegment};
pub use registry::{create_validator, Provider, RegistryError, ValidatorRegistry};
pub use result::{InvalidItem, InvalidProperty, Literal, ValidationResult};
pub use validator::{
    array, bool, num, optional, or, props, str, undefined, value, Accessor, Property, Validator,
    ValidatorOrProvider, ValueValidator,
};

/// Validation outcome carrying rendered diagnostics on failure.
pub type Checked<T> = stillwater::Validation<T, Diagnostics>;
