//! Rendering result trees as diagnostic text.
//!
//! Each mismatch leaf becomes one line naming its full access path and
//! what was expected against what was found:
//!
//! ```text
//! order.items[2].id: expected type "number" but was string
//! order.status: expected value "open" but was closed
//! ```
//!
//! Union failures add nothing to the path; every alternative is reported at
//! the path of the union itself.

use serde_json::Value;

use crate::error::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::kind::type_name;
use crate::path::AccessPath;
use crate::result::{Literal, ValidationResult};

const DEFAULT_MAX_VALUE_WIDTH: usize = 30;
const DEFAULT_TRUNCATED_WIDTH: usize = 17;
const DEFAULT_SUCCESS_MARKER: &str = "OK";

/// Configurable result formatter.
///
/// # Example
///
/// ```rust
/// use runtype::{describe::Describer, value};
/// use serde_json::json;
///
/// let result = value(json!(null)).validate(&json!("a rather long string value here"));
///
/// let text = Describer::new().max_value_width(10).truncated_width(5).describe(&result, "v");
/// assert_eq!(text, r#"v: expected value "null" but was a rat..."#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Describer {
    max_value_width: usize,
    truncated_width: usize,
    success_marker: String,
}

impl Describer {
    /// Creates a formatter with the default widths and success marker.
    pub fn new() -> Self {
        Self {
            max_value_width: DEFAULT_MAX_VALUE_WIDTH,
            truncated_width: DEFAULT_TRUNCATED_WIDTH,
            success_marker: DEFAULT_SUCCESS_MARKER.to_string(),
        }
    }

    /// Actual values rendered longer than this many characters are
    /// truncated. Defaults to 30.
    pub fn max_value_width(mut self, width: usize) -> Self {
        self.max_value_width = width;
        self
    }

    /// Number of characters kept, before `...`, when truncating. Defaults
    /// to 17.
    pub fn truncated_width(mut self, width: usize) -> Self {
        self.truncated_width = width;
        self
    }

    /// Text returned by [`describe`](Self::describe) for a valid result.
    /// Defaults to `OK`.
    pub fn success_marker(mut self, marker: impl Into<String>) -> Self {
        self.success_marker = marker.into();
        self
    }

    /// Renders `result` as newline-joined diagnostics rooted at `root`, or
    /// the success marker if it is valid.
    pub fn describe(&self, result: &ValidationResult, root: &str) -> String {
        match self.diagnostics(result, root) {
            Some(diagnostics) => diagnostics.to_string(),
            None => self.success_marker.clone(),
        }
    }

    /// Returns one diagnostic per mismatch leaf, in tree order, or `None`
    /// for a valid result.
    pub fn diagnostics(&self, result: &ValidationResult, root: &str) -> Option<Diagnostics> {
        let mut collected = Vec::new();
        self.collect(result, &AccessPath::root(root), &mut collected);
        Diagnostics::from_vec(collected)
    }

    fn collect(&self, result: &ValidationResult, path: &AccessPath, out: &mut Vec<Diagnostic>) {
        match result {
            ValidationResult::Valid => {}
            ValidationResult::InvalidType { expected, actual } => out.push(Diagnostic::new(
                path.clone(),
                DiagnosticKind::Type,
                expected.as_str(),
                actual.as_str(),
            )),
            ValidationResult::InvalidValue { expected, actual } => out.push(Diagnostic::new(
                path.clone(),
                DiagnosticKind::Value,
                expected.to_string(),
                self.render_actual(actual),
            )),
            ValidationResult::InvalidProperties { properties } => {
                for property in properties {
                    self.collect(&property.result, &path.push_field(&property.name), out);
                }
            }
            ValidationResult::InvalidUnion { parts } => {
                for part in parts {
                    self.collect(part, path, out);
                }
            }
            ValidationResult::InvalidArrayItems { items } => {
                for item in items {
                    self.collect(&item.result, &path.push_index(item.index), out);
                }
            }
        }
    }

    fn render_actual(&self, actual: &Literal) -> String {
        let rendered = match actual {
            Literal::Value(Value::Object(members)) => {
                let members: Vec<String> = members
                    .iter()
                    .map(|(key, member)| format!("{}:{}", key, type_name(Some(member))))
                    .collect();
                format!("{{{}}}", members.join(","))
            }
            Literal::Value(Value::Array(elements)) => {
                let elements: Vec<&str> = elements
                    .iter()
                    .map(|element| type_name(Some(element)).as_str())
                    .collect();
                format!("[{}]", elements.join(","))
            }
            other => other.to_string(),
        };

        if rendered.chars().count() > self.max_value_width {
            let kept: String = rendered.chars().take(self.truncated_width).collect();
            format!("{}...", kept)
        } else {
            rendered
        }
    }
}

impl Default for Describer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `result` with the default [`Describer`].
///
/// # Example
///
/// ```rust
/// use runtype::{describe, num, props, Property};
/// use serde_json::json;
///
/// let validator = props([Property::field("outer", props([Property::field("inner", num())]))]);
/// let result = validator.validate(&json!({"outer": {"inner": "x"}}));
///
/// assert_eq!(
///     describe(&result, "root"),
///     r#"root.outer.inner: expected type "number" but was string"#
/// );
/// assert_eq!(describe(&validator.validate(&json!({"outer": {"inner": 1}})), "root"), "OK");
/// ```
pub fn describe(result: &ValidationResult, root: &str) -> String {
    Describer::default().describe(result, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TypeName;
    use crate::result::{InvalidItem, InvalidProperty};
    use serde_json::json;

    fn type_leaf(expected: TypeName, actual: TypeName) -> ValidationResult {
        ValidationResult::InvalidType { expected, actual }
    }

    #[test]
    fn test_valid_renders_success_marker() {
        assert_eq!(describe(&ValidationResult::Valid, "root"), "OK");
        assert_eq!(
            Describer::new()
                .success_marker("valid")
                .describe(&ValidationResult::Valid, "root"),
            "valid"
        );
        assert!(Describer::new().diagnostics(&ValidationResult::Valid, "root").is_none());
    }

    #[test]
    fn test_root_level_type_mismatch() {
        let result = type_leaf(TypeName::Boolean, TypeName::Null);
        assert_eq!(
            describe(&result, "flag"),
            r#"flag: expected type "boolean" but was null"#
        );
    }

    #[test]
    fn test_array_and_property_paths() {
        let result = ValidationResult::InvalidProperties {
            properties: vec![InvalidProperty {
                name: "items".to_string(),
                result: ValidationResult::InvalidArrayItems {
                    items: vec![InvalidItem {
                        index: 2,
                        result: ValidationResult::InvalidProperties {
                            properties: vec![InvalidProperty {
                                name: "id".to_string(),
                                result: type_leaf(TypeName::Number, TypeName::String),
                            }],
                        },
                    }],
                },
            }],
        };
        assert_eq!(
            describe(&result, "root"),
            r#"root.items[2].id: expected type "number" but was string"#
        );
    }

    #[test]
    fn test_union_parts_share_the_path() {
        let result = ValidationResult::InvalidProperties {
            properties: vec![InvalidProperty {
                name: "child".to_string(),
                result: ValidationResult::InvalidUnion {
                    parts: vec![
                        ValidationResult::InvalidValue {
                            expected: Literal::from(json!(null)),
                            actual: Literal::from(json!(5)),
                        },
                        type_leaf(TypeName::Object, TypeName::Number),
                    ],
                },
            }],
        };
        let diagnostics = Describer::new().diagnostics(&result, "root").unwrap();
        let lines = diagnostics.lines();
        assert_eq!(
            lines,
            vec![
                r#"root.child: expected value "null" but was 5"#,
                r#"root.child: expected type "object" but was number"#,
            ]
        );
    }

    #[test]
    fn test_object_and_array_values_render_member_kinds() {
        let object = ValidationResult::InvalidValue {
            expected: Literal::from(json!(null)),
            actual: Literal::from(json!({"a": 1, "b": "x"})),
        };
        assert_eq!(
            describe(&object, "v"),
            r#"v: expected value "null" but was {a:number,b:string}"#
        );

        let array = ValidationResult::InvalidValue {
            expected: Literal::from(json!(null)),
            actual: Literal::from(json!([1, null])),
        };
        assert_eq!(
            describe(&array, "v"),
            r#"v: expected value "null" but was [number,null]"#
        );
    }

    #[test]
    fn test_long_values_are_truncated() {
        let result = ValidationResult::InvalidValue {
            expected: Literal::from("short"),
            actual: Literal::from("abcdefghijklmnopqrstuvwxyz0123456789"),
        };
        assert_eq!(
            describe(&result, "v"),
            r#"v: expected value "short" but was abcdefghijklmnopq..."#
        );
    }

    #[test]
    fn test_truncation_counts_characters() {
        let result = ValidationResult::InvalidValue {
            expected: Literal::Undefined,
            actual: Literal::from("ééééé"),
        };
        let text = Describer::new()
            .max_value_width(3)
            .truncated_width(2)
            .describe(&result, "v");
        assert_eq!(text, r#"v: expected value "undefined" but was éé..."#);
    }
}
