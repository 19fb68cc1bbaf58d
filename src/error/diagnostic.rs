//! Rendered validation failures.
//!
//! This module provides [`Diagnostic`] for a single mismatch and
//! [`Diagnostics`] for the non-empty, ordered set produced from one result.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::AccessPath;

/// Whether a diagnostic comes from a kind check or a literal check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Type,
    Value,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Type => f.write_str("type"),
            DiagnosticKind::Value => f.write_str("value"),
        }
    }
}

/// A single mismatch at a full access path.
///
/// # Example
///
/// ```rust
/// use runtype::{AccessPath, Diagnostic, DiagnosticKind};
///
/// let diagnostic = Diagnostic::new(
///     AccessPath::root("root").push_field("id"),
///     DiagnosticKind::Type,
///     "number",
///     "string",
/// );
///
/// assert_eq!(
///     diagnostic.to_string(),
///     r#"root.id: expected type "number" but was string"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub path: AccessPath,
    pub kind: DiagnosticKind,
    /// The expected kind name or literal.
    pub expected: String,
    /// The actual kind name, or a rendering of the actual value.
    pub actual: String,
}

impl Diagnostic {
    pub fn new(
        path: AccessPath,
        kind: DiagnosticKind,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            path,
            kind,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {} \"{}\" but was {}",
            self.path, self.kind, self.expected, self.actual
        )
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Diagnostic>();
    assert_sync::<Diagnostic>();
};

/// A non-empty, ordered collection of diagnostics.
///
/// Diagnostics from separate results can be merged with
/// [`Semigroup::combine`]:
///
/// ```rust
/// use runtype::{describe::Describer, num, str};
/// use serde_json::json;
/// use stillwater::prelude::*;
///
/// let describer = Describer::default();
/// let a = describer.diagnostics(&num().validate(&json!("x")), "a").unwrap();
/// let b = describer.diagnostics(&str().validate(&json!(1)), "b").unwrap();
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics(NonEmptyVec<Diagnostic>);

impl Diagnostics {
    /// Wraps one diagnostic.
    pub fn single(diagnostic: Diagnostic) -> Self {
        Self(NonEmptyVec::singleton(diagnostic))
    }

    /// Returns `None` if `diagnostics` is empty.
    pub fn from_vec(diagnostics: Vec<Diagnostic>) -> Option<Self> {
        let mut rest = diagnostics.into_iter();
        let head = rest.next()?;
        Some(rest.fold(Self::single(head), |acc, next| acc.combine(Self::single(next))))
    }

    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a `Diagnostics` holds at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the diagnostics in tree order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Returns the first diagnostic.
    pub fn first(&self) -> &Diagnostic {
        self.0.head()
    }

    /// Returns all diagnostics at exactly `path`.
    pub fn at_path(&self, path: &AccessPath) -> Vec<&Diagnostic> {
        self.0.iter().filter(|d| &d.path == path).collect()
    }

    /// Returns one line per diagnostic.
    pub fn lines(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Unwraps into a plain vector.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0.into_vec()
    }
}

impl Semigroup for Diagnostics {
    fn combine(self, other: Self) -> Self {
        Diagnostics(self.0.combine(other.0))
    }
}

/// Newline-joined, one diagnostic per line.
impl Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
