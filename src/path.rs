//! Access paths for locating a mismatch inside a candidate value.
//!
//! This module provides [`AccessPath`] and [`PathSegment`], used by the
//! formatter to name the exact member a diagnostic refers to.

use std::fmt::{self, Display};

/// A segment of an access path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A property access (e.g., `user`, `email`)
    Field(String),
    /// A sequence index (e.g., `[0]`, `[42]`)
    Index(usize),
}

/// A path from a named root to a member of a nested value.
///
/// # Example
///
/// ```rust
/// use runtype::AccessPath;
///
/// let path = AccessPath::root("order")
///     .push_field("items")
///     .push_index(2)
///     .push_field("id");
///
/// assert_eq!(path.to_string(), "order.items[2].id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessPath {
    root: String,
    segments: Vec<PathSegment>,
}

impl AccessPath {
    /// Creates a path naming only the root value.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            root: name.into(),
            segments: Vec::new(),
        }
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self {
            root: self.root.clone(),
            segments,
        }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self {
            root: self.root.clone(),
            segments,
        }
    }
}

impl Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
