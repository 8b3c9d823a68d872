//! Paths addressing positions inside a value tree.
//!
//! This module provides [`JsonPath`] and [`PathElement`]. A path is an
//! immutable sequence of member names and array indices; appending with `/`
//! always returns a new path and leaves the receiver untouched.

use std::fmt::{self, Display};
use std::ops::Div;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// Member access on an object (e.g. `user`, `email`).
    Key(String),
    /// Element access on an array (e.g. `[0]`).
    Index(usize),
}

impl PathElement {
    pub fn key(name: impl Into<String>) -> Self {
        PathElement::Key(name.into())
    }

    pub fn index(idx: usize) -> Self {
        PathElement::Index(idx)
    }

    /// Returns the member name, if this is a member step.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathElement::Key(name) => Some(name),
            PathElement::Index(_) => None,
        }
    }
}

impl Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Key(name) => write!(f, "{}", name),
            PathElement::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

impl From<&str> for PathElement {
    fn from(name: &str) -> Self {
        PathElement::Key(name.to_string())
    }
}

impl From<String> for PathElement {
    fn from(name: String) -> Self {
        PathElement::Key(name)
    }
}

impl From<usize> for PathElement {
    fn from(idx: usize) -> Self {
        PathElement::Index(idx)
    }
}

/// A path to a value in a nested structure.
///
/// The empty path is the identity: it addresses the value itself.
///
/// # Example
///
/// ```rust
/// use waypoint::JsonPath;
///
/// let path = JsonPath::empty() / "users" / 0 / "email";
///
/// assert_eq!(path.to_string(), "users[0].email");
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    elements: Vec<PathElement>,
}

impl JsonPath {
    /// Creates the empty path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a path of a single member name.
    pub fn from_key(name: impl Into<String>) -> Self {
        Self {
            elements: vec![PathElement::Key(name.into())],
        }
    }

    /// Creates a path of a single index.
    pub fn from_index(idx: usize) -> Self {
        Self {
            elements: vec![PathElement::Index(idx)],
        }
    }

    /// Returns a new path with `element` appended.
    pub fn append(&self, element: impl Into<PathElement>) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(element.into());
        Self { elements }
    }

    /// Returns a new path with all elements of `other` appended.
    pub fn concat(&self, other: &JsonPath) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + other.elements.len());
        elements.extend_from_slice(&self.elements);
        elements.extend_from_slice(&other.elements);
        Self { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Returns an iterator over the path elements.
    pub fn iter(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter()
    }

    /// Returns the path without its last element, or None for the empty path.
    pub fn parent(&self) -> Option<Self> {
        self.elements.split_last().map(|(_, init)| Self {
            elements: init.to_vec(),
        })
    }

    pub fn last(&self) -> Option<&PathElement> {
        self.elements.last()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            match element {
                PathElement::Key(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathElement::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl<E: Into<PathElement>> FromIterator<E> for JsonPath {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&str> for JsonPath {
    fn from(name: &str) -> Self {
        JsonPath::from_key(name)
    }
}

impl From<String> for JsonPath {
    fn from(name: String) -> Self {
        JsonPath::from_key(name)
    }
}

impl From<usize> for JsonPath {
    fn from(idx: usize) -> Self {
        JsonPath::from_index(idx)
    }
}

impl<E: Into<PathElement>> Div<E> for JsonPath {
    type Output = JsonPath;

    fn div(mut self, element: E) -> JsonPath {
        self.elements.push(element.into());
        self
    }
}

impl<E: Into<PathElement>> Div<E> for &JsonPath {
    type Output = JsonPath;

    fn div(self, element: E) -> JsonPath {
        self.append(element)
    }
}
