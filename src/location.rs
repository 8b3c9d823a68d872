//! Traversal locations.
//!
//! A [`Location`] is the full path from the document root to the node being
//! read. Readers receive their location from the caller and every error or
//! success they emit is tagged with it, so errors from nested reads already
//! carry their complete position.

use std::fmt::{self, Display};
use std::ops::Div;

use crate::path::{JsonPath, PathElement};

/// A position reached while traversing a value tree.
///
/// # Example
///
/// ```rust
/// use waypoint::Location;
///
/// let location = Location::root() / "lots" / 2 / "id";
/// assert_eq!(location.to_string(), "#/lots[2].id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    path: JsonPath,
}

impl Location {
    /// The location of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new location one element deeper.
    pub fn append(&self, element: impl Into<PathElement>) -> Self {
        Self {
            path: self.path.append(element),
        }
    }

    /// Returns a new location extended by every element of `path`.
    pub fn join(&self, path: &JsonPath) -> Self {
        Self {
            path: self.path.concat(path),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the path from the document root to this location.
    pub fn path(&self) -> &JsonPath {
        &self.path
    }
}

impl From<JsonPath> for Location {
    fn from(path: JsonPath) -> Self {
        Self { path }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "#")
        } else {
            write!(f, "#/{}", self.path)
        }
    }
}

impl<E: Into<PathElement>> Div<E> for Location {
    type Output = Location;

    fn div(self, element: E) -> Location {
        Location {
            path: self.path / element,
        }
    }
}

impl<E: Into<PathElement>> Div<E> for &Location {
    type Output = Location;

    fn div(self, element: E) -> Location {
        self.append(element)
    }
}
