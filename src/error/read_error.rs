//! Read error types.
//!
//! This module provides [`ReadError`] for single failures and [`ReadErrors`]
//! for a non-empty group of failures reported at the same location.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::value::ValueType;

/// A single read or validation error.
///
/// `ReadError` carries no location of its own; it is always attached to one
/// through a [`Cause`](crate::Cause). The engine only looks at two things: a
/// set of errors being non-empty, and the `critical` flag. Everything else is
/// payload for the caller.
///
/// # Example
///
/// ```rust
/// use waypoint::ReadError;
///
/// let error = ReadError::new("must not be blank")
///     .with_code("is_blank")
///     .with_got("\"  \"")
///     .critical();
///
/// assert_eq!(error.code, "is_blank");
/// assert!(error.critical);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    /// Machine-readable error code (e.g. `path_missing`, `min_length`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// The value actually found (formatted as string).
    pub got: Option<String>,
    /// Critical errors stop the current parsing or validation batch.
    pub critical: bool,
}

impl ReadError {
    /// Creates a validation error with the given message.
    ///
    /// The code defaults to `validation_error`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: "validation_error".to_string(),
            message: message.into(),
            expected: None,
            got: None,
            critical: false,
        }
    }

    /// The default error for a missing member or index.
    pub fn path_missing() -> Self {
        Self::new("missing required value").with_code("path_missing")
    }

    /// The default error for a value of the wrong type.
    pub fn invalid_type(expected: ValueType, actual: ValueType) -> Self {
        Self::new(format!("expected {}, got {}", expected, actual))
            .with_code("invalid_type")
            .with_expected(expected.name())
            .with_got(actual.name())
    }

    /// The default error for a number that does not fit the target type.
    pub fn value_cast(value: &str, target: &str) -> Self {
        Self::new(format!("value {} cannot be represented as {}", value, target))
            .with_code("value_cast")
            .with_expected(target)
            .with_got(value)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Tags this error as critical.
    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }
}

impl Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }
        if self.critical {
            write!(f, " [critical]")?;
        }

        Ok(())
    }
}

impl std::error::Error for ReadError {}

/// A non-empty collection of read errors.
///
/// `ReadErrors` wraps a `NonEmptyVec<ReadError>`, so a failure can never be
/// built without at least one error. Sets are combined with
/// [`Semigroup::combine`], which concatenates in order.
///
/// ```rust
/// use waypoint::{ReadError, ReadErrors};
/// use stillwater::prelude::*;
///
/// let errors = ReadErrors::single(ReadError::new("too short"))
///     .combine(ReadErrors::single(ReadError::new("bad pattern")));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().message, "too short");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReadErrors(NonEmptyVec<ReadError>);

impl ReadErrors {
    pub fn single(error: ReadError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Builds a set from a vec, or returns None if the vec is empty.
    pub fn from_vec(errors: Vec<ReadError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the set is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReadError> {
        self.0.iter()
    }

    pub fn first(&self) -> &ReadError {
        self.0.head()
    }

    /// Returns true if any error in the set is tagged critical.
    pub fn has_critical(&self) -> bool {
        self.0.iter().any(|e| e.critical)
    }

    /// Returns all errors with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&ReadError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns a copy of this set with every error tagged critical.
    pub fn into_critical(self) -> Self {
        let errors = self.0.into_vec().into_iter().map(ReadError::critical);
        Self::from_vec(errors.collect()).expect("mapping preserves non-emptiness")
    }

    pub fn into_vec(self) -> Vec<ReadError> {
        self.0.into_vec()
    }

    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<ReadError> {
        &self.0
    }
}

impl Semigroup for ReadErrors {
    fn combine(self, other: Self) -> Self {
        ReadErrors(self.0.combine(other.0))
    }
}

impl From<ReadError> for ReadErrors {
    fn from(error: ReadError) -> Self {
        Self::single(error)
    }
}

impl Display for ReadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ReadErrors {}

impl IntoIterator for ReadErrors {
    type Item = ReadError;
    type IntoIter = std::vec::IntoIter<ReadError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ReadErrors>();
    assert_sync::<ReadErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_defaults() {
        let error = ReadError::new("field is invalid");

        assert_eq!(error.code, "validation_error");
        assert_eq!(error.message, "field is invalid");
        assert!(error.got.is_none());
        assert!(error.expected.is_none());
        assert!(!error.critical);
    }

    #[test]
    fn test_invalid_type_error() {
        let error = ReadError::invalid_type(ValueType::String, ValueType::Null);

        assert_eq!(error.code, "invalid_type");
        assert_eq!(error.expected.as_deref(), Some("string"));
        assert_eq!(error.got.as_deref(), Some("null"));
        assert_eq!(error.to_string(), "expected string, got null (expected: string) (got: null)");
    }

    #[test]
    fn test_read_errors_combine_preserves_order() {
        let combined = ReadErrors::single(ReadError::new("1"))
            .combine(ReadErrors::single(ReadError::new("2")))
            .combine(ReadErrors::single(ReadError::new("3")));

        let messages: Vec<_> = combined.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_has_critical() {
        let plain = ReadErrors::single(ReadError::new("a"));
        assert!(!plain.has_critical());

        let mixed = plain.combine(ReadErrors::single(ReadError::new("b").critical()));
        assert!(mixed.has_critical());
    }

    #[test]
    fn test_into_critical_tags_every_error() {
        let errors = ReadErrors::single(ReadError::new("a"))
            .combine(ReadErrors::single(ReadError::new("b")))
            .into_critical();

        assert!(errors.iter().all(|e| e.critical));
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(ReadErrors::from_vec(Vec::new()).is_none());
        assert_eq!(
            ReadErrors::from_vec(vec![ReadError::new("x")]).map(|e| e.len()),
            Some(1)
        );
    }
}
