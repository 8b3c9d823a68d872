//! The outcome of a read.
//!
//! [`ReadResult`] is either a located success or a [`Failure`]: an ordered,
//! non-empty list of [`Cause`]s, each pairing a location with the errors found
//! there. Merging failures concatenates their causes in order and never
//! de-duplicates, even when two causes share a location.

use std::fmt::{self, Display};

use stillwater::prelude::*;
use stillwater::Validation;

use crate::context::ReaderContext;
use crate::error::{ReadError, ReadErrors};
use crate::location::Location;
use crate::validator::Validator;

/// Errors reported at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Cause {
    pub location: Location,
    pub errors: ReadErrors,
}

impl Cause {
    pub fn new(location: Location, errors: impl Into<ReadErrors>) -> Self {
        Self {
            location,
            errors: errors.into(),
        }
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.errors)
    }
}

/// A failed read: every location that went wrong, in the order found.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure(NonEmptyVec<Cause>);

impl Failure {
    /// A failure with a single error at `location`.
    pub fn new(location: Location, error: ReadError) -> Self {
        Self::from_cause(Cause::new(location, error))
    }

    /// A failure with a set of errors at `location`.
    pub fn with_errors(location: Location, errors: ReadErrors) -> Self {
        Self::from_cause(Cause::new(location, errors))
    }

    pub fn from_cause(cause: Cause) -> Self {
        Self(NonEmptyVec::singleton(cause))
    }

    /// Builds a failure from causes, or returns None if there are none.
    pub fn from_causes(causes: Vec<Cause>) -> Option<Self> {
        NonEmptyVec::from_vec(causes).map(Self)
    }

    pub fn causes(&self) -> impl Iterator<Item = &Cause> {
        self.0.iter()
    }

    /// Number of causes (not of individual errors).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a failure has at least one cause.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &Cause {
        self.0.head()
    }

    /// Returns true if any error in any cause is tagged critical.
    pub fn is_critical(&self) -> bool {
        self.0.iter().any(|cause| cause.errors.has_critical())
    }

    /// Returns every error reported at `location`, across all causes.
    pub fn at(&self, location: &Location) -> Vec<&ReadError> {
        self.0
            .iter()
            .filter(|cause| &cause.location == location)
            .flat_map(|cause| cause.errors.iter())
            .collect()
    }

    pub fn into_causes(self) -> Vec<Cause> {
        self.0.into_vec()
    }
}

impl Semigroup for Failure {
    fn combine(self, other: Self) -> Self {
        Failure(self.0.combine(other.0))
    }
}

impl From<Cause> for Failure {
    fn from(cause: Cause) -> Self {
        Self::from_cause(cause)
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Read failed at {} location(s):", self.len())?;
        for (i, cause) in self.causes().enumerate() {
            writeln!(f, "  {}. {}", i + 1, cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

impl IntoIterator for Failure {
    type Item = Cause;
    type IntoIter = std::vec::IntoIter<Cause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

/// The result of reading a value of type `T`.
///
/// # Example
///
/// ```rust
/// use waypoint::{Location, ReadError, ReadResult};
///
/// let ok = ReadResult::success(Location::root() / "age", 41);
/// assert_eq!(ok.map(|age| age + 1).into_result().unwrap(), 42);
///
/// let failed: ReadResult<i32> = ReadResult::failure(Location::root(), ReadError::path_missing());
/// assert!(failed.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ReadResult<T> {
    Success { location: Location, value: T },
    Failure(Failure),
}

impl<T> ReadResult<T> {
    pub fn success(location: Location, value: T) -> Self {
        ReadResult::Success { location, value }
    }

    pub fn failure(location: Location, error: ReadError) -> Self {
        ReadResult::Failure(Failure::new(location, error))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ReadResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ReadResult::Failure(_))
    }

    /// Transforms the success value; failures pass through unchanged.
    pub fn map<U, F>(self, f: F) -> ReadResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ReadResult::Success { location, value } => ReadResult::Success {
                location,
                value: f(value),
            },
            ReadResult::Failure(failure) => ReadResult::Failure(failure),
        }
    }

    /// Chains another decode step that receives the value and its location.
    pub fn and_then<U, F>(self, f: F) -> ReadResult<U>
    where
        F: FnOnce(&Location, T) -> ReadResult<U>,
    {
        match self {
            ReadResult::Success { location, value } => f(&location, value),
            ReadResult::Failure(failure) => ReadResult::Failure(failure),
        }
    }

    /// Replaces a failure with the result of `f`; successes pass through.
    pub fn or_else<F>(self, f: F) -> ReadResult<T>
    where
        F: FnOnce(Failure) -> ReadResult<T>,
    {
        match self {
            ReadResult::Failure(failure) => f(failure),
            success => success,
        }
    }

    /// Runs `validator` on a successful value; its errors are reported at the
    /// value's location.
    pub fn validate<V>(self, context: &ReaderContext, validator: &V) -> ReadResult<T>
    where
        V: Validator<Value = T> + ?Sized,
    {
        match self {
            ReadResult::Success { location, value } => {
                match validator.validate(context, &location, &value) {
                    Validation::Success(()) => ReadResult::Success { location, value },
                    Validation::Failure(errors) => {
                        ReadResult::Failure(Failure::with_errors(location, errors))
                    }
                }
            }
            failure => failure,
        }
    }

    /// Returns the location of a success.
    pub fn location(&self) -> Option<&Location> {
        match self {
            ReadResult::Success { location, .. } => Some(location),
            ReadResult::Failure(_) => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ReadResult::Success { value, .. } => Some(value),
            ReadResult::Failure(_) => None,
        }
    }

    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            ReadResult::Success { .. } => None,
            ReadResult::Failure(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            ReadResult::Success { value, .. } => Ok(value),
            ReadResult::Failure(failure) => Err(failure),
        }
    }

    /// Converts to a `stillwater::Validation`, dropping the success location.
    pub fn into_validation(self) -> Validation<T, Failure> {
        match self {
            ReadResult::Success { value, .. } => Validation::Success(value),
            ReadResult::Failure(failure) => Validation::Failure(failure),
        }
    }
}

/// Merges every failure in `results`, in order, or returns None if all
/// succeeded.
pub fn merge_failures<T, I>(results: I) -> Option<Failure>
where
    I: IntoIterator<Item = ReadResult<T>>,
{
    results
        .into_iter()
        .filter_map(|result| match result {
            ReadResult::Failure(failure) => Some(failure),
            ReadResult::Success { .. } => None,
        })
        .reduce(Semigroup::combine)
}
