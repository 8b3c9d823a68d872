use std::fmt;
use std::sync::Arc;

use crate::error::ReadError;
use crate::value::ValueType;

type PathMissingFn = Arc<dyn Fn() -> ReadError + Send + Sync>;
type InvalidTypeFn = Arc<dyn Fn(ValueType, ValueType) -> ReadError + Send + Sync>;
type ValueCastFn = Arc<dyn Fn(&str, &str) -> ReadError + Send + Sync>;

/// Factories for the errors the engine raises by itself.
///
/// Readers never hard-code the payload of a missing-value or wrong-type
/// error; they ask the builders they were configured with. Replacing a
/// builder is how callers localize or re-code those errors.
///
/// # Example
///
/// ```rust
/// use waypoint::{ErrorBuilders, ReadError};
///
/// let builders = ErrorBuilders::default()
///     .path_missing_with(|| ReadError::new("obligatoire").with_code("E001"));
///
/// assert_eq!(builders.path_missing().code, "E001");
/// ```
#[derive(Clone)]
pub struct ErrorBuilders {
    path_missing: PathMissingFn,
    invalid_type: InvalidTypeFn,
    value_cast: ValueCastFn,
}

impl ErrorBuilders {
    /// Replaces the builder used when a member or index is absent.
    pub fn path_missing_with<F>(mut self, builder: F) -> Self
    where
        F: Fn() -> ReadError + Send + Sync + 'static,
    {
        self.path_missing = Arc::new(builder);
        self
    }

    /// Replaces the builder used on a type mismatch; receives (expected, actual).
    pub fn invalid_type_with<F>(mut self, builder: F) -> Self
    where
        F: Fn(ValueType, ValueType) -> ReadError + Send + Sync + 'static,
    {
        self.invalid_type = Arc::new(builder);
        self
    }

    /// Replaces the builder used when a number does not fit its target type;
    /// receives (number text, target type name).
    pub fn value_cast_with<F>(mut self, builder: F) -> Self
    where
        F: Fn(&str, &str) -> ReadError + Send + Sync + 'static,
    {
        self.value_cast = Arc::new(builder);
        self
    }

    pub fn path_missing(&self) -> ReadError {
        (self.path_missing)()
    }

    pub fn invalid_type(&self, expected: ValueType, actual: ValueType) -> ReadError {
        (self.invalid_type)(expected, actual)
    }

    pub fn value_cast(&self, value: &str, target: &str) -> ReadError {
        (self.value_cast)(value, target)
    }
}

impl Default for ErrorBuilders {
    fn default() -> Self {
        Self {
            path_missing: Arc::new(ReadError::path_missing),
            invalid_type: Arc::new(ReadError::invalid_type),
            value_cast: Arc::new(ReadError::value_cast),
        }
    }
}

impl fmt::Debug for ErrorBuilders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBuilders").finish_non_exhaustive()
    }
}
