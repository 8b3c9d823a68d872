//! Primitive readers.
//!
//! Each reader is built from the [`ErrorBuilders`] it should report type
//! mismatches with, and accepts exactly one kind of [`Value`].

use std::any::type_name;
use std::str::FromStr;

use crate::context::ReaderContext;
use crate::error::ErrorBuilders;
use crate::location::Location;
use crate::result::ReadResult;
use crate::value::{Number, Value, ValueType};

use super::{from_fn, Reader};

/// Reads a boolean.
pub fn boolean(builders: &ErrorBuilders) -> impl Reader<Output = bool> + Clone {
    let builders = builders.clone();
    from_fn(move |_: &ReaderContext, location: &Location, input: &Value| match input {
        Value::Boolean(b) => ReadResult::success(location.clone(), *b),
        other => ReadResult::failure(
            location.clone(),
            builders.invalid_type(ValueType::Boolean, other.value_type()),
        ),
    })
}

/// Reads a string.
pub fn string(builders: &ErrorBuilders) -> impl Reader<Output = String> + Clone {
    let builders = builders.clone();
    from_fn(move |_: &ReaderContext, location: &Location, input: &Value| match input {
        Value::String(s) => ReadResult::success(location.clone(), s.clone()),
        other => ReadResult::failure(
            location.clone(),
            builders.invalid_type(ValueType::String, other.value_type()),
        ),
    })
}

/// Reads a number without conversion, keeping its full precision.
pub fn number(builders: &ErrorBuilders) -> impl Reader<Output = Number> + Clone {
    let builders = builders.clone();
    from_fn(move |_: &ReaderContext, location: &Location, input: &Value| match input {
        Value::Number(n) => ReadResult::success(location.clone(), n.clone()),
        other => ReadResult::failure(
            location.clone(),
            builders.invalid_type(ValueType::Number, other.value_type()),
        ),
    })
}

/// Reads an integral number into `T`.
///
/// Numbers with a fraction or exponent, and numbers outside the range of
/// `T`, are rejected with the `value_cast` error.
///
/// ```rust
/// use waypoint::{reader, ErrorBuilders, Location, Reader, ReaderContext, Value};
///
/// let builders = ErrorBuilders::default();
/// let byte = reader::integer::<u8>(&builders);
/// let context = ReaderContext::new();
///
/// assert!(byte.read(&context, &Location::root(), &Value::from(255)).is_success());
/// assert!(byte.read(&context, &Location::root(), &Value::from(256)).is_failure());
/// ```
pub fn integer<T>(builders: &ErrorBuilders) -> impl Reader<Output = T> + Clone
where
    T: FromStr + Send + Sync + 'static,
{
    let builders = builders.clone();
    from_fn(move |_: &ReaderContext, location: &Location, input: &Value| match input {
        Value::Number(n) if n.is_integral() => match n.parse::<T>() {
            Ok(value) => ReadResult::success(location.clone(), value),
            Err(_) => ReadResult::failure(
                location.clone(),
                builders.value_cast(n.as_str(), type_name::<T>()),
            ),
        },
        Value::Number(n) => ReadResult::failure(
            location.clone(),
            builders.value_cast(n.as_str(), type_name::<T>()),
        ),
        other => ReadResult::failure(
            location.clone(),
            builders.invalid_type(ValueType::Number, other.value_type()),
        ),
    })
}

/// Reads a number as `f64`. Precision beyond `f64` is rounded.
pub fn float(builders: &ErrorBuilders) -> impl Reader<Output = f64> + Clone {
    let builders = builders.clone();
    from_fn(move |_: &ReaderContext, location: &Location, input: &Value| match input {
        Value::Number(n) => match n.parse::<f64>() {
            Ok(value) if value.is_finite() => ReadResult::success(location.clone(), value),
            _ => ReadResult::failure(location.clone(), builders.value_cast(n.as_str(), "f64")),
        },
        other => ReadResult::failure(
            location.clone(),
            builders.invalid_type(ValueType::Number, other.value_type()),
        ),
    })
}
