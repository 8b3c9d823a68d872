//! Primitive writers.

use crate::value::{Number, Value};

use super::{from_fn, Writer};

pub fn boolean() -> impl Writer<Input = bool> + Clone {
    from_fn(|value: &bool| Value::Boolean(*value))
}

pub fn string() -> impl Writer<Input = String> + Clone {
    from_fn(|value: &String| Value::String(value.clone()))
}

/// Writes the number text unchanged.
pub fn number() -> impl Writer<Input = Number> + Clone {
    from_fn(|value: &Number| Value::Number(value.clone()))
}

/// Writes an integer as its decimal text.
pub fn integer<T>() -> impl Writer<Input = T> + Clone
where
    T: Copy + Into<Number> + Send + Sync + 'static,
{
    from_fn(|value: &T| Value::Number((*value).into()))
}

/// Writes an `f64` in its shortest round-trip form. NaN and the infinities
/// have no number representation and are written as `null`.
pub fn float() -> impl Writer<Input = f64> + Clone {
    from_fn(|value: &f64| {
        Number::from_f64(*value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    })
}
