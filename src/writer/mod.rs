//! Writers: typed encoders into the value tree.
//!
//! A [`Writer`] is the inverse of a [`Reader`](crate::Reader): it turns a
//! typed value into a [`Value`]. Writers cannot fail. Absent values are
//! handled by the cardinality helpers ([`write_required`], [`write_optional`],
//! [`write_nullable`]) and by [`ObjectWriter`], which omits absent optional
//! properties and writes absent nullable ones as `null`.

mod base;
mod object;

use std::marker::PhantomData;
use std::sync::Arc;

pub use base::{boolean, float, integer, number, string};
pub use object::ObjectWriter;

use crate::value::Value;

/// A typed encoder.
pub trait Writer: Send + Sync {
    /// The type of value this writer encodes.
    type Input: ?Sized;

    fn write(&self, value: &Self::Input) -> Value;
}

impl<W: Writer + ?Sized> Writer for Arc<W> {
    type Input = W::Input;

    fn write(&self, value: &Self::Input) -> Value {
        (**self).write(value)
    }
}

impl<W: Writer + ?Sized> Writer for Box<W> {
    type Input = W::Input;

    fn write(&self, value: &Self::Input) -> Value {
        (**self).write(value)
    }
}

/// A writer backed by a closure. Created by [`from_fn`].
pub struct FnWriter<F, T: ?Sized> {
    f: F,
    _input: PhantomData<fn(&T)>,
}

impl<F: Clone, T: ?Sized> Clone for FnWriter<F, T> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _input: PhantomData,
        }
    }
}

impl<F, T> Writer for FnWriter<F, T>
where
    T: ?Sized,
    F: Fn(&T) -> Value + Send + Sync,
{
    type Input = T;

    fn write(&self, value: &T) -> Value {
        (self.f)(value)
    }
}

/// Creates a writer from a closure.
pub fn from_fn<T, F>(f: F) -> FnWriter<F, T>
where
    T: ?Sized,
    F: Fn(&T) -> Value + Send + Sync,
{
    FnWriter {
        f,
        _input: PhantomData,
    }
}

/// Writes a value that is always present.
pub fn write_required<W: Writer + ?Sized>(writer: &W, value: &W::Input) -> Value {
    writer.write(value)
}

/// Writes a value that may be absent; `None` produces no value at all.
pub fn write_optional<W>(writer: &W, value: Option<&W::Input>) -> Option<Value>
where
    W: Writer + ?Sized,
{
    value.map(|value| writer.write(value))
}

/// Writes a value that may be absent; `None` produces `null`.
pub fn write_nullable<W>(writer: &W, value: Option<&W::Input>) -> Value
where
    W: Writer + ?Sized,
{
    write_optional(writer, value).unwrap_or(Value::Null)
}

/// Writes a `Vec` as an array, preserving element order.
#[derive(Clone)]
pub struct ArrayWriter<W> {
    writer: W,
}

impl<W> Writer for ArrayWriter<W>
where
    W: Writer,
    W::Input: Sized,
{
    type Input = Vec<W::Input>;

    fn write(&self, value: &Vec<W::Input>) -> Value {
        Value::Array(value.iter().map(|item| self.writer.write(item)).collect())
    }
}

/// Creates a writer for `Vec`s whose elements are written with `writer`.
///
/// ```rust
/// use waypoint::writer::{self, Writer};
/// use waypoint::Value;
///
/// let tags = writer::array_writer(writer::string());
/// let value = tags.write(&vec!["a".to_string(), "b".to_string()]);
///
/// assert_eq!(value, Value::array([Value::from("a"), Value::from("b")]));
/// ```
pub fn array_writer<W>(writer: W) -> ArrayWriter<W>
where
    W: Writer,
    W::Input: Sized,
{
    ArrayWriter { writer }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_helpers() {
        let writer = string();
        let name = "ann".to_string();

        assert_eq!(write_required(&writer, &name), Value::from("ann"));
        assert_eq!(write_optional(&writer, Some(&name)), Some(Value::from("ann")));
        assert_eq!(write_optional(&writer, None), None);
        assert_eq!(write_nullable(&writer, None), Value::Null);
        assert_eq!(write_nullable(&writer, Some(&name)), Value::from("ann"));
    }

    #[test]
    fn test_array_writer_empty() {
        let writer = array_writer(integer::<i32>());
        assert_eq!(writer.write(&Vec::new()), Value::array([]));
    }

    #[test]
    fn test_from_fn() {
        let upper = from_fn(|s: &String| Value::from(s.to_uppercase()));
        assert_eq!(upper.write(&"ab".to_string()), Value::from("AB"));
    }
}
