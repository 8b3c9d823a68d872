//! Readers: typed decoders over the value tree.
//!
//! A [`Reader`] turns the [`Value`] found at a [`Location`] into a
//! [`ReadResult`]. Readers are pure and `Send + Sync`; the same reader can be
//! used for any number of concurrent reads.
//!
//! This module also provides the composition operators ([`ReaderExt`]), the
//! six cardinality functions that turn a [`Lookup`](crate::Lookup) into a
//! result, the collection readers, and the primitive readers.
//!
//! # Example
//!
//! ```rust
//! use waypoint::reader::{self, ReaderExt};
//! use waypoint::{ErrorBuilders, Location, Reader, ReaderContext, Value};
//!
//! let builders = ErrorBuilders::default();
//! let names = reader::list(reader::string(&builders).map(|s| s.to_uppercase()), &builders);
//!
//! let input = Value::array([Value::from("ann"), Value::from("bob")]);
//! let result = names.read(&ReaderContext::new(), &Location::root(), &input);
//!
//! assert_eq!(result.into_result().unwrap(), vec!["ANN", "BOB"]);
//! ```

mod base;
mod collection;
mod combinators;
mod field;

use std::sync::Arc;

pub use base::{boolean, float, integer, number, string};
pub use collection::{list, set, ListReader, SetReader};
pub use combinators::{AndThen, Map, Or, Validated};
pub use field::{
    read_nullable, read_nullable_with_default, read_optional, read_optional_with_default,
    read_required, read_with_default,
};

use crate::context::ReaderContext;
use crate::location::Location;
use crate::result::ReadResult;
use crate::validator::Validator;
use crate::value::Value;

/// A typed decoder.
///
/// The `location` argument is where `input` sits in the document. Readers
/// tag their results with it and hand extended locations to any reader they
/// call for children, so errors from any depth carry their full position.
pub trait Reader: Send + Sync {
    /// The type produced by a successful read.
    type Output;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> ReadResult<Self::Output>;
}

/// A reader shared behind an `Arc`.
pub type BoxedReader<T> = Arc<dyn Reader<Output = T>>;

impl<R: Reader + ?Sized> Reader for Arc<R> {
    type Output = R::Output;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> ReadResult<Self::Output> {
        (**self).read(context, location, input)
    }
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    type Output = R::Output;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> ReadResult<Self::Output> {
        (**self).read(context, location, input)
    }
}

/// A reader backed by a closure. Created by [`from_fn`].
#[derive(Clone)]
pub struct FnReader<F>(F);

impl<T, F> Reader for FnReader<F>
where
    F: Fn(&ReaderContext, &Location, &Value) -> ReadResult<T> + Send + Sync,
{
    type Output = T;

    fn read(&self, context: &ReaderContext, location: &Location, input: &Value) -> ReadResult<T> {
        (self.0)(context, location, input)
    }
}

/// Creates a reader from a closure.
///
/// ```rust
/// use waypoint::reader;
/// use waypoint::{Location, ReadError, ReadResult, Reader, ReaderContext, Value};
///
/// let even = reader::from_fn(|_, location, input| match input {
///     Value::Number(n) if n.as_str().ends_with(['0', '2', '4', '6', '8']) => {
///         ReadResult::success(location.clone(), n.to_string())
///     }
///     _ => ReadResult::failure(location.clone(), ReadError::new("expected an even number")),
/// });
///
/// assert!(even.read(&ReaderContext::new(), &Location::root(), &Value::from(4)).is_success());
/// ```
pub fn from_fn<T, F>(f: F) -> FnReader<F>
where
    F: Fn(&ReaderContext, &Location, &Value) -> ReadResult<T> + Send + Sync,
{
    FnReader(f)
}

/// Composition operators available on every reader.
pub trait ReaderExt: Reader + Sized {
    /// Transforms the value of a successful read.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + Send + Sync,
    {
        Map::new(self, f)
    }

    /// Chains a further decode step that may fail.
    fn and_then<U, F>(self, f: F) -> AndThen<Self, F>
    where
        F: Fn(&ReaderContext, &Location, Self::Output) -> ReadResult<U> + Send + Sync,
    {
        AndThen::new(self, f)
    }

    /// Runs `validator` against every successfully read value.
    fn validation<V>(self, validator: V) -> Validated<Self, V>
    where
        V: Validator<Value = Self::Output>,
    {
        Validated::new(self, validator)
    }

    /// Falls back to `other` when this reader fails.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Reader<Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Erases the reader type.
    fn boxed(self) -> BoxedReader<Self::Output>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<R: Reader> ReaderExt for R {}

/// Reads `input` as a whole document, starting at the root location.
pub fn read_root<R: Reader + ?Sized>(
    context: &ReaderContext,
    reader: &R,
    input: &Value,
) -> ReadResult<R::Output> {
    reader.read(context, &Location::root(), input)
}

impl Value {
    /// Reads this value as a whole document with `reader`.
    ///
    /// ```rust
    /// use waypoint::{reader, ErrorBuilders, ReaderContext, Value};
    ///
    /// let result = Value::from(true).deserialize(&ReaderContext::new(), &reader::boolean(&ErrorBuilders::default()));
    /// assert_eq!(result.into_result().unwrap(), true);
    /// ```
    pub fn deserialize<R: Reader + ?Sized>(
        &self,
        context: &ReaderContext,
        reader: &R,
    ) -> ReadResult<R::Output> {
        read_root(context, reader, self)
    }
}
