//! Array readers.
//!
//! [`list`] and [`set`] apply an element reader to every array entry at its
//! index-extended location. They never stop early: a failure is reported for
//! every failing index, in ascending order.

use std::hash::Hash;

use indexmap::IndexSet;
use stillwater::prelude::*;

use crate::context::ReaderContext;
use crate::error::ErrorBuilders;
use crate::location::Location;
use crate::result::{Failure, ReadResult};
use crate::value::{Value, ValueType};

use super::Reader;

/// Reads every element of an array, accumulating all element failures.
fn read_elements<R, C>(
    reader: &R,
    builders: &ErrorBuilders,
    context: &ReaderContext,
    location: &Location,
    input: &Value,
) -> ReadResult<C>
where
    R: Reader,
    C: Default + Extend<R::Output>,
{
    let items = match input {
        Value::Array(items) => items,
        other => {
            return ReadResult::failure(
                location.clone(),
                builders.invalid_type(ValueType::Array, other.value_type()),
            )
        }
    };

    let mut values = C::default();
    let mut failure: Option<Failure> = None;

    for (idx, item) in items.iter().enumerate() {
        match reader.read(context, &location.append(idx), item) {
            ReadResult::Success { value, .. } => {
                if failure.is_none() {
                    values.extend(std::iter::once(value));
                }
            }
            ReadResult::Failure(f) => {
                failure = Some(match failure {
                    Some(acc) => acc.combine(f),
                    None => f,
                });
            }
        }
    }

    match failure {
        Some(failure) => {
            tracing::trace!(
                location = %location,
                causes = failure.len(),
                "array elements failed to read"
            );
            ReadResult::Failure(failure)
        }
        None => ReadResult::success(location.clone(), values),
    }
}

/// Reads an array into a `Vec`, preserving element order.
#[derive(Clone)]
pub struct ListReader<R> {
    reader: R,
    builders: ErrorBuilders,
}

impl<R: Reader> Reader for ListReader<R> {
    type Output = Vec<R::Output>;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> ReadResult<Self::Output> {
        read_elements(&self.reader, &self.builders, context, location, input)
    }
}

/// Reads an array into an `IndexSet`, collapsing equal decoded values.
#[derive(Clone)]
pub struct SetReader<R> {
    reader: R,
    builders: ErrorBuilders,
}

impl<R> Reader for SetReader<R>
where
    R: Reader,
    R::Output: Eq + Hash,
{
    type Output = IndexSet<R::Output>;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> ReadResult<Self::Output> {
        read_elements(&self.reader, &self.builders, context, location, input)
    }
}

/// Creates a reader for arrays whose elements are read with `reader`.
///
/// # Example
///
/// ```rust
/// use waypoint::{reader, ErrorBuilders, Location, Reader, ReaderContext, Value};
///
/// let builders = ErrorBuilders::default();
/// let phones = reader::list(reader::string(&builders), &builders);
///
/// let input = Value::array([Value::from("a"), Value::from(10), Value::from(true), Value::from("b")]);
/// let failure = phones
///     .read(&ReaderContext::new(), &Location::root(), &input)
///     .into_result()
///     .unwrap_err();
///
/// let locations: Vec<_> = failure.causes().map(|c| c.location.to_string()).collect();
/// assert_eq!(locations, vec!["#/[1]", "#/[2]"]);
/// ```
pub fn list<R: Reader>(reader: R, builders: &ErrorBuilders) -> ListReader<R> {
    ListReader {
        reader,
        builders: builders.clone(),
    }
}

/// Creates a reader for arrays collapsed into a set of distinct values.
pub fn set<R>(reader: R, builders: &ErrorBuilders) -> SetReader<R>
where
    R: Reader,
    R::Output: Eq + Hash,
{
    SetReader {
        reader,
        builders: builders.clone(),
    }
}
