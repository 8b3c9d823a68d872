//! Reader adapters returned by [`ReaderExt`](super::ReaderExt).

use stillwater::prelude::*;

use crate::context::ReaderContext;
use crate::location::Location;
use crate::result::ReadResult;
use crate::validator::Validator;
use crate::value::Value;

use super::Reader;

/// Maps the value of a successful read. See [`ReaderExt::map`](super::ReaderExt::map).
#[derive(Clone)]
pub struct Map<R, F> {
    reader: R,
    f: F,
}

impl<R, F> Map<R, F> {
    pub(crate) fn new(reader: R, f: F) -> Self {
        Self { reader, f }
    }
}

impl<R, F, U> Reader for Map<R, F>
where
    R: Reader,
    F: Fn(R::Output) -> U + Send + Sync,
{
    type Output = U;

    fn read(&self, context: &ReaderContext, location: &Location, input: &Value) -> ReadResult<U> {
        self.reader.read(context, location, input).map(&self.f)
    }
}

/// Chains a fallible step. See [`ReaderExt::and_then`](super::ReaderExt::and_then).
#[derive(Clone)]
pub struct AndThen<R, F> {
    reader: R,
    f: F,
}

impl<R, F> AndThen<R, F> {
    pub(crate) fn new(reader: R, f: F) -> Self {
        Self { reader, f }
    }
}

impl<R, F, U> Reader for AndThen<R, F>
where
    R: Reader,
    F: Fn(&ReaderContext, &Location, R::Output) -> ReadResult<U> + Send + Sync,
{
    type Output = U;

    fn read(&self, context: &ReaderContext, location: &Location, input: &Value) -> ReadResult<U> {
        self.reader
            .read(context, location, input)
            .and_then(|location, value| (self.f)(context, location, value))
    }
}

/// Validates successful reads. See [`ReaderExt::validation`](super::ReaderExt::validation).
#[derive(Clone)]
pub struct Validated<R, V> {
    reader: R,
    validator: V,
}

impl<R, V> Validated<R, V> {
    pub(crate) fn new(reader: R, validator: V) -> Self {
        Self { reader, validator }
    }
}

impl<R, V> Reader for Validated<R, V>
where
    R: Reader,
    V: Validator<Value = R::Output>,
{
    type Output = R::Output;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> ReadResult<R::Output> {
        self.reader
            .read(context, location, input)
            .validate(context, &self.validator)
    }
}

/// Alternative readers. See [`ReaderExt::or`](super::ReaderExt::or).
///
/// The second reader only runs when the first fails without a critical
/// error. When both fail, both failures are reported, first reader first.
#[derive(Clone)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Reader for Or<A, B>
where
    A: Reader,
    B: Reader<Output = A::Output>,
{
    type Output = A::Output;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> ReadResult<A::Output> {
        self.first
            .read(context, location, input)
            .or_else(|first| {
                if first.is_critical() {
                    return ReadResult::Failure(first);
                }
                self.second
                    .read(context, location, input)
                    .or_else(|second| ReadResult::Failure(first.combine(second)))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorBuilders, ReadError};
    use crate::reader::{self, ReaderExt};
    use crate::validator::string;

    fn read<R: Reader>(reader: &R, input: &Value) -> ReadResult<R::Output> {
        reader.read(&ReaderContext::new(), &(Location::root() / "field"), input)
    }

    #[test]
    fn test_map() {
        let reader = reader::string(&ErrorBuilders::default()).map(|s| s.len());
        assert_eq!(
            read(&reader, &Value::from("abc")),
            ReadResult::success(Location::root() / "field", 3)
        );
    }

    #[test]
    fn test_and_then_failure_is_located() {
        let reader = reader::string(&ErrorBuilders::default()).and_then(|_, location, s| {
            s.parse::<u8>().map_or_else(
                |_| ReadResult::failure(location.clone(), ReadError::new("not a byte")),
                |b| ReadResult::success(location.clone(), b),
            )
        });

        let result = read(&reader, &Value::from("300"));
        let failure = result.failure_ref().unwrap();
        assert_eq!(failure.first().location, Location::root() / "field");
        assert_eq!(failure.first().errors.first().message, "not a byte");
    }

    #[test]
    fn test_validation_runs_on_success_only() {
        let reader = reader::string(&ErrorBuilders::default()).validation(string::is_not_empty());

        assert!(read(&reader, &Value::from("x")).is_success());

        let failed = read(&reader, &Value::from(""));
        assert_eq!(failed.failure_ref().unwrap().first().errors.first().code, "is_empty");

        // the type error comes through untouched
        let mismatch = read(&reader, &Value::Null);
        assert_eq!(
            mismatch.failure_ref().unwrap().first().errors.first().code,
            "invalid_type"
        );
    }

    #[test]
    fn test_or_falls_back_and_merges() {
        let builders = ErrorBuilders::default();
        let reader = reader::string(&builders).or(reader::integer::<i64>(&builders).map(|n| n.to_string()));

        assert_eq!(read(&reader, &Value::from(7)).into_result().unwrap(), "7");

        let failed = read(&reader, &Value::from(true));
        assert_eq!(failed.failure_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_or_stops_on_critical() {
        let builders = ErrorBuilders::default();
        let strict = reader::from_fn(|_, location: &Location, _: &Value| {
            ReadResult::<String>::failure(location.clone(), ReadError::new("halt").critical())
        });
        let reader = strict.or(reader::string(&builders));

        let failed = read(&reader, &Value::from("fine"));
        assert_eq!(failed.failure_ref().unwrap().len(), 1);
        assert!(failed.failure_ref().unwrap().is_critical());
    }
}
