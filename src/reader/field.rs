//! Cardinality functions.
//!
//! Each function maps the outcome of a [`Lookup`] to a result, differing only
//! in how a missing value and an explicit `null` are treated:
//!
//! | function                     | missing         | `null`          |
//! |------------------------------|-----------------|-----------------|
//! | [`read_required`]            | error           | reader decides  |
//! | [`read_optional`]            | `None`          | `None`          |
//! | [`read_nullable`]            | error           | `None`          |
//! | [`read_with_default`]        | default         | reader decides  |
//! | [`read_optional_with_default`] | `Some(default)` | `None`        |
//! | [`read_nullable_with_default`] | default       | default         |
//!
//! A container type mismatch on the way to the value is always an error.

use crate::context::ReaderContext;
use crate::error::ErrorBuilders;
use crate::lookup::{Lookup, Undefined};
use crate::result::ReadResult;
use crate::value::Value;

use super::Reader;

fn undefined_failure<T>(undefined: Undefined, builders: &ErrorBuilders) -> ReadResult<T> {
    match undefined {
        Undefined::PathMissing { location } => {
            ReadResult::failure(location, builders.path_missing())
        }
        Undefined::InvalidType {
            location,
            expected,
            actual,
        } => ReadResult::failure(location, builders.invalid_type(expected, actual)),
    }
}

/// A value that must be present; `null` is handed to the reader, which
/// rejects it unless it explicitly accepts null.
pub fn read_required<R>(
    context: &ReaderContext,
    lookup: Lookup<'_>,
    reader: &R,
    builders: &ErrorBuilders,
) -> ReadResult<R::Output>
where
    R: Reader + ?Sized,
{
    match lookup {
        Lookup::Defined { location, value } => reader.read(context, &location, value),
        Lookup::Undefined(undefined) => undefined_failure(undefined, builders),
    }
}

/// A value that may be absent or `null`.
pub fn read_optional<R>(
    context: &ReaderContext,
    lookup: Lookup<'_>,
    reader: &R,
    builders: &ErrorBuilders,
) -> ReadResult<Option<R::Output>>
where
    R: Reader + ?Sized,
{
    match lookup {
        Lookup::Defined {
            location,
            value: Value::Null,
        } => ReadResult::success(location, None),
        Lookup::Defined { location, value } => reader.read(context, &location, value).map(Some),
        Lookup::Undefined(Undefined::PathMissing { location }) => {
            ReadResult::success(location, None)
        }
        Lookup::Undefined(undefined) => undefined_failure(undefined, builders),
    }
}

/// A value that must be present but may be `null`.
pub fn read_nullable<R>(
    context: &ReaderContext,
    lookup: Lookup<'_>,
    reader: &R,
    builders: &ErrorBuilders,
) -> ReadResult<Option<R::Output>>
where
    R: Reader + ?Sized,
{
    match lookup {
        Lookup::Defined {
            location,
            value: Value::Null,
        } => ReadResult::success(location, None),
        Lookup::Defined { location, value } => reader.read(context, &location, value).map(Some),
        Lookup::Undefined(undefined) => undefined_failure(undefined, builders),
    }
}

/// A value replaced by `default` when absent; `null` goes to the reader.
pub fn read_with_default<R, D>(
    context: &ReaderContext,
    lookup: Lookup<'_>,
    reader: &R,
    default: D,
    builders: &ErrorBuilders,
) -> ReadResult<R::Output>
where
    R: Reader + ?Sized,
    D: FnOnce() -> R::Output,
{
    match lookup {
        Lookup::Defined { location, value } => reader.read(context, &location, value),
        Lookup::Undefined(Undefined::PathMissing { location }) => {
            ReadResult::success(location, default())
        }
        Lookup::Undefined(undefined) => undefined_failure(undefined, builders),
    }
}

/// A value replaced by `default` when absent and read as `None` when `null`.
pub fn read_optional_with_default<R, D>(
    context: &ReaderContext,
    lookup: Lookup<'_>,
    reader: &R,
    default: D,
    builders: &ErrorBuilders,
) -> ReadResult<Option<R::Output>>
where
    R: Reader + ?Sized,
    D: FnOnce() -> R::Output,
{
    match lookup {
        Lookup::Defined {
            location,
            value: Value::Null,
        } => ReadResult::success(location, None),
        Lookup::Defined { location, value } => reader.read(context, &location, value).map(Some),
        Lookup::Undefined(Undefined::PathMissing { location }) => {
            ReadResult::success(location, Some(default()))
        }
        Lookup::Undefined(undefined) => undefined_failure(undefined, builders),
    }
}

/// A value replaced by `default` when absent or `null`.
pub fn read_nullable_with_default<R, D>(
    context: &ReaderContext,
    lookup: Lookup<'_>,
    reader: &R,
    default: D,
    builders: &ErrorBuilders,
) -> ReadResult<R::Output>
where
    R: Reader + ?Sized,
    D: FnOnce() -> R::Output,
{
    match lookup {
        Lookup::Defined {
            location,
            value: Value::Null,
        } => ReadResult::success(location, default()),
        Lookup::Defined { location, value } => reader.read(context, &location, value),
        Lookup::Undefined(Undefined::PathMissing { location }) => {
            ReadResult::success(location, default())
        }
        Lookup::Undefined(undefined) => undefined_failure(undefined, builders),
    }
}
