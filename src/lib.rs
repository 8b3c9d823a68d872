//! # Waypoint
//!
//! Readers and writers for JSON-shaped value trees that report every error
//! together with the exact location it was found at.
//!
//! ## Overview
//!
//! A [`Reader`] decodes the [`Value`] at a [`Location`] into a typed result.
//! Readers compose: nested readers receive the full location of the value
//! they read, so an error found deep inside a document carries its complete
//! path. Failures from independent parts of a document are merged rather than
//! short-circuited, unless a reader is configured to fail fast or an error is
//! tagged critical. Error sets are built on stillwater's `NonEmptyVec` and
//! `Semigroup`.
//!
//! ## Core Types
//!
//! - [`Value`]: the document model (null, boolean, number, string, array, object)
//! - [`JsonPath`] and [`Location`]: addresses of values inside a document
//! - [`Lookup`]: the outcome of resolving a path against a value
//! - [`ReadResult`]: a located success, or a [`Failure`] listing every [`Cause`]
//! - [`ReadError`] and [`ReadErrors`]: what went wrong at one location
//! - [`object::ObjectReader`]: assembles typed values from declared properties
//!
//! ## Example
//!
//! ```rust
//! use waypoint::reader::{self, ReaderExt};
//! use waypoint::validator::order;
//! use waypoint::{ErrorBuilders, Location, Reader, ReaderContext, Value};
//!
//! let builders = ErrorBuilders::default();
//! let ages = reader::list(reader::integer::<i64>(&builders).validation(order::min(0)), &builders);
//!
//! let input = Value::array([Value::from(31), Value::from(-2), Value::from("x")]);
//! let failure = ages
//!     .read(&ReaderContext::new(), &(Location::root() / "ages"), &input)
//!     .into_result()
//!     .unwrap_err();
//!
//! let located: Vec<_> = failure
//!     .causes()
//!     .map(|cause| (cause.location.to_string(), cause.errors.first().code.clone()))
//!     .collect();
//! assert_eq!(
//!     located,
//!     vec![
//!         ("#/ages[1]".to_string(), "min_value".to_string()),
//!         ("#/ages[2]".to_string(), "invalid_type".to_string()),
//!     ]
//! );
//! ```

pub mod context;
pub mod error;
pub mod interop;
pub mod location;
pub mod lookup;
pub mod object;
pub mod path;
pub mod reader;
pub mod result;
pub mod validator;
pub mod value;
pub mod writer;

pub use context::ReaderContext;
pub use error::{ErrorBuilders, ReadError, ReadErrors};
pub use location::Location;
pub use lookup::{lookup, Lookup, Undefined};
pub use path::{JsonPath, PathElement};
pub use reader::{read_root, Reader, ReaderExt};
pub use result::{merge_failures, Cause, Failure, ReadResult};
pub use validator::{ValidationResult, Validator, ValidatorExt};
pub use value::{Number, NumberError, Object, Value, ValueType};
pub use writer::Writer;
