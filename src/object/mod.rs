//! Object assembly.
//!
//! An [`ObjectReader`] binds declared properties, each with its own
//! [`Cardinality`], to readers, runs object-level validators around them and
//! hands the collected [`ObjectValues`] to an assembler that builds the typed
//! result.
//!
//! # Example
//!
//! ```rust
//! use waypoint::object::validator::{self, ObjectValidators};
//! use waypoint::object::{ObjectReaderConfiguration, ObjectReaderDefaults};
//! use waypoint::reader::{self, ReaderExt};
//! use waypoint::validator::string;
//! use waypoint::{ReadResult, ReaderContext, Value};
//!
//! #[derive(Debug, PartialEq)]
//! struct Lot {
//!     id: String,
//!     status: String,
//! }
//!
//! let defaults = ObjectReaderDefaults::new()
//!     .configuration(ObjectReaderConfiguration { fail_fast: false })
//!     .validators(ObjectValidators::new().with_before("additional_properties", validator::additional_properties()));
//!
//! let mut builder = defaults.builder::<Lot>();
//! let text = reader::string(defaults.builders());
//! let id = builder.property("id", text.clone()).required();
//! let status = builder.property("status", text.validation(string::is_not_blank())).required();
//! let lots = builder.build(move |_, location, values| {
//!     ReadResult::success(location.clone(), Lot { id: values[&id].clone(), status: values[&status].clone() })
//! });
//!
//! let input = Value::object([("id", Value::from("L1")), ("status", Value::from("open"))]);
//! let lot = input.deserialize(&ReaderContext::new(), &lots).into_result().unwrap();
//! assert_eq!(lot, Lot { id: "L1".into(), status: "open".into() });
//!
//! let extra = Value::object([("id", Value::from("L1")), ("price", Value::from(3))]);
//! let failure = extra.deserialize(&ReaderContext::new(), &lots).into_result().unwrap_err();
//! assert_eq!(failure.first().errors.first().code, "additional_property");
//! ```

mod config;
mod property;
mod reader;
pub mod validator;
mod values;

pub use config::{ObjectReaderConfiguration, ObjectReaderDefaults};
pub use property::{Cardinality, CardinalityKind, DefaultFn, PropertyHandle, PropertyInfo};
pub use reader::{ObjectReader, ObjectReaderBuilder, PropertyBinder};
pub use validator::{AfterValidator, BeforeValidator, ObjectValidators};
pub use values::ObjectValues;
