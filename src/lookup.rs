//! Path resolution against a value tree.
//!
//! [`lookup`] walks a [`JsonPath`] through a [`Value`] and classifies the
//! outcome as [`Lookup::Defined`] or one of the two [`Undefined`] reasons. The
//! scan is iterative and never backtracks.

use crate::location::Location;
use crate::path::{JsonPath, PathElement};
use crate::value::{Value, ValueType};

/// Why a path could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Undefined {
    /// A member or index was absent, but every node had the expected kind.
    PathMissing { location: Location },
    /// A node was not the container the next path element required.
    InvalidType {
        location: Location,
        expected: ValueType,
        actual: ValueType,
    },
}

impl Undefined {
    pub fn location(&self) -> &Location {
        match self {
            Undefined::PathMissing { location } => location,
            Undefined::InvalidType { location, .. } => location,
        }
    }
}

/// The outcome of resolving a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    /// The whole path resolved to `value` at `location`.
    Defined { location: Location, value: &'a Value },
    Undefined(Undefined),
}

impl<'a> Lookup<'a> {
    /// Resolves a single element against `value` found at `location`.
    pub fn element(location: &Location, element: &PathElement, value: &'a Value) -> Lookup<'a> {
        match element {
            PathElement::Key(name) => match value {
                Value::Object(object) => match object.get(name) {
                    Some(member) => Lookup::Defined {
                        location: location.append(name.as_str()),
                        value: member,
                    },
                    None => Lookup::Undefined(Undefined::PathMissing {
                        location: location.append(name.as_str()),
                    }),
                },
                other => Lookup::Undefined(Undefined::InvalidType {
                    location: location.clone(),
                    expected: ValueType::Object,
                    actual: other.value_type(),
                }),
            },
            PathElement::Index(idx) => match value {
                Value::Array(items) => match items.get(*idx) {
                    Some(item) => Lookup::Defined {
                        location: location.append(*idx),
                        value: item,
                    },
                    None => Lookup::Undefined(Undefined::PathMissing {
                        location: location.append(*idx),
                    }),
                },
                other => Lookup::Undefined(Undefined::InvalidType {
                    location: location.clone(),
                    expected: ValueType::Array,
                    actual: other.value_type(),
                }),
            },
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Lookup::Defined { .. })
    }

    /// Returns the location this outcome refers to.
    pub fn location(&self) -> &Location {
        match self {
            Lookup::Defined { location, .. } => location,
            Lookup::Undefined(undefined) => undefined.location(),
        }
    }
}

/// Resolves `path` against `value`, which sits at `location`.
///
/// # Example
///
/// ```rust
/// use waypoint::{lookup, JsonPath, Location, Lookup, Value};
///
/// let doc = Value::object([("user", Value::object([("name", Value::from("Bob"))]))]);
///
/// match lookup(&Location::root(), &(JsonPath::empty() / "user" / "name"), &doc) {
///     Lookup::Defined { location, value } => {
///         assert_eq!(location.to_string(), "#/user.name");
///         assert_eq!(value, &Value::from("Bob"));
///     }
///     Lookup::Undefined(_) => unreachable!(),
/// }
/// ```
pub fn lookup<'a>(location: &Location, path: &JsonPath, value: &'a Value) -> Lookup<'a> {
    let mut current_location = location.clone();
    let mut current_value = value;

    for element in path.iter() {
        match Lookup::element(&current_location, element, current_value) {
            Lookup::Defined { location, value } => {
                current_location = location;
                current_value = value;
            }
            undefined => return undefined,
        }
    }

    Lookup::Defined {
        location: current_location,
        value: current_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Value {
        Value::object([
            ("name", Value::from("user")),
            (
                "phones",
                Value::array([Value::from("123"), Value::from("456")]),
            ),
        ])
    }

    #[test]
    fn test_empty_path_is_defined_at_start() {
        let doc = document();
        let start = Location::root() / "body";

        let outcome = lookup(&start, &JsonPath::empty(), &doc);
        assert_eq!(
            outcome,
            Lookup::Defined {
                location: start,
                value: &doc
            }
        );
    }

    #[test]
    fn test_nested_index_is_defined() {
        let doc = document();
        let outcome = lookup(&Location::root(), &(JsonPath::empty() / "phones" / 1), &doc);

        assert_eq!(
            outcome,
            Lookup::Defined {
                location: Location::root() / "phones" / 1,
                value: &Value::from("456"),
            }
        );
    }

    #[test]
    fn test_missing_key_is_path_missing_at_extended_location() {
        let doc = document();
        let outcome = lookup(&Location::root(), &JsonPath::from_key("age"), &doc);

        assert_eq!(
            outcome,
            Lookup::Undefined(Undefined::PathMissing {
                location: Location::root() / "age"
            })
        );
    }

    #[test]
    fn test_index_out_of_range_is_path_missing() {
        let doc = document();
        let outcome = lookup(&Location::root(), &(JsonPath::empty() / "phones" / 5), &doc);

        assert_eq!(
            outcome,
            Lookup::Undefined(Undefined::PathMissing {
                location: Location::root() / "phones" / 5
            })
        );
    }

    #[test]
    fn test_key_on_non_object_is_invalid_type_at_current_location() {
        let doc = document();
        let outcome = lookup(
            &Location::root(),
            &(JsonPath::empty() / "name" / "first"),
            &doc,
        );

        assert_eq!(
            outcome,
            Lookup::Undefined(Undefined::InvalidType {
                location: Location::root() / "name",
                expected: ValueType::Object,
                actual: ValueType::String,
            })
        );
    }

    #[test]
    fn test_index_on_non_array_is_invalid_type() {
        let doc = document();
        let outcome = lookup(&Location::root(), &JsonPath::from_index(0), &doc);

        assert_eq!(
            outcome,
            Lookup::Undefined(Undefined::InvalidType {
                location: Location::root(),
                expected: ValueType::Array,
                actual: ValueType::Object,
            })
        );
    }

    #[test]
    fn test_invalid_type_takes_precedence_over_missing() {
        // "missing" would also be absent, but the mismatch is reported first
        let doc = Value::from(10);
        let outcome = lookup(&Location::root(), &(JsonPath::empty() / "missing" / "deeper"), &doc);

        assert!(matches!(
            outcome,
            Lookup::Undefined(Undefined::InvalidType {
                expected: ValueType::Object,
                actual: ValueType::Number,
                ..
            })
        ));
    }
}
