//! The structured value tree.
//!
//! This module provides [`Value`], the JSON-shaped document model every reader
//! consumes and every writer produces, together with [`Number`] (a validated
//! decimal text that keeps full precision) and [`ValueType`] for diagnostics.

use std::fmt::{self, Display};
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered mapping of member names to values.
pub type Object = IndexMap<String, Value>;

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$")
        .expect("number pattern is a valid regex")
});

/// Error returned when text is not a valid number literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("'{0}' is not a valid number literal")]
    InvalidLiteral(String),
    #[error("non-finite floating point value cannot be represented")]
    NonFinite,
}

/// A number kept as its decimal text.
///
/// The text always satisfies the JSON number grammar, so no precision is lost
/// between reading a document and handing the number to a typed reader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Creates a number from decimal text, validating the literal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::Number;
    ///
    /// assert!(Number::new("-12.5e3").is_ok());
    /// assert!(Number::new("01").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, NumberError> {
        let text = text.into();
        if NUMBER_PATTERN.is_match(&text) {
            Ok(Self(text))
        } else {
            Err(NumberError::InvalidLiteral(text))
        }
    }

    /// Wraps text already known to satisfy the number grammar.
    pub(crate) fn trusted(text: String) -> Self {
        Self(text)
    }

    /// Creates a number from a finite `f64` using its shortest round-trip text.
    pub fn from_f64(value: f64) -> Result<Self, NumberError> {
        if !value.is_finite() {
            return Err(NumberError::NonFinite);
        }
        Self::new(value.to_string())
    }

    /// Returns the decimal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the literal has neither a fraction nor an exponent.
    pub fn is_integral(&self) -> bool {
        !self.0.contains(['.', 'e', 'E'])
    }

    /// Parses the literal into any type implementing [`FromStr`].
    pub fn parse<T: FromStr>(&self) -> Result<T, T::Err> {
        self.0.parse()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

macro_rules! number_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number(value.to_string())
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Number {
    type Error = NumberError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

/// The kind of a [`Value`], used in type-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    /// Returns the lowercase name of this type.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the structured value tree.
///
/// Values are immutable once built. Children are only ever attached at
/// construction time, so a tree can never contain a cycle.
///
/// # Example
///
/// ```rust
/// use waypoint::{Value, ValueType};
///
/// let value = Value::object([
///     ("name", Value::from("Alice")),
///     ("tags", Value::array([Value::from("a"), Value::from("b")])),
/// ]);
///
/// assert_eq!(value.value_type(), ValueType::Object);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Builds an array from any ordered collection of values.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(items.into_iter().collect())
    }

    /// Builds an object from name/value pairs.
    ///
    /// When a name occurs more than once the last value wins; the member keeps
    /// the position of its first occurrence.
    ///
    /// ```rust
    /// use waypoint::Value;
    ///
    /// let value = Value::object([("a", Value::from(1)), ("a", Value::from(2))]);
    /// assert_eq!(value.get("a"), Some(&Value::from(2)));
    /// ```
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut object = Object::new();
        for (name, value) in members {
            object.insert(name.into(), value);
        }
        Value::Object(object)
    }

    /// Builds a number value from decimal text.
    pub fn number(text: impl Into<String>) -> Result<Self, NumberError> {
        Number::new(text).map(Value::Number)
    }

    /// Returns the type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the member with the given name if this is an object.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(name))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

macro_rules! value_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
