//! Object writer.

use std::fmt;
use std::sync::Arc;

use crate::value::{Object, Value};

use super::Writer;

type PropertyWriter<T> = Arc<dyn Fn(&T) -> Option<Value> + Send + Sync>;

/// Writes a `T` as an object, one member per declared property, in
/// declaration order.
///
/// # Example
///
/// ```rust
/// use waypoint::writer::{self, ObjectWriter, Writer};
/// use waypoint::Value;
///
/// struct User {
///     name: String,
///     age: Option<i64>,
///     nickname: Option<String>,
/// }
///
/// let user_writer = ObjectWriter::new()
///     .required("name", writer::string(), |u: &User| &u.name)
///     .optional("age", writer::integer(), |u: &User| u.age.as_ref())
///     .nullable("nickname", writer::string(), |u: &User| u.nickname.as_ref());
///
/// let user = User { name: "ann".into(), age: None, nickname: None };
/// assert_eq!(
///     user_writer.write(&user),
///     Value::object([("name", Value::from("ann")), ("nickname", Value::Null)])
/// );
/// ```
pub struct ObjectWriter<T> {
    properties: Vec<(String, PropertyWriter<T>)>,
}

impl<T> Clone for ObjectWriter<T> {
    fn clone(&self) -> Self {
        Self {
            properties: self.properties.clone(),
        }
    }
}

impl<T> Default for ObjectWriter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObjectWriter<T> {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Names of the declared properties, in order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }
}

impl<T: 'static> ObjectWriter<T> {
    fn property(mut self, name: impl Into<String>, write: PropertyWriter<T>) -> Self {
        self.properties.push((name.into(), write));
        self
    }

    /// A property that is always written.
    pub fn required<W, F>(self, name: impl Into<String>, writer: W, get: F) -> Self
    where
        W: Writer + 'static,
        F: Fn(&T) -> &W::Input + Send + Sync + 'static,
    {
        self.property(name, Arc::new(move |value: &T| Some(writer.write(get(value)))))
    }

    /// A property that is omitted when `get` returns `None`.
    pub fn optional<W, F>(self, name: impl Into<String>, writer: W, get: F) -> Self
    where
        W: Writer + 'static,
        F: Fn(&T) -> Option<&W::Input> + Send + Sync + 'static,
    {
        self.property(
            name,
            Arc::new(move |value: &T| get(value).map(|v| writer.write(v))),
        )
    }

    /// A property written as `null` when `get` returns `None`.
    pub fn nullable<W, F>(self, name: impl Into<String>, writer: W, get: F) -> Self
    where
        W: Writer + 'static,
        F: Fn(&T) -> Option<&W::Input> + Send + Sync + 'static,
    {
        self.property(
            name,
            Arc::new(move |value: &T| {
                Some(get(value).map_or(Value::Null, |v| writer.write(v)))
            }),
        )
    }
}

impl<T> Writer for ObjectWriter<T> {
    type Input = T;

    fn write(&self, value: &T) -> Value {
        let mut object = Object::with_capacity(self.properties.len());
        for (name, write) in &self.properties {
            if let Some(member) = write(value) {
                object.insert(name.clone(), member);
            }
        }
        Value::Object(object)
    }
}

impl<T> fmt::Debug for ObjectWriter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectWriter")
            .field("properties", &self.property_names().collect::<Vec<_>>())
            .finish()
    }
}
