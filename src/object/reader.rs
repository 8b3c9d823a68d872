//! The object reader and its builder.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use stillwater::prelude::*;
use stillwater::Validation;

use crate::context::ReaderContext;
use crate::error::{ErrorBuilders, ReadErrors};
use crate::location::Location;
use crate::path::JsonPath;
use crate::reader::Reader;
use crate::result::{Failure, ReadResult};
use crate::validator::ValidationResult;
use crate::value::{Object, Value, ValueType};

use super::config::ObjectReaderConfiguration;
use super::property::{
    Cardinality, ObjectProperty, PropertyHandle, PropertyInfo, TypedProperty,
};
use super::validator::{AfterValidator, BeforeValidator, ObjectValidators};
use super::values::ObjectValues;

type Assembler<T> = Arc<dyn Fn(&ReaderContext, &Location, ObjectValues) -> ReadResult<T> + Send + Sync>;

/// Declares the properties and validators of an [`ObjectReader`].
///
/// Obtained from [`ObjectReader::builder`] or
/// [`ObjectReaderDefaults::builder`](super::ObjectReaderDefaults::builder).
pub struct ObjectReaderBuilder<T> {
    configuration: ObjectReaderConfiguration,
    validators: ObjectValidators,
    builders: ErrorBuilders,
    properties: Vec<Arc<dyn ObjectProperty>>,
    _output: PhantomData<fn() -> T>,
}

impl<T> ObjectReaderBuilder<T> {
    pub(crate) fn new(
        configuration: ObjectReaderConfiguration,
        validators: ObjectValidators,
        builders: ErrorBuilders,
    ) -> Self {
        Self {
            configuration,
            validators,
            builders,
            properties: Vec::new(),
            _output: PhantomData,
        }
    }

    pub fn configuration(&self) -> &ObjectReaderConfiguration {
        &self.configuration
    }

    /// The error builders of this reader, for building property readers that
    /// report errors the same way.
    pub fn builders(&self) -> &ErrorBuilders {
        &self.builders
    }

    pub fn fail_fast(&mut self, fail_fast: bool) -> &mut Self {
        self.configuration.fail_fast = fail_fast;
        self
    }

    /// Edits the validator set inherited from the defaults.
    pub fn validation<F>(&mut self, edit: F) -> &mut Self
    where
        F: FnOnce(ObjectValidators) -> ObjectValidators,
    {
        self.validators = edit(std::mem::take(&mut self.validators));
        self
    }

    pub fn before<V>(&mut self, name: impl Into<String>, validator: V) -> &mut Self
    where
        V: BeforeValidator + 'static,
    {
        self.validation(|validators| validators.with_before(name, validator))
    }

    pub fn after<V>(&mut self, name: impl Into<String>, validator: V) -> &mut Self
    where
        V: AfterValidator + 'static,
    {
        self.validation(|validators| validators.with_after(name, validator))
    }

    /// Declares a property read with `reader` from `path`, relative to the
    /// object. The returned binder picks the cardinality.
    pub fn property<R>(&mut self, path: impl Into<JsonPath>, reader: R) -> PropertyBinder<'_, T, R>
    where
        R: Reader + 'static,
        R::Output: Send + Sync + 'static,
    {
        PropertyBinder {
            builder: self,
            path: path.into(),
            reader,
        }
    }

    /// Finishes the reader with the function that assembles `T` from the
    /// property values.
    ///
    /// The assembler only runs for objects whose properties were all read
    /// and whose validators all passed.
    pub fn build<F>(self, assembler: F) -> ObjectReader<T>
    where
        F: Fn(&ReaderContext, &Location, ObjectValues) -> ReadResult<T> + Send + Sync + 'static,
    {
        let infos = self
            .properties
            .iter()
            .map(|property| property.info().clone())
            .collect();

        ObjectReader {
            inner: Arc::new(Inner {
                configuration: self.configuration,
                validators: self.validators,
                builders: self.builders,
                properties: self.properties,
                infos,
            }),
            assembler: Arc::new(assembler),
        }
    }

    fn register<R>(&mut self, path: JsonPath, reader: R, cardinality: Cardinality<R::Output>) -> usize
    where
        R: Reader + 'static,
        R::Output: Send + Sync + 'static,
    {
        self.properties
            .push(Arc::new(TypedProperty::new(path, reader, cardinality)));
        self.properties.len() - 1
    }
}

impl<T> fmt::Debug for ObjectReaderBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectReaderBuilder")
            .field("configuration", &self.configuration)
            .field("validators", &self.validators)
            .field("properties", &self.properties.len())
            .finish_non_exhaustive()
    }
}

/// Chooses the cardinality of a property declared with
/// [`ObjectReaderBuilder::property`].
#[must_use = "a property is only declared once a cardinality is chosen"]
pub struct PropertyBinder<'a, T, R> {
    builder: &'a mut ObjectReaderBuilder<T>,
    path: JsonPath,
    reader: R,
}

impl<T, R> PropertyBinder<'_, T, R>
where
    R: Reader + 'static,
    R::Output: Send + Sync + 'static,
{
    fn bind<V>(self, cardinality: Cardinality<R::Output>) -> PropertyHandle<V> {
        PropertyHandle::new(self.builder.register(self.path, self.reader, cardinality))
    }

    /// Must be present; `null` is handed to the reader.
    pub fn required(self) -> PropertyHandle<R::Output> {
        self.bind(Cardinality::Required)
    }

    /// `default` when missing; `null` is handed to the reader.
    pub fn defaultable<D>(self, default: D) -> PropertyHandle<R::Output>
    where
        D: Fn() -> R::Output + Send + Sync + 'static,
    {
        self.bind(Cardinality::Defaultable(Arc::new(default)))
    }

    /// `None` when missing or `null`.
    pub fn optional(self) -> PropertyHandle<Option<R::Output>> {
        self.bind(Cardinality::Optional)
    }

    /// `Some(default)` when missing, `None` when `null`.
    pub fn optional_with_default<D>(self, default: D) -> PropertyHandle<Option<R::Output>>
    where
        D: Fn() -> R::Output + Send + Sync + 'static,
    {
        self.bind(Cardinality::OptionalWithDefault(Arc::new(default)))
    }

    /// Must be present; `None` when `null`.
    pub fn nullable(self) -> PropertyHandle<Option<R::Output>> {
        self.bind(Cardinality::Nullable)
    }

    /// `default` when missing or `null`.
    pub fn nullable_with_default<D>(self, default: D) -> PropertyHandle<R::Output>
    where
        D: Fn() -> R::Output + Send + Sync + 'static,
    {
        self.bind(Cardinality::NullableWithDefault(Arc::new(default)))
    }
}

struct Inner {
    configuration: ObjectReaderConfiguration,
    validators: ObjectValidators,
    builders: ErrorBuilders,
    properties: Vec<Arc<dyn ObjectProperty>>,
    infos: Vec<PropertyInfo>,
}

/// Reads an object by reading its declared properties and assembling them.
///
/// A read goes through these steps, each one only if the previous ones found
/// no error:
///
/// 1. The input must be an object.
/// 2. Before-validators run in registration order.
/// 3. Properties are read in declaration order.
/// 4. After-validators run in registration order.
/// 5. The assembler builds the result.
///
/// Steps 2 to 4 stop at their first failure when `fail_fast` is set, and at
/// the first critical error regardless. Validator errors are reported at the
/// object's location; property errors at wherever they were found.
///
/// # Example
///
/// ```rust
/// use waypoint::object::ObjectReader;
/// use waypoint::{reader, Location, Reader, ReaderContext, ReadResult, Value};
///
/// struct User {
///     name: String,
///     age: Option<i64>,
/// }
///
/// let mut builder = ObjectReader::builder();
/// let string = reader::string(builder.builders());
/// let integer = reader::integer::<i64>(builder.builders());
/// let name = builder.property("name", string).required();
/// let age = builder.property("age", integer).optional();
/// let users = builder.build(move |_, location, values| {
///     ReadResult::success(location.clone(), User { name: values[&name].clone(), age: values[&age] })
/// });
///
/// let input = Value::object([("name", Value::from("ann"))]);
/// let user = users.read(&ReaderContext::new(), &Location::root(), &input).into_result().unwrap();
/// assert_eq!(user.name, "ann");
/// assert_eq!(user.age, None);
/// ```
pub struct ObjectReader<T> {
    inner: Arc<Inner>,
    assembler: Assembler<T>,
}

impl<T> Clone for ObjectReader<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            assembler: Arc::clone(&self.assembler),
        }
    }
}

impl<T> ObjectReader<T> {
    /// Starts a reader with the default configuration, no validators and
    /// the default error builders.
    pub fn builder() -> ObjectReaderBuilder<T> {
        ObjectReaderBuilder::new(
            ObjectReaderConfiguration::default(),
            ObjectValidators::default(),
            ErrorBuilders::default(),
        )
    }

    /// The declared properties, in declaration order.
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.inner.infos
    }

    pub fn configuration(&self) -> &ObjectReaderConfiguration {
        &self.inner.configuration
    }
}

impl<T> fmt::Debug for ObjectReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectReader")
            .field("configuration", &self.inner.configuration)
            .field("validators", &self.inner.validators)
            .field("properties", &self.inner.infos)
            .finish_non_exhaustive()
    }
}

/// Runs validators in order, stopping early on fail-fast or a critical error.
fn run_batch<I>(fail_fast: bool, results: I) -> Option<ReadErrors>
where
    I: IntoIterator<Item = ValidationResult>,
{
    let mut accumulated: Option<ReadErrors> = None;
    for result in results {
        if let Validation::Failure(errors) = result {
            let critical = errors.has_critical();
            accumulated = Some(match accumulated {
                Some(acc) => acc.combine(errors),
                None => errors,
            });
            if fail_fast || critical {
                tracing::trace!(critical, "object validation halted early");
                break;
            }
        }
    }
    accumulated
}

impl Inner {
    fn validate_before(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Object,
    ) -> Option<ReadErrors> {
        let results = self.validators.before().map(|validator| {
            validator.validate(context, &self.configuration, location, input, &self.infos)
        });
        run_batch(self.configuration.fail_fast, results)
    }

    fn validate_after(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Object,
        values: &ObjectValues,
    ) -> Option<ReadErrors> {
        let results = self.validators.after().map(|validator| {
            validator.validate(context, &self.configuration, location, input, &self.infos, values)
        });
        run_batch(self.configuration.fail_fast, results)
    }

    fn read_properties(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
    ) -> Result<ObjectValues, Failure> {
        let mut values = ObjectValues::with_capacity(self.properties.len());
        let mut failure: Option<Failure> = None;

        for (id, property) in self.properties.iter().enumerate() {
            match property.read(context, location, input, &self.builders) {
                ReadResult::Success { value, .. } => values.insert(id, value),
                ReadResult::Failure(f) => {
                    let critical = f.is_critical();
                    failure = Some(match failure {
                        Some(acc) => acc.combine(f),
                        None => f,
                    });
                    if self.configuration.fail_fast || critical {
                        tracing::trace!(
                            location = %location,
                            property = %property.info().path,
                            critical,
                            "property reading halted early"
                        );
                        break;
                    }
                }
            }
        }

        match failure {
            Some(failure) => Err(failure),
            None => Ok(values),
        }
    }
}

impl<T> Reader for ObjectReader<T> {
    type Output = T;

    fn read(&self, context: &ReaderContext, location: &Location, input: &Value) -> ReadResult<T> {
        let inner = &*self.inner;

        let object = match input {
            Value::Object(object) => object,
            other => {
                tracing::debug!(
                    location = %location,
                    actual = %other.value_type(),
                    "object reader rejected non-object input"
                );
                return ReadResult::failure(
                    location.clone(),
                    inner.builders.invalid_type(ValueType::Object, other.value_type()),
                );
            }
        };

        if let Some(errors) = inner.validate_before(context, location, object) {
            return ReadResult::Failure(Failure::with_errors(location.clone(), errors));
        }

        let values = match inner.read_properties(context, location, input) {
            Ok(values) => values,
            Err(failure) => return ReadResult::Failure(failure),
        };

        if let Some(errors) = inner.validate_after(context, location, object, &values) {
            return ReadResult::Failure(Failure::with_errors(location.clone(), errors));
        }

        (self.assembler)(context, location, values)
    }
}
