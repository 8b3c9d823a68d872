//! Object-level validators.
//!
//! Before-validators run on the raw object before any property is read.
//! After-validators run once every property has been read successfully and
//! also see the [`ObjectValues`]. Both are registered by name in an
//! [`ObjectValidators`] set, so a shared default set can be specialized per
//! reader by adding or removing entries.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use stillwater::Validation;

use crate::context::ReaderContext;
use crate::error::{ReadError, ReadErrors};
use crate::location::Location;
use crate::validator::{invalid, valid, ValidationResult};
use crate::value::Object;

use super::config::ObjectReaderConfiguration;
use super::property::PropertyInfo;
use super::values::ObjectValues;

/// A check on the raw object, before its properties are read.
pub trait BeforeValidator: Send + Sync {
    fn validate(
        &self,
        context: &ReaderContext,
        configuration: &ObjectReaderConfiguration,
        location: &Location,
        input: &Object,
        properties: &[PropertyInfo],
    ) -> ValidationResult;
}

/// A check on the object after all of its properties were read.
pub trait AfterValidator: Send + Sync {
    fn validate(
        &self,
        context: &ReaderContext,
        configuration: &ObjectReaderConfiguration,
        location: &Location,
        input: &Object,
        properties: &[PropertyInfo],
        values: &ObjectValues,
    ) -> ValidationResult;
}

/// A before-validator backed by a closure. Created by [`before_fn`].
#[derive(Clone)]
pub struct FnBefore<F>(F);

impl<F> BeforeValidator for FnBefore<F>
where
    F: Fn(&ReaderContext, &ObjectReaderConfiguration, &Location, &Object, &[PropertyInfo]) -> ValidationResult
        + Send
        + Sync,
{
    fn validate(
        &self,
        context: &ReaderContext,
        configuration: &ObjectReaderConfiguration,
        location: &Location,
        input: &Object,
        properties: &[PropertyInfo],
    ) -> ValidationResult {
        (self.0)(context, configuration, location, input, properties)
    }
}

pub fn before_fn<F>(f: F) -> FnBefore<F>
where
    F: Fn(&ReaderContext, &ObjectReaderConfiguration, &Location, &Object, &[PropertyInfo]) -> ValidationResult
        + Send
        + Sync,
{
    FnBefore(f)
}

/// An after-validator backed by a closure. Created by [`after_fn`].
#[derive(Clone)]
pub struct FnAfter<F>(F);

impl<F> AfterValidator for FnAfter<F>
where
    F: Fn(
            &ReaderContext,
            &ObjectReaderConfiguration,
            &Location,
            &Object,
            &[PropertyInfo],
            &ObjectValues,
        ) -> ValidationResult
        + Send
        + Sync,
{
    fn validate(
        &self,
        context: &ReaderContext,
        configuration: &ObjectReaderConfiguration,
        location: &Location,
        input: &Object,
        properties: &[PropertyInfo],
        values: &ObjectValues,
    ) -> ValidationResult {
        (self.0)(context, configuration, location, input, properties, values)
    }
}

pub fn after_fn<F>(f: F) -> FnAfter<F>
where
    F: Fn(
            &ReaderContext,
            &ObjectReaderConfiguration,
            &Location,
            &Object,
            &[PropertyInfo],
            &ObjectValues,
        ) -> ValidationResult
        + Send
        + Sync,
{
    FnAfter(f)
}

/// Named, ordered sets of before- and after-validators.
///
/// Adding a validator under a name that is already registered replaces it in
/// place; the set keeps its order.
///
/// # Example
///
/// ```rust
/// use waypoint::object::validator::{self, ObjectValidators};
///
/// let shared = ObjectValidators::new()
///     .with_before("additional_properties", validator::additional_properties())
///     .with_before("is_not_empty_object", validator::is_not_empty_object());
///
/// let relaxed = shared.clone().without_before("additional_properties");
/// assert_eq!(relaxed.before_names().collect::<Vec<_>>(), vec!["is_not_empty_object"]);
/// ```
#[derive(Clone, Default)]
pub struct ObjectValidators {
    before: IndexMap<String, Arc<dyn BeforeValidator>>,
    after: IndexMap<String, Arc<dyn AfterValidator>>,
}

impl ObjectValidators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_before<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: BeforeValidator + 'static,
    {
        self.before.insert(name.into(), Arc::new(validator));
        self
    }

    pub fn without_before(mut self, name: &str) -> Self {
        self.before.shift_remove(name);
        self
    }

    pub fn with_after<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: AfterValidator + 'static,
    {
        self.after.insert(name.into(), Arc::new(validator));
        self
    }

    pub fn without_after(mut self, name: &str) -> Self {
        self.after.shift_remove(name);
        self
    }

    pub fn before_names(&self) -> impl Iterator<Item = &str> {
        self.before.keys().map(String::as_str)
    }

    pub fn after_names(&self) -> impl Iterator<Item = &str> {
        self.after.keys().map(String::as_str)
    }

    pub(crate) fn before(&self) -> impl Iterator<Item = &Arc<dyn BeforeValidator>> {
        self.before.values()
    }

    pub(crate) fn after(&self) -> impl Iterator<Item = &Arc<dyn AfterValidator>> {
        self.after.values()
    }
}

impl fmt::Debug for ObjectValidators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidators")
            .field("before", &self.before_names().collect::<Vec<_>>())
            .field("after", &self.after_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Rejects members that no declared property is rooted at.
/// Created by [`additional_properties`].
#[derive(Debug, Clone)]
pub struct AdditionalProperties;

impl BeforeValidator for AdditionalProperties {
    fn validate(
        &self,
        _: &ReaderContext,
        configuration: &ObjectReaderConfiguration,
        _: &Location,
        input: &Object,
        properties: &[PropertyInfo],
    ) -> ValidationResult {
        let declared: HashSet<&str> = properties
            .iter()
            .filter_map(PropertyInfo::member_name)
            .collect();

        let mut errors = Vec::new();
        for name in input.keys() {
            if declared.contains(name.as_str()) {
                continue;
            }
            errors.push(
                ReadError::new(format!("unknown field '{}'", name))
                    .with_code("additional_property")
                    .with_got(name.clone()),
            );
            if configuration.fail_fast {
                break;
            }
        }

        match ReadErrors::from_vec(errors) {
            Some(errors) => Validation::Failure(errors),
            None => valid(),
        }
    }
}

pub fn additional_properties() -> AdditionalProperties {
    AdditionalProperties
}

/// Requires at least `min` members. Created by [`min_properties`].
#[derive(Debug, Clone)]
pub struct MinProperties {
    min: usize,
}

impl BeforeValidator for MinProperties {
    fn validate(
        &self,
        _: &ReaderContext,
        _: &ObjectReaderConfiguration,
        _: &Location,
        input: &Object,
        _: &[PropertyInfo],
    ) -> ValidationResult {
        if input.len() >= self.min {
            return valid();
        }
        invalid(
            ReadError::new(format!(
                "object must have at least {} properties, got {}",
                self.min,
                input.len()
            ))
            .with_code("min_properties")
            .with_expected(format!("at least {} properties", self.min))
            .with_got(format!("{} properties", input.len())),
        )
    }
}

pub fn min_properties(min: usize) -> MinProperties {
    MinProperties { min }
}

/// Allows at most `max` members. Created by [`max_properties`].
#[derive(Debug, Clone)]
pub struct MaxProperties {
    max: usize,
}

impl BeforeValidator for MaxProperties {
    fn validate(
        &self,
        _: &ReaderContext,
        _: &ObjectReaderConfiguration,
        _: &Location,
        input: &Object,
        _: &[PropertyInfo],
    ) -> ValidationResult {
        if input.len() <= self.max {
            return valid();
        }
        invalid(
            ReadError::new(format!(
                "object must have at most {} properties, got {}",
                self.max,
                input.len()
            ))
            .with_code("max_properties")
            .with_expected(format!("at most {} properties", self.max))
            .with_got(format!("{} properties", input.len())),
        )
    }
}

pub fn max_properties(max: usize) -> MaxProperties {
    MaxProperties { max }
}

/// Rejects an object without members. Created by [`is_not_empty_object`].
#[derive(Debug, Clone)]
pub struct IsNotEmptyObject;

impl BeforeValidator for IsNotEmptyObject {
    fn validate(
        &self,
        _: &ReaderContext,
        _: &ObjectReaderConfiguration,
        _: &Location,
        input: &Object,
        _: &[PropertyInfo],
    ) -> ValidationResult {
        if input.is_empty() {
            invalid(ReadError::new("object must not be empty").with_code("is_empty_object"))
        } else {
            valid()
        }
    }
}

pub fn is_not_empty_object() -> IsNotEmptyObject {
    IsNotEmptyObject
}
