//! Object reader configuration.

use crate::error::ErrorBuilders;

use super::reader::ObjectReaderBuilder;
use super::validator::ObjectValidators;

/// Failure policy for one object reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectReaderConfiguration {
    /// Stop each batch (before-validation, property reading, after-validation)
    /// at its first failure. Critical errors stop a batch regardless.
    pub fail_fast: bool,
}

impl Default for ObjectReaderConfiguration {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

/// Settings shared by every object reader of an application.
///
/// Per-type builders start from these and may override any part.
///
/// # Example
///
/// ```rust
/// use waypoint::object::validator::{self, ObjectValidators};
/// use waypoint::object::{ObjectReaderConfiguration, ObjectReaderDefaults};
/// use waypoint::{ErrorBuilders, ReadError};
///
/// let defaults = ObjectReaderDefaults::new()
///     .configuration(ObjectReaderConfiguration { fail_fast: false })
///     .validators(ObjectValidators::new().with_before("additional_properties", validator::additional_properties()))
///     .error_builders(ErrorBuilders::default().path_missing_with(|| ReadError::new("required").with_code("E01")));
///
/// let builder = defaults.builder::<String>();
/// assert!(!builder.configuration().fail_fast);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectReaderDefaults {
    configuration: ObjectReaderConfiguration,
    validators: ObjectValidators,
    builders: ErrorBuilders,
}

impl ObjectReaderDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configuration(mut self, configuration: ObjectReaderConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn validators(mut self, validators: ObjectValidators) -> Self {
        self.validators = validators;
        self
    }

    pub fn error_builders(mut self, builders: ErrorBuilders) -> Self {
        self.builders = builders;
        self
    }

    /// The error builders properties report missing members and type
    /// mismatches with. Also used to build the readers for their values.
    pub fn builders(&self) -> &ErrorBuilders {
        &self.builders
    }

    /// Starts an object reader for `T` from these settings.
    pub fn builder<T>(&self) -> ObjectReaderBuilder<T> {
        ObjectReaderBuilder::new(
            self.configuration,
            self.validators.clone(),
            self.builders.clone(),
        )
    }
}
