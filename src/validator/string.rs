//! String validators.
//!
//! Lengths are counted in characters, not bytes.

use regex::Regex;

use crate::context::ReaderContext;
use crate::error::ReadError;
use crate::location::Location;

use super::{invalid, valid, ValidationResult, Validator};

/// Requires at least `min` characters. Created by [`min_length`].
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
}

impl Validator for MinLength {
    type Value = String;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &String) -> ValidationResult {
        let len = value.chars().count();
        if len >= self.min {
            return valid();
        }
        invalid(
            ReadError::new(format!("length must be at least {}, got {}", self.min, len))
                .with_code("min_length")
                .with_expected(format!("at least {} characters", self.min))
                .with_got(format!("{} characters", len)),
        )
    }
}

pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

/// Allows at most `max` characters. Created by [`max_length`].
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
}

impl Validator for MaxLength {
    type Value = String;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &String) -> ValidationResult {
        let len = value.chars().count();
        if len <= self.max {
            return valid();
        }
        invalid(
            ReadError::new(format!("length must be at most {}, got {}", self.max, len))
                .with_code("max_length")
                .with_expected(format!("at most {} characters", self.max))
                .with_got(format!("{} characters", len)),
        )
    }
}

pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

/// Rejects the empty string. Created by [`is_not_empty`].
#[derive(Debug, Clone)]
pub struct IsNotEmpty;

impl Validator for IsNotEmpty {
    type Value = String;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &String) -> ValidationResult {
        if value.is_empty() {
            invalid(ReadError::new("must not be empty").with_code("is_empty"))
        } else {
            valid()
        }
    }
}

pub fn is_not_empty() -> IsNotEmpty {
    IsNotEmpty
}

/// Rejects strings that are empty or whitespace only. Created by [`is_not_blank`].
#[derive(Debug, Clone)]
pub struct IsNotBlank;

impl Validator for IsNotBlank {
    type Value = String;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &String) -> ValidationResult {
        if value.trim().is_empty() {
            invalid(
                ReadError::new("must not be blank")
                    .with_code("is_blank")
                    .with_got(format!("{:?}", value)),
            )
        } else {
            valid()
        }
    }
}

pub fn is_not_blank() -> IsNotBlank {
    IsNotBlank
}

/// Requires a match of a regular expression. Created by [`pattern`].
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Validator for Pattern {
    type Value = String;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &String) -> ValidationResult {
        if self.regex.is_match(value) {
            return valid();
        }
        invalid(
            ReadError::new(format!("must match pattern '{}'", self.regex.as_str()))
                .with_code("pattern")
                .with_expected(format!("string matching '{}'", self.regex.as_str()))
                .with_got(value.clone()),
        )
    }
}

/// Compiles `pattern` into a validator.
///
/// # Errors
///
/// Returns the regex compile error if `pattern` is not a valid expression.
///
/// ```rust
/// use waypoint::validator::string;
/// use waypoint::{Location, ReaderContext, Validator};
///
/// let code = string::pattern(r"^[A-Z]{3}$").unwrap();
/// let context = ReaderContext::new();
///
/// assert!(code.validate(&context, &Location::root(), &"EUR".to_string()).is_success());
/// assert!(code.validate(&context, &Location::root(), &"euro".to_string()).is_failure());
/// assert!(string::pattern("(").is_err());
/// ```
pub fn pattern(pattern: &str) -> Result<Pattern, regex::Error> {
    Ok(Pattern {
        regex: Regex::new(pattern)?,
    })
}
