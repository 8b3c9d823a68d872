//! Comparison validators for any `PartialOrd` value.
//!
//! ```rust
//! use waypoint::validator::{order, ValidatorExt};
//! use waypoint::{Location, ReaderContext, Validator};
//!
//! let percent = order::min(0).and(order::max(100));
//! let context = ReaderContext::new();
//!
//! assert!(percent.validate(&context, &Location::root(), &42).is_success());
//! assert!(percent.validate(&context, &Location::root(), &101).is_failure());
//! ```

use std::fmt::Display;

use crate::context::ReaderContext;
use crate::error::ReadError;
use crate::location::Location;

use super::{invalid, valid, ValidationResult, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Min,
    Max,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Comparison {
    fn holds<T: PartialOrd>(self, value: &T, expected: &T) -> bool {
        match self {
            Comparison::Min | Comparison::Ge => value >= expected,
            Comparison::Max | Comparison::Le => value <= expected,
            Comparison::Eq => value == expected,
            Comparison::Ne => value != expected,
            Comparison::Gt => value > expected,
            Comparison::Lt => value < expected,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Comparison::Min => "min_value",
            Comparison::Max => "max_value",
            Comparison::Eq => "eq",
            Comparison::Ne => "ne",
            Comparison::Gt => "gt",
            Comparison::Ge => "ge",
            Comparison::Lt => "lt",
            Comparison::Le => "le",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Comparison::Min | Comparison::Ge => "at least",
            Comparison::Max | Comparison::Le => "at most",
            Comparison::Eq => "equal to",
            Comparison::Ne => "not equal to",
            Comparison::Gt => "greater than",
            Comparison::Lt => "less than",
        }
    }
}

/// Compares the value against a fixed bound.
#[derive(Debug, Clone)]
pub struct Compare<T> {
    comparison: Comparison,
    expected: T,
}

impl<T> Validator for Compare<T>
where
    T: PartialOrd + Display + Send + Sync,
{
    type Value = T;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &T) -> ValidationResult {
        if self.comparison.holds(value, &self.expected) {
            return valid();
        }
        let expected = format!("{} {}", self.comparison.describe(), self.expected);
        invalid(
            ReadError::new(format!("must be {}, got {}", expected, value))
                .with_code(self.comparison.code())
                .with_expected(expected)
                .with_got(value.to_string()),
        )
    }
}

fn compare<T>(comparison: Comparison, expected: T) -> Compare<T> {
    Compare {
        comparison,
        expected,
    }
}

/// Value must be `>= expected`; reported as `min_value`.
pub fn min<T>(expected: T) -> Compare<T> {
    compare(Comparison::Min, expected)
}

/// Value must be `<= expected`; reported as `max_value`.
pub fn max<T>(expected: T) -> Compare<T> {
    compare(Comparison::Max, expected)
}

pub fn eq<T>(expected: T) -> Compare<T> {
    compare(Comparison::Eq, expected)
}

pub fn ne<T>(expected: T) -> Compare<T> {
    compare(Comparison::Ne, expected)
}

pub fn gt<T>(expected: T) -> Compare<T> {
    compare(Comparison::Gt, expected)
}

pub fn ge<T>(expected: T) -> Compare<T> {
    compare(Comparison::Ge, expected)
}

pub fn lt<T>(expected: T) -> Compare<T> {
    compare(Comparison::Lt, expected)
}

pub fn le<T>(expected: T) -> Compare<T> {
    compare(Comparison::Le, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillwater::Validation;

    fn code<T>(validator: &Compare<T>, value: T) -> Option<String>
    where
        T: PartialOrd + Display + Send + Sync,
    {
        match validator.validate(&ReaderContext::new(), &Location::root(), &value) {
            Validation::Success(()) => None,
            Validation::Failure(errors) => Some(errors.first().code.clone()),
        }
    }

    #[test]
    fn test_inclusive_bounds() {
        assert_eq!(code(&min(18), 18), None);
        assert_eq!(code(&min(18), 17).as_deref(), Some("min_value"));
        assert_eq!(code(&max(10), 10), None);
        assert_eq!(code(&le(10), 11).as_deref(), Some("le"));
        assert_eq!(code(&ge(1.5), 1.4).as_deref(), Some("ge"));
    }

    #[test]
    fn test_strict_bounds() {
        assert_eq!(code(&gt(0), 0).as_deref(), Some("gt"));
        assert_eq!(code(&gt(0), 1), None);
        assert_eq!(code(&lt(0), 0).as_deref(), Some("lt"));
    }

    #[test]
    fn test_equality() {
        assert_eq!(code(&eq("EUR".to_string()), "EUR".to_string()), None);
        assert_eq!(code(&ne(0), 0).as_deref(), Some("ne"));
    }

    #[test]
    fn test_error_payload() {
        let errors = match min(18).validate(&ReaderContext::new(), &Location::root(), &16) {
            Validation::Failure(errors) => errors,
            Validation::Success(()) => panic!("expected failure"),
        };

        let error = errors.first();
        assert_eq!(error.message, "must be at least 18, got 16");
        assert_eq!(error.expected.as_deref(), Some("at least 18"));
        assert_eq!(error.got.as_deref(), Some("16"));
    }
}
