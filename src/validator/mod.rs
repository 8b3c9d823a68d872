//! Validators: checks that run on successfully read values.
//!
//! A [`Validator`] inspects a value and returns either success or a
//! non-empty [`ReadErrors`] set. Validators compose with [`ValidatorExt`]:
//! `and` accumulates the errors of both sides, `and_fail_fast` stops at the
//! first failing side, and any side producing a critical error always stops
//! the chain.
//!
//! Ready-made validators live in [`string`], [`order`] and [`array`].
//!
//! # Example
//!
//! ```rust
//! use waypoint::validator::{self, string, ValidatorExt};
//! use waypoint::{Location, ReaderContext, Validator};
//!
//! let name = string::is_not_blank().and(string::max_length(5));
//!
//! let result = name.validate(&ReaderContext::new(), &Location::root(), &"   too long".to_string());
//! assert!(result.is_failure());
//! ```

pub mod array;
pub mod order;
pub mod string;

use std::marker::PhantomData;
use std::sync::Arc;

use stillwater::prelude::*;
use stillwater::Validation;

use crate::context::ReaderContext;
use crate::error::{ReadError, ReadErrors};
use crate::location::Location;

/// The outcome of a validator: success, or at least one error.
pub type ValidationResult = Validation<(), ReadErrors>;

/// Returns a passing validation result.
pub fn valid() -> ValidationResult {
    Validation::Success(())
}

/// Returns a failing validation result with a single error.
pub fn invalid(error: ReadError) -> ValidationResult {
    Validation::Failure(ReadErrors::single(error))
}

/// A check on a value of type [`Validator::Value`].
///
/// `location` is where the value was read from; errors are attached to it by
/// the caller, so validators only return the errors themselves.
pub trait Validator: Send + Sync {
    /// The type of value this validator checks.
    type Value: ?Sized;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &Self::Value,
    ) -> ValidationResult;
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    type Value = V::Value;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &Self::Value,
    ) -> ValidationResult {
        (**self).validate(context, location, value)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    type Value = V::Value;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &Self::Value,
    ) -> ValidationResult {
        (**self).validate(context, location, value)
    }
}

/// A validator backed by a closure. Created by [`from_fn`].
pub struct FnValidator<F, T: ?Sized> {
    f: F,
    _value: PhantomData<fn(&T)>,
}

impl<F: Clone, T: ?Sized> Clone for FnValidator<F, T> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _value: PhantomData,
        }
    }
}

impl<F, T> Validator for FnValidator<F, T>
where
    T: ?Sized,
    F: Fn(&ReaderContext, &Location, &T) -> ValidationResult + Send + Sync,
{
    type Value = T;

    fn validate(&self, context: &ReaderContext, location: &Location, value: &T) -> ValidationResult {
        (self.f)(context, location, value)
    }
}

/// Creates a validator from a closure.
///
/// ```rust
/// use waypoint::validator::{self, invalid, valid};
/// use waypoint::{Location, ReadError, ReaderContext, Validator};
///
/// let even = validator::from_fn(|_, _, value: &i64| {
///     if value % 2 == 0 { valid() } else { invalid(ReadError::new("must be even")) }
/// });
///
/// assert!(even.validate(&ReaderContext::new(), &Location::root(), &4).is_success());
/// ```
pub fn from_fn<T, F>(f: F) -> FnValidator<F, T>
where
    T: ?Sized,
    F: Fn(&ReaderContext, &Location, &T) -> ValidationResult + Send + Sync,
{
    FnValidator {
        f,
        _value: PhantomData,
    }
}

/// Conjunction of two validators.
#[derive(Clone)]
pub struct And<A, B> {
    left: A,
    right: B,
    fail_fast: bool,
}

impl<A, B> Validator for And<A, B>
where
    A: Validator,
    B: Validator<Value = A::Value>,
{
    type Value = A::Value;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &A::Value,
    ) -> ValidationResult {
        match self.left.validate(context, location, value) {
            Validation::Success(()) => self.right.validate(context, location, value),
            Validation::Failure(left) => {
                if self.fail_fast || left.has_critical() {
                    return Validation::Failure(left);
                }
                match self.right.validate(context, location, value) {
                    Validation::Success(()) => Validation::Failure(left),
                    Validation::Failure(right) => Validation::Failure(left.combine(right)),
                }
            }
        }
    }
}

/// Disjunction of two validators: passes when either side passes.
#[derive(Clone)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Validator for Or<A, B>
where
    A: Validator,
    B: Validator<Value = A::Value>,
{
    type Value = A::Value;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &A::Value,
    ) -> ValidationResult {
        match self.left.validate(context, location, value) {
            Validation::Success(()) => valid(),
            Validation::Failure(left) if left.has_critical() => Validation::Failure(left),
            Validation::Failure(left) => match self.right.validate(context, location, value) {
                Validation::Success(()) => valid(),
                Validation::Failure(right) => Validation::Failure(left.combine(right)),
            },
        }
    }
}

/// Tags every error of the inner validator as critical.
#[derive(Clone)]
pub struct Critical<V>(V);

impl<V: Validator> Validator for Critical<V> {
    type Value = V::Value;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &V::Value,
    ) -> ValidationResult {
        match self.0.validate(context, location, value) {
            Validation::Success(()) => valid(),
            Validation::Failure(errors) => Validation::Failure(errors.into_critical()),
        }
    }
}

/// Rewrites every error of the inner validator.
#[derive(Clone)]
pub struct MapErrors<V, F> {
    validator: V,
    f: F,
}

impl<V, F> Validator for MapErrors<V, F>
where
    V: Validator,
    F: Fn(ReadError) -> ReadError + Send + Sync,
{
    type Value = V::Value;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &V::Value,
    ) -> ValidationResult {
        match self.validator.validate(context, location, value) {
            Validation::Success(()) => valid(),
            Validation::Failure(errors) => {
                let mapped = errors.into_iter().map(&self.f).collect();
                match ReadErrors::from_vec(mapped) {
                    Some(errors) => Validation::Failure(errors),
                    None => valid(),
                }
            }
        }
    }
}

/// Lifts a validator over `T` to `Option<T>`; `None` always passes.
#[derive(Clone)]
pub struct ApplyIfNotNull<V>(V);

impl<V> Validator for ApplyIfNotNull<V>
where
    V: Validator,
    V::Value: Sized,
{
    type Value = Option<V::Value>;

    fn validate(
        &self,
        context: &ReaderContext,
        location: &Location,
        value: &Option<V::Value>,
    ) -> ValidationResult {
        match value {
            Some(value) => self.0.validate(context, location, value),
            None => valid(),
        }
    }
}

/// Runs `validator` only on present values.
///
/// ```rust
/// use waypoint::validator::{apply_if_not_null, string};
/// use waypoint::{Location, ReaderContext, Validator};
///
/// let nickname = apply_if_not_null(string::is_not_empty());
/// let context = ReaderContext::new();
///
/// assert!(nickname.validate(&context, &Location::root(), &None).is_success());
/// assert!(nickname.validate(&context, &Location::root(), &Some(String::new())).is_failure());
/// ```
pub fn apply_if_not_null<V>(validator: V) -> ApplyIfNotNull<V>
where
    V: Validator,
    V::Value: Sized,
{
    ApplyIfNotNull(validator)
}

/// Composition operators available on every validator.
pub trait ValidatorExt: Validator + Sized {
    /// Runs both validators and concatenates their errors. The right side is
    /// skipped only when the left side produced a critical error.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validator<Value = Self::Value>,
    {
        And {
            left: self,
            right: other,
            fail_fast: false,
        }
    }

    /// Like [`and`](ValidatorExt::and), but skips the right side as soon as
    /// the left side fails.
    fn and_fail_fast<V>(self, other: V) -> And<Self, V>
    where
        V: Validator<Value = Self::Value>,
    {
        And {
            left: self,
            right: other,
            fail_fast: true,
        }
    }

    /// Conjunction whose short-circuit behavior is chosen at build time.
    fn and_with_policy<V>(self, other: V, fail_fast: bool) -> And<Self, V>
    where
        V: Validator<Value = Self::Value>,
    {
        And {
            left: self,
            right: other,
            fail_fast,
        }
    }

    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validator<Value = Self::Value>,
    {
        Or {
            left: self,
            right: other,
        }
    }

    /// Marks every error this validator produces as critical.
    fn critical(self) -> Critical<Self> {
        Critical(self)
    }

    /// Rewrites every error this validator produces, e.g. to change its code.
    fn map_errors<F>(self, f: F) -> MapErrors<Self, F>
    where
        F: Fn(ReadError) -> ReadError + Send + Sync,
    {
        MapErrors { validator: self, f }
    }
}

impl<V: Validator> ValidatorExt for V {}
