//! Collection validators, for values read by the list and set readers.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::IndexSet;

use crate::context::ReaderContext;
use crate::error::{ReadError, ReadErrors};
use crate::location::Location;

use super::{invalid, valid, ValidationResult, Validator};

/// A decoded collection the validators in this module can inspect.
pub trait Items: Send + Sync {
    type Item;

    fn item_count(&self) -> usize;

    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T: Send + Sync> Items for Vec<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T: Send + Sync> Items for IndexSet<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// Requires at least `min` items. Created by [`min_items`].
pub struct MinItems<C> {
    min: usize,
    _items: PhantomData<fn(&C)>,
}

impl<C> Clone for MinItems<C> {
    fn clone(&self) -> Self {
        min_items(self.min)
    }
}

impl<C: Items> Validator for MinItems<C> {
    type Value = C;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &C) -> ValidationResult {
        let count = value.item_count();
        if count >= self.min {
            return valid();
        }
        invalid(
            ReadError::new(format!("must have at least {} items, got {}", self.min, count))
                .with_code("min_items")
                .with_expected(format!("at least {} items", self.min))
                .with_got(format!("{} items", count)),
        )
    }
}

pub fn min_items<C>(min: usize) -> MinItems<C> {
    MinItems {
        min,
        _items: PhantomData,
    }
}

/// Allows at most `max` items. Created by [`max_items`].
pub struct MaxItems<C> {
    max: usize,
    _items: PhantomData<fn(&C)>,
}

impl<C> Clone for MaxItems<C> {
    fn clone(&self) -> Self {
        max_items(self.max)
    }
}

impl<C: Items> Validator for MaxItems<C> {
    type Value = C;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &C) -> ValidationResult {
        let count = value.item_count();
        if count <= self.max {
            return valid();
        }
        invalid(
            ReadError::new(format!("must have at most {} items, got {}", self.max, count))
                .with_code("max_items")
                .with_expected(format!("at most {} items", self.max))
                .with_got(format!("{} items", count)),
        )
    }
}

pub fn max_items<C>(max: usize) -> MaxItems<C> {
    MaxItems {
        max,
        _items: PhantomData,
    }
}

/// Requires the keys selected from each item to be distinct.
/// Created by [`is_unique`].
pub struct IsUnique<C, F> {
    fail_fast: bool,
    key: F,
    _items: PhantomData<fn(&C)>,
}

impl<C, F: Clone> Clone for IsUnique<C, F> {
    fn clone(&self) -> Self {
        is_unique(self.fail_fast, self.key.clone())
    }
}

impl<C, F, K> Validator for IsUnique<C, F>
where
    C: Items,
    F: Fn(&C::Item) -> K + Send + Sync,
    K: Eq + Hash,
{
    type Value = C;

    fn validate(&self, _: &ReaderContext, _: &Location, value: &C) -> ValidationResult {
        let mut seen: HashMap<K, usize> = HashMap::new();
        let mut errors = Vec::new();

        for (idx, item) in value.items().enumerate() {
            match seen.get(&(self.key)(item)) {
                Some(first) => {
                    errors.push(
                        ReadError::new(format!(
                            "item at index {} duplicates item at index {}",
                            idx, first
                        ))
                        .with_code("is_unique")
                        .with_got(format!("index {}", idx)),
                    );
                    if self.fail_fast {
                        break;
                    }
                }
                None => {
                    seen.insert((self.key)(item), idx);
                }
            }
        }

        match ReadErrors::from_vec(errors) {
            Some(errors) => stillwater::Validation::Failure(errors),
            None => valid(),
        }
    }
}

/// Requires distinct keys across all items. With `fail_fast`, only the first
/// duplicate is reported; otherwise every duplicate is.
///
/// ```rust
/// use waypoint::validator::array;
/// use waypoint::{Location, ReaderContext, Validator};
///
/// let distinct = array::is_unique(false, |s: &String| s.to_lowercase());
/// let items = vec!["a".to_string(), "A".to_string(), "b".to_string(), "a".to_string()];
///
/// let result = distinct.validate(&ReaderContext::new(), &Location::root(), &items);
/// assert_eq!(result.into_result().unwrap_err().len(), 2);
/// ```
pub fn is_unique<C, F>(fail_fast: bool, key: F) -> IsUnique<C, F> {
    IsUnique {
        fail_fast,
        key,
        _items: PhantomData,
    }
}
