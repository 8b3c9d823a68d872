//! Read context.
//!
//! This module provides [`ReaderContext`], the immutable bag of caller
//! settings threaded through every reader and validator call. It replaces any
//! ambient or global configuration: a reader that needs a locale or a feature
//! flag asks the context it was handed.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Immutable, typed collection of caller-supplied settings.
///
/// Elements are keyed by their type. Adding an element returns a new context;
/// a context is never changed while a read is in progress.
///
/// # Example
///
/// ```rust
/// use waypoint::ReaderContext;
///
/// #[derive(Debug, PartialEq)]
/// struct Locale(&'static str);
///
/// let context = ReaderContext::new().with(Locale("fr"));
///
/// assert_eq!(context.get::<Locale>(), Some(&Locale("fr")));
/// assert!(context.get::<u32>().is_none());
/// ```
#[derive(Clone, Default)]
pub struct ReaderContext {
    elements: Arc<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ReaderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context that also holds `element`, replacing any
    /// element of the same type.
    pub fn with<E: Any + Send + Sync>(&self, element: E) -> Self {
        let mut elements = (*self.elements).clone();
        elements.insert(TypeId::of::<E>(), Arc::new(element));
        Self {
            elements: Arc::new(elements),
        }
    }

    pub fn get<E: Any + Send + Sync>(&self) -> Option<&E> {
        self.elements
            .get(&TypeId::of::<E>())
            .and_then(|element| element.downcast_ref::<E>())
    }

    pub fn contains<E: Any + Send + Sync>(&self) -> bool {
        self.elements.contains_key(&TypeId::of::<E>())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Debug for ReaderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderContext")
            .field("elements", &self.elements.len())
            .finish()
    }
}
