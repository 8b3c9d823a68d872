//! Values read for the declared properties of one object.

use std::fmt;
use std::ops::Index;

use super::property::{PropertyHandle, StoredValue};

/// The successfully read property values of one object, addressed by the
/// [`PropertyHandle`]s returned when the properties were declared.
///
/// Post-validators see this map after every property has been read; the
/// assembler receives it by value.
pub struct ObjectValues {
    values: Vec<Option<StoredValue>>,
}

impl ObjectValues {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            values: (0..capacity).map(|_| None).collect(),
        }
    }

    pub(crate) fn insert(&mut self, id: usize, value: StoredValue) {
        if let Some(slot) = self.values.get_mut(id) {
            *slot = Some(value);
        }
    }

    /// Returns the value read for `handle`, or `None` if the property was not
    /// read or belongs to another object reader.
    pub fn get<V: 'static>(&self, handle: &PropertyHandle<V>) -> Option<&V> {
        self.values
            .get(handle.id())?
            .as_ref()?
            .downcast_ref::<V>()
    }

    /// Moves the value read for `handle` out of the map.
    pub fn take<V: 'static>(&mut self, handle: &PropertyHandle<V>) -> Option<V> {
        let slot = self.values.get_mut(handle.id())?;
        if !slot.as_ref()?.is::<V>() {
            return None;
        }
        slot.take()?.downcast::<V>().ok().map(|value| *value)
    }

    pub fn contains<V: 'static>(&self, handle: &PropertyHandle<V>) -> bool {
        self.get(handle).is_some()
    }

    /// Number of properties with a value.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: 'static> Index<&PropertyHandle<V>> for ObjectValues {
    type Output = V;

    /// # Panics
    ///
    /// Panics if no value was read for `handle`. Inside an assembler every
    /// declared property of the same reader has a value, so this only happens
    /// with a handle taken from another reader or after [`ObjectValues::take`].
    fn index(&self, handle: &PropertyHandle<V>) -> &V {
        match self.get(handle) {
            Some(value) => value,
            None => panic!("no value for property {}", handle.id()),
        }
    }
}

impl fmt::Debug for ObjectValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValues")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
