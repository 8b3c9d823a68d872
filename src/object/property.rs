//! Property declarations.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::ReaderContext;
use crate::error::ErrorBuilders;
use crate::location::Location;
use crate::lookup::lookup;
use crate::path::{JsonPath, PathElement};
use crate::reader::{
    read_nullable, read_nullable_with_default, read_optional, read_optional_with_default,
    read_required, read_with_default, Reader,
};
use crate::result::ReadResult;
use crate::value::Value;

/// A lazily evaluated default value.
pub type DefaultFn<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// How a property treats a missing member and an explicit `null`.
pub enum Cardinality<T> {
    Required,
    Defaultable(DefaultFn<T>),
    Optional,
    OptionalWithDefault(DefaultFn<T>),
    Nullable,
    NullableWithDefault(DefaultFn<T>),
}

impl<T> Cardinality<T> {
    pub fn kind(&self) -> CardinalityKind {
        match self {
            Cardinality::Required => CardinalityKind::Required,
            Cardinality::Defaultable(_) => CardinalityKind::Defaultable,
            Cardinality::Optional => CardinalityKind::Optional,
            Cardinality::OptionalWithDefault(_) => CardinalityKind::OptionalWithDefault,
            Cardinality::Nullable => CardinalityKind::Nullable,
            Cardinality::NullableWithDefault(_) => CardinalityKind::NullableWithDefault,
        }
    }
}

impl<T> Clone for Cardinality<T> {
    fn clone(&self) -> Self {
        match self {
            Cardinality::Required => Cardinality::Required,
            Cardinality::Defaultable(d) => Cardinality::Defaultable(Arc::clone(d)),
            Cardinality::Optional => Cardinality::Optional,
            Cardinality::OptionalWithDefault(d) => Cardinality::OptionalWithDefault(Arc::clone(d)),
            Cardinality::Nullable => Cardinality::Nullable,
            Cardinality::NullableWithDefault(d) => Cardinality::NullableWithDefault(Arc::clone(d)),
        }
    }
}

impl<T> fmt::Debug for Cardinality<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind(), f)
    }
}

/// The cardinality of a property without its default, as seen by object
/// validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalityKind {
    Required,
    Defaultable,
    Optional,
    OptionalWithDefault,
    Nullable,
    NullableWithDefault,
}

impl CardinalityKind {
    /// Returns true if a missing member is a read error.
    pub fn requires_presence(&self) -> bool {
        matches!(self, CardinalityKind::Required | CardinalityKind::Nullable)
    }
}

/// What object validators know about a declared property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub path: JsonPath,
    pub kind: CardinalityKind,
}

impl PropertyInfo {
    /// The member name this property is rooted at, if its path starts with one.
    pub fn member_name(&self) -> Option<&str> {
        self.path.elements().first().and_then(PathElement::as_key)
    }
}

/// A typed reference to a declared property's value in
/// [`ObjectValues`](super::ObjectValues).
///
/// `V` is the stored type: `Option<P>` for the optional, nullable and
/// optional-with-default policies, `P` for the others.
pub struct PropertyHandle<V> {
    id: usize,
    _value: PhantomData<fn() -> V>,
}

impl<V> PropertyHandle<V> {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            _value: PhantomData,
        }
    }

    pub(crate) fn id(&self) -> usize {
        self.id
    }
}

impl<V> Clone for PropertyHandle<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for PropertyHandle<V> {}

impl<V> fmt::Debug for PropertyHandle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyHandle").field(&self.id).finish()
    }
}

pub(crate) type StoredValue = Box<dyn Any + Send + Sync>;

/// A declared property with its reader type erased.
pub(crate) trait ObjectProperty: Send + Sync {
    fn info(&self) -> &PropertyInfo;

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
        builders: &ErrorBuilders,
    ) -> ReadResult<StoredValue>;
}

pub(crate) struct TypedProperty<R: Reader> {
    info: PropertyInfo,
    reader: R,
    cardinality: Cardinality<R::Output>,
}

impl<R: Reader> TypedProperty<R> {
    pub(crate) fn new(path: JsonPath, reader: R, cardinality: Cardinality<R::Output>) -> Self {
        Self {
            info: PropertyInfo {
                path,
                kind: cardinality.kind(),
            },
            reader,
            cardinality,
        }
    }
}

fn store<V: Send + Sync + 'static>(value: V) -> StoredValue {
    Box::new(value)
}

impl<R> ObjectProperty for TypedProperty<R>
where
    R: Reader,
    R::Output: Send + Sync + 'static,
{
    fn info(&self) -> &PropertyInfo {
        &self.info
    }

    fn read(
        &self,
        context: &ReaderContext,
        location: &Location,
        input: &Value,
        builders: &ErrorBuilders,
    ) -> ReadResult<StoredValue> {
        let found = lookup(location, &self.info.path, input);
        let reader = &self.reader;

        match &self.cardinality {
            Cardinality::Required => read_required(context, found, reader, builders).map(store),
            Cardinality::Defaultable(default) => {
                read_with_default(context, found, reader, || default(), builders).map(store)
            }
            Cardinality::Optional => read_optional(context, found, reader, builders).map(store),
            Cardinality::OptionalWithDefault(default) => {
                read_optional_with_default(context, found, reader, || default(), builders)
                    .map(store)
            }
            Cardinality::Nullable => read_nullable(context, found, reader, builders).map(store),
            Cardinality::NullableWithDefault(default) => {
                read_nullable_with_default(context, found, reader, || default(), builders)
                    .map(store)
            }
        }
    }
}
