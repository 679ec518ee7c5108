//! Extension operations over ordered maps.
//!
//! Every operation is a free function parameterized by a container that
//! implements [`OrderedMap`]. [`HashExt`] exposes the same operations as
//! methods on any such container.
//!
//! | Operation                          | Effect                                  |
//! |------------------------------------|-----------------------------------------|
//! | [`from_args`] / [`from_values`]    | new hash from one of three input forms  |
//! | [`merge_into`] / [`merge_into_with`] | in place, optional collision resolver |
//! | [`fetch`] / [`fetch_with`]         | lookup with callback/default fallbacks  |
//! | [`delete_if`] / [`keep_if`]        | in place, snapshot-then-delete          |
//! | [`flatten`]                        | new sequence                            |
//! | [`invert`]                         | new hash, value to key                  |
//! | [`key_of`]                         | first key holding a value               |
//! | [`each_pair`]                      | ordered visitation                      |
//!
//! Operations documented as "in place" return the container they were given.
//! Operations returning a new container never modify their input.
//!
//! # Examples
//!
//! ```rust
//! use ordmap_ext::prelude::*;
//!
//! let mut hash: OrderedHash<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! let other: OrderedHash<&str, i32> = [("b", 3), ("c", 4)].into_iter().collect();
//!
//! hash.merge_into_with(other, |_, current, incoming| current + incoming)
//!     .unwrap()
//!     .delete_if(|key, _| *key == "a");
//!
//! assert_eq!(hash.fetch(&"b"), Ok(&5));
//! assert_eq!(hash.key_of(&4), Some(&"c"));
//! ```

mod construct;
mod fetch;
mod filter;
mod flatten;
mod lookup;
mod merge;

pub use construct::HashArgs;
pub use construct::from_args;
pub use construct::from_values;
pub use fetch::fetch;
pub use fetch::fetch_or;
pub use fetch::fetch_or_else;
pub use fetch::fetch_with;
pub use filter::DeferredFilter;
pub use filter::FilterKind;
pub use filter::deferred_delete_if;
pub use filter::deferred_keep_if;
pub use filter::delete_if;
pub use filter::keep_if;
pub use flatten::FlattenDepth;
pub use flatten::flatten;
pub use lookup::each_pair;
pub use lookup::invert;
pub use lookup::key_of;
pub use merge::merge_into;
pub use merge::merge_into_with;

use std::hash::Hash;

use crate::container::{IntoMapping, OrderedHash, OrderedMap};
use crate::element::Element;
use crate::error::HashError;

/// Method syntax for the extension operations.
///
/// Implemented for every [`OrderedMap`].
pub trait HashExt: OrderedMap + Sized {
    /// See [`merge_into`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError::NotMappingConvertible`] if `source` is not a mapping.
    fn merge_into<S>(&mut self, source: S) -> Result<&mut Self, HashError<Self::Key>>
    where
        S: IntoMapping<Key = Self::Key, Value = Self::Value>,
    {
        merge::merge_into(self, source)
    }

    /// See [`merge_into_with`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError::NotMappingConvertible`] if `source` is not a mapping.
    fn merge_into_with<S, R>(
        &mut self,
        source: S,
        resolver: R,
    ) -> Result<&mut Self, HashError<Self::Key>>
    where
        S: IntoMapping<Key = Self::Key, Value = Self::Value>,
        R: FnMut(&Self::Key, &Self::Value, Self::Value) -> Self::Value,
    {
        merge::merge_into_with(self, source, resolver)
    }

    /// Alias of [`HashExt::merge_into`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError::NotMappingConvertible`] if `source` is not a mapping.
    fn update<S>(&mut self, source: S) -> Result<&mut Self, HashError<Self::Key>>
    where
        S: IntoMapping<Key = Self::Key, Value = Self::Value>,
    {
        merge::merge_into(self, source)
    }

    /// See [`fetch`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError::KeyNotFound`] if `key` is absent.
    fn fetch(&self, key: &Self::Key) -> Result<&Self::Value, HashError<Self::Key>>
    where
        Self::Key: Clone,
    {
        fetch::fetch(self, key)
    }

    /// See [`fetch_or`].
    fn fetch_or(&self, key: &Self::Key, default: Self::Value) -> Self::Value
    where
        Self::Value: Clone,
    {
        fetch::fetch_or(self, key, default)
    }

    /// See [`fetch_or_else`].
    fn fetch_or_else<F>(&self, key: &Self::Key, on_missing: F) -> Self::Value
    where
        Self::Value: Clone,
        F: FnOnce(&Self::Key) -> Self::Value,
    {
        fetch::fetch_or_else(self, key, on_missing)
    }

    /// See [`fetch_with`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError::KeyNotFound`] if `key` is absent and no fallback
    /// was supplied.
    fn fetch_with<F>(
        &self,
        key: &Self::Key,
        default: Option<Self::Value>,
        on_missing: Option<F>,
    ) -> Result<Self::Value, HashError<Self::Key>>
    where
        Self::Key: Clone,
        Self::Value: Clone,
        F: FnOnce(&Self::Key) -> Self::Value,
    {
        fetch::fetch_with(self, key, default, on_missing)
    }

    /// See [`delete_if`].
    fn delete_if<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        filter::delete_if(self, predicate)
    }

    /// See [`keep_if`].
    fn keep_if<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        filter::keep_if(self, predicate)
    }

    /// See [`deferred_delete_if`].
    fn deferred_delete_if(&mut self) -> DeferredFilter<'_, Self> {
        filter::deferred_delete_if(self)
    }

    /// See [`deferred_keep_if`].
    fn deferred_keep_if(&mut self) -> DeferredFilter<'_, Self> {
        filter::deferred_keep_if(self)
    }

    /// See [`flatten`].
    fn flatten<T>(&self, depth: FlattenDepth) -> Vec<T>
    where
        Self::Key: Clone + Into<T>,
        Self::Value: Clone + Into<T>,
        T: Element,
    {
        flatten::flatten(self, depth)
    }

    /// See [`invert`].
    fn invert(&self) -> OrderedHash<Self::Value, Self::Key>
    where
        Self::Key: Clone,
        Self::Value: Clone + Hash + Eq,
    {
        lookup::invert(self)
    }

    /// See [`key_of`].
    fn key_of(&self, value: &Self::Value) -> Option<&Self::Key>
    where
        Self::Value: PartialEq,
    {
        lookup::key_of(self, value)
    }

    /// See [`each_pair`].
    fn each_pair<F>(&self, visitor: F) -> &Self
    where
        F: FnMut(&Self::Key, &Self::Value),
    {
        lookup::each_pair(self, visitor)
    }
}

impl<M: OrderedMap> HashExt for M {}
