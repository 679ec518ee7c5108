//! Conversions into the canonical [`OrderedHash`].
//!
//! - [`IntoMapping`] is the "convertible to an ordered mapping" capability.
//!   It is consulted by flexible construction and by merge.
//! - [`ToOwnMapping`] is the identity coercion: the canonical container
//!   hands back itself, compatible containers hand back a canonical copy.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use super::OrderedHash;

/// Conversion into an ordered mapping, when the value allows it.
///
/// Statically typed maps always convert. Dynamic values such as
/// [`Value`](crate::Value) convert only when they hold a mapping and are
/// otherwise handed back unchanged.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::{IntoMapping, OrderedHash, Value};
///
/// let mapping: OrderedHash<Value, Value> = [(Value::from("a"), Value::from(1))].into_iter().collect();
/// assert!(Value::from(mapping).into_mapping().is_ok());
/// assert_eq!(Value::from(1).into_mapping(), Err(Value::from(1)));
/// ```
pub trait IntoMapping: Sized {
    /// Key type of the resulting mapping.
    type Key;
    /// Value type of the resulting mapping.
    type Value;

    /// Converts `self` into an ordered mapping, preserving its order.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if it cannot be read as a mapping.
    fn into_mapping(self) -> Result<OrderedHash<Self::Key, Self::Value>, Self>;
}

impl<K, V, S> IntoMapping for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn into_mapping(self) -> Result<OrderedHash<K, V>, Self> {
        let mut mapping = OrderedHash::with_capacity(self.len());
        mapping.extend(self);
        Ok(mapping)
    }
}

impl<K, V, S> IntoMapping for &IndexMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn into_mapping(self) -> Result<OrderedHash<K, V>, Self> {
        Ok(self
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

impl<K, V> IntoMapping for BTreeMap<K, V>
where
    K: Hash + Eq,
{
    type Key = K;
    type Value = V;

    fn into_mapping(self) -> Result<OrderedHash<K, V>, Self> {
        Ok(self.into_iter().collect())
    }
}

/// Coercion to the canonical container type.
///
/// The canonical [`OrderedHash`] returns itself without copying. Any other
/// structurally compatible map returns a canonical copy in its own iteration
/// order.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use std::collections::BTreeMap;
/// use ordmap_ext::{OrderedHash, ToOwnMapping};
///
/// let hash: OrderedHash<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
/// assert!(matches!(hash.to_own_mapping(), Cow::Borrowed(_)));
///
/// let tree: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
/// let copy = tree.to_own_mapping();
/// assert!(matches!(copy, Cow::Owned(_)));
/// assert_eq!(copy.keys().collect::<Vec<_>>(), vec![&"a", &"b"]);
/// ```
pub trait ToOwnMapping {
    /// Key type of the canonical mapping.
    type Key: Clone;
    /// Value type of the canonical mapping.
    type Value: Clone;

    /// Returns `self` as the canonical container, copying only if needed.
    fn to_own_mapping(&self) -> Cow<'_, OrderedHash<Self::Key, Self::Value>>;
}

impl<K, V> ToOwnMapping for OrderedHash<K, V>
where
    K: Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn to_own_mapping(&self) -> Cow<'_, OrderedHash<K, V>> {
        Cow::Borrowed(self)
    }
}

#[cfg(feature = "fxhash")]
impl<K, V> ToOwnMapping for super::FxOrderedHash<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn to_own_mapping(&self) -> Cow<'_, OrderedHash<K, V>> {
        Cow::Owned(copy_pairs(self.iter()))
    }
}

#[cfg(feature = "ahash")]
impl<K, V> ToOwnMapping for super::AOrderedHash<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn to_own_mapping(&self) -> Cow<'_, OrderedHash<K, V>> {
        Cow::Owned(copy_pairs(self.iter()))
    }
}

impl<K, V> ToOwnMapping for BTreeMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn to_own_mapping(&self) -> Cow<'_, OrderedHash<K, V>> {
        Cow::Owned(copy_pairs(self.iter()))
    }
}

fn copy_pairs<'a, K, V>(pairs: impl Iterator<Item = (&'a K, &'a V)>) -> OrderedHash<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone + 'a,
{
    pairs
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
