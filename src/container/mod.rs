//! The base container and its primitive interface.
//!
//! The extension operations never touch storage directly. They are written
//! against [`OrderedMap`], a small fixed set of primitives:
//!
//! - [`OrderedMap::contains_key`]: membership test
//! - [`OrderedMap::get`]: lookup
//! - [`OrderedMap::set`]: insert-or-overwrite
//! - [`OrderedMap::delete`]: removal (no-op when absent)
//! - [`OrderedMap::pairs`]: iteration in insertion order
//! - [`OrderedMap::size`]: number of entries
//!
//! [`indexmap::IndexMap`] provides the storage. Overwriting a key keeps its
//! position and deletion uses `shift_remove`, so the relative order of the
//! remaining keys never changes.
//!
//! # Examples
//!
//! ```rust
//! use ordmap_ext::{OrderedHash, OrderedMap};
//!
//! let mut hash: OrderedHash<&str, i32> = OrderedHash::new();
//! hash.set("a", 1);
//! hash.set("b", 2);
//! hash.set("a", 10);
//!
//! let keys: Vec<&&str> = hash.pairs().map(|(key, _)| key).collect();
//! assert_eq!(keys, vec![&"a", &"b"]);
//!
//! hash.delete(&"a");
//! hash.set("a", 1);
//! let keys: Vec<&&str> = hash.pairs().map(|(key, _)| key).collect();
//! assert_eq!(keys, vec![&"b", &"a"]);
//! ```

mod conversion;

pub use conversion::IntoMapping;
pub use conversion::ToOwnMapping;

use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// The canonical base container: an insertion-ordered hash map.
pub type OrderedHash<K, V, S = std::collections::hash_map::RandomState> = IndexMap<K, V, S>;

/// [`OrderedHash`] using `FxHash` (not HashDoS resistant).
#[cfg(feature = "fxhash")]
pub type FxOrderedHash<K, V> = IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// [`OrderedHash`] using `AHash`.
#[cfg(feature = "ahash")]
pub type AOrderedHash<K, V> = IndexMap<K, V, ahash::RandomState>;

/// The primitive interface of an insertion-ordered, key-unique map.
///
/// Implementations must keep these guarantees:
///
/// - at most one entry per key;
/// - `set` on a present key replaces the value in place;
/// - `set` on an absent key appends it after every present key;
/// - `delete` and `retain_pairs` keep the relative order of the remaining keys;
/// - `pairs` yields every present entry exactly once, in insertion order.
pub trait OrderedMap {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Returns the value stored under `key`, or `None` if it is absent.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Inserts `value` under `key`, returning the previous value if any.
    fn set(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes `key`, returning its value. Does nothing if absent.
    fn delete(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Keeps only the entries for which `keep` returns `true`, visiting each
    /// entry once in insertion order. Runs in a single pass.
    fn retain_pairs<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool;

    /// Iterates over the entries in insertion order.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Returns the number of entries.
    fn size(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<K, V, S> OrderedMap for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    #[inline]
    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    #[inline]
    fn delete(&mut self, key: &K) -> Option<V> {
        self.shift_remove(key)
    }

    fn retain_pairs<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.retain(|key, value| keep(key, value));
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn keys_of(hash: &OrderedHash<&'static str, i32>) -> Vec<&'static str> {
        hash.pairs().map(|(key, _)| *key).collect()
    }

    #[rstest]
    fn test_set_appends_new_keys_in_order() {
        let mut hash = OrderedHash::new();
        hash.set("c", 3);
        hash.set("a", 1);
        hash.set("b", 2);

        assert_eq!(keys_of(&hash), vec!["c", "a", "b"]);
        assert_eq!(OrderedMap::size(&hash), 3);
    }

    #[rstest]
    fn test_set_overwrite_keeps_position() {
        let mut hash = OrderedHash::new();
        hash.set("a", 1);
        hash.set("b", 2);

        assert_eq!(hash.set("a", 100), Some(1));
        assert_eq!(keys_of(&hash), vec!["a", "b"]);
        assert_eq!(OrderedMap::get(&hash, &"a"), Some(&100));
    }

    #[rstest]
    fn test_delete_then_set_moves_key_to_end() {
        let mut hash = OrderedHash::new();
        hash.set("a", 1);
        hash.set("b", 2);
        hash.set("c", 3);

        assert_eq!(hash.delete(&"a"), Some(1));
        assert_eq!(keys_of(&hash), vec!["b", "c"]);

        hash.set("a", 1);
        assert_eq!(keys_of(&hash), vec!["b", "c", "a"]);
    }

    #[rstest]
    fn test_delete_absent_key_is_noop() {
        let mut hash = OrderedHash::new();
        hash.set("a", 1);

        assert_eq!(hash.delete(&"z"), None);
        assert_eq!(keys_of(&hash), vec!["a"]);
    }

    #[rstest]
    fn test_contains_key_and_is_empty() {
        let mut hash: OrderedHash<&str, i32> = OrderedHash::new();
        assert!(OrderedMap::is_empty(&hash));

        hash.set("a", 1);
        assert!(OrderedMap::contains_key(&hash, &"a"));
        assert!(!OrderedMap::contains_key(&hash, &"b"));
        assert!(!OrderedMap::is_empty(&hash));
    }

    #[rstest]
    fn test_retain_pairs_visits_in_order_and_keeps_order() {
        let mut hash: OrderedHash<&str, i32> = OrderedHash::new();
        for (key, value) in [("c", 3), ("a", 1), ("d", 4), ("b", 2)] {
            hash.set(key, value);
        }

        let mut visited = Vec::new();
        hash.retain_pairs(|key, value| {
            visited.push(*key);
            value % 2 == 1
        });

        assert_eq!(visited, vec!["c", "a", "d", "b"]);
        assert_eq!(keys_of(&hash), vec!["c", "a"]);
    }
}
