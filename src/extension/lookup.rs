//! Lookups and projections by value.

use std::hash::Hash;

use crate::container::{OrderedHash, OrderedMap};

/// Returns a new hash mapping each value of `container` to its key.
///
/// When several keys share a value, the last one in iteration order wins;
/// the value keeps the position where it was first seen.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::invert;
///
/// let hash: OrderedHash<&str, i32> =
///     [("n", 100), ("m", 100), ("y", 300), ("d", 200), ("a", 0)].into_iter().collect();
/// let inverted = invert(&hash);
/// assert_eq!(
///     inverted.into_iter().collect::<Vec<_>>(),
///     vec![(100, "m"), (300, "y"), (200, "d"), (0, "a")]
/// );
/// ```
pub fn invert<M>(container: &M) -> OrderedHash<M::Value, M::Key>
where
    M: OrderedMap,
    M::Key: Clone,
    M::Value: Clone + Hash + Eq,
{
    let mut inverted = OrderedHash::with_capacity(container.size());
    for (key, value) in container.pairs() {
        inverted.insert(value.clone(), key.clone());
    }
    inverted
}

/// Returns the first key, in iteration order, whose value equals `value`.
///
/// Runs in O(n); no reverse index is kept.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::key_of;
///
/// let hash: OrderedHash<&str, i32> = [("a", 100), ("b", 200), ("c", 300), ("d", 300)].into_iter().collect();
/// assert_eq!(key_of(&hash, &300), Some(&"c"));
/// assert_eq!(key_of(&hash, &999), None);
/// ```
pub fn key_of<'a, M>(container: &'a M, value: &M::Value) -> Option<&'a M::Key>
where
    M: OrderedMap,
    M::Value: PartialEq,
{
    container
        .pairs()
        .find_map(|(key, candidate)| (candidate == value).then_some(key))
}

/// Calls `visitor` on every pair in iteration order and returns the container.
pub fn each_pair<M, F>(container: &M, mut visitor: F) -> &M
where
    M: OrderedMap,
    F: FnMut(&M::Key, &M::Value),
{
    for (key, value) in container.pairs() {
        visitor(key, value);
    }
    container
}
