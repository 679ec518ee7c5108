//! Lookup with fallbacks.
//!
//! A miss falls through three tiers, first match wins:
//!
//! 1. the `on_missing` callback, called with the key;
//! 2. the explicit default;
//! 3. [`HashError::KeyNotFound`].
//!
//! A present key always returns its stored value and consults neither
//! fallback.

use crate::container::OrderedMap;
use crate::error::HashError;

/// Returns the value under `key` or fails.
///
/// # Errors
///
/// Returns [`HashError::KeyNotFound`] carrying `key` if it is absent.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::{HashError, OrderedHash};
/// use ordmap_ext::extension::fetch;
///
/// let hash: OrderedHash<&str, i32> = [("a", 1)].into_iter().collect();
/// assert_eq!(fetch(&hash, &"a"), Ok(&1));
/// assert_eq!(fetch(&hash, &"z"), Err(HashError::KeyNotFound("z")));
/// ```
pub fn fetch<'a, M>(container: &'a M, key: &M::Key) -> Result<&'a M::Value, HashError<M::Key>>
where
    M: OrderedMap,
    M::Key: Clone,
{
    container
        .get(key)
        .ok_or_else(|| HashError::KeyNotFound(key.clone()))
}

/// Returns the value under `key`, or `default` if it is absent.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::fetch_or;
///
/// let hash: OrderedHash<&str, &str> = [("a", "x")].into_iter().collect();
/// assert_eq!(fetch_or(&hash, &"z", "go fish"), "go fish");
/// ```
pub fn fetch_or<M>(container: &M, key: &M::Key, default: M::Value) -> M::Value
where
    M: OrderedMap,
    M::Value: Clone,
{
    container.get(key).cloned().unwrap_or(default)
}

/// Returns the value under `key`, or `on_missing(key)` if it is absent.
///
/// The callback's result is returned as is.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::fetch_or_else;
///
/// let hash: OrderedHash<&str, String> = OrderedHash::new();
/// assert_eq!(fetch_or_else(&hash, &"z", |key| format!("go fish, {key}")), "go fish, z");
/// ```
pub fn fetch_or_else<M, F>(container: &M, key: &M::Key, on_missing: F) -> M::Value
where
    M: OrderedMap,
    M::Value: Clone,
    F: FnOnce(&M::Key) -> M::Value,
{
    container
        .get(key)
        .map_or_else(|| on_missing(key), Clone::clone)
}

/// Returns the value under `key`, applying the full fallback order on a miss.
///
/// `on_missing` takes precedence over `default` when both are supplied.
///
/// # Errors
///
/// Returns [`HashError::KeyNotFound`] if `key` is absent and neither fallback
/// was supplied.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::fetch_with;
///
/// let hash: OrderedHash<&str, i32> = [("a", 1)].into_iter().collect();
/// assert_eq!(fetch_with(&hash, &"z", Some(0), Some(|_: &&str| -1)), Ok(-1));
/// assert_eq!(fetch_with(&hash, &"z", Some(0), None::<fn(&&str) -> i32>), Ok(0));
/// ```
pub fn fetch_with<M, F>(
    container: &M,
    key: &M::Key,
    default: Option<M::Value>,
    on_missing: Option<F>,
) -> Result<M::Value, HashError<M::Key>>
where
    M: OrderedMap,
    M::Key: Clone,
    M::Value: Clone,
    F: FnOnce(&M::Key) -> M::Value,
{
    if let Some(value) = container.get(key) {
        return Ok(value.clone());
    }
    match (on_missing, default) {
        (Some(on_missing), _) => Ok(on_missing(key)),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(HashError::KeyNotFound(key.clone())),
    }
}
