//! Destructive merge.
//!
//! Source pairs are applied to the target in the source's order. Keys
//! already present in the target keep their position; new keys are appended
//! in the source's order.
//!
//! Merging a container into itself cannot be expressed: the target is
//! borrowed mutably for the whole call, so the borrow checker rejects any
//! source that aliases it.

use crate::container::{IntoMapping, OrderedMap};
use crate::error::HashError;

/// Merges `source` into `target`, overwriting colliding keys.
///
/// # Errors
///
/// Returns [`HashError::NotMappingConvertible`] if `source` cannot be read as
/// a mapping. `target` is untouched in that case.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::merge_into;
///
/// let mut target: OrderedHash<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let source: OrderedHash<&str, i32> = [("b", 3), ("c", 4)].into_iter().collect();
///
/// merge_into(&mut target, source).unwrap();
/// assert_eq!(target.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 3), ("c", 4)]);
/// ```
pub fn merge_into<M, S>(target: &mut M, source: S) -> Result<&mut M, HashError<M::Key>>
where
    M: OrderedMap,
    S: IntoMapping<Key = M::Key, Value = M::Value>,
{
    let source = source
        .into_mapping()
        .map_err(|_| HashError::NotMappingConvertible)?;
    let merged = source.len();
    for (key, value) in source {
        target.set(key, value);
    }
    tracing::trace!(merged, size = target.size(), "merged without resolver");
    Ok(target)
}

/// Merges `source` into `target`, resolving colliding keys with `resolver`.
///
/// For a key present in both, the stored value becomes
/// `resolver(&key, &current, incoming)`. The resolver runs exactly once per
/// colliding key, in the source's order, and never for keys only present in
/// `source`.
///
/// # Errors
///
/// Returns [`HashError::NotMappingConvertible`] if `source` cannot be read as
/// a mapping. `target` is untouched in that case.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::merge_into_with;
///
/// let mut target: OrderedHash<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let source: OrderedHash<&str, i32> = [("b", 3), ("c", 4)].into_iter().collect();
///
/// merge_into_with(&mut target, source, |_, current, _| *current).unwrap();
/// assert_eq!(target.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 2), ("c", 4)]);
/// ```
pub fn merge_into_with<M, S, R>(
    target: &mut M,
    source: S,
    mut resolver: R,
) -> Result<&mut M, HashError<M::Key>>
where
    M: OrderedMap,
    S: IntoMapping<Key = M::Key, Value = M::Value>,
    R: FnMut(&M::Key, &M::Value, M::Value) -> M::Value,
{
    let source = source
        .into_mapping()
        .map_err(|_| HashError::NotMappingConvertible)?;
    let merged = source.len();
    let mut collisions = 0_usize;
    for (key, incoming) in source {
        let value = match target.get(&key) {
            Some(current) => {
                collisions += 1;
                resolver(&key, current, incoming)
            }
            None => incoming,
        };
        target.set(key, value);
    }
    tracing::trace!(merged, collisions, size = target.size(), "merged with resolver");
    Ok(target)
}
