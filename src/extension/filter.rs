//! Predicate-driven in-place filtering.
//!
//! Both filters run in two passes. The first visits every pair present at
//! call start, in order, and records the predicate's verdict; the container
//! is untouched while the predicate runs. The second removes the condemned
//! pairs in one order-preserving sweep through
//! [`OrderedMap::retain_pairs`], so a filter costs O(n) regardless of how
//! many pairs it removes.
//!
//! Without a predicate, [`deferred_delete_if`] and [`deferred_keep_if`]
//! return a [`DeferredFilter`] bound to the container instead of filtering.

use smallvec::SmallVec;

use crate::container::OrderedMap;

/// Verdicts held inline before spilling to the heap.
const VERDICT_INLINE_CAPACITY: usize = 64;

/// Which pairs a filter removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Remove pairs for which the predicate holds.
    Delete,
    /// Remove pairs for which the predicate does not hold.
    Keep,
}

impl FilterKind {
    #[inline]
    const fn removes(self, matched: bool) -> bool {
        match self {
            Self::Delete => matched,
            Self::Keep => !matched,
        }
    }
}

/// Removes every pair for which `predicate(key, value)` is `true`.
///
/// Returns the same container.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::delete_if;
///
/// let mut hash: OrderedHash<&str, i32> = [("a", 100), ("b", 200), ("c", 300)].into_iter().collect();
/// delete_if(&mut hash, |key, _| *key >= "b");
/// assert_eq!(hash.into_iter().collect::<Vec<_>>(), vec![("a", 100)]);
/// ```
pub fn delete_if<M, P>(container: &mut M, predicate: P) -> &mut M
where
    M: OrderedMap,
    P: FnMut(&M::Key, &M::Value) -> bool,
{
    filter_in_place(container, FilterKind::Delete, predicate)
}

/// Removes every pair for which `predicate(key, value)` is `false`.
///
/// Returns the same container.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::keep_if;
///
/// let mut hash: OrderedHash<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
/// keep_if(&mut hash, |_, value| value % 2 == 1);
/// assert_eq!(hash.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
/// ```
pub fn keep_if<M, P>(container: &mut M, predicate: P) -> &mut M
where
    M: OrderedMap,
    P: FnMut(&M::Key, &M::Value) -> bool,
{
    filter_in_place(container, FilterKind::Keep, predicate)
}

/// Binds a deferred `delete_if` to `container`.
pub const fn deferred_delete_if<M: OrderedMap>(container: &mut M) -> DeferredFilter<'_, M> {
    DeferredFilter::new(container, FilterKind::Delete)
}

/// Binds a deferred `keep_if` to `container`.
pub const fn deferred_keep_if<M: OrderedMap>(container: &mut M) -> DeferredFilter<'_, M> {
    DeferredFilter::new(container, FilterKind::Keep)
}

fn filter_in_place<M, P>(container: &mut M, kind: FilterKind, mut predicate: P) -> &mut M
where
    M: OrderedMap,
    P: FnMut(&M::Key, &M::Value) -> bool,
{
    let verdicts: SmallVec<[bool; VERDICT_INLINE_CAPACITY]> = container
        .pairs()
        .map(|(key, value)| kind.removes(predicate(key, value)))
        .collect();
    let visited = verdicts.len();
    let removed = verdicts.iter().filter(|remove| **remove).count();
    if removed > 0 {
        let mut verdicts = verdicts.into_iter();
        container.retain_pairs(|_, _| !verdicts.next().unwrap_or(false));
    }
    tracing::trace!(?kind, visited, removed, "filtered in place");
    container
}

/// A filter waiting for its predicate.
///
/// The value is bound to one container and one [`FilterKind`]. It can be
/// iterated any number of times to preview the pairs the filter will visit,
/// and is consumed by [`DeferredFilter::apply`].
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::OrderedHash;
/// use ordmap_ext::extension::{FilterKind, deferred_keep_if};
///
/// let mut hash: OrderedHash<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let deferred = deferred_keep_if(&mut hash);
/// assert_eq!(deferred.kind(), FilterKind::Keep);
/// assert_eq!(deferred.iter().count(), 2);
/// assert_eq!(deferred.iter().count(), 2);
///
/// deferred.apply(|_, value| *value > 1);
/// assert_eq!(hash.len(), 1);
/// ```
#[derive(Debug)]
pub struct DeferredFilter<'a, M> {
    container: &'a mut M,
    kind: FilterKind,
}

impl<'a, M: OrderedMap> DeferredFilter<'a, M> {
    const fn new(container: &'a mut M, kind: FilterKind) -> Self {
        Self { container, kind }
    }

    /// The kind of filter this value will run.
    #[inline]
    pub const fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Iterates over the pairs the filter will visit, in order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = (&M::Key, &M::Value)> {
        self.container.pairs()
    }

    /// Number of pairs the filter will visit.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.size()
    }

    /// Returns `true` if there is nothing to filter.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Runs the filter with `predicate` and returns the container.
    pub fn apply<P>(self, predicate: P) -> &'a mut M
    where
        P: FnMut(&M::Key, &M::Value) -> bool,
    {
        filter_in_place(self.container, self.kind, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::OrderedHash;
    use rstest::rstest;

    fn hash() -> OrderedHash<&'static str, i32> {
        [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect()
    }

    #[rstest]
    fn test_delete_if_returns_same_container() {
        let mut target = hash();
        let address = std::ptr::from_ref(&target);
        let returned = delete_if(&mut target, |_, _| false);
        assert!(std::ptr::eq(returned, address));
    }

    #[rstest]
    fn test_predicate_sees_every_pair_once_in_order() {
        let mut target = hash();
        let mut seen = Vec::new();
        delete_if(&mut target, |key, value| {
            seen.push((*key, *value));
            true
        });
        assert_eq!(seen, vec![("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        assert!(target.is_empty());
    }

    #[rstest]
    #[case(FilterKind::Delete, vec!["a", "c"])]
    #[case(FilterKind::Keep, vec!["b", "d"])]
    fn test_even_value_filter(#[case] kind: FilterKind, #[case] expected: Vec<&str>) {
        let mut target = hash();
        let is_even = |_: &&str, value: &i32| value % 2 == 0;
        match kind {
            FilterKind::Delete => delete_if(&mut target, is_even),
            FilterKind::Keep => keep_if(&mut target, is_even),
        };
        assert_eq!(target.keys().copied().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_remaining_keys_keep_relative_order() {
        let mut target: OrderedHash<i32, i32> = (0..40).map(|index| (index, index)).collect();
        delete_if(&mut target, |key, _| key % 3 == 0);
        let keys: Vec<i32> = target.keys().copied().collect();
        let expected: Vec<i32> = (0..40).filter(|index| index % 3 != 0).collect();
        assert_eq!(keys, expected);
    }

    #[rstest]
    fn test_deferred_filter_is_restartable_and_leaves_container_alone() {
        let mut target = hash();
        let deferred = deferred_delete_if(&mut target);
        let first: Vec<_> = deferred.iter().map(|(key, _)| *key).collect();
        let second: Vec<_> = deferred.iter().map(|(key, _)| *key).collect();
        assert_eq!(first, second);
        assert_eq!(deferred.len(), 4);
        assert!(!deferred.is_empty());
        drop(deferred);
        assert_eq!(target, hash());
    }

    #[rstest]
    fn test_keep_if_returns_same_container() {
        let mut target = hash();
        let address = std::ptr::from_ref(&target);
        let returned = keep_if(&mut target, |_, value| *value > 2);
        assert!(std::ptr::eq(returned, address));
    }

    #[rstest]
    fn test_deferred_filter_apply() {
        let mut target = hash();
        let address = std::ptr::from_ref(&target);
        let returned = deferred_delete_if(&mut target).apply(|key, _| *key == "b");
        assert!(std::ptr::eq(returned, address));
        assert_eq!(returned.keys().copied().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    /// Counts calls to the removal primitives of the wrapped map.
    #[derive(Default)]
    struct CountingHash {
        inner: OrderedHash<i32, i32>,
        deletes: usize,
        sweeps: usize,
    }

    impl OrderedMap for CountingHash {
        type Key = i32;
        type Value = i32;

        fn contains_key(&self, key: &i32) -> bool {
            self.inner.contains_key(key)
        }

        fn get(&self, key: &i32) -> Option<&i32> {
            self.inner.get(key)
        }

        fn set(&mut self, key: i32, value: i32) -> Option<i32> {
            self.inner.insert(key, value)
        }

        fn delete(&mut self, key: &i32) -> Option<i32> {
            self.deletes += 1;
            self.inner.shift_remove(key)
        }

        fn retain_pairs<F>(&mut self, keep: F)
        where
            F: FnMut(&i32, &i32) -> bool,
        {
            self.sweeps += 1;
            self.inner.retain_pairs(keep);
        }

        fn pairs(&self) -> impl Iterator<Item = (&i32, &i32)> {
            self.inner.iter()
        }

        fn size(&self) -> usize {
            self.inner.len()
        }
    }

    #[rstest]
    #[case(FilterKind::Delete)]
    #[case(FilterKind::Keep)]
    fn test_filter_removes_in_a_single_sweep(#[case] kind: FilterKind) {
        let mut target = CountingHash::default();
        for index in 0..10_000 {
            target.set(index, index);
        }

        let is_even = |key: &i32, _: &i32| key % 2 == 0;
        match kind {
            FilterKind::Delete => delete_if(&mut target, is_even),
            FilterKind::Keep => keep_if(&mut target, is_even),
        };

        assert_eq!(target.deletes, 0);
        assert_eq!(target.sweeps, 1);
        assert_eq!(target.size(), 5_000);
        let expected_parity = match kind {
            FilterKind::Delete => 1,
            FilterKind::Keep => 0,
        };
        assert!(target.pairs().all(|(key, _)| key % 2 == expected_parity));
    }

    #[rstest]
    fn test_filter_that_removes_nothing_skips_the_sweep() {
        let mut target = CountingHash::default();
        target.set(1, 1);
        delete_if(&mut target, |_, _| false);
        assert_eq!(target.sweeps, 0);
        assert_eq!(target.size(), 1);
    }

    #[rstest]
    fn test_filter_on_empty_container() {
        let mut target: OrderedHash<&str, i32> = OrderedHash::new();
        keep_if(&mut target, |_, _| panic!("no pairs to visit"));
        assert!(target.is_empty());
    }
}
