//! Flattening into a sequence.
//!
//! Each pair becomes a two-element sequence `[key, value]`; the list of
//! pairs is then flattened to the requested depth.
//!
//! ```text
//! {1 => "one", 2 => [2, "two"]}
//!
//! Levels(0)  [[1, "one"], [2, [2, "two"]]]
//! Levels(1)  [1, "one", 2, [2, "two"]]
//! Levels(2)  [1, "one", 2, 2, "two"]
//! ```

use crate::container::OrderedMap;
use crate::element::Element;

/// How many levels of nesting to splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlattenDepth {
    /// Splice at most this many levels. `Levels(0)` keeps pairs intact.
    Levels(usize),
    /// Splice every level.
    Full,
}

impl FlattenDepth {
    /// The depth left for the items of a spliced sequence, or `None` if
    /// nothing may be spliced at this depth.
    #[inline]
    const fn descend(self) -> Option<Self> {
        match self {
            Self::Levels(0) => None,
            Self::Levels(levels) => Some(Self::Levels(levels - 1)),
            Self::Full => Some(Self::Full),
        }
    }
}

impl Default for FlattenDepth {
    fn default() -> Self {
        Self::Levels(1)
    }
}

impl From<usize> for FlattenDepth {
    fn from(levels: usize) -> Self {
        Self::Levels(levels)
    }
}

/// Negative depths flatten fully.
impl From<i64> for FlattenDepth {
    fn from(levels: i64) -> Self {
        usize::try_from(levels).map_or(Self::Full, Self::Levels)
    }
}

/// Returns the pairs of `container` as a sequence flattened to `depth`.
///
/// Items that are not sequences are copied as they are. The container is
/// not modified.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::{Value, ValueHash};
/// use ordmap_ext::extension::{FlattenDepth, flatten};
///
/// let mut hash = ValueHash::new();
/// hash.insert(Value::from(1), Value::from("one"));
/// hash.insert(Value::from(2), Value::from(vec![Value::from(2), Value::from("two")]));
///
/// let flat: Vec<Value> = flatten(&hash, FlattenDepth::Levels(2));
/// assert_eq!(Value::from(flat).to_string(), "[1, \"one\", 2, 2, \"two\"]");
/// ```
pub fn flatten<M, T>(container: &M, depth: FlattenDepth) -> Vec<T>
where
    M: OrderedMap,
    M::Key: Clone + Into<T>,
    M::Value: Clone + Into<T>,
    T: Element,
{
    let mut output = Vec::with_capacity(container.size() * 2);
    for (key, value) in container.pairs() {
        let pair = T::from_sequence(vec![key.clone().into(), value.clone().into()]);
        splice(&mut output, pair, depth);
    }
    tracing::trace!(?depth, length = output.len(), "flattened");
    output
}

// Works from an explicit stack so nesting depth never grows the call stack.
fn splice<T: Element>(output: &mut Vec<T>, element: T, depth: FlattenDepth) {
    let mut pending = vec![(element, depth)];
    while let Some((element, depth)) = pending.pop() {
        let Some(inner) = depth.descend() else {
            output.push(element);
            continue;
        };
        match element.into_sequence() {
            Ok(items) => pending.extend(items.into_iter().rev().map(|item| (item, inner))),
            Err(element) => output.push(element),
        }
    }
}
