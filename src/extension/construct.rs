//! Flexible construction.
//!
//! An ordered hash can be built from three argument forms:
//!
//! | Form                 | Example                         |
//! |----------------------|---------------------------------|
//! | [`HashArgs::Mapping`] | `{"a" => 100}`                  |
//! | [`HashArgs::Pairs`]   | `[["a", 100], ["b"]]`           |
//! | [`HashArgs::Flat`]    | `"a", 100, "b", 200`            |
//!
//! Callers that know the form build the variant directly. Callers holding
//! a raw argument list use [`HashArgs::resolve`], which picks the form with
//! the following precedence:
//!
//! 1. a single argument convertible to a mapping,
//! 2. a single argument convertible to a sequence,
//! 3. anything else, read as flat alternating keys and values.

use std::hash::Hash;

use crate::container::{IntoMapping, OrderedHash};
use crate::element::Element;
use crate::error::HashError;

/// The argument forms accepted by [`from_args`].
#[derive(Debug, Clone)]
pub enum HashArgs<T> {
    /// A mapping whose pairs are copied in order.
    Mapping(OrderedHash<T, T>),
    /// A sequence of `[key, value]` or `[key]` elements.
    Pairs(Vec<T>),
    /// Alternating keys and values.
    Flat(Vec<T>),
}

impl<T> HashArgs<T>
where
    T: Element + IntoMapping<Key = T, Value = T>,
{
    /// Picks the argument form for a raw argument list.
    ///
    /// A single argument that is both a mapping and a sequence resolves as a
    /// mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_ext::Value;
    /// use ordmap_ext::extension::HashArgs;
    ///
    /// let pairs = Value::from(vec![Value::from(vec![Value::from("a"), Value::from(1)])]);
    /// assert!(matches!(HashArgs::resolve(vec![pairs]), HashArgs::Pairs(_)));
    ///
    /// let flat = vec![Value::from("a"), Value::from(1)];
    /// assert!(matches!(HashArgs::resolve(flat), HashArgs::Flat(_)));
    /// ```
    pub fn resolve(mut arguments: Vec<T>) -> Self {
        if arguments.len() == 1
            && let Some(argument) = arguments.pop()
        {
            let argument = match argument.into_mapping() {
                Ok(mapping) => return Self::Mapping(mapping),
                Err(argument) => argument,
            };
            match argument.into_sequence() {
                Ok(elements) => return Self::Pairs(elements),
                Err(argument) => arguments.push(argument),
            }
        }
        Self::Flat(arguments)
    }
}

impl<T> HashArgs<T> {
    /// Name of the form, as reported in trace events.
    pub const fn form(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Pairs(_) => "pairs",
            Self::Flat(_) => "flat",
        }
    }
}

/// Builds a new ordered hash from one of the [`HashArgs`] forms.
///
/// - `Mapping`: every pair is copied in the mapping's order.
/// - `Pairs`: each element must be a sequence of length 2 (`key, value`) or
///   1 (`key`, with [`Element::absent`] as value). A repeated key overwrites
///   the earlier value but keeps the position of its first occurrence.
/// - `Flat`: an even number of items read as `key, value, key, value, ...`.
///
/// # Errors
///
/// - [`HashError::InvalidElementType`] if a `Pairs` element is not a sequence.
/// - [`HashError::InvalidElementShape`] if a `Pairs` element has a length
///   other than 1 or 2.
/// - [`HashError::OddArgumentCount`] if `Flat` has an odd number of items.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::{HashError, Value};
/// use ordmap_ext::extension::{HashArgs, from_args};
///
/// let hash = from_args(HashArgs::Flat(vec![Value::from("a"), Value::from(100)])).unwrap();
/// assert_eq!(hash.get(&Value::from("a")), Some(&Value::from(100)));
///
/// let error = from_args(HashArgs::Flat(vec![Value::from("a")])).unwrap_err();
/// assert_eq!(error, HashError::OddArgumentCount(1));
/// ```
pub fn from_args<T>(arguments: HashArgs<T>) -> Result<OrderedHash<T, T>, HashError<T>>
where
    T: Element + Hash + Eq,
{
    tracing::trace!(form = arguments.form(), "building ordered hash");
    match arguments {
        HashArgs::Mapping(mapping) => Ok(copy_mapping(mapping)),
        HashArgs::Pairs(elements) => from_pair_elements(elements),
        HashArgs::Flat(items) => from_flat_items(items),
    }
}

/// Resolves a raw argument list with [`HashArgs::resolve`] and builds from it.
///
/// # Errors
///
/// Same as [`from_args`].
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::Value;
/// use ordmap_ext::extension::from_values;
///
/// let pair = Value::from(vec![Value::from("a"), Value::from(100)]);
/// let from_pairs = from_values(vec![Value::from(vec![pair])]).unwrap();
/// let from_flat = from_values(vec![Value::from("a"), Value::from(100)]).unwrap();
/// assert_eq!(from_pairs, from_flat);
/// ```
pub fn from_values<T>(arguments: Vec<T>) -> Result<OrderedHash<T, T>, HashError<T>>
where
    T: Element + IntoMapping<Key = T, Value = T> + Hash + Eq,
{
    from_args(HashArgs::resolve(arguments))
}

fn copy_mapping<T: Hash + Eq>(mapping: OrderedHash<T, T>) -> OrderedHash<T, T> {
    let mut hash = OrderedHash::with_capacity(mapping.len());
    hash.extend(mapping);
    hash
}

fn from_pair_elements<T>(elements: Vec<T>) -> Result<OrderedHash<T, T>, HashError<T>>
where
    T: Element + Hash + Eq,
{
    let mut hash = OrderedHash::with_capacity(elements.len());
    for element in elements {
        let items = element
            .into_sequence()
            .map_err(|element| HashError::InvalidElementType(element.type_name()))?;
        let length = items.len();
        let mut items = items.into_iter();
        let (key, value) = match (length, items.next(), items.next()) {
            (2, Some(key), Some(value)) => (key, value),
            (1, Some(key), None) => (key, T::absent()),
            _ => return Err(HashError::InvalidElementShape(length)),
        };
        hash.insert(key, value);
    }
    Ok(hash)
}

fn from_flat_items<T>(items: Vec<T>) -> Result<OrderedHash<T, T>, HashError<T>>
where
    T: Hash + Eq,
{
    let count = items.len();
    if count % 2 != 0 {
        return Err(HashError::OddArgumentCount(count));
    }
    let mut hash = OrderedHash::with_capacity(count / 2);
    let mut items = items.into_iter();
    while let (Some(key), Some(value)) = (items.next(), items.next()) {
        hash.insert(key, value);
    }
    Ok(hash)
}
