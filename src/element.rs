//! Dynamic elements for construction and flattening.
//!
//! Flexible construction and flattening both need to ask "is this item a
//! sequence?" of values whose shape is only known at runtime. [`Element`]
//! answers that question through a closed set of conversions instead of
//! runtime capability probing.
//!
//! The bundled [`Value`](crate::Value) implements this trait; any other
//! dynamic type can do the same and reuse
//! [`from_args`](crate::extension::from_args) and
//! [`flatten`](crate::extension::flatten).

/// An item that may or may not be a sequence of items of the same type.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::{Element, Value};
///
/// let pair = Value::from_sequence(vec![Value::from("a"), Value::from(1)]);
/// assert_eq!(pair.clone().into_sequence().map(|items| items.len()), Ok(2));
///
/// let scalar = Value::from(1);
/// assert_eq!(scalar.clone().into_sequence(), Err(scalar));
/// ```
pub trait Element: Sized {
    /// Converts the element into its items if it is a sequence.
    ///
    /// # Errors
    ///
    /// Returns the element unchanged if it is not a sequence.
    fn into_sequence(self) -> Result<Vec<Self>, Self>;

    /// Builds a sequence element from its items.
    fn from_sequence(items: Vec<Self>) -> Self;

    /// The distinguished "no value" element.
    ///
    /// Used where construction must place a value but none was given.
    fn absent() -> Self;

    /// A short name of the element's runtime type, for error messages.
    fn type_name(&self) -> &'static str;
}
