//! A dynamic value for heterogeneous keys and values.
//!
//! [`Value`] is the bundled [`Element`] implementation. It covers the cases
//! where the shape of an argument is only known at runtime: flexible
//! construction from mixed argument lists, and flattening maps whose values
//! may themselves be sequences.
//!
//! # Examples
//!
//! ```rust
//! use ordmap_ext::{Value, ValueHash};
//! use ordmap_ext::extension::from_values;
//!
//! let hash: ValueHash = from_values(vec![Value::from("a"), Value::from(100)]).unwrap();
//! assert_eq!(hash.get(&Value::from("a")), Some(&Value::from(100)));
//! assert_eq!(Value::from(hash).to_string(), "{\"a\" => 100}");
//! ```

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::container::{IntoMapping, OrderedHash};
use crate::element::Element;

/// An ordered hash whose keys and values are both [`Value`]s.
pub type ValueHash = OrderedHash<Value, Value>;

/// A dynamically shaped value.
///
/// `Nil` is the absent sentinel for value slots. It is a distinct variant,
/// never confused with a legitimate value such as `Int(0)` or `Str("")`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// No value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    Seq(Vec<Self>),
    /// An ordered mapping of values.
    Map(ValueHash),
}

impl Value {
    /// Returns `true` for [`Value::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the integer if this is a [`Value::Int`].
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(integer) => Some(*integer),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`Value::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the items if this is a [`Value::Seq`].
    #[inline]
    pub fn as_seq(&self) -> Option<&[Self]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }
}

// Map equality ignores order, so map entries are hashed one by one and
// combined with a commutative sum.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(boolean) => boolean.hash(state),
            Self::Int(integer) => integer.hash(state),
            Self::Str(string) => string.hash(state),
            Self::Seq(items) => items.hash(state),
            Self::Map(map) => {
                map.len().hash(state);
                map.iter()
                    .fold(0_u64, |sum, entry| {
                        let mut hasher = DefaultHasher::new();
                        entry.hash(&mut hasher);
                        sum.wrapping_add(hasher.finish())
                    })
                    .hash(state);
            }
        }
    }
}

impl Element for Value {
    fn into_sequence(self) -> Result<Vec<Self>, Self> {
        match self {
            Self::Seq(items) => Ok(items),
            other => Err(other),
        }
    }

    #[inline]
    fn from_sequence(items: Vec<Self>) -> Self {
        Self::Seq(items)
    }

    #[inline]
    fn absent() -> Self {
        Self::Nil
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "str",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
        }
    }
}

impl IntoMapping for Value {
    type Key = Self;
    type Value = Self;

    fn into_mapping(self) -> Result<ValueHash, Self> {
        match self {
            Self::Map(map) => Ok(map),
            other => Err(other),
        }
    }
}

impl IntoMapping for &Value {
    type Key = Value;
    type Value = Value;

    fn into_mapping(self) -> Result<ValueHash, Self> {
        match self {
            Value::Map(map) => Ok(map.clone()),
            other => Err(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(boolean) => write!(formatter, "{boolean}"),
            Self::Int(integer) => write!(formatter, "{integer}"),
            Self::Str(string) => write!(formatter, "{string:?}"),
            Self::Seq(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Map(map) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key} => {value}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Bool(boolean)
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Self::Int(integer)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Self::Int(i64::from(integer))
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::Str(string.to_owned())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::Str(string)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<ValueHash> for Value {
    fn from(map: ValueHash) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nil, Into::into)
    }
}

static_assertions::assert_impl_all!(Value: Hash, Eq, Clone, Send, Sync, Element);
