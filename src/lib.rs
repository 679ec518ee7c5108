//! # ordmap-ext
//!
//! Convenience operations for insertion-ordered maps.
//!
//! ## Overview
//!
//! The storage itself is [`indexmap::IndexMap`]; this crate adds a standard
//! set of operations on top of its primitive interface ([`OrderedMap`]):
//!
//! - **Construction**: build from a mapping, a sequence of pairs, or flat
//!   alternating keys and values ([`extension::from_args`])
//! - **Merge**: in place, with an optional collision resolver
//! - **Fetch**: lookup with a callback or default on a miss
//! - **Filtering**: `delete_if` / `keep_if`, immediate or deferred
//! - **Projection**: `invert`, `key_of`, `flatten`, `each_pair`
//! - **Coercion**: [`ToOwnMapping`] to the canonical container type
//!
//! ## Feature Flags
//!
//! - `serde`: serde support for [`Value`] and [`OrderedHash`]
//! - `fxhash`: the [`FxOrderedHash`] alias
//! - `ahash`: the [`AOrderedHash`] alias
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordmap_ext::prelude::*;
//!
//! let mut hash: OrderedHash<&str, i32> = [("a", 100), ("b", 200), ("c", 300)].into_iter().collect();
//!
//! hash.delete_if(|key, _| *key >= "b");
//! assert_eq!(hash.fetch_or(&"z", 0), 0);
//! assert_eq!(hash.invert().get(&100), Some(&"a"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container traits, the extension trait and the dynamic
/// [`Value`].
///
/// # Usage
///
/// ```rust
/// use ordmap_ext::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::element::Element;
    pub use crate::error::HashError;
    pub use crate::extension::{FilterKind, FlattenDepth, HashArgs, HashExt};
    pub use crate::value::{Value, ValueHash};
}

pub mod container;
mod element;
mod error;
pub mod extension;
mod value;

#[cfg(feature = "ahash")]
pub use container::AOrderedHash;
#[cfg(feature = "fxhash")]
pub use container::FxOrderedHash;
pub use container::{IntoMapping, OrderedHash, OrderedMap, ToOwnMapping};
pub use element::Element;
pub use error::HashError;
pub use extension::HashExt;
pub use value::{Value, ValueHash};
