//! Error types for the extension operations.
//!
//! Every error is a caller-input problem raised synchronously by the
//! operation that detected it. Nothing here is retried, swallowed or logged.

/// Errors raised by the extension operations.
///
/// `K` is the key type of the container involved, carried by
/// [`HashError::KeyNotFound`]. Construction errors never carry a key, so the
/// parameter is simply the element type there.
///
/// # Examples
///
/// ```rust
/// use ordmap_ext::HashError;
///
/// let error: HashError<&str> = HashError::InvalidElementShape(3);
/// assert_eq!(format!("{error}"), "invalid number of elements (3 for 1..2)");
///
/// let error = HashError::KeyNotFound("z");
/// assert_eq!(format!("{error}"), "key not found: \"z\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError<K> {
    /// Flat key/value construction was given an odd number of elements.
    #[error("odd number of arguments for hash ({0})")]
    OddArgumentCount(usize),

    /// Pair-sequence construction met an element whose length is not 1 or 2.
    #[error("invalid number of elements ({0} for 1..2)")]
    InvalidElementShape(usize),

    /// Pair-sequence construction met an element that is not a sequence.
    #[error("wrong element type {0} (expected sequence)")]
    InvalidElementType(&'static str),

    /// A merge source could not be read as an ordered mapping.
    #[error("can't convert argument into an ordered mapping")]
    NotMappingConvertible,

    /// `fetch` missed and neither a default nor a callback was supplied.
    #[error("key not found: {0:?}")]
    KeyNotFound(K),
}

impl<K> HashError<K> {
    /// Returns the missing key when this is a [`HashError::KeyNotFound`].
    pub const fn missing_key(&self) -> Option<&K> {
        match self {
            Self::KeyNotFound(key) => Some(key),
            _ => None,
        }
    }
}

static_assertions::assert_impl_all!(HashError<crate::Value>: std::error::Error, Send, Sync);
static_assertions::assert_impl_all!(HashError<String>: std::error::Error, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HashError::OddArgumentCount(3), "odd number of arguments for hash (3)")]
    #[case(HashError::InvalidElementShape(0), "invalid number of elements (0 for 1..2)")]
    #[case(
        HashError::InvalidElementType("int"),
        "wrong element type int (expected sequence)"
    )]
    #[case(
        HashError::NotMappingConvertible,
        "can't convert argument into an ordered mapping"
    )]
    #[case(HashError::KeyNotFound(7), "key not found: 7")]
    fn test_display(#[case] error: HashError<i32>, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_missing_key() {
        assert_eq!(HashError::KeyNotFound("z").missing_key(), Some(&"z"));
        assert_eq!(HashError::<&str>::NotMappingConvertible.missing_key(), None);
    }
}
