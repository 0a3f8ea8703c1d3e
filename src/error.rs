//! Error types for option parsing.
//!
//! The text transformations themselves (escaping, token substitution, comparison)
//! are total and never fail. Errors only arise where caller-supplied option text
//! or raw option bits are decoded into a [`SortOptions`](crate::SortOptions).
//!
//! ## Examples
//!
//! ```rust
//! use parser_power::{Error, SortOptions};
//!
//! let result: Result<SortOptions, Error> = "numeric sideways".parse();
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("sideways"));
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sort option keyword that is not one of `numeric`, `alpha`, `cs`, `ncs`, `desc`, `asc`
    #[error("Unknown sort option '{0}' (expected numeric, alpha, cs, ncs, desc or asc)")]
    UnknownSortOption(String),

    /// Raw option bits outside the three defined flags
    #[error("Invalid sort option bits {0:#05b}: only the low three bits are defined")]
    InvalidSortBits(u8),
}

impl Error {
    /// Creates an unknown-keyword error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parser_power::Error;
    ///
    /// let err = Error::unknown_sort_option("upward");
    /// assert!(err.to_string().contains("'upward'"));
    /// ```
    pub fn unknown_sort_option(keyword: &str) -> Self {
        Error::UnknownSortOption(keyword.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bits_message_shows_binary() {
        let err = Error::InvalidSortBits(9);
        assert_eq!(
            err.to_string(),
            "Invalid sort option bits 0b1001: only the low three bits are defined"
        );
    }

    #[test]
    fn test_unknown_option_names_keyword() {
        let err = Error::unknown_sort_option("upward");
        assert_eq!(err, Error::UnknownSortOption("upward".to_string()));
    }
}
