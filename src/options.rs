//! Configuration options for key/value sorting.
//!
//! [`SortOptions`] is a three-flag bit field selecting how one side of a key/value
//! pair (the key, or the tie-breaking value) is ordered:
//!
//! | Flag | Bit | Effect |
//! |------|-----|--------|
//! | [`SortOptions::NUMERIC`] | 4 | compare as numbers instead of text |
//! | [`SortOptions::CASE_SENSITIVE`] | 2 | text comparison respects case (ignored when numeric) |
//! | [`SortOptions::DESCENDING`] | 1 | reverse the natural order |
//!
//! The empty set (the default) is case-insensitive ascending text order.
//!
//! ## Examples
//!
//! ```rust
//! use parser_power::SortOptions;
//!
//! // Builder style
//! let options = SortOptions::new().with_numeric(true).with_descending(true);
//! assert_eq!(options.bits(), 5);
//!
//! // Keyword style, as written in wiki function arguments
//! let options: SortOptions = "numeric desc".parse().unwrap();
//! assert_eq!(options, SortOptions::NUMERIC | SortOptions::DESCENDING);
//! ```

use crate::compare::{Comparison, Order, Strategy};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Sort flags for one side of a key/value pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortOptions(u8);

impl SortOptions {
    pub const NUMERIC: SortOptions = SortOptions(4);
    pub const CASE_SENSITIVE: SortOptions = SortOptions(2);
    pub const DESCENDING: SortOptions = SortOptions(1);

    const ALL_BITS: u8 = 7;

    /// Creates the default options: case-insensitive ascending text order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parser_power::SortOptions;
    ///
    /// let options = SortOptions::new();
    /// assert_eq!(options.bits(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        SortOptions(0)
    }

    /// Builds options from raw bits, rejecting bits outside the three flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSortBits`] if any bit above the low three is set.
    pub fn from_bits(bits: u8) -> Result<Self> {
        if bits & !Self::ALL_BITS != 0 {
            return Err(Error::InvalidSortBits(bits));
        }
        Ok(SortOptions(bits))
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: SortOptions) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    fn with(self, flag: SortOptions, enabled: bool) -> Self {
        if enabled {
            SortOptions(self.0 | flag.0)
        } else {
            SortOptions(self.0 & !flag.0)
        }
    }

    /// Compare as numbers instead of text.
    #[must_use]
    pub fn with_numeric(self, enabled: bool) -> Self {
        self.with(Self::NUMERIC, enabled)
    }

    /// Respect case in text comparison.
    #[must_use]
    pub fn with_case_sensitive(self, enabled: bool) -> Self {
        self.with(Self::CASE_SENSITIVE, enabled)
    }

    /// Reverse the natural order.
    #[must_use]
    pub fn with_descending(self, enabled: bool) -> Self {
        self.with(Self::DESCENDING, enabled)
    }

    /// The comparison strategy these flags select.
    ///
    /// Numeric wins over case sensitivity, which only applies to text.
    #[must_use]
    pub fn strategy(self) -> Strategy {
        if self.contains(Self::NUMERIC) {
            Strategy::Numeric
        } else if self.contains(Self::CASE_SENSITIVE) {
            Strategy::CaseSensitive
        } else {
            Strategy::CaseInsensitive
        }
    }

    #[must_use]
    pub fn order(self) -> Order {
        if self.contains(Self::DESCENDING) {
            Order::Descending
        } else {
            Order::Ascending
        }
    }

    /// Resolves the flags into a ready-to-use [`Comparison`].
    #[must_use]
    pub fn comparison(self) -> Comparison {
        Comparison::new(self.strategy(), self.order())
    }

    /// Parses keyword text, ignoring keywords it does not recognise.
    ///
    /// Keywords are separated by whitespace and applied left to right, so a later
    /// keyword overrides an earlier one (`"desc asc"` is ascending).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parser_power::SortOptions;
    ///
    /// let options = SortOptions::parse_lenient("CS upward desc");
    /// assert_eq!(options, SortOptions::CASE_SENSITIVE | SortOptions::DESCENDING);
    /// ```
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        text.split_whitespace()
            .fold(SortOptions::new(), |options, keyword| {
                options.apply_keyword(keyword).unwrap_or(options)
            })
    }

    fn apply_keyword(self, keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "numeric" => Some(self.with_numeric(true)),
            "alpha" => Some(self.with_numeric(false)),
            "cs" => Some(self.with_case_sensitive(true)),
            "ncs" => Some(self.with_case_sensitive(false)),
            "desc" => Some(self.with_descending(true)),
            "asc" => Some(self.with_descending(false)),
            _ => None,
        }
    }
}

impl FromStr for SortOptions {
    type Err = Error;

    /// Parses keyword text strictly; see [`SortOptions::parse_lenient`] for the
    /// keyword rules.
    fn from_str(text: &str) -> Result<Self> {
        text.split_whitespace()
            .try_fold(SortOptions::new(), |options, keyword| {
                options
                    .apply_keyword(keyword)
                    .ok_or_else(|| Error::unknown_sort_option(keyword))
            })
    }
}

impl BitOr for SortOptions {
    type Output = SortOptions;

    fn bitor(self, rhs: SortOptions) -> SortOptions {
        SortOptions(self.0 | rhs.0)
    }
}

impl fmt::Display for SortOptions {
    /// Writes the canonical keyword form, e.g. `numeric desc` or `alpha ncs asc`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Self::NUMERIC) {
            f.write_str("numeric")?;
        } else if self.contains(Self::CASE_SENSITIVE) {
            f.write_str("alpha cs")?;
        } else {
            f.write_str("alpha ncs")?;
        }
        match self.order() {
            Order::Ascending => f.write_str(" asc"),
            Order::Descending => f.write_str(" desc"),
        }
    }
}

impl Serialize for SortOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for SortOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        SortOptions::from_bits(bits).map_err(serde::de::Error::custom)
    }
}
