//! Key/value pair ordering.
//!
//! [`SortKeyValueComparator`] orders `(key, value)` pairs by key, and optionally
//! breaks key ties by value. Each side has its own [`SortOptions`], resolved into a
//! [`Comparison`] once when the comparator is built.
//!
//! Sorting is stable: pairs the comparator considers equal keep their original
//! relative order.
//!
//! ## Examples
//!
//! ```rust
//! use parser_power::{SortKeyValueComparator, SortOptions};
//!
//! let mut pairs = vec![("10", "a"), ("9", "b")];
//!
//! SortKeyValueComparator::new(SortOptions::NUMERIC, None).sort(&mut pairs);
//! assert_eq!(pairs, vec![("9", "b"), ("10", "a")]);
//!
//! SortKeyValueComparator::new(SortOptions::new(), None).sort(&mut pairs);
//! assert_eq!(pairs, vec![("10", "a"), ("9", "b")]);
//! ```

use crate::compare::Comparison;
use crate::SortOptions;
use std::cmp::Ordering;

/// Compares key/value pairs by key, then optionally by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKeyValueComparator {
    key: Comparison,
    value: Option<Comparison>,
}

impl SortKeyValueComparator {
    /// Builds a comparator from key options and, if values should break key ties,
    /// value options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parser_power::{SortKeyValueComparator, SortOptions};
    ///
    /// let mut pairs = vec![("k", "B"), ("k", "a")];
    /// let comparator = SortKeyValueComparator::new(
    ///     SortOptions::new(),
    ///     Some(SortOptions::CASE_SENSITIVE),
    /// );
    /// comparator.sort(&mut pairs);
    /// assert_eq!(pairs, vec![("k", "B"), ("k", "a")]);
    /// ```
    #[must_use]
    pub fn new(key_options: SortOptions, value_options: Option<SortOptions>) -> Self {
        SortKeyValueComparator {
            key: key_options.comparison(),
            value: value_options.map(SortOptions::comparison),
        }
    }

    /// Comparator that orders by key alone.
    #[must_use]
    pub fn by_key(key_options: SortOptions) -> Self {
        Self::new(key_options, None)
    }

    #[must_use]
    pub fn key_comparison(&self) -> Comparison {
        self.key
    }

    #[must_use]
    pub fn value_comparison(&self) -> Option<Comparison> {
        self.value
    }

    /// Compares two pairs.
    ///
    /// The value comparison runs only when the keys are equal and a value
    /// comparison is configured; otherwise equal keys compare equal.
    #[must_use]
    pub fn compare<K, V>(&self, pair1: &(K, V), pair2: &(K, V)) -> Ordering
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match self.key.compare(pair1.0.as_ref(), pair2.0.as_ref()) {
            Ordering::Equal => match &self.value {
                Some(value) => value.compare(pair1.1.as_ref(), pair2.1.as_ref()),
                None => Ordering::Equal,
            },
            ordering => ordering,
        }
    }

    /// Sorts `pairs` in place with a stable sort.
    pub fn sort<K, V>(&self, pairs: &mut [(K, V)])
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs.sort_by(|a, b| self.compare(a, b));
    }
}

/// Sorts `pairs` by key, breaking key ties by value when `value_options` is set.
///
/// Shorthand for building a [`SortKeyValueComparator`] and sorting once.
pub fn sort_pairs<K, V>(
    pairs: &mut [(K, V)],
    key_options: SortOptions,
    value_options: Option<SortOptions>,
) where
    K: AsRef<str>,
    V: AsRef<str>,
{
    SortKeyValueComparator::new(key_options, value_options).sort(pairs);
}
