//! # parser_power
//!
//! Text utilities for wiki templating: delimiter escaping, token substitution,
//! conditional selection and key/value sorting.
//!
//! ## What is in the box?
//!
//! List-oriented wiki functions work on composite strings such as
//! `apple=3, pear=10, fig=7`. To be useful, list items must be able to contain the
//! characters that would otherwise split them, patterns must receive each item,
//! and items must sort in configurable ways. This crate provides those pieces:
//!
//! - **Escaping**: [`escape`] and [`unescape`] hide delimiter characters behind
//!   two-character sequences such as `\!` for `|` and `\=` for `=`
//! - **Token substitution**: [`apply_pattern`] injects a value at every
//!   occurrence of a token in a pattern
//! - **Sorting**: [`SortKeyValueComparator`] orders `(key, value)` pairs by key,
//!   optionally breaking ties by value, each side numeric or textual, case-sensitive
//!   or not, ascending or descending
//! - **Functions**: the wiki functions of [`functions`] (`trim`, `ueif`, `token`,
//!   `ueswitch`, `follow`, ...), built on the above and on host services from [`host`]
//!
//! Everything except [`functions`] is pure: no I/O, no shared state, no failure
//! modes beyond option parsing.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! parser_power = "0.1"
//! ```
//!
//! ### Escaping
//!
//! ```rust
//! use parser_power::{escape, unescape};
//!
//! let item = escape("a|b=c");
//! assert_eq!(item, "a\\!b\\=c");
//! assert_eq!(unescape(&item), "a|b=c");
//! ```
//!
//! ### Token substitution
//!
//! ```rust
//! use parser_power::apply_pattern;
//!
//! assert_eq!(apply_pattern("cat", "x", "I have a x."), "I have a cat.");
//! ```
//!
//! ### Sorting key/value pairs
//!
//! ```rust
//! use parser_power::{sort_pairs, SortOptions};
//!
//! let mut pairs = vec![("10", "a"), ("9", "b")];
//! sort_pairs(&mut pairs, SortOptions::NUMERIC, None);
//! assert_eq!(pairs, vec![("9", "b"), ("10", "a")]);
//!
//! // Options can also be written as keywords
//! let options: SortOptions = "alpha cs desc".parse().unwrap();
//! sort_pairs(&mut pairs, options, None);
//! assert_eq!(pairs, vec![("9", "b"), ("10", "a")]);
//! ```
//!
//! ## Numeric sorting
//!
//! Numeric comparison reads integers of any size exactly and other numbers as
//! `f64`. Text that is not a number sorts after all numbers. See [`compare`].
//!
//! ## Logging
//!
//! The [`functions`] module reports its decisions through the [`log`] facade at
//! `debug` and `trace` level. No logger is installed by this crate.

pub mod compare;
pub mod error;
pub mod escape;
pub mod functions;
pub mod host;
pub mod options;
pub mod pattern;
pub mod sort;

pub use compare::{Comparison, Order, Strategy};
pub use error::{Error, Result};
pub use escape::{escape, unescape};
pub use functions::Rendered;
pub use host::{ExpandFlags, Expander, RedirectResolver};
pub use options::SortOptions;
pub use pattern::{apply_pattern, apply_pattern_with_index};
pub use sort::{sort_pairs, SortKeyValueComparator};
