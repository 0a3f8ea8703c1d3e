//! Primitive text comparisons used by the key/value sorter.
//!
//! Three base strategies exist, each of which can run in either direction:
//!
//! - [`Strategy::CaseSensitive`]: byte order, so `"B" < "a"`
//! - [`Strategy::CaseInsensitive`]: byte order after ASCII lowercasing
//! - [`Strategy::Numeric`]: operands compared as numbers
//!
//! A [`Comparison`] pairs a strategy with an [`Order`]. Descending order is the
//! exact reversal of ascending order, so ties stay ties in both directions.
//!
//! ## Numeric operands
//!
//! Operands are trimmed first. Text of the form `[+-]digits` is read as an exact
//! integer of any size; any other text that parses as a finite `f64` is a float.
//! Integers compare exactly, also against floats; two floats compare as `f64`.
//! Everything else (including `inf` and `NaN`) is not a number: it sorts after
//! every number, and non-numbers compare case-sensitively among themselves.
//!
//! ```rust
//! use parser_power::compare::{Comparison, Order, Strategy};
//! use std::cmp::Ordering;
//!
//! let numeric = Comparison::new(Strategy::Numeric, Order::Ascending);
//! assert_eq!(numeric.compare("9", "10"), Ordering::Less);
//! assert_eq!(numeric.compare("2.5", "10"), Ordering::Less);
//! assert_eq!(numeric.compare("n/a", "10"), Ordering::Greater);
//!
//! let text = Comparison::new(Strategy::CaseInsensitive, Order::Descending);
//! assert_eq!(text.compare("apple", "Banana"), Ordering::Greater);
//! ```

use num_bigint::BigInt;
use std::cmp::Ordering;
use std::str::FromStr;

/// How two operands are compared, before direction is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Numeric,
    CaseSensitive,
    CaseInsensitive,
}

impl Strategy {
    /// The ascending comparison function for this strategy.
    #[must_use]
    pub fn function(self) -> fn(&str, &str) -> Ordering {
        match self {
            Strategy::Numeric => numeric_cmp,
            Strategy::CaseSensitive => str_cmp,
            Strategy::CaseInsensitive => str_case_cmp,
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    #[inline]
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Ascending => ordering,
            Order::Descending => ordering.reverse(),
        }
    }
}

/// A strategy resolved to its comparison function, with a direction.
///
/// The function is looked up once in [`Comparison::new`], so comparing does not
/// re-inspect the strategy.
#[derive(Clone, Copy)]
pub struct Comparison {
    strategy: Strategy,
    order: Order,
    function: fn(&str, &str) -> Ordering,
}

impl Comparison {
    #[must_use]
    pub fn new(strategy: Strategy, order: Order) -> Self {
        Comparison {
            strategy,
            order,
            function: strategy.function(),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Compares `a` with `b` according to the strategy and direction.
    #[inline]
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.order.apply((self.function)(a, b))
    }
}

impl std::fmt::Debug for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparison")
            .field("strategy", &self.strategy)
            .field("order", &self.order)
            .finish()
    }
}

impl PartialEq for Comparison {
    fn eq(&self, other: &Self) -> bool {
        self.strategy == other.strategy && self.order == other.order
    }
}

impl Eq for Comparison {}

/// Case-sensitive comparison in byte order.
#[must_use]
pub fn str_cmp(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// Case-insensitive comparison: bytes are compared after ASCII lowercasing.
///
/// Non-ASCII characters are compared as they are.
#[must_use]
pub fn str_case_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Numeric comparison with non-numbers sorted last.
#[must_use]
pub fn numeric_cmp(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.cmp_number(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => str_cmp(a, b),
    }
}

/// A parsed numeric operand.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// Exact integer of any size.
    Integer(BigInt),
    /// Finite float.
    Float(f64),
}

impl Number {
    fn cmp_number(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(b),
            (Number::Integer(a), Number::Float(f)) => cmp_integer_float(a, *f),
            (Number::Float(f), Number::Integer(b)) => cmp_integer_float(b, *f).reverse(),
            // Both finite, so partial_cmp always succeeds
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        }
    }
}

/// Exact comparison of an integer with a finite float.
fn cmp_integer_float(integer: &BigInt, float: f64) -> Ordering {
    let floor = float.floor();
    // `{:.0}` prints every digit of an integral f64
    let Ok(floor_int) = BigInt::from_str(&format!("{floor:.0}")) else {
        return Ordering::Equal;
    };
    match integer.cmp(&floor_int) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `text` as a numeric operand, or `None` if it is not a number.
///
/// # Examples
///
/// ```rust
/// use parser_power::compare::{parse_number, Number};
///
/// assert!(matches!(parse_number(" 42 "), Some(Number::Integer(..))));
/// assert!(matches!(parse_number("-1.5e3"), Some(Number::Float(f)) if f == -1500.0));
/// assert_eq!(parse_number("inf"), None);
/// assert_eq!(parse_number("12abc"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if is_integer_literal(text) {
        return BigInt::from_str(text).ok().map(Number::Integer);
    }
    match f64::from_str(text) {
        Ok(f) if f.is_finite() => Some(Number::Float(f)),
        _ => None,
    }
}
