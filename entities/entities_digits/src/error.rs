//! Digit store errors

use thiserror::Error;

/// Errors raised while building a [`DigitStore`](crate::DigitStore)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    /// A natural number cannot be built from a negative value
    #[error("natural numbers cannot be negative, got {0}")]
    Negative(i64),
    /// A digit was not in `0..RADIX`
    #[error("digit {0} is out of range for radix 10")]
    DigitOutOfRange(u8),
    /// Text was not a canonical decimal numeral
    #[error("`{0}` is not a canonical decimal numeral")]
    InvalidNumeral(String),
}
