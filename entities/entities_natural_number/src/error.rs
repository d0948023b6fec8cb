//! NaturalNumber errors
//!
//! Overflow is not represented here: it is absorbed by promotion.

use entities_digits::DigitError;
use thiserror::Error;

/// Errors raised by NaturalNumber construction and arithmetic
///
/// Every operation returning one of these leaves its receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NaturalNumberError {
    /// Construction from a negative magnitude
    #[error("NaturalNumber must not be negative, got {0}")]
    InvalidValue(i64),
    /// Subtraction or decrement below zero
    #[error("result would be negative")]
    Underflow,
    /// Division by a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// Root degree below 2
    #[error("Violation of: r >= 2 (r = {0})")]
    InvalidRootDegree(u32),
    /// Value does not fit the requested native type
    #[error("value {0} does not fit in u64")]
    DoesNotFit(String),
    /// Malformed digits or numeral text
    #[error(transparent)]
    Digits(#[from] DigitError),
}
