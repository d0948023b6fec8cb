//! Entities Layer: Digits
//!
//! Provides the digit store shared by every natural number representation:
//! - Canonical base-[`RADIX`] digit sequences
//! - Grade-school addition and subtraction
//! - Conversion to and from native words and `malachite::Natural`

pub mod digits;
pub mod error;

pub use digits::{DigitStore, RADIX};
pub use error::DigitError;
