//! Entities Layer: NaturalNumber
//!
//! Provides the NaturalNumber abstract type and its interchangeable representations.
//!
//! ## Overview
//!
//! A natural number is a non-negative integer of unbounded magnitude. The
//! abstract type is the [`NaturalNumber`] trait; two concrete types implement it:
//!
//! - **[`NaturalNumber1L`]**: compact representation. Holds a native `u64`
//!   while the value fits and promotes to a [`DigitStore`] on overflow.
//! - **[`NaturalNumber2`]**: generic representation. Always backed by a
//!   [`DigitStore`].
//!
//! Equality, ordering and hashing are defined on values, never on the
//! representation, so a `NaturalNumber1L` and a `NaturalNumber2` holding the
//! same magnitude compare equal (see [`equality`]).
//!
//! ## See Also
//!
//! - [`entities_digits`]: the digit store and [`RADIX`]

pub mod compact;
pub mod equality;
pub mod error;
pub mod generic;
pub mod kernel;

pub use compact::NaturalNumber1L;
pub use entities_digits::{DigitStore, RADIX};
pub use equality::{natural_cmp, natural_eq};
pub use error::NaturalNumberError;
pub use generic::NaturalNumber2;
pub use kernel::{NaturalNumber, Representation, Standard};
