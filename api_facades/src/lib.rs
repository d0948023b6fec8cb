//! API Facades Layer
//!
//! Single entry point for the NaturalNumber component. Re-exports the
//! kernel, both representations, the secondary operations and the logging
//! setup from the inner layers, plus a small factory for choosing a
//! representation at runtime.
//!
//! ```rust
//! use natural_number::prelude::*;
//!
//! let mut x = NaturalNumber1L::from_u64(8);
//! let mut y = NaturalNumber2::from_u64(3);
//! x.add(&mut y);
//! assert_eq!(x, NaturalNumber2::from_u64(11));
//! assert_eq!(y, NaturalNumber1L::from_u64(8));
//! assert_eq!(RADIX, 10);
//! ```

pub mod natural_facades;

pub use entities_digits::{DigitError, DigitStore, RADIX};
pub use entities_natural_number::{
    natural_cmp, natural_eq, NaturalNumber, NaturalNumber1L, NaturalNumber2, NaturalNumberError,
    Representation, Standard,
};
pub use infrastructure_debugging::{DebugConfig, DebugError, DebugUtils};
pub use natural_facades::*;
pub use usecases_natural_arithmetic::{can_set_from_str, NaturalNumberOps};

/// Everything needed to construct and operate on natural numbers
pub mod prelude {
    pub use crate::natural_facades::{new_natural, parse_natural, Kind};
    pub use entities_digits::RADIX;
    pub use entities_natural_number::{
        NaturalNumber, NaturalNumber1L, NaturalNumber2, NaturalNumberError, Representation,
        Standard,
    };
    pub use usecases_natural_arithmetic::NaturalNumberOps;
}
