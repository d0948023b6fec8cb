//! NaturalNumber Facades
//!
//! Runtime selection of a representation, and logging setup.

use entities_natural_number::{NaturalNumber, NaturalNumber1L, NaturalNumber2, NaturalNumberError};
use infrastructure_debugging::{DebugError, DebugUtils};

/// Concrete representation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`NaturalNumber1L`]: native word, promoting on overflow
    Compact,
    /// [`NaturalNumber2`]: always a digit store
    Generic,
}

/// Construct a natural number of the requested representation
pub fn new_natural(kind: Kind, value: u64) -> Box<dyn NaturalNumber> {
    match kind {
        Kind::Compact => Box::new(NaturalNumber1L::from_u64(value)),
        Kind::Generic => Box::new(NaturalNumber2::from_u64(value)),
    }
}

/// Construct a natural number of the requested representation from a decimal numeral
pub fn parse_natural(kind: Kind, text: &str) -> Result<Box<dyn NaturalNumber>, NaturalNumberError> {
    Ok(match kind {
        Kind::Compact => Box::new(text.parse::<NaturalNumber1L>()?),
        Kind::Generic => Box::new(text.parse::<NaturalNumber2>()?),
    })
}

/// Install logging as configured by the `NATURAL_NUMBER_*` environment variables
pub fn init_logging() -> Result<(), DebugError> {
    DebugUtils::init_from_env()
}
