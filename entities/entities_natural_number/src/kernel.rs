//! NaturalNumber Kernel
//!
//! The capability set every representation provides. Secondary operations
//! (subtract, multiply, root, ...) are layered over this kernel elsewhere and
//! never look inside a concrete representation.

use std::fmt;

use entities_digits::DigitStore;

/// Which backing store currently holds a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Native `u64` word (`NaturalNumber1L` while the value fits)
    Compact,
    /// Digit store reached by overflowing a compact value
    Promoted,
    /// Digit store by construction (`NaturalNumber2`)
    Generic,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::Compact => "compact",
            Representation::Promoted => "promoted",
            Representation::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Housekeeping shared by every component type
pub trait Standard {
    /// Reset to the initial value
    fn clear(&mut self);

    /// A fresh instance of the same concrete type, holding the initial value
    fn new_instance(&self) -> Self
    where
        Self: Sized;

    /// Take the value of `source`, leaving `source` at its initial value
    fn transfer_from(&mut self, source: &mut Self)
    where
        Self: Sized;
}

/// A non-negative integer of unbounded magnitude
///
/// The trait is object safe: operations taking another natural number accept
/// `&dyn NaturalNumber` / `&mut dyn NaturalNumber`, so any representation can
/// be combined with any other.
pub trait NaturalNumber: Standard + fmt::Debug {
    /// Shift in a new least-significant digit: `self = self * RADIX + k`
    ///
    /// # Panics
    ///
    /// Panics if `k >= RADIX`.
    fn multiply_by_radix(&mut self, k: u32);

    /// Shift out the least-significant digit: `self = self / RADIX`, returning `self % RADIX`
    fn divide_by_radix(&mut self) -> u32;

    /// Check if the value is zero
    fn is_zero(&self) -> bool;

    /// The value as a native word, if it fits
    fn to_word(&self) -> Option<u64>;

    /// The canonical digit sequence of the value
    fn to_digits(&self) -> DigitStore;

    /// Assign a native word value
    fn set_from_u64(&mut self, value: u64);

    /// Assign the value held by `digits`
    fn set_digits(&mut self, digits: DigitStore);

    /// Backing store currently in use
    fn representation(&self) -> Representation;

    /// Add `other` into `self`
    ///
    /// Postconditions: `self = #self + #other` and `other = #self`, i.e. the
    /// argument is left holding the receiver's value from before the call.
    fn add(&mut self, other: &mut dyn NaturalNumber);
}
