//! Secondary NaturalNumber Operations
//!
//! Every operation here is expressed through the [`NaturalNumber`] kernel:
//! values are read with `to_word`/`to_digits` and written back with
//! `set_digits`, so the receiver's representation decides how the result is
//! stored. Fallible operations check their preconditions before writing and
//! leave the receiver untouched on error.
//!
//! Addition and subtraction stay in the digit store. Multiplication,
//! division, powers and roots go through `malachite::Natural`.

use entities_digits::DigitStore;
use entities_natural_number::{NaturalNumber, NaturalNumber1L, NaturalNumberError};
use malachite::base::num::arithmetic::traits::{FloorRoot, Pow};
use malachite::Natural;
use tracing::trace;

/// Check whether `text` can be assigned with [`NaturalNumberOps::set_from_str`]
///
/// Accepts exactly the canonical decimal numerals `0|[1-9][0-9]*`.
pub fn can_set_from_str(text: &str) -> bool {
    DigitStore::is_canonical_numeral(text)
}

fn natural_of<N: NaturalNumber + ?Sized>(n: &N) -> Natural {
    n.to_digits().to_natural()
}

/// Secondary operations available on every natural number
pub trait NaturalNumberOps: NaturalNumber {
    /// Subtract `other` from `self`; `other` is not modified
    ///
    /// Returns `NaturalNumberError::Underflow` if `other > self`.
    fn subtract(&mut self, other: &dyn NaturalNumber) -> Result<(), NaturalNumberError> {
        let difference = self
            .to_digits()
            .minus(&other.to_digits())
            .ok_or(NaturalNumberError::Underflow)?;
        trace!(result = %difference, "subtract");
        self.set_digits(difference);
        Ok(())
    }

    /// Multiply `self` by `other`
    fn multiply(&mut self, other: &dyn NaturalNumber) {
        let product = natural_of(&*self) * natural_of(other);
        self.set_digits(DigitStore::from_natural(&product));
    }

    /// Replace `self` by the quotient `self / other`, rounded down
    ///
    /// Returns `NaturalNumberError::DivisionByZero` if `other` is zero.
    fn divide(&mut self, other: &dyn NaturalNumber) -> Result<(), NaturalNumberError> {
        if other.is_zero() {
            return Err(NaturalNumberError::DivisionByZero);
        }
        let quotient = natural_of(&*self) / natural_of(other);
        trace!(result = %quotient, "divide");
        self.set_digits(DigitStore::from_natural(&quotient));
        Ok(())
    }

    /// Raise `self` to the power `p`
    fn power(&mut self, p: u32) {
        let result = natural_of(&*self).pow(p as u64);
        self.set_digits(DigitStore::from_natural(&result));
    }

    /// Replace `self` by its `r`-th root, rounded down
    ///
    /// Returns `NaturalNumberError::InvalidRootDegree` unless `r >= 2`.
    fn root(&mut self, r: u32) -> Result<(), NaturalNumberError> {
        if r < 2 {
            return Err(NaturalNumberError::InvalidRootDegree(r));
        }
        let result = natural_of(&*self).floor_root(r as u64);
        trace!(degree = r, result = %result, "root");
        self.set_digits(DigitStore::from_natural(&result));
        Ok(())
    }

    /// Add one to `self`
    fn increment(&mut self) {
        let mut one = NaturalNumber1L::from_u64(1);
        self.add(&mut one);
    }

    /// Subtract one from `self`
    ///
    /// Returns `NaturalNumberError::Underflow` if `self` is zero.
    fn decrement(&mut self) -> Result<(), NaturalNumberError> {
        self.subtract(&NaturalNumber1L::from_u64(1))
    }

    /// Assign the value of `source`; `source` is not modified
    fn copy_from(&mut self, source: &dyn NaturalNumber) {
        self.set_digits(source.to_digits());
    }

    /// Take the value of `source`, of any representation, and clear `source`
    fn transfer_from_any(&mut self, source: &mut dyn NaturalNumber) {
        self.set_digits(source.to_digits());
        source.clear();
    }

    /// Assign the value of a canonical decimal numeral
    ///
    /// Returns a parse error, leaving `self` unchanged, if
    /// [`can_set_from_str`] rejects `text`.
    fn set_from_str(&mut self, text: &str) -> Result<(), NaturalNumberError> {
        let digits: DigitStore = text.parse()?;
        self.set_digits(digits);
        Ok(())
    }

    /// Check whether the value fits a `u64`
    fn can_convert_to_int(&self) -> bool {
        self.to_word().is_some()
    }

    /// The value as a `u64`
    ///
    /// Returns `NaturalNumberError::DoesNotFit` for larger values.
    fn to_int(&self) -> Result<u64, NaturalNumberError> {
        self.to_word()
            .ok_or_else(|| NaturalNumberError::DoesNotFit(self.to_digits().to_string()))
    }
}

impl<T: NaturalNumber + ?Sized> NaturalNumberOps for T {}
