//! Generic Representation
//!
//! `NaturalNumber2` always keeps its value in a [`DigitStore`], whatever the
//! magnitude. It has no fast path and serves as the reference behaviour the
//! compact representation must agree with.

use std::mem;
use std::str::FromStr;

use entities_digits::{DigitStore, RADIX};

use crate::error::NaturalNumberError;
use crate::kernel::{NaturalNumber, Representation, Standard};

/// Natural number always backed by a digit store
#[derive(Clone, Debug, Default)]
pub struct NaturalNumber2 {
    digits: DigitStore,
}

impl NaturalNumber2 {
    /// Numeric base shared with every other representation
    pub const RADIX: u32 = RADIX;

    /// Create a natural number holding zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a natural number holding `value`
    pub fn from_u64(value: u64) -> Self {
        Self {
            digits: DigitStore::from_u64(value),
        }
    }

    /// Create a natural number from a digit store
    pub fn from_digits(digits: DigitStore) -> Self {
        Self { digits }
    }

    /// Backing digit store
    pub fn digits(&self) -> &DigitStore {
        &self.digits
    }
}

impl Standard for NaturalNumber2 {
    fn clear(&mut self) {
        self.digits = DigitStore::zero();
    }

    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.digits = mem::take(&mut source.digits);
    }
}

impl NaturalNumber for NaturalNumber2 {
    fn multiply_by_radix(&mut self, k: u32) {
        assert!(k < RADIX, "Violation of: 0 <= k < RADIX (k = {k})");
        self.digits.multiply_by_radix(k as u8);
    }

    fn divide_by_radix(&mut self) -> u32 {
        self.digits.divide_by_radix() as u32
    }

    fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    fn to_word(&self) -> Option<u64> {
        self.digits.to_u64()
    }

    fn to_digits(&self) -> DigitStore {
        self.digits.clone()
    }

    fn set_from_u64(&mut self, value: u64) {
        self.digits = DigitStore::from_u64(value);
    }

    fn set_digits(&mut self, digits: DigitStore) {
        self.digits = digits;
    }

    fn representation(&self) -> Representation {
        Representation::Generic
    }

    fn add(&mut self, other: &mut dyn NaturalNumber) {
        let sum = self.digits.plus(&other.to_digits());
        let previous = mem::replace(&mut self.digits, sum);
        other.set_digits(previous);
    }
}

impl From<u64> for NaturalNumber2 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for NaturalNumber2 {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<DigitStore> for NaturalNumber2 {
    fn from(digits: DigitStore) -> Self {
        Self::from_digits(digits)
    }
}

impl TryFrom<i64> for NaturalNumber2 {
    type Error = NaturalNumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DigitStore::from_i64(value)
            .map(Self::from_digits)
            .map_err(|_| NaturalNumberError::InvalidValue(value))
    }
}

impl FromStr for NaturalNumber2 {
    type Err = NaturalNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_digits(text.parse()?))
    }
}
