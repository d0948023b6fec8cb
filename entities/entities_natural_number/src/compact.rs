//! Compact Representation
//!
//! `NaturalNumber1L` keeps its value in a native `u64` while it fits. An
//! arithmetic mutation that overflows the word promotes the value to a
//! [`DigitStore`]; promotion is one-way until [`NaturalNumber1L::normalize`]
//! is called explicitly.
//!
//! Re-initializations (construction, [`NaturalNumber::set_from_u64`],
//! [`Standard::clear`]) always start out compact when the value fits.

use std::mem;
use std::str::FromStr;

use entities_digits::{DigitStore, RADIX};
use tracing::debug;

use crate::error::NaturalNumberError;
use crate::kernel::{NaturalNumber, Representation, Standard};

#[derive(Clone, Debug)]
enum Store {
    Word(u64),
    Promoted(DigitStore),
}

/// Natural number backed by a machine word, promoting to digits on overflow
#[derive(Clone, Debug)]
pub struct NaturalNumber1L {
    store: Store,
}

impl NaturalNumber1L {
    /// Numeric base shared with every other representation
    pub const RADIX: u32 = RADIX;

    /// Create a natural number holding zero
    pub fn new() -> Self {
        Self::from_u64(0)
    }

    /// Create a natural number holding `value`, in compact mode
    pub fn from_u64(value: u64) -> Self {
        Self {
            store: Store::Word(value),
        }
    }

    /// Create a natural number from a digit store
    ///
    /// The value is held compactly when it fits a `u64`, promoted otherwise.
    pub fn from_digits(digits: DigitStore) -> Self {
        match digits.to_u64() {
            Some(word) => Self::from_u64(word),
            None => Self {
                store: Store::Promoted(digits),
            },
        }
    }

    /// Check if the value has been promoted to a digit store
    pub fn is_promoted(&self) -> bool {
        matches!(self.store, Store::Promoted(_))
    }

    /// Demote a promoted value back to a native word if it fits
    ///
    /// Returns true if the value is compact afterwards.
    pub fn normalize(&mut self) -> bool {
        if let Store::Promoted(digits) = &self.store {
            if let Some(word) = digits.to_u64() {
                debug!(value = word, "demoting natural number to compact word");
                self.store = Store::Word(word);
            }
        }
        !self.is_promoted()
    }

    fn promote(&mut self) -> &mut DigitStore {
        if let Store::Word(word) = self.store {
            self.store = Store::Promoted(DigitStore::from_u64(word));
        }
        match &mut self.store {
            Store::Promoted(digits) => digits,
            Store::Word(_) => unreachable!("store was promoted above"),
        }
    }
}

impl Default for NaturalNumber1L {
    fn default() -> Self {
        Self::new()
    }
}

impl Standard for NaturalNumber1L {
    fn clear(&mut self) {
        self.store = Store::Word(0);
    }

    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.store = mem::replace(&mut source.store, Store::Word(0));
    }
}

impl NaturalNumber for NaturalNumber1L {
    fn multiply_by_radix(&mut self, k: u32) {
        assert!(k < RADIX, "Violation of: 0 <= k < RADIX (k = {k})");
        if let Store::Word(word) = self.store {
            if let Some(shifted) = word
                .checked_mul(RADIX as u64)
                .and_then(|w| w.checked_add(k as u64))
            {
                self.store = Store::Word(shifted);
                return;
            }
            debug!(value = word, digit = k, "compact word overflowed in multiply_by_radix, promoting");
        }
        self.promote().multiply_by_radix(k as u8);
    }

    fn divide_by_radix(&mut self) -> u32 {
        match &mut self.store {
            Store::Word(word) => {
                let low = *word % RADIX as u64;
                *word /= RADIX as u64;
                low as u32
            }
            Store::Promoted(digits) => digits.divide_by_radix() as u32,
        }
    }

    fn is_zero(&self) -> bool {
        match &self.store {
            Store::Word(word) => *word == 0,
            Store::Promoted(digits) => digits.is_zero(),
        }
    }

    fn to_word(&self) -> Option<u64> {
        match &self.store {
            Store::Word(word) => Some(*word),
            Store::Promoted(digits) => digits.to_u64(),
        }
    }

    fn to_digits(&self) -> DigitStore {
        match &self.store {
            Store::Word(word) => DigitStore::from_u64(*word),
            Store::Promoted(digits) => digits.clone(),
        }
    }

    fn set_from_u64(&mut self, value: u64) {
        self.store = Store::Word(value);
    }

    fn set_digits(&mut self, digits: DigitStore) {
        if let Store::Promoted(current) = &mut self.store {
            *current = digits;
            return;
        }
        *self = Self::from_digits(digits);
        if self.is_promoted() {
            debug!("value no longer fits compact word, promoting");
        }
    }

    fn representation(&self) -> Representation {
        match self.store {
            Store::Word(_) => Representation::Compact,
            Store::Promoted(_) => Representation::Promoted,
        }
    }

    fn add(&mut self, other: &mut dyn NaturalNumber) {
        if let Store::Word(a) = self.store {
            if let Some(b) = other.to_word() {
                if let Some(sum) = a.checked_add(b) {
                    self.store = Store::Word(sum);
                    other.set_from_u64(a);
                    return;
                }
                debug!(augend = a, addend = b, "compact addition overflowed, promoting");
            }
        }

        // Reached when the receiver is promoted or the native sum overflows.
        let previous = self.to_digits();
        self.store = Store::Promoted(previous.plus(&other.to_digits()));
        other.set_digits(previous);
    }
}

impl From<u64> for NaturalNumber1L {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for NaturalNumber1L {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<DigitStore> for NaturalNumber1L {
    fn from(digits: DigitStore) -> Self {
        Self::from_digits(digits)
    }
}

impl TryFrom<i64> for NaturalNumber1L {
    type Error = NaturalNumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::from_u64)
            .map_err(|_| NaturalNumberError::InvalidValue(value))
    }
}

impl FromStr for NaturalNumber1L {
    type Err = NaturalNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_digits(text.parse()?))
    }
}
