//! Digit Store
//!
//! Provides the fixed-radix positional digit sequence every natural number
//! representation falls back to once a value no longer fits a machine word.
//!
//! Digits are kept least-significant first. Every value handed out by this
//! module is canonical: there are no leading zero digits, and zero itself is
//! the single digit `[0]`. Because the canonical form is unique per value,
//! equality and hashing can be derived structurally.
//!
//! Multiplication, division and roots are not implemented digit-wise; callers
//! bridge to `malachite::Natural` through [`DigitStore::to_natural`] and
//! [`DigitStore::from_natural`] for those.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use malachite::Natural;
use regex::Regex;

use crate::error::DigitError;

/// Numeric base used for digit storage, shared by all representations
pub const RADIX: u32 = 10;

const RADIX_DIGIT: u8 = RADIX as u8;

static CANONICAL_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("canonical numeral pattern"));

/// Canonical base-10 digit sequence, least-significant digit first
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitStore {
    digits: Vec<u8>,
}

impl DigitStore {
    /// The canonical zero, a single zero digit
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// Build the canonical digit sequence for `value`
    pub fn from_u64(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(20);
        while value > 0 {
            digits.push((value % RADIX as u64) as u8);
            value /= RADIX as u64;
        }
        Self { digits }
    }

    /// Build a digit store from a signed value
    ///
    /// Returns `DigitError::Negative` for values below zero.
    pub fn from_i64(value: i64) -> Result<Self, DigitError> {
        u64::try_from(value)
            .map(Self::from_u64)
            .map_err(|_| DigitError::Negative(value))
    }

    /// Build a digit store from raw digits, least-significant first
    ///
    /// Leading zero digits are stripped; an empty input yields zero.
    pub fn from_digits_lsf(digits: Vec<u8>) -> Result<Self, DigitError> {
        if let Some(&bad) = digits.iter().find(|&&d| d >= RADIX_DIGIT) {
            return Err(DigitError::DigitOutOfRange(bad));
        }
        Ok(Self::normalized(digits))
    }

    fn normalized(mut digits: Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        Self { digits }
    }

    /// Reconstruct the value as a native word, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.digits.iter().rev().try_fold(0u64, |acc, &d| {
            acc.checked_mul(RADIX as u64)?.checked_add(d as u64)
        })
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Number of significant digits (zero has one)
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Digits, least-significant first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Add two digit stores: x + y
    ///
    /// Grade-school addition with carry propagation.
    pub fn plus(&self, other: &Self) -> Self {
        let (long, short) = if self.len() >= other.len() {
            (&self.digits, &other.digits)
        } else {
            (&other.digits, &self.digits)
        };

        let mut digits = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u8;
        for (i, &d) in long.iter().enumerate() {
            let sum = d + short.get(i).copied().unwrap_or(0) + carry;
            digits.push(sum % RADIX_DIGIT);
            carry = sum / RADIX_DIGIT;
        }
        if carry > 0 {
            digits.push(carry);
        }
        Self::normalized(digits)
    }

    /// Subtract two digit stores: x - y
    ///
    /// Returns None if `other` is larger than `self`.
    pub fn minus(&self, other: &Self) -> Option<Self> {
        if self < other {
            return None;
        }

        let mut digits = Vec::with_capacity(self.len());
        let mut borrow = 0u8;
        for (i, &d) in self.digits.iter().enumerate() {
            let take = other.digits.get(i).copied().unwrap_or(0) + borrow;
            if d >= take {
                digits.push(d - take);
                borrow = 0;
            } else {
                digits.push(d + RADIX_DIGIT - take);
                borrow = 1;
            }
        }
        Some(Self::normalized(digits))
    }

    /// Shift in a new least-significant digit: x * RADIX + k
    ///
    /// # Panics
    ///
    /// Panics if `k` is not a digit of [`RADIX`].
    pub fn multiply_by_radix(&mut self, k: u8) {
        assert!(k < RADIX_DIGIT, "Violation of: 0 <= k < RADIX (k = {k})");
        if self.is_zero() {
            self.digits[0] = k;
        } else {
            self.digits.insert(0, k);
        }
    }

    /// Shift out the least-significant digit: x / RADIX, returning x % RADIX
    pub fn divide_by_radix(&mut self) -> u8 {
        let low = self.digits.remove(0);
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        low
    }

    /// Convert to a malachite `Natural`
    pub fn to_natural(&self) -> Natural {
        let radix = Natural::from(RADIX);
        self.digits.iter().rev().fold(Natural::from(0u32), |acc, &d| {
            acc * &radix + Natural::from(d)
        })
    }

    /// Create from a malachite `Natural`
    pub fn from_natural(value: &Natural) -> Self {
        let digits = value.to_string().bytes().rev().map(|b| b - b'0').collect();
        Self::normalized(digits)
    }

    /// Check whether `text` is a canonical decimal numeral (`0|[1-9][0-9]*`)
    pub fn is_canonical_numeral(text: &str) -> bool {
        CANONICAL_NUMERAL.is_match(text)
    }
}

impl Default for DigitStore {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for DigitStore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for DigitStore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DigitStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad_integral(true, "", &text)
    }
}

impl FromStr for DigitStore {
    type Err = DigitError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !Self::is_canonical_numeral(text) {
            return Err(DigitError::InvalidNumeral(text.to_string()));
        }
        Ok(Self::normalized(text.bytes().rev().map(|b| b - b'0').collect()))
    }
}

impl From<u64> for DigitStore {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for DigitStore {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl TryFrom<i64> for DigitStore {
    type Error = DigitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}
