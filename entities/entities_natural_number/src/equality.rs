//! Equality & Comparison
//!
//! Value comparison across representations. Both operands are reduced to a
//! canonical comparable form through the kernel (a native word when both fit,
//! the canonical digit sequence otherwise) and compared structurally. Since
//! canonical forms are unique, a value that fits a word can never equal one
//! that does not.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::compact::NaturalNumber1L;
use crate::generic::NaturalNumber2;
use crate::kernel::NaturalNumber;

/// Check whether two natural numbers denote the same magnitude
pub fn natural_eq(x: &dyn NaturalNumber, y: &dyn NaturalNumber) -> bool {
    natural_cmp(x, y) == Ordering::Equal
}

/// Order two natural numbers by magnitude
pub fn natural_cmp(x: &dyn NaturalNumber, y: &dyn NaturalNumber) -> Ordering {
    match (x.to_word(), y.to_word()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => x.to_digits().cmp(&y.to_digits()),
    }
}

impl PartialEq for dyn NaturalNumber + '_ {
    fn eq(&self, other: &Self) -> bool {
        natural_eq(self, other)
    }
}

impl Eq for dyn NaturalNumber + '_ {}

impl PartialOrd for dyn NaturalNumber + '_ {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(natural_cmp(self, other))
    }
}

impl Ord for dyn NaturalNumber + '_ {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(self, other)
    }
}

macro_rules! value_semantics {
    ($ty:ty) => {
        impl Eq for $ty {}

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                natural_cmp(self, other)
            }
        }

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.to_digits().hash(state);
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.to_word() {
                    Some(word) => fmt::Display::fmt(&word, f),
                    None => fmt::Display::fmt(&self.to_digits(), f),
                }
            }
        }
    };
}

macro_rules! cross_equality {
    ($lhs:ty, $rhs:ty) => {
        impl PartialEq<$rhs> for $lhs {
            fn eq(&self, other: &$rhs) -> bool {
                natural_eq(self, other)
            }
        }

        impl PartialOrd<$rhs> for $lhs {
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                Some(natural_cmp(self, other))
            }
        }
    };
}

value_semantics!(NaturalNumber1L);
value_semantics!(NaturalNumber2);

cross_equality!(NaturalNumber1L, NaturalNumber1L);
cross_equality!(NaturalNumber1L, NaturalNumber2);
cross_equality!(NaturalNumber2, NaturalNumber1L);
cross_equality!(NaturalNumber2, NaturalNumber2);
