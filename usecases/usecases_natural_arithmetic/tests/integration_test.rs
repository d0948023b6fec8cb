//! Integration tests for usecases_natural_arithmetic crate
//!
//! Secondary operations are checked against malachite for both
//! representations, on both sides of the native word boundary.

use entities_natural_number::{NaturalNumber, NaturalNumber1L, NaturalNumber2, NaturalNumberError};
use malachite::Natural;
use rstest::rstest;
use std::str::FromStr;
use usecases_natural_arithmetic::*;

fn boxed(compact: bool, text: &str) -> Box<dyn NaturalNumber> {
    if compact {
        Box::new(NaturalNumber1L::from_str(text).unwrap())
    } else {
        Box::new(NaturalNumber2::from_str(text).unwrap())
    }
}

fn natural(text: &str) -> Natural {
    Natural::from_str(text).unwrap()
}

#[rstest]
#[case("18446744073709551615", "18446744073709551615")]
#[case("4294967296", "4294967296")]
#[case("123456789", "0")]
#[case("98765432109876543210", "12345678901234567890")]
fn test_multiply_matches_malachite(
    #[values(true, false)] compact: bool,
    #[case] a: &str,
    #[case] b: &str,
) {
    let mut x = boxed(compact, a);
    x.multiply(boxed(!compact, b).as_ref());
    assert_eq!(x.to_digits().to_natural(), natural(a) * natural(b));
}

#[rstest]
#[case("36893488147419103230", "18446744073709551615", "2")]
#[case("1000000000000000000000", "7", "142857142857142857142")]
#[case("6", "7", "0")]
fn test_divide(
    #[values(true, false)] compact: bool,
    #[case] a: &str,
    #[case] b: &str,
    #[case] expected: &str,
) {
    let mut x = boxed(compact, a);
    x.divide(boxed(!compact, b).as_ref()).unwrap();
    assert!(*x == *boxed(true, expected));
}

#[test]
fn test_subtract_across_word_boundary() {
    let mut x = NaturalNumber1L::from_str("18446744073709551616").unwrap();
    assert!(x.is_promoted());
    x.subtract(&NaturalNumber2::from_u64(1)).unwrap();
    assert_eq!(x, NaturalNumber2::from_u64(u64::MAX));
    assert!(x.is_promoted());
    assert!(x.normalize());
}

#[test]
fn test_root_of_large_square() {
    let mut x = NaturalNumber2::from_str("152415787532388367504942236884722755800955129").unwrap();
    x.root(2).unwrap();
    assert_eq!(x.to_string(), "12345678901234567890123");
}

#[test]
fn test_failures_leave_receiver_untouched() {
    let mut x = NaturalNumber1L::from_u64(10);
    assert_eq!(x.divide(&NaturalNumber1L::new()), Err(NaturalNumberError::DivisionByZero));
    assert_eq!(x.root(0), Err(NaturalNumberError::InvalidRootDegree(0)));
    assert_eq!(x.subtract(&NaturalNumber2::from_u64(11)), Err(NaturalNumberError::Underflow));
    assert!(x.set_from_str("+10").is_err());
    assert_eq!(x, NaturalNumber1L::from_u64(10));
}

#[test]
fn test_to_int() {
    assert!(can_set_from_str("0"));
    let x = NaturalNumber2::from_str("18446744073709551616").unwrap();
    assert_eq!(
        x.to_int(),
        Err(NaturalNumberError::DoesNotFit("18446744073709551616".to_string()))
    );
    assert_eq!(NaturalNumber2::from_u64(5).to_int(), Ok(5));
}
