//! Integration tests for the natural_number facade
//!
//! End-to-end scenarios for the NaturalNumber component, written against the
//! public facade only.

use malachite::Natural;
use natural_number::prelude::*;
use quickcheck_macros::quickcheck;
use rstest::rstest;

#[test]
fn test_add() {
    let mut nn1 = NaturalNumber1L::from_u64(8);
    let mut nn2 = NaturalNumber2::from_u64(5);
    nn1.add(&mut nn2);
    assert_eq!(NaturalNumber1L::from_u64(13), nn1);
    assert_eq!(NaturalNumber1L::from_u64(8), nn2);
}

#[test]
fn test_add_argument_takes_receiver_value() {
    let mut x = NaturalNumber1L::from_u64(8);
    let mut y = NaturalNumber1L::from_u64(3);
    x.add(&mut y);
    assert_eq!(x, NaturalNumber1L::from_u64(11));
    assert_eq!(y, NaturalNumber1L::from_u64(8));
}

#[test]
fn test_subtract() {
    let mut nn1 = NaturalNumber1L::from_u64(8);
    let nn2 = NaturalNumber1L::from_u64(5);
    nn1.subtract(&nn2).unwrap();
    assert_eq!(NaturalNumber1L::from_u64(3), nn1);
    assert_eq!(NaturalNumber1L::from_u64(5), nn2);
}

#[test]
fn test_multiply_by_radix() {
    let mut nn = NaturalNumber1L::from_u64(34);
    nn.multiply_by_radix(7);
    assert_eq!(NaturalNumber1L::from_u64(347), nn);
}

#[test]
fn test_divide_by_radix() {
    let mut nn = NaturalNumber1L::from_u64(347);
    let x = nn.divide_by_radix();
    assert_eq!(7, x);
    assert_eq!(NaturalNumber1L::from_u64(34), nn);
}

#[rstest]
#[case(2, 8)]
#[case(3, 4)]
fn test_root_of_64(#[case] r: u32, #[case] expected: u64) {
    let mut nn = NaturalNumber1L::from_u64(64);
    nn.root(r).unwrap();
    assert_eq!(NaturalNumber1L::from_u64(expected), nn);
}

#[test]
fn test_radix() {
    assert_eq!(10, RADIX);
    assert_eq!(10, NaturalNumber1L::RADIX);
    assert_eq!(10, NaturalNumber2::RADIX);
}

#[test]
fn test_copy_from() {
    let nn1 = NaturalNumber1L::from_u64(7);
    let mut nn2 = NaturalNumber1L::new();
    nn2.copy_from(&nn1);
    assert_eq!(NaturalNumber1L::from_u64(7), nn1);
    assert_eq!(NaturalNumber1L::from_u64(7), nn2);
}

#[rstest]
fn test_add_is_representation_agnostic(
    #[values(Kind::Compact, Kind::Generic)] receiver: Kind,
    #[values(Kind::Compact, Kind::Generic)] argument: Kind,
    #[values(0, 1, 5, 8, 1_000_000, u64::MAX / 2, u64::MAX)] a: u64,
    #[values(0, 3, 5, u64::MAX / 2 + 1, u64::MAX)] b: u64,
) {
    let mut x = new_natural(receiver, a);
    let mut y = new_natural(argument, b);
    x.add(y.as_mut());

    let expected = Natural::from(a) + Natural::from(b);
    assert_eq!(x.to_digits().to_natural(), expected);
    assert!(*y == *new_natural(Kind::Generic, a));
}

fn kind_of(generic: bool) -> Kind {
    if generic {
        Kind::Generic
    } else {
        Kind::Compact
    }
}

/// Canonical decimal numeral from arbitrary bytes
fn numeral_of(bytes: &[u8]) -> String {
    let digits: String = bytes.iter().map(|b| char::from(b'0' + b % 10)).collect();
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[quickcheck]
fn add_matches_malachite_for_words(
    a: u64,
    b: u64,
    receiver_generic: bool,
    argument_generic: bool,
) -> bool {
    let mut x = new_natural(kind_of(receiver_generic), a);
    let mut y = new_natural(kind_of(argument_generic), b);
    x.add(y.as_mut());
    x.to_digits().to_natural() == Natural::from(a) + Natural::from(b)
        && *y == *new_natural(Kind::Compact, a)
}

#[quickcheck]
fn add_matches_malachite_for_numerals(
    a: Vec<u8>,
    b: Vec<u8>,
    receiver_generic: bool,
    argument_generic: bool,
) -> bool {
    let (a, b) = (numeral_of(&a), numeral_of(&b));
    let mut x = parse_natural(kind_of(receiver_generic), &a).unwrap();
    let mut y = parse_natural(kind_of(argument_generic), &b).unwrap();
    x.add(y.as_mut());

    let expected = a.parse::<Natural>().unwrap() + b.parse::<Natural>().unwrap();
    x.to_digits().to_natural() == expected
        && x.to_digits().to_string() == expected.to_string()
        && y.to_digits().to_string() == a
}

#[test]
fn test_promotion_keeps_precision() {
    let mut compact = NaturalNumber1L::from_u64(u64::MAX);
    let mut generic = NaturalNumber2::from_u64(u64::MAX);
    for _ in 0..3 {
        let mut c = NaturalNumber1L::from_u64(u64::MAX);
        let mut g = NaturalNumber2::from_u64(u64::MAX);
        compact.add(&mut c);
        generic.add(&mut g);
    }
    assert!(compact.is_promoted());
    assert_eq!(compact, generic);
    assert_eq!(compact.to_string(), "73786976294838206460");
}

#[test]
fn test_zero_identity() {
    let mut zero = NaturalNumber1L::from_u64(0);
    let mut other = NaturalNumber2::from_u64(0);
    zero.add(&mut other);
    assert_eq!(zero, NaturalNumber1L::from_u64(0));
    assert_eq!(other.digits().digits(), &[0]);
    assert!(zero.to_digits().digits() == [0]);
}

#[test]
fn test_equality_symmetric_across_representations() {
    for n in [0u64, 1, 9, 10, 65_535, u64::MAX] {
        let a = NaturalNumber1L::from_u64(n);
        let b = NaturalNumber2::from_u64(n);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }
}

#[test]
fn test_negative_construction_fails() {
    assert_eq!(
        NaturalNumber1L::try_from(-5i64).unwrap_err(),
        NaturalNumberError::InvalidValue(-5)
    );
    assert!(parse_natural(Kind::Compact, "-5").is_err());
}

#[test]
fn test_dyn_secondary_operations() {
    let mut x = parse_natural(Kind::Generic, "1000000000000000000000").unwrap();
    let three = new_natural(Kind::Compact, 3);
    x.multiply(three.as_ref());
    x.increment();
    x.divide(three.as_ref()).unwrap();
    assert!(*x == *parse_natural(Kind::Compact, "1000000000000000000000").unwrap());

    let mut target = new_natural(Kind::Compact, 0);
    target.transfer_from_any(x.as_mut());
    assert!(x.is_zero());
    assert_eq!(target.representation(), Representation::Promoted);
}
