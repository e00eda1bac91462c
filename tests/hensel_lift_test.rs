// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hensel lifting through the public API.

mod common;

use lychrel_obstruction::constraints::JacobianMatrix;
use lychrel_obstruction::digits::DigitSequence;
use lychrel_obstruction::hensel::{
    base_solution, column_digits, find_invertible_minor, palindrome_residual, try_lift,
    HenselLifter, LiftFailure, Minor,
};
use lychrel_obstruction::ring::Prime;
use num_bigint::BigInt;
use num_traits::{One, Zero};

#[test]
fn test_extension_preserves_validated_levels() {
    let k_max = 10;
    for s in ["12", "121", "1010", "2002101"] {
        let a = common::digits(s);
        let first = try_lift(&a, None, k_max, Prime::TWO);
        assert!(first.success, "{}: {}", s, first);

        let minor = find_invertible_minor(&JacobianMatrix::build(&a), Prime::TWO).unwrap();
        let lifter = HenselLifter::new(&a, minor, Prime::TWO);
        let extended = lifter.lift(first.carries.clone(), k_max + 1..=2 * k_max);
        assert!(extended.success);
        assert_eq!(extended.level, 2 * k_max);

        let modulus = BigInt::from(2).pow(k_max);
        for (before, after) in first.carries.iter().zip(&extended.carries) {
            assert_eq!(before % &modulus, after % &modulus);
        }
        assert_eq!(column_digits(&a, &first.carries), column_digits(&a, &extended.carries));
    }
}

#[test]
fn test_successful_lift_leaves_exact_palindrome() {
    let a = common::digits("1010");
    let outcome = try_lift(&a, None, 16, Prime::TWO);
    assert!(outcome.success);
    assert!(palindrome_residual(&a, &outcome.carries).iter().all(Zero::is_zero));
}

#[test]
fn test_196_orbit_lifts_fail() {
    for n in common::orbit(196, 15) {
        let outcome = try_lift(&n, None, 12, Prime::TWO);
        assert!(!outcome.success, "{}", n);
        assert!(
            matches!(outcome.failure, Some(LiftFailure::DigitOutOfRange { .. })),
            "{}: {}",
            n,
            outcome
        );
    }
}

#[test]
fn test_supplied_minor_is_checked() {
    let a = DigitSequence::from_u64(196);
    let good = try_lift(&a, Some(Minor::new(vec![1])), 4, Prime::TWO);
    let searched = try_lift(&a, None, 4, Prime::TWO);
    assert_eq!(good, searched);

    let bad = try_lift(&a, Some(Minor::new(vec![2])), 4, Prime::TWO);
    assert_eq!(bad.failure, Some(LiftFailure::MinorNotInvertible));
}

#[test]
fn test_single_digit_has_empty_minor() {
    let a = DigitSequence::from_u64(5);
    let minor = find_invertible_minor(&JacobianMatrix::build(&a), Prime::TWO).unwrap();
    assert!(minor.columns().is_empty());
    let base = base_solution(&a, &minor, Prime::TWO).unwrap();
    assert_eq!(base, vec![BigInt::one(), BigInt::zero()]);
}
