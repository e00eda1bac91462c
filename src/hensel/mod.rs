// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hensel-style lifting of a carry assignment from `p` to `p^k`.
//!
//! Starting from carries that satisfy the palindrome constraints modulo `p`,
//! each level `k` evaluates the exact residual `F(c) mod p^k`, corrects the
//! minor's columns by `delta = minor^{-1} (-F(c)) mod p^k` when needed, and
//! then checks that every implied digit `b_i` is still in `0..=9` using the
//! current integer representatives.
//!
//! Ring arithmetic alone can always be lifted through an invertible minor;
//! the digit-range check is what makes a lift fail. A success at `K_max` is
//! evidence, not proof, that no finite obstruction exists on that branch.
//!
//! # Example
//!
//! ```
//! use lychrel_obstruction::digits::DigitSequence;
//! use lychrel_obstruction::hensel::{try_lift, LiftFailure};
//! use lychrel_obstruction::ring::Prime;
//!
//! let outcome = try_lift(&DigitSequence::from_u64(196), None, 10, Prime::TWO);
//! assert!(!outcome.success);
//! assert_eq!(outcome.level, 1);
//! assert!(matches!(outcome.failure, Some(LiftFailure::DigitOutOfRange { position: 1, .. })));
//! ```

pub mod minor;
pub mod residual;

pub use minor::{base_solution, find_invertible_minor, invert_mod_prime_power, Minor};
pub use residual::{column_digits, palindrome_residual};

use crate::constraints::JacobianMatrix;
use crate::digits::DigitSequence;
use crate::ring::Prime;
use num_bigint::BigInt;
use num_traits::Zero;
use residual::reduce;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Why a lift stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiftFailure {
    /// No invertible minor exists, or the supplied one is singular modulo `p`.
    MinorNotInvertible,

    /// A reconstructed digit left `0..=9`.
    DigitOutOfRange {
        position: usize,
        #[serde(serialize_with = "serialize_decimal")]
        value: BigInt,
    },
}

impl fmt::Display for LiftFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiftFailure::MinorNotInvertible => write!(f, "minor is not invertible"),
            LiftFailure::DigitOutOfRange { position, value } => {
                write!(f, "digit {} would be {}", position, value)
            }
        }
    }
}

/// Result of a lift attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiftOutcome {
    pub success: bool,

    /// The last level reached: `K_max` on success, otherwise the failing level
    /// (`k - 1` when the minor was singular at level `k`).
    pub level: u32,

    /// Carry representatives `c_0..=c_d` when the lift stopped.
    #[serde(serialize_with = "serialize_decimals")]
    pub carries: Vec<BigInt>,

    pub failure: Option<LiftFailure>,
}

impl fmt::Display for LiftOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let carries: Vec<String> = self.carries.iter().map(BigInt::to_string).collect();
        match &self.failure {
            None => write!(
                f,
                "lifted to level {} with carries [{}]",
                self.level,
                carries.join(", ")
            ),
            Some(failure) => write!(
                f,
                "failed at level {} ({}) with carries [{}]",
                self.level,
                failure,
                carries.join(", ")
            ),
        }
    }
}

fn serialize_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn serialize_decimals<S: Serializer>(values: &[BigInt], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(BigInt::to_string))
}

/// Lifts carry assignments for one digit sequence through a fixed minor.
#[derive(Debug, Clone)]
pub struct HenselLifter<'a> {
    digits: &'a DigitSequence,
    jacobian: JacobianMatrix,
    minor: Minor,
    prime: Prime,
}

impl<'a> HenselLifter<'a> {
    pub fn new(digits: &'a DigitSequence, minor: Minor, prime: Prime) -> Self {
        Self {
            digits,
            jacobian: JacobianMatrix::build(digits),
            minor,
            prime,
        }
    }

    pub fn minor(&self) -> &Minor {
        &self.minor
    }

    /// Run levels `levels` starting from `carries`.
    ///
    /// `carries` must hold `c_0..=c_d`, and levels start at 1.
    pub fn lift(&self, mut carries: Vec<BigInt>, levels: RangeInclusive<u32>) -> LiftOutcome {
        assert_eq!(
            carries.len(),
            self.jacobian.carries(),
            "expected one carry per Jacobian column"
        );
        assert!(*levels.start() >= 1, "lift levels start at 1");
        let p = BigInt::from(self.prime.get());
        let mut reached = levels.start() - 1;

        for k in levels {
            let modulus = p.pow(k);
            let residual: Vec<BigInt> = palindrome_residual(self.digits, &carries)
                .iter()
                .map(|r| reduce(r, &modulus))
                .collect();

            if !residual.iter().all(Zero::is_zero) {
                let correction =
                    minor::correction(&self.jacobian, &self.minor, &residual, self.prime, k);
                let Some(delta) = correction else {
                    return LiftOutcome {
                        success: false,
                        level: k - 1,
                        carries,
                        failure: Some(LiftFailure::MinorNotInvertible),
                    };
                };
                for (&col, dc) in self.minor.columns().iter().zip(delta) {
                    carries[col] = reduce(&(&carries[col] + dc), &modulus);
                }
                debug!(level = k, "corrected minor columns");
            }

            let digits = column_digits(self.digits, &carries);
            if let Some((position, value)) = digits
                .into_iter()
                .enumerate()
                .find(|(_, b)| *b < BigInt::zero() || *b > BigInt::from(9))
            {
                debug!(level = k, position, %value, "digit out of range");
                return LiftOutcome {
                    success: false,
                    level: k,
                    carries,
                    failure: Some(LiftFailure::DigitOutOfRange { position, value }),
                };
            }
            reached = k;
        }

        LiftOutcome {
            success: true,
            level: reached,
            carries,
            failure: None,
        }
    }
}

/// Lift `n`'s carries from level 1 to `k_max`.
///
/// When `minor` is `None` the first invertible minor is searched for; a
/// supplied minor that is singular modulo `p` fails at level 0. The base
/// solution comes from [`base_solution`].
pub fn try_lift(a: &DigitSequence, minor: Option<Minor>, k_max: u32, p: Prime) -> LiftOutcome {
    let jacobian = JacobianMatrix::build(a);
    let no_start = |failure| LiftOutcome {
        success: false,
        level: 0,
        carries: vec![BigInt::zero(); jacobian.carries()],
        failure: Some(failure),
    };

    let minor = match minor {
        Some(minor) if minor.is_invertible(&jacobian, p) => minor,
        Some(_) => return no_start(LiftFailure::MinorNotInvertible),
        None => match find_invertible_minor(&jacobian, p) {
            Some(minor) => minor,
            None => return no_start(LiftFailure::MinorNotInvertible),
        },
    };
    // The minor is invertible here, so the base correction exists.
    let Some(base) = base_solution(a, &minor, p) else {
        return no_start(LiftFailure::MinorNotInvertible);
    };

    HenselLifter::new(a, minor, p).lift(base, 1..=k_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_196_fails_at_first_level() {
        let outcome = try_lift(&DigitSequence::from_u64(196), None, 20, Prime::TWO);
        assert!(!outcome.success);
        assert_eq!(outcome.level, 1);
        assert_eq!(
            outcome.failure,
            Some(LiftFailure::DigitOutOfRange {
                position: 1,
                value: BigInt::from(18)
            })
        );
    }

    #[test]
    fn test_palindromic_step_lifts_to_k_max() {
        for n in [12u64, 121, 1010, 2_002_101] {
            let outcome = try_lift(&DigitSequence::from_u64(n), None, 30, Prime::TWO);
            assert!(outcome.success, "n = {}: {}", n, outcome);
            assert_eq!(outcome.level, 30);
        }
    }

    #[test]
    fn test_singular_supplied_minor() {
        let a = DigitSequence::from_u64(196);
        let outcome = try_lift(&a, Some(Minor::new(vec![0])), 5, Prime::TWO);
        assert_eq!(outcome.level, 0);
        assert_eq!(outcome.failure, Some(LiftFailure::MinorNotInvertible));
    }

    #[test]
    fn test_correction_that_breaks_digits() {
        // Start 887 from its true carries, which leave F odd.
        let a = DigitSequence::from_u64(887);
        let minor = Minor::new(vec![1]);
        let lifter = HenselLifter::new(&a, minor, Prime::TWO);
        let start = vec![BigInt::from(1), BigInt::from(1), BigInt::from(1), BigInt::from(0)];
        // b = [5, 7, 6]: F = -1, odd, so level 1 corrects c_1 to 0 and b_1 becomes 17.
        let outcome = lifter.lift(start, 1..=4);
        assert_eq!(outcome.level, 1);
        assert_eq!(
            outcome.failure,
            Some(LiftFailure::DigitOutOfRange {
                position: 1,
                value: BigInt::from(17)
            })
        );
    }

    #[test]
    #[should_panic(expected = "lift levels start at 1")]
    fn test_level_zero_is_rejected() {
        let a = DigitSequence::from_u64(1010);
        let minor = find_invertible_minor(&JacobianMatrix::build(&a), Prime::TWO).unwrap();
        let carries = vec![BigInt::zero(); 5];
        HenselLifter::new(&a, minor, Prime::TWO).lift(carries, 0..=3);
    }

    #[test]
    fn test_extension_keeps_lower_levels() {
        let a = DigitSequence::from_u64(1010);
        let k_max = 12;
        let first = try_lift(&a, None, k_max, Prime::TWO);
        assert!(first.success);

        let jacobian = JacobianMatrix::build(&a);
        let minor = find_invertible_minor(&jacobian, Prime::TWO).unwrap();
        let lifter = HenselLifter::new(&a, minor, Prime::TWO);
        let extended = lifter.lift(first.carries.clone(), k_max + 1..=2 * k_max);

        let modulus = BigInt::from(2).pow(k_max);
        for (before, after) in first.carries.iter().zip(&extended.carries) {
            assert_eq!(reduce(before, &modulus), reduce(after, &modulus));
        }
    }

    #[test]
    fn test_serializes_big_values_as_decimal() {
        let outcome = try_lift(&DigitSequence::from_u64(196), None, 3, Prime::TWO);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["failure"]["kind"], "digit_out_of_range");
        assert_eq!(json["failure"]["value"], "18");
        assert_eq!(json["carries"][0], "0");
    }
}
