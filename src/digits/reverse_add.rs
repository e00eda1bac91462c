// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The reverse-and-add map `T(n) = n + reverse(n)` on digit sequences.
//!
//! The addition is done column by column so the carries are available to
//! the obstruction engine; the same trace answers the direct mod-2 question
//! ("is T(n) a palindrome?") without any linear algebra.

use super::DigitSequence;

/// The column-by-column record of one application of `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarryTrace {
    /// `T(n)`.
    pub result: DigitSequence,

    /// `carries[i]` is the carry out of position `i` (`c_i`), for `i in 0..d`.
    /// The carry into position 0 (`c_{-1}`) is always 0 and is not stored.
    pub carries: Vec<u8>,

    /// Column sums `s_i = a_i + a_{d-1-i}` before carries.
    pub pair_sums: Vec<u8>,

    /// Whether the addition overflowed into a `(d+1)`-th digit.
    pub overflow: bool,
}

impl CarryTrace {
    /// Number of digits of the input.
    pub fn input_len(&self) -> usize {
        self.carries.len()
    }

    /// Carry into position `i` (`c_{i-1}`), 0 for the units column.
    pub fn carry_in(&self, i: usize) -> u8 {
        if i == 0 {
            0
        } else {
            self.carries[i - 1]
        }
    }
}

/// Compute `T(n)` with its carry trace.
///
/// For `i` in `0..d`: `s = a_i + a_{d-1-i} + c_{i-1}`, result digit `s % 10`,
/// carry `c_i = s / 10`. A final carry becomes digit `d` of the result.
pub fn reverse_add(a: &DigitSequence) -> CarryTrace {
    let d = a.len();
    let mut digits = Vec::with_capacity(d + 1);
    let mut carries = Vec::with_capacity(d);
    let pair_sums: Vec<u8> = (0..d).map(|i| a.pair_sum(i)).collect();
    let mut carry = 0u8;

    for &pair_sum in &pair_sums {
        let s = pair_sum + carry;
        digits.push(s % 10);
        carry = s / 10;
        carries.push(carry);
    }

    let overflow = carry > 0;
    if overflow {
        digits.push(carry);
    }

    CarryTrace {
        // The top column sum of a non-zero input is positive, so no normalization happens.
        result: DigitSequence(digits),
        carries,
        pair_sums,
        overflow,
    }
}

/// The orbit `n, T(n), T²(n), ...` as an unbounded iterator.
///
/// # Example
///
/// ```
/// use lychrel_obstruction::digits::{DigitSequence, Orbit};
///
/// let orbit: Vec<String> = Orbit::new(DigitSequence::from_u64(196))
///     .take(3)
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(orbit, vec!["196", "887", "1675"]);
/// ```
#[derive(Debug, Clone)]
pub struct Orbit {
    next: DigitSequence,
}

impl Orbit {
    pub fn new(seed: DigitSequence) -> Self {
        Self { next: seed }
    }
}

impl Iterator for Orbit {
    type Item = DigitSequence;

    fn next(&mut self) -> Option<Self::Item> {
        let following = reverse_add(&self.next).result;
        Some(std::mem::replace(&mut self.next, following))
    }
}
