// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Assignments of the unknowns of a congruence system.

use crate::constraints::{LinearSystem, UnknownLayout};
use crate::digits::DigitSequence;
use crate::ring::Modulus;
use serde::Serialize;

/// One residue in `[0, m)` per unknown.
///
/// Satisfying the linear system (ring feasibility) says nothing about
/// whether the carries and digits are realizable in base 10; use
/// [`Solution::is_digit_feasible`] for that second check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    modulus: Modulus,
    values: Vec<u64>,
}

impl Solution {
    pub fn new(modulus: Modulus, values: Vec<u64>) -> Self {
        Self { modulus, values }
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Ring feasibility.
    pub fn satisfies(&self, system: &LinearSystem) -> bool {
        system.modulus() == self.modulus && system.is_satisfied_by(&self.values)
    }

    /// The result digits `r_0..r_{L-1}` as integer representatives.
    pub fn digit_values(&self, layout: &UnknownLayout) -> Vec<i64> {
        (0..layout.result_len())
            .map(|i| self.values[layout.result(i)] as i64)
            .collect()
    }

    /// The carries `c_0..=c_d`.
    pub fn carries(&self, layout: &UnknownLayout) -> &[u64] {
        &self.values[layout.carry(0)..=layout.carry(layout.digit_count())]
    }

    /// Whether the integer representatives are the actual addition
    /// `a + reverse(a)`.
    ///
    /// Every `r_i` must lie in `0..=9` and satisfy
    /// `r_i = a_i + a_{d-1-i} + c_{i-1} - 10 c_i` exactly. With an overflow
    /// digit, `r_d` is the non-zero final carry and `c_d` repeats it; without
    /// one, the final carry is 0.
    pub fn is_digit_feasible(&self, a: &DigitSequence, layout: &UnknownLayout) -> bool {
        let d = layout.digit_count();
        if a.len() != d || self.values.len() != layout.unknowns() {
            return false;
        }
        let r = |i: usize| self.values[layout.result(i)] as i64;
        let c = |i: usize| self.values[layout.carry(i)] as i64;

        let in_range = (0..layout.result_len()).all(|i| (0..=9).contains(&r(i)));
        let formed = (0..d).all(|i| {
            let carry_in = if i == 0 { 0 } else { c(i - 1) };
            r(i) == i64::from(a.pair_sum(i)) + carry_in - 10 * c(i)
        });
        let top = if layout.has_overflow_digit() {
            r(d) != 0 && r(d) == c(d - 1) && c(d) == c(d - 1)
        } else {
            c(d - 1) == 0
        };
        in_range && formed && top
    }
}
