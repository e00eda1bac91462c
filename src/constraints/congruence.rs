// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The full congruence system with explicit carry and result-digit unknowns.
//!
//! For a `d`-digit input and a hypothesized result length `L`, the unknowns
//! are `r_0..r_{L-1}` followed by `c_0..=c_d`. The rows are
//!
//! 1. formation: `r_i - c_{i-1} = a_i + a_{d-1-i}` for `i in 0..d` (`c_{-1} = 0`)
//! 2. overflow (only when `L = d + 1`): `r_d - c_d = 0`
//! 3. palindrome: `r_i - r_{L-1-i} = 0` for `i in 0..L/2`
//!
//! all modulo `m`. Here `r_i` is the literal result digit. The exact column
//! identity is `r_i = a_i + a_{d-1-i} + c_{i-1} - 10 c_i`; the formation rows
//! drop the `-10 c_i` term, so the true addition satisfies them modulo 2 and
//! modulo 5 only. The outgoing carry enters through the overflow row.
//!
//! Result digits come first so that elimination pivots on them. A system
//! whose input is a palindrome without carries then solves with every carry
//! at 0, which is the true addition.

use crate::digits::{CarryTrace, DigitSequence};
use crate::ring::{ModMatrix, Modulus};
use serde::{Deserialize, Serialize};

/// The two possible lengths of `T(n)` for a `d`-digit `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultLength {
    /// `L = d`: no overflow digit.
    Same,
    /// `L = d + 1`: the addition carries into a new leading digit.
    Overflow,
}

impl ResultLength {
    /// Both hypotheses, in the order they are tested.
    pub const ALL: [ResultLength; 2] = [ResultLength::Same, ResultLength::Overflow];

    /// `L` for a `d`-digit input.
    pub fn len(self, d: usize) -> usize {
        match self {
            ResultLength::Same => d,
            ResultLength::Overflow => d + 1,
        }
    }
}

/// Column positions of the unknowns in a congruence system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLayout {
    digit_count: usize,
    result_len: usize,
}

impl UnknownLayout {
    pub fn new(digit_count: usize, length: ResultLength) -> Self {
        Self {
            digit_count,
            result_len: length.len(digit_count),
        }
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// `L`.
    pub fn result_len(&self) -> usize {
        self.result_len
    }

    pub fn has_overflow_digit(&self) -> bool {
        self.result_len > self.digit_count
    }

    /// Column of result digit `r_i`, `i in 0..L`.
    pub fn result(&self, i: usize) -> usize {
        debug_assert!(i < self.result_len);
        i
    }

    /// Column of carry `c_i`, `i in 0..=d`.
    pub fn carry(&self, i: usize) -> usize {
        debug_assert!(i <= self.digit_count);
        self.result_len + i
    }

    /// Total number of unknowns, `L + (d + 1)`.
    pub fn unknowns(&self) -> usize {
        self.result_len + self.digit_count + 1
    }
}

/// A linear system `A x = b` over `Z/mZ` with its unknown layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSystem {
    pub matrix: ModMatrix,
    pub rhs: Vec<u64>,
    pub layout: UnknownLayout,
}

impl LinearSystem {
    pub fn modulus(&self) -> Modulus {
        self.matrix.modulus()
    }

    /// Whether the assignment satisfies every row.
    pub fn is_satisfied_by(&self, values: &[u64]) -> bool {
        values.len() == self.layout.unknowns() && self.matrix.mul_vec(values) == self.rhs
    }
}

/// Build the congruence system for result length `length` modulo `modulus`.
pub fn congruence_system(
    a: &DigitSequence,
    length: ResultLength,
    modulus: Modulus,
) -> LinearSystem {
    let d = a.len();
    let layout = UnknownLayout::new(d, length);
    let l = layout.result_len();
    let overflow_rows = usize::from(layout.has_overflow_digit());
    let row_count = d + overflow_rows + l / 2;

    let mut matrix = ModMatrix::zeros(modulus, row_count, layout.unknowns());
    let mut rhs = Vec::with_capacity(row_count);
    let mut row = 0;

    for i in 0..d {
        matrix.add_signed(row, layout.result(i), 1);
        if i >= 1 {
            matrix.add_signed(row, layout.carry(i - 1), -1);
        }
        rhs.push(u64::from(a.pair_sum(i)) % modulus.get());
        row += 1;
    }

    if layout.has_overflow_digit() {
        matrix.add_signed(row, layout.result(d), 1);
        matrix.add_signed(row, layout.carry(d), -1);
        rhs.push(0);
        row += 1;
    }

    for i in 0..l / 2 {
        matrix.add_signed(row, layout.result(i), 1);
        matrix.add_signed(row, layout.result(l - 1 - i), -1);
        rhs.push(0);
        row += 1;
    }

    debug_assert_eq!(row, row_count);
    LinearSystem { matrix, rhs, layout }
}

/// The actual carries and digits of `T(n)` as an assignment of the layout's unknowns.
///
/// `c_d` takes the value of the final carry. Returns `None` when the trace's
/// length does not match the layout.
pub fn carry_trace_assignment(
    trace: &CarryTrace,
    layout: &UnknownLayout,
    modulus: Modulus,
) -> Option<Vec<u64>> {
    let d = layout.digit_count();
    if trace.input_len() != d || trace.result.len() != layout.result_len() {
        return None;
    }
    let m = modulus.get();
    let mut values = vec![0u64; layout.unknowns()];
    for (i, &c) in trace.carries.iter().enumerate() {
        values[layout.carry(i)] = u64::from(c) % m;
    }
    values[layout.carry(d)] = u64::from(trace.carries[d - 1]) % m;
    for (i, &r) in trace.result.as_lsb().iter().enumerate() {
        values[layout.result(i)] = u64::from(r) % m;
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::reverse_add;

    fn modulus(m: u64) -> Modulus {
        Modulus::new(m).unwrap()
    }

    #[test]
    fn test_layout() {
        let layout = UnknownLayout::new(3, ResultLength::Overflow);
        assert_eq!(layout.result_len(), 4);
        assert_eq!(layout.unknowns(), 8);
        assert_eq!(layout.result(0), 0);
        assert_eq!(layout.result(3), 3);
        assert_eq!(layout.carry(0), 4);
        assert_eq!(layout.carry(3), 7);
    }

    #[test]
    fn test_196_same_length() {
        let a = DigitSequence::from_u64(196);
        let system = congruence_system(&a, ResultLength::Same, modulus(7));
        // 3 formation rows + 1 palindrome row
        assert_eq!(system.matrix.rows(), 4);
        assert_eq!(system.matrix.cols(), 7);
        // r_0 = 7
        assert_eq!(system.matrix.row(0), &[1, 0, 0, 0, 0, 0, 0]);
        // r_1 - c_0 = 18
        assert_eq!(system.matrix.row(1), &[0, 1, 0, 6, 0, 0, 0]);
        // r_0 - r_2 = 0
        assert_eq!(system.matrix.row(3), &[1, 0, 6, 0, 0, 0, 0]);
        assert_eq!(system.rhs, vec![0, 4, 0, 0]);
    }

    #[test]
    fn test_overflow_row() {
        let a = DigitSequence::from_u64(887);
        let system = congruence_system(&a, ResultLength::Overflow, modulus(2));
        // 3 formation + 1 overflow + 2 palindrome rows
        assert_eq!(system.matrix.rows(), 6);
        let overflow = system.matrix.row(3);
        assert_eq!(overflow[system.layout.carry(3)], 1);
        assert_eq!(overflow[system.layout.result(3)], 1);
    }

    #[test]
    fn test_trace_satisfies_system_mod_2_and_5() {
        for n in [12u64, 121, 196, 887, 1675, 9999, 10_890] {
            let a = DigitSequence::from_u64(n);
            let trace = reverse_add(&a);
            let length = if trace.overflow { ResultLength::Overflow } else { ResultLength::Same };
            for m in [2u64, 5] {
                let system = congruence_system(&a, length, modulus(m));
                let values = carry_trace_assignment(&trace, &system.layout, modulus(m)).unwrap();
                // Formation rows hold because 10 c_i vanishes mod 2 and 5; the palindrome
                // rows hold only for palindromic T(n), so check the formation part.
                let product = system.matrix.mul_vec(&values);
                assert_eq!(&product[..a.len()], &system.rhs[..a.len()], "n = {}, m = {}", n, m);
            }
        }
    }

    #[test]
    fn test_trace_assignment_length_mismatch() {
        let a = DigitSequence::from_u64(196);
        let trace = reverse_add(&a);
        let layout = UnknownLayout::new(3, ResultLength::Overflow);
        assert_eq!(carry_trace_assignment(&trace, &layout, modulus(2)), None);
    }
}
