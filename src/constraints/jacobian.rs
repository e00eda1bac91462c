// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The symbolic Jacobian of the palindrome constraints in the carries.

use crate::digits::DigitSequence;
use crate::ring::{ModMatrix, Modulus};
use crate::solver::gf2::BitRow;

/// Integer Jacobian of the palindrome constraints with respect to the carries.
///
/// Row `j` (for `j in 0..d/2`) differentiates `b_j - b_k` with `k = d-1-j`.
/// Column `i` is the carry `c_i` for `i in 0..=d`; `c_{-1}` is fixed at 0 and
/// has no column. Because the input digits are constants, the matrix depends
/// only on the digit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JacobianMatrix {
    digit_count: usize,
    rows: Vec<Vec<i64>>,
}

impl JacobianMatrix {
    /// Build the Jacobian for the digits of `n`.
    pub fn build(a: &DigitSequence) -> Self {
        Self::for_digit_count(a.len())
    }

    /// Build the Jacobian for a `d`-digit input.
    pub fn for_digit_count(d: usize) -> Self {
        let rows = (0..d / 2)
            .map(|j| {
                let k = d - 1 - j;
                let mut row = vec![0i64; d + 1];
                // +b_j: c_{j-1} - 10 c_j
                if j >= 1 {
                    row[j - 1] += 1;
                }
                row[j] -= 10;
                // -b_k: -c_{k-1} + 10 c_k
                if k >= 1 {
                    row[k - 1] -= 1;
                }
                row[k] += 10;
                row
            })
            .collect();
        Self { digit_count: d, rows }
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Number of constraint rows, `floor(d/2)`.
    pub fn constraints(&self) -> usize {
        self.rows.len()
    }

    /// Number of carry columns, `d + 1`.
    pub fn carries(&self) -> usize {
        self.digit_count + 1
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn coefficient(&self, row: usize, carry: usize) -> i64 {
        self.rows[row][carry]
    }

    /// The matrix over `Z/mZ`.
    pub fn reduce(&self, modulus: Modulus) -> ModMatrix {
        ModMatrix::from_signed_rows(modulus, &self.rows, self.carries())
    }

    /// The matrix over GF(2), one bit row per constraint.
    pub fn bit_rows(&self) -> Vec<BitRow> {
        self.rows.iter().map(|row| BitRow::from_parities(row)).collect()
    }

    /// Integer submatrix on the given carry columns.
    pub fn columns(&self, columns: &[usize]) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| columns.iter().map(|&c| row[c]).collect())
            .collect()
    }
}
