// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gauss–Jordan elimination over `Z/pZ`.
//!
//! Works for any prime `p`. The bit-packed rank over GF(2) lives in
//! [`super::gf2`].

use super::Solution;
use crate::constraints::LinearSystem;
use crate::ring::{mod_inverse, mul_mod, ModMatrix, Prime};

/// Result of solving `A x = b` modulo `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The system is consistent; free unknowns are set to 0.
    Solvable(Solution),
    /// Some row reduced to `0 = b` with `b != 0`.
    Inconsistent,
}

impl SolveOutcome {
    pub fn is_solvable(&self) -> bool {
        matches!(self, SolveOutcome::Solvable(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solvable(solution) => Some(solution),
            SolveOutcome::Inconsistent => None,
        }
    }
}

fn rows_mod_p(matrix: &ModMatrix, p: u64) -> Vec<Vec<u64>> {
    (0..matrix.rows())
        .map(|i| matrix.row(i).iter().map(|&x| x % p).collect())
        .collect()
}

/// Reduce `[m | b]` to reduced row echelon form in place.
///
/// Returns `(row, column)` for every pivot, in order.
fn gauss_jordan(m: &mut [Vec<u64>], b: &mut [u64], p: u64) -> Vec<(usize, usize)> {
    let rows = m.len();
    let cols = m.first().map_or(0, Vec::len);
    let mut pivots = Vec::new();
    let (mut row, mut col) = (0, 0);

    while row < rows && col < cols {
        let Some(sel) = (row..rows).find(|&i| m[i][col] != 0) else {
            col += 1;
            continue;
        };
        m.swap(row, sel);
        b.swap(row, sel);

        let inv = mod_inverse(m[row][col], p).expect("non-zero residue is a unit modulo a prime");
        for x in m[row][col..].iter_mut() {
            *x = mul_mod(*x, inv, p);
        }
        b[row] = mul_mod(b[row], inv, p);

        let pivot_row = m[row].clone();
        let pivot_rhs = b[row];
        for i in 0..rows {
            let factor = m[i][col];
            if i == row || factor == 0 {
                continue;
            }
            for (x, &y) in m[i][col..].iter_mut().zip(&pivot_row[col..]) {
                *x = (*x + p - mul_mod(factor, y, p)) % p;
            }
            b[i] = (b[i] + p - mul_mod(factor, pivot_rhs, p)) % p;
        }

        pivots.push((row, col));
        row += 1;
        col += 1;
    }
    pivots
}

/// Solve `A x = b` over `Z/pZ`.
///
/// Entries are reduced modulo `p` first. After full reduction the rows past
/// the rank have all-zero coefficients; a non-zero right-hand side there
/// means the system is inconsistent. Otherwise pivot unknowns take their
/// reduced right-hand side and free unknowns are 0.
///
/// # Panics
///
/// Panics if `rhs` does not have one entry per row.
pub fn solve_mod_p(matrix: &ModMatrix, rhs: &[u64], p: Prime) -> SolveOutcome {
    assert_eq!(rhs.len(), matrix.rows(), "right-hand side length does not match row count");
    let p_val = p.get();
    let mut m = rows_mod_p(matrix, p_val);
    let mut b: Vec<u64> = rhs.iter().map(|&x| x % p_val).collect();

    let pivots = gauss_jordan(&mut m, &mut b, p_val);
    if b[pivots.len()..].iter().any(|&x| x != 0) {
        return SolveOutcome::Inconsistent;
    }

    let mut x = vec![0u64; matrix.cols()];
    for &(row, col) in &pivots {
        x[col] = b[row];
    }
    SolveOutcome::Solvable(Solution::new(p.modulus(), x))
}

/// Solve a congruence system built modulo the prime `p`.
///
/// # Panics
///
/// Panics if the system was built for a different modulus.
pub fn solve_system(system: &LinearSystem, p: Prime) -> SolveOutcome {
    assert_eq!(
        system.modulus().get(),
        p.get(),
        "system built modulo {} cannot be solved modulo {}",
        system.modulus(),
        p
    );
    solve_mod_p(&system.matrix, &system.rhs, p)
}

/// Rank of a matrix over `Z/pZ`.
pub fn rank_mod_p(matrix: &ModMatrix, p: Prime) -> usize {
    pivot_columns_mod_p(matrix, p).len()
}

/// Pivot columns of the elimination over `Z/pZ`, one per pivot row.
pub fn pivot_columns_mod_p(matrix: &ModMatrix, p: Prime) -> Vec<usize> {
    let mut m = rows_mod_p(matrix, p.get());
    let mut b = vec![0u64; matrix.rows()];
    gauss_jordan(&mut m, &mut b, p.get())
        .into_iter()
        .map(|(_, col)| col)
        .collect()
}
