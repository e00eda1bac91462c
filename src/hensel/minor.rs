// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Invertible minors of the Jacobian and the base solution modulo `p`.
//!
//! A minor is a choice of carry columns, one per constraint row. It is
//! invertible modulo `p^k` exactly when it is invertible modulo `p`, so the
//! search only ever works modulo `p`.

use super::residual::{palindrome_residual, reduce};
use crate::constraints::JacobianMatrix;
use crate::digits::{reverse_add, DigitSequence};
use crate::ring::{ModMatrix, Prime};
use crate::solver::{pivot_columns_mod2, pivot_columns_mod_p, rank_mod_p};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// A square selection of carry columns of the Jacobian.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Minor {
    columns: Vec<usize>,
}

impl Minor {
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Whether the minor is square and invertible modulo `p`.
    pub fn is_invertible(&self, jacobian: &JacobianMatrix, p: Prime) -> bool {
        if self.columns.len() != jacobian.constraints() {
            return false;
        }
        if self.columns.iter().any(|&c| c >= jacobian.carries()) {
            return false;
        }
        let sub = jacobian.columns(&self.columns);
        let reduced = ModMatrix::from_signed_rows(p.modulus(), &sub, self.columns.len());
        rank_mod_p(&reduced, p) == self.columns.len()
    }
}

/// The first invertible minor: the pivot columns of the elimination modulo `p`.
///
/// Returns `None` when the Jacobian does not have full row rank modulo `p`.
pub fn find_invertible_minor(jacobian: &JacobianMatrix, p: Prime) -> Option<Minor> {
    let pivots = if p == Prime::TWO {
        pivot_columns_mod2(jacobian.bit_rows(), jacobian.carries())
    } else {
        pivot_columns_mod_p(&jacobian.reduce(p.modulus()), p)
    };
    (pivots.len() == jacobian.constraints()).then(|| Minor::new(pivots))
}

/// Inverse of a square integer matrix modulo `p^k`.
///
/// Gauss–Jordan elimination choosing pivots that are units (not divisible
/// by `p`). Returns `None` if the matrix is singular modulo `p`.
///
/// # Panics
///
/// Panics if the matrix is not square.
pub fn invert_mod_prime_power(matrix: &[Vec<i64>], p: Prime, k: u32) -> Option<Vec<Vec<BigInt>>> {
    let n = matrix.len();
    let p_big = BigInt::from(p.get());
    let modulus = p_big.pow(k);

    let mut aug: Vec<Vec<BigInt>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            assert_eq!(row.len(), n, "minor must be square");
            let mut out: Vec<BigInt> = row
                .iter()
                .map(|&x| reduce(&BigInt::from(x), &modulus))
                .collect();
            out.extend((0..n).map(|j| if i == j { BigInt::one() } else { BigInt::zero() }));
            out
        })
        .collect();

    for col in 0..n {
        let pivot = (col..n).find(|&i| !(&aug[i][col] % &p_big).is_zero())?;
        aug.swap(col, pivot);
        let inv = aug[col][col].modinv(&modulus)?;
        for x in aug[col].iter_mut() {
            *x = reduce(&(&*x * &inv), &modulus);
        }
        let pivot_row = aug[col].clone();
        for (i, row) in aug.iter_mut().enumerate() {
            if i == col || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for (x, y) in row.iter_mut().zip(&pivot_row) {
                *x = reduce(&(&*x - &factor * y), &modulus);
            }
        }
    }

    Some(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}

/// `minor^{-1} * (-residual)` modulo `p^k`, or `None` if the minor is singular.
pub(crate) fn correction(
    jacobian: &JacobianMatrix,
    minor: &Minor,
    residual: &[BigInt],
    p: Prime,
    k: u32,
) -> Option<Vec<BigInt>> {
    let modulus = BigInt::from(p.get()).pow(k);
    let inverse = invert_mod_prime_power(&jacobian.columns(minor.columns()), p, k)?;
    Some(
        inverse
            .iter()
            .map(|row| {
                let dot: BigInt = row.iter().zip(residual).map(|(x, r)| x * -r).sum();
                reduce(&dot, &modulus)
            })
            .collect(),
    )
}

/// A carry assignment `c_0..=c_d` with `F(c) = 0 (mod p)`.
///
/// Starts from the true carries of `T(n)` and, if they do not already
/// satisfy the constraints modulo `p`, corrects the minor's columns once.
pub fn base_solution(a: &DigitSequence, minor: &Minor, p: Prime) -> Option<Vec<BigInt>> {
    let jacobian = JacobianMatrix::build(a);
    let trace = reverse_add(a);
    let mut carries: Vec<BigInt> = trace.carries.iter().map(|&c| BigInt::from(c)).collect();
    carries.push(BigInt::zero());

    let modulus = BigInt::from(p.get());
    let residual: Vec<BigInt> = palindrome_residual(a, &carries)
        .iter()
        .map(|r| reduce(r, &modulus))
        .collect();
    if residual.iter().all(Zero::is_zero) {
        return Some(carries);
    }

    let delta = correction(&jacobian, minor, &residual, p, 1)?;
    for (&col, dc) in minor.columns().iter().zip(delta) {
        carries[col] = reduce(&(&carries[col] + dc), &modulus);
    }
    Some(carries)
}
