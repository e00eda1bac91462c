// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `(I + R)^2 = 2(I + R)` since `R^2 = I`, so `I + R` is nilpotent modulo 2
//! for every size. The check here confirms it by direct multiplication.

use crate::ring::{ModMatrix, Prime};

/// First size at which the check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NilpotenceFailure {
    pub size: usize,
    pub square: ModMatrix,
}

/// The `d x d` digit reversal matrix modulo 2.
pub fn reversal_matrix(d: usize) -> ModMatrix {
    let mut r = ModMatrix::zeros(Prime::TWO.modulus(), d, d);
    for i in 0..d {
        r.set(i, d - 1 - i, 1);
    }
    r
}

/// Whether `(I + R)^2 == 0` modulo 2 for the `d x d` reversal matrix.
pub fn is_nilpotent_mod2(d: usize) -> bool {
    square_of_i_plus_r(d).is_zero()
}

fn square_of_i_plus_r(d: usize) -> ModMatrix {
    let j = ModMatrix::identity(Prime::TWO.modulus(), d).add(&reversal_matrix(d));
    j.mul(&j)
}

/// Check every size `1..=d_max`.
pub fn verify_up_to(d_max: usize) -> Result<(), NilpotenceFailure> {
    for size in 1..=d_max {
        let square = square_of_i_plus_r(size);
        if !square.is_zero() {
            return Err(NilpotenceFailure { size, square });
        }
    }
    Ok(())
}
