// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact evaluation of the palindrome constraints at a carry assignment.

use crate::digits::DigitSequence;
use num_bigint::{BigInt, Sign};

/// Column digits `b_i = a_i + a_{d-1-i} + c_{i-1} - 10 c_i` for `i in 0..d`.
///
/// `carries` holds `c_0..=c_d` (or at least `c_0..c_{d-1}`); `c_{-1} = 0`.
pub fn column_digits(a: &DigitSequence, carries: &[BigInt]) -> Vec<BigInt> {
    (0..a.len())
        .map(|i| {
            let mut b = BigInt::from(a.pair_sum(i)) - &carries[i] * 10;
            if i >= 1 {
                b += &carries[i - 1];
            }
            b
        })
        .collect()
}

/// The palindrome residual `F(c)_j = b_j - b_{d-1-j}` for `j in 0..d/2`.
///
/// This is the exact integer function, not its linearization.
pub fn palindrome_residual(a: &DigitSequence, carries: &[BigInt]) -> Vec<BigInt> {
    let b = column_digits(a, carries);
    let d = b.len();
    (0..d / 2).map(|j| &b[j] - &b[d - 1 - j]).collect()
}

/// Representative of `x` in `[0, m)`.
pub fn reduce(x: &BigInt, m: &BigInt) -> BigInt {
    let r = x % m;
    if r.sign() == Sign::Minus {
        r + m
    } else {
        r
    }
}
