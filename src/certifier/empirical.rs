// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded empirical check on the edge digits of `T(n)`.
//!
//! A palindrome has equal first and last digits, so those two digits
//! differing modulo `p^k` is a necessary witness of the obstruction at that
//! level. Digits are below 10, so for `p^k > 9` the test is plain inequality.

use super::record::EmpiricalCheck;
use crate::digits::CarryTrace;
use crate::ring::Prime;

/// Whether the first and last digits of `T(n)` differ modulo `p^k`.
pub fn edge_digits_differ(trace: &CarryTrace, p: Prime, k: u32) -> bool {
    let result = &trace.result;
    let first = u64::from(result.digit(result.len() - 1));
    let last = u64::from(result.digit(0));
    let modulus = p.get().checked_pow(k).unwrap_or(u64::MAX);
    first % modulus != last % modulus
}

/// Try `k = 1..=max_level` and keep the longest prefix where the edge digits differ.
pub fn empirical_check(trace: &CarryTrace, p: Prime, max_level: u32) -> EmpiricalCheck {
    let highest_level = (1..=max_level)
        .take_while(|&k| edge_digits_differ(trace, p, k))
        .last()
        .unwrap_or(0);
    EmpiricalCheck {
        highest_level,
        needs_further_check: highest_level == 0,
    }
}
