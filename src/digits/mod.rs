// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decimal digit sequences.
//!
//! A [`DigitSequence`] is the only representation of an iterate that the
//! obstruction engine works with. Digits are stored least-significant first
//! (position 0 is the units digit); the MSB-first order only appears at the
//! presentation boundary (`Display`, `FromStr`, serde).
//!
//! # Examples
//!
//! ```
//! use lychrel_obstruction::digits::DigitSequence;
//!
//! let n: DigitSequence = "196".parse().unwrap();
//! assert_eq!(n.as_lsb(), &[6, 9, 1]);
//! assert_eq!(n.reverse().to_string(), "691");
//! assert_eq!(n.to_string(), "196");
//! ```

pub mod reverse_add;

pub use reverse_add::{reverse_add, CarryTrace, Orbit};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when converting to or from a digit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Negative integers have no digit sequence.
    #[error("negative input {0} has no decimal digit sequence")]
    Negative(BigInt),

    /// No digits were supplied.
    #[error("empty digit sequence")]
    Empty,

    /// A character that is not an ASCII decimal digit.
    #[error("invalid decimal digit {digit:?} at position {position}")]
    InvalidDigit { position: usize, digit: char },

    /// A raw digit value above 9.
    #[error("digit value {value} at position {position} is outside 0..=9")]
    DigitOutOfRange { position: usize, value: u8 },
}

/// An immutable base-10 digit sequence, least-significant digit first.
///
/// Invariant: the most significant digit is non-zero unless the sequence is
/// the single digit 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// The sequence `[0]`.
    pub fn zero() -> Self {
        Self(vec![0])
    }

    /// Convert an arbitrary-precision integer by repeated division by 10.
    pub fn from_biguint(n: &BigUint) -> Self {
        if n.is_zero() {
            return Self::zero();
        }
        Self(n.to_radix_le(10))
    }

    /// Convert a signed integer, rejecting negative values.
    pub fn from_bigint(n: &BigInt) -> Result<Self, CodecError> {
        match n.sign() {
            Sign::Minus => Err(CodecError::Negative(n.clone())),
            _ => Ok(Self::from_biguint(n.magnitude())),
        }
    }

    /// Convert a machine integer.
    pub fn from_u64(mut n: u64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(20);
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        Self(digits)
    }

    /// Build from raw digits, least significant first.
    ///
    /// High-order zeros are dropped so the result satisfies the invariant.
    pub fn from_lsb_digits(mut digits: Vec<u8>) -> Result<Self, CodecError> {
        if digits.is_empty() {
            return Err(CodecError::Empty);
        }
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(CodecError::DigitOutOfRange { position, value });
        }
        normalize(&mut digits);
        Ok(Self(digits))
    }

    /// Build from raw digits, most significant first.
    pub fn from_msb_digits(digits: &[u8]) -> Result<Self, CodecError> {
        Self::from_lsb_digits(digits.iter().rev().copied().collect())
    }

    /// The integer value, folded from the most significant digit down.
    pub fn to_biguint(&self) -> BigUint {
        self.0
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &d| acc * 10u32 + u32::from(d))
    }

    /// The integer whose decimal digits are these in reverse order.
    ///
    /// Trailing zeros of `self` become leading zeros of the reversal and are
    /// dropped, so `reverse(10) == 1`.
    pub fn reverse(&self) -> Self {
        let mut digits: Vec<u8> = self.0.iter().rev().copied().collect();
        normalize(&mut digits);
        Self(digits)
    }

    /// Number of digits `d`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a digit sequence has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit at position `i` (0 = units).
    pub fn digit(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// Digits least-significant first.
    pub fn as_lsb(&self) -> &[u8] {
        &self.0
    }

    /// Digits most-significant first.
    pub fn msb_digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().rev().copied()
    }

    /// `a_i + a_{d-1-i}`, the column sum of `n + reverse(n)` before carries.
    pub fn pair_sum(&self, i: usize) -> u8 {
        self.0[i] + self.0[self.0.len() - 1 - i]
    }

    /// True if the sequence reads the same in both directions.
    pub fn is_palindrome(&self) -> bool {
        let d = self.0.len();
        (0..d / 2).all(|i| self.0[i] == self.0[d - 1 - i])
    }

    /// `n mod m`, for `m >= 1`.
    pub fn residue(&self, m: u64) -> u64 {
        assert!(m >= 1, "residue modulo zero");
        let m = u128::from(m);
        self.msb_digits()
            .fold(0u128, |acc, d| (acc * 10 + u128::from(d)) % m) as u64
    }
}

fn normalize(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}

impl fmt::Display for DigitSequence {
    /// Format most-significant digit first, e.g. "196".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.msb_digits() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for DigitSequence {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CodecError::Empty);
        }
        let mut digits = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(CodecError::InvalidDigit { position, digit: ch }),
            }
        }
        digits.reverse();
        normalize(&mut digits);
        Ok(Self(digits))
    }
}

impl From<u64> for DigitSequence {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<&BigUint> for DigitSequence {
    fn from(n: &BigUint) -> Self {
        Self::from_biguint(n)
    }
}

impl Serialize for DigitSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DigitSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Digits of `n`, least significant first. `0` yields `[0]`.
pub fn to_digits(n: &BigUint) -> DigitSequence {
    DigitSequence::from_biguint(n)
}

/// Inverse of [`to_digits`].
pub fn from_digits(digits: &DigitSequence) -> BigUint {
    digits.to_biguint()
}
