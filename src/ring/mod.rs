// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finite rings `Z/mZ` used by the constraint builders and solvers.
//!
//! - [`Modulus`]: any `m >= 2`, for building systems
//! - [`Prime`]: a validated prime, required by [`crate::solver::solve_mod_p`]
//! - [`ModMatrix`]: dense matrix of residues

pub mod matrix;

pub use matrix::ModMatrix;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when validating a modulus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("{0} is not prime")]
    NotPrime(u64),

    #[error("modulus {0} is below 2")]
    ModulusTooSmall(u64),
}

/// A modulus `m >= 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Modulus(u64);

impl Modulus {
    pub fn new(m: u64) -> Result<Self, RingError> {
        if m < 2 {
            return Err(RingError::ModulusTooSmall(m));
        }
        Ok(Self(m))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Reduce a signed integer to its representative in `[0, m)`.
    pub fn reduce(self, x: i64) -> u64 {
        x.rem_euclid(self.0 as i64) as u64
    }
}

impl TryFrom<u64> for Modulus {
    type Error = RingError;

    fn try_from(m: u64) -> Result<Self, Self::Error> {
        Self::new(m)
    }
}

impl From<Modulus> for u64 {
    fn from(m: Modulus) -> Self {
        m.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A prime `p`, validated by trial division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Prime(u64);

impl Prime {
    pub const TWO: Prime = Prime(2);

    pub fn new(p: u64) -> Result<Self, RingError> {
        if is_prime(p) {
            Ok(Self(p))
        } else {
            Err(RingError::NotPrime(p))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn modulus(self) -> Modulus {
        Modulus(self.0)
    }
}

impl TryFrom<u64> for Prime {
    type Error = RingError;

    fn try_from(p: u64) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl From<Prime> for u64 {
    fn from(p: Prime) -> Self {
        p.0
    }
}

impl From<Prime> for Modulus {
    fn from(p: Prime) -> Self {
        p.modulus()
    }
}

impl fmt::Display for Prime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trial-division primality test. Moduli here are small.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut f = 3u64;
    while f.saturating_mul(f) <= n {
        if n % f == 0 {
            return false;
        }
        f += 2;
    }
    true
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    let (mut old_r, mut r) = (i128::from(a % m), i128::from(m));
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(i128::from(m)) as u64)
}

/// `(a * b) mod m` without overflow.
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
    }

    #[test]
    fn test_prime_validation() {
        assert_eq!(Prime::new(7).map(Prime::get), Ok(7));
        assert_eq!(Prime::new(9), Err(RingError::NotPrime(9)));
        assert_eq!(Modulus::new(1), Err(RingError::ModulusTooSmall(1)));
        assert_eq!(Modulus::from(Prime::TWO).get(), 2);
    }

    #[test]
    fn test_mod_inverse() {
        for p in [2u64, 5, 7, 11] {
            for a in 1..p {
                let inv = mod_inverse(a, p).unwrap();
                assert_eq!(mul_mod(a, inv, p), 1, "a = {}, p = {}", a, p);
            }
        }
        assert_eq!(mod_inverse(3, 16), Some(11));
        assert_eq!(mod_inverse(4, 16), None);
        assert_eq!(mod_inverse(0, 7), None);
    }

    #[test]
    fn test_reduce_signed() {
        let m = Modulus::new(2).unwrap();
        assert_eq!(m.reduce(-10), 0);
        assert_eq!(m.reduce(-1), 1);
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.reduce(-10), 4);
        assert_eq!(m.reduce(10), 3);
    }

    #[test]
    fn test_serde_validates() {
        let p: Prime = serde_json::from_str("5").unwrap();
        assert_eq!(p.get(), 5);
        assert!(serde_json::from_str::<Prime>("6").is_err());
    }
}
