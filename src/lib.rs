// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Modular obstruction engine for the reverse-and-add map `T(n) = n + reverse(n)`.
//!
//! For each iterate `n` of an orbit the engine asks whether `T(n)` can be a
//! palindrome, by writing the digit-formation and palindrome-symmetry
//! constraints of the addition as a linear system over `Z/pZ` and, through
//! Hensel lifting, over `Z/p^kZ`.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`digits`]: the decimal digit codec and the exact carry trace of `T`.
//! - [`ring`]: primes, moduli and dense matrices over `Z/mZ`.
//! - [`constraints`]: the symbolic Jacobian (carries only) and the full
//!   congruence system (carries and result digits).
//! - [`solver`]: bit-packed rank over GF(2) and Gauss–Jordan over GF(p).
//! - [`hensel`]: lifting a carry assignment from `p` to `p^k` while every
//!   implied digit stays in `0..=9`.
//! - [`certifier`]: the per-iterate classification and the orbit log.
//!
//! Around these, [`analysis`] holds the residue-orbit and nilpotence checks,
//! [`config`] the engine configuration and [`report`] the JSON output.
//!
//! # Classification
//!
//! 1. **RingSolvable**: `T(n)` is a palindrome.
//! 2. **TheoreticalObstruction**: `T(n)` is not a palindrome and the Jacobian
//!    modulo 2 has full row rank with at least one row.
//! 3. **NeedsEmpiricalCheck**: otherwise; the edge digits of `T(n)` are
//!    compared modulo increasing powers of `p`.
//!
//! A Hensel lift that reaches `K_max` is evidence, not proof, that no
//! finite obstruction exists on that branch.

pub mod analysis;
pub mod certifier;
pub mod config;
pub mod constraints;
pub mod digits;
pub mod hensel;
pub mod report;
pub mod ring;
pub mod solver;

// Re-export commonly used types
pub use certifier::{Certifier, Classification, ObstructionLog, ObstructionRecord};
pub use config::EngineConfig;
pub use digits::DigitSequence;
pub use hensel::{try_lift, LiftOutcome};
pub use ring::Prime;
