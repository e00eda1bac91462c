// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Linear constraint systems for `T(n)` being a palindrome.
//!
//! Two builders answer different questions and are not interchangeable:
//!
//! - [`JacobianMatrix`]: carries only, coefficients are the derivatives of the
//!   palindrome equalities `b_j - b_{d-1-j} = 0` with
//!   `b_i = a_i + a_{d-1-i} + c_{i-1} - 10 c_i`. Its rank modulo 2 measures how
//!   robust a mod-2 obstruction is against lifting.
//! - [`congruence_system`]: explicit carry and result-digit unknowns, for a
//!   direct solvability test at a chosen modulus and result length.

pub mod congruence;
pub mod jacobian;

pub use congruence::{
    carry_trace_assignment, congruence_system, LinearSystem, ResultLength, UnknownLayout,
};
pub use jacobian::JacobianMatrix;
