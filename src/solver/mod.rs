// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact linear algebra over prime fields.
//!
//! - [`gf2`]: bit-packed rank over GF(2), used when only the rank of the
//!   Jacobian matters
//! - [`gauss`]: Gauss–Jordan elimination over `Z/pZ` for any prime `p`,
//!   producing one representative solution
//! - [`solution`]: assignments of unknowns and their digit feasibility

pub mod gauss;
pub mod gf2;
pub mod solution;

pub use gauss::{pivot_columns_mod_p, rank_mod_p, solve_mod_p, solve_system, SolveOutcome};
pub use gf2::{pivot_columns_mod2, rank_mod2, BitRow};
pub use solution::Solution;
