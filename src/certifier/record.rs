// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-iterate obstruction records.

use crate::constraints::ResultLength;
use crate::digits::DigitSequence;
use crate::hensel::{LiftFailure, LiftOutcome};
use crate::ring::Prime;
use serde::Serialize;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// Final verdict for one iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumCountMacro, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Classification {
    /// `T(n)` is a palindrome; there is no obstruction.
    RingSolvable,

    /// Obstructed modulo 2 and the Jacobian has full row rank with at least one row.
    TheoreticalObstruction,

    /// Obstructed modulo 2 but the rank argument does not apply.
    NeedsEmpiricalCheck,
}

/// Rank facts about the Jacobian modulo 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JacobianSummary {
    pub rank_mod2: usize,
    pub constraints: usize,
    pub carries: usize,
    pub full_row_rank: bool,
}

/// Solvability of the congruence system for one result length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RingCheck {
    pub length: ResultLength,
    pub result_len: usize,
    pub solvable: bool,

    /// Whether the representative solution is also a valid digit assignment.
    pub representative_digit_feasible: Option<bool>,
}

/// The part of a [`LiftOutcome`] kept in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiftSummary {
    pub success: bool,
    pub level: u32,
    pub failure: Option<LiftFailure>,
}

impl From<LiftOutcome> for LiftSummary {
    fn from(outcome: LiftOutcome) -> Self {
        Self {
            success: outcome.success,
            level: outcome.level,
            failure: outcome.failure,
        }
    }
}

/// Outcome of the bounded edge-digit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmpiricalCheck {
    /// Largest `k` such that the edge digits of `T(n)` differ modulo `p^j` for every `j <= k`.
    pub highest_level: u32,

    /// The edge digits already agree modulo `p`.
    pub needs_further_check: bool,
}

/// Everything the certifier learned about one iterate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObstructionRecord {
    pub n: DigitSequence,
    pub digit_count: usize,
    pub obstruction_mod2: bool,
    pub jacobian: JacobianSummary,
    pub prime: Prime,
    pub ring: Vec<RingCheck>,
    pub lift: Option<LiftSummary>,
    pub empirical: Option<EmpiricalCheck>,
    pub classification: Classification,
}

impl ObstructionRecord {
    /// Whether any result length admits a solution of the congruence system.
    pub fn ring_solvable_at_some_length(&self) -> bool {
        self.ring.iter().any(|check| check.solvable)
    }
}
