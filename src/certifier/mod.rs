// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-iterate classification.
//!
//! For an iterate `n` with `d` digits the certifier
//!
//! 1. simulates `T(n)` exactly; if the result is a palindrome the iterate is
//!    [`Classification::RingSolvable`] and there is nothing to obstruct;
//! 2. otherwise computes the rank of the Jacobian modulo 2. Full row rank
//!    with at least one row is a [`Classification::TheoreticalObstruction`];
//! 3. anything else [`Classification::NeedsEmpiricalCheck`], and the
//!    edge-digit check runs for `k = 1..=empirical_levels`.
//!
//! Alongside the verdict each record carries the congruence solvability for
//! both result lengths and, when enabled, a Hensel lift outcome. These are
//! informational and do not change the classification.

pub mod empirical;
pub mod log;
pub mod record;

pub use empirical::{edge_digits_differ, empirical_check};
pub use log::{LoggedRecord, ObstructionLog};
pub use record::{
    Classification, EmpiricalCheck, JacobianSummary, LiftSummary, ObstructionRecord, RingCheck,
};

use crate::config::EngineConfig;
use crate::constraints::{congruence_system, JacobianMatrix, ResultLength};
use crate::digits::{reverse_add, DigitSequence, Orbit};
use crate::hensel::try_lift;
use crate::solver::{rank_mod2, solve_system};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct Certifier {
    config: EngineConfig,
}

impl Certifier {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank facts for `a`'s Jacobian modulo 2.
    pub fn jacobian_summary(a: &DigitSequence) -> JacobianSummary {
        let jacobian = JacobianMatrix::build(a);
        let rank = rank_mod2(jacobian.rows());
        let constraints = jacobian.constraints();
        JacobianSummary {
            rank_mod2: rank,
            constraints,
            carries: jacobian.carries(),
            full_row_rank: constraints > 0 && rank == constraints,
        }
    }

    fn ring_checks(&self, a: &DigitSequence) -> Vec<RingCheck> {
        let prime = self.config.prime;
        ResultLength::ALL
            .iter()
            .map(|&length| {
                let system = congruence_system(a, length, prime.modulus());
                let outcome = solve_system(&system, prime);
                RingCheck {
                    length,
                    result_len: system.layout.result_len(),
                    solvable: outcome.is_solvable(),
                    representative_digit_feasible: outcome
                        .solution()
                        .map(|solution| solution.is_digit_feasible(a, &system.layout)),
                }
            })
            .collect()
    }

    /// Classify one iterate.
    pub fn build_and_classify(&self, a: &DigitSequence) -> ObstructionRecord {
        let trace = reverse_add(a);
        let obstruction_mod2 = !trace.result.is_palindrome();
        let jacobian = Self::jacobian_summary(a);

        let classification = if !obstruction_mod2 {
            Classification::RingSolvable
        } else if jacobian.full_row_rank {
            Classification::TheoreticalObstruction
        } else {
            Classification::NeedsEmpiricalCheck
        };

        let empirical = (classification == Classification::NeedsEmpiricalCheck)
            .then(|| empirical_check(&trace, self.config.prime, self.config.empirical_levels));

        let lift: Option<LiftSummary> = self
            .config
            .run_lift
            .then(|| try_lift(a, None, self.config.hensel_levels, self.config.prime).into());

        debug!(
            n = %a,
            digits = a.len(),
            rank = jacobian.rank_mod2,
            constraints = jacobian.constraints,
            %classification,
            "classified iterate"
        );

        ObstructionRecord {
            n: a.clone(),
            digit_count: a.len(),
            obstruction_mod2,
            jacobian,
            prime: self.config.prime,
            ring: self.ring_checks(a),
            lift,
            empirical,
            classification,
        }
    }

    /// Classify up to `iterations` iterates of the orbit of `seed`.
    ///
    /// The log ends early at the first ring-solvable iterate, since its
    /// image is a palindrome.
    pub fn certify_orbit(&self, seed: DigitSequence, iterations: usize) -> ObstructionLog {
        let mut log = ObstructionLog::new();
        for n in Orbit::new(seed).take(iterations) {
            let record = self.build_and_classify(&n);
            let reached_palindrome = record.classification == Classification::RingSolvable;
            log.push(record);
            if reached_palindrome {
                info!(iteration = log.len() - 1, "orbit reached a palindrome");
                break;
            }
            if log.len() % 100 == 0 {
                info!(iterations = log.len(), digits = n.len(), "certifying orbit");
            }
        }
        log
    }
}
