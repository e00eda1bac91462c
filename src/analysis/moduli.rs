// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The orbit of a seed viewed modulo `M`.
//!
//! `T` is not a function of `n mod M`, so a repeated residue does not mean
//! the orbit cycles; it only bounds how many distinct states the residues
//! visit before the first coincidence.

use crate::certifier::{Certifier, Classification, ObstructionRecord};
use crate::digits::{DigitSequence, Orbit};
use serde::Serialize;
use tracing::debug;

/// The first iterate seen with a given residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidueRepresentative {
    pub residue: u64,
    pub first_iteration: usize,
    pub n: DigitSequence,
}

/// Where the first repeated residue occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResidueRepeat {
    pub iteration: usize,
    pub first_seen: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidueOrbit {
    pub modulus: u64,
    pub representatives: Vec<ResidueRepresentative>,

    /// `None` when the iteration cap was hit first.
    pub repeat: Option<ResidueRepeat>,
}

/// A representative with its certifier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepresentativeCheck {
    pub residue: u64,
    pub record: ObstructionRecord,
}

impl ResidueOrbit {
    pub fn distinct_residues(&self) -> usize {
        self.representatives.len()
    }

    pub fn classify(&self, certifier: &Certifier) -> Vec<RepresentativeCheck> {
        self.representatives
            .iter()
            .map(|rep| RepresentativeCheck {
                residue: rep.residue,
                record: certifier.build_and_classify(&rep.n),
            })
            .collect()
    }
}

/// Iterate `T` from `seed` until a residue modulo `modulus` repeats or
/// `max_iter` iterates have been examined.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn residue_orbit(seed: DigitSequence, modulus: u64, max_iter: usize) -> ResidueOrbit {
    let mut first_seen = std::collections::HashMap::new();
    let mut representatives = Vec::new();
    let mut repeat = None;

    for (iteration, n) in Orbit::new(seed).take(max_iter).enumerate() {
        let residue = n.residue(modulus);
        if let Some(&first) = first_seen.get(&residue) {
            repeat = Some(ResidueRepeat {
                iteration,
                first_seen: first,
            });
            break;
        }
        first_seen.insert(residue, iteration);
        representatives.push(ResidueRepresentative {
            residue,
            first_iteration: iteration,
            n,
        });
    }

    debug!(modulus, distinct = representatives.len(), ?repeat, "residue orbit");
    ResidueOrbit {
        modulus,
        representatives,
        repeat,
    }
}

/// Number of checks with the given classification.
pub fn count_classifications(
    checks: &[RepresentativeCheck],
    classification: Classification,
) -> usize {
    checks
        .iter()
        .filter(|check| check.record.classification == classification)
        .count()
}
