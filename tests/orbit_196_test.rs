// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end certification of the orbit of 196.

mod common;

use lychrel_obstruction::certifier::{Certifier, Classification};
use lychrel_obstruction::constraints::JacobianMatrix;
use lychrel_obstruction::digits::{reverse_add, DigitSequence};
use lychrel_obstruction::ring::Prime;
use lychrel_obstruction::solver::rank_mod2;
use lychrel_obstruction::EngineConfig;

#[test]
fn test_196_orbit_is_never_ring_solvable() {
    let log = Certifier::default().certify_orbit(DigitSequence::from_u64(196), 50);
    assert_eq!(log.len(), 50);
    for logged in log.records() {
        let record = &logged.record;
        assert!(record.obstruction_mod2, "iteration {}: {}", logged.iteration, record.n);
        match record.classification {
            Classification::TheoreticalObstruction => assert!(record.jacobian.full_row_rank),
            Classification::NeedsEmpiricalCheck => {
                let empirical = record.empirical.expect("empirical check recorded");
                assert!(empirical.highest_level >= 1, "iteration {}", logged.iteration);
            }
            Classification::RingSolvable => {
                panic!("iteration {} reached a palindrome", logged.iteration)
            }
        }
    }
    assert_eq!(log.count(Classification::RingSolvable), 0);
    assert_eq!(log.first_ring_solvable(), None);
}

#[test]
fn test_196_orbit_with_odd_prime() {
    let config = EngineConfig {
        prime: Prime::new(5).unwrap(),
        hensel_levels: 8,
        ..EngineConfig::default()
    };
    let log = Certifier::new(config).certify_orbit(DigitSequence::from_u64(196), 20);
    assert_eq!(log.count(Classification::RingSolvable), 0);
    assert!(log.records().iter().all(|logged| logged.record.prime.get() == 5));
}

#[test]
fn test_196_jacobian_by_construction() {
    let a = DigitSequence::from_u64(196);
    let jacobian = JacobianMatrix::build(&a);
    assert_eq!(jacobian.constraints(), 1);

    // Pair (j = 0, k = 2): c_0 gets -10, c_1 gets -1, c_2 gets +10.
    let parities: Vec<i64> = jacobian.rows()[0].iter().map(|c| c.rem_euclid(2)).collect();
    assert_eq!(parities, vec![0, 1, 0, 0]);

    // A single row with a non-zero entry is independent.
    let nonzero_rows = jacobian
        .rows()
        .iter()
        .filter(|row| row.iter().any(|c| c.rem_euclid(2) != 0))
        .count();
    assert_eq!(rank_mod2(jacobian.rows()), nonzero_rows);
    assert_eq!(rank_mod2(jacobian.rows()), jacobian.constraints());
}

#[test]
fn test_jacobian_rank_grows_with_orbit() {
    for n in common::orbit(196, 40) {
        let summary = Certifier::jacobian_summary(&n);
        assert_eq!(summary.constraints, n.len() / 2);
        assert_eq!(summary.carries, n.len() + 1);
        assert!(summary.full_row_rank, "{}", n);
    }
}

#[test]
fn test_89_reaches_palindrome() {
    let log = Certifier::default().certify_orbit(DigitSequence::from_u64(89), 100);
    let last = log.last().unwrap();
    assert_eq!(last.record.classification, Classification::RingSolvable);
    assert_eq!(last.iteration, 23);
    assert_eq!(reverse_add(&last.record.n).result, common::digits("8813200023188"));
}
