// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use lychrel_obstruction::digits::{DigitSequence, Orbit};

/// Parse a decimal literal that is known to be valid.
pub fn digits(s: &str) -> DigitSequence {
    s.parse().unwrap()
}

/// The first `count` iterates starting at `seed`.
pub fn orbit(seed: u64, count: usize) -> Vec<DigitSequence> {
    Orbit::new(DigitSequence::from_u64(seed)).take(count).collect()
}

/// A scratch path under the system temp dir, unique to this process and `name`.
pub fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("lychrel-{}-{}", std::process::id(), name))
}
