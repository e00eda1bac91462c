// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Analyses around the obstruction engine: orbit residues modulo `M` and the
//! nilpotence of `I + R` modulo 2.

pub mod moduli;
pub mod nilpotence;

pub use moduli::{
    count_classifications, residue_orbit, RepresentativeCheck, ResidueOrbit, ResidueRepeat,
    ResidueRepresentative,
};
pub use nilpotence::{is_nilpotent_mod2, reversal_matrix, verify_up_to, NilpotenceFailure};
