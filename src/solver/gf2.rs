// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rank over GF(2) with bit-packed rows.
//!
//! Column `j` of a row is bit `j % 64` of word `j / 64`, so a row operation
//! is a word-wise XOR.

const WORD_BITS: usize = 64;

/// A row of a GF(2) matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitRow {
    words: Vec<u64>,
}

impl BitRow {
    /// A row of `columns` zero bits.
    pub fn zeros(columns: usize) -> Self {
        Self {
            words: vec![0; columns.div_ceil(WORD_BITS)],
        }
    }

    /// Pack the parities of integer coefficients.
    pub fn from_parities(row: &[i64]) -> Self {
        let mut bits = Self::zeros(row.len());
        for (j, &x) in row.iter().enumerate() {
            if x & 1 != 0 {
                bits.set(j);
            }
        }
        bits
    }

    pub fn get(&self, column: usize) -> bool {
        (self.words[column / WORD_BITS] >> (column % WORD_BITS)) & 1 != 0
    }

    pub fn set(&mut self, column: usize) {
        self.words[column / WORD_BITS] |= 1 << (column % WORD_BITS);
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// `self ^= other`.
    pub fn xor_assign(&mut self, other: &BitRow) {
        for (w, &o) in self.words.iter_mut().zip(&other.words) {
            *w ^= o;
        }
    }
}

/// Eliminate in place, returning the pivot column of each pivot row.
fn eliminate(rows: &mut [BitRow], columns: usize) -> Vec<usize> {
    let mut pivots = Vec::new();
    let mut rank = 0;
    for c in 0..columns {
        if rank == rows.len() {
            break;
        }
        let Some(pivot) = (rank..rows.len()).find(|&i| rows[i].get(c)) else {
            continue;
        };
        rows.swap(rank, pivot);
        let pivot_row = rows[rank].clone();
        for (i, row) in rows.iter_mut().enumerate() {
            if i != rank && row.get(c) {
                row.xor_assign(&pivot_row);
            }
        }
        pivots.push(c);
        rank += 1;
    }
    pivots
}

/// Rank modulo 2 of an integer matrix given as rows.
///
/// # Panics
///
/// Panics if the rows have different lengths.
pub fn rank_mod2<R: AsRef<[i64]>>(matrix: &[R]) -> usize {
    let Some(first) = matrix.first() else {
        return 0;
    };
    let columns = first.as_ref().len();
    let mut rows: Vec<BitRow> = matrix
        .iter()
        .map(|row| {
            let row = row.as_ref();
            assert_eq!(row.len(), columns, "ragged matrix");
            BitRow::from_parities(row)
        })
        .collect();
    eliminate(&mut rows, columns).len()
}

/// Pivot columns of the GF(2) elimination of packed rows.
///
/// The columns returned, one per pivot row, select a square submatrix that
/// is invertible modulo 2 whenever the rank equals the number of rows.
pub fn pivot_columns_mod2(mut rows: Vec<BitRow>, columns: usize) -> Vec<usize> {
    eliminate(&mut rows, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::JacobianMatrix;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        let empty: Vec<Vec<i64>> = Vec::new();
        assert_eq!(rank_mod2(&empty), 0);
    }

    #[test]
    fn test_small_ranks() {
        let identity: Vec<Vec<i64>> = vec![vec![1, 0], vec![0, 1]];
        assert_eq!(rank_mod2(&identity), 2);
        let dependent: Vec<Vec<i64>> = vec![vec![1, 1], vec![3, -1]];
        assert_eq!(rank_mod2(&dependent), 1);
        let even: Vec<Vec<i64>> = vec![vec![2, 4], vec![-10, 10]];
        assert_eq!(rank_mod2(&even), 0);
        let cycle: Vec<Vec<i64>> = vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]];
        assert_eq!(rank_mod2(&cycle), 2);
    }

    #[test]
    fn test_wide_rows_cross_word_boundary() {
        let columns = 150;
        let mut matrix = vec![vec![0i64; columns]; 3];
        matrix[0][3] = 1;
        matrix[0][130] = 1;
        matrix[1][130] = 1;
        matrix[2][3] = 1;
        assert_eq!(rank_mod2(&matrix), 2);
        let rows = matrix.iter().map(|r| BitRow::from_parities(r)).collect();
        assert_eq!(pivot_columns_mod2(rows, columns), vec![3, 130]);
    }

    #[test]
    fn test_jacobian_full_row_rank() {
        for d in 2..200 {
            let jac = JacobianMatrix::for_digit_count(d);
            assert_eq!(rank_mod2(jac.rows()), jac.constraints(), "d = {}", d);
        }
    }

    fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1usize..8, 1usize..90).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(-3i64..4, cols), rows)
        })
    }

    proptest! {
        #[test]
        fn prop_rank_invariant_under_row_permutation(
            matrix in matrix_strategy(),
            seed in any::<u64>(),
        ) {
            let mut permuted = matrix.clone();
            // Fisher-Yates driven by the seed
            let mut state = seed;
            for i in (1..permuted.len()).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                permuted.swap(i, j);
            }
            prop_assert_eq!(rank_mod2(&matrix), rank_mod2(&permuted));
        }

        #[test]
        fn prop_rank_invariant_under_row_addition(
            matrix in matrix_strategy(),
            ops in prop::collection::vec((any::<usize>(), any::<usize>()), 0..20),
        ) {
            let mut combined = matrix.clone();
            let n = combined.len();
            for (src, dst) in ops {
                let (src, dst) = (src % n, dst % n);
                if src == dst {
                    continue;
                }
                let source = combined[src].clone();
                for (x, s) in combined[dst].iter_mut().zip(source) {
                    *x += s;
                }
            }
            prop_assert_eq!(rank_mod2(&matrix), rank_mod2(&combined));
        }

        #[test]
        fn prop_rank_bounded(matrix in matrix_strategy()) {
            let rank = rank_mod2(&matrix);
            prop_assert!(rank <= matrix.len());
            prop_assert!(rank <= matrix[0].len());
        }
    }
}
