// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense matrices over `Z/mZ`.

use super::Modulus;
use std::fmt;

/// A dense row-major matrix of residues in `[0, m)`.
///
/// Rows are constraints, columns are unknowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMatrix {
    modulus: Modulus,
    rows: usize,
    cols: usize,
    data: Vec<u64>,
}

impl ModMatrix {
    /// An all-zero matrix.
    pub fn zeros(modulus: Modulus, rows: usize, cols: usize) -> Self {
        Self {
            modulus,
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build from signed integer rows, reducing every entry.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_signed_rows<R: AsRef<[i64]>>(modulus: Modulus, rows: &[R], cols: usize) -> Self {
        let mut matrix = Self::zeros(modulus, rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "row {} has {} entries, expected {}", i, row.len(), cols);
            for (j, &x) in row.iter().enumerate() {
                matrix.set(i, j, modulus.reduce(x));
            }
        }
        matrix
    }

    /// The `n x n` identity.
    pub fn identity(modulus: Modulus, n: usize) -> Self {
        let mut matrix = Self::zeros(modulus, n, n);
        for i in 0..n {
            matrix.set(i, i, 1);
        }
        matrix
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data[row * self.cols + col]
    }

    /// Set an entry, reducing it modulo `m`.
    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.data[row * self.cols + col] = value % self.modulus.get();
    }

    /// Add a signed amount to an entry.
    pub fn add_signed(&mut self, row: usize, col: usize, amount: i64) {
        let m = self.modulus.get();
        let current = self.get(row, col);
        self.set(row, col, (current + self.modulus.reduce(amount)) % m);
    }

    pub fn row(&self, row: usize) -> &[u64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Matrix-vector product modulo `m`.
    pub fn mul_vec(&self, x: &[u64]) -> Vec<u64> {
        assert_eq!(x.len(), self.cols, "vector length does not match column count");
        let m = u128::from(self.modulus.get());
        (0..self.rows)
            .map(|i| {
                let sum = self
                    .row(i)
                    .iter()
                    .zip(x)
                    .fold(0u128, |acc, (&a, &b)| (acc + u128::from(a) * u128::from(b)) % m);
                sum as u64
            })
            .collect()
    }

    /// Matrix product modulo `m`.
    ///
    /// # Panics
    ///
    /// Panics on a dimension or modulus mismatch.
    pub fn mul(&self, other: &ModMatrix) -> ModMatrix {
        assert_eq!(self.modulus, other.modulus, "cannot multiply matrices over different rings");
        assert_eq!(self.cols, other.rows, "inner dimensions differ");
        let m = u128::from(self.modulus.get());
        let mut product = ModMatrix::zeros(self.modulus, self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let sum = (0..self.cols).fold(0u128, |acc, k| {
                    (acc + u128::from(self.get(i, k)) * u128::from(other.get(k, j))) % m
                });
                product.set(i, j, sum as u64);
            }
        }
        product
    }

    /// Entry-wise sum modulo `m`.
    pub fn add(&self, other: &ModMatrix) -> ModMatrix {
        assert_eq!(self.modulus, other.modulus, "cannot add matrices over different rings");
        assert_eq!((self.rows, self.cols), (other.rows, other.cols), "dimensions differ");
        let m = self.modulus.get();
        ModMatrix {
            modulus: self.modulus,
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(&other.data).map(|(a, b)| (a + b) % m).collect(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0)
    }
}

impl fmt::Display for ModMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let row: Vec<String> = self.row(i).iter().map(u64::to_string).collect();
            writeln!(f, "[{}]", row.join(" "))?;
        }
        write!(f, "(mod {})", self.modulus)
    }
}
