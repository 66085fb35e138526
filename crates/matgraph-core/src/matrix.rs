//! Dense square integer matrices.
//!
//! # Overview
//!
//! [`Matrix`] stores an `order × order` grid of `i64` in row-major order.
//! All algebra is pure: every operation returns a fresh matrix and never
//! aliases its inputs.
//!
//! Walk-count matrices grow exponentially with the power, so products and
//! sums saturate at the `i64` bounds instead of wrapping. A saturated entry
//! still reads as "nonzero" for [`Matrix::boolean_clamp`].
//!
//! # Panics
//!
//! Combining matrices of different orders is a programmer error. The binary
//! operations assert matching dimensions and panic otherwise.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GraphError;

/// A square, dense, row-major integer matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    order: usize,
    cells: Vec<i64>,
}

impl Matrix {
    /// An `order × order` matrix of zeros.
    #[must_use]
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            cells: vec![0; order * order],
        }
    }

    /// The unit matrix: ones on the diagonal, zeros elsewhere.
    #[must_use]
    pub fn identity(order: usize) -> Self {
        let mut m = Self::zeros(order);
        for i in 0..order {
            m.cells[i * order + i] = 1;
        }
        m
    }

    /// Build a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] for zero rows and
    /// [`GraphError::NotSquare`] when any row length differs from the row
    /// count.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GraphError> {
        let order = rows.len();
        if order == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut cells = Vec::with_capacity(order * order);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != order {
                return Err(GraphError::NotSquare {
                    row,
                    expected: order,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { order, cells })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    #[must_use]
    pub fn from_fn(order: usize, mut f: impl FnMut(usize, usize) -> i64) -> Self {
        let mut cells = Vec::with_capacity(order * order);
        for i in 0..order {
            for j in 0..order {
                cells.push(f(i, j));
            }
        }
        Self { order, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(
            row < self.order && col < self.order,
            "index ({row}, {col}) out of range for order {}",
            self.order
        );
        self.cells[row * self.order + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: i64) {
        self.cells[row * self.order + col] = value;
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        // `chunks(0)` panics, and an empty matrix has no rows anyway.
        self.cells.chunks(self.order.max(1))
    }

    /// Ordered pairs `(i, j)` whose entry is exactly `1`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 1)
            .map(|(idx, _)| (idx / self.order, idx % self.order))
    }

    // -----------------------------------------------------------------------
    // Algebra
    // -----------------------------------------------------------------------

    /// Integer matrix product `self · rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the orders differ.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        self.assert_same_order(rhs, "multiply");
        let n = self.order;
        let mut out = Self::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self.cells[i * n + k];
                if a == 0 {
                    continue;
                }
                for j in 0..n {
                    let idx = i * n + j;
                    let term = a.saturating_mul(rhs.cells[k * n + j]);
                    out.cells[idx] = out.cells[idx].saturating_add(term);
                }
            }
        }
        out
    }

    /// `self` multiplied by itself `k - 1` times; `power(1)` is a copy.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`.
    #[must_use]
    pub fn power(&self, k: u32) -> Self {
        assert!(k >= 1, "matrix power must be at least 1");
        let mut out = self.clone();
        for _ in 1..k {
            out = out.multiply(self);
        }
        out
    }

    /// Elementwise sum.
    ///
    /// # Panics
    ///
    /// Panics if the orders differ.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        self.assert_same_order(rhs, "add");
        self.zip_with(rhs, i64::saturating_add)
    }

    /// Elementwise (Hadamard) product.
    ///
    /// # Panics
    ///
    /// Panics if the orders differ.
    #[must_use]
    pub fn hadamard(&self, rhs: &Self) -> Self {
        self.assert_same_order(rhs, "hadamard");
        self.zip_with(rhs, i64::saturating_mul)
    }

    /// Rows become columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.order, |i, j| self.cells[j * self.order + i])
    }

    /// Map every nonzero entry to `1` and everything else to `0`.
    #[must_use]
    pub fn boolean_clamp(&self) -> Self {
        Self {
            order: self.order,
            cells: self.cells.iter().map(|&v| i64::from(v != 0)).collect(),
        }
    }

    /// `true` when `m[i][j] == m[j][i]` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.order;
        (0..n).all(|i| (i + 1..n).all(|j| self.cells[i * n + j] == self.cells[j * n + i]))
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        Self {
            order: self.order,
            cells: self
                .cells
                .iter()
                .zip(&rhs.cells)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    fn assert_same_order(&self, rhs: &Self, op: &str) {
        assert_eq!(
            self.order, rhs.order,
            "{op}: matrix orders differ ({} vs {})",
            self.order, rhs.order
        );
    }
}

// ---------------------------------------------------------------------------
// Serde: a list of rows
// ---------------------------------------------------------------------------

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<i64>>::deserialize(deserializer)?;
        Self::from_rows(&rows).map_err(D::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
