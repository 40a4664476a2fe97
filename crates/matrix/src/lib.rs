//! Dense matrices over exact rationals.
//!
//! Every entry is a [`BigRational`], so arithmetic never rounds and row sums,
//! pivots and probabilities compare exactly. Matrices are plain value types:
//! operations return freshly allocated results and never alias rows of their
//! inputs.

use std::ops::{Index, IndexMut};

use num_rational::BigRational;
use num_traits::{One, Zero};

/// A dense `rows x cols` matrix of exact rationals, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<BigRational>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix filled with exact zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![BigRational::zero(); rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = BigRational::one();
        }
        m
    }

    /// Builds a matrix from rows of rationals.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<BigRational>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            assert_eq!(row.len(), n_cols, "ragged rows");
            data.extend(row);
        }
        Self {
            rows: n_rows,
            cols: n_cols,
            data,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrows row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &[BigRational] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Standard matrix product.
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.rows()`.
    pub fn mul(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.cols, rhs.rows,
            "dimension mismatch: {}x{} * {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = BigRational::zero();
                for k in 0..self.cols {
                    acc += &self[(i, k)] * &rhs[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        out
    }

    /// Entry-wise difference `self - rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn sub(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "dimension mismatch"
        );
        let mut out = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(i, j)] = &self[(i, j)] - &rhs[(i, j)];
            }
        }
        out
    }

    /// Extracts the submatrix with the given rows and columns, in the given
    /// order. Indices may repeat; this also serves as a symmetric permutation
    /// when both index lists are the same permutation of `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn submatrix(&self, row_idx: &[usize], col_idx: &[usize]) -> Matrix {
        let mut out = Matrix::zeros(row_idx.len(), col_idx.len());
        for (i, &r) in row_idx.iter().enumerate() {
            for (j, &c) in col_idx.iter().enumerate() {
                out[(i, j)] = self[(r, c)].clone();
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = BigRational;

    fn index(&self, (i, j): (usize, usize)) -> &BigRational {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut BigRational {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range");
        &mut self.data[i * self.cols + j]
    }
}
