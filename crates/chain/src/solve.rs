//! Exact Gauss-Jordan inversion and the fundamental matrix.

use absorb_matrix::Matrix;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::ChainError;
use crate::ratio;

/// Inverts a square matrix by Gauss-Jordan elimination on `[m | I]`.
///
/// Per column the remaining row with the largest absolute pivot is selected.
/// Exact arithmetic needs no pivoting for correctness; picking the largest
/// pivot keeps intermediate numerators and denominators small. Singularity
/// is an exact-zero pivot, never an epsilon test.
///
/// # Errors
///
/// Returns [`ChainError::SingularMatrix`] if `m` has no inverse.
///
/// # Panics
///
/// Panics if `m` is not square.
pub fn invert(m: &Matrix) -> Result<Matrix, ChainError> {
    assert!(m.is_square(), "invert requires a square matrix");
    let n = m.rows();

    // Augmented rows [m | I], kept as vectors so row swaps are cheap.
    let mut aug: Vec<Vec<BigRational>> = (0..n)
        .map(|i| {
            let mut row = m.row(i).to_vec();
            row.extend((0..n).map(|j| {
                if i == j {
                    BigRational::one()
                } else {
                    BigRational::zero()
                }
            }));
            row
        })
        .collect();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| aug[a][col].abs().cmp(&aug[b][col].abs()))
            .expect("column range is non-empty");
        if aug[pivot_row][col].is_zero() {
            return Err(ChainError::SingularMatrix);
        }
        aug.swap(col, pivot_row);

        // Scale the pivot row to a unit pivot.
        let pivot = aug[col][col].clone();
        for x in aug[col].iter_mut().skip(col) {
            *x = ratio::div(x, &pivot)?;
        }

        // Eliminate the column from every other row.
        let pivot_vals = aug[col].clone();
        for (row, row_vals) in aug.iter_mut().enumerate() {
            if row == col || row_vals[col].is_zero() {
                continue;
            }
            let factor = row_vals[col].clone();
            for x in col..2 * n {
                row_vals[x] -= &factor * &pivot_vals[x];
            }
        }
    }

    Ok(Matrix::from_rows(
        aug.into_iter().map(|row| row[n..].to_vec()).collect(),
    ))
}

/// Computes the fundamental matrix `N = (I - Q)^-1`.
///
/// `N[i][j]` is the expected number of visits to transient state `j`
/// starting from transient state `i` before absorption.
///
/// # Errors
///
/// Returns [`ChainError::SingularMatrix`] if `I - Q` is not invertible,
/// i.e. the chain holds a closed set of transient states that can never
/// reach absorption.
pub fn fundamental(q: &Matrix) -> Result<Matrix, ChainError> {
    invert(&Matrix::identity(q.rows()).sub(q))
}

/// Computes the absorption matrix `B = N * R`.
///
/// `B[i][j]` is the exact probability of being absorbed into the `j`-th
/// absorbing state starting from the `i`-th transient state.
pub fn absorption_matrix(n: &Matrix, r: &Matrix) -> Matrix {
    n.mul(r)
}
