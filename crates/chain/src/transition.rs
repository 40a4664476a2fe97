//! Weight validation and row-stochastic normalization.

use absorb_matrix::Matrix;
use num_traits::One;

use crate::error::ChainError;
use crate::ratio;

/// Validates a raw weight matrix and returns its dimension.
///
/// # Errors
///
/// Returns [`ChainError::EmptyMatrix`] for zero rows,
/// [`ChainError::NotSquare`] if any row length differs from the number of
/// rows, and [`ChainError::NegativeWeight`] for a negative entry.
pub fn validate(weights: &[Vec<i64>]) -> Result<usize, ChainError> {
    let n = weights.len();
    if n == 0 {
        return Err(ChainError::EmptyMatrix);
    }
    for (i, row) in weights.iter().enumerate() {
        if row.len() != n {
            return Err(ChainError::NotSquare {
                row: i,
                expected: n,
                got: row.len(),
            });
        }
        for (j, &w) in row.iter().enumerate() {
            if w < 0 {
                return Err(ChainError::NegativeWeight {
                    row: i,
                    col: j,
                    value: w,
                });
            }
        }
    }
    Ok(n)
}

/// Converts validated weights into a row-stochastic transition matrix.
///
/// Each entry of a row becomes `weight / row_sum`, exactly. A zero row has
/// no outgoing transitions; staying put forever is the same as moving to
/// itself with probability 1, so it is rewritten as a self-loop. Every row
/// of the result sums to exactly 1.
///
/// # Errors
///
/// Returns [`ChainError::DivisionByZero`] only if an entry is divided by a
/// zero row sum, which the zero-row rewrite rules out.
pub fn normalize(weights: &[Vec<i64>]) -> Result<Matrix, ChainError> {
    let n = weights.len();
    let mut p = Matrix::zeros(n, n);
    for (i, row) in weights.iter().enumerate() {
        // A row of i64 weights can sum past i64::MAX; widen first.
        let sum: i128 = row.iter().map(|&w| i128::from(w)).sum();
        if sum == 0 {
            p[(i, i)] = One::one();
            continue;
        }
        for (j, &w) in row.iter().enumerate() {
            if w != 0 {
                p[(i, j)] = ratio::new(w, sum)?;
            }
        }
    }
    Ok(p)
}
