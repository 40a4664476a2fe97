//! Error types for the absorb-chain crate.

/// Error type for all fallible operations in the absorb-chain crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// Returned when the weight matrix has no rows.
    #[error("weight matrix is empty")]
    EmptyMatrix,

    /// Returned when a row's length does not match the number of rows.
    #[error("matrix is not square: row {row} has {got} entries, expected {expected}")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Expected row length (the number of rows).
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// Returned when a transition weight is negative.
    #[error("negative weight {value} at ({row}, {col})")]
    NegativeWeight {
        /// Zero-based row of the offending entry.
        row: usize,
        /// Zero-based column of the offending entry.
        col: usize,
        /// The negative weight.
        value: i64,
    },

    /// Returned when a rational is divided by zero. Validated input never
    /// triggers this.
    #[error("division by zero rational")]
    DivisionByZero,

    /// Returned when (I - Q) is not invertible, i.e. some transient state
    /// cannot reach absorption with probability 1.
    #[error("singular matrix: absorption is not guaranteed from every transient state")]
    SingularMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_matrix() {
        let e = ChainError::EmptyMatrix;
        assert_eq!(e.to_string(), "weight matrix is empty");
    }

    #[test]
    fn error_not_square() {
        let e = ChainError::NotSquare {
            row: 2,
            expected: 4,
            got: 3,
        };
        assert_eq!(
            e.to_string(),
            "matrix is not square: row 2 has 3 entries, expected 4"
        );
    }

    #[test]
    fn error_negative_weight() {
        let e = ChainError::NegativeWeight {
            row: 1,
            col: 0,
            value: -5,
        };
        assert_eq!(e.to_string(), "negative weight -5 at (1, 0)");
    }

    #[test]
    fn error_division_by_zero() {
        let e = ChainError::DivisionByZero;
        assert_eq!(e.to_string(), "division by zero rational");
    }

    #[test]
    fn error_singular_matrix() {
        let e = ChainError::SingularMatrix;
        assert_eq!(
            e.to_string(),
            "singular matrix: absorption is not guaranteed from every transient state"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ChainError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ChainError>();
    }
}
