//! State classification and standard-form reordering.
//!
//! An absorbing chain's transition matrix splits into blocks once absorbing
//! states are grouped ahead of transient ones:
//!
//! ```text
//!          absorbing  transient
//!        ┌──────────┬──────────┐
//! abs.   │    I     │    0     │
//!        ├──────────┼──────────┤
//! trans. │    R     │    Q     │
//!        └──────────┴──────────┘
//! ```
//!
//! The permutation is built from explicit classified index sets, applied
//! identically to rows and columns, so each block keeps its states in
//! ascending original order regardless of where they sat in the input.

use absorb_matrix::Matrix;
use num_traits::{One, Zero};

/// Classification of a single state of the normalized chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// A true self-loop: exactly one non-zero transition, equal to 1, on the
    /// diagonal. Once entered, never left.
    Absorbing,
    /// Any other state; left for good with probability 1 in a well-formed
    /// absorbing chain.
    Transient,
}

/// The transition matrix in standard form, sliced into its live blocks.
#[derive(Debug, Clone)]
pub struct StandardForm {
    /// Transient-to-absorbing one-step probabilities (`t x a`).
    pub r: Matrix,
    /// Transient-to-transient one-step probabilities (`t x t`).
    pub q: Matrix,
    /// Original indices of the absorbing states, ascending.
    pub absorbing: Vec<usize>,
    /// Position of original state 0 within the transient block.
    pub start: usize,
}

/// Classifies every state of a normalized transition matrix.
///
/// A row counts as absorbing only if its single non-zero entry is an exact 1
/// sitting on the diagonal. A transient state can have a single non-zero
/// entry too (one certain move to a *different* state), so the count alone
/// is not enough.
pub fn classify(p: &Matrix) -> Vec<StateKind> {
    (0..p.rows())
        .map(|i| {
            let row = p.row(i);
            let nonzero = row.iter().filter(|v| !v.is_zero()).count();
            if nonzero == 1 && row[i].is_one() {
                StateKind::Absorbing
            } else {
                StateKind::Transient
            }
        })
        .collect()
}

/// Reorders a normalized matrix into standard form and slices out R and Q.
///
/// # Panics
///
/// Panics if `kinds` marks state 0 absorbing; callers short-circuit such
/// chains before reaching this point.
pub fn standard_form(p: &Matrix, kinds: &[StateKind]) -> StandardForm {
    let absorbing: Vec<usize> = (0..p.rows())
        .filter(|&i| kinds[i] == StateKind::Absorbing)
        .collect();
    let transient: Vec<usize> = (0..p.rows())
        .filter(|&i| kinds[i] == StateKind::Transient)
        .collect();
    let start = transient
        .iter()
        .position(|&i| i == 0)
        .expect("state 0 must be transient");

    // R and Q are the only blocks the solver consumes; the absorbing rows
    // reorder to [I | 0] and are never materialized.
    let r = p.submatrix(&transient, &absorbing);
    let q = p.submatrix(&transient, &transient);

    StandardForm {
        r,
        q,
        absorbing,
        start,
    }
}
