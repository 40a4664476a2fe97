//! Exact absorption probabilities for finite absorbing Markov chains.
//!
//! Given a matrix of non-negative integer transition weights, this crate
//! computes the exact probability that the chain, started from state 0,
//! ends up in each absorbing state. All arithmetic is exact rational; the
//! answer comes back as integer numerators over one minimal common
//! denominator, with the denominator as the final element.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────┐   ┌────────────┐   ┌───────────────┐   ┌────────────┐
//!  │ transition │──▶│  classify  │──▶│     solve     │──▶│   format   │
//!  │ (weights→P)│   │ (split R,Q)│   │ N=(I-Q)⁻¹, NR │   │ (lcm row)  │
//!  └────────────┘   └────────────┘   └───────────────┘   └────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use num_bigint::BigInt;
//!
//! let weights = vec![
//!     vec![0, 2, 1, 0, 0],
//!     vec![0, 0, 0, 3, 4],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//! ];
//! let probs = absorb_chain::absorption_probabilities(&weights).unwrap();
//! // States 2, 3, 4 are absorbed into with probability 7/21, 6/21, 8/21.
//! let expected: Vec<BigInt> = [7, 6, 8, 21].map(BigInt::from).into();
//! assert_eq!(probs, expected);
//! ```

pub mod classify;
pub mod error;
pub mod format;
pub mod ratio;
pub mod solve;
pub mod transition;

pub use classify::{StandardForm, StateKind, classify, standard_form};
pub use error::ChainError;
pub use solve::{absorption_matrix, fundamental, invert};

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

/// Computes exact absorption probabilities from state 0.
///
/// Returns the numerators for each absorbing state in ascending original
/// index order, followed by their shared minimal common denominator. The
/// numerators always sum to the denominator.
///
/// A single-state chain is already absorbed, so `[[0]]` yields `[1, 1]`.
/// A start state that classifies as absorbing (a zero row at index 0 in a
/// larger chain) likewise short-circuits: probability 1 for its own
/// absorbing state, 0 for every other.
///
/// # Errors
///
/// * [`ChainError::EmptyMatrix`], [`ChainError::NotSquare`],
///   [`ChainError::NegativeWeight`] for malformed input.
/// * [`ChainError::SingularMatrix`] if some transient state cannot reach
///   absorption with probability 1.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigInt;
///
/// let probs = absorb_chain::absorption_probabilities(&[vec![0]]).unwrap();
/// assert_eq!(probs, vec![BigInt::from(1), BigInt::from(1)]);
/// ```
#[tracing::instrument(skip(weights), fields(n = weights.len()))]
pub fn absorption_probabilities(weights: &[Vec<i64>]) -> Result<Vec<BigInt>, ChainError> {
    let n = transition::validate(weights)?;
    if n == 1 {
        return Ok(vec![BigInt::one(), BigInt::one()]);
    }

    let p = transition::normalize(weights)?;
    let kinds = classify(&p);

    if kinds[0] == StateKind::Absorbing {
        // The walk never leaves state 0; its absorbing state gets all the
        // mass. State 0 sorts first among absorbing indices.
        let n_absorbing = kinds.iter().filter(|k| **k == StateKind::Absorbing).count();
        let mut out = vec![BigInt::zero(); n_absorbing];
        out[0] = BigInt::one();
        out.push(BigInt::one());
        return Ok(out);
    }

    let sf = standard_form(&p, &kinds);
    debug!(
        absorbing = sf.absorbing.len(),
        transient = sf.q.rows(),
        "standard form built"
    );

    let fund = fundamental(&sf.q)?;
    let b = absorption_matrix(&fund, &sf.r);
    debug!(start_row = sf.start, "absorption matrix computed");

    Ok(format::common_denominator(b.row(sf.start)))
}
