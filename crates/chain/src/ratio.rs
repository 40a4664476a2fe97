//! Checked construction and division for exact rationals.
//!
//! [`BigRational`] keeps values reduced with a positive denominator, but its
//! constructor and `Div` impl panic on a zero denominator. The pipeline only
//! ever divides by values it has already checked, so these wrappers exist to
//! turn that class of bug into [`ChainError::DivisionByZero`] instead of a
//! panic.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::ChainError;

/// Builds a reduced rational `numer / denom` from any integer width.
///
/// # Errors
///
/// Returns [`ChainError::DivisionByZero`] if `denom` is zero.
pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<BigRational, ChainError> {
    let denom: BigInt = denom.into();
    if denom.is_zero() {
        return Err(ChainError::DivisionByZero);
    }
    Ok(BigRational::new(numer.into(), denom))
}

/// Exact division `a / b`.
///
/// # Errors
///
/// Returns [`ChainError::DivisionByZero`] if `b` is zero.
pub fn div(a: &BigRational, b: &BigRational) -> Result<BigRational, ChainError> {
    if b.is_zero() {
        return Err(ChainError::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn new_reduces_and_fixes_sign() {
        let r = new(2, -4).unwrap();
        assert_eq!(r, new(-1, 2).unwrap());
        assert!(r.denom() > &BigInt::zero());
    }

    #[test]
    fn new_rejects_zero_denominator() {
        assert_eq!(new(1, 0), Err(ChainError::DivisionByZero));
    }

    #[test]
    fn div_exact() {
        let a = new(3, 4).unwrap();
        let b = new(3, 2).unwrap();
        assert_eq!(div(&a, &b).unwrap(), new(1, 2).unwrap());
    }

    #[test]
    fn div_by_zero_fails() {
        let a = BigRational::one();
        let z = BigRational::zero();
        assert_eq!(div(&a, &z), Err(ChainError::DivisionByZero));
    }
}
