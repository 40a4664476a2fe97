//! Common-denominator formatting of a probability row.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Rewrites a row of exact rationals over one minimal common denominator.
///
/// Returns the scaled numerators in input order, followed by the
/// denominator: the least common multiple of the row's denominators,
/// computed by pairwise gcd reduction. An empty row yields `[1]` (the
/// denominator alone); zeros map to numerator 0. The denominator is
/// always at least 1.
pub fn common_denominator(row: &[BigRational]) -> Vec<BigInt> {
    let lcm = row
        .iter()
        .fold(BigInt::one(), |acc, v| acc.lcm(v.denom()));

    let mut out: Vec<BigInt> = row
        .iter()
        .map(|v| {
            if v.is_zero() {
                BigInt::zero()
            } else {
                v.numer() * &lcm / v.denom()
            }
        })
        .collect();
    out.push(lcm);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn big(vals: &[i64]) -> Vec<BigInt> {
        vals.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn scales_to_shared_denominator() {
        let row = [rat(1, 3), rat(2, 7), rat(8, 21)];
        assert_eq!(common_denominator(&row), big(&[7, 6, 8, 21]));
    }

    #[test]
    fn zeros_stay_zero() {
        let row = [rat(0, 1), rat(1, 2)];
        assert_eq!(common_denominator(&row), big(&[0, 1, 2]));
    }

    #[test]
    fn lcm_is_minimal_not_product() {
        let row = [rat(1, 4), rat(1, 6)];
        // lcm(4, 6) = 12, not 24.
        assert_eq!(common_denominator(&row), big(&[3, 2, 12]));
    }

    #[test]
    fn integers_use_denominator_one() {
        let row = [rat(1, 1)];
        assert_eq!(common_denominator(&row), big(&[1, 1]));
    }

    #[test]
    fn numerators_sum_to_denominator_for_probability_rows() {
        let row = [rat(1, 2), rat(1, 3), rat(1, 6)];
        let out = common_denominator(&row);
        let denom = out.last().unwrap().clone();
        let sum: BigInt = out[..out.len() - 1].iter().sum();
        assert_eq!(sum, denom);
    }
}
