//! Lagrange evaluation of the interpolating polynomial at zero.

use num_bigint::BigInt;
use num_traits::One;

use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::share::Point;

/// Constant term f(0) of the unique degree-(k-1) polynomial through `points`.
///
/// # Formula
/// For points (x_1, y_1), ..., (x_k, y_k) with pairwise distinct x,
/// ```text
/// f(0) = Σ_i y_i · L_i(0),   L_i(0) = Π_{j≠i} (0 - x_j) / (x_i - x_j)
/// ```
/// Every term is carried as an exact [`Rational`]; nothing is ever rounded,
/// so the result is bit-exact for operands of any magnitude. A share set
/// genuinely sampled from an integer polynomial always sums to a fraction
/// with denominator one; anything else is reported as
/// [`Error::InconsistentShares`].
pub fn constant_term(points: &[Point]) -> Result<BigInt> {
    if points.is_empty() {
        return Err(Error::InsufficientShares {
            threshold: 1,
            available: 0,
        });
    }
    // A repeated x-coordinate would put a zero denominator in L_i(0);
    // refuse it up front rather than trip over the division below.
    for (i, p) in points.iter().enumerate() {
        for q in &points[..i] {
            if p.x == q.x {
                return Err(Error::DuplicatePoint { x: p.x.clone() });
            }
        }
    }

    let mut sum = Rational::zero();
    for (i, pi) in points.iter().enumerate() {
        // numerator = y_i · Π_{j≠i} (-x_j), denominator = Π_{j≠i} (x_i - x_j)
        let mut num = BigInt::one();
        let mut den = BigInt::one();
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            num = num * (-&pj.x);
            den = den * (&pi.x - &pj.x);
        }
        sum = sum + &Rational::new(&pi.y * num, den);
    }

    match sum.to_integer() {
        Some(secret) => Ok(secret),
        None => Err(Error::InconsistentShares {
            numerator: sum.numerator().clone(),
            denominator: sum.denominator().clone(),
        }),
    }
}
