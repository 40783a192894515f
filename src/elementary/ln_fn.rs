//! Natural logarithm by bisection on the exponential.

use crate::FloatScalar;

use super::bisect::bisect;
use super::exp_fn::exp;
use super::{tolerance, MathError};

/// Relative stopping tolerance: `|exp(t) − x| < LN_TOL · x`.
const LN_TOL: f64 = 1e-11;

/// Exponent `k` of the first power of two past `x`, walking away from 1.
///
/// For `x >= 1` the smallest `k` with `2^k > x`, otherwise the largest `k`
/// with `2^k < x`. Since `log2 x` exceeds `ln x` in magnitude this is the
/// far end of the bracket.
fn doubling_bound<T: FloatScalar>(x: T) -> i32 {
    let two = T::one() + T::one();
    let mut k = 0;
    let mut t = T::one();
    if x < T::one() {
        while t >= x {
            t = t / two;
            k -= 1;
        }
    } else {
        while t <= x {
            t = t * two;
            k += 1;
        }
    }
    k
}

/// Exponent `k` of the last power of three before crossing `x`.
///
/// For `x >= 1` the largest `k` with `3^k <= x`, otherwise the smallest `k`
/// with `3^k >= x`. Since `log3 x` is smaller than `ln x` in magnitude this is
/// the near end of the bracket.
fn tripling_bound<T: FloatScalar>(x: T) -> i32 {
    let three = T::from(3).unwrap();
    let mut k = 0;
    let mut t = T::one();
    if x < T::one() {
        while t / three >= x {
            t = t / three;
            k -= 1;
        }
    } else {
        while t * three <= x {
            t = t * three;
            k += 1;
        }
    }
    k
}

/// Natural logarithm ln(x), for x > 0.
///
/// `ln(1)` is exactly zero. Otherwise the integer bracket
/// `[log3-bound, log2-bound]` is located by geometric search and bisected,
/// evaluating [`exp`] at each midpoint until it matches `x` to a relative
/// tolerance of `1e-11`.
///
/// # Errors
///
/// Returns [`MathError::DomainError`] for `x <= 0`, NaN, or infinity, and
/// [`MathError::ConvergenceFailure`] if the bisection stalls.
///
/// # Example
///
/// ```
/// use elemath::elementary::ln;
///
/// assert_eq!(ln(1.0_f64).unwrap(), 0.0);
/// assert!((ln(10.0_f64).unwrap() - core::f64::consts::LN_10).abs() < 1e-10);
/// assert!(ln(0.0_f64).is_err());
/// ```
pub fn ln<T: FloatScalar>(x: T) -> Result<T, MathError> {
    let one = T::one();

    if x.is_nan() || x.is_infinite() || x <= T::zero() {
        return Err(MathError::DomainError);
    }
    if x == one {
        return Ok(T::zero());
    }

    let (near, far) = (tripling_bound(x), doubling_bound(x));
    let (lo, hi) = if x > one { (near, far) } else { (far, near) };

    bisect(
        |t| Ok(exp(t)),
        x,
        T::from(lo).unwrap(),
        T::from(hi).unwrap(),
        true,
        tolerance::<T>(LN_TOL) * x,
    )
}
