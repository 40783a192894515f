//! Sine and cosine by Maclaurin series, and the four derived ratios.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::combinatorics::factorial_f;
use crate::FloatScalar;

use super::powi_fn::powi;
use super::{tolerance, MathError, TRIG_TERMS};

/// Half-width of the band around a pole in which tan/sec/csc/cot refuse to
/// evaluate, for angles of order one.
const POLE_TOL: f64 = 1e-12;

/// Reduction error allowance, in ulps of the input angle, added to the pole
/// band for large angles.
const REDUCTION_ULPS: f64 = 4.0;

/// Map a finite angle into [-π, π].
///
/// One subtraction of the nearest multiple of 2π, then the same single-step
/// corrections the series relies on. Past roughly 2^52·π the reduced angle
/// carries no significant bits.
fn reduce<T: FloatScalar>(theta: T) -> T {
    let pi = T::from(PI).unwrap();
    let tau = T::from(TAU).unwrap();

    let k = ((theta + pi) / tau).floor();
    let mut theta = theta - k * tau;
    if theta > pi {
        theta = theta - tau;
    }
    if theta < -pi {
        theta = theta + tau;
    }
    theta
}

/// Reduce for the pole-guarded functions; infinities and NaN are a domain error.
///
/// Also returns the pole band for this angle: `POLE_TOL`, widened to a few
/// ulps of `|theta|` once subtracting `k·2π` can lose more than that.
fn reduce_checked<T: FloatScalar>(theta: T) -> Result<(T, T), MathError> {
    if !theta.is_finite() {
        return Err(MathError::DomainError);
    }
    let slack = theta.abs() * T::epsilon() * T::from(REDUCTION_ULPS).unwrap();
    Ok((reduce(theta), tolerance::<T>(POLE_TOL).max(slack)))
}

#[inline]
fn near<T: FloatScalar>(a: T, b: T, band: T) -> bool {
    (a - b).abs() < band
}

/// cos θ = 1 + Σ_{n=1}^{13} (−1)^n θ^{2n} / (2n)!, θ already in [-π, π].
fn cos_series<T: FloatScalar>(theta: T) -> T {
    let mut approx = T::one();
    for n in 1..=TRIG_TERMS {
        let term = powi(theta, (2 * n) as i32) / factorial_f::<T>(2 * n);
        approx = if n % 2 == 0 { approx + term } else { approx - term };
    }
    approx
}

/// sin θ = Σ_{n=1}^{13} (−1)^{n+1} θ^{2n−1} / (2n−1)!, θ already in [-π, π].
fn sin_series<T: FloatScalar>(theta: T) -> T {
    let mut approx = T::zero();
    for n in 1..=TRIG_TERMS {
        let term = powi(theta, (2 * n - 1) as i32) / factorial_f::<T>(2 * n - 1);
        approx = if n % 2 == 1 { approx + term } else { approx - term };
    }
    approx
}

/// Cosine of `theta` (radians).
///
/// Range-reduces into [-π, π] and sums a 26th-degree Maclaurin polynomial.
/// Non-finite input gives NaN.
///
/// # Example
///
/// ```
/// use elemath::elementary::cos;
///
/// assert_eq!(cos(0.0_f64), 1.0);
/// assert!((cos(core::f64::consts::PI) + 1.0).abs() < 1e-12);
/// assert!((cos(7.0_f64) - 7.0_f64.cos()).abs() < 1e-10);
/// ```
pub fn cos<T: FloatScalar>(theta: T) -> T {
    if !theta.is_finite() {
        return T::nan();
    }
    cos_series(reduce(theta))
}

/// Sine of `theta` (radians).
///
/// Range-reduces into [-π, π] and sums a 25th-degree Maclaurin polynomial.
/// Non-finite input gives NaN.
///
/// # Example
///
/// ```
/// use elemath::elementary::sin;
///
/// assert_eq!(sin(0.0_f64), 0.0);
/// assert!((sin(core::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
/// assert!((sin(-10.0_f64) - (-10.0_f64).sin()).abs() < 1e-10);
/// ```
pub fn sin<T: FloatScalar>(theta: T) -> T {
    if !theta.is_finite() {
        return T::nan();
    }
    sin_series(reduce(theta))
}

/// Tangent, `sin θ / cos θ`.
///
/// # Errors
///
/// [`MathError::DomainError`] within `1e-12` of an odd multiple of π/2 after
/// range reduction, or for non-finite input. For large angles the band widens
/// to `4·ε·|θ|`, the error the reduction itself can introduce.
///
/// # Example
///
/// ```
/// use elemath::elementary::tan;
///
/// assert!((tan(core::f64::consts::FRAC_PI_4).unwrap() - 1.0).abs() < 1e-12);
/// assert!(tan(core::f64::consts::FRAC_PI_2).is_err());
/// ```
pub fn tan<T: FloatScalar>(theta: T) -> Result<T, MathError> {
    let (t, band) = reduce_checked(theta)?;
    if near(t.abs(), T::from(FRAC_PI_2).unwrap(), band) {
        return Err(MathError::DomainError);
    }
    Ok(sin_series(t) / cos_series(t))
}

/// Secant, `1 / cos θ`.
///
/// # Errors
///
/// [`MathError::DomainError`] within `1e-12` (or `4·ε·|θ|`, if larger) of an
/// odd multiple of π/2, or for non-finite input.
pub fn sec<T: FloatScalar>(theta: T) -> Result<T, MathError> {
    let (t, band) = reduce_checked(theta)?;
    if near(t.abs(), T::from(FRAC_PI_2).unwrap(), band) {
        return Err(MathError::DomainError);
    }
    Ok(T::one() / cos_series(t))
}

/// Cosecant, `1 / sin θ`.
///
/// # Errors
///
/// [`MathError::DomainError`] within `1e-12` (or `4·ε·|θ|`, if larger) of a
/// multiple of π, or for non-finite input.
pub fn csc<T: FloatScalar>(theta: T) -> Result<T, MathError> {
    let (t, band) = reduce_checked(theta)?;
    if at_multiple_of_pi(t, band) {
        return Err(MathError::DomainError);
    }
    Ok(T::one() / sin_series(t))
}

/// Cotangent, `cos θ / sin θ`.
///
/// # Errors
///
/// [`MathError::DomainError`] within `1e-12` (or `4·ε·|θ|`, if larger) of a
/// multiple of π, or for non-finite input.
///
/// # Example
///
/// ```
/// use elemath::elementary::cot;
///
/// assert!((cot(core::f64::consts::FRAC_PI_4).unwrap() - 1.0).abs() < 1e-12);
/// assert!(cot(0.0_f64).is_err());
/// ```
pub fn cot<T: FloatScalar>(theta: T) -> Result<T, MathError> {
    let (t, band) = reduce_checked(theta)?;
    if at_multiple_of_pi(t, band) {
        return Err(MathError::DomainError);
    }
    Ok(cos_series(t) / sin_series(t))
}

fn at_multiple_of_pi<T: FloatScalar>(t: T, band: T) -> bool {
    let t = t.abs();
    near(t, T::zero(), band) || near(t, T::from(PI).unwrap(), band)
}
