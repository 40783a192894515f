//! Inverse sine, cosine and tangent by bisection on the forward functions.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::FloatScalar;

use super::bisect::bisect;
use super::trig::{cos, sin, tan};
use super::{tolerance, MathError};

/// Residual at which the bisection accepts a midpoint, scaled by `max(1, |a|)`.
const INV_TRIG_TOL: f64 = 1e-8;

/// Below this magnitude `atan(a) = a`.
const ATAN_SMALL: f64 = 1e-5;

/// Above this magnitude `atan(a) = ±π/2 − 1/a`.
const ATAN_LARGE: f64 = 1e5;

/// Distance kept from the poles of `tan` when bracketing `atan`.
const ATAN_MARGIN: f64 = 1e-6;

/// Arcsine, for `a` in [-1, 1]; result in [-π/2, π/2].
///
/// Bisects [-π/2, π/2] using [`sin`] as the comparator. `a = ±1` returns the
/// endpoint `±π/2` exactly.
///
/// # Errors
///
/// [`MathError::DomainError`] outside [-1, 1] (NaN included),
/// [`MathError::ConvergenceFailure`] if the search stalls.
///
/// # Example
///
/// ```
/// use elemath::elementary::asin;
///
/// assert!(asin(0.0_f64).unwrap().abs() < 1e-8);
/// assert_eq!(asin(1.0_f64).unwrap(), core::f64::consts::FRAC_PI_2);
/// assert!(asin(1.5_f64).is_err());
/// ```
pub fn asin<T: FloatScalar>(a: T) -> Result<T, MathError> {
    let one = T::one();
    if !(a >= -one && a <= one) {
        return Err(MathError::DomainError);
    }

    let high = T::from(FRAC_PI_2).unwrap();
    let low = -high;
    if a == one {
        return Ok(high);
    }
    if a == -one {
        return Ok(low);
    }

    bisect(|t| Ok(sin(t)), a, low, high, true, tolerance(INV_TRIG_TOL))
}

/// Arccosine, for `a` in [-1, 1]; result in [0, π].
///
/// Bisects [0, π] using [`cos`] as the (decreasing) comparator. `a = 1` and
/// `a = -1` return `0` and `π` exactly.
///
/// # Errors
///
/// [`MathError::DomainError`] outside [-1, 1] (NaN included),
/// [`MathError::ConvergenceFailure`] if the search stalls.
///
/// # Example
///
/// ```
/// use elemath::elementary::acos;
///
/// assert_eq!(acos(1.0_f64).unwrap(), 0.0);
/// assert!((acos(0.5_f64).unwrap() - core::f64::consts::FRAC_PI_3).abs() < 1e-7);
/// ```
pub fn acos<T: FloatScalar>(a: T) -> Result<T, MathError> {
    let one = T::one();
    if !(a >= -one && a <= one) {
        return Err(MathError::DomainError);
    }

    let high = T::from(PI).unwrap();
    let low = T::zero();
    if a == -one {
        return Ok(high);
    }
    if a == one {
        return Ok(low);
    }

    bisect(|t| Ok(cos(t)), a, low, high, false, tolerance(INV_TRIG_TOL))
}

/// Arctangent, for any real `a`; result in (-π/2, π/2).
///
/// Shortcuts: `±∞` maps to `±π/2`, `|a| < 1e-5` returns `a` (small-angle
/// approximation), `|a| > 1e5` returns `±π/2 − 1/a` (asymptotic expansion).
/// Everything else bisects [`tan`] over `(-π/2 + 1e-6, π/2 − 1e-6)`, accepting
/// a residual of `1e-8 · max(1, |a|)`.
///
/// # Errors
///
/// [`MathError::DomainError`] for NaN, [`MathError::ConvergenceFailure`] if
/// the search stalls.
///
/// # Example
///
/// ```
/// use elemath::elementary::atan;
///
/// assert!((atan(1.0_f64).unwrap() - core::f64::consts::FRAC_PI_4).abs() < 1e-8);
/// assert_eq!(atan(f64::INFINITY).unwrap(), core::f64::consts::FRAC_PI_2);
/// assert_eq!(atan(1e-7_f64).unwrap(), 1e-7);
/// ```
pub fn atan<T: FloatScalar>(a: T) -> Result<T, MathError> {
    if a.is_nan() {
        return Err(MathError::DomainError);
    }

    let half_pi = T::from(FRAC_PI_2).unwrap();
    let signed_half_pi = if a > T::zero() { half_pi } else { -half_pi };
    if a.is_infinite() {
        return Ok(signed_half_pi);
    }
    if a.abs() < T::from(ATAN_SMALL).unwrap() {
        return Ok(a);
    }
    if a.abs() > T::from(ATAN_LARGE).unwrap() {
        return Ok(signed_half_pi - a.recip());
    }

    let high = half_pi - T::from(ATAN_MARGIN).unwrap();
    let low = -high;
    if tan(high)? == a {
        return Ok(high);
    }
    if tan(low)? == a {
        return Ok(low);
    }

    let tol = tolerance::<T>(INV_TRIG_TOL) * a.abs().max(T::one());
    bisect(tan::<T>, a, low, high, true, tol)
}
