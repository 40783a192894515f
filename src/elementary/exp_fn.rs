//! Exponential `e^x` and real powers `base^y`.

use crate::FloatScalar;

use super::ln_fn::ln;
use super::powi_fn::powi;
use super::{round_half_up, MathError, EXP_TERMS, POWF_TERMS};

/// Truncated Taylor series of `e^r`: Σ_{i=0}^{terms-1} r^i / i!.
///
/// Horner form `1 + r(1 + r/2(1 + r/3(…)))`, so no power or factorial is
/// evaluated per term.
#[inline]
pub(crate) fn exp_series<T: FloatScalar>(r: T, terms: u32) -> T {
    let one = T::one();
    let mut acc = one;
    for i in (1..terms).rev() {
        acc = one + r * acc / T::from(i).unwrap();
    }
    acc
}

/// Exponential function `e^x`.
///
/// Splits `x = n + r` with `n` the nearest integer (halves round up) and
/// `r ∈ [-0.5, 0.5)`, then returns `e^n · e^r`: the integer part through
/// [`powi`] on Euler's number, the residual through a 13-term Taylor series.
/// For `n > 0` the residual factor is folded in before the last power of
/// `e`, so results up to the type's largest finite value do not overflow
/// early. NaN passes through; arguments too large for an `i32` exponent
/// saturate to `+∞` or `0`.
///
/// # Example
///
/// ```
/// use elemath::elementary::exp;
///
/// assert_eq!(exp(0.0_f64), 1.0);
/// assert!((exp(1.0_f64) - core::f64::consts::E).abs() < 1e-14);
/// assert!((exp(-2.3_f64) - 0.10025884372280375).abs() < 1e-12);
/// assert!(exp(709.7_f64).is_finite());
/// ```
pub fn exp<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let n = match round_half_up(x) {
        Some(n) => n,
        None if x > T::zero() => return T::infinity(),
        None => return T::zero(),
    };
    let r = x - T::from(n).unwrap();
    let e = T::from(core::f64::consts::E).unwrap();

    let tail = exp_series(r, EXP_TERMS);
    if n > 0 {
        powi(e, n - 1) * (e * tail)
    } else {
        powi(e, n) * tail
    }
}

/// `base` raised to the real power `y`.
///
/// Euler's number as base delegates to [`exp`]. Integral exponents go straight
/// to [`powi`], so negative and zero bases are fine there. Otherwise, with `n`
/// the nearest integer to `y`, returns
/// `base^n · Σ_{i=0}^{7} (ln(base)·(y − n))^i / i!`,
/// a Taylor expansion of `base^(y − n)` around the nearest integer exponent.
///
/// Accuracy is governed by `|ln(base)·(y − n)| <= |ln(base)|/2`: about 1e-8
/// relative for bases in [0.5, 2], but `10^0.5` is off by about 2e-4.
///
/// # Errors
///
/// Returns [`MathError::DomainError`] for NaN input or a negative base with a
/// non-integral exponent.
///
/// # Example
///
/// ```
/// use elemath::elementary::powf;
///
/// assert!((powf(2.0_f64, 0.5).unwrap() - core::f64::consts::SQRT_2).abs() < 1e-7);
/// assert_eq!(powf(-2.0_f64, 3.0).unwrap(), -8.0);
/// assert!(powf(-2.0_f64, 0.5).is_err());
/// ```
pub fn powf<T: FloatScalar>(base: T, y: T) -> Result<T, MathError> {
    let zero = T::zero();
    let one = T::one();

    if base.is_nan() || y.is_nan() {
        return Err(MathError::DomainError);
    }
    if base == T::from(core::f64::consts::E).unwrap() {
        return Ok(exp(y));
    }
    if y == y.floor() {
        if let Some(n) = y.to_i32() {
            return Ok(powi(base, n));
        }
    }
    if base < zero {
        return Err(MathError::DomainError);
    }
    if base == one {
        return Ok(one);
    }
    if base == zero || base.is_infinite() {
        let grows = (base == zero) == (y < zero);
        return Ok(if grows { T::infinity() } else { zero });
    }

    let log = ln(base)?;
    let n = match round_half_up(y) {
        Some(n) => n,
        // Exponent beyond i32 range: the result over- or underflows anyway
        None => return Ok(exp(y * log)),
    };

    let scale = powi(base, n);
    Ok(scale * exp_series(log * (y - T::from(n).unwrap()), POWF_TERMS))
}
