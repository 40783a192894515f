//! Elementary transcendental functions computed from arithmetic alone.
//!
//! Powers, the exponential and logarithm, and the six trigonometric functions
//! with their principal inverses. All functions are generic over
//! [`FloatScalar`] (f32/f64), no-std compatible, and stack-only.
//!
//! # Functions
//!
//! | Function | Description | Method |
//! |----------|-------------|--------|
//! | [`powi`] | `base^n`, integer `n` | exponentiation by squaring |
//! | [`exp`] | `e^x` | `e^round(x)` × 13-term Taylor tail |
//! | [`powf`] | `base^y`, real `y` | `base^round(y)` × 8-term series in `ln(base)` |
//! | [`ln`] | natural logarithm | bisection on [`exp`] |
//! | [`sin`], [`cos`] | sine, cosine | 13-term Maclaurin series on [-π, π] |
//! | [`tan`], [`sec`], [`csc`], [`cot`] | derived ratios | pole-guarded quotients |
//! | [`asin`], [`acos`], [`atan`] | inverse trigonometry | bisection on the forward function |
//!
//! Accuracy is roughly ten significant digits for `f64` arguments of moderate
//! size; inverse trigonometric functions stop at a residual of `1e-8`.
//!
//! # Example
//!
//! ```
//! use elemath::elementary::{exp, ln, sin, cos, asin};
//!
//! // ln is the inverse of exp
//! assert!((ln(exp(2.5_f64)).unwrap() - 2.5).abs() < 1e-9);
//!
//! // Pythagorean identity
//! let t = 0.75_f64;
//! assert!((sin(t) * sin(t) + cos(t) * cos(t) - 1.0).abs() < 1e-12);
//!
//! // asin(1/2) = π/6
//! let pi_6 = core::f64::consts::FRAC_PI_6;
//! assert!((asin(0.5_f64).unwrap() - pi_6).abs() < 1e-7);
//! ```

use core::fmt;

use crate::FloatScalar;

mod bisect;
mod exp_fn;
mod inverse_trig;
mod ln_fn;
mod powi_fn;
mod trig;


pub use exp_fn::{exp, powf};
pub use inverse_trig::{acos, asin, atan};
pub use ln_fn::ln;
pub use powi_fn::powi;
pub use trig::{cos, cot, csc, sec, sin, tan};

/// Errors from elementary function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Input outside the function's domain (e.g. `asin(2)`, `tan(π/2)`, `ln(-1)`).
    DomainError,
    /// An iterative search did not meet its tolerance within the iteration limit.
    ConvergenceFailure,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainError => write!(f, "input outside function domain"),
            Self::ConvergenceFailure => write!(f, "iterative search did not converge"),
        }
    }
}

// ---------------------------------------------------------------------------
// Series lengths and tolerances
// ---------------------------------------------------------------------------

/// Number of Taylor terms for the fractional part of [`exp`].
pub(crate) const EXP_TERMS: u32 = 13;

/// Number of series terms for the fractional part of [`powf`].
pub(crate) const POWF_TERMS: u32 = 8;

/// Number of Maclaurin terms for [`sin`] and [`cos`] (beyond the constant).
pub(crate) const TRIG_TERMS: u32 = 13;

/// Maximum iterations for any bisection search.
pub(crate) const MAX_ITER: usize = 200;

/// Nearest integer with halves rounded toward +∞: `floor(x + 0.5)`.
///
/// Returns `None` for NaN and for values that do not fit in an `i32`.
#[inline]
pub(crate) fn round_half_up<T: FloatScalar>(x: T) -> Option<i32> {
    let half = T::from(0.5).unwrap();
    (x + half).floor().to_i32()
}

/// Stopping tolerance `tol`, floored at 256 ulps of one.
///
/// The `f64` constants are below what `f32` can resolve; the floor keeps the
/// searches reachable there while leaving `f64` untouched.
#[inline]
pub(crate) fn tolerance<T: FloatScalar>(tol: f64) -> T {
    T::from(tol).unwrap().max(T::epsilon() * T::from(256).unwrap())
}
