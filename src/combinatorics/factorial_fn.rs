use crate::elementary::MathError;
use crate::FloatScalar;

/// Largest `n` whose factorial fits in an `i32`.
const MAX_INT_FACTORIAL: i32 = 12;

/// Largest `n` whose factorial is finite in an `f64`.
const MAX_REAL_FACTORIAL: f64 = 170.0;

/// `n!` as an exact `i32`, for `0 <= n <= 12`.
///
/// # Errors
///
/// [`MathError::DomainError`] for negative `n` or `n > 12`.
///
/// # Example
///
/// ```
/// use elemath::combinatorics::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(12).unwrap(), 479_001_600);
/// assert!(factorial(13).is_err());
/// ```
pub fn factorial(n: i32) -> Result<i32, MathError> {
    if !(0..=MAX_INT_FACTORIAL).contains(&n) {
        return Err(MathError::DomainError);
    }
    Ok((2..=n).product())
}

/// `⌊n⌋!` as a float, for `0 <= n <= 170`.
///
/// The fractional part of `n` is discarded.
///
/// # Errors
///
/// [`MathError::DomainError`] for NaN, negative `n`, or `n > 170`.
///
/// # Example
///
/// ```
/// use elemath::combinatorics::factorial_real;
///
/// assert_eq!(factorial_real(5.9_f64).unwrap(), 120.0);
/// assert!(factorial_real(170.0_f64).unwrap().is_finite());
/// assert!(factorial_real(171.0_f64).is_err());
/// ```
pub fn factorial_real<T: FloatScalar>(n: T) -> Result<T, MathError> {
    if !(n >= T::zero() && n <= T::from(MAX_REAL_FACTORIAL).unwrap()) {
        return Err(MathError::DomainError);
    }
    // In range, so the truncation always fits
    let k = n.trunc().to_u32().unwrap_or(0);
    Ok(factorial_f(k))
}

/// `n!` accumulated in `T`, unchecked.
///
/// Overflows to infinity past the type's range; callers keep `n` small.
#[inline]
pub(crate) fn factorial_f<T: FloatScalar>(n: u32) -> T {
    let mut total = T::one();
    for i in 2..=n {
        total = total * T::from(i).unwrap();
    }
    total
}
