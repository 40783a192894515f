//! Integer powers by repeated squaring.

use crate::FloatScalar;

/// `base` raised to the integer power `n`.
///
/// `n == 0` returns exactly one, including `0^0`. Negative exponents invert
/// the base first and then reduce the (positive) exponent: while it is even
/// the base is squared and the exponent halved, while it is odd one factor is
/// peeled off into a running coefficient. A zero base with a negative
/// exponent follows IEEE division and yields an infinity.
///
/// # Example
///
/// ```
/// use elemath::elementary::powi;
///
/// assert_eq!(powi(2.0_f64, 10), 1024.0);
/// assert_eq!(powi(2.0_f64, -2), 0.25);
/// assert_eq!(powi(0.0_f64, 0), 1.0);
/// ```
pub fn powi<T: FloatScalar>(base: T, n: i32) -> T {
    if n == 0 {
        return T::one();
    }

    // Widen so that -i32::MIN does not overflow
    let mut n = i64::from(n);
    let mut base = base;
    if n < 0 {
        base = T::one() / base;
        n = -n;
    }

    let mut coeff = T::one();
    while n > 1 {
        if n % 2 == 0 {
            base = base * base;
            n /= 2;
        } else {
            coeff = coeff * base;
            n -= 1;
        }
    }
    base * coeff
}
