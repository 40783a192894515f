use crate::combinatorics::choose;
use crate::elementary::{powi, MathError};
use crate::FloatScalar;

use super::Polynomial;

/// Expand `(a·x^p + b·x^q)^n` by the binomial theorem.
///
/// Term `k` contributes `C(n, k)·a^(n−k)·b^k` at degree `p(n−k) + qk`;
/// contributions landing on the same degree accumulate.
///
/// # Errors
///
/// [`MathError::DomainError`] for negative `n`, or when a binomial
/// coefficient overflows (see [`choose`]).
///
/// # Example
///
/// ```
/// use elemath::poly::binom_exp;
///
/// // (x + 1)^3 = x³ + 3x² + 3x + 1
/// let p = binom_exp(1.0_f64, 1, 1.0, 0, 3).unwrap();
/// assert_eq!(p.to_string(), "x^3 + 3x^2 + 3x + 1");
/// ```
pub fn binom_exp<T: FloatScalar>(
    a: T,
    p: i32,
    b: T,
    q: i32,
    n: i32,
) -> Result<Polynomial<T>, MathError> {
    if n < 0 {
        return Err(MathError::DomainError);
    }

    let mut poly = Polynomial::new();
    for k in 0..=n {
        let c = T::from(choose(n, k)?).unwrap();
        poly.add_term(c * powi(a, n - k) * powi(b, k), p * (n - k) + q * k);
    }
    Ok(poly)
}
