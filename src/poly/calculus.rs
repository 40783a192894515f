use crate::elementary::MathError;
use crate::FloatScalar;

use super::Polynomial;

impl<T: FloatScalar> Polynomial<T> {
    /// Replace this polynomial with its derivative.
    ///
    /// Each term `c·x^d` with `d != 0` becomes `(c·d)·x^(d−1)`; the constant
    /// term vanishes, and so does the free constant.
    pub fn differentiate(&mut self) {
        let old = core::mem::take(self);
        for (d, c) in old.iter() {
            if c != T::zero() && d != 0 {
                self.set_term(c * T::from(d).unwrap(), d - 1);
            }
        }
    }

    /// Replace this polynomial with its indefinite integral.
    ///
    /// Each term `c·x^d` becomes `c/(d+1)·x^(d+1)`. An explicit zero is
    /// written at degree 0 as the placeholder for the unknown constant, and
    /// [`has_free_constant`](Self::has_free_constant) is set.
    ///
    /// # Errors
    ///
    /// [`MathError::DomainError`] if there is a nonzero `x^-1` term, whose
    /// antiderivative is logarithmic. The polynomial is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use elemath::poly::Polynomial;
    ///
    /// let mut p = Polynomial::new();
    /// p.set_term(3.0_f64, 2);
    /// p.integrate().unwrap();
    /// assert_eq!(p.to_string(), "x^3 + c");
    /// ```
    pub fn integrate(&mut self) -> Result<(), MathError> {
        if self.get_term(-1).map_or(false, |c| c != T::zero()) {
            return Err(MathError::DomainError);
        }

        let old = core::mem::take(self);
        for (d, c) in old.iter() {
            if c != T::zero() {
                self.set_term(c / T::from(d + 1).unwrap(), d + 1);
            }
        }
        self.set_term(T::zero(), 0);
        self.has_free_constant = true;
        Ok(())
    }

    /// Derivative as a new polynomial; `self` is untouched.
    pub fn derivative(&self) -> Self {
        let mut p = self.clone();
        p.differentiate();
        p
    }

    /// Indefinite integral as a new polynomial; `self` is untouched.
    ///
    /// # Errors
    ///
    /// As for [`integrate`](Self::integrate).
    pub fn antiderivative(&self) -> Result<Self, MathError> {
        let mut p = self.clone();
        p.integrate()?;
        Ok(p)
    }
}

/// Definite integral of `p` over `[lower, upper]`: `F(upper) − F(lower)`
/// with `F` the antiderivative.
///
/// # Errors
///
/// [`MathError::DomainError`] if `p` has a nonzero `x^-1` term.
///
/// # Example
///
/// ```
/// use elemath::poly::{def_int, Polynomial};
///
/// let mut p = Polynomial::new();
/// p.set_term(1.0_f64, 2);
/// let area = def_int(&p, 0.0, 4.0).unwrap();
/// assert!((area - 64.0 / 3.0).abs() < 1e-12);
/// ```
pub fn def_int<T: FloatScalar>(p: &Polynomial<T>, lower: T, upper: T) -> Result<T, MathError> {
    let antiderivative = p.antiderivative()?;
    Ok(antiderivative.eval(upper) - antiderivative.eval(lower))
}
