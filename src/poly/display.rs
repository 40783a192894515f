use core::fmt;

use crate::FloatScalar;

use super::Polynomial;

/// Highest degree first, then negative degrees from `-1` down. Zero terms are
/// skipped, a unit coefficient is left implicit except on the constant, and a
/// free constant prints as a trailing `+ c`.
///
/// ```
/// use elemath::poly::Polynomial;
///
/// let mut p = Polynomial::new();
/// p.set_term(2.5_f64, 3);
/// p.set_term(-1.0, 1);
/// p.set_term(1.0, 0);
/// p.set_term(4.0, -2);
/// assert_eq!(p.to_string(), "2.5x^3 - x + 1 + 4x^-2");
/// ```
impl<T: FloatScalar + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut leading = true;
        for (d, c) in self.iter().filter(|&(_, c)| c != T::zero()) {
            let negative = c < T::zero();
            match (leading, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            leading = false;

            let mag = c.abs();
            if mag != T::one() || d == 0 {
                write!(f, "{}", mag)?;
            }
            match d {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", d)?,
            }
        }

        match (leading, self.has_free_constant) {
            (true, true) => write!(f, "c"),
            (true, false) => write!(f, "0"),
            (false, true) => write!(f, " + c"),
            (false, false) => Ok(()),
        }
    }
}
