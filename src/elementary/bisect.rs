use crate::FloatScalar;

use super::{MathError, MAX_ITER};

/// Bisect `[lo, hi]` for the point where monotone `f` reaches `target`.
///
/// Returns the first midpoint with `|f(mid) − target| <= tol`. `increasing`
/// gives the direction of `f` so the right half can be kept each step.
///
/// Fails with [`MathError::ConvergenceFailure`] after [`MAX_ITER`] halvings,
/// or as soon as the bracket has shrunk to adjacent floats and the midpoint
/// no longer moves.
pub(crate) fn bisect<T, F>(
    mut f: F,
    target: T,
    lo: T,
    hi: T,
    increasing: bool,
    tol: T,
) -> Result<T, MathError>
where
    T: FloatScalar,
    F: FnMut(T) -> Result<T, MathError>,
{
    let two = T::one() + T::one();
    let mut lo = lo;
    let mut hi = hi;

    for _ in 0..MAX_ITER {
        let mid = (lo + hi) / two;
        if mid == lo || mid == hi {
            return Err(MathError::ConvergenceFailure);
        }

        let fm = f(mid)?;
        if (fm - target).abs() <= tol {
            return Ok(mid);
        }

        if (fm < target) == increasing {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(MathError::ConvergenceFailure)
}
