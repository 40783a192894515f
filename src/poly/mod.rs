//! Sparse-degree polynomials with evaluation and calculus (requires `alloc`).
//!
//! A [`Polynomial`] maps integer degrees, negative ones included, to real
//! coefficients. Terms are stored densely by degree in two growable buffers:
//! one for degrees `0, 1, 2, …` and one for `−1, −2, …`.
//!
//! - [`Polynomial::eval`] sums every term, using [`powi`](crate::elementary::powi).
//! - [`Polynomial::differentiate`] / [`Polynomial::integrate`] apply the power
//!   rule in place; [`Polynomial::derivative`] / [`Polynomial::antiderivative`]
//!   return a new polynomial instead.
//! - [`def_int`] evaluates a definite integral through the antiderivative.
//! - [`binom_exp`] expands `(a·x^p + b·x^q)^n`.
//!
//! # Example
//!
//! ```
//! use elemath::poly::Polynomial;
//!
//! // x² + 3x + 4
//! let mut p = Polynomial::new();
//! p.set_term(1.0_f64, 2);
//! p.set_term(3.0, 1);
//! p.set_term(4.0, 0);
//! assert_eq!(p.eval(2.0), 14.0);
//! assert_eq!(p.to_string(), "x^2 + 3x + 4");
//!
//! p.differentiate();
//! assert_eq!(p.to_string(), "2x + 3");
//! ```

mod calculus;
mod display;
mod expand;


pub use calculus::def_int;
pub use expand::binom_exp;

use alloc::vec::Vec;

use crate::elementary::powi;
use crate::FloatScalar;

/// Polynomial in `x` with integer (possibly negative) degrees.
///
/// `terms[d]` holds the coefficient of `x^d` for `d >= 0`, `neg_terms[−d−1]`
/// the coefficient of `x^d` for `d < 0`. Both buffers grow by doubling.
///
/// `has_free_constant` marks a polynomial produced by indefinite integration:
/// it stands for a family of antiderivatives differing by an additive constant
/// and prints with a trailing `+ c`.
#[derive(Debug, Clone)]
pub struct Polynomial<T> {
    terms: Vec<T>,
    neg_terms: Vec<T>,
    degree: Option<usize>,
    min_degree: Option<i32>,
    has_free_constant: bool,
}

impl<T: FloatScalar> Default for Polynomial<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Grow `buf` to hold index `idx`: double the length, or more if that is
/// still short.
fn reserve_slot<T: FloatScalar>(buf: &mut Vec<T>, idx: usize) {
    if idx >= buf.len() {
        let len = core::cmp::max(buf.len() * 2, idx + 1);
        buf.resize(len, T::zero());
    }
}

impl<T: FloatScalar> Polynomial<T> {
    /// Create an empty polynomial (no terms, degree `None`).
    pub fn new() -> Self {
        Self {
            terms: alloc::vec![T::zero(); 1],
            neg_terms: Vec::new(),
            degree: None,
            min_degree: None,
            has_free_constant: false,
        }
    }

    /// Slot for `degree`, growing storage and the tracked degrees first.
    fn slot_mut(&mut self, degree: i32) -> &mut T {
        if degree >= 0 {
            let d = degree as usize;
            if self.degree.map_or(true, |max| d > max) {
                self.degree = Some(d);
            }
            reserve_slot(&mut self.terms, d);
            &mut self.terms[d]
        } else {
            if self.min_degree.map_or(true, |min| degree < min) {
                self.min_degree = Some(degree);
            }
            let idx = neg_index(degree);
            reserve_slot(&mut self.neg_terms, idx);
            &mut self.neg_terms[idx]
        }
    }

    /// Add `coefficient · x^degree`, accumulating into any existing term.
    pub fn add_term(&mut self, coefficient: T, degree: i32) {
        let slot = self.slot_mut(degree);
        *slot = *slot + coefficient;
    }

    /// Set the coefficient of `x^degree`, overwriting any existing term.
    pub fn set_term(&mut self, coefficient: T, degree: i32) {
        *self.slot_mut(degree) = coefficient;
    }

    /// Coefficient of `x^degree`.
    ///
    /// `None` outside the touched range: above [`degree`](Self::degree), or
    /// below [`min_degree`](Self::min_degree). Untouched degrees inside the
    /// range read as zero.
    pub fn get_term(&self, degree: i32) -> Option<T> {
        if degree >= 0 {
            let d = degree as usize;
            match self.degree {
                Some(max) if d <= max => Some(self.terms[d]),
                _ => None,
            }
        } else {
            match self.min_degree {
                Some(min) if degree >= min => Some(self.neg_terms[neg_index(degree)]),
                _ => None,
            }
        }
    }

    /// Highest nonnegative degree ever set, or `None` if there is none.
    ///
    /// The coefficient there may be zero (e.g. after `set_term(0.0, d)`).
    pub fn degree(&self) -> Option<usize> {
        self.degree
    }

    /// Lowest negative degree ever set, or `None` if there is none.
    pub fn min_degree(&self) -> Option<i32> {
        self.min_degree
    }

    /// Whether this polynomial carries an undetermined additive constant.
    pub fn has_free_constant(&self) -> bool {
        self.has_free_constant
    }

    /// Mark or unmark the undetermined additive constant.
    pub fn set_free_constant(&mut self, free: bool) {
        self.has_free_constant = free;
    }

    /// Remove every term and the free-constant flag.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// `true` if every stored coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, c)| c == T::zero())
    }

    /// Iterate `(degree, coefficient)` over every stored slot, highest
    /// degree first, zero coefficients included.
    pub fn iter(&self) -> impl Iterator<Item = (i32, T)> + '_ {
        let nonneg = self.degree.map_or(0, |d| d + 1);
        let neg = self.min_degree.map_or(0, |d| neg_index(d) + 1);
        let high = (0..nonneg).rev().map(move |d| (d as i32, self.terms[d]));
        let low = (0..neg).map(move |i| (-(i as i32) - 1, self.neg_terms[i]));
        high.chain(low)
    }

    /// Evaluate at `x`: Σ coeff · x^degree over all stored terms.
    ///
    /// Negative-degree terms are included, so `x = 0` yields an infinity or
    /// NaN when any of them is nonzero.
    ///
    /// # Example
    ///
    /// ```
    /// use elemath::poly::Polynomial;
    ///
    /// // 2x³ − x + x⁻¹
    /// let mut p = Polynomial::new();
    /// p.set_term(2.0_f64, 3);
    /// p.set_term(-1.0, 1);
    /// p.set_term(1.0, -1);
    /// assert_eq!(p.eval(2.0), 16.0 - 2.0 + 0.5);
    /// ```
    pub fn eval(&self, x: T) -> T {
        self.iter()
            .filter(|&(_, c)| c != T::zero())
            .fold(T::zero(), |acc, (d, c)| acc + c * powi(x, d))
    }
}

/// Storage index for a negative degree: `−1 → 0`, `−2 → 1`, ….
#[inline]
fn neg_index(degree: i32) -> usize {
    (-(i64::from(degree)) - 1) as usize
}

/// Equal when every degree has the same coefficient (unset reads as zero)
/// and the free-constant flags agree. Storage capacity is ignored.
impl<T: FloatScalar> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.has_free_constant != other.has_free_constant {
            return false;
        }
        let coeff = |p: &Self, d: i32| p.get_term(d).unwrap_or_else(T::zero);
        let high = self.degree.max(other.degree).map_or(-1, |d| d as i32);
        let low = self.min_degree.into_iter().chain(other.min_degree).min().unwrap_or(0);
        (low..=high).all(|d| coeff(self, d) == coeff(other, d))
    }
}
