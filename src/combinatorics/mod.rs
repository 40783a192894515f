//! Factorials, permutations and binomial coefficients.
//!
//! Exact integer results with explicit bounds: anything that would overflow
//! the result type is reported as [`MathError::DomainError`] instead of
//! wrapping.
//!
//! | Function | Domain | Result |
//! |----------|--------|--------|
//! | [`factorial`] | `0..=12` | `i32` |
//! | [`factorial_real`] | `0 <= n <= 170`, truncated | `T` |
//! | [`permute`] | `0 <= r <= n`, result fits `i64` | `n! / (n−r)!` |
//! | [`choose`] | `0 <= r <= n`, result fits `i64` | `n! / (r!(n−r)!)` |
//!
//! # Example
//!
//! ```
//! use elemath::combinatorics::{choose, factorial, permute};
//!
//! assert_eq!(factorial(5).unwrap(), 120);
//! assert_eq!(permute(5, 2).unwrap(), 20);
//! assert_eq!(choose(37, 7).unwrap(), 10_295_472);
//! ```

mod binomial;
mod factorial_fn;

#[cfg(test)]
mod tests;

pub use binomial::{choose, permute};
pub use factorial_fn::{factorial, factorial_real};

pub(crate) use factorial_fn::factorial_f;
