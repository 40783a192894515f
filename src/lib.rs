//! # elemath
//!
//! Elementary functions from first principles, no-std compatible. Powers,
//! exponential, logarithm and trigonometry are computed from `+ − × ÷` alone
//! (no platform math library), each as an explicit approximation with fixed
//! series lengths, tolerances, and domain checks.
//!
//! ## Quick start
//!
//! ```
//! use elemath::elementary::{atan, exp, ln, powf, sin};
//!
//! let y = powf(3.1_f64, 2.1).unwrap();
//! assert!((y - 10.761171606099687).abs() < 1e-7);
//!
//! assert!((ln(exp(-4.0_f64)).unwrap() + 4.0).abs() < 1e-9);
//! assert!((atan(1.0_f64).unwrap() * 4.0 - core::f64::consts::PI).abs() < 1e-7);
//! assert!(sin(0.5_f64) > 0.479 && sin(0.5_f64) < 0.480);
//! ```
//!
//! ## Modules
//!
//! - [`elementary`]: [`powi`](elementary::powi) (repeated squaring),
//!   [`exp`](elementary::exp) (integer power of e times a Taylor tail),
//!   [`powf`](elementary::powf) (change of base through `ln`),
//!   [`ln`](elementary::ln) (bisection on `exp`), `sin`/`cos` (Maclaurin
//!   series after range reduction) with `tan`/`sec`/`csc`/`cot`, and
//!   `asin`/`acos`/`atan` (bisection on the forward functions).
//!   Fallible functions return [`MathError`].
//!
//! - [`combinatorics`]: exact `factorial`, `permute` and `choose` with
//!   overflow reported as a domain error; `factorial_real` for floats.
//!
//! - [`poly`]: `Polynomial<T>` over integer degrees (negative included):
//!   evaluation, in-place differentiation and integration with a tracked free
//!   constant, definite integrals, binomial expansion, and `Display`
//!   (requires `alloc`).
//!
//! - [`traits`]: [`FloatScalar`], the element trait (`f32`, `f64`).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc` |
//! | `alloc` | via std | `Polynomial` (heap-allocated term storage) |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod combinatorics;
pub mod elementary;
#[cfg(feature = "alloc")]
pub mod poly;
pub mod traits;

pub use elementary::MathError;
#[cfg(feature = "alloc")]
pub use poly::Polynomial;
pub use traits::FloatScalar;
