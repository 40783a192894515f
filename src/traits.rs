use core::fmt::Debug;
use num_traits::float::FloatCore;

/// Trait for floating-point scalars accepted by every function in the crate.
///
/// Blanket-implemented for all types satisfying the bounds, which covers
/// `f32` and `f64`.
///
/// Built on [`FloatCore`] rather than `num_traits::Float`: only bit-level
/// operations (`abs`, `floor`, `is_finite`, `epsilon`, ...) are available, so
/// nothing here can fall back to the platform math library. Every
/// transcendental function is computed by this crate from arithmetic alone.
pub trait FloatScalar: FloatCore + Debug {}

impl<T: FloatCore + Debug> FloatScalar for T {}
