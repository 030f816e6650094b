//! Scalar interpolation and easing curves.
//!
//! Blend factors are `f64`; component values are `f32`. Blending happens in
//! `f64` and is narrowed to `f32` once at the end.
//!
//! - Linear interpolation ([`lerp`])
//! - Easing curves ([`smoothstep`], [`smootherstep`])
//! - Clamping ([`saturate`])
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_math::interp::ease::{lerp, smoothstep};
//!
//! assert_eq!(lerp(0.5, 0.0, 10.0), 5.0);
//! assert_eq!(smoothstep(0.5), 0.5);
//! ```

/// Linear interpolation between two values.
///
/// Returns exactly `a` when `t = 0.0` and exactly `b` when `t = 1.0`, for
/// any finite `a` and `b`. For values outside [0, 1], the result is
/// extrapolated.
///
/// # Formula
///
/// `a * (1 - t) + b * t`, evaluated in `f64`. Each endpoint is weighted
/// separately, so a large `a` cannot swamp a tiny `b` at `t = 1.0`.
///
/// # Example
///
/// ```rust
/// use fixtuple_math::interp::ease::lerp;
///
/// assert_eq!(lerp(0.0, 0.0, 10.0), 0.0);
/// assert_eq!(lerp(1.0, 0.0, 10.0), 10.0);
/// assert_eq!(lerp(2.0, 0.0, 10.0), 20.0);
/// ```
#[inline]
pub fn lerp(t: f64, a: f32, b: f32) -> f32 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a * (1.0 - t) + b * t) as f32
}

/// Clamps a blend factor to [0, 1].
///
/// NaN stays NaN.
#[inline]
pub fn saturate(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Hermite smoothstep easing.
///
/// # Formula
///
/// `t * t * (3 - 2 * t)` where `t` is clamped to [0, 1]
///
/// # Properties
///
/// - First derivative is zero at both edges (smooth transition)
/// - Continuous but second derivative is not smooth
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let t = saturate(t);
    t * t * (3.0 - 2.0 * t)
}

/// Ken Perlin's smootherstep easing.
///
/// Like [`smoothstep`] but with zero second derivative at edges.
///
/// # Formula
///
/// `t * t * t * (t * (t * 6 - 15) + 10)` where `t` is clamped to [0, 1]
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    let t = saturate(t);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
