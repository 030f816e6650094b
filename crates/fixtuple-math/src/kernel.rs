//! Scalar numeric kernel.
//!
//! The per-component primitives every tuple operation is built from. The
//! comparator, interpolation and arithmetic modules only touch individual
//! floats through these functions.
//!
//! # Tolerance Semantics
//!
//! A tolerance is an inclusive absolute-difference margin. `0.0` means
//! exact `==` comparison. A negative tolerance also degrades to exact
//! comparison instead of rejecting everything.
//!
//! ```rust
//! use fixtuple_math::kernel;
//!
//! assert!(kernel::equals(0.001, 2.0, 2.0001));
//! assert!(!kernel::equals(0.00001, 2.0, 2.0001));
//! assert!(!kernel::equals(0.0, f32::NAN, f32::NAN));
//! assert!(kernel::equals(0.1, f32::INFINITY, f32::INFINITY));
//! ```

/// Returns `true` if `a` and `b` differ by at most `tolerance`.
///
/// Uses native float equality first so equal infinities compare equal.
/// NaN is never equal to anything.
#[inline]
pub fn equals(tolerance: f32, a: f32, b: f32) -> bool {
    a == b || (a - b).abs() <= tolerance
}

/// Returns `true` if `|a| <= tolerance`.
#[inline]
pub fn is_zero(tolerance: f32, a: f32) -> bool {
    a == 0.0 || a.abs() <= tolerance
}

/// Fused multiply-add: `a * b + c` with a single rounding.
#[inline]
pub fn fma(a: f32, b: f32, c: f32) -> f32 {
    a.mul_add(b, c)
}

/// Minimum of two values. If one is NaN, the other is returned.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    a.min(b)
}

/// Maximum of two values. If one is NaN, the other is returned.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// Sign function.
///
/// Returns -1 for negative, 0 for zero, 1 for positive. NaN is passed
/// through.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        // 0.0, -0.0 and NaN
        x
    }
}

/// Absolute value.
#[inline]
pub fn abs(x: f32) -> f32 {
    x.abs()
}
