//! Tuple interpolation.
//!
//! This module provides the interpolation family, applied per component:
//!
//! - Linear interpolation ([`lerp`])
//! - Hard threshold ([`step`])
//! - Eased interpolation ([`smoothstep`], [`smootherstep`])
//! - Rounded interpolation ([`int_lerp`])
//!
//! Each operation comes in three forms that differ only in where the result
//! goes:
//!
//! - `op(alpha, a, b) -> T` returns a new value of `a`'s concrete type
//! - `op_in_place(alpha, target, b)` blends `target` toward `b` and stores
//!   the result in `target`
//! - `op_into(alpha, a, b, out)` writes into a caller-supplied buffer
//!
//! The blend factor `alpha` is an unconstrained `f64`: values outside
//! [0, 1] extrapolate for [`lerp`] and [`int_lerp`], and are clamped by the
//! easing curves of [`smoothstep`] and [`smootherstep`].
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_core::Tuple2;
//! use fixtuple_math::interp::{lerp, lerp_in_place, step};
//!
//! let a = Tuple2::new(0.0, 0.0);
//! let b = Tuple2::new(10.0, 10.0);
//! assert_eq!(lerp(0.5, &a, &b), Tuple2::new(5.0, 5.0));
//! assert_eq!(step(0.4, 0.5, &a, &b), a);
//!
//! let mut t = [0.0_f32, 4.0];
//! lerp_in_place(0.25, &mut t, &[8.0_f32, 8.0]);
//! assert_eq!(t, [2.0, 5.0]);
//! ```
//!
//! # Strategies
//!
//! The [`Interpolator`] trait is the seam between the per-component formula
//! and the tuple plumbing. [`interpolate`], [`interpolate_in_place`] and
//! [`interpolate_into`] accept any strategy.

pub mod ease;

use fixtuple_core::error::check_buffer;
use fixtuple_core::{Error, FixedTuple, Result, TupleView};
use tracing::trace;

/// Per-component interpolation strategy.
pub trait Interpolator {
    /// Shapes the blend factor before linear interpolation.
    ///
    /// The default is the identity.
    fn ease(&self, alpha: f64) -> f64 {
        alpha
    }

    /// Interpolates a single component.
    fn interpolate(&self, alpha: f64, a: f32, b: f32) -> f32 {
        ease::lerp(self.ease(alpha), a, b)
    }
}

/// Plain linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Linear;

impl Interpolator for Linear {}

/// Hard threshold: `a` below `midpoint`, `b` at or above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Threshold the blend factor is compared against.
    pub midpoint: f64,
}

impl Step {
    /// Creates a step with the given threshold.
    #[inline]
    pub const fn new(midpoint: f64) -> Self {
        Self { midpoint }
    }
}

impl Interpolator for Step {
    // Select rather than blend so the result is bit-identical to an input.
    fn interpolate(&self, alpha: f64, a: f32, b: f32) -> f32 {
        if alpha < self.midpoint { a } else { b }
    }
}

/// Linear interpolation with the cubic Hermite ease `3t² - 2t³`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmoothStep;

impl Interpolator for SmoothStep {
    fn ease(&self, alpha: f64) -> f64 {
        ease::smoothstep(alpha)
    }
}

/// Linear interpolation with the quintic ease `6t⁵ - 15t⁴ + 10t³`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmootherStep;

impl Interpolator for SmootherStep {
    fn ease(&self, alpha: f64) -> f64 {
        ease::smootherstep(alpha)
    }
}

/// Linear interpolation rounded to the nearest integer value.
///
/// Halfway cases round away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntLerp;

impl Interpolator for IntLerp {
    fn interpolate(&self, alpha: f64, a: f32, b: f32) -> f32 {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * alpha).round() as f32
    }
}

fn interpolate_components<I, const N: usize>(
    interp: &I,
    alpha: f64,
    a: [f32; N],
    b: [f32; N],
) -> [f32; N]
where
    I: Interpolator + ?Sized,
{
    std::array::from_fn(|i| interp.interpolate(alpha, a[i], b[i]))
}

/// Interpolates between `a` and `b`, returning a new value of `a`'s type.
pub fn interpolate<I, T, B, const N: usize>(interp: &I, alpha: f64, a: &T, b: &B) -> T
where
    I: Interpolator + ?Sized,
    T: FixedTuple<N>,
    B: FixedTuple<N>,
{
    T::from_components(interpolate_components(
        interp,
        alpha,
        a.to_components(),
        b.to_components(),
    ))
}

/// Interpolates from `target` toward `b`, storing the result in `target`.
pub fn interpolate_in_place<I, T, B, const N: usize>(interp: &I, alpha: f64, target: &mut T, b: &B)
where
    I: Interpolator + ?Sized,
    T: FixedTuple<N>,
    B: FixedTuple<N>,
{
    let result = interpolate_components(interp, alpha, target.to_components(), b.to_components());
    target.set_components(result);
}

/// Interpolates between two indexable tuples of equal length, writing the
/// result into the front of `out`.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `a` and `b` differ in length
/// - [`Error::BufferTooSmall`] if `out` is shorter than `a`
///
/// `out` is unchanged on error.
pub fn interpolate_into<I, A, B>(interp: &I, alpha: f64, a: &A, b: &B, out: &mut [f32]) -> Result<()>
where
    I: Interpolator + ?Sized,
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
{
    let len = a.arity();
    if b.arity() != len {
        trace!(expected = len, got = b.arity(), "interpolating tuples of different length");
        return Err(Error::length_mismatch(len, b.arity()));
    }
    check_buffer(len, out)?;
    for (slot, (x, y)) in out.iter_mut().zip(a.components().zip(b.components())) {
        *slot = interp.interpolate(alpha, x, y);
    }
    Ok(())
}

macro_rules! interp_family {
    (
        $strategy:expr;
        $(#[$new_doc:meta])* fn $new:ident;
        $(#[$in_place_doc:meta])* fn $in_place:ident;
        $(#[$into_doc:meta])* fn $into:ident;
    ) => {
        $(#[$new_doc])*
        #[inline]
        pub fn $new<T, B, const N: usize>(alpha: f64, a: &T, b: &B) -> T
        where
            T: FixedTuple<N>,
            B: FixedTuple<N>,
        {
            interpolate(&$strategy, alpha, a, b)
        }

        $(#[$in_place_doc])*
        #[inline]
        pub fn $in_place<T, B, const N: usize>(alpha: f64, target: &mut T, b: &B)
        where
            T: FixedTuple<N>,
            B: FixedTuple<N>,
        {
            interpolate_in_place(&$strategy, alpha, target, b)
        }

        $(#[$into_doc])*
        ///
        /// # Errors
        ///
        /// See [`interpolate_into`].
        #[inline]
        pub fn $into<A, B>(alpha: f64, a: &A, b: &B, out: &mut [f32]) -> Result<()>
        where
            A: TupleView + ?Sized,
            B: TupleView + ?Sized,
        {
            interpolate_into(&$strategy, alpha, a, b, out)
        }
    };
}

interp_family! {
    Linear;
    /// Linear interpolation: `a + alpha * (b - a)` per component, computed
    /// in `f64`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixtuple_core::Tuple2;
    /// use fixtuple_math::interp::lerp;
    ///
    /// let r = lerp(0.5, &Tuple2::new(0.0, 0.0), &Tuple2::new(10.0, 10.0));
    /// assert_eq!(r, Tuple2::new(5.0, 5.0));
    /// ```
    fn lerp;
    /// In-place form of [`lerp`]: `target` is both the start value and the
    /// output.
    fn lerp_in_place;
    /// Buffer form of [`lerp`].
    fn lerp_into;
}

interp_family! {
    SmoothStep;
    /// [`lerp`] with `alpha` clamped to [0, 1] and shaped by `3t² - 2t³`.
    fn smoothstep;
    /// In-place form of [`smoothstep`].
    fn smoothstep_in_place;
    /// Buffer form of [`smoothstep`].
    fn smoothstep_into;
}

interp_family! {
    SmootherStep;
    /// [`lerp`] with `alpha` clamped to [0, 1] and shaped by
    /// `6t⁵ - 15t⁴ + 10t³`.
    fn smootherstep;
    /// In-place form of [`smootherstep`].
    fn smootherstep_in_place;
    /// Buffer form of [`smootherstep`].
    fn smootherstep_into;
}

interp_family! {
    IntLerp;
    /// [`lerp`] rounded to the nearest integer value per component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixtuple_math::interp::int_lerp;
    ///
    /// assert_eq!(int_lerp(0.3, &[0.0_f32, 10.0], &[10.0_f32, 0.0]), [3.0, 7.0]);
    /// ```
    fn int_lerp;
    /// In-place form of [`int_lerp`].
    fn int_lerp_in_place;
    /// Buffer form of [`int_lerp`].
    fn int_lerp_into;
}

/// Per component: `a` if `alpha < midpoint`, otherwise `b`.
///
/// # Example
///
/// ```rust
/// use fixtuple_math::interp::step;
///
/// let a = [1.0_f32, 2.0];
/// let b = [3.0_f32, 4.0];
/// assert_eq!(step(0.49, 0.5, &a, &b), a);
/// assert_eq!(step(0.5, 0.5, &a, &b), b);
/// ```
#[inline]
pub fn step<T, B, const N: usize>(alpha: f64, midpoint: f64, a: &T, b: &B) -> T
where
    T: FixedTuple<N>,
    B: FixedTuple<N>,
{
    interpolate(&Step::new(midpoint), alpha, a, b)
}

/// In-place form of [`step`].
#[inline]
pub fn step_in_place<T, B, const N: usize>(alpha: f64, midpoint: f64, target: &mut T, b: &B)
where
    T: FixedTuple<N>,
    B: FixedTuple<N>,
{
    interpolate_in_place(&Step::new(midpoint), alpha, target, b)
}

/// Buffer form of [`step`].
///
/// # Errors
///
/// See [`interpolate_into`].
#[inline]
pub fn step_into<A, B>(alpha: f64, midpoint: f64, a: &A, b: &B, out: &mut [f32]) -> Result<()>
where
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
{
    interpolate_into(&Step::new(midpoint), alpha, a, b, out)
}
