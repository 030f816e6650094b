//! Tuple comparisons.
//!
//! Exact and tolerance-based equality, whole-tuple and per-component,
//! plus finiteness, zero checks and min/max-with-position queries.
//!
//! Every function accepts any [`TupleView`] on either side, so a
//! [`Tuple`](fixtuple_core::Tuple), an array, a slice, a `Vec<f32>`, a scalar
//! tuple or a glam vector can be compared against any other.
//!
//! # Size Mismatch
//!
//! Comparing two tuples of different lengths is not an error: the result is
//! simply `false`.
//!
//! # Absent Operands
//!
//! [`equals_opt`] follows the convention that one absent operand is unequal
//! to anything, while two absent operands are equal.
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_core::Tuple2;
//! use fixtuple_math::compare::{equals, is_zero};
//!
//! let a = Tuple2::new(1.0, 2.0);
//! assert!(equals(&a, &[1.0_f32, 2.0001], 0.001));
//! assert!(!equals(&a, &[1.0_f32, 2.0001], 0.00001));
//! assert!(!equals(&a, &[1.0_f32, 2.0, 3.0], 1.0));
//!
//! assert!(is_zero(&(0.0_f32, 0.0001_f32), 0.001));
//! ```

use fixtuple_core::error::check_index;
use fixtuple_core::{IndexValuePair, Result, TupleView};
use tracing::debug;

use crate::kernel;

/// Tolerance for exact comparison.
pub const EXACT: f32 = 0.0;

/// Default tolerance for approximate comparison.
pub const DEFAULT_TOLERANCE: f32 = 1e-6;

/// Comparison strategy.
///
/// Implementors decide when two components are equal and when one is zero;
/// the tuple-level methods are provided on top of those two primitives.
pub trait Comparator {
    /// Returns `true` if two components are considered equal.
    fn component_eq(&self, a: f32, b: f32) -> bool;

    /// Returns `true` if a component is considered zero.
    fn component_is_zero(&self, a: f32) -> bool;

    /// Returns `true` if both tuples have the same length and every pair of
    /// corresponding components is equal.
    fn equals<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: TupleView + ?Sized,
        B: TupleView + ?Sized,
    {
        if a.arity() != b.arity() {
            debug!(lhs = a.arity(), rhs = b.arity(), "comparing tuples of different length");
            return false;
        }
        a.components()
            .zip(b.components())
            .all(|(x, y)| self.component_eq(x, y))
    }

    /// Compares a single component of both tuples.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`](fixtuple_core::Error::IndexOutOfRange) if
    /// `index` is out of range for either tuple.
    fn equals_at<A, B>(&self, index: usize, a: &A, b: &B) -> Result<bool>
    where
        A: TupleView + ?Sized,
        B: TupleView + ?Sized,
    {
        let x = component_at(a, index)?;
        let y = component_at(b, index)?;
        Ok(self.component_eq(x, y))
    }

    /// Like [`equals`](Comparator::equals) for possibly absent operands.
    ///
    /// Both absent is `true`; exactly one absent is `false`.
    fn equals_opt<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: TupleView + ?Sized,
        B: TupleView + ?Sized,
    {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.equals(a, b),
            _ => false,
        }
    }

    /// Like [`equals_at`](Comparator::equals_at) for possibly absent
    /// operands.
    ///
    /// The index is only checked against operands that are present.
    fn equals_opt_at<A, B>(&self, index: usize, a: Option<&A>, b: Option<&B>) -> Result<bool>
    where
        A: TupleView + ?Sized,
        B: TupleView + ?Sized,
    {
        match (a, b) {
            (None, None) => Ok(true),
            (Some(a), Some(b)) => self.equals_at(index, a, b),
            (Some(a), None) => component_at(a, index).map(|_| false),
            (None, Some(b)) => component_at(b, index).map(|_| false),
        }
    }

    /// Returns `true` if every component is zero.
    fn is_zero<V: TupleView + ?Sized>(&self, v: &V) -> bool {
        v.components().all(|c| self.component_is_zero(c))
    }

    /// Returns `true` if the component at `index` is zero.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`](fixtuple_core::Error::IndexOutOfRange) if
    /// `index` is out of range.
    fn is_zero_at<V: TupleView + ?Sized>(&self, index: usize, v: &V) -> Result<bool> {
        component_at(v, index).map(|c| self.component_is_zero(c))
    }
}

/// Absolute-difference comparator with an inclusive margin.
///
/// A margin of `0.0` ([`Tolerance::EXACT`]) is plain `==`.
///
/// # Example
///
/// ```rust
/// use fixtuple_math::compare::{Comparator, Tolerance};
///
/// let tol = Tolerance::new(0.5);
/// assert!(tol.equals(&[1.0_f32, 2.0], &[1.5_f32, 2.0]));
/// assert!(!Tolerance::EXACT.equals(&[1.0_f32, 2.0], &[1.5_f32, 2.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tolerance(f32);

impl Tolerance {
    /// Exact comparison.
    pub const EXACT: Self = Self(EXACT);

    /// [`DEFAULT_TOLERANCE`] comparison.
    pub const DEFAULT: Self = Self(DEFAULT_TOLERANCE);

    /// Creates a comparator with the given margin.
    #[inline]
    pub const fn new(tolerance: f32) -> Self {
        Self(tolerance)
    }

    /// Returns the margin.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Tolerance {
    #[inline]
    fn from(tolerance: f32) -> Self {
        Self(tolerance)
    }
}

impl Comparator for Tolerance {
    #[inline]
    fn component_eq(&self, a: f32, b: f32) -> bool {
        kernel::equals(self.0, a, b)
    }

    #[inline]
    fn component_is_zero(&self, a: f32) -> bool {
        kernel::is_zero(self.0, a)
    }
}

fn component_at<V: TupleView + ?Sized>(v: &V, index: usize) -> Result<f32> {
    let i = check_index(index, v.arity())?;
    // `check_index` guarantees the component exists
    Ok(v.component(i).unwrap_or(f32::NAN))
}

/// Returns `true` if every component is finite (not NaN or infinite).
#[inline]
pub fn is_finite<V: TupleView + ?Sized>(v: &V) -> bool {
    v.components().all(f32::is_finite)
}

/// Returns `true` if every component satisfies `|c| <= tolerance`.
#[inline]
pub fn is_zero<V: TupleView + ?Sized>(v: &V, tolerance: f32) -> bool {
    Tolerance(tolerance).is_zero(v)
}

/// Returns `true` if both tuples have the same length and every component
/// pair differs by at most `tolerance`.
///
/// # Example
///
/// ```rust
/// use fixtuple_math::compare::equals;
///
/// assert!(equals(&[1.0_f32, 2.0], &(1.0_f32, 2.0_f32), 0.0));
/// assert!(!equals(&[f32::NAN], &[f32::NAN], 1.0));
/// ```
#[inline]
pub fn equals<A, B>(a: &A, b: &B, tolerance: f32) -> bool
where
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
{
    Tolerance(tolerance).equals(a, b)
}

/// Exact component-wise equality (`==`).
#[inline]
pub fn equals_exact<A, B>(a: &A, b: &B) -> bool
where
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
{
    Tolerance::EXACT.equals(a, b)
}

/// Compares the component at `index` of both tuples.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`](fixtuple_core::Error::IndexOutOfRange) if
/// `index` is out of range for either tuple.
#[inline]
pub fn equals_at<A, B>(index: usize, a: &A, b: &B, tolerance: f32) -> Result<bool>
where
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
{
    Tolerance(tolerance).equals_at(index, a, b)
}

/// Compares possibly absent tuples. Both absent is `true`.
///
/// # Example
///
/// ```rust
/// use fixtuple_core::Tuple2;
/// use fixtuple_math::compare::equals_opt;
///
/// let t = Tuple2::new(1.0, 2.0);
/// assert!(equals_opt::<Tuple2, Tuple2>(None, None, 0.0));
/// assert!(!equals_opt(Some(&t), None::<&Tuple2>, 0.0));
/// assert!(equals_opt(Some(&t), Some(&t), 0.0));
/// ```
#[inline]
pub fn equals_opt<A, B>(a: Option<&A>, b: Option<&B>, tolerance: f32) -> bool
where
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
{
    Tolerance(tolerance).equals_opt(a, b)
}

/// Returns the smallest component and its index.
///
/// Ties keep the lowest index. NaN components are skipped unless every
/// component is NaN. Returns `None` for an empty tuple.
///
/// # Example
///
/// ```rust
/// use fixtuple_math::compare::min_component;
///
/// let p = min_component(&[3.0_f32, -1.0, 2.0]).unwrap();
/// assert_eq!((p.index, p.value), (1, -1.0));
/// ```
pub fn min_component<V: TupleView + ?Sized>(v: &V) -> Option<IndexValuePair> {
    extreme_component(v, |candidate, best| candidate < best)
}

/// Returns the largest component and its index.
///
/// Same tie and NaN rules as [`min_component`].
pub fn max_component<V: TupleView + ?Sized>(v: &V) -> Option<IndexValuePair> {
    extreme_component(v, |candidate, best| candidate > best)
}

fn extreme_component<V, F>(v: &V, better: F) -> Option<IndexValuePair>
where
    V: TupleView + ?Sized,
    F: Fn(f32, f32) -> bool,
{
    let mut best: Option<IndexValuePair> = None;
    for (index, value) in v.components().enumerate() {
        best = match best {
            None => Some(IndexValuePair::new(value, index)),
            Some(b) if b.value.is_nan() && !value.is_nan() => Some(IndexValuePair::new(value, index)),
            Some(b) if better(value, b.value) => Some(IndexValuePair::new(value, index)),
            keep => keep,
        };
    }
    best
}

/// Method-call form of the comparators for every [`TupleView`].
///
/// ```rust
/// use fixtuple_core::Tuple3;
/// use fixtuple_math::compare::CompareExt;
///
/// let t = Tuple3::new(1.0, 0.0, 5.0);
/// assert!(t.equals(&[1.0_f32, 0.0, 5.0], 0.0));
/// assert!(t.all_finite());
/// assert_eq!(t.max_component().unwrap().index, 2);
/// ```
pub trait CompareExt: TupleView {
    /// See [`is_finite`].
    fn all_finite(&self) -> bool {
        is_finite(self)
    }

    /// See [`is_zero`](fn@is_zero).
    fn is_zero(&self, tolerance: f32) -> bool {
        is_zero(self, tolerance)
    }

    /// See [`equals`](fn@equals).
    fn equals<B: TupleView + ?Sized>(&self, other: &B, tolerance: f32) -> bool {
        equals(self, other, tolerance)
    }

    /// See [`equals_at`](fn@equals_at).
    fn equals_at<B: TupleView + ?Sized>(&self, index: usize, other: &B, tolerance: f32) -> Result<bool> {
        equals_at(index, self, other, tolerance)
    }

    /// See [`min_component`](fn@min_component).
    fn min_component(&self) -> Option<IndexValuePair> {
        min_component(self)
    }

    /// See [`max_component`](fn@max_component).
    fn max_component(&self) -> Option<IndexValuePair> {
        max_component(self)
    }
}

impl<V: TupleView + ?Sized> CompareExt for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtuple_core::{Error, Tuple2, Tuple3, Tuple4};

    #[test]
    fn test_equals_scenarios() {
        assert!(equals(&[1.0_f32, 2.0], &[1.0_f32, 2.0], EXACT));
        assert!(equals(&[1.0_f32, 2.0], &[1.0_f32, 2.0001], 0.001));
        assert!(!equals(&[1.0_f32, 2.0], &[1.0_f32, 2.0001], 0.00001));
    }

    #[test]
    fn test_equals_cross_representation() {
        let t = Tuple3::new(1.0, 2.0, 3.0);
        let v = vec![1.0_f32, 2.0, 3.0];
        let s = (1.0_f32, 2.0_f32, 3.0_f32);

        assert!(equals(&t, &v, 0.0));
        assert!(equals(&v, &s, 0.0));
        assert!(equals(&s, &t, 0.0));
        assert!(equals(&t, &v[..], 0.0));
    }

    #[test]
    fn test_equals_size_mismatch() {
        let t = Tuple2::new(1.0, 2.0);
        assert!(!equals(&t, &[1.0_f32, 2.0, 0.0], 10.0));
        assert!(!equals(&t, &Vec::<f32>::new(), 10.0));
    }

    #[test]
    fn test_equals_nan() {
        let t = Tuple2::new(f32::NAN, 1.0);
        assert!(!equals(&t, &t, 0.0));
        assert!(!equals(&t, &t, 1.0));
    }

    #[test]
    fn test_equals_at() {
        let a = Tuple3::new(1.0, 2.0, 3.0);
        let b = [1.0_f32, 2.5, 3.0];
        assert_eq!(equals_at(0, &a, &b, 0.0), Ok(true));
        assert_eq!(equals_at(1, &a, &b, 0.0), Ok(false));
        assert_eq!(equals_at(1, &a, &b, 0.5), Ok(true));
        assert_eq!(
            equals_at(3, &a, &b, 0.0),
            Err(Error::index_out_of_range(3, 3))
        );
        assert_eq!(
            equals_at(2, &a, &[1.0_f32, 2.0], 0.0),
            Err(Error::index_out_of_range(2, 2))
        );
    }

    #[test]
    fn test_equals_opt() {
        let a = Tuple2::new(1.0, 2.0);
        assert!(equals_opt::<Tuple2, [f32]>(None, None, 0.0));
        assert!(!equals_opt(Some(&a), None::<&[f32]>, 0.0));
        assert!(!equals_opt(None::<&Tuple2>, Some(&a), 0.0));
        assert!(equals_opt(Some(&a), Some(&[1.0_f32, 2.0][..]), 0.0));
    }

    #[test]
    fn test_equals_opt_at() {
        let a = Tuple2::new(1.0, 2.0);
        let tol = Tolerance::EXACT;
        assert_eq!(tol.equals_opt_at::<Tuple2, Tuple2>(5, None, None), Ok(true));
        assert_eq!(tol.equals_opt_at(1, Some(&a), None::<&Tuple2>), Ok(false));
        assert!(tol.equals_opt_at(2, Some(&a), None::<&Tuple2>).is_err());
        assert_eq!(tol.equals_opt_at(1, Some(&a), Some(&a)), Ok(true));
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(&[0.0_f32, 0.0001], 0.001));
        assert!(!is_zero(&[0.0_f32, 0.0001], 0.00001));
        assert!(is_zero(&Tuple4::ZERO, EXACT));
        assert!(!is_zero(&[f32::NAN], 1.0));
    }

    #[test]
    fn test_is_zero_at() {
        let t = Tuple3::new(0.0, 1.0, 0.0);
        assert_eq!(Tolerance::EXACT.is_zero_at(0, &t), Ok(true));
        assert_eq!(Tolerance::EXACT.is_zero_at(1, &t), Ok(false));
        assert!(Tolerance::EXACT.is_zero_at(3, &t).is_err());
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&Tuple2::new(1.0, -1e30)));
        assert!(!is_finite(&Tuple2::new(1.0, f32::INFINITY)));
        assert!(!is_finite(&[f32::NAN, 0.0]));
    }

    #[test]
    fn test_min_max_component() {
        let t = Tuple4::new(3.0, -1.0, 7.0, -1.0);
        assert_eq!(min_component(&t), Some(IndexValuePair::new(-1.0, 1)));
        assert_eq!(max_component(&t), Some(IndexValuePair::new(7.0, 2)));
        assert_eq!(min_component(&Vec::<f32>::new()), None);
    }

    #[test]
    fn test_min_max_component_nan() {
        let t = [f32::NAN, 2.0_f32, f32::NAN, 1.0];
        assert_eq!(min_component(&t), Some(IndexValuePair::new(1.0, 3)));
        assert_eq!(max_component(&t), Some(IndexValuePair::new(2.0, 1)));

        let all_nan = [f32::NAN, f32::NAN];
        let p = min_component(&all_nan).unwrap();
        assert_eq!(p.index, 0);
        assert!(p.value.is_nan());
    }

    #[test]
    fn test_compare_ext() {
        let t = Tuple2::new(0.0, 0.0005);
        assert!(t.is_zero(0.001));
        assert!(t.equals(&(0.0_f32, 0.0005_f32), EXACT));
        assert_eq!(t.equals_at(1, &[0.0_f32, 0.0], 0.001), Ok(true));
        assert_eq!(t.min_component().map(|p| p.index), Some(0));
    }

    #[test]
    fn test_tolerance_monotonic() {
        let a = [1.0_f32, 2.0, 3.0];
        let b = [1.01_f32, 2.0, 2.99];
        assert!(!equals(&a, &b, 0.001));
        assert!(equals(&a, &b, 0.011));
        assert!(equals(&a, &b, 0.5));
    }
}
