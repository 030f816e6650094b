//! Component-wise arithmetic.
//!
//! Binary operations ([`add`], [`sub`], [`mul`], [`div`],
//! [`min_components`], [`max_components`]), scalar [`scale`] and fused
//! multiply-add [`fma`], each in three result forms:
//!
//! - `op(a, b) -> T` returns a new value of `a`'s concrete type
//! - `op_in_place(target, b)` stores the result in `target`
//! - `op_into(a, b, out)` writes into a caller buffer (any length)
//!
//! Division follows IEEE-754: dividing by zero yields an infinity or NaN,
//! not an error.
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_core::Tuple2;
//! use fixtuple_math::arith::{add, fma, min_components};
//!
//! let a = Tuple2::new(1.0, 5.0);
//! let b = [3.0_f32, 2.0];
//! assert_eq!(add(&a, &b), Tuple2::new(4.0, 7.0));
//! assert_eq!(min_components(&a, &b), Tuple2::new(1.0, 2.0));
//! assert_eq!(fma(&a, &b, &[1.0_f32, 1.0]), Tuple2::new(4.0, 11.0));
//! ```

use fixtuple_core::error::check_buffer;
use fixtuple_core::{Error, FixedTuple, Result, TupleView};
use tracing::trace;

use crate::kernel;

fn zip_components<const N: usize>(a: [f32; N], b: [f32; N], f: impl Fn(f32, f32) -> f32) -> [f32; N] {
    std::array::from_fn(|i| f(a[i], b[i]))
}

/// Applies `f` to each pair of components, returning a new value of `a`'s
/// type.
#[inline]
pub fn zip_map<T, B, const N: usize>(a: &T, b: &B, f: impl Fn(f32, f32) -> f32) -> T
where
    T: FixedTuple<N>,
    B: FixedTuple<N>,
{
    T::from_components(zip_components(a.to_components(), b.to_components(), f))
}

/// Applies `f` to each pair of components, storing the result in `target`.
#[inline]
pub fn zip_map_in_place<T, B, const N: usize>(target: &mut T, b: &B, f: impl Fn(f32, f32) -> f32)
where
    T: FixedTuple<N>,
    B: FixedTuple<N>,
{
    let out = zip_components(target.to_components(), b.to_components(), f);
    target.set_components(out);
}

/// Applies `f` to each pair of components of two equal-length indexable
/// tuples, writing into the front of `out`.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `a` and `b` differ in length
/// - [`Error::BufferTooSmall`] if `out` is shorter than `a`
///
/// `out` is unchanged on error.
pub fn zip_map_into<A, B>(a: &A, b: &B, out: &mut [f32], f: impl Fn(f32, f32) -> f32) -> Result<()>
where
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
{
    let len = a.arity();
    if b.arity() != len {
        trace!(expected = len, got = b.arity(), "combining tuples of different length");
        return Err(Error::length_mismatch(len, b.arity()));
    }
    check_buffer(len, out)?;
    for (slot, (x, y)) in out.iter_mut().zip(a.components().zip(b.components())) {
        *slot = f(x, y);
    }
    Ok(())
}

macro_rules! binary_op {
    ($f:expr; $(#[$doc:meta])* fn $new:ident, $in_place:ident, $into:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $new<T, B, const N: usize>(a: &T, b: &B) -> T
        where
            T: FixedTuple<N>,
            B: FixedTuple<N>,
        {
            zip_map(a, b, $f)
        }

        #[doc = concat!("In-place form of [`", stringify!($new), "`].")]
        #[inline]
        pub fn $in_place<T, B, const N: usize>(target: &mut T, b: &B)
        where
            T: FixedTuple<N>,
            B: FixedTuple<N>,
        {
            zip_map_in_place(target, b, $f)
        }

        #[doc = concat!("Buffer form of [`", stringify!($new), "`].")]
        ///
        /// # Errors
        ///
        /// See [`zip_map_into`].
        #[inline]
        pub fn $into<A, B>(a: &A, b: &B, out: &mut [f32]) -> Result<()>
        where
            A: TupleView + ?Sized,
            B: TupleView + ?Sized,
        {
            zip_map_into(a, b, out, $f)
        }
    };
}

binary_op!(|x, y| x + y;
    /// Component-wise sum.
    fn add, add_in_place, add_into);
binary_op!(|x, y| x - y;
    /// Component-wise difference `a - b`.
    fn sub, sub_in_place, sub_into);
binary_op!(|x, y| x * y;
    /// Component-wise product.
    fn mul, mul_in_place, mul_into);
binary_op!(|x, y| x / y;
    /// Component-wise quotient `a / b`.
    fn div, div_in_place, div_into);
binary_op!(kernel::min;
    /// Component-wise minimum. A NaN component yields the other operand's
    /// component.
    ///
    /// ```rust
    /// use fixtuple_math::arith::min_components;
    ///
    /// assert_eq!(min_components(&[1.0_f32, 5.0], &[3.0_f32, 2.0]), [1.0, 2.0]);
    /// ```
    fn min_components, min_components_in_place, min_components_into);
binary_op!(kernel::max;
    /// Component-wise maximum. A NaN component yields the other operand's
    /// component.
    fn max_components, max_components_in_place, max_components_into);

/// Multiplies every component by `s`.
#[inline]
pub fn scale<T, const N: usize>(t: &T, s: f32) -> T
where
    T: FixedTuple<N>,
{
    T::from_components(t.to_components().map(|c| c * s))
}

/// In-place form of [`scale`].
#[inline]
pub fn scale_in_place<T, const N: usize>(target: &mut T, s: f32)
where
    T: FixedTuple<N>,
{
    let out = target.to_components().map(|c| c * s);
    target.set_components(out);
}

/// Buffer form of [`scale`].
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `out` is shorter than `t`.
pub fn scale_into<V>(t: &V, s: f32, out: &mut [f32]) -> Result<()>
where
    V: TupleView + ?Sized,
{
    check_buffer(t.arity(), out)?;
    for (slot, c) in out.iter_mut().zip(t.components()) {
        *slot = c * s;
    }
    Ok(())
}

/// Fused multiply-add: `a * b + c` per component, rounded once.
#[inline]
pub fn fma<T, B, C, const N: usize>(a: &T, b: &B, c: &C) -> T
where
    T: FixedTuple<N>,
    B: FixedTuple<N>,
    C: FixedTuple<N>,
{
    let (a, b, c) = (a.to_components(), b.to_components(), c.to_components());
    T::from_components(std::array::from_fn(|i| kernel::fma(a[i], b[i], c[i])))
}

/// In-place form of [`fma`]: `target = target * b + c`.
#[inline]
pub fn fma_in_place<T, B, C, const N: usize>(target: &mut T, b: &B, c: &C)
where
    T: FixedTuple<N>,
    B: FixedTuple<N>,
    C: FixedTuple<N>,
{
    let out = fma(&*target, b, c).to_components();
    target.set_components(out);
}

/// Buffer form of [`fma`].
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if the operands differ in length
/// - [`Error::BufferTooSmall`] if `out` is shorter than `a`
pub fn fma_into<A, B, C>(a: &A, b: &B, c: &C, out: &mut [f32]) -> Result<()>
where
    A: TupleView + ?Sized,
    B: TupleView + ?Sized,
    C: TupleView + ?Sized,
{
    let len = a.arity();
    for got in [b.arity(), c.arity()] {
        if got != len {
            trace!(expected = len, got, "fma operands of different length");
            return Err(Error::length_mismatch(len, got));
        }
    }
    check_buffer(len, out)?;
    let products = a.components().zip(b.components());
    for (slot, ((x, y), z)) in out.iter_mut().zip(products.zip(c.components())) {
        *slot = kernel::fma(x, y, z);
    }
    Ok(())
}
