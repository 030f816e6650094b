//! Component rearrangement: arrange (gather by index list) and swizzle
//! (pairwise swap).
//!
//! A [`Rearranger`] maps every output position to the source position it
//! reads from. [`Arrange`] reads `indices[i]` for output `i`; [`Swizzle`]
//! exchanges two positions and leaves the rest alone.
//!
//! All indices are validated before anything is written, so a failed call
//! never leaves a partially rearranged result behind. Out-of-range indices
//! are errors; they are never clamped or wrapped.
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_core::Tuple3;
//! use fixtuple_math::arrange::{arrange, swizzle};
//!
//! let t = Tuple3::new(10.0, 20.0, 30.0);
//! assert_eq!(arrange(&t, [2, 0, 1]).unwrap(), Tuple3::new(30.0, 10.0, 20.0));
//! assert_eq!(swizzle(&t, 0, 2).unwrap(), Tuple3::new(30.0, 20.0, 10.0));
//! assert!(arrange(&t, [0, 1, 3]).is_err());
//! ```
//!
//! Named swaps such as [`Tuple::swapped01`](fixtuple_core::Tuple::swapped01)
//! are the fixed-index, infallible specializations of [`swizzle`].

use fixtuple_core::error::{check_buffer, check_index};
use fixtuple_core::{Error, FixedTuple, Result, TupleView};
use tracing::trace;

/// Maps output positions to source positions.
pub trait Rearranger {
    /// Number of output components produced from a source of `source_len`.
    fn output_len(&self, source_len: usize) -> usize;

    /// Source position that output position `dest` reads from.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if the mapping refers outside a source of
    /// `source_len` components.
    fn source_index(&self, dest: usize, source_len: usize) -> Result<usize>;

    /// Checks parameters that do not depend on an output position.
    ///
    /// Called once before any output is produced, so it also runs for an
    /// empty source.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if a parameter is out of range for a
    /// source of `source_len` components.
    fn validate(&self, _source_len: usize) -> Result<()> {
        Ok(())
    }
}

/// Gathers `source[indices[i]]` into output position `i`.
///
/// Indices need not form a permutation: repeats and omissions are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrange<'a> {
    indices: &'a [usize],
}

impl<'a> Arrange<'a> {
    /// Creates an arrangement from an index list.
    #[inline]
    pub const fn new(indices: &'a [usize]) -> Self {
        Self { indices }
    }
}

impl Rearranger for Arrange<'_> {
    #[inline]
    fn output_len(&self, _source_len: usize) -> usize {
        self.indices.len()
    }

    #[inline]
    fn source_index(&self, dest: usize, source_len: usize) -> Result<usize> {
        let &index = self
            .indices
            .get(dest)
            .ok_or(Error::index_out_of_range(dest, self.indices.len()))?;
        check_index(index, source_len)
    }
}

/// Exchanges positions `a` and `b`. Identity when `a == b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swizzle {
    /// First position
    pub a: usize,
    /// Second position
    pub b: usize,
}

impl Swizzle {
    /// Creates a swap of positions `a` and `b`.
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

impl Rearranger for Swizzle {
    #[inline]
    fn output_len(&self, source_len: usize) -> usize {
        source_len
    }

    #[inline]
    fn source_index(&self, dest: usize, source_len: usize) -> Result<usize> {
        self.validate(source_len)?;
        Ok(if dest == self.a {
            self.b
        } else if dest == self.b {
            self.a
        } else {
            dest
        })
    }

    #[inline]
    fn validate(&self, source_len: usize) -> Result<()> {
        check_index(self.a, source_len)?;
        check_index(self.b, source_len)?;
        Ok(())
    }
}

fn rearrange_components<R, const N: usize>(r: &R, source: [f32; N]) -> Result<[f32; N]>
where
    R: Rearranger + ?Sized,
{
    let out_len = r.output_len(N);
    if out_len != N {
        trace!(expected = N, got = out_len, "rearrangement changes arity");
        return Err(Error::length_mismatch(N, out_len));
    }
    r.validate(N)?;
    let mut out = [0.0; N];
    for (dest, slot) in out.iter_mut().enumerate() {
        *slot = source[r.source_index(dest, N)?];
    }
    Ok(out)
}

/// Rearranges `source`, returning a new value of the same type.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] for any out-of-range index
/// - [`Error::LengthMismatch`] if the rearranger does not produce exactly
///   `N` components
pub fn rearrange<R, T, const N: usize>(r: &R, source: &T) -> Result<T>
where
    R: Rearranger + ?Sized,
    T: FixedTuple<N>,
{
    rearrange_components(r, source.to_components()).map(T::from_components)
}

/// Rearranges `target` in place. `target` is unchanged on error.
///
/// # Errors
///
/// Same as [`rearrange`].
pub fn rearrange_in_place<R, T, const N: usize>(r: &R, target: &mut T) -> Result<()>
where
    R: Rearranger + ?Sized,
    T: FixedTuple<N>,
{
    let out = rearrange_components(r, target.to_components())?;
    target.set_components(out);
    Ok(())
}

/// Rearranges any indexable tuple into the front of `out`.
///
/// Works for arbitrary lengths; the output length is
/// [`Rearranger::output_len`]. `out` is unchanged on error.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] for any out-of-range index
/// - [`Error::BufferTooSmall`] if `out` cannot hold the result
pub fn rearrange_into<R, V>(r: &R, source: &V, out: &mut [f32]) -> Result<()>
where
    R: Rearranger + ?Sized,
    V: TupleView + ?Sized,
{
    let len = source.arity();
    r.validate(len)?;
    let out_len = r.output_len(len);
    check_buffer(out_len, out)?;
    for dest in 0..out_len {
        r.source_index(dest, len)?;
    }
    for (dest, slot) in out[..out_len].iter_mut().enumerate() {
        let index = r.source_index(dest, len)?;
        *slot = source.component(index).unwrap_or(f32::NAN);
    }
    Ok(())
}

/// Returns `result` with `result[i] = source[indices[i]]`.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if any index is `>= N`.
#[inline]
pub fn arrange<T, const N: usize>(source: &T, indices: [usize; N]) -> Result<T>
where
    T: FixedTuple<N>,
{
    rearrange(&Arrange::new(&indices), source)
}

/// In-place form of [`arrange`].
///
/// # Errors
///
/// Same as [`arrange`]; `target` is unchanged on error.
#[inline]
pub fn arrange_in_place<T, const N: usize>(target: &mut T, indices: [usize; N]) -> Result<()>
where
    T: FixedTuple<N>,
{
    rearrange_in_place(&Arrange::new(&indices), target)
}

/// Gathers `source[indices[i]]` into `out[i]` for an index list of any
/// length.
///
/// # Example
///
/// ```rust
/// use fixtuple_math::arrange::arrange_into;
///
/// let mut out = [0.0_f32; 5];
/// arrange_into(&[1.0_f32, 2.0, 3.0][..], &[2, 2, 0, 1, 0], &mut out).unwrap();
/// assert_eq!(out, [3.0, 3.0, 1.0, 2.0, 1.0]);
/// ```
///
/// # Errors
///
/// See [`rearrange_into`].
#[inline]
pub fn arrange_into<V>(source: &V, indices: &[usize], out: &mut [f32]) -> Result<()>
where
    V: TupleView + ?Sized,
{
    rearrange_into(&Arrange::new(indices), source, out)
}

/// Returns a copy of `source` with positions `a` and `b` swapped.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if `a` or `b` is `>= N`.
#[inline]
pub fn swizzle<T, const N: usize>(source: &T, a: usize, b: usize) -> Result<T>
where
    T: FixedTuple<N>,
{
    rearrange(&Swizzle::new(a, b), source)
}

/// In-place form of [`swizzle`].
///
/// # Errors
///
/// Same as [`swizzle`]; `target` is unchanged on error.
#[inline]
pub fn swizzle_in_place<T, const N: usize>(target: &mut T, a: usize, b: usize) -> Result<()>
where
    T: FixedTuple<N>,
{
    rearrange_in_place(&Swizzle::new(a, b), target)
}

/// Buffer form of [`swizzle`] for an indexable tuple of any length.
///
/// # Errors
///
/// See [`rearrange_into`].
#[inline]
pub fn swizzle_into<V>(source: &V, a: usize, b: usize, out: &mut [f32]) -> Result<()>
where
    V: TupleView + ?Sized,
{
    rearrange_into(&Swizzle::new(a, b), source, out)
}
