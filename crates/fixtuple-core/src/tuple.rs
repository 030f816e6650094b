//! Fixed-arity float tuple value type.
//!
//! [`Tuple`] holds `N` single-precision components. The 2, 3 and 4
//! component variants get named constructors and `v0..v3` accessors; the
//! type itself works for any `N`.
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_core::{Tuple, Tuple3};
//!
//! let mut t = Tuple3::new(1.0, 2.0, 3.0);
//! assert_eq!(t.v1(), 2.0);
//! assert_eq!(t.get(2).unwrap(), 3.0);
//!
//! t.set(0, 10.0).unwrap().set(1, 20.0).unwrap();
//! assert_eq!(t.to_array(), [10.0, 20.0, 3.0]);
//! assert!(t.get(3).is_err());
//!
//! let doubled = t * 2.0;
//! assert_eq!(doubled, Tuple::from_array([20.0, 40.0, 6.0]));
//! ```
//!
//! # Memory Layout
//!
//! `Tuple<N>` is `#[repr(transparent)]` over `[f32; N]`.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{check_buffer, check_index, Error, Result};
use crate::repr::{FixedTuple, TupleView};

/// Two-component tuple.
pub type Tuple2 = Tuple<2>;
/// Three-component tuple.
pub type Tuple3 = Tuple<3>;
/// Four-component tuple.
pub type Tuple4 = Tuple<4>;

/// An ordered, fixed-length sequence of `N` `f32` components.
///
/// # Components
///
/// Access via `.v0()`, `.v1()`, ... (for `N` up to 4), the bounds-checked
/// [`get`](Tuple::get)/[`set`](Tuple::set), or index `[0]`, `[1]`, ...
/// which panics like slice indexing.
///
/// # Example
///
/// ```rust
/// use fixtuple_core::Tuple2;
///
/// let t = Tuple2::new(0.5, 0.25);
/// assert_eq!(t.v0(), 0.5);
/// assert_eq!(t[1], 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Tuple<const N: usize> {
    components: [f32; N],
}

impl<const N: usize> Tuple<N> {
    /// Tuple with every component set to zero.
    pub const ZERO: Self = Self::splat(0.0);

    /// Tuple with every component set to one.
    pub const ONE: Self = Self::splat(1.0);

    /// Number of components.
    pub const ARITY: usize = N;

    /// Creates a tuple from an array.
    #[inline]
    pub const fn from_array(components: [f32; N]) -> Self {
        Self { components }
    }

    /// Creates a tuple with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixtuple_core::Tuple3;
    ///
    /// assert_eq!(Tuple3::splat(0.5), Tuple3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { components: [v; N] }
    }

    /// Creates a tuple from a slice of exactly `N` components.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if `values.len() != N`.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let components: [f32; N] = values.try_into().map_err(|_| {
            tracing::trace!(expected = N, got = values.len(), "tuple length mismatch");
            Error::length_mismatch(N, values.len())
        })?;
        Ok(Self { components })
    }

    /// Creates a tuple from any indexable tuple of exactly `N` components.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if `view.arity() != N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixtuple_core::Tuple2;
    ///
    /// let t = Tuple2::from_view(&vec![1.0_f32, 2.0]).unwrap();
    /// assert_eq!(t, Tuple2::new(1.0, 2.0));
    /// assert!(Tuple2::from_view(&vec![1.0_f32]).is_err());
    /// ```
    pub fn from_view<V: TupleView + ?Sized>(view: &V) -> Result<Self> {
        if view.arity() != N {
            tracing::trace!(expected = N, got = view.arity(), "tuple length mismatch");
            return Err(Error::length_mismatch(N, view.arity()));
        }
        let mut components = [0.0; N];
        for (slot, value) in components.iter_mut().zip(view.components()) {
            *slot = value;
        }
        Ok(Self { components })
    }

    /// Returns a component.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<f32> {
        check_index(index, N).map(|i| self.components[i])
    }

    /// Sets a component, returning the tuple for chaining.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= N`. The tuple is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        let i = check_index(index, N)?;
        self.components[i] = value;
        Ok(self)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.components
    }

    /// Copies the components into the front of `out`.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `out.len() < N`. `out` is unchanged.
    #[inline]
    pub fn write_to(&self, out: &mut [f32]) -> Result<()> {
        check_buffer(N, out)?;
        out[..N].copy_from_slice(&self.components);
        Ok(())
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.components
    }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.components.iter()
    }

    /// Applies `f` to every component.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self {
            components: self.components.map(f),
        }
    }

    /// Combines two tuples component by component.
    #[inline]
    #[must_use]
    pub fn zip_with(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        let mut components = self.components;
        for (c, o) in components.iter_mut().zip(other.components) {
            *c = f(*c, o);
        }
        Self { components }
    }
}

macro_rules! impl_named_components {
    ($n:literal; $($get:ident, $set:ident, $index:literal);+) => {
        impl Tuple<$n> {
            $(
                #[doc = concat!("Returns component ", stringify!($index), ".")]
                #[inline]
                pub const fn $get(&self) -> f32 {
                    self.components[$index]
                }

                #[doc = concat!("Sets component ", stringify!($index), ", returning the tuple for chaining.")]
                #[inline]
                pub fn $set(&mut self, value: f32) -> &mut Self {
                    self.components[$index] = value;
                    self
                }
            )+
        }
    };
}
impl_named_components!(2; v0, set_v0, 0; v1, set_v1, 1);
impl_named_components!(3; v0, set_v0, 0; v1, set_v1, 1; v2, set_v2, 2);
impl_named_components!(4; v0, set_v0, 0; v1, set_v1, 1; v2, set_v2, 2; v3, set_v3, 3);

// Named swaps: fixed-index swizzles that cannot fail
macro_rules! impl_named_swaps {
    ($n:literal; $($swapped:ident, $swap:ident, $a:literal, $b:literal);+) => {
        impl Tuple<$n> {
            $(
                #[doc = concat!("Returns a copy with components ", stringify!($a), " and ", stringify!($b), " swapped.")]
                #[inline]
                #[must_use]
                pub const fn $swapped(self) -> Self {
                    let mut components = self.components;
                    components[$a] = self.components[$b];
                    components[$b] = self.components[$a];
                    Self { components }
                }

                #[doc = concat!("Swaps components ", stringify!($a), " and ", stringify!($b), " in place.")]
                #[inline]
                pub fn $swap(&mut self) -> &mut Self {
                    self.components.swap($a, $b);
                    self
                }
            )+
        }
    };
}
impl_named_swaps!(2; swapped01, swap01, 0, 1);
impl_named_swaps!(3; swapped01, swap01, 0, 1; swapped02, swap02, 0, 2; swapped12, swap12, 1, 2);
impl_named_swaps!(4;
    swapped01, swap01, 0, 1; swapped02, swap02, 0, 2; swapped03, swap03, 0, 3;
    swapped12, swap12, 1, 2; swapped13, swap13, 1, 3; swapped23, swap23, 2, 3
);

impl Tuple<2> {
    /// Creates a new two-component tuple.
    #[inline]
    pub const fn new(v0: f32, v1: f32) -> Self {
        Self::from_array([v0, v1])
    }
}

impl Tuple<3> {
    /// Creates a new three-component tuple.
    #[inline]
    pub const fn new(v0: f32, v1: f32, v2: f32) -> Self {
        Self::from_array([v0, v1, v2])
    }
}

impl Tuple<4> {
    /// Creates a new four-component tuple.
    #[inline]
    pub const fn new(v0: f32, v1: f32, v2: f32, v3: f32) -> Self {
        Self::from_array([v0, v1, v2, v3])
    }
}

impl<const N: usize> Default for Tuple<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> TupleView for Tuple<N> {
    #[inline]
    fn arity(&self) -> usize {
        N
    }

    #[inline]
    fn component(&self, index: usize) -> Option<f32> {
        self.components.get(index).copied()
    }
}

impl<const N: usize> FixedTuple<N> for Tuple<N> {
    #[inline]
    fn to_components(&self) -> [f32; N] {
        self.components
    }

    #[inline]
    fn from_components(components: [f32; N]) -> Self {
        Self { components }
    }

    #[inline]
    fn set_components(&mut self, components: [f32; N]) {
        self.components = components;
    }
}

impl<const N: usize> fmt::Display for Tuple<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut iter = self.components.iter();
        if let Some(first) = iter.next() {
            fmt::Display::fmt(first, f)?;
            for c in iter {
                write!(f, ", ")?;
                fmt::Display::fmt(c, f)?;
            }
        }
        write!(f, ")")
    }
}

// Indexing
impl<const N: usize> Index<usize> for Tuple<N> {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match self.components.get(i) {
            Some(c) => c,
            None => panic!("Tuple<{}> index out of bounds: {}", N, i),
        }
    }
}

impl<const N: usize> IndexMut<usize> for Tuple<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match self.components.get_mut(i) {
            Some(c) => c,
            None => panic!("Tuple<{}> index out of bounds: {}", N, i),
        }
    }
}

macro_rules! impl_tuple_binop {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        // Tuple op Tuple (component-wise)
        impl<const N: usize> $trait for Tuple<N> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        // Tuple op f32
        impl<const N: usize> $trait<f32> for Tuple<N> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: f32) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl<const N: usize> $assign_trait for Tuple<N> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<const N: usize> $assign_trait<f32> for Tuple<N> {
            #[inline]
            fn $assign_fn(&mut self, rhs: f32) {
                *self = *self $op rhs;
            }
        }
    };
}
impl_tuple_binop!(Add, add, AddAssign, add_assign, +);
impl_tuple_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_tuple_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_tuple_binop!(Div, div, DivAssign, div_assign, /);

// f32 * Tuple
impl<const N: usize> Mul<Tuple<N>> for f32 {
    type Output = Tuple<N>;

    #[inline]
    fn mul(self, rhs: Tuple<N>) -> Tuple<N> {
        rhs.map(|c| self * c)
    }
}

impl<const N: usize> Neg for Tuple<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize> From<[f32; N]> for Tuple<N> {
    #[inline]
    fn from(a: [f32; N]) -> Self {
        Self::from_array(a)
    }
}

impl<const N: usize> From<Tuple<N>> for [f32; N] {
    #[inline]
    fn from(t: Tuple<N>) -> [f32; N] {
        t.to_array()
    }
}

impl<const N: usize> AsRef<[f32]> for Tuple<N> {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.components
    }
}

impl<const N: usize> AsMut<[f32]> for Tuple<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        &mut self.components
    }
}

impl<'a, const N: usize> IntoIterator for &'a Tuple<N> {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<const N: usize> IntoIterator for Tuple<N> {
    type Item = f32;
    type IntoIter = std::array::IntoIter<f32, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

macro_rules! impl_glam_conversions {
    ($glam:ty; $n:literal) => {
        impl From<$glam> for Tuple<$n> {
            #[inline]
            fn from(v: $glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<Tuple<$n>> for $glam {
            #[inline]
            fn from(t: Tuple<$n>) -> $glam {
                <$glam>::from_array(t.to_array())
            }
        }
    };
}
impl_glam_conversions!(glam::Vec2; 2);
impl_glam_conversions!(glam::Vec3; 3);
impl_glam_conversions!(glam::Vec4; 4);

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Tuple;

    impl<const N: usize> Serialize for Tuple<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_tuple(N)?;
            for c in &self.components {
                seq.serialize_element(c)?;
            }
            seq.end()
        }
    }

    struct TupleVisitor<const N: usize>(PhantomData<[f32; N]>);

    impl<'de, const N: usize> Visitor<'de> for TupleVisitor<N> {
        type Value = Tuple<N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {} floats", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Tuple<N>, A::Error> {
            let mut components = [0.0; N];
            for (i, slot) in components.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Ok(Tuple::from_array(components))
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for Tuple<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, TupleVisitor::<N>(PhantomData))
        }
    }
}
