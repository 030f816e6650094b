//! Representation traits for tuple-shaped inputs.
//!
//! Every operation in the workspace is written once against these traits,
//! so any of the supported representations can be passed wherever a tuple
//! is expected:
//!
//! - [`TupleView`] - generic indexable tuple: a length plus indexed reads.
//!   Implemented for [`Tuple`](crate::Tuple), `[f32; N]`, `[f32]`,
//!   `Vec<f32>`, scalar tuples, and glam vectors.
//! - [`FixedTuple`] - a view whose length is the compile-time arity `N`,
//!   which can also be rebuilt from `N` components. This is the factory the
//!   "create new" operation variants use, so results keep the caller's
//!   concrete type.
//!
//! # Example
//!
//! ```rust
//! use fixtuple_core::{FixedTuple, Tuple2, TupleView};
//!
//! let t = Tuple2::new(1.0, 2.0);
//! let a = [1.0_f32, 2.0];
//! let s = (1.0_f32, 2.0_f32);
//!
//! assert_eq!(t.to_components(), a.to_components());
//! assert_eq!(s.arity(), 2);
//! assert_eq!(<(f32, f32)>::from_components([3.0, 4.0]), (3.0, 4.0));
//! ```

use std::iter::FusedIterator;
use std::ops::Range;

/// Generic indexable tuple of `f32` components.
pub trait TupleView {
    /// Returns the number of components.
    fn arity(&self) -> usize;

    /// Returns a component, or `None` if `index` is out of range.
    fn component(&self, index: usize) -> Option<f32>;

    /// Returns an iterator over the components.
    fn components(&self) -> Components<'_, Self> {
        Components {
            range: 0..self.arity(),
            view: self,
        }
    }
}

/// Indexable tuple with a fixed arity of `N` components.
pub trait FixedTuple<const N: usize>: TupleView + Sized {
    /// Copies the components into an array.
    fn to_components(&self) -> [f32; N];

    /// Builds a new value of this type from `N` components.
    fn from_components(components: [f32; N]) -> Self;

    /// Overwrites every component.
    fn set_components(&mut self, components: [f32; N]) {
        *self = Self::from_components(components);
    }
}

/// Iterator over the components of a [`TupleView`].
#[derive(Debug, Clone)]
pub struct Components<'a, V: ?Sized> {
    range: Range<usize>,
    view: &'a V,
}

impl<V: TupleView + ?Sized> Iterator for Components<'_, V> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.range.next().and_then(|i| self.view.component(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<V: TupleView + ?Sized> ExactSizeIterator for Components<'_, V> {}
impl<V: TupleView + ?Sized> FusedIterator for Components<'_, V> {}

impl<V: TupleView + ?Sized> TupleView for &V {
    #[inline]
    fn arity(&self) -> usize {
        (**self).arity()
    }

    #[inline]
    fn component(&self, index: usize) -> Option<f32> {
        (**self).component(index)
    }
}

impl TupleView for [f32] {
    #[inline]
    fn arity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn component(&self, index: usize) -> Option<f32> {
        self.get(index).copied()
    }
}

impl TupleView for Vec<f32> {
    #[inline]
    fn arity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn component(&self, index: usize) -> Option<f32> {
        self.get(index).copied()
    }
}

impl<const N: usize> TupleView for [f32; N] {
    #[inline]
    fn arity(&self) -> usize {
        N
    }

    #[inline]
    fn component(&self, index: usize) -> Option<f32> {
        self.get(index).copied()
    }
}

impl<const N: usize> FixedTuple<N> for [f32; N] {
    #[inline]
    fn to_components(&self) -> [f32; N] {
        *self
    }

    #[inline]
    fn from_components(components: [f32; N]) -> Self {
        components
    }

    #[inline]
    fn set_components(&mut self, components: [f32; N]) {
        *self = components;
    }
}

// Individually passed scalars: (v0, v1), (v0, v1, v2), (v0, v1, v2, v3)
macro_rules! impl_scalar_tuple {
    ($n:literal; $($t:ident),+; $($index:tt),+) => {
        impl TupleView for ($($t,)+) {
            #[inline]
            fn arity(&self) -> usize {
                $n
            }

            #[inline]
            fn component(&self, index: usize) -> Option<f32> {
                match index {
                    $($index => Some(self.$index),)+
                    _ => None,
                }
            }
        }

        impl FixedTuple<$n> for ($($t,)+) {
            #[inline]
            fn to_components(&self) -> [f32; $n] {
                [$(self.$index),+]
            }

            #[inline]
            fn from_components(c: [f32; $n]) -> Self {
                ($(c[$index],)+)
            }
        }
    };
}
impl_scalar_tuple!(2; f32, f32; 0, 1);
impl_scalar_tuple!(3; f32, f32, f32; 0, 1, 2);
impl_scalar_tuple!(4; f32, f32, f32, f32; 0, 1, 2, 3);

macro_rules! impl_glam_vec {
    ($ty:ty; $n:literal) => {
        impl TupleView for $ty {
            #[inline]
            fn arity(&self) -> usize {
                $n
            }

            #[inline]
            fn component(&self, index: usize) -> Option<f32> {
                (index < $n).then(|| self[index])
            }
        }

        impl FixedTuple<$n> for $ty {
            #[inline]
            fn to_components(&self) -> [f32; $n] {
                self.to_array()
            }

            #[inline]
            fn from_components(c: [f32; $n]) -> Self {
                <$ty>::from_array(c)
            }
        }
    };
}
impl_glam_vec!(glam::Vec2; 2);
impl_glam_vec!(glam::Vec3; 3);
impl_glam_vec!(glam::Vec4; 4);
