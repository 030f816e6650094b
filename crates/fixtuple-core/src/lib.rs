//! # fixtuple-core
//!
//! Core types for fixed-arity float tuples.
//!
//! This crate provides the foundational types used throughout the fixtuple
//! workspace:
//!
//! - [`Tuple`], [`Tuple2`], [`Tuple3`], [`Tuple4`] - fixed-length `f32` tuples
//! - [`IndexValuePair`] - result of min/max-with-position queries
//! - [`TupleView`], [`FixedTuple`] - traits that let arrays, slices, scalar
//!   tuples and glam vectors stand in for a tuple
//! - [`Error`], [`Result`] - the shared error type
//!
//! ## Design Philosophy
//!
//! There is one canonical representation, `[f32; N]`. Every other
//! representation is adapted to it through [`TupleView`] (length plus
//! indexed reads) or [`FixedTuple`] (compile-time arity plus a factory), so
//! operations in `fixtuple-math` are written once per family instead of once
//! per argument shape:
//!
//! ```
//! use fixtuple_core::prelude::*;
//!
//! fn sum<V: TupleView + ?Sized>(v: &V) -> f32 {
//!     v.components().sum()
//! }
//!
//! assert_eq!(sum(&Tuple3::new(1.0, 2.0, 3.0)), 6.0);
//! assert_eq!(sum(&[1.0_f32, 2.0, 3.0][..]), 6.0);
//! assert_eq!(sum(&(1.0_f32, 2.0_f32, 3.0_f32)), 6.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! fixtuple-core (this crate)
//!    ^
//!    |
//!    +-- fixtuple-math (compare, interp, arrange, arith)
//!    +-- fixtuple-tests, fixtuple-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Tuple`] and [`IndexValuePair`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pair;
pub mod repr;
pub mod tuple;

// Re-exports for convenience
pub use error::{Error, Result};
pub use pair::IndexValuePair;
pub use repr::{Components, FixedTuple, TupleView};
pub use tuple::{Tuple, Tuple2, Tuple3, Tuple4};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use fixtuple_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pair::IndexValuePair;
    pub use crate::repr::{FixedTuple, TupleView};
    pub use crate::tuple::{Tuple, Tuple2, Tuple3, Tuple4};
}
