//! # fixtuple-math
//!
//! Operations on fixed-arity float tuples.
//!
//! This crate provides the operation families for the value types in
//! [`fixtuple_core`]:
//!
//! - [`compare`] - exact and tolerance-based equality, zero checks, min/max
//! - [`interp`] - lerp, step, smoothstep, smootherstep, int_lerp
//! - [`arrange`] - arrange by index list, swizzle two positions
//! - [`arith`] - component-wise add/sub/mul/div, scale, fma, min/max
//! - [`kernel`] - the scalar primitives the families are built from
//!
//! # Design
//!
//! Every operation is generic over the representation traits, so it works
//! the same on [`Tuple`](fixtuple_core::Tuple), `[f32; N]`, slices,
//! `Vec<f32>`, scalar tuples and glam vectors. Each family has a strategy
//! trait ([`Comparator`], [`Interpolator`], [`Rearranger`]) with statically
//! dispatched implementations, plus free functions for the common case.
//!
//! Results go to one of three places:
//!
//! ```text
//! op(.., a, b)          -> new value of a's type
//! op_in_place(.., t, b) -> overwrites t
//! op_into(.., a, b, out)-> writes into &mut [f32], fallible
//! ```
//!
//! # Usage
//!
//! ```rust
//! use fixtuple_core::Tuple3;
//! use fixtuple_math::{arrange, equals, lerp};
//!
//! let a = Tuple3::new(10.0, 20.0, 30.0);
//! let b = arrange(&a, [2, 0, 1]).unwrap();
//! assert_eq!(b, Tuple3::new(30.0, 10.0, 20.0));
//!
//! let mid = lerp(0.5, &a, &b);
//! assert!(equals(&mid, &[20.0_f32, 15.0, 25.0], 1e-6));
//! ```
//!
//! # Dependencies
//!
//! - [`fixtuple-core`] - Value types, representation traits, errors
//! - [`tracing`] - Diagnostics for rejected operations
//!
//! # Used By
//!
//! - `fixtuple-tests` - Cross-crate scenarios and property tests
//! - `fixtuple-bench` - Benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod arith;
pub mod arrange;
pub mod compare;
pub mod interp;
pub mod kernel;

pub use arith::{
    add, add_in_place, add_into, div, div_in_place, div_into, fma, fma_in_place, fma_into,
    max_components, max_components_in_place, max_components_into, min_components,
    min_components_in_place, min_components_into, mul, mul_in_place, mul_into, scale,
    scale_in_place, scale_into, sub, sub_in_place, sub_into,
};
pub use arrange::{
    Arrange, Rearranger, Swizzle, arrange, arrange_in_place, arrange_into, rearrange,
    rearrange_in_place, rearrange_into, swizzle, swizzle_in_place, swizzle_into,
};
pub use compare::{
    CompareExt, Comparator, DEFAULT_TOLERANCE, EXACT, Tolerance, equals, equals_at, equals_exact,
    equals_opt, is_finite, is_zero, max_component, min_component,
};
pub use interp::{
    IntLerp, Interpolator, Linear, SmoothStep, SmootherStep, Step, int_lerp, int_lerp_in_place,
    int_lerp_into, interpolate, interpolate_in_place, interpolate_into, lerp, lerp_in_place,
    lerp_into, smootherstep, smootherstep_in_place, smootherstep_into, smoothstep,
    smoothstep_in_place, smoothstep_into, step, step_in_place, step_into,
};

/// Commonly used items.
pub mod prelude {
    pub use crate::compare::{CompareExt, Comparator, Tolerance};
    pub use crate::interp::Interpolator;
    pub use crate::arrange::Rearranger;
    pub use fixtuple_core::prelude::*;
}
