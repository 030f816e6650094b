//! Property tests for the operation families.
//!
//! Components are drawn from a bounded finite range so that differences
//! and products stay exact enough to compare with `==`.

use fixtuple_core::{Tuple4, TupleView};
use fixtuple_math::compare::{Comparator, Tolerance};
use fixtuple_math::{
    Linear, arrange, equals, int_lerp, interpolate, kernel, lerp, lerp_into, max_component,
    max_components, min_component, min_components, smoothstep, step, swizzle,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn component() -> impl Strategy<Value = f32> {
    -1000.0_f32..1000.0
}

fn tuple4() -> impl Strategy<Value = Tuple4> {
    proptest::array::uniform4(component()).prop_map(Tuple4::from_array)
}

fn tolerance() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0_f32), 0.0_f32..10.0]
}

fn between(v: f32, a: f32, b: f32) -> bool {
    a.min(b) <= v && v <= a.max(b)
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn proptest_equals_reflexive(t in tuple4(), tol in tolerance()) {
        prop_assert!(equals(&t, &t, tol));
        prop_assert!(equals(&t.to_array(), &t, tol));
    }

    #[test]
    fn proptest_equals_symmetric(a in tuple4(), b in tuple4(), tol in tolerance()) {
        prop_assert_eq!(equals(&a, &b, tol), equals(&b, &a, tol));
    }

    #[test]
    fn proptest_tolerance_monotonic(
        a in tuple4(),
        b in tuple4(),
        tol in tolerance(),
        extra in 0.0_f32..10.0,
    ) {
        if equals(&a, &b, tol) {
            prop_assert!(equals(&a, &b, tol + extra));
        }
        if !equals(&a, &b, tol + extra) {
            prop_assert!(!equals(&a, &b, tol));
        }
    }

    #[test]
    fn proptest_equals_matches_componentwise(a in tuple4(), b in tuple4(), tol in tolerance()) {
        let all = (0..4).all(|i| Tolerance::new(tol).equals_at(i, &a, &b) == Ok(true));
        prop_assert_eq!(equals(&a, &b, tol), all);
    }

    #[test]
    fn proptest_min_max_component_bounds(t in tuple4()) {
        let lo = min_component(&t).unwrap();
        let hi = max_component(&t).unwrap();
        for (i, c) in t.components().enumerate() {
            prop_assert!(lo.value <= c && c <= hi.value);
            if c == lo.value {
                prop_assert!(lo.index <= i);
            }
            if c == hi.value {
                prop_assert!(hi.index <= i);
            }
        }
        prop_assert_eq!(t[lo.index], lo.value);
        prop_assert_eq!(t[hi.index], hi.value);
    }
}

// ---------------------------------------------------------------------------
// Rearrangement
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn proptest_arrange_identity(t in tuple4()) {
        prop_assert_eq!(arrange(&t, [0, 1, 2, 3]).unwrap(), t);
    }

    #[test]
    fn proptest_swizzle_involution(t in tuple4(), i in 0usize..4, j in 0usize..4) {
        let once = swizzle(&t, i, j).unwrap();
        prop_assert_eq!(once[i], t[j]);
        prop_assert_eq!(once[j], t[i]);
        prop_assert_eq!(swizzle(&once, i, j).unwrap(), t);
    }

    #[test]
    fn proptest_rearrange_rejects_out_of_range(t in tuple4(), bad in 4usize..64) {
        let err = swizzle(&t, 0, bad).unwrap_err();
        prop_assert!(err.is_index_error());
        prop_assert!(arrange(&t, [bad, 0, 1, 2]).is_err());
    }
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn proptest_lerp_endpoints(a in tuple4(), b in tuple4()) {
        prop_assert_eq!(lerp(0.0, &a, &b), a);
        prop_assert_eq!(lerp(1.0, &a, &b), b);
    }

    #[test]
    fn proptest_lerp_stays_between(a in tuple4(), b in tuple4(), alpha in 0.0_f64..=1.0) {
        let r = lerp(alpha, &a, &b);
        for i in 0..4 {
            prop_assert!(between(r[i], a[i], b[i]));
        }
    }

    #[test]
    fn proptest_smoothstep_stays_between(a in tuple4(), b in tuple4(), alpha in -2.0_f64..3.0) {
        let r = smoothstep(alpha, &a, &b);
        for i in 0..4 {
            prop_assert!(between(r[i], a[i], b[i]));
        }
    }

    #[test]
    fn proptest_step_threshold(
        a in tuple4(),
        b in tuple4(),
        alpha in -1.0_f64..2.0,
        midpoint in 0.0_f64..1.0,
    ) {
        let expected = if alpha < midpoint { a } else { b };
        prop_assert_eq!(step(alpha, midpoint, &a, &b), expected);
    }

    #[test]
    fn proptest_int_lerp_is_integral(a in tuple4(), b in tuple4(), alpha in -1.0_f64..2.0) {
        let r = int_lerp(alpha, &a, &b);
        prop_assert!(r.iter().all(|c| c.fract() == 0.0));
        let exact = lerp(alpha, &a, &b);
        for i in 0..4 {
            prop_assert!((r[i] - exact[i]).abs() <= 0.5 + 1e-3);
        }
    }

    #[test]
    fn proptest_into_matches_new(a in tuple4(), b in tuple4(), alpha in 0.0_f64..=1.0) {
        let mut out = [0.0_f32; 4];
        lerp_into(alpha, &a, &b, &mut out).unwrap();
        prop_assert_eq!(out, lerp(alpha, &a, &b).to_array());
        prop_assert_eq!(interpolate(&Linear, alpha, &a.to_array(), &b), out);
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn proptest_min_max_components(a in tuple4(), b in tuple4()) {
        let lo = min_components(&a, &b);
        let hi = max_components(&a, &b);
        for i in 0..4 {
            prop_assert_eq!(lo[i], kernel::min(a[i], b[i]));
            prop_assert_eq!(hi[i], kernel::max(a[i], b[i]));
            prop_assert!(lo[i] <= hi[i]);
        }
    }

    #[test]
    fn proptest_operators_match_functions(a in tuple4(), b in tuple4(), s in -10.0_f32..10.0) {
        prop_assert_eq!(a + b, fixtuple_math::add(&a, &b));
        prop_assert_eq!(a - b, fixtuple_math::sub(&a, &b));
        prop_assert_eq!(a * s, fixtuple_math::scale(&a, s));
    }
}
