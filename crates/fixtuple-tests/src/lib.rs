//! Integration tests for fixtuple crates.
//!
//! This crate contains end-to-end scenarios that exercise `fixtuple-core`
//! and `fixtuple-math` together, plus property tests in `properties.rs`.
//!
//! Set `RUST_LOG=fixtuple_math=trace` to see why an operation was rejected.

use tracing_subscriber::EnvFilter;

#[cfg(test)]
mod properties;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init_tracing;
    use approx::assert_abs_diff_eq;
    use fixtuple_core::{Error, IndexValuePair, Tuple, Tuple2, Tuple3, Tuple4};
    use fixtuple_math::prelude::*;
    use fixtuple_math::{
        arrange, equals, fma, int_lerp, is_zero, lerp, lerp_in_place, min_components,
        smootherstep, step, swizzle,
    };

    // ---------------------------------------------------------------------
    // Reference scenarios
    // ---------------------------------------------------------------------

    #[test]
    fn test_scenario_equals() {
        let a = [1.0_f32, 2.0];
        assert!(equals(&a, &[1.0_f32, 2.0], 0.0));
        assert!(equals(&a, &[1.0_f32, 2.0001], 0.001));
        assert!(!equals(&a, &[1.0_f32, 2.0001], 0.00001));
    }

    #[test]
    fn test_scenario_arrange() {
        let r = arrange(&Tuple3::new(10.0, 20.0, 30.0), [2, 0, 1]).unwrap();
        assert_eq!(r, Tuple3::new(30.0, 10.0, 20.0));
    }

    #[test]
    fn test_scenario_swizzle() {
        assert_eq!(swizzle(&[1.0_f32, 2.0], 0, 1).unwrap(), [2.0, 1.0]);
    }

    #[test]
    fn test_scenario_lerp() {
        let r = lerp(0.5, &Tuple2::ZERO, &Tuple2::splat(10.0));
        assert_eq!(r, Tuple2::new(5.0, 5.0));
    }

    #[test]
    fn test_scenario_min_components() {
        assert_eq!(min_components(&[1.0_f32, 5.0], &[3.0_f32, 2.0]), [1.0, 2.0]);
    }

    #[test]
    fn test_scenario_is_zero() {
        let t = (0.0_f32, 0.0001_f32);
        assert!(is_zero(&t, 0.001));
        assert!(!is_zero(&t, 0.00001));
    }

    // ---------------------------------------------------------------------
    // Error reporting
    // ---------------------------------------------------------------------

    #[test]
    fn test_rejections_are_typed() {
        init_tracing();

        let t = Tuple3::new(1.0, 2.0, 3.0);
        assert_eq!(arrange(&t, [0, 1, 3]), Err(Error::index_out_of_range(3, 3)));
        assert_eq!(swizzle(&t, 5, 0), Err(Error::index_out_of_range(5, 3)));

        let mut out = [0.0_f32; 2];
        let err = fixtuple_math::lerp_into(0.5, &t, &t, &mut out).unwrap_err();
        assert!(err.is_size_error());
        assert_eq!(err.to_string(), "output buffer too small: need 3 components, got 2");
    }

    #[test]
    fn test_size_mismatch_is_not_an_error_for_comparison() {
        init_tracing();
        assert!(!equals(&[1.0_f32, 2.0], &[1.0_f32, 2.0, 3.0], 10.0));
        assert!(!Tolerance::DEFAULT.equals(&vec![0.0_f32; 3], &Tuple4::ZERO));
    }

    #[test]
    fn test_absent_operands() {
        let tol = Tolerance::EXACT;
        let t = Tuple2::new(1.0, 2.0);
        assert!(tol.equals_opt::<Tuple2, Tuple2>(None, None));
        assert!(!tol.equals_opt(Some(&t), None::<&Tuple2>));
        assert_eq!(tol.equals_opt_at(1, Some(&t), None::<&Tuple2>), Ok(false));
        assert!(tol.equals_opt_at(2, None::<&Tuple2>, Some(&t)).is_err());
    }

    // ---------------------------------------------------------------------
    // Workflows
    // ---------------------------------------------------------------------

    /// Animate a point toward a target, then reorder and measure it.
    #[test]
    fn test_animation_workflow() {
        let mut pos = Tuple3::new(0.0, 0.0, 0.0);
        let target = glam::Vec3::new(8.0, 4.0, 2.0);

        for _ in 0..3 {
            lerp_in_place(0.5, &mut pos, &target);
        }
        assert!(equals(&pos, &[7.0_f32, 3.5, 1.75], 0.0));

        let yzx = arrange(&pos, [1, 2, 0]).unwrap();
        let peak = yzx.max_component().unwrap();
        assert_eq!(peak, IndexValuePair::new(7.0, 2));

        let eased = smootherstep(0.5, &yzx, &target);
        assert_abs_diff_eq!(eased.v2(), 4.5, epsilon = 1e-6);
    }

    #[test]
    fn test_quantize_workflow() {
        let steps = [0.0, 0.25, 0.5, 0.75, 1.0];
        let a = [0.0_f32, 100.0];
        let b = [3.0_f32, 0.0];
        let quantized: Vec<[f32; 2]> = steps.iter().map(|&t| int_lerp(t, &a, &b)).collect();
        assert_eq!(
            quantized,
            vec![[0.0, 100.0], [1.0, 75.0], [2.0, 50.0], [2.0, 25.0], [3.0, 0.0]]
        );
        assert!(quantized.iter().all(|q| q.iter().all(|c| c.fract() == 0.0)));
    }

    #[test]
    fn test_step_and_fma() {
        let a = Tuple4::splat(1.0);
        let b = Tuple4::new(2.0, 3.0, 4.0, 5.0);
        let s = step(0.7, 0.7, &a, &b);
        assert_eq!(s, b);
        assert_eq!(fma(&s, &b, &a), Tuple4::new(5.0, 10.0, 17.0, 26.0));
    }

    #[test]
    fn test_operator_chain_matches_free_functions() {
        let a = Tuple3::new(1.0, 2.0, 3.0);
        let b = Tuple3::new(0.5, 0.5, 0.5);
        let by_ops = (a - b) * 2.0 + -b;
        let by_fns = fixtuple_math::add(
            &fixtuple_math::scale(&fixtuple_math::sub(&a, &b), 2.0),
            &fixtuple_math::scale(&b, -1.0),
        );
        assert_eq!(by_ops, by_fns);
    }

    // ---------------------------------------------------------------------
    // Serialization
    // ---------------------------------------------------------------------

    #[test]
    fn test_serde_json() {
        let t = Tuple::<3>::from_array([1.0, 2.5, -3.0]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[1.0,2.5,-3.0]");
        let back: Tuple3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<Tuple3>("[1.0,2.0]").is_err());

        let pair = IndexValuePair::new(4.0, 1);
        let json = serde_json::to_string(&pair).unwrap();
        let back: IndexValuePair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
