//! Property tests for curve-series construction.

use bandit_curves::{
    assign_colors, beta_density, build_curve_series, build_curve_series_with, BetaParams,
    CurveConfig, Error, LengthPolicy, NormalParams,
};
use proptest::prelude::*;

fn beta_arm() -> impl Strategy<Value = BetaParams> {
    ("[A-Z][a-z]{0,4}", 0.05f64..40.0, 0.05f64..40.0)
        .prop_map(|(name, a, b)| BetaParams::new(name, a, b))
}

fn normal_arm() -> impl Strategy<Value = NormalParams> {
    ("[A-Z][a-z]{0,4}", -4.0f64..4.0, 0.1f64..3.0)
        .prop_map(|(name, mu, sigma)| NormalParams::new(name, mu, sigma))
}

fn bits(vs: &[f64]) -> Vec<u64> {
    vs.iter().map(|v| v.to_bits()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    /// Point count equals the grid; key count equals priors + posteriors.
    #[test]
    fn beta_series_shape(arms in proptest::collection::vec((beta_arm(), beta_arm()), 1..6)) {
        let (priors, posteriors): (Vec<_>, Vec<_>) = arms.into_iter().unzip();
        let s = build_curve_series(&priors, &posteriors).unwrap();
        prop_assert_eq!(s.points().len(), 100);
        prop_assert_eq!(s.colors().len(), priors.len());
        for p in s.points() {
            prop_assert_eq!(p.len(), priors.len() + posteriors.len());
        }
    }

    #[test]
    fn normal_series_shape(arms in proptest::collection::vec((normal_arm(), normal_arm()), 1..4)) {
        let (priors, posteriors): (Vec<_>, Vec<_>) = arms.into_iter().unzip();
        let s = build_curve_series(&priors, &posteriors).unwrap();
        prop_assert_eq!(s.points().len(), 1000);
        for p in s.points() {
            prop_assert_eq!(p.len(), priors.len() + posteriors.len());
            for &v in p.values() {
                prop_assert!(v.is_finite() && v >= 0.0);
            }
        }
    }

    /// Same input, bit-identical output, including NaN payload positions.
    #[test]
    fn builds_are_deterministic(arms in proptest::collection::vec((beta_arm(), beta_arm()), 1..5)) {
        let (priors, posteriors): (Vec<_>, Vec<_>) = arms.into_iter().unzip();
        let a = build_curve_series(&priors, &posteriors).unwrap();
        let b = build_curve_series(&priors, &posteriors).unwrap();
        prop_assert_eq!(a.keys(), b.keys());
        prop_assert_eq!(a.colors(), b.colors());
        for (pa, pb) in a.points().iter().zip(b.points()) {
            prop_assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            prop_assert_eq!(bits(pa.values()), bits(pb.values()));
        }
    }

    /// Stored values are exactly the kernel's values.
    #[test]
    fn values_match_kernel(arm in beta_arm(), i in 0usize..100) {
        let arms = vec![arm.clone()];
        let s = build_curve_series(&arms, &arms).unwrap();
        let p = &s.points()[i];
        let expected = beta_density(p.x, arm.alpha, arm.beta);
        let got = p.get(&format!("Prior-0_{}", arm.name)).unwrap();
        prop_assert_eq!(got.to_bits(), expected.to_bits());
    }

    /// Strict validation rejects any length mismatch before computing.
    #[test]
    fn strict_rejects_mismatch(n in 1usize..6, m in 1usize..6) {
        prop_assume!(n != m);
        let priors: Vec<BetaParams> = (0..n)
            .map(|i| BetaParams::new(format!("p{i}"), 1.0, 1.0))
            .collect();
        let posteriors: Vec<BetaParams> = (0..m)
            .map(|i| BetaParams::new(format!("q{i}"), 1.0, 1.0))
            .collect();
        prop_assert_eq!(
            build_curve_series(&priors, &posteriors),
            Err(Error::LengthMismatch(n, m))
        );
    }

    /// Lenient validation sizes colors to the longer list.
    #[test]
    fn lenient_colors_cover_every_series(n in 0usize..6, m in 0usize..6) {
        prop_assume!(n + m > 0);
        let cfg = CurveConfig {
            length_policy: LengthPolicy::Lenient,
            ..CurveConfig::default()
        };
        let priors: Vec<BetaParams> = (0..n)
            .map(|i| BetaParams::new(format!("p{i}"), 2.0, 2.0))
            .collect();
        let posteriors: Vec<BetaParams> = (0..m)
            .map(|i| BetaParams::new(format!("q{i}"), 2.0, 2.0))
            .collect();
        let s = build_curve_series_with(&cfg, &priors, &posteriors).unwrap();
        let expected_colors = assign_colors(n.max(m));
        prop_assert_eq!(s.colors(), expected_colors.as_slice());
        for k in s.keys() {
            prop_assert!(s.color_for(k).is_some());
        }
    }

    /// Degenerate shapes never fail the build.
    #[test]
    fn degenerate_shapes_do_not_error(
        a in prop_oneof![Just(0.0), Just(-1.0), Just(f64::NAN), Just(f64::INFINITY), 0.01f64..5.0],
        b in prop_oneof![Just(0.0), Just(-1.0), Just(f64::NAN), 0.01f64..5.0],
    ) {
        let arms = vec![BetaParams::new("X", a, b)];
        prop_assert!(build_curve_series(&arms, &arms).is_ok());
    }
}
