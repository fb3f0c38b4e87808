//! Wire shapes of the chart records and tagged arm input.
#![cfg(feature = "serde")]

use bandit_curves::{
    build_curve_series, build_curve_series_dyn, ArmParams, BetaParams, ChartLayout, CurveConfig,
    DistributionFamily, Error,
};
use serde_json::{json, Value};

#[test]
fn curve_point_is_a_flat_record() {
    let arms = vec![BetaParams::new("A", 2.0, 2.0)];
    let chart = build_curve_series(&arms, &arms).unwrap();
    let v = serde_json::to_value(&chart.points()[50]).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["x"], json!(0.5));
    for k in ["Posterior-0_A", "Prior-0_A"] {
        let d = obj[k].as_f64().unwrap();
        assert!((d - 1.5).abs() < 1e-12, "{k}={d}");
    }
}

#[test]
fn record_keys_keep_insertion_order() {
    let arms = vec![BetaParams::new("B", 2.0, 2.0), BetaParams::new("A", 2.0, 2.0)];
    let chart = build_curve_series(&arms, &arms).unwrap();
    let s = serde_json::to_string(&chart.points()[10]).unwrap();
    let pos = |k: &str| s.find(k).unwrap();
    assert!(pos("\"x\"") < pos("Posterior-0_B"));
    assert!(pos("Posterior-0_B") < pos("Posterior-1_A"));
    assert!(pos("Posterior-1_A") < pos("Prior-0_B"));
}

#[test]
fn non_finite_densities_serialize_as_null() {
    let arms = vec![BetaParams::new("A", 0.5, 2.0)];
    let chart = build_curve_series(&arms, &arms).unwrap();
    let v = serde_json::to_value(&chart.points()[0]).unwrap();
    assert_eq!(v["Prior-0_A"], Value::Null);
}

#[test]
fn tagged_arms_deserialize_and_build() {
    let priors: Vec<ArmParams> = serde_json::from_value(json!([
        {"distributionFamily": "beta", "name": "A", "alpha": 1.0, "beta": 1.0},
        {"distributionFamily": "beta", "name": "B", "alpha": 1.0, "beta": 1.0},
    ]))
    .unwrap();
    let posteriors: Vec<ArmParams> = serde_json::from_value(json!([
        {"distributionFamily": "beta", "name": "A", "alpha": 4.0, "beta": 1.0},
        {"distributionFamily": "beta", "name": "B", "alpha": 2.0, "beta": 3.0},
    ]))
    .unwrap();
    let chart = build_curve_series_dyn(&CurveConfig::default(), &priors, &posteriors).unwrap();
    assert_eq!(chart.family(), DistributionFamily::Beta);
    assert_eq!(chart.points().len(), 100);
}

#[test]
fn mixed_tagged_arms_are_rejected() {
    let arms: Vec<ArmParams> = serde_json::from_value(json!([
        {"distributionFamily": "normal", "name": "A", "mu": 0.0, "sigma": 1.0},
        {"distributionFamily": "beta", "name": "B", "alpha": 1.0, "beta": 1.0},
    ]))
    .unwrap();
    let err = build_curve_series_dyn(&CurveConfig::default(), &arms, &arms).unwrap_err();
    assert_eq!(
        err,
        Error::FamilyMismatch {
            expected: DistributionFamily::Normal,
            found: DistributionFamily::Beta,
            index: 1,
        }
    );
}

#[test]
fn missing_fields_fail_to_parse() {
    let r: Result<ArmParams, _> =
        serde_json::from_value(json!({"distributionFamily": "beta", "name": "A", "alpha": 1.0}));
    assert!(r.is_err());
    let r: Result<ArmParams, _> =
        serde_json::from_value(json!({"name": "A", "mu": 0.0, "sigma": 1.0}));
    assert!(r.is_err(), "untagged arms are rejected");
}

#[test]
fn layout_serializes_keys_as_strings() {
    let arms = vec![BetaParams::new("A", 1.0, 1.0)];
    let chart = build_curve_series(&arms, &arms).unwrap();
    let v = serde_json::to_value(ChartLayout::from_series(&chart)).unwrap();
    assert_eq!(v["series"][0]["key"], json!("Posterior-0_A"));
    assert_eq!(v["series"][1]["dash"], json!([5, 5]));
    assert_eq!(v["x_domain"], json!([0.0, 1.0]));
}

#[test]
fn config_round_trips() {
    let cfg = CurveConfig::default();
    let s = serde_json::to_string(&cfg).unwrap();
    let back: CurveConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(cfg, back);
}
