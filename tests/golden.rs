//! Golden file integration tests.
//!
//! Reads tests/testdata/scaling_golden.json and verifies both scaling
//! laws produce the hand-computed speedups for known workloads.

use serde::Deserialize;

use scalecalc_core::{
    amdahl_limit, amdahl_speedup, gustafson_speedup, GustafsonModel, ScalingInput, ScalingModel,
    SpeedupCurve,
};

const TOLERANCE: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    total_time: f64,
    parallel_time: f64,
    processors: Vec<f64>,
    amdahl: Vec<f64>,
    #[serde(default)]
    amdahl_limit: Option<f64>,
    gustafson: Vec<f64>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/scaling_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn assert_curve_matches(curve: &SpeedupCurve, expected: &[f64], case: &str, law: &str) {
    assert_eq!(
        curve.len(),
        expected.len(),
        "{law} curve length mismatch for case '{case}'"
    );
    for (point, want) in curve.points().iter().zip(expected) {
        assert!(
            (point.1 - want).abs() < TOLERANCE,
            "{law} mismatch for case '{case}' at n={}: expected {want}, got {}",
            point.0,
            point.1,
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: speedup curves for both laws
// ---------------------------------------------------------------------------

#[test]
fn golden_amdahl_speedups() {
    let data = load_golden_data();
    for case in &data.cases {
        let curve =
            amdahl_speedup(case.total_time, case.parallel_time, &case.processors).unwrap();
        assert_curve_matches(&curve, &case.amdahl, &case.name, "Amdahl");
    }
}

#[test]
fn golden_gustafson_speedups() {
    let data = load_golden_data();
    for case in &data.cases {
        let curve =
            gustafson_speedup(case.total_time, case.parallel_time, &case.processors).unwrap();
        assert_curve_matches(&curve, &case.gustafson, &case.name, "Gustafson");
    }
}

// ---------------------------------------------------------------------------
// Golden: Amdahl asymptote (null = unbounded, fully parallel workload)
// ---------------------------------------------------------------------------

#[test]
fn golden_amdahl_limits() {
    let data = load_golden_data();
    for case in &data.cases {
        let curve =
            amdahl_limit(case.total_time, case.parallel_time, &case.processors).unwrap();
        assert_eq!(curve.len(), case.processors.len());
        match case.amdahl_limit {
            Some(expected) => {
                for point in curve.points() {
                    assert!(
                        (point.1 - expected).abs() < TOLERANCE,
                        "limit mismatch for case '{}' at n={}: expected {expected}, got {}",
                        case.name,
                        point.0,
                        point.1,
                    );
                }
            }
            None => {
                for point in curve.points() {
                    assert!(
                        point.1.is_infinite() && point.1 > 0.0,
                        "limit for fully parallel case '{}' must be +inf, got {}",
                        case.name,
                        point.1,
                    );
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: cross-law invariants on the same workloads
// ---------------------------------------------------------------------------

#[test]
fn golden_speedup_bounded_by_limit() {
    let data = load_golden_data();
    for case in &data.cases {
        let speedups =
            amdahl_speedup(case.total_time, case.parallel_time, &case.processors).unwrap();
        let limits =
            amdahl_limit(case.total_time, case.parallel_time, &case.processors).unwrap();
        for (speedup, limit) in speedups.points().iter().zip(limits.points()) {
            assert!(
                speedup.1 <= limit.1,
                "case '{}': speedup {} exceeds limit {} at n={}",
                case.name,
                speedup.1,
                limit.1,
                speedup.0,
            );
        }
    }
}

#[test]
fn golden_gustafson_dominates_amdahl() {
    let data = load_golden_data();
    for case in &data.cases {
        let amdahl =
            amdahl_speedup(case.total_time, case.parallel_time, &case.processors).unwrap();
        let gustafson =
            gustafson_speedup(case.total_time, case.parallel_time, &case.processors).unwrap();
        for (a, g) in amdahl.points().iter().zip(gustafson.points()) {
            let tolerance = 1e-9 * g.1.abs().max(1.0);
            assert!(
                g.1 >= a.1 - tolerance,
                "case '{}': Gustafson {} below Amdahl {} at n={}",
                case.name,
                g.1,
                a.1,
                a.0,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: trait-object dispatch agrees with the convenience functions
// ---------------------------------------------------------------------------

#[test]
fn golden_via_trait_object() {
    let data = load_golden_data();
    let model: Box<dyn ScalingModel> = Box::new(GustafsonModel::new());
    for case in &data.cases {
        let input = ScalingInput::new(
            case.total_time,
            case.parallel_time,
            case.processors.clone(),
        );
        let curve = model.speedup(&input).unwrap();
        assert_curve_matches(&curve, &case.gustafson, &case.name, "Gustafson (dyn)");
    }
}
