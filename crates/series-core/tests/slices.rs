// File: crates/series-core/tests/slices.rs
// Purpose: Validate divisor detection and cross-series slice assignment.

use std::collections::HashMap;

use series_core::{analyze_divisor, assign_to_filled_slices, TimeSeries, Value};

fn series_with(name: &str, points: &[(i64, f64)]) -> TimeSeries {
    let mut series = TimeSeries::new(name);
    for &(timestamp, value) in points {
        series.push(Value::new(timestamp, value));
    }
    series
}

#[test]
fn divisor_matches_exact_second_spacing() {
    // 1000ms never undercuts the 1-second tick but stays below 10 seconds.
    let values: Vec<Value> = (1..=10).map(|i| Value::new(i * 1000, 1.0)).collect();
    assert_eq!(analyze_divisor(&values), 1000);
}

#[test]
fn divisor_scales_with_wider_and_narrower_spacing() {
    let wide: Vec<Value> = (1..=10).map(|i| Value::new(i * 25_000, 1.0)).collect();
    assert_eq!(analyze_divisor(&wide), 10_000);

    // Spacing below every tick falls back to the smallest one.
    let narrow: Vec<Value> = (1..=10).map(|i| Value::new(i * 5, 1.0)).collect();
    assert_eq!(analyze_divisor(&narrow), 10);
}

#[test]
fn divisor_counts_the_first_gap_from_zero() {
    // Wide spacing, but the first sample sits 50ms after zero.
    let values = vec![
        Value::new(50, 1.0),
        Value::new(100_050, 1.0),
        Value::new(200_050, 1.0),
    ];
    assert_eq!(analyze_divisor(&values), 10);
}

#[test]
fn assignment_sums_points_per_slice_and_drops_misses() {
    let mut reference = HashMap::new();
    reference.insert(0i64, 10.0);
    reference.insert(1000i64, 20.0);

    let series = [series_with(
        "cpu",
        &[(100, 1.0), (900, 2.0), (1500, 4.0), (2500, 8.0)],
    )];
    let assignment = assign_to_filled_slices(&reference, 1000, false, &series);

    assert_eq!(assignment.datasets.len(), 1);
    let dataset = &assignment.datasets[0];
    assert_eq!(dataset.name, "cpu");
    assert_eq!(dataset.slices.len(), 2);
    assert_eq!(dataset.slices[&0], 3.0);
    assert_eq!(dataset.slices[&1000], 4.0);
    // The 2500 point missed the reference and interpolation is off.
    assert!(assignment.interpolated.is_empty());
}

#[test]
fn assignment_interpolates_missing_reference_slices() {
    let mut reference = HashMap::new();
    reference.insert(0i64, 10.0);

    let series = [
        series_with("a", &[(100, 1.0), (2200, 3.0)]),
        series_with("b", &[(2400, 5.0)]),
    ];
    let assignment = assign_to_filled_slices(&reference, 1000, true, &series);

    assert_eq!(assignment.datasets.len(), 2);
    assert_eq!(assignment.datasets[0].slices[&2000], 3.0);
    assert_eq!(assignment.datasets[1].slices[&2000], 5.0);
    // Both misses build up the shared interpolated baseline.
    assert_eq!(assignment.interpolated[&2000], 8.0);
}

#[test]
fn series_without_surviving_points_are_omitted() {
    let mut reference = HashMap::new();
    reference.insert(0i64, 10.0);

    let series = [
        series_with("inside", &[(500, 1.0)]),
        series_with("outside", &[(5500, 1.0)]),
    ];
    let assignment = assign_to_filled_slices(&reference, 1000, false, &series);

    assert_eq!(assignment.datasets.len(), 1);
    assert_eq!(assignment.datasets[0].name, "inside");
}

#[test]
fn transform_combines_baseline_and_series_values() {
    let mut reference = HashMap::new();
    reference.insert(0i64, 10.0);
    reference.insert(1000i64, 20.0);

    let series = [series_with("cpu", &[(100, 1.0), (1500, 4.0), (2500, 8.0)])];
    let assignment = assign_to_filled_slices(&reference, 1000, true, &series);

    // Percentage-of-baseline: reference slices compare against the
    // reference, interpolated ones against themselves.
    let result = assignment.transform(&reference, |baseline, value| value / baseline * 100.0);

    assert_eq!(result.len(), 1);
    let (name, points) = &result[0];
    assert_eq!(name, "cpu");
    assert_eq!(
        points.as_slice(),
        &[
            Value::new(0, 10.0),
            Value::new(1000, 20.0),
            Value::new(2000, 100.0),
        ]
    );
}
