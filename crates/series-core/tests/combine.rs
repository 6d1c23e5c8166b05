// File: crates/series-core/tests/combine.rs
// Purpose: Validate series combining (concat, sum, avg) and metadata merging.

use series_core::{CombineMode, CombineSlice, Combiner, SeriesError, TimeSeries, Value};

fn offset_series(number: u32, shift: i64) -> TimeSeries {
    let mut series = TimeSeries::new(format!("metric{number}"))
        .with_dimension("project", "project")
        .with_dimension("host", format!("host{number}"))
        .with_dimension("process", format!("process{number}"));
    series.push(Value::new(12_001 + shift, 3.0));
    series.push(Value::new(18_021 + shift, 4.2));
    series.push(Value::new(19_143 + shift, 1.1));
    series
}

#[test]
fn exact_sum_keeps_distinct_timestamps_apart() {
    let combiner = Combiner::new(CombineMode::Sum(CombineSlice::Exact));
    let input = vec![offset_series(1, 0), offset_series(2, 600)];
    let result = combiner.combine("combined", &input).unwrap();

    // A 1ms bucket never merges values with distinct timestamps.
    assert_eq!(result.len(), 6);
    let timestamps: Vec<i64> = result.values().iter().map(|v| v.timestamp).collect();
    assert_eq!(timestamps, vec![12_001, 12_601, 18_021, 18_621, 19_143, 19_743]);

    let input_total: f64 = input
        .iter()
        .flat_map(|s| s.values())
        .map(|v| v.value)
        .sum();
    let output_total: f64 = result.values().iter().map(|v| v.value).sum();
    assert!((input_total - output_total).abs() < 1e-9);
}

#[test]
fn second_sum_merges_offset_series_into_shared_buckets() {
    let combiner = Combiner::new(CombineMode::Sum(CombineSlice::Seconds));
    let input = vec![offset_series(1, 0), offset_series(2, 600)];
    let result = combiner.combine("combined", &input).unwrap();

    assert_eq!(result.metric, "combined");
    assert_eq!(result.len(), 3);

    let values = result.values();
    assert!((values[0].value - 6.0).abs() < 1e-9);
    assert!((values[1].value - 8.4).abs() < 1e-9);
    assert!((values[2].value - 2.2).abs() < 1e-9);

    // Each bucket reports the earliest original timestamp it contains.
    assert_eq!(values[0].timestamp, 12_001);
    assert_eq!(values[1].timestamp, 18_021);
    assert_eq!(values[2].timestamp, 19_143);
}

#[test]
fn avg_combines_to_the_bucket_mean() {
    let combiner = Combiner::new(CombineMode::Avg(CombineSlice::Seconds));
    let input = vec![offset_series(1, 0), offset_series(2, 600)];
    let result = combiner.combine("combined", &input).unwrap();

    assert_eq!(result.len(), 3);
    let values = result.values();
    assert!((values[0].value - 3.0).abs() < 1e-9);
    assert!((values[1].value - 4.2).abs() < 1e-9);
    assert!((values[2].value - 1.1).abs() < 1e-9);
}

#[test]
fn combining_is_independent_of_input_order() {
    let combiner = Combiner::new(CombineMode::Sum(CombineSlice::Seconds));
    let forward = combiner
        .combine("c", &[offset_series(1, 0), offset_series(2, 600)])
        .unwrap();
    let reversed = combiner
        .combine("c", &[offset_series(2, 600), offset_series(1, 0)])
        .unwrap();

    assert_eq!(forward.values(), reversed.values());
    assert_eq!(forward.dimensions, reversed.dimensions);
}

#[test]
fn differing_dimensions_collapse_to_wildcard() {
    let combiner = Combiner::new(CombineMode::Sum(CombineSlice::Exact));
    let mut lean = TimeSeries::new("m3").with_dimension("project", "project");
    lean.push(Value::new(50_000, 1.0));

    let result = combiner
        .combine("combined", &[offset_series(1, 0), offset_series(2, 600), lean])
        .unwrap();

    assert_eq!(result.dimensions.get("project").map(String::as_str), Some("project"));
    assert_eq!(result.dimensions.get("host").map(String::as_str), Some("*"));
    // Missing on one input counts as a disagreement as well.
    assert_eq!(result.dimensions.get("process").map(String::as_str), Some("*"));
}

#[test]
fn concat_unions_values_without_aggregating() {
    let combiner = Combiner::new(CombineMode::Concat);
    let input = vec![offset_series(1, 0), offset_series(2, 100)];
    let result = combiner.combine("combined", &input).unwrap();

    assert_eq!(result.len(), 6);
    let timestamps: Vec<i64> = result.values().iter().map(|v| v.timestamp).collect();
    assert_eq!(timestamps, vec![12_001, 12_101, 18_021, 18_121, 19_143, 19_243]);

    // Duplicate timestamps are kept; de-duplication is the caller's policy.
    let doubled = combiner
        .combine("combined", &[offset_series(1, 0), offset_series(2, 0)])
        .unwrap();
    assert_eq!(doubled.len(), 6);
}

#[test]
fn none_mode_is_rejected() {
    let combiner = Combiner::new(CombineMode::None);
    let result = combiner.combine("combined", &[offset_series(1, 0)]);
    assert_eq!(
        result.unwrap_err(),
        SeriesError::UnsupportedCombineMode("Inactive")
    );
}

#[test]
fn combining_no_series_yields_an_empty_result() {
    let combiner = Combiner::new(CombineMode::Sum(CombineSlice::Seconds));
    let result = combiner.combine("combined", &[]).unwrap();
    assert!(result.is_empty());
    assert!(result.dimensions.is_empty());
    assert_eq!(result.start(), -1);
    assert_eq!(result.end(), -1);
}
