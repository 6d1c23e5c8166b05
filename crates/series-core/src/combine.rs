// File: crates/series-core/src/combine.rs
// Summary: Merges N time series into one, per combine mode (concat/sum/avg).

use std::collections::BTreeMap;

use crate::error::SeriesError;
use crate::granularity::{CombineMode, CombineSlice};
use crate::types::{TimeSeries, Value};

/// Dimension value standing in for inputs that disagree on a dimension.
pub const WILDCARD_DIMENSION: &str = "*";

/// A per-bucket accumulator. The earliest original timestamp in the bucket
/// becomes the output timestamp, so exact-granularity combining reproduces
/// the input timestamps verbatim.
#[derive(Clone, Copy, Debug)]
struct SliceAccumulator {
    first_timestamp: i64,
    sum: f64,
    count: u32,
}

/// Combines multiple time series into a single one.
#[derive(Clone, Copy, Debug)]
pub struct Combiner {
    mode: CombineMode,
}

impl Combiner {
    pub const fn new(mode: CombineMode) -> Self {
        Self { mode }
    }

    /// Merge the given series into one named `metric`. Bucket aggregation is
    /// a commutative fold, so the result is independent of the input order.
    pub fn combine(&self, metric: &str, series: &[TimeSeries]) -> Result<TimeSeries, SeriesError> {
        match self.mode {
            CombineMode::None => Err(SeriesError::UnsupportedCombineMode(self.mode.label())),
            CombineMode::Concat => Ok(concat(metric, series)),
            CombineMode::Sum(slice) => Ok(fold_slices(metric, series, slice, false)),
            CombineMode::Avg(slice) => Ok(fold_slices(metric, series, slice, true)),
        }
    }
}

/// Union all values without aggregating. Duplicate timestamps across inputs
/// are kept as-is; the stable sort preserves per-series insertion order on
/// ties, and any de-duplication policy is the caller's.
fn concat(metric: &str, series: &[TimeSeries]) -> TimeSeries {
    let mut combined = TimeSeries::new(metric);
    combined.dimensions = merged_dimensions(series);

    let mut values: Vec<Value> = series
        .iter()
        .flat_map(|s| s.values().iter().copied())
        .collect();
    values.sort_by_key(|v| v.timestamp);
    combined.set_sorted_values(values);
    combined
}

fn fold_slices(
    metric: &str,
    series: &[TimeSeries],
    slice: CombineSlice,
    average: bool,
) -> TimeSeries {
    let width = slice.width_ms();
    let mut buckets: BTreeMap<i64, SliceAccumulator> = BTreeMap::new();

    for s in series {
        for v in s.values() {
            // Same epoch-anchored key function as the smoothing engine.
            let key = v.timestamp.div_euclid(width) * width;
            let acc = buckets.entry(key).or_insert(SliceAccumulator {
                first_timestamp: v.timestamp,
                sum: 0.0,
                count: 0,
            });
            acc.first_timestamp = acc.first_timestamp.min(v.timestamp);
            acc.sum += v.value;
            acc.count += 1;
        }
    }

    let values = buckets
        .into_values()
        .map(|acc| {
            let value = if average {
                acc.sum / acc.count as f64
            } else {
                acc.sum
            };
            Value::new(acc.first_timestamp, value)
        })
        .collect();

    let mut combined = TimeSeries::new(metric);
    combined.dimensions = merged_dimensions(series);
    combined.set_sorted_values(values);
    combined
}

/// Keep the dimensions all inputs agree on; dimensions that differ between
/// any two inputs (or are missing from one) collapse to `"*"`.
fn merged_dimensions(series: &[TimeSeries]) -> BTreeMap<String, String> {
    let mut merged: Option<BTreeMap<String, String>> = None;

    for s in series {
        match merged {
            None => merged = Some(s.dimensions.clone()),
            Some(ref mut dims) => {
                for (key, value) in dims.iter_mut() {
                    let agrees = s
                        .dimensions
                        .get(key)
                        .is_some_and(|other| other.as_str() == value.as_str());
                    if !agrees {
                        *value = WILDCARD_DIMENSION.to_string();
                    }
                }
                for key in s.dimensions.keys() {
                    dims.entry(key.clone())
                        .or_insert_with(|| WILDCARD_DIMENSION.to_string());
                }
            }
        }
    }

    merged.unwrap_or_default()
}
