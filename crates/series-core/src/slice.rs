// File: crates/series-core/src/slice.rs
// Summary: Slice analysis: tick divisor detection and cross-series slice maps.

use std::collections::HashMap;

use crate::types::{TimeSeries, Value};

/// Tick units (milliseconds) used as candidate slice widths. Each entry is
/// exactly ten times the previous one.
pub const TICKS_MILLIS: [i64; 8] = [
    10,          // 10ms
    100,         // 100ms
    1_000,       // 1sec
    10_000,      // 10sec
    100_000,     // 100sec or 1.5min
    1_000_000,   // 16min
    10_000_000,  // 2.7h
    100_000_000, // 1.15 days
];

/// Pick the slice divisor for the given value list: the largest tick that is
/// no larger than the smallest gap between consecutive timestamps (the first
/// gap is measured from 0). Falls back to the smallest tick when every gap
/// is below it.
pub fn analyze_divisor(values: &[Value]) -> i64 {
    let mut previous = 0i64;
    let mut smallest_gap = i64::MAX;
    for v in values {
        let gap = v.timestamp - previous;
        if gap < smallest_gap {
            smallest_gap = gap;
        }
        previous = v.timestamp;
    }

    let mut divisor = TICKS_MILLIS[0];
    for tick in TICKS_MILLIS {
        if smallest_gap < tick {
            break;
        }
        divisor = tick;
    }
    divisor
}

/// Per-series slice accumulator: summed values keyed by slice timestamp.
#[derive(Clone, Debug)]
pub struct SliceDataSet {
    pub name: String,
    pub slices: HashMap<i64, f64>,
}

/// The result of assigning series values to reference slices: one data set
/// per surviving series plus the shared interpolated baseline slices built
/// for points that missed the reference. Passing both maps together through
/// [`SliceAssignment::transform`] replaces the back-pointer the accumulators
/// would otherwise need.
#[derive(Clone, Debug, Default)]
pub struct SliceAssignment {
    pub datasets: Vec<SliceDataSet>,
    pub interpolated: HashMap<i64, f64>,
}

impl SliceAssignment {
    /// Combine each slice's reference (or interpolated) baseline value with
    /// the series' own accumulated value, e.g. into a percentage-of-baseline
    /// series. Output slices are sorted ascending per series.
    pub fn transform<F>(
        &self,
        reference: &HashMap<i64, f64>,
        transformer: F,
    ) -> Vec<(String, Vec<Value>)>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.datasets
            .iter()
            .map(|dataset| {
                let mut keys: Vec<i64> = dataset.slices.keys().copied().collect();
                keys.sort_unstable();
                let points = keys
                    .into_iter()
                    .map(|key| {
                        let baseline = reference
                            .get(&key)
                            .or_else(|| self.interpolated.get(&key))
                            .copied()
                            .unwrap_or(0.0);
                        Value::new(key, transformer(baseline, dataset.slices[&key]))
                    })
                    .collect();
                (dataset.name.clone(), points)
            })
            .collect()
    }
}

/// Assign every point of every series to a slice of width `divisor`.
///
/// Points whose slice key exists in `reference` always accumulate into the
/// series' data set. Points that miss the reference accumulate only when
/// `interpolate` is set, in which case they also build up the shared
/// interpolated baseline for that slice; otherwise they are dropped.
/// Series that end up with no slices are omitted from the result.
pub fn assign_to_filled_slices(
    reference: &HashMap<i64, f64>,
    divisor: i64,
    interpolate: bool,
    series: &[TimeSeries],
) -> SliceAssignment {
    let mut assignment = SliceAssignment::default();

    for s in series {
        let mut slices: HashMap<i64, f64> = HashMap::with_capacity(s.len());

        for v in s.values() {
            let key = v.timestamp.div_euclid(divisor) * divisor;

            if reference.contains_key(&key) {
                *slices.entry(key).or_insert(0.0) += v.value;
            } else if interpolate {
                *slices.entry(key).or_insert(0.0) += v.value;
                *assignment.interpolated.entry(key).or_insert(0.0) += v.value;
            }
        }

        if !slices.is_empty() {
            assignment.datasets.push(SliceDataSet {
                name: s.metric.clone(),
                slices,
            });
        }
    }

    assignment
}
