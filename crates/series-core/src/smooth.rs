// File: crates/series-core/src/smooth.rs
// Summary: Granularity bucketing engine with selectable aggregation semantics.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::error::SeriesError;
use crate::granularity::{Granularity, SmoothingType, MILLIS_PER_DAY};
use crate::slice::analyze_divisor;
use crate::types::Value;

/// Re-buckets a value list into coarser time buckets and folds every bucket
/// into a single value according to the configured [`SmoothingType`].
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    granularity: Granularity,
    smoothing: SmoothingType,
}

impl Smoother {
    pub const fn new(granularity: Granularity, smoothing: SmoothingType) -> Self {
        Self {
            granularity,
            smoothing,
        }
    }

    /// Compute the smoothed series. The input must be sorted ascending by
    /// timestamp; the output is one value per non-empty bucket, ascending.
    ///
    /// Empty input and [`SmoothingType::None`] return the input unchanged.
    pub fn compute(&self, values: &[Value]) -> Result<Vec<Value>, SeriesError> {
        if values.is_empty() || self.smoothing == SmoothingType::None {
            return Ok(values.to_vec());
        }

        let buckets = self.partition(values)?;

        if self.smoothing == SmoothingType::Diff {
            return Ok(diff_buckets(buckets));
        }

        Ok(buckets
            .into_iter()
            .map(|(timestamp, bucket)| Value::new(timestamp, fold_bucket(self.smoothing, &bucket)))
            .collect())
    }

    /// Assign every value to its bucket, keyed by the bucket's output
    /// timestamp. The BTreeMap keeps buckets in chronological order.
    fn partition(&self, values: &[Value]) -> Result<BTreeMap<i64, Vec<f64>>, SeriesError> {
        let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();

        match self.granularity {
            Granularity::Off => {
                for v in values {
                    buckets.entry(v.timestamp).or_default().push(v.value);
                }
            }
            Granularity::CalendarMonth => {
                for v in values {
                    let key = calendar_bucket_mid(v.timestamp, 1)?;
                    buckets.entry(key).or_default().push(v.value);
                }
            }
            Granularity::Quarter => {
                for v in values {
                    let key = calendar_bucket_mid(v.timestamp, 3)?;
                    buckets.entry(key).or_default().push(v.value);
                }
            }
            Granularity::HalfYear => {
                for v in values {
                    let key = calendar_bucket_mid(v.timestamp, 6)?;
                    buckets.entry(key).or_default().push(v.value);
                }
            }
            granularity => {
                let width = resolve_width(granularity, values)?;
                let half = width / 2;
                for v in values {
                    // Epoch-anchored key; the emitted timestamp is the
                    // bucket midpoint.
                    let key = v.timestamp.div_euclid(width) * width + half;
                    buckets.entry(key).or_default().push(v.value);
                }
            }
        }

        Ok(buckets)
    }
}

/// Fixed width for the given granularity, or the tick-table divisor derived
/// from the sample spacing when the granularity is `Auto`.
fn resolve_width(granularity: Granularity, values: &[Value]) -> Result<i64, SeriesError> {
    if granularity == Granularity::Auto {
        return Ok(analyze_divisor(values));
    }
    granularity
        .width_ms()
        .ok_or(SeriesError::NoFixedWidth(granularity.label()))
}

fn fold_bucket(smoothing: SmoothingType, bucket: &[f64]) -> f64 {
    match smoothing {
        SmoothingType::Sum => bucket.iter().sum(),
        SmoothingType::Avg => bucket.iter().sum::<f64>() / bucket.len() as f64,
        SmoothingType::Min => bucket.iter().copied().fold(f64::INFINITY, f64::min),
        SmoothingType::Max => bucket.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        SmoothingType::Median => median(bucket),
        SmoothingType::ValueCount => bucket.len() as f64,
        // Both dispatched before fold_bucket is reached.
        SmoothingType::None | SmoothingType::Diff => unreachable!("handled in compute"),
    }
}

/// Each bucket becomes its sum minus the previous non-empty bucket's sum.
/// The very first bucket diffs against zero. Skipped (empty) buckets never
/// appear in the map, so "previous" always means the last emitted bucket.
fn diff_buckets(buckets: BTreeMap<i64, Vec<f64>>) -> Vec<Value> {
    let mut out = Vec::with_capacity(buckets.len());
    let mut previous_sum = 0.0;
    for (timestamp, bucket) in buckets {
        let sum: f64 = bucket.iter().sum();
        out.push(Value::new(timestamp, sum - previous_sum));
        previous_sum = sum;
    }
    out
}

fn median(bucket: &[f64]) -> f64 {
    let mut sorted = bucket.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Output timestamp of the calendar period (1, 3 or 6 months, aligned to
/// January) containing `timestamp`: the midpoint between the period's start
/// and end, truncated to midnight UTC. A one-month period in January 2018
/// maps to 2018-01-16T00:00:00Z.
fn calendar_bucket_mid(timestamp: i64, period_months: u32) -> Result<i64, SeriesError> {
    let date = DateTime::<Utc>::from_timestamp_millis(timestamp)
        .ok_or(SeriesError::TimestampOutOfRange(timestamp))?;

    let year = date.year();
    let month0 = date.month0() / period_months * period_months;
    let (next_year, next_month0) = if month0 + period_months >= 12 {
        (year + 1, 0)
    } else {
        (year, month0 + period_months)
    };

    let start = period_start(year, month0, timestamp)?;
    let end = period_start(next_year, next_month0, timestamp)?;

    let mid = (start + end) / 2;
    Ok(mid - mid.rem_euclid(MILLIS_PER_DAY))
}

fn period_start(year: i32, month0: u32, origin: i64) -> Result<i64, SeriesError> {
    Utc.with_ymd_and_hms(year, month0 + 1, 1, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp_millis())
        .ok_or(SeriesError::TimestampOutOfRange(origin))
}
