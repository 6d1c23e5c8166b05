// File: crates/series-core/src/types.rs
// Summary: Time-series data model (timestamped values plus dimensioned series).

use std::collections::BTreeMap;

/// Timestamp value used when a series holds no values yet.
pub const EMPTY_RANGE: i64 = -1;

/// A single measured point: epoch-millisecond timestamp plus value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value {
    pub timestamp: i64,
    pub value: f64,
}

impl Value {
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// An ordered sequence of values under a dimensional identity.
///
/// The dimension keys (project, host, process, ...) are opaque to every
/// algorithm in this crate; only the value list is computed on. Callers must
/// keep the values sorted ascending by timestamp, otherwise bucket ordering
/// is undefined.
#[derive(Clone, Debug, Default)]
pub struct TimeSeries {
    pub metric: String,
    pub dimensions: BTreeMap<String, String>,
    values: Vec<Value>,
    start: i64,
    end: i64,
}

impl TimeSeries {
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            dimensions: BTreeMap::new(),
            values: Vec::new(),
            start: EMPTY_RANGE,
            end: EMPTY_RANGE,
        }
    }

    pub fn with_dimension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(key.into(), value.into());
        self
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest stored timestamp, or [`EMPTY_RANGE`] when the series is empty.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Largest stored timestamp, or [`EMPTY_RANGE`] when the series is empty.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Append a value, keeping the cached start/end timestamps current.
    pub fn push(&mut self, value: Value) {
        if self.values.is_empty() {
            self.start = value.timestamp;
            self.end = value.timestamp;
        } else {
            self.start = self.start.min(value.timestamp);
            self.end = self.end.max(value.timestamp);
        }
        self.values.push(value);
    }

    /// Replace the value list with one that is already sorted ascending.
    pub fn set_sorted_values(&mut self, values: Vec<Value>) {
        self.start = values.first().map_or(EMPTY_RANGE, |v| v.timestamp);
        self.end = values.last().map_or(EMPTY_RANGE, |v| v.timestamp);
        self.values = values;
    }
}
