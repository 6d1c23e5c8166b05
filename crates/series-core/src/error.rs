// File: crates/series-core/src/error.rs
// Summary: Error type shared by the series preparation transforms.

use thiserror::Error;

/// Failures surfaced by the smoothing and combining transforms.
///
/// Empty inputs are never errors; every transform treats them as a no-op.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// The selected combine mode cannot produce a combined series.
    #[error("combine mode '{0}' cannot produce a combined series")]
    UnsupportedCombineMode(&'static str),

    /// A fixed bucket width was required but the granularity has none.
    #[error("granularity '{0}' has no fixed bucket width")]
    NoFixedWidth(&'static str),

    /// A timestamp outside the range representable as a calendar date.
    #[error("timestamp {0} is outside the supported calendar range")]
    TimestampOutOfRange(i64),
}
