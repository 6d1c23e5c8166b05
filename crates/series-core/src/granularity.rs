// File: crates/series-core/src/granularity.rs
// Summary: Bucket granularities plus smoothing and combine mode selections.

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;
/// Fixed 30-day month, anchored at the epoch for reproducible bucket keys.
pub const MILLIS_PER_MONTH: i64 = 30 * MILLIS_PER_DAY;

/// Time width used to compute bucket keys when smoothing a series.
///
/// Every variant carries a fixed width in milliseconds except the
/// calendar-aligned ones (variable length) and `Auto` (resolved from the
/// sample spacing of the input).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    /// One bucket per input value; only meaningful together with
    /// [`SmoothingType::Diff`] at point granularity.
    Off,
    Seconds,
    Minute,
    Hour,
    Day,
    Week,
    /// Fixed 30-day buckets, independent of calendar month lengths.
    Month,
    /// Gregorian calendar months (28-31 days), UTC.
    CalendarMonth,
    /// Calendar quarters aligned to January, April, July, October.
    Quarter,
    /// Calendar half-years aligned to January and July.
    HalfYear,
    /// Width derived from the smallest gap between input samples.
    Auto,
}

impl Granularity {
    /// Human label for UI dropdowns and log output.
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Off => "Minimal/exact",
            Granularity::Seconds => "Seconds",
            Granularity::Minute => "Minutes",
            Granularity::Hour => "Hours",
            Granularity::Day => "Days",
            Granularity::Week => "Weeks",
            Granularity::Month => "Months",
            Granularity::CalendarMonth => "Calendar months",
            Granularity::Quarter => "Quarter",
            Granularity::HalfYear => "Half-year",
            Granularity::Auto => "Auto",
        }
    }

    /// Fixed bucket width in milliseconds, or `None` for the calendar-aligned
    /// and dynamically resolved variants.
    pub fn width_ms(&self) -> Option<i64> {
        match self {
            Granularity::Seconds => Some(MILLIS_PER_SECOND),
            Granularity::Minute => Some(MILLIS_PER_MINUTE),
            Granularity::Hour => Some(MILLIS_PER_HOUR),
            Granularity::Day => Some(MILLIS_PER_DAY),
            Granularity::Week => Some(MILLIS_PER_WEEK),
            Granularity::Month => Some(MILLIS_PER_MONTH),
            Granularity::Off
            | Granularity::CalendarMonth
            | Granularity::Quarter
            | Granularity::HalfYear
            | Granularity::Auto => None,
        }
    }
}

/// How the values landing in one bucket are folded into a single value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothingType {
    /// Return the value list untouched.
    None,
    Avg,
    Min,
    Max,
    Sum,
    Median,
    /// Count of values per bucket, independent of their magnitude.
    ValueCount,
    /// Bucket sum minus the previous non-empty bucket's sum (0 when none).
    Diff,
}

impl SmoothingType {
    pub fn label(&self) -> &'static str {
        match self {
            SmoothingType::None => "Inactive",
            SmoothingType::Avg => "Average",
            SmoothingType::Min => "Min",
            SmoothingType::Max => "Max",
            SmoothingType::Sum => "Sum",
            SmoothingType::Median => "Median",
            SmoothingType::ValueCount => "Number of values",
            SmoothingType::Diff => "Difference between values",
        }
    }
}

/// Bucket width used when combining multiple series into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombineSlice {
    /// 1 ms buckets: values merge only when timestamps collide exactly.
    Exact,
    Seconds,
    Minutes,
    Hours,
    Days,
    /// Fixed 30-day buckets, matching [`Granularity::Month`].
    Months,
}

impl CombineSlice {
    pub fn width_ms(&self) -> i64 {
        match self {
            CombineSlice::Exact => 1,
            CombineSlice::Seconds => MILLIS_PER_SECOND,
            CombineSlice::Minutes => MILLIS_PER_MINUTE,
            CombineSlice::Hours => MILLIS_PER_HOUR,
            CombineSlice::Days => MILLIS_PER_DAY,
            CombineSlice::Months => MILLIS_PER_MONTH,
        }
    }
}

/// Policy for merging N input series into one output series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombineMode {
    /// No combining; requesting a combined series with this mode is an error.
    None,
    /// Union the values of all series without aggregating them.
    Concat,
    /// Sum the values of all series landing in the same time slice.
    Sum(CombineSlice),
    /// Average the values of all series landing in the same time slice.
    Avg(CombineSlice),
}

impl CombineMode {
    pub fn label(&self) -> &'static str {
        match self {
            CombineMode::None => "Inactive",
            CombineMode::Concat => "Concatenate",
            CombineMode::Sum(slice) => match slice {
                CombineSlice::Exact => "Add up (exact)",
                CombineSlice::Seconds => "Add up (per second)",
                CombineSlice::Minutes => "Add up (per minute)",
                CombineSlice::Hours => "Add up (per hour)",
                CombineSlice::Days => "Add up (per day)",
                CombineSlice::Months => "Add up (per month)",
            },
            CombineMode::Avg(slice) => match slice {
                CombineSlice::Exact => "Average (exact)",
                CombineSlice::Seconds => "Average (per second)",
                CombineSlice::Minutes => "Average (per minute)",
                CombineSlice::Hours => "Average (per hour)",
                CombineSlice::Days => "Average (per day)",
                CombineSlice::Months => "Average (per month)",
            },
        }
    }
}
