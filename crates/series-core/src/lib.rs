// File: crates/series-core/src/lib.rs
// Summary: Core library entry point; exports the series preparation API.

pub mod budget;
pub mod combine;
pub mod error;
pub mod geometry;
pub mod granularity;
pub mod simplify;
pub mod slice;
pub mod smooth;
pub mod types;

pub use budget::simplify_to_budget;
pub use combine::Combiner;
pub use error::SeriesError;
pub use geometry::{signed_area, Coordinate, LineSegment};
pub use granularity::{CombineMode, CombineSlice, Granularity, SmoothingType};
pub use simplify::simplify;
pub use slice::{analyze_divisor, assign_to_filled_slices, SliceAssignment, SliceDataSet};
pub use smooth::Smoother;
pub use types::{TimeSeries, Value};
