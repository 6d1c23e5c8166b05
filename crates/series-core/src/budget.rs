// File: crates/series-core/src/budget.rs
// Summary: Applies the polyline simplifier across series under a point budget.

use log::debug;

use crate::geometry::Coordinate;
use crate::simplify::simplify;
use crate::types::{TimeSeries, Value};

/// Initial distance tolerance of the search; each retry multiplies by ten.
const INITIAL_TOLERANCE: f64 = 0.01;

/// Reduce the total point count of the given series to at most `budget`.
///
/// A budget of 0 disables simplification, as does an input that already fits.
/// Otherwise the budget is split evenly across the series and every oversized
/// series is simplified with a growing tolerance until it fits its share.
/// The first and last point of every series always survive, so each series
/// keeps at least two points even under a very small budget.
pub fn simplify_to_budget(mut series: Vec<TimeSeries>, budget: usize) -> Vec<TimeSeries> {
    if budget == 0 || series.is_empty() {
        return series;
    }

    let total: usize = series.iter().map(TimeSeries::len).sum();
    if total <= budget {
        return series;
    }

    let per_series = (budget / series.len()).max(2);

    for s in series.iter_mut() {
        if s.len() <= per_series {
            continue;
        }

        let mut coordinates: Vec<Coordinate> = s
            .values()
            .iter()
            .map(|v| Coordinate::new(v.timestamp as f64, v.value))
            .collect();

        let mut tolerance = INITIAL_TOLERANCE;
        let mut step = 1;
        while coordinates.len() > per_series {
            let before = coordinates.len();
            coordinates = simplify(&coordinates, tolerance);
            debug!(
                "line simplified, step {step}: {before} points reduced to {}",
                coordinates.len()
            );
            tolerance *= 10.0;
            step += 1;
        }

        let values: Vec<Value> = coordinates
            .iter()
            .map(|c| Value::new(c.x as i64, c.y))
            .collect();
        s.set_sorted_values(values);
    }

    series
}
