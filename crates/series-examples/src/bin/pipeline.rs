// File: crates/series-examples/src/bin/pipeline.rs
// Summary: Minimal example running the full combine -> smooth -> simplify pipeline.

use anyhow::Result;
use series_core::{
    simplify_to_budget, CombineMode, CombineSlice, Combiner, Granularity, Smoother, SmoothingType,
    TimeSeries, Value,
};

fn synthetic_series(host: &str, phase: f64) -> TimeSeries {
    let mut series = TimeSeries::new("cpu.load")
        .with_dimension("project", "demo")
        .with_dimension("host", host);
    for i in 0..3_600 {
        let value = ((i as f64 * 0.05) + phase).sin().abs() * 4.0 + 1.0;
        series.push(Value::new(i * 1_000, value));
    }
    series
}

fn main() -> Result<()> {
    env_logger::init();

    // Two hosts reporting one sample per second for an hour.
    let raw = vec![
        synthetic_series("web-1", 0.0),
        synthetic_series("web-2", 1.3),
    ];

    // Merge both hosts into one series, summing per second.
    let combiner = Combiner::new(CombineMode::Sum(CombineSlice::Seconds));
    let combined = combiner.combine("cpu.load", &raw)?;
    println!(
        "combined: {} points, dimensions {:?}",
        combined.len(),
        combined.dimensions
    );

    // Re-bucket to one averaged value per minute.
    let smoother = Smoother::new(Granularity::Minute, SmoothingType::Avg);
    let smoothed = smoother.compute(combined.values())?;
    println!("smoothed: {} points", smoothed.len());

    // Fit the result into a 30-point rendering budget.
    let mut chart_series = TimeSeries::new("cpu.load");
    chart_series.set_sorted_values(smoothed);
    let reduced = simplify_to_budget(vec![chart_series], 30);
    println!("simplified: {} points", reduced[0].len());

    for value in reduced[0].values().iter().take(5) {
        println!("  t={} v={:.3}", value.timestamp, value.value);
    }
    Ok(())
}
