//! Repeated, timed runs of the sorter over copies of one input.

use std::time::{Duration, Instant};

use log::debug;

use crate::source::{RandomSource, RngSource};
use crate::{Error, PivotStrategy, Result, RunCounters, sort, strategy_name};

pub const DEFAULT_ITERATIONS: usize = 5;

/// Averages over `iterations` runs. Integer means truncate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Measurement {
    pub iterations: usize,
    pub mean_time: Duration,
    pub mean_comparisons: u64,
    pub mean_swaps: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Comparison {
    pub size: usize,
    pub deterministic: Measurement,
    pub randomized: Measurement,
}

pub fn measure<S: RandomSource + ?Sized>(
    strategy: PivotStrategy,
    input: &[i64],
    iterations: usize,
    source: &mut S,
) -> Result<Measurement> {
    if iterations == 0 {
        return Err(Error::InvalidArgument(
            "iterations must be at least 1".to_string(),
        ));
    }

    let mut total_time = Duration::ZERO;
    let mut total = RunCounters::default();
    let mut counters = RunCounters::default();
    for _ in 0..iterations {
        let mut data = input.to_vec();
        counters.reset();

        let start = Instant::now();
        sort(&mut data, strategy, &mut counters, source);
        total_time += start.elapsed();

        debug_assert!(data.is_sorted());
        total.comparisons += counters.comparisons;
        total.swaps += counters.swaps;
    }

    let runs = iterations as u64;
    let measurement = Measurement {
        iterations,
        mean_time: total_time / iterations as u32,
        mean_comparisons: total.comparisons / runs,
        mean_swaps: total.swaps / runs,
    };
    debug!(
        "{} len={} iterations={} mean_time={:?} comparisons={} swaps={}",
        strategy_name(strategy),
        input.len(),
        iterations,
        measurement.mean_time,
        measurement.mean_comparisons,
        measurement.mean_swaps,
    );
    Ok(measurement)
}

/// Measures both strategies on the same input. Randomized pivots come from a
/// generator seeded with `seed`, so the counter columns are reproducible.
pub fn compare(input: &[i64], iterations: usize, seed: u64) -> Result<Comparison> {
    let mut source = RngSource::seeded(seed);
    Ok(Comparison {
        size: input.len(),
        deterministic: measure(PivotStrategy::Deterministic, input, iterations, &mut source)?,
        randomized: measure(PivotStrategy::Randomized, input, iterations, &mut source)?,
    })
}
