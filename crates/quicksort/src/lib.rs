mod algorithms;
mod error;
pub mod generator;
pub mod harness;
pub mod source;

pub use algorithms::lomuto::{partition, select_pivot_index};
pub use error::{Error, Result};
pub use source::{RandomSource, RngSource, ScriptedSource};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotStrategy {
    /// Always the last element of the range.
    Deterministic,
    /// A uniformly drawn element, swapped into the last position first.
    Randomized,
}

pub const ALL_STRATEGIES: [PivotStrategy; 2] =
    [PivotStrategy::Deterministic, PivotStrategy::Randomized];

pub fn all_strategies() -> &'static [PivotStrategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: PivotStrategy) -> &'static str {
    match strategy {
        PivotStrategy::Deterministic => "deterministic",
        PivotStrategy::Randomized => "randomized",
    }
}

/// Comparison and exchange counts for one measured run.
///
/// Sorting only ever adds to these; call [`RunCounters::reset`] between runs
/// that must be measured independently.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunCounters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl RunCounters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sorts `data` ascending in place and hands the same slice back.
///
/// `source` is only consulted by [`PivotStrategy::Randomized`].
pub fn sort<'a, S: RandomSource + ?Sized>(
    data: &'a mut [i64],
    strategy: PivotStrategy,
    counters: &mut RunCounters,
    source: &mut S,
) -> &'a mut [i64] {
    algorithms::quick_sort::sort(data, strategy, source, counters);
    data
}

pub fn sort_deterministic<'a>(data: &'a mut [i64], counters: &mut RunCounters) -> &'a mut [i64] {
    sort(
        data,
        PivotStrategy::Deterministic,
        counters,
        &mut ScriptedSource::default(),
    )
}

pub fn sort_randomized<'a, S: RandomSource + ?Sized>(
    data: &'a mut [i64],
    counters: &mut RunCounters,
    source: &mut S,
) -> &'a mut [i64] {
    sort(data, PivotStrategy::Randomized, counters, source)
}

/// Like [`sort`], drawing pivots from the thread-local generator.
pub fn sort_with_thread_rng<'a>(
    data: &'a mut [i64],
    strategy: PivotStrategy,
    counters: &mut RunCounters,
) -> &'a mut [i64] {
    sort(data, strategy, counters, &mut RngSource::new(rand::rng()))
}
