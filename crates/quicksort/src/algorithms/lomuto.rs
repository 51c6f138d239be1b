use crate::source::RandomSource;
use crate::{PivotStrategy, RunCounters};

/// Lomuto partition of `data[low..=high]` around `data[high]`.
///
/// Every scanned index costs one comparison. Every `<=` hit costs one swap,
/// including the no-op swap when the boundary has not fallen behind the scan.
/// The closing swap that moves the pivot into place is always counted.
///
/// Returns the final index of the pivot.
pub fn partition(data: &mut [i64], low: usize, high: usize, counters: &mut RunCounters) -> usize {
    assert!(
        low <= high && high < data.len(),
        "partition range [{low}, {high}] out of bounds for length {}",
        data.len()
    );

    let pivot = data[high];
    // First slot not yet known to hold an element `<= pivot`.
    let mut boundary = low;

    for j in low..high {
        counters.comparisons += 1;
        if data[j] <= pivot {
            data.swap(boundary, j);
            counters.swaps += 1;
            boundary += 1;
        }
    }

    data.swap(boundary, high);
    counters.swaps += 1;

    boundary
}

/// Moves the chosen pivot to `high` and returns `high`.
pub fn select_pivot_index<S: RandomSource + ?Sized>(
    data: &mut [i64],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    source: &mut S,
    counters: &mut RunCounters,
) -> usize {
    match strategy {
        PivotStrategy::Deterministic => high,
        PivotStrategy::Randomized => {
            let drawn = source.index_in(low, high);
            assert!(
                (low..=high).contains(&drawn),
                "random source returned {drawn} outside [{low}, {high}]"
            );
            data.swap(drawn, high);
            counters.swaps += 1;
            high
        }
    }
}
