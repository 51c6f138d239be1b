use crate::source::RandomSource;
use crate::{PivotStrategy, RunCounters};

use super::lomuto;

pub fn sort<S: RandomSource + ?Sized>(
    data: &mut [i64],
    strategy: PivotStrategy,
    source: &mut S,
    counters: &mut RunCounters,
) {
    if data.len() < 2 {
        return;
    }
    let high = data.len() - 1;
    sort_range(data, 0, high, strategy, source, counters);
}

/// Sorts `data[low..=high]` and leaves everything outside the range untouched.
///
/// Pending ranges live on an explicit work-list instead of the call stack, so
/// already-sorted or reversed input of any length cannot overflow it. The left
/// range of a partition is pushed last and therefore drained completely before
/// the right one, which matches the visiting order of the plain recursive
/// formulation.
pub(crate) fn sort_range<S: RandomSource + ?Sized>(
    data: &mut [i64],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    source: &mut S,
    counters: &mut RunCounters,
) {
    if low >= high {
        return;
    }
    assert!(
        high < data.len(),
        "sort range [{low}, {high}] out of bounds for length {}",
        data.len()
    );

    let mut pending = vec![(low, high)];
    while let Some((low, high)) = pending.pop() {
        let pivot_index = lomuto::select_pivot_index(data, low, high, strategy, source, counters);
        let split = lomuto::partition(data, low, pivot_index, counters);

        // Ranges of fewer than two elements are already sorted.
        if split + 1 < high {
            pending.push((split + 1, high));
        }
        if split > low + 1 {
            pending.push((low, split - 1));
        }
    }
}
