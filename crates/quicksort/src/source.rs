use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies pivot positions for [`PivotStrategy::Randomized`](crate::PivotStrategy).
pub trait RandomSource {
    /// Returns an index in `[low, high]`, both ends inclusive.
    fn index_in(&mut self, low: usize, high: usize) -> usize;
}

/// Uniform draws from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn index_in(&mut self, low: usize, high: usize) -> usize {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
///
/// A draw `d` maps to `low + d % (high - low + 1)`, so every script is valid
/// for every range. An empty script always picks `high`, which makes the
/// randomized strategy trace exactly like the deterministic one apart from
/// the extra counted swap per partition.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn index_in(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high);
        if self.draws.is_empty() {
            self.cursor += 1;
            return high;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        low + draw % (high - low + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_source_stays_in_range() {
        let mut source = RngSource::seeded(0x5EED_2026);
        for (low, high) in [(0_usize, 0_usize), (0, 1), (3, 9), (100, 101), (7, 7)] {
            for _ in 0..200 {
                let idx = source.index_in(low, high);
                assert!((low..=high).contains(&idx), "low={low} high={high} idx={idx}");
            }
        }
    }

    #[test]
    fn rng_source_same_seed_same_stream() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for high in 1..64 {
            assert_eq!(a.index_in(0, high), b.index_in(0, high));
        }
    }

    #[test]
    fn scripted_source_wraps_and_clamps() {
        let mut source = ScriptedSource::new(vec![0, 5, 12]);
        assert_eq!(source.index_in(0, 9), 0);
        assert_eq!(source.index_in(0, 9), 5);
        assert_eq!(source.index_in(0, 9), 2);
        assert_eq!(source.index_in(4, 6), 4);
        assert_eq!(source.index_in(4, 6), 6);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn empty_script_picks_high() {
        let mut source = ScriptedSource::default();
        assert_eq!(source.index_in(2, 8), 8);
        assert_eq!(source.index_in(0, 0), 0);
    }
}
