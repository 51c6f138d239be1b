use quicksort::generator::{ALL_SHAPES, DataShape};
use quicksort::harness::DEFAULT_ITERATIONS;
use quicksort::{Error, Result};

pub const DEFAULT_SIZES: [usize; 5] = [100, 500, 1_000, 2_000, 5_000];
pub const DEFAULT_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnalysisConfig {
    pub sizes: Vec<usize>,
    pub shapes: Vec<DataShape>,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            shapes: ALL_SHAPES.to_vec(),
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl AnalysisConfig {
    /// Overrides the defaults with whatever was given on the command line.
    pub fn resolve(
        sizes: Option<Vec<usize>>,
        shapes: Option<Vec<String>>,
        iterations: usize,
        seed: u64,
    ) -> Result<Self> {
        let mut config = Self {
            iterations,
            seed,
            ..Self::default()
        };

        if iterations == 0 {
            return Err(Error::InvalidArgument(
                "--iterations must be at least 1".to_string(),
            ));
        }
        if let Some(sizes) = sizes {
            if sizes.is_empty() {
                return Err(Error::InvalidArgument("--sizes must not be empty".to_string()));
            }
            config.sizes = sizes;
        }
        if let Some(names) = shapes {
            config.shapes = names
                .iter()
                .map(|name| name.trim().parse::<DataShape>())
                .collect::<Result<Vec<_>>>()?;
        }

        Ok(config)
    }

    /// Seed for the dataset of one table cell, distinct per shape and size.
    pub fn dataset_seed(&self, shape: DataShape, size: usize) -> u64 {
        let salt = ALL_SHAPES
            .iter()
            .position(|&s| s == shape)
            .unwrap_or_default() as u64;
        self.seed ^ (salt << 56) ^ size as u64
    }
}
