use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::Rng;

use crate::{Error, Result};

/// Upper bound of the values drawn for [`DataShape::Random`]; the lower bound is 1.
pub const RANDOM_VALUE_MAX: i64 = 1_000;
/// [`DataShape::NearlySorted`] applies `max(1, len / NEARLY_SORTED_SWAP_DIVISOR)` random swaps.
pub const NEARLY_SORTED_SWAP_DIVISOR: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DataShape {
    Random,
    Sorted,
    ReverseSorted,
    NearlySorted,
}

pub const ALL_SHAPES: [DataShape; 4] = [
    DataShape::Random,
    DataShape::Sorted,
    DataShape::ReverseSorted,
    DataShape::NearlySorted,
];

impl DataShape {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::ReverseSorted => "reverse_sorted",
            Self::NearlySorted => "nearly_sorted",
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DataShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ALL_SHAPES
            .iter()
            .copied()
            .find(|shape| shape.label() == s)
            .ok_or_else(|| {
                let accepted = ALL_SHAPES
                    .iter()
                    .map(|shape| format!("'{}'", shape.label()))
                    .collect::<Vec<_>>()
                    .join(", ");
                Error::InvalidArgument(format!("unknown data shape '{s}', use one of {accepted}"))
            })
    }
}

pub fn generate<R: Rng + ?Sized>(shape: DataShape, size: usize, rng: &mut R) -> Vec<i64> {
    trace!("generating {size} elements of shape {shape}");
    match shape {
        DataShape::Random => (0..size)
            .map(|_| rng.random_range(1..=RANDOM_VALUE_MAX))
            .collect(),
        DataShape::Sorted => ascending(size),
        DataShape::ReverseSorted => {
            let mut data = ascending(size);
            data.reverse();
            data
        }
        DataShape::NearlySorted => {
            let mut data = ascending(size);
            if size == 0 {
                return data;
            }
            let swaps = (size / NEARLY_SORTED_SWAP_DIVISOR).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
            data
        }
    }
}

pub fn generate_named<R: Rng + ?Sized>(name: &str, size: usize, rng: &mut R) -> Result<Vec<i64>> {
    let shape = name.parse::<DataShape>()?;
    Ok(generate(shape, size, rng))
}

fn ascending(size: usize) -> Vec<i64> {
    (1..=size as i64).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn labels_round_trip() {
        for shape in ALL_SHAPES {
            assert_eq!(shape.label().parse::<DataShape>(), Ok(shape));
        }
    }

    #[test]
    fn unknown_shape_is_invalid_argument() {
        let err = "zigzag".parse::<DataShape>().unwrap_err();
        let Error::InvalidArgument(message) = &err;
        assert!(message.contains("zigzag"));
        assert!(message.contains("nearly_sorted"));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_named("Sorted", 4, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn fixed_shapes() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        assert_eq!(generate(DataShape::Sorted, 5, &mut rng), [1, 2, 3, 4, 5]);
        assert_eq!(
            generate(DataShape::ReverseSorted, 5, &mut rng),
            [5, 4, 3, 2, 1]
        );
        assert_eq!(
            generate_named("sorted", 3, &mut rng).unwrap(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn random_values_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let data = generate(DataShape::Random, 4096, &mut rng);
        assert_eq!(data.len(), 4096);
        assert!(data.iter().all(|v| (1..=RANDOM_VALUE_MAX).contains(v)));
    }

    #[test]
    fn nearly_sorted_is_a_permutation_with_few_displacements() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let size = 1000;
        let data = generate(DataShape::NearlySorted, size, &mut rng);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, generate(DataShape::Sorted, size, &mut rng));

        let displaced = data
            .iter()
            .enumerate()
            .filter(|&(i, &v)| v != i as i64 + 1)
            .count();
        assert!(displaced <= 2 * (size / NEARLY_SORTED_SWAP_DIVISOR));
    }

    #[test]
    fn empty_and_tiny_sizes() {
        let mut rng = StdRng::seed_from_u64(3);
        for shape in ALL_SHAPES {
            assert!(generate(shape, 0, &mut rng).is_empty());
            assert_eq!(generate(shape, 1, &mut rng).len(), 1);
        }
        assert_eq!(generate(DataShape::NearlySorted, 1, &mut rng), [1]);
    }

    #[test]
    fn same_seed_same_data() {
        for shape in ALL_SHAPES {
            let a = generate(shape, 256, &mut StdRng::seed_from_u64(11));
            let b = generate(shape, 256, &mut StdRng::seed_from_u64(11));
            assert_eq!(a, b, "shape={shape}");
        }
    }
}
