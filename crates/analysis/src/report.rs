use std::io::{self, Write};

use quicksort::generator::DataShape;
use quicksort::harness::Comparison;
use quicksort::{RandomSource, RunCounters, sort_deterministic, sort_randomized};

pub const DEMO_INPUT: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

const RULE_WIDTH: usize = 80;
const TABLE_WIDTH: usize = 74;

const THEORY: &str = "\
TIME COMPLEXITY

1. Best case: O(n log n)
   Every pivot splits its range into two equal halves.
   T(n) = 2T(n/2) + O(n), which the master theorem solves to O(n log n).

2. Average case: O(n log n)
   Every element is equally likely to be the pivot.
   T(n) = (1/n) * sum[T(i-1) + T(n-i)] + O(n) for i = 1..n, i.e. O(n log n);
   about 2n ln n comparisons are expected.

3. Worst case: O(n^2)
   The pivot is always the smallest or largest element of its range.
   T(n) = T(n-1) + O(n), i.e. O(n^2).
   Already sorted or reverse sorted input does this to last-element pivoting:
   n(n-1)/2 comparisons.

SPACE COMPLEXITY

   Partitioning is in place: O(1) extra per step.
   Pending ranges: O(log n) expected, O(n) for a skewed split sequence.

RANDOMIZATION

   No fixed input pattern triggers the worst case any more.
   The expected O(n log n) bound holds for every input, adversarial ones
   included; only an unlucky sequence of draws is slow.
";

pub fn write_rule(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn write_demonstration<S: RandomSource + ?Sized>(
    out: &mut impl Write,
    source: &mut S,
) -> io::Result<()> {
    write_rule(out, "QUICKSORT DEMONSTRATION")?;
    writeln!(out, "Original array: {DEMO_INPUT:?}")?;

    let mut counters = RunCounters::default();

    let mut data = DEMO_INPUT;
    writeln!(out, "\nDeterministic quicksort:")?;
    writeln!(out, "Before sorting: {data:?}")?;
    sort_deterministic(&mut data, &mut counters);
    write_sorted(out, &data, counters)?;

    counters.reset();
    let mut data = DEMO_INPUT;
    writeln!(out, "\nRandomized quicksort:")?;
    writeln!(out, "Before sorting: {data:?}")?;
    sort_randomized(&mut data, &mut counters, source);
    write_sorted(out, &data, counters)
}

fn write_sorted(out: &mut impl Write, data: &[i64], counters: RunCounters) -> io::Result<()> {
    writeln!(out, "After sorting:  {data:?}")?;
    writeln!(
        out,
        "Comparisons: {}, Swaps: {}",
        counters.comparisons, counters.swaps
    )
}

pub fn write_theory(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    write_rule(out, "THEORETICAL ANALYSIS")?;
    write!(out, "{THEORY}")
}

pub fn shape_title(shape: DataShape) -> String {
    format!("{} DATA", shape.label().replace('_', " ").to_uppercase())
}

pub fn write_table_header(out: &mut impl Write, shape: DataShape) -> io::Result<()> {
    writeln!(out, "\n{}:", shape_title(shape))?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    writeln!(
        out,
        "{:<8} {:<12} {:<12} {:<10} {:<10} {:<9} {:<9}",
        "Size", "Det. Time", "Rand. Time", "Det. Comp", "Rand. Comp", "Det. Swap", "Rand. Swap"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))
}

pub fn write_table_row(out: &mut impl Write, row: &Comparison) -> io::Result<()> {
    writeln!(
        out,
        "{:<8} {:<12.6} {:<12.6} {:<10} {:<10} {:<9} {:<9}",
        row.size,
        row.deterministic.mean_time.as_secs_f64(),
        row.randomized.mean_time.as_secs_f64(),
        row.deterministic.mean_comparisons,
        row.randomized.mean_comparisons,
        row.deterministic.mean_swaps,
        row.randomized.mean_swaps,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use quicksort::ScriptedSource;
    use quicksort::harness::Measurement;

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn demonstration_reports_sorted_arrays_and_counters() {
        let text = render(|out| write_demonstration(out, &mut ScriptedSource::default()));

        assert!(text.contains("Original array: [64, 34, 25, 12, 22, 11, 90]"));
        assert_eq!(
            text.matches("After sorting:  [11, 12, 22, 25, 34, 64, 90]").count(),
            2
        );
        assert!(text.contains("Comparisons: 19, Swaps: 16"));
        // Drawing `high` every time adds one counted swap per partition.
        assert!(text.contains("Comparisons: 19, Swaps: 21"));
    }

    #[test]
    fn shape_titles() {
        assert_eq!(shape_title(DataShape::ReverseSorted), "REVERSE SORTED DATA");
        assert_eq!(shape_title(DataShape::Random), "RANDOM DATA");
    }

    #[test]
    fn table_row_columns() {
        let measurement = |nanos, comparisons, swaps| Measurement {
            iterations: 5,
            mean_time: Duration::from_nanos(nanos),
            mean_comparisons: comparisons,
            mean_swaps: swaps,
        };
        let row = Comparison {
            size: 100,
            deterministic: measurement(1_500_000, 4950, 5049),
            randomized: measurement(250_000, 640, 420),
        };

        let text = render(|out| write_table_row(out, &row));
        let columns = text.split_whitespace().collect::<Vec<_>>();
        assert_eq!(
            columns,
            ["100", "0.001500", "0.000250", "4950", "640", "5049", "420"]
        );
    }

    #[test]
    fn theory_mentions_each_case() {
        let text = render(|out| write_theory(out));
        for needle in ["Best case", "Average case", "Worst case", "RANDOMIZATION"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }
}
