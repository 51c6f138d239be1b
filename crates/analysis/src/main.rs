mod config;
mod report;

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use quicksort::RngSource;
use quicksort::generator::generate;
use quicksort::harness::{DEFAULT_ITERATIONS, compare};

use crate::config::{AnalysisConfig, DEFAULT_SEED};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Section {
    Demo,
    Theory,
    Empirical,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "analysis")]
#[command(version)]
#[command(about = "Deterministic vs randomized quicksort: counters and timings", long_about = None)]
struct Cli {
    /// Which part of the report to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Input sizes for the empirical tables, comma separated
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Input shapes: random, sorted, reverse_sorted, nearly_sorted
    #[arg(long, value_delimiter = ',')]
    shapes: Option<Vec<String>>,

    /// Runs averaged per table cell
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Seed for generated inputs and randomized pivots
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = AnalysisConfig::resolve(cli.sizes, cli.shapes, cli.iterations, cli.seed)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_rule(
        &mut out,
        "QUICKSORT: IMPLEMENTATION, ANALYSIS, AND RANDOMIZATION",
    )?;

    if matches!(cli.section, Section::Demo | Section::All) {
        report::write_demonstration(&mut out, &mut RngSource::seeded(config.seed))?;
    }
    if matches!(cli.section, Section::Theory | Section::All) {
        report::write_theory(&mut out)?;
    }
    if matches!(cli.section, Section::Empirical | Section::All) {
        run_empirical(&mut out, &config)?;
    }

    writeln!(out)?;
    report::write_rule(&mut out, "ANALYSIS COMPLETE")?;
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_empirical(out: &mut impl Write, config: &AnalysisConfig) -> Result<(), Box<dyn Error>> {
    writeln!(out)?;
    report::write_rule(out, "EMPIRICAL ANALYSIS: DETERMINISTIC vs RANDOMIZED")?;

    for &shape in &config.shapes {
        info!("measuring shape {shape} over sizes {:?}", config.sizes);
        report::write_table_header(out, shape)?;

        for &size in &config.sizes {
            let mut rng = StdRng::seed_from_u64(config.dataset_seed(shape, size));
            let input = generate(shape, size, &mut rng);
            let row = compare(&input, config.iterations, config.seed)?;
            report::write_table_row(out, &row)?;
        }
    }

    Ok(())
}
