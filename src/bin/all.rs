//! Generic CLI for listing, verifying and benchmarking algorithms.
//!
//! Usage:
//!   practice-algo                  # Benchmark all algorithms
//!   practice-algo --list           # List available algorithms
//!   practice-algo --verify         # Verify every variant
//!   practice-algo binary_search    # Benchmark one algorithm

use clap::Parser;
use log::{error, info, warn};
use practice_algo::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
use practice_algo::tui;
use practice_algo::utils::runner;
use practice_algo::utils::timer::{PinStrategy, TimingConfig};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "practice-algo", version, about = "Verify and benchmark textbook algorithm variants")]
struct Cli {
    /// Name of a specific algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List all available algorithms
    #[arg(short, long)]
    list: bool,

    /// Verify every variant against its reference instead of benchmarking
    #[arg(long)]
    verify: bool,

    /// Restrict to one category (e.g. search, text)
    #[arg(long)]
    category: Option<String>,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_value = "64,256,1024,4096,16384")]
    sizes: Vec<usize>,

    /// Number of measurement runs per variant
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Warmup executions per variant before measuring
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Random seed for inputs and schedule (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// Trim the 1% extremes from measurements
    #[arg(short, long)]
    filter: bool,

    /// Export raw timings to a CSV file
    #[arg(long)]
    csv: Option<String>,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = PinStrategy::PerExecution)]
    pin: PinStrategy,
}

impl Cli {
    fn timing_config(&self) -> TimingConfig {
        TimingConfig {
            runs_per_variant: self.runs,
            warmup_iterations: self.warmup,
            pin_strategy: self.pin,
            filter_outliers: self.filter,
            seed: self.seed,
        }
    }
}

fn setup_logs() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("PRACTICE_ALGO_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Resolve the algorithms selected by name and/or category.
fn select<'r>(registry: &'r AlgorithmRegistry, cli: &Cli) -> Result<Vec<&'r dyn AlgorithmRunner>, String> {
    let mut selected: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                return Err(format!(
                    "algorithm '{}' not found. Available: {}",
                    name,
                    registry.list_names().join(", ")
                ))
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    if let Some(category) = &cli.category {
        selected.retain(|a| a.category() == category);
        if selected.is_empty() {
            return Err(format!(
                "no algorithm in category '{}'. Categories: {}",
                category,
                registry.categories().join(", ")
            ));
        }
    }
    Ok(selected)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logs();

    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return ExitCode::SUCCESS;
    }

    let algorithms = match select(&registry, &cli) {
        Ok(algorithms) => algorithms,
        Err(message) => {
            error!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    if practice_algo::utils::C_COMPILER_NAME.is_none() {
        info!("C variants not compiled in; only Rust variants will run");
    }

    if cli.verify {
        let mut failed = false;
        for algo in &algorithms {
            let outcome = algo.verify();
            tui::print_verification(*algo, &outcome);
            failed |= outcome.is_err();
        }
        return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
    }

    if cli.sizes.is_empty() {
        error!("--sizes needs at least one input size");
        return ExitCode::FAILURE;
    }

    tui::print_header();

    let config = cli.timing_config();
    info!(
        "benchmarking {} algorithm(s) at sizes {:?}, {} runs per variant",
        algorithms.len(),
        cli.sizes,
        config.runs_per_variant
    );
    let grouped = runner::run_all_algorithms_randomized(&algorithms, &cli.sizes, &config);

    if let Some(path) = &cli.csv {
        match runner::export_csv(path, &grouped.raw_data) {
            Ok(()) => info!("raw data exported to {}", path),
            Err(e) => warn!("failed to export CSV to {}: {}", path, e),
        }
    }

    tui::display_grouped(&algorithms, &cli.sizes, &grouped.results, config.filter_outliers);
    println!("Note: Speedup is relative to the 'original' variant.");

    ExitCode::SUCCESS
}
