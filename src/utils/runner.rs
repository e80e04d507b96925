//! Benchmark execution across algorithms and input sizes, plus CSV export.

use std::io::Write;

use super::bench::{time_seed, unit_name};
use super::timer::{measure_variants, TimingConfig};
use crate::registry::{AlgorithmRunner, BenchmarkResult};

/// Raw timing data for a single variant (used for CSV export)
#[derive(Clone, Debug, PartialEq)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results indexed as `results[algorithm][size]`, in the order given.
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure one algorithm at one input size.
pub fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    size: usize,
    config: &TimingConfig,
) -> Vec<BenchmarkResult> {
    let input_seed = config.seed.unwrap_or_else(time_seed);
    let closures = algo.get_variant_closures(size, input_seed);
    log::debug!("measuring '{}' at size {} ({} variants)", algo.name(), size, closures.len());
    let mut results = measure_variants(closures, config);
    super::tui::sort_variants(&mut results);
    results
}

/// Run every (algorithm, size) pair in a shuffled order so that slow drift
/// (thermal, frequency scaling) does not favor whichever comes first.
pub fn run_all_algorithms_randomized(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    config: &TimingConfig,
) -> GroupedResults {
    let mut schedule: Vec<(usize, usize)> = (0..algorithms.len())
        .flat_map(|a| (0..sample_sizes.len()).map(move |s| (a, s)))
        .collect();
    super::bench::shuffle(&mut schedule, config.seed.unwrap_or_else(time_seed));

    let mut results: Vec<Vec<Vec<BenchmarkResult>>> = algorithms
        .iter()
        .map(|_| vec![Vec::new(); sample_sizes.len()])
        .collect();

    for (algo_idx, size_idx) in schedule {
        results[algo_idx][size_idx] =
            run_algorithm(algorithms[algo_idx], sample_sizes[size_idx], config);
    }

    let mut raw_data = Vec::new();
    for (algo, per_size) in algorithms.iter().zip(&results) {
        for (&size, variants) in sample_sizes.iter().zip(per_size) {
            raw_data.extend(variants.iter().map(|r| RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: r.name.clone(),
                input_size: size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                result_sample: r.result_sample,
            }));
        }
    }

    GroupedResults { results, raw_data }
}

/// Write timing rows as CSV
pub fn write_csv<W: Write>(mut out: W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(out, "algorithm,variant,compiler,input_size,avg_time,unit,result")?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            unit_name(),
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}

/// Export timing data to a CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), data)
}
