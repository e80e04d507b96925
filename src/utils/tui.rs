//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority of a variant. Order: original, Rust variants by name, C variants.
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == "original" {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust, then C
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants:  {}", algo.available_variants().join(", ")),
    ];
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize, filtered: bool) {
    let Some(baseline) = results.first() else {
        return;
    };

    let variant_col_width = get_term_width().saturating_sub(72).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = baseline.avg_time.as_nanos() as f64;
    let filter_note = if filtered { ", filtered" } else { "" };

    println!("  Size: {} ({} runs{})", size, baseline.runs, filter_note);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Median",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Result",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };
        let cv = if avg_ns > 0.0 {
            result.std_dev.as_nanos() as f64 / avg_ns
        } else {
            0.0
        };

        let display_name = match (result.name.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
            (true, Some(compiler)) => format!("{} ({})", result.name, compiler),
            _ => result.name.clone(),
        };
        let result_str = match (result.result_sample, baseline.result_sample) {
            (Some(r), Some(b)) if r == b => format!("{}", r),
            (Some(r), _) => format!("{} (!)", r),
            (None, _) => "-".to_string(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.median_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            result_str,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Practice-Algo Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);
    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms, grouped by category
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    for category in registry.categories() {
        println!();
        println!("  [{}]", category);
        for algo in registry.by_category(category) {
            println!("    {:<18} {}", algo.name(), algo.description());
        }
    }
}

/// Print one verification outcome line
pub fn print_verification(algo: &dyn AlgorithmRunner, outcome: &Result<(), crate::error::VerifyError>) {
    match outcome {
        Ok(()) => println!(
            "  ✅ {:<18} {} variants verified",
            algo.name(),
            algo.available_variants().len()
        ),
        Err(e) => println!("  ❌ {:<18} {}", algo.name(), e),
    }
}

/// Display grouped results: one info box per algorithm, one table per size.
pub fn display_grouped(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    results: &[Vec<Vec<BenchmarkResult>>],
    filtered: bool,
) {
    for (algo, per_size) in algorithms.iter().zip(results) {
        print_algo_info_box(*algo);
        for (&size, variants) in sample_sizes.iter().zip(per_size) {
            print_results_table(variants, size, filtered);
        }
    }
}
