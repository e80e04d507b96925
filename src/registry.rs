//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Every algorithm registers a runner here so the CLI and the test suite can
//! list, verify and benchmark it without knowing its concrete types.

use crate::error::VerifyError;
use crate::utils::timer::Variant;

/// Result from measuring a variant
pub type BenchmarkResult = crate::utils::timer::VariantResult;

/// Trait that all algorithm runners must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "binary_search")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "search", "text")
    fn category(&self) -> &'static str;

    /// Names of the available variants, `original` first
    fn available_variants(&self) -> Vec<&'static str>;

    /// Closures for each variant over an input of roughly `size` elements.
    /// Each closure does ONE timed execution; the timer handles warmup,
    /// scheduling and repetition.
    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>>;

    /// Verify every variant against the reference
    fn verify(&self) -> Result<(), VerifyError>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }

    /// Distinct categories in registration order
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories = Vec::new();
        for algo in &self.algorithms {
            if !categories.contains(&algo.category()) {
                categories.push(algo.category());
            }
        }
        categories
    }

    /// Verify a set of algorithms, stopping at the first failure.
    pub fn verify_all(algorithms: &[&dyn AlgorithmRunner]) -> Result<(), VerifyError> {
        for algo in algorithms {
            log::debug!(
                "verifying '{}' ({} variants)",
                algo.name(),
                algo.available_variants().len()
            );
            algo.verify()?;
        }
        Ok(())
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::search::binary_search::BinarySearchRunner);
    registry.register(crate::collections::flatten::FlattenRunner);
    registry.register(crate::collections::merge_catalogs::MergeCatalogsRunner);
    registry.register(crate::collections::dedup::DedupRunner);
    registry.register(crate::matrix::transpose::TransposeRunner);
    registry.register(crate::grading::final_grades::FinalGradesRunner);
    registry.register(crate::text::word_frequency::WordFrequencyRunner);
    registry.register(crate::text::password::PasswordRunner);
    registry.register(crate::math::primes::PrimesRunner);

    registry
}
