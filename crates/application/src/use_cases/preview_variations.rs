//! Preview variations use case

use promptflow_domain::{ChoicePointSummary, VariationReport};
use serde::Serialize;
use tracing::debug;

use crate::ApplicationResult;
use crate::choice_resolver::{DEFAULT_COMBINATION_LIMIT, analyze, enumerate_combinations};

/// Output of a variation preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewVariationsOutput {
    /// The prompt, passed through unchanged.
    pub prompt: String,
    /// Number of distinct inline combinations.
    pub variation_count: u64,
    /// Discovered choice points.
    pub report: VariationReport,
    /// Concrete combinations, capped at the preview limit.
    pub combinations: Vec<String>,
    /// Pretty-printed report for host display.
    pub variations_json: String,
}

#[derive(Serialize)]
struct VariationsInfo<'a> {
    wildcards: &'a [ChoicePointSummary],
    total_variations: u64,
    seed: u64,
}

/// Use case for previewing the variation space of a prompt.
#[derive(Debug, Clone, Copy)]
pub struct PreviewVariations {
    limit: usize,
}

impl PreviewVariations {
    /// Creates a preview capped at [`DEFAULT_COMBINATION_LIMIT`] combinations.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(DEFAULT_COMBINATION_LIMIT)
    }

    /// Creates a preview capped at `limit` combinations.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Analyzes `prompt` without resolving it.
    ///
    /// # Errors
    /// Returns an error if the report cannot be serialized.
    pub fn execute(&self, prompt: &str, seed: u64) -> ApplicationResult<PreviewVariationsOutput> {
        let report = analyze(prompt);
        let combinations = enumerate_combinations(prompt, self.limit);

        let variations_json = serde_json::to_string_pretty(&VariationsInfo {
            wildcards: &report.choice_points,
            total_variations: report.total_variations,
            seed,
        })?;

        debug!(
            choice_points = report.choice_points.len(),
            total = report.total_variations,
            "previewed variations"
        );

        Ok(PreviewVariationsOutput {
            prompt: prompt.to_string(),
            variation_count: report.total_variations,
            report,
            combinations,
            variations_json,
        })
    }
}

impl Default for PreviewVariations {
    fn default() -> Self {
        Self::new()
    }
}
