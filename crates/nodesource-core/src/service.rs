use crate::decimal::format_decimal;
use crate::sampler::{SharedSampler, ThreadRngSampler};
use crate::{FORECAST_WORKERS, NodeValue, ValueRange};
use std::sync::Arc;

/// Loss reported by `/calculate`
pub const PLACEHOLDER_LOSS: &str = "1.0";

/// Answers every endpoint with sampled placeholder values
#[derive(Clone)]
pub struct PlaceholderService {
    sampler: SharedSampler,
    range: ValueRange,
}

impl PlaceholderService {
    /// Create a new PlaceholderService
    pub fn new(sampler: SharedSampler, range: ValueRange) -> Self {
        Self { sampler, range }
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn sampler_name(&self) -> &'static str {
        self.sampler.name()
    }

    fn sample_text(&self) -> String {
        format_decimal(self.sampler.sample(&self.range))
    }

    /// Inference for a token; the token does not influence the value
    pub fn inference(&self, token: &str) -> String {
        let value = self.sample_text();
        tracing::debug!(token, %value, "inference");
        value
    }

    /// One entry per forecast worker, in label order
    pub fn forecast(&self) -> Vec<NodeValue> {
        FORECAST_WORKERS
            .iter()
            .map(|worker| NodeValue::new(*worker, self.sample_text()))
            .collect()
    }

    /// Ground truth; both arguments are accepted and ignored
    pub fn truth(&self, token: Option<&str>, block_height: Option<&str>) -> String {
        let value = self.sample_text();
        tracing::debug!(?token, ?block_height, %value, "truth");
        value
    }

    pub fn is_never_negative(&self) -> bool {
        true
    }

    pub fn calculate_loss(&self) -> String {
        PLACEHOLDER_LOSS.to_string()
    }
}

impl Default for PlaceholderService {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngSampler), ValueRange::default())
    }
}

impl std::fmt::Debug for PlaceholderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderService")
            .field("sampler", &self.sampler.name())
            .field("range", &self.range)
            .finish()
    }
}
