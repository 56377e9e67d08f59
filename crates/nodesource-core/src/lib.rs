//! # nodesource core
//!
//! Domain types and the placeholder service behind the nodesource HTTP API.

pub mod decimal;
pub mod error;
pub mod sampler;
pub mod service;
pub mod types;

pub use decimal::{format_decimal, parse_decimal, sanitize_decimal};
pub use error::{CoreError, Result};
pub use sampler::{SeededSampler, SharedSampler, ThreadRngSampler, ValueSampler, sampler_for_seed};
pub use service::{PLACEHOLDER_LOSS, PlaceholderService};
pub use types::{FORECAST_WORKERS, NodeValue, Profile, TruthRoute, ValueRange};
