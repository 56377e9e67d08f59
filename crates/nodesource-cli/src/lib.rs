//! nodesource CLI library

pub mod check;
pub mod client;
pub mod commands;
pub mod error;
pub mod probe;
pub mod template;

pub use client::{ForecastShape, SourceClient, parse_forecast};
pub use error::{CliError, Result};
pub use probe::{ProbeOptions, probe};
