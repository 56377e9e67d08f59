//! Error types for nodesource-cli

use nodesource_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Received non-OK HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} check(s) failed")]
    CheckFailed(usize),
}

pub type Result<T> = std::result::Result<T, CliError>;
