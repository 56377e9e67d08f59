//! Error types for nodesource-core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid value range: [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
