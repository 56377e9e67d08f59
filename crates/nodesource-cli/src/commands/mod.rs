//! CLI command handlers

pub mod fetch;
pub mod probe;
pub mod profiles;

pub use fetch::run_fetch;
pub use probe::run_probe;
pub use profiles::run_profiles;
