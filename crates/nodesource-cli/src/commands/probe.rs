//! Probe command handler

use crate::client::SourceClient;
use crate::error::{CliError, Result};
use crate::probe::{ProbeOptions, probe};

pub async fn run_probe(url: &str, options: ProbeOptions) -> Result<()> {
    println!("Probing {} (profile: {})", url, options.profile);

    let client = SourceClient::new(url);
    let report = probe(&client, &options).await;

    for outcome in report.outcomes() {
        println!("  {}", outcome);
    }

    if report.passed() {
        println!("\nAll {} checks passed", report.outcomes().len());
        Ok(())
    } else {
        Err(CliError::CheckFailed(report.failures()))
    }
}
