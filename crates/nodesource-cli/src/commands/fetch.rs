//! Fetch command handler

use crate::client::SourceClient;
use crate::error::{CliError, Result};
use crate::template::{expand_endpoint, parse_params};
use reqwest::Url;

/// Expanded endpoint as an absolute http(s) URL
fn target_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)
        .map_err(|e| CliError::InvalidInput(format!("{} is not an absolute URL: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(CliError::InvalidInput(format!(
            "unsupported scheme {:?} in {}",
            scheme, url
        ))),
    }
}

/// Expand an endpoint template and print the response body
pub async fn run_fetch(
    template: &str,
    params: &[String],
    block_height: i64,
    topic_id: u64,
) -> Result<()> {
    let params = parse_params(params).map_err(CliError::InvalidInput)?;
    let url = expand_endpoint(template, &params, block_height, topic_id);
    if url.contains('{') {
        tracing::warn!("Unexpanded placeholder in {}", url);
    }
    let url = target_url(&url)?;

    let body = SourceClient::default().get_text(url.as_str()).await?;
    println!("{}", body);
    Ok(())
}
