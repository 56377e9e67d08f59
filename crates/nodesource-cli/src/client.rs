//! HTTP client for nodesource-compatible endpoints
//!
//! Mirrors how a worker/reputer node adapter consumes a data source: plain
//! GETs for inference and truth, JSON POSTs for the loss function.

use crate::error::{CliError, Result};
use nodesource_core::{NodeValue, parse_decimal};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// The two forecast payloads seen in the wild
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForecastShape {
    /// `[{"worker": "Worker1", "value": "12.3"}, ...]`
    Entries(Vec<NodeValue>),
    /// `{"Worker1": [12.3, ...], ...}`; only the first value counts
    ByWorker(BTreeMap<String, Vec<f64>>),
}

impl ForecastShape {
    pub fn into_node_values(self) -> Vec<NodeValue> {
        match self {
            ForecastShape::Entries(values) => values,
            ForecastShape::ByWorker(map) => map
                .into_iter()
                .filter_map(|(worker, values)| {
                    values
                        .first()
                        .map(|value| NodeValue::new(worker, format!("{:.6}", value)))
                })
                .collect(),
        }
    }
}

/// Parse a forecast body in either shape
pub fn parse_forecast(body: &str) -> Result<Vec<NodeValue>> {
    let shape: ForecastShape = serde_json::from_str(body)?;
    Ok(shape.into_node_values())
}

/// Base URL of a locally running nodesource-api
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for one data source base URL
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: Client,
    base_url: String,
}

impl SourceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a URL and return the body of a 200 response
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(CliError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        tracing::debug!(url, %body, "Requested endpoint");
        Ok(body)
    }

    /// POST a JSON payload and return the body of a 200 response
    pub async fn post_json(&self, path: &str, payload: &Value) -> Result<String> {
        let url = self.url(path);
        let response = self.http.post(&url).json(payload).send().await?;
        if response.status() != StatusCode::OK {
            return Err(CliError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(response.text().await?)
    }

    /// Status code for a GET, whatever it is
    pub async fn status_of(&self, path: &str) -> Result<StatusCode> {
        Ok(self.http.get(self.url(path)).send().await?.status())
    }

    pub async fn greeting(&self) -> Result<String> {
        self.get_text(&self.url("/")).await
    }

    /// Inference as the raw scalar text
    pub async fn inference(&self, token: &str) -> Result<String> {
        self.get_text(&self.url(&format!("/inference/{}", token)))
            .await
    }

    pub async fn forecast(&self) -> Result<Vec<NodeValue>> {
        let body = self.get_text(&self.url("/forecast")).await?;
        parse_forecast(&body)
    }

    /// Ground truth for a token at a block height
    pub async fn truth(&self, token: &str, block_height: &str) -> Result<f64> {
        let body = self
            .get_text(&self.url(&format!("/truth/{}/{}", token, block_height)))
            .await?;
        Ok(parse_decimal(&body)?)
    }

    /// Ground truth from the parameterless route
    pub async fn truth_bare(&self) -> Result<f64> {
        let body = self.get_text(&self.url("/truth")).await?;
        Ok(parse_decimal(&body)?)
    }

    /// Accepts `true` or `{"is_never_negative": true}`
    pub async fn is_never_negative(&self, options: &BTreeMap<String, String>) -> Result<bool> {
        let body = self
            .post_json("/is_never_negative", &json!({ "options": options }))
            .await?;

        match serde_json::from_str::<Value>(&body)? {
            Value::Bool(flag) => Ok(flag),
            Value::Object(map) => map
                .get("is_never_negative")
                .and_then(Value::as_bool)
                .ok_or_else(|| CliError::InvalidResponse(body.clone())),
            _ => Err(CliError::InvalidResponse(body)),
        }
    }

    /// Loss for a truth/prediction pair as decimal text
    ///
    /// Accepts a bare decimal or `{"loss": "..."}`.
    pub async fn calculate(
        &self,
        y_true: &str,
        y_pred: &str,
        options: &BTreeMap<String, String>,
    ) -> Result<String> {
        let payload = json!({
            "y_true": y_true,
            "y_pred": y_pred,
            "options": options,
        });
        let body = self.post_json("/calculate", &payload).await?;

        let loss = match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) => match map.get("loss") {
                Some(Value::String(loss)) => loss.clone(),
                Some(Value::Number(loss)) => loss.to_string(),
                _ => return Err(CliError::InvalidResponse(body)),
            },
            Ok(Value::String(loss)) => loss,
            _ => body.trim().to_string(),
        };

        parse_decimal(&loss)?;
        Ok(loss)
    }
}

impl Default for SourceClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forecast_entries() {
        let values = parse_forecast(
            r#"[{"worker": "Worker1", "value": "1.5"}, {"worker": "Worker2", "value": "2.5"}]"#,
        )
        .unwrap();
        assert_eq!(
            values,
            vec![NodeValue::new("Worker1", "1.5"), NodeValue::new("Worker2", "2.5")]
        );
    }

    #[test]
    fn test_parse_forecast_by_worker() {
        let values =
            parse_forecast(r#"{"Worker2": [2.0, 9.0], "Worker1": [1.25], "Worker3": []}"#).unwrap();
        assert_eq!(
            values,
            vec![
                NodeValue::new("Worker1", "1.250000"),
                NodeValue::new("Worker2", "2.000000"),
            ]
        );
    }

    #[test]
    fn test_parse_forecast_rejects_other_json() {
        assert!(matches!(parse_forecast("42"), Err(CliError::Json(_))));
        assert!(parse_forecast("not json").is_err());
    }

    #[test]
    fn test_url_joining() {
        let client = SourceClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/forecast"), "http://localhost:8000/forecast");
        assert_eq!(client.url("forecast"), "http://localhost:8000/forecast");
    }
}
