use crate::check::{
    CheckOutcome, Report, check_forecast_body, check_loss, check_never_negative_body,
    check_scalar,
};
use crate::client::SourceClient;
use nodesource_core::{Profile, TruthRoute, ValueRange};
use reqwest::StatusCode;
use serde_json::json;

/// Path no profile serves
const UNKNOWN_PATH: &str = "/nodesource-probe-unknown";

/// Inputs for one probe run
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub profile: Profile,
    pub token: String,
    pub block_height: String,
    pub range: ValueRange,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            token: "ETH".to_string(),
            block_height: "1".to_string(),
            range: ValueRange::default(),
        }
    }
}

/// Exercise every route of the profile and check each response
///
/// Bodies are checked as served, without the sanitizing the client applies
/// for node adapters. Transport errors become failed checks; the run always
/// completes.
pub async fn probe(client: &SourceClient, options: &ProbeOptions) -> Report {
    let mut report = Report::default();
    let range = &options.range;
    let profile = options.profile;

    if profile.serves_greeting() {
        report.push(match client.greeting().await {
            Ok(text) if !text.trim().is_empty() => CheckOutcome::pass("greeting", text),
            Ok(_) => CheckOutcome::fail("greeting", "empty body"),
            Err(e) => CheckOutcome::fail("greeting", e.to_string()),
        });
    }

    report.push(match client.inference(&options.token).await {
        Ok(text) => check_scalar("inference", &text, range),
        Err(e) => CheckOutcome::fail("inference", e.to_string()),
    });

    report.push(match client.get_text(&client.url("/forecast")).await {
        Ok(body) => check_forecast_body(&body, range),
        Err(e) => CheckOutcome::fail("forecast", e.to_string()),
    });

    let truth_path = match profile.truth_route() {
        TruthRoute::Scoped => format!("/truth/{}/{}", options.token, options.block_height),
        TruthRoute::Bare => "/truth".to_string(),
    };
    report.push(match client.get_text(&client.url(&truth_path)).await {
        Ok(text) => check_scalar("truth", &text, range),
        Err(e) => CheckOutcome::fail("truth", e.to_string()),
    });

    if profile.serves_loss() {
        let payload = json!({ "options": {} });
        report.push(match client.post_json("/is_never_negative", &payload).await {
            Ok(body) => check_never_negative_body(&body),
            Err(e) => CheckOutcome::fail("is_never_negative", e.to_string()),
        });

        let payload = json!({ "y_true": "0.0", "y_pred": "0.0", "options": {} });
        report.push(match client.post_json("/calculate", &payload).await {
            Ok(body) => check_loss(&body),
            Err(e) => CheckOutcome::fail("calculate", e.to_string()),
        });
    }

    report.push(match client.status_of(UNKNOWN_PATH).await {
        Ok(StatusCode::NOT_FOUND) => CheckOutcome::pass("unknown route", "404"),
        Ok(status) => CheckOutcome::fail("unknown route", format!("status {}", status)),
        Err(e) => CheckOutcome::fail("unknown route", e.to_string()),
    });

    report
}
