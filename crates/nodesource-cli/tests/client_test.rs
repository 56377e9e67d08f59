use httpmock::prelude::*;
use nodesource_cli::{CliError, SourceClient};
use nodesource_core::NodeValue;
use serde_json::json;
use std::collections::BTreeMap;

#[tokio::test]
async fn test_inference_returns_raw_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/inference/ETH");
            then.status(200).body("42.125");
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let value = client.inference("ETH").await.unwrap();

    mock.assert_async().await;
    assert_eq!(value, "42.125");
}

#[tokio::test]
async fn test_non_ok_status_is_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forecast");
            then.status(503).body("unavailable");
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let result = client.forecast().await;

    assert!(matches!(
        result,
        Err(CliError::UnexpectedStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_forecast_by_worker_shape() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forecast");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"Worker1": [10.5, 11.0], "Worker2": [20.0]}));
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let values = client.forecast().await.unwrap();

    assert_eq!(
        values,
        vec![
            NodeValue::new("Worker1", "10.500000"),
            NodeValue::new("Worker2", "20.000000"),
        ]
    );
}

#[tokio::test]
async fn test_truth_sanitizes_quoted_value() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/truth/ETH/100");
            then.status(200).body("\"3,456.5\"\n");
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let value = client.truth("ETH", "100").await.unwrap();

    assert_eq!(value, 3456.5);
}

#[tokio::test]
async fn test_truth_rejects_garbage() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/truth");
            then.status(200).body("not a number");
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let result = client.truth_bare().await;

    assert!(matches!(result, Err(CliError::Core(_))));
}

#[tokio::test]
async fn test_is_never_negative_sends_options() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/is_never_negative")
                .json_body(json!({"options": {"method": "l1"}}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"is_never_negative": true}));
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let options = BTreeMap::from([("method".to_string(), "l1".to_string())]);
    let flag = client.is_never_negative(&options).await.unwrap();

    mock.assert_async().await;
    assert!(flag);
}

#[tokio::test]
async fn test_is_never_negative_rejects_non_boolean() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/is_never_negative");
            then.status(200).body("\"yes\"");
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let result = client.is_never_negative(&BTreeMap::new()).await;

    assert!(matches!(result, Err(CliError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_calculate_accepts_loss_object() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/calculate")
                .json_body(json!({"y_true": "10.0", "y_pred": "12.0", "options": {}}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"loss": "2.0"}));
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let loss = client
        .calculate("10.0", "12.0", &BTreeMap::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(loss, "2.0");
}

#[tokio::test]
async fn test_calculate_accepts_bare_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200).body("1.0");
        })
        .await;

    let client = SourceClient::new(server.base_url());
    let loss = client.calculate("0", "0", &BTreeMap::new()).await.unwrap();

    assert_eq!(loss, "1.0");
}
