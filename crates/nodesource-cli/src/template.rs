//! Endpoint URL templates
//!
//! Node configs point at endpoints like
//! `http://localhost:8000/truth/{Token}/{BlockHeight}`. Built-in keys are
//! substituted first, then every configured parameter.

use std::collections::BTreeMap;

fn replace_placeholders(template: &str, params: &BTreeMap<String, String>) -> String {
    params.iter().fold(template.to_string(), |url, (key, value)| {
        url.replace(&format!("{{{}}}", key), value)
    })
}

/// Expand `{BlockHeight}`, `{TopicId}` and then `{Key}` for each parameter
pub fn expand_endpoint(
    template: &str,
    params: &BTreeMap<String, String>,
    block_height: i64,
    topic_id: u64,
) -> String {
    let builtins = BTreeMap::from([
        ("BlockHeight".to_string(), block_height.to_string()),
        ("TopicId".to_string(), topic_id.to_string()),
    ]);
    let url = replace_placeholders(template, &builtins);
    replace_placeholders(&url, params)
}

/// Parse `KEY=VALUE` pairs from the command line
pub fn parse_params(pairs: &[String]) -> Result<BTreeMap<String, String>, String> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", pair))
        })
        .collect()
}
