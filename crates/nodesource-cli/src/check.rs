//! Response checks for a running data source

use nodesource_core::{FORECAST_WORKERS, NodeValue, PLACEHOLDER_LOSS, ValueRange};
use std::fmt;

/// Result of one check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: detail.into(),
        }
    }

    fn from_result(name: &str, result: Result<String, String>) -> Self {
        match result {
            Ok(detail) => Self::pass(name, detail),
            Err(detail) => Self::fail(name, detail),
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}: {}", mark, self.name, self.detail)
    }
}

/// Ordered list of outcomes for one probe run
#[derive(Debug, Clone, Default)]
pub struct Report {
    outcomes: Vec<CheckOutcome>,
}

impl Report {
    pub fn push(&mut self, outcome: CheckOutcome) {
        tracing::debug!(name = %outcome.name, passed = outcome.passed, "check");
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    pub fn passed(&self) -> bool {
        self.failures() == 0
    }
}

// Only plain decimal text counts; quoted or comma-separated values fail.
fn decimal_in_range(text: &str, range: &ValueRange) -> Result<f64, String> {
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("not a decimal: {:?}", text))?;
    if range.contains(value) {
        Ok(value)
    } else {
        Err(format!(
            "{} outside [{}, {})",
            value,
            range.low(),
            range.high()
        ))
    }
}

/// Scalar text must parse as a decimal inside the range
pub fn check_scalar(name: &str, text: &str, range: &ValueRange) -> CheckOutcome {
    CheckOutcome::from_result(name, decimal_in_range(text, range).map(|v| v.to_string()))
}

fn forecast_result(values: &[NodeValue], range: &ValueRange) -> Result<String, String> {
    let workers: Vec<&str> = values.iter().map(|v| v.worker.as_str()).collect();
    if workers != FORECAST_WORKERS {
        return Err(format!("unexpected workers {:?}", workers));
    }
    for value in values {
        decimal_in_range(&value.value, range).map_err(|e| format!("{}: {}", value.worker, e))?;
    }
    Ok(format!("{} workers", values.len()))
}

/// Forecast must list every worker once, in order, each value in range
pub fn check_forecast(values: &[NodeValue], range: &ValueRange) -> CheckOutcome {
    CheckOutcome::from_result("forecast", forecast_result(values, range))
}

/// Forecast body must be a JSON array of `{worker, value}` entries
pub fn check_forecast_body(body: &str, range: &ValueRange) -> CheckOutcome {
    match serde_json::from_str::<Vec<NodeValue>>(body) {
        Ok(values) => check_forecast(&values, range),
        Err(e) => CheckOutcome::fail("forecast", format!("not a forecast array: {}", e)),
    }
}

pub fn check_never_negative(flag: bool) -> CheckOutcome {
    if flag {
        CheckOutcome::pass("is_never_negative", "true")
    } else {
        CheckOutcome::fail("is_never_negative", "false")
    }
}

/// Body must be the JSON literal `true`
pub fn check_never_negative_body(body: &str) -> CheckOutcome {
    match serde_json::from_str::<bool>(body) {
        Ok(flag) => check_never_negative(flag),
        Err(_) => CheckOutcome::fail("is_never_negative", format!("not a boolean: {:?}", body)),
    }
}

pub fn check_loss(loss: &str) -> CheckOutcome {
    if loss == PLACEHOLDER_LOSS {
        CheckOutcome::pass("calculate", loss)
    } else {
        CheckOutcome::fail("calculate", format!("expected {}, got {}", PLACEHOLDER_LOSS, loss))
    }
}
