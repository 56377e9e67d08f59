//! Common types for nodesource-core

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Worker labels reported by `/forecast`, in response order
pub const FORECAST_WORKERS: [&str; 3] = ["Worker1", "Worker2", "Worker3"];

/// One (worker, value) pair of a forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeValue {
    pub worker: String,
    pub value: String,
}

impl NodeValue {
    pub fn new(worker: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            worker: worker.into(),
            value: value.into(),
        }
    }
}

/// Route set exposed by a server instance
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Profile {
    /// Greeting, scoped truth and the loss endpoints
    #[default]
    Source,
    /// Same as `Source` without the greeting
    Reputer,
    /// Inference, forecast and the bare `/truth`
    Inference,
}

/// How a profile exposes ground truth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthRoute {
    /// `/truth/{token}/{blockheight}`
    Scoped,
    /// `/truth`
    Bare,
}

impl Profile {
    /// Parse a profile name, case-insensitively
    pub fn parse(name: &str) -> Result<Self> {
        Profile::from_str(&name.trim().to_ascii_lowercase())
            .map_err(|_| CoreError::UnknownProfile(name.to_string()))
    }

    pub fn serves_greeting(&self) -> bool {
        matches!(self, Profile::Source)
    }

    pub fn serves_loss(&self) -> bool {
        matches!(self, Profile::Source | Profile::Reputer)
    }

    pub fn truth_route(&self) -> TruthRoute {
        match self {
            Profile::Source | Profile::Reputer => TruthRoute::Scoped,
            Profile::Inference => TruthRoute::Bare,
        }
    }

    /// Route table for this profile as `(method, path)` pairs
    pub fn routes(&self) -> Vec<(&'static str, &'static str)> {
        let mut routes = Vec::new();
        if self.serves_greeting() {
            routes.push(("GET", "/"));
        }
        routes.push(("GET", "/health"));
        routes.push(("GET", "/inference/{token}"));
        routes.push(("GET", "/forecast"));
        match self.truth_route() {
            TruthRoute::Scoped => routes.push(("GET", "/truth/{token}/{blockheight}")),
            TruthRoute::Bare => routes.push(("GET", "/truth")),
        }
        if self.serves_loss() {
            routes.push(("POST", "/is_never_negative"));
            routes.push(("POST", "/calculate"));
        }
        routes
    }
}

/// Half-open sampling range `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    low: f64,
    high: f64,
}

impl ValueRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(CoreError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_profile_parse() {
        assert_eq!(Profile::parse("source").unwrap(), Profile::Source);
        assert_eq!(Profile::parse(" Reputer ").unwrap(), Profile::Reputer);
        assert_eq!(Profile::parse("INFERENCE").unwrap(), Profile::Inference);
        assert_eq!(
            Profile::parse("oracle"),
            Err(CoreError::UnknownProfile("oracle".to_string()))
        );
    }

    #[test]
    fn test_profile_display_round_trip() {
        for profile in Profile::iter() {
            assert_eq!(Profile::parse(&profile.to_string()).unwrap(), profile);
        }
    }

    #[test]
    fn test_profile_routes() {
        let source = Profile::Source.routes();
        assert!(source.contains(&("GET", "/")));
        assert!(source.contains(&("GET", "/truth/{token}/{blockheight}")));
        assert!(source.contains(&("POST", "/calculate")));

        let reputer = Profile::Reputer.routes();
        assert!(!reputer.contains(&("GET", "/")));
        assert!(reputer.contains(&("POST", "/is_never_negative")));

        let inference = Profile::Inference.routes();
        assert!(inference.contains(&("GET", "/truth")));
        assert!(!inference.contains(&("GET", "/truth/{token}/{blockheight}")));
        assert!(!inference.contains(&("POST", "/calculate")));
    }

    #[test]
    fn test_value_range_validation() {
        assert!(ValueRange::new(0.0, 100.0).is_ok());
        assert!(ValueRange::new(-5.0, 5.0).is_ok());
        assert!(ValueRange::new(10.0, 10.0).is_err());
        assert!(ValueRange::new(10.0, 1.0).is_err());
        assert!(ValueRange::new(f64::NAN, 1.0).is_err());
        assert!(ValueRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_value_range_is_half_open() {
        let range = ValueRange::default();
        assert!(range.contains(0.0));
        assert!(range.contains(99.999));
        assert!(!range.contains(100.0));
        assert!(!range.contains(-0.1));
    }

    #[test]
    fn test_node_value_json_shape() {
        let value = NodeValue::new("Worker1", "12.5");
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({"worker": "Worker1", "value": "12.5"}));
    }
}
