use axum::http::HeaderValue;
use nodesource_core::{Profile, ValueRange};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Host address
    pub host: String,

    /// Port number
    pub port: u16,

    /// Route set to expose
    pub profile: Profile,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Sampling configuration
    pub sampler: SamplerConfig,

    /// Log level
    pub log_level: String,

    /// Enable Swagger UI
    pub enable_swagger: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            profile: Profile::default(),
            cors: CorsConfig::default(),
            sampler: SamplerConfig::default(),
            log_level: "info".to_string(),
            enable_swagger: true,
        }
    }
}

impl ApiConfig {
    /// Convert to SocketAddr
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid address {}: {}", addr, e))
    }

    /// Tracing filter directives for the configured log level
    pub fn log_filter(&self) -> String {
        format!(
            "nodesource_api={level},nodesource_core={level},tower_http=debug",
            level = self.log_level
        )
    }

    /// Load from configuration file
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,

    /// Allow any origin
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            allow_any_origin: true,
        }
    }
}

impl CorsConfig {
    /// Build the CORS layer; unparsable origins are skipped
    pub fn layer(&self) -> CorsLayer {
        if self.allow_any_origin {
            return CorsLayer::permissive();
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
}

/// Placeholder value sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Inclusive lower bound
    pub low: f64,

    /// Exclusive upper bound
    pub high: f64,

    /// Fixed seed for reproducible values
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        let range = ValueRange::default();
        Self {
            low: range.low(),
            high: range.high(),
            seed: None,
        }
    }
}

impl SamplerConfig {
    pub fn range(&self) -> anyhow::Result<ValueRange> {
        ValueRange::new(self.low, self.high).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_all_interfaces() {
        let config = ApiConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8000");
        assert_eq!(config.profile, Profile::Source);
        assert!(config.enable_swagger);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"port": 9001, "profile": "inference", "sampler": {"seed": 5}}"#;
        let config: ApiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.profile, Profile::Inference);
        assert_eq!(config.sampler.seed, Some(5));
        assert_eq!(config.sampler.high, 100.0);
    }

    #[test]
    fn test_invalid_address() {
        let config = ApiConfig {
            host: "not a host".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_sampler_range_validation() {
        let sampler = SamplerConfig {
            low: 5.0,
            high: 5.0,
            seed: None,
        };
        assert!(sampler.range().is_err());
        assert!(SamplerConfig::default().range().is_ok());
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::path::Path::new("/nonexistent/nodesource.json");
        let result = ApiConfig::load_from_file(path);
        assert!(result.is_err());
    }
}
