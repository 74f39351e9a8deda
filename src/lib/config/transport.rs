//! # Transport Configuration
//!
//! Where the `generateContent` request goes and how it authenticates.
//! The API key itself never appears in the file: `api_key_env` names the
//! environment variable that holds it.
//!
//! ```toml
//! [transport]
//! endpoint = "https://generativelanguage.googleapis.com"
//! api_path = "v1beta/models"
//! model = "gemini-1.5-flash-latest"
//! api_key_env = "GEMINI_API_KEY"
//! # request_timeout_secs = 30
//! ```

use crate::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL,
};
use serde::Deserialize;
use std::time::Duration;

use super::error::ConfigError;

/// Resolved transport settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Scheme and host of the API, e.g. `https://generativelanguage.googleapis.com`
    pub endpoint: String,
    /// Path segment between the endpoint and the model name
    pub api_path: String,
    /// Model name used in the request URL
    pub model: String,
    /// Environment variable that carries the API key
    pub api_key_env: String,
    /// Upper bound for one request; `None` waits forever
    pub request_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_path: DEFAULT_GEMINI_API_PATH.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            request_timeout: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawTransportConfig {
    pub(super) endpoint: Option<String>,
    pub(super) api_path: Option<String>,
    pub(super) model: Option<String>,
    pub(super) api_key_env: Option<String>,
    pub(super) request_timeout_secs: Option<u64>,
}

impl TryFrom<RawTransportConfig> for TransportConfig {
    type Error = ConfigError;

    fn try_from(raw: RawTransportConfig) -> Result<Self, Self::Error> {
        let defaults = TransportConfig::default();
        let endpoint = non_empty("transport.endpoint", raw.endpoint, defaults.endpoint)?;
        let api_path = non_empty("transport.api_path", raw.api_path, defaults.api_path)?;
        let model = non_empty("transport.model", raw.model, defaults.model)?;
        let api_key_env = non_empty("transport.api_key_env", raw.api_key_env, defaults.api_key_env)?;

        let request_timeout = match raw.request_timeout_secs {
            Some(0) => {
                return Err(ConfigError::invalid_value(
                    "transport.request_timeout_secs",
                    "must be greater than zero",
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            endpoint,
            api_path: api_path.trim_matches('/').to_string(),
            model,
            api_key_env,
            request_timeout,
        })
    }
}

fn non_empty(
    field: &'static str,
    value: Option<String>,
    default: String,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::empty_field(field)),
        Some(v) => Ok(v.trim().to_string()),
        None => Ok(default),
    }
}
