//! Transport error type
//!
//! Every variant ends up as the same fallback sentence on screen; the variants
//! only exist so the cause can be logged.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("no API key available in environment variable '{env_var}'")]
    MissingApiKey { env_var: String },
    #[error("network error calling model '{model}': {source}")]
    Network {
        model: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("model '{model}' answered with HTTP {status}")]
    Status { model: String, status: StatusCode },
    #[error("model '{model}' returned a body that is not a valid response envelope: {source}")]
    Decode {
        model: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("model '{model}' returned no candidate text")]
    MissingText { model: String },
}

impl TransportError {
    pub fn missing_api_key(env_var: impl Into<String>) -> Self {
        Self::MissingApiKey {
            env_var: env_var.into(),
        }
    }

    pub fn network(model: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            model: model.into(),
            source,
        }
    }

    pub fn status(model: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            model: model.into(),
            status,
        }
    }

    pub fn decode(model: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            model: model.into(),
            source,
        }
    }

    pub fn missing_text(model: impl Into<String>) -> Self {
        Self::MissingText {
            model: model.into(),
        }
    }

    /// Short machine-friendly label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::MissingApiKey { .. } => "missing_api_key",
            TransportError::Network { source, .. } if source.is_timeout() => "timeout",
            TransportError::Network { .. } => "network",
            TransportError::Status { .. } => "status",
            TransportError::Decode { .. } => "decode",
            TransportError::MissingText { .. } => "missing_text",
        }
    }
}
