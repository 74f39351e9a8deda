//! Gemini client implementation

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::base::HttpClientBase;
use crate::config::TransportConfig;
use crate::constants::FALLBACK_REPLY;
use crate::infrastructure::model::credentials::resolve_api_key;
use crate::infrastructure::model::envelope::{GenerateRequest, GenerateResponse};
use crate::infrastructure::model::traits::ReplySource;
use crate::infrastructure::model::types::TransportError;

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    base: HttpClientBase,
    api_path: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiClient {
    /// Build a client, reading the API key from the configured variable
    pub fn from_config(config: &TransportConfig) -> Self {
        let api_key = resolve_api_key(&config.api_key_env);
        Self {
            base: HttpClientBase::new(
                config.model.clone(),
                config.endpoint.clone(),
                config.request_timeout,
            ),
            api_path: config.api_path.clone(),
            api_key,
            api_key_env: config.api_key_env.clone(),
        }
    }

    /// Replace whatever key the environment provided
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.base.label
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_model_url(&self) -> String {
        self.base
            .build_url(&format!("{}/{}:generateContent", self.api_path, self.model()))
    }

    /// Send one utterance and return the reply, keeping the failure cause.
    pub async fn try_generate_reply(&self, user_text: &str) -> Result<String, TransportError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TransportError::missing_api_key(&self.api_key_env))?;

        let url = self.build_model_url();
        let payload = GenerateRequest::single(user_text);

        info!(
            model = self.model(),
            chars = user_text.chars().count(),
            "Sending request to Gemini"
        );

        let body = self
            .base
            .post_with_query_key(&url, api_key, &payload)
            .await?;
        debug!(bytes = body.len(), "Received response from Gemini");

        let response: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| TransportError::decode(self.model(), e))?;

        response
            .into_reply()
            .map(|reply| reply.text)
            .ok_or_else(|| TransportError::missing_text(self.model()))
    }
}

#[async_trait]
impl ReplySource for GeminiClient {
    async fn generate_reply(&self, user_text: &str) -> String {
        match self.try_generate_reply(user_text).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "Gemini request failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
