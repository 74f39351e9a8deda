//! Base HTTP client with shared logic

use crate::infrastructure::model::types::TransportError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub label: String,
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(label: String, endpoint: String, timeout: Option<Duration>) -> Self {
        Self {
            label,
            endpoint,
            timeout,
            http: Client::new(),
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON with query param auth and return the raw response body.
    ///
    /// Non-2xx statuses are errors; decoding is left to the caller so a
    /// non-JSON body can be told apart from a network failure.
    pub async fn post_with_query_key<Req>(
        &self,
        url: &str,
        api_key: &str,
        body: &Req,
    ) -> Result<String, TransportError>
    where
        Req: Serialize,
    {
        let mut request = self
            .http
            .post(url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::network(&self.label, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::status(&self.label, status));
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::network(&self.label, e))
    }
}
