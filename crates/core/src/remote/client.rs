use std::time::Duration;

use tracing::debug;

use crate::config::RemoteConfig;
use crate::remote::{AnalysisClient, RemoteAnalysis, RemoteError, prompt, response};

/// Chat-completion client for the remote analysis endpoint.
pub struct HttpAnalysisClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpAnalysisClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn current_model(&self) -> &str {
        &self.model
    }

    /// Build the request body for the completion endpoint
    fn build_request_body(&self, source: &str) -> serde_json::Value {
        serde_json::json!({
            "model": &self.model,
            "messages": [
                { "role": "system", "content": prompt::SYSTEM_PROMPT },
                { "role": "user", "content": prompt::user_prompt(source) }
            ],
            "temperature": 0.0
        })
    }
}

impl AnalysisClient for HttpAnalysisClient {
    fn analyze(&self, source: &str) -> Result<RemoteAnalysis, RemoteError> {
        if !self.is_available() {
            return Err(RemoteError::NotConfigured);
        }

        let url = format!("{}/chat/completions", self.base_url);
        debug!("requesting analysis from {url} ({})", self.model);

        let body = self.build_request_body(source);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteError::Api {
                status: response.status().as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("");

        response::parse_analysis(content)
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}
