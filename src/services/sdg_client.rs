use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::errors::{SdgError, SdgResult};
use crate::structs::api::classify_request::ClassifyRequest;
use crate::structs::api::classify_response::ClassifyResponse;
use crate::structs::config::classifier_config::ClassifierConfig;
use crate::structs::prediction::Prediction;
use crate::traits::sdg_classifier::SdgClassifier;

const OPERATION: &str = "SDG classification";

/// HTTP client for the remote SDG classification service.
#[derive(Clone)]
pub struct SdgApiClient {
    endpoint: String,
    client: Client,
}

impl SdgApiClient {
    pub fn new(endpoint: &str, timeout: Duration) -> SdgResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SdgError::system_error("build HTTP client", &e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn from_config(config: &ClassifierConfig) -> SdgResult<Self> {
        Self::new(&config.endpoint, Duration::from_secs(config.timeout_secs))
    }

    /// Decodes a response body; a missing or null `predictions` yields none.
    pub fn parse_body(&self, body: &str) -> SdgResult<Vec<Prediction>> {
        let response: ClassifyResponse = serde_json::from_str(body).map_err(|e| {
            SdgError::network_error(OPERATION, Some(&self.endpoint), None, &format!("malformed response body: {e}"))
        })?;
        Ok(response.into_predictions())
    }
}

#[async_trait]
impl SdgClassifier for SdgApiClient {
    async fn classify(&self, text: &str) -> SdgResult<Vec<Prediction>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ClassifyRequest { text })
            .send()
            .await
            .map_err(|e| SdgError::network_error(OPERATION, Some(&self.endpoint), None, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SdgError::network_error(
                OPERATION,
                Some(&self.endpoint),
                Some(status.as_u16()),
                &format!("HTTP {status}: {error_text}"),
            ));
        }

        let body = response.text().await?;
        let predictions = self.parse_body(&body)?;
        log::debug!("Received {} predictions from {}", predictions.len(), self.endpoint);
        Ok(predictions)
    }
}
