use crate::config::Config;
use crate::errors::AppError;
use crate::models::LicenseRecord;
use crate::prompts::{license_response_format, SYSTEM_PROMPT, USER_PROMPT};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Default completion endpoint.
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default extraction model. Any model with vision input and strict
/// structured outputs works here.
pub const DEFAULT_MODEL: &str = "gpt-4o-2024-08-06";

// License photos are usually taken with a phone in high resolution. The low
// detail mode condenses the image to 512x512, which loses the small dense
// text, so requests always ask for high.
const IMAGE_DETAIL: &str = "high";

// ============ Chat Completion API ============

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

/// Client for the multimodal completion API that performs the extraction.
///
/// Stateless apart from its connection pool; one instance can serve any
/// number of concurrent scans.
pub struct VisionExtractionService {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl VisionExtractionService {
    /// Creates a service against the default OpenAI endpoint.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::with_base_url(config, OPENAI_BASE_URL)
    }

    /// Creates a service against a non-default endpoint.
    ///
    /// Tests point this at a mock server.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration carrying the API key.
    /// * `base_url` - The base URL of the completion API.
    pub fn with_base_url(config: &Config, base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create completion client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: config.openai_api_key.clone(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Overrides the extraction model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Extract license fields from an image URI with a single completion request.
    ///
    /// Sends the system instruction, the user prompt, and the image reference
    /// in one exchange, constrained by the strict license schema. Exactly one
    /// request is issued per call; the API supports multiple images per
    /// message but this client does not.
    ///
    /// # Arguments
    ///
    /// * `image_uri` - An HTTP(S) URL or `data:` URI for the license image.
    ///
    /// # Returns
    ///
    /// * `Result<LicenseRecord, AppError>` - The parsed record.
    pub async fn extract_license(&self, image_uri: &str) -> Result<LicenseRecord, AppError> {
        let url = format!("{}/chat/completions", self.base_url);

        tracing::info!("Requesting license extraction from model {}", self.model);
        // Data URIs can run to megabytes, keep them out of the logs
        tracing::debug!(
            "Completion endpoint: {} (image uri: {} chars)",
            url,
            image_uri.len()
        );

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": USER_PROMPT },
                        {
                            "type": "image_url",
                            "image_url": { "url": image_uri, "detail": IMAGE_DETAIL }
                        }
                    ]
                }
            ],
            "response_format": license_response_format()
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Completion API returned error {}: {}", status, error_text);
            return Err(AppError::ExternalApiError(format!(
                "Completion API returned status {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse completion response: {}", e))
        })?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| {
                AppError::InvalidResponse("Completion contained no choices".to_string())
            })?;

        let record: LicenseRecord = serde_json::from_str(content).map_err(|e| {
            AppError::InvalidResponse(format!(
                "Completion content is not a valid license record: {}",
                e
            ))
        })?;

        tracing::info!("Successfully extracted license record");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let config = Config {
            openai_api_key: "test_key".to_string(),
        };
        let service = VisionExtractionService::new(&config);
        assert!(service.is_ok());
    }
}
