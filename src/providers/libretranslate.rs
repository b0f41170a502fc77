use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Client for a LibreTranslate-compatible translation endpoint
///
/// The client deliberately sets no request timeout: slow responses are
/// classified by the retry wrapper from their measured duration instead of
/// being aborted in flight.
#[derive(Debug)]
pub struct LibreTranslate {
    /// Full URL of the translate endpoint
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
    /// Optional API key, sent with each request when non-empty
    api_key: String,
}

/// Request body for the translate endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest {
    /// Text to translate
    q: String,
    /// Source language code
    source: String,
    /// Target language code
    target: String,
    /// Input format, always plain text for spreadsheet cells
    format: String,
    /// API key, omitted when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

/// Response body from the translate endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// Translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslate {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    fn build_request(&self, text: &str, source_language: &str, target_language: &str) -> TranslateRequest {
        TranslateRequest {
            q: text.to_string(),
            source: source_language.to_string(),
            target: target_language.to_string(),
            format: "text".to_string(),
            api_key: if self.api_key.is_empty() {
                None
            } else {
                Some(self.api_key.clone())
            },
        }
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, ProviderError> {
        let request = self.build_request(text, source_language, target_language);

        let response = self.client.post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response.json().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(body.translated_text)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // A minimal request doubles as the health check; LibreTranslate has
        // no dedicated ping route on every deployment.
        self.translate("ping", "en", "en").await.map(|_| ())
    }
}
