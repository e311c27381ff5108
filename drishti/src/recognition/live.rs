//! Recognizer backed by the hosted `generateContent` endpoint.

use std::time::Duration;

use log::{debug, info};

use crate::error::{Error, Result};

use super::gemini::{build_request, parse_response};
use super::{RecognizerConfig, ShopRecognizer};

/// Request timeout for one recognition call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Sends each image to the configured vision model over HTTPS.
///
/// The API key travels in the `x-goog-api-key` header. Transport failures,
/// non-success statuses and malformed bodies all surface as
/// [`Error::Recognition`].
#[derive(Clone, Debug)]
pub struct GeminiRecognizer {
    config: RecognizerConfig,
    agent: ureq::Agent,
}

impl GeminiRecognizer {
    /// Create a recognizer. Fails when no API key is configured.
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "recognizer.api_key is required for live recognition".into(),
            ));
        }
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Ok(Self { config, agent })
    }

    /// Configuration in use.
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }
}

impl ShopRecognizer for GeminiRecognizer {
    fn detect(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>> {
        if mime_type.is_empty() {
            return Err(Error::Recognition("missing image MIME type".into()));
        }
        let body = serde_json::to_string(&build_request(&self.config, image, mime_type))?;
        let url = self.config.request_url();
        info!(
            "[GeminiRecognizer] Sending {} byte {} image to {}",
            image.len(),
            mime_type,
            self.config.model
        );

        let response = self
            .agent
            .post(&url)
            .set("x-goog-api-key", &self.config.api_key)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => Error::Recognition(format!(
                    "HTTP {} from {}: {}",
                    code,
                    url,
                    response.into_string().unwrap_or_default()
                )),
                ureq::Error::Transport(t) => Error::Recognition(format!("request failed: {}", t)),
            })?;

        let text = response
            .into_string()
            .map_err(|e| Error::Recognition(format!("unreadable response body: {}", e)))?;
        debug!("[GeminiRecognizer] Response of {} bytes", text.len());
        parse_response(&text)
    }
}
