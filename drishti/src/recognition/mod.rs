//! Shop-name recognition boundary.
//!
//! A recognizer turns one photo into the set of shop names visible in it.
//! [`GeminiRecognizer`] posts the `generateContent` request built by
//! [`gemini`] to the hosted vision model. [`RecordedRecognizer`] replays a
//! stored model response so the rest of the pipeline can run offline.
//!
//! Returned names are always normalized and sorted, so they can be fed
//! straight into [`crate::estimate::PoseEstimator`].

pub mod gemini;
mod live;
mod recorded;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use live::GeminiRecognizer;
pub use recorded::RecordedRecognizer;

/// Default vision model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default instruction sent with every image.
pub const DEFAULT_PROMPT: &str =
    "List the names of the shops in the image as a JSON array of strings.";

/// Credentials and model selection for a recognizer call.
///
/// Passed explicitly; nothing is read from the process environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// API key sent with each request
    pub api_key: String,
    /// Model name
    pub model: String,
    /// API base URL
    pub endpoint: String,
    /// Instruction text
    pub prompt: String,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl RecognizerConfig {
    /// Configuration with an API key and default model settings.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// `generateContent` URL for the configured model.
    pub fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Detects shop names in an image.
pub trait ShopRecognizer {
    /// Normalized, sorted shop names visible in `image`.
    ///
    /// Any failure means "no observation" and is reported as
    /// [`crate::Error::Recognition`].
    fn detect(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>>;
}

/// Guess an image MIME type from a file extension.
///
/// Unknown extensions fall back to `application/octet-stream`.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}
