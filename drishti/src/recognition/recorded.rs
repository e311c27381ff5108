//! Offline recognizer replaying a stored model response.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

use super::ShopRecognizer;
use super::gemini::{parse_response, parse_shop_list};

/// Replays a recorded recognizer output for every image.
///
/// The recording is either a full `generateContent` response body or just
/// the model's structured text (a JSON array of `{"shop_name": ...}`).
/// Validation happens on every call, exactly as for a live response.
#[derive(Clone, Debug)]
pub struct RecordedRecognizer {
    recording: String,
}

impl RecordedRecognizer {
    /// Wrap a recording held in memory.
    pub fn new(recording: impl Into<String>) -> Self {
        Self {
            recording: recording.into(),
        }
    }

    /// Load a recording from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }
}

impl ShopRecognizer for RecordedRecognizer {
    fn detect(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>> {
        if mime_type.is_empty() {
            return Err(Error::Recognition("missing image MIME type".into()));
        }
        debug!(
            "[RecordedRecognizer] Replaying recording for {} byte {} image",
            image.len(),
            mime_type
        );

        if self.recording.trim_start().starts_with('[') {
            parse_shop_list(&self.recording)
        } else {
            parse_response(&self.recording)
        }
    }
}
