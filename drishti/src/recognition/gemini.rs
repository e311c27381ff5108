//! `generateContent` request/response codec.
//!
//! The request carries the instruction text and the image as inline base64
//! data, and asks for a JSON response constrained to an array of
//! `{"shop_name": string}` objects. The response is validated strictly: the
//! model text must be exactly that shape, otherwise the call fails.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::core::normalize_shop_name;
use crate::error::{Error, Result};

use super::RecognizerConfig;

/// Request body for `models/{model}:generateContent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns (a single user turn)
    pub contents: Vec<Content>,
    /// Output constraints
    pub generation_config: GenerationConfig,
}

/// One conversation turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Speaker role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Text and media parts
    pub parts: Vec<Part>,
}

/// A text or inline-media part.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text
    Text {
        /// Text content
        text: String,
    },
    /// Inline binary data
    Inline {
        /// Media payload
        inline_data: InlineData,
    },
}

/// Base64 media payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    /// Media type, e.g. `image/jpeg`
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Structured-output settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json`
    pub response_mime_type: String,
    /// Output schema
    pub response_schema: serde_json::Value,
}

/// Response schema: an array of `{shop_name: string}` objects.
pub fn shop_list_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "shop_name": { "type": "STRING" }
            },
            "required": ["shop_name"]
        }
    })
}

/// Build the request body for one image.
pub fn build_request(config: &RecognizerConfig, image: &[u8], mime_type: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::Text {
                    text: config.prompt.clone(),
                },
                Part::Inline {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: BASE64.encode(image),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: shop_list_schema(),
        },
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShopSeen {
    shop_name: String,
}

/// Parse a full `generateContent` response body into shop names.
///
/// Uses the text of the first candidate.
pub fn parse_response(body: &str) -> Result<Vec<String>> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| Error::Recognition(format!("malformed response: {}", e)))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| Error::Recognition("response has no candidates".into()))?
        .parts
        .into_iter()
        .filter_map(|p| match p {
            Part::Text { text } => Some(text),
            Part::Inline { .. } => None,
        })
        .collect();

    if text.trim().is_empty() {
        return Err(Error::Recognition("response candidate has no text".into()));
    }
    parse_shop_list(&text)
}

/// Parse the model's structured text (`[{"shop_name": ...}, ...]`).
///
/// Names are normalized, empty names dropped, and the result sorted and
/// deduplicated.
pub fn parse_shop_list(text: &str) -> Result<Vec<String>> {
    let seen: Vec<ShopSeen> = serde_json::from_str(text)
        .map_err(|e| Error::Recognition(format!("unexpected shop list: {}", e)))?;

    let mut names: Vec<String> = seen
        .into_iter()
        .map(|s| normalize_shop_name(&s.shop_name))
        .filter(|n| !n.is_empty())
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}
