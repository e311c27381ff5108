//! Recognizer and rendering sections.

use serde::{Deserialize, Serialize};

use crate::io::RenderConfig;
use crate::recognition::RecognizerConfig;

use super::defaults;

/// Recognizer section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecognizerSection {
    /// API key (empty when only recorded responses are used)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "defaults::model")]
    pub model: String,

    /// API base URL
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Instruction sent with each image
    #[serde(default = "defaults::prompt")]
    pub prompt: String,
}

impl Default for RecognizerSection {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: defaults::model(),
            endpoint: defaults::endpoint(),
            prompt: defaults::prompt(),
        }
    }
}

impl RecognizerSection {
    /// Convert to RecognizerConfig
    pub fn to_recognizer_config(&self) -> RecognizerConfig {
        RecognizerConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            prompt: self.prompt.clone(),
        }
    }
}

/// SVG rendering section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderSection {
    /// Pixels per map unit
    #[serde(default = "defaults::render_scale")]
    pub scale: f64,

    /// Margin (pixels)
    #[serde(default = "defaults::render_padding")]
    pub padding: f64,

    /// Candidate marker radius (pixels)
    #[serde(default = "defaults::point_radius")]
    pub point_radius: f64,

    /// Heat layer bin size (map units)
    #[serde(default = "defaults::heat_cell_size")]
    pub heat_cell_size: f64,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            scale: defaults::render_scale(),
            padding: defaults::render_padding(),
            point_radius: defaults::point_radius(),
            heat_cell_size: defaults::heat_cell_size(),
        }
    }
}

impl RenderSection {
    /// Convert to RenderConfig
    pub fn to_render_config(&self) -> RenderConfig {
        RenderConfig {
            scale: self.scale,
            padding: self.padding,
            point_radius: self.point_radius,
            heat_cell_size: self.heat_cell_size,
        }
    }
}
