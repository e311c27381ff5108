//! Default value functions for serde deserialization.

use crate::core::CORRIDOR_KIND;
use crate::grid;
use crate::index;
use crate::io;
use crate::recognition;
use crate::sensor;

pub fn resolution() -> f64 {
    grid::GridConfig::default().resolution
}

pub fn padding() -> f64 {
    grid::GridConfig::default().padding
}

pub fn fov_degrees() -> f64 {
    sensor::DEFAULT_FOV_DEGREES
}

pub fn max_radius() -> u32 {
    sensor::DEFAULT_MAX_RADIUS
}

pub fn angular_samples() -> u32 {
    sensor::DEFAULT_ANGULAR_SAMPLES
}

pub fn see_through() -> Vec<String> {
    vec![CORRIDOR_KIND.to_string()]
}

pub fn heading_step_degrees() -> f64 {
    index::DEFAULT_HEADING_STEP
}

pub fn enabled() -> bool {
    true
}

pub fn model() -> String {
    recognition::DEFAULT_MODEL.to_string()
}

pub fn endpoint() -> String {
    recognition::DEFAULT_ENDPOINT.to_string()
}

pub fn prompt() -> String {
    recognition::DEFAULT_PROMPT.to_string()
}

pub fn render_scale() -> f64 {
    io::RenderConfig::default().scale
}

pub fn render_padding() -> f64 {
    io::RenderConfig::default().padding
}

pub fn point_radius() -> f64 {
    io::RenderConfig::default().point_radius
}

pub fn heat_cell_size() -> f64 {
    io::RenderConfig::default().heat_cell_size
}
