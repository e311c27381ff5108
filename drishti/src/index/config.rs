//! Index build configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default spacing between sampled headings (degrees).
pub const DEFAULT_HEADING_STEP: f64 = 15.0;

/// Smallest accepted heading step (360 000 headings per origin).
pub const MIN_HEADING_STEP: f64 = 0.001;

/// Index build configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Spacing between sampled headings; headings are `0, step, ... < 360`
    pub heading_step_degrees: f64,

    /// Keep poses that see nothing under the empty signature
    pub retain_empty: bool,

    /// Sample origins on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Extra origins inserted along each corridor edge (0 = vertices only)
    #[serde(default)]
    pub edge_subdivisions: u32,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            heading_step_degrees: DEFAULT_HEADING_STEP,
            retain_empty: true,
            parallel: false,
            edge_subdivisions: 0,
        }
    }
}

impl IndexConfig {
    /// Configuration with a custom heading step.
    pub fn with_heading_step(heading_step_degrees: f64) -> Self {
        Self {
            heading_step_degrees,
            ..Default::default()
        }
    }

    /// Check the heading step.
    pub fn validate(&self) -> Result<()> {
        let step = self.heading_step_degrees;
        if !step.is_finite() || step < MIN_HEADING_STEP || step >= 360.0 {
            return Err(Error::InvalidConfig(format!(
                "heading_step_degrees must be in [{}, 360), got {}",
                MIN_HEADING_STEP, step
            )));
        }
        Ok(())
    }

    /// Sampled headings in degrees, as stored in pose samples.
    pub fn headings(&self) -> Vec<f32> {
        let step = self.heading_step_degrees;
        (0..)
            .map(|k| k as f64 * step)
            .take_while(|&h| h < 360.0)
            .map(|h| h as f32)
            .collect()
    }
}
