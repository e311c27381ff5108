//! Configuration types for the label grid.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default margin added around the map bounds (map units).
pub const DEFAULT_PADDING: f64 = 10.0;

/// Default grid resolution (map units per cell).
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// Grid configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Map units per cell
    pub resolution: f64,

    /// Margin added on every side of the polygon bounds (map units)
    pub padding: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            padding: DEFAULT_PADDING,
        }
    }
}

impl GridConfig {
    /// Configuration with a custom resolution and the default padding.
    pub fn with_resolution(resolution: f64) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Check that resolution and padding are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "grid resolution must be positive, got {}",
                self.resolution
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "grid padding must be non-negative, got {}",
                self.padding
            )));
        }
        Ok(())
    }
}
