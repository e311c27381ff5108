//! Localization configuration sections (grid, sensor, index).

use serde::{Deserialize, Serialize};

use crate::grid::GridConfig;
use crate::index::IndexConfig;
use crate::sensor::SensorConfig;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Map units per cell
    #[serde(default = "defaults::resolution")]
    pub resolution: f64,

    /// Margin around the annotation bounds (map units)
    #[serde(default = "defaults::padding")]
    pub padding: f64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            padding: defaults::padding(),
        }
    }
}

impl GridSection {
    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            resolution: self.resolution,
            padding: self.padding,
        }
    }
}

/// Sensor configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorSection {
    /// Field of view (degrees)
    #[serde(default = "defaults::fov_degrees")]
    pub fov_degrees: f64,

    /// Range in grid cells
    #[serde(default = "defaults::max_radius")]
    pub max_radius: u32,

    /// Rays per sweep
    #[serde(default = "defaults::angular_samples")]
    pub angular_samples: u32,

    /// Region kinds rays pass through
    #[serde(default = "defaults::see_through")]
    pub see_through: Vec<String>,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            fov_degrees: defaults::fov_degrees(),
            max_radius: defaults::max_radius(),
            angular_samples: defaults::angular_samples(),
            see_through: defaults::see_through(),
        }
    }
}

impl SensorSection {
    /// Convert to SensorConfig
    pub fn to_sensor_config(&self) -> SensorConfig {
        SensorConfig {
            fov_degrees: self.fov_degrees,
            max_radius: self.max_radius,
            angular_samples: self.angular_samples,
            see_through: self.see_through.clone(),
        }
    }
}

/// Index build section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexSection {
    /// Heading spacing (degrees)
    #[serde(default = "defaults::heading_step_degrees")]
    pub heading_step_degrees: f64,

    /// Keep "nothing in view" poses
    #[serde(default = "defaults::enabled")]
    pub retain_empty: bool,

    /// Build on the rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Extra origins per corridor edge
    #[serde(default)]
    pub edge_subdivisions: u32,
}

impl Default for IndexSection {
    fn default() -> Self {
        Self {
            heading_step_degrees: defaults::heading_step_degrees(),
            retain_empty: true,
            parallel: false,
            edge_subdivisions: 0,
        }
    }
}

impl IndexSection {
    /// Convert to IndexConfig
    pub fn to_index_config(&self) -> IndexConfig {
        IndexConfig {
            heading_step_degrees: self.heading_step_degrees,
            retain_empty: self.retain_empty,
            parallel: self.parallel,
            edge_subdivisions: self.edge_subdivisions,
        }
    }
}
