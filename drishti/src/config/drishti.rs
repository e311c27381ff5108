//! Main DrishtiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::GridRasterizer;
use crate::index::IndexBuilder;

use super::error::ConfigLoadError;
use super::output::{RecognizerSection, RenderSection};
use super::sections::{GridSection, IndexSection, SensorSection};

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "configs/drishti.yaml";

/// Full Drishti configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Sensor settings
    #[serde(default)]
    pub sensor: SensorSection,

    /// Index build settings
    #[serde(default)]
    pub index: IndexSection,

    /// Shop recognizer settings
    #[serde(default)]
    pub recognizer: RecognizerSection,

    /// SVG rendering settings
    #[serde(default)]
    pub render: RenderSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, or defaults if it is absent
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Check every section that has a runtime counterpart.
    pub fn validate(&self) -> Result<()> {
        self.grid.to_grid_config().validate()?;
        self.sensor.to_sensor_config().validate()?;
        self.index.to_index_config().validate()
    }

    /// Rasterizer for the configured grid
    pub fn rasterizer(&self) -> GridRasterizer {
        GridRasterizer::new(self.grid.to_grid_config())
    }

    /// Index builder for the configured sensor and sampling
    pub fn index_builder(&self) -> IndexBuilder {
        IndexBuilder::new(self.sensor.to_sensor_config(), self.index.to_index_config())
            .with_grid_config(self.grid.to_grid_config())
    }
}
