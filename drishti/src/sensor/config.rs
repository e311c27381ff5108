//! Sensor configuration.

use serde::{Deserialize, Serialize};

use crate::core::CORRIDOR_KIND;
use crate::error::{Error, Result};

/// Default horizontal field of view (degrees).
pub const DEFAULT_FOV_DEGREES: f64 = 60.0;

/// Default sensing range in grid cells.
///
/// Two historical index builds disagreed (50 vs 100); 50 is the default and
/// the value is recorded with every persisted index.
pub const DEFAULT_MAX_RADIUS: u32 = 50;

/// Default number of rays per sweep.
pub const DEFAULT_ANGULAR_SAMPLES: u32 = 360;

/// Visibility sensor configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Field of view in degrees, swept counter-clockwise from the heading
    pub fov_degrees: f64,

    /// Number of radius steps per ray (grid cells); samples `0..max_radius`
    pub max_radius: u32,

    /// Rays per sweep, evenly spaced across `[0, fov)`
    pub angular_samples: u32,

    /// Region kinds that are rasterized but do not block or register hits
    pub see_through: Vec<String>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            max_radius: DEFAULT_MAX_RADIUS,
            angular_samples: DEFAULT_ANGULAR_SAMPLES,
            see_through: vec![CORRIDOR_KIND.to_string()],
        }
    }
}

impl SensorConfig {
    /// Configuration with a custom field of view and range.
    pub fn with_fov(fov_degrees: f64, max_radius: u32) -> Self {
        Self {
            fov_degrees,
            max_radius,
            ..Default::default()
        }
    }

    /// Check the sweep parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.fov_degrees.is_finite() || self.fov_degrees <= 0.0 || self.fov_degrees > 360.0 {
            return Err(Error::InvalidConfig(format!(
                "fov_degrees must be in (0, 360], got {}",
                self.fov_degrees
            )));
        }
        if self.max_radius == 0 {
            return Err(Error::InvalidConfig("max_radius must be at least 1".into()));
        }
        if self.angular_samples == 0 {
            return Err(Error::InvalidConfig(
                "angular_samples must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Is this region kind see-through?
    pub fn is_see_through(&self, kind: &str) -> bool {
        self.see_through.iter().any(|k| k == kind)
    }

    /// Angular offset of ray `k` from the heading, in degrees.
    #[inline]
    pub fn ray_offset(&self, k: u32) -> f64 {
        k as f64 * self.fov_degrees / self.angular_samples as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SensorConfig::default();
        assert_eq!(config.max_radius, 50);
        assert_eq!(config.angular_samples, 360);
        assert!(config.is_see_through("corridor"));
        assert!(!config.is_see_through("shop"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ray_offsets_cover_half_open_fov() {
        let config = SensorConfig {
            angular_samples: 4,
            ..SensorConfig::with_fov(30.0, 10)
        };
        let offsets: Vec<f64> = (0..4).map(|k| config.ray_offset(k)).collect();
        assert_eq!(offsets, vec![0.0, 7.5, 15.0, 22.5]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SensorConfig::with_fov(0.0, 10).validate().is_err());
        assert!(SensorConfig::with_fov(400.0, 10).validate().is_err());
        assert!(SensorConfig::with_fov(30.0, 0).validate().is_err());
        let no_rays = SensorConfig {
            angular_samples: 0,
            ..Default::default()
        };
        assert!(no_rays.validate().is_err());
    }
}
