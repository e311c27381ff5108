//! Visibility sampling by ray fan.

use std::collections::BTreeSet;

use crate::core::{GridCoord, Signature, WorldPoint};
use crate::error::Result;
use crate::grid::raycaster::RadialRay;
use crate::grid::{GridBounds, LabelGrid, LabelId};

use super::config::SensorConfig;

/// Sample the labels visible from one pose with the default see-through kinds.
///
/// Returns the distinct `kind:name` labels struck by the sweep.
pub fn sample_visible_labels(
    grid: &LabelGrid,
    bounds: &GridBounds,
    origin: WorldPoint,
    heading_degrees: f64,
    fov_degrees: f64,
    max_radius: u32,
) -> Result<BTreeSet<String>> {
    let sensor = VisibilitySensor::new(grid, bounds, SensorConfig::with_fov(fov_degrees, max_radius))?;
    Ok(sensor.sample(origin, heading_degrees))
}

/// Static single-shot visual sensor over a label grid.
///
/// Every call is independent and pure given its inputs; the sensor holds
/// only shared references and precomputed lookup tables, so one instance can
/// be used from many threads at once.
#[derive(Clone, Debug)]
pub struct VisibilitySensor<'a> {
    grid: &'a LabelGrid,
    bounds: &'a GridBounds,
    config: SensorConfig,
    /// Per label id: does the cell stop a ray and register a hit?
    opaque: Vec<bool>,
    /// Per label id: `kind:name` text
    label_texts: Vec<String>,
}

impl<'a> VisibilitySensor<'a> {
    /// Create a sensor over a rasterized grid.
    pub fn new(grid: &'a LabelGrid, bounds: &'a GridBounds, config: SensorConfig) -> Result<Self> {
        config.validate()?;
        let opaque = grid
            .labels()
            .iter()
            .map(|label| match label.kind() {
                None => false,
                Some(kind) => !config.is_see_through(kind),
            })
            .collect();
        let label_texts = grid.labels().iter().map(|l| l.to_string()).collect();

        Ok(Self {
            grid,
            bounds,
            config,
            opaque,
            label_texts,
        })
    }

    /// Sensor configuration.
    #[inline]
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Grid bounds used for coordinate conversion.
    #[inline]
    pub fn bounds(&self) -> &GridBounds {
        self.bounds
    }

    /// Does this label id stop rays?
    #[inline]
    pub fn is_opaque(&self, id: LabelId) -> bool {
        self.opaque[id as usize]
    }

    /// First opaque label along one ray, if any within range and bounds.
    fn first_hit_along(&self, ray: RadialRay) -> Option<LabelId> {
        ray.filter_map(|coord| self.grid.get_id(coord))
            .find(|&id| self.is_opaque(id))
    }

    /// Can a ray from `origin` reach any grid cell within range?
    fn within_reach(&self, origin: GridCoord) -> bool {
        let reach = i64::from(self.config.max_radius);
        let (x, y) = (i64::from(origin.x), i64::from(origin.y));
        x + reach >= 0
            && y + reach >= 0
            && x - reach < self.grid.width() as i64
            && y - reach < self.grid.height() as i64
    }

    /// Label ids visible from `origin` facing `heading_degrees`.
    ///
    /// Non-finite origins and origins out of range of the whole grid see
    /// nothing.
    pub fn sample_ids(&self, origin: WorldPoint, heading_degrees: f64) -> BTreeSet<LabelId> {
        if !origin.is_finite() || !heading_degrees.is_finite() {
            return BTreeSet::new();
        }
        let origin = self.bounds.world_to_grid(origin);
        if !self.within_reach(origin) {
            return BTreeSet::new();
        }
        let max_radius = self.config.max_radius;

        (0..self.config.angular_samples)
            .filter_map(|k| {
                let theta = (heading_degrees + self.config.ray_offset(k)).to_radians();
                let ray = RadialRay::from_direction(origin, theta.cos(), theta.sin(), max_radius);
                self.first_hit_along(ray)
            })
            .collect()
    }

    /// Distinct `kind:name` labels visible from a pose.
    pub fn sample(&self, origin: WorldPoint, heading_degrees: f64) -> BTreeSet<String> {
        self.sample_ids(origin, heading_degrees)
            .into_iter()
            .map(|id| self.label_texts[id as usize].clone())
            .collect()
    }

    /// Canonical visibility signature of a pose.
    pub fn signature(&self, origin: WorldPoint, heading_degrees: f64) -> Signature {
        self.signature_of(&self.sample_ids(origin, heading_degrees))
    }

    /// Canonical signature of a set of label ids.
    pub fn signature_of(&self, ids: &BTreeSet<LabelId>) -> Signature {
        Signature::from_labels(ids.iter().map(|&id| self.label_texts[id as usize].as_str()))
    }
}
