//! Offline index construction.
//!
//! Candidate origins are taken from corridor outlines (vertices, plus optional
//! evenly spaced edge points), truncated to integer map coordinates and
//! deduplicated in first-seen order. Every origin is swept at every sampled
//! heading and each pose is appended to the entry of the signature it sees.
//!
//! Cost is origins × headings × angular samples × max radius, so this is a
//! batch job. With `parallel` enabled the per-origin sweeps run on the rayon
//! pool and are merged back in origin order, which yields the same index as
//! the sequential build.

use std::collections::HashSet;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::core::{Annotation, PoseSample, WorldPoint};
use crate::error::Result;
use crate::grid::{GridBounds, GridConfig, GridRasterizer, LabelGrid};
use crate::sensor::{SensorConfig, VisibilitySensor};

use super::config::IndexConfig;
use super::signature_index::{IndexMetadata, SignatureIndex};

/// Build an index from corridor annotations over a rasterized grid.
///
/// Uses the default sensor settings apart from `fov_degrees` and
/// `max_radius`, vertex-only origins and retained empty signatures.
pub fn build_index(
    corridor_annotations: &[Annotation],
    grid: &LabelGrid,
    bounds: &GridBounds,
    heading_step_degrees: f64,
    fov_degrees: f64,
    max_radius: u32,
) -> Result<SignatureIndex> {
    IndexBuilder::new(
        SensorConfig::with_fov(fov_degrees, max_radius),
        IndexConfig::with_heading_step(heading_step_degrees),
    )
    .build(corridor_annotations, grid, bounds)
}

/// Candidate origins from the given outlines, as integer map coordinates.
///
/// Each polygon contributes its vertices in order; with `edge_subdivisions`
/// `n > 0`, `n` evenly spaced points follow each vertex along its outgoing
/// edge. Coordinates are floored and only the first occurrence is kept.
pub fn collect_origins(annotations: &[Annotation], edge_subdivisions: u32) -> Vec<(i32, i32)> {
    let mut seen = HashSet::new();
    let mut origins = Vec::new();

    let mut push = |p: WorldPoint| {
        if !p.is_finite() {
            return;
        }
        let key = (p.x.floor() as i32, p.y.floor() as i32);
        if seen.insert(key) {
            origins.push(key);
        }
    };

    for annotation in annotations {
        let polygon = &annotation.polygon;
        if edge_subdivisions == 0 {
            polygon.vertices().iter().copied().for_each(&mut push);
            continue;
        }
        let parts = edge_subdivisions as f64 + 1.0;
        for (a, b) in polygon.edges() {
            push(a);
            for i in 1..=edge_subdivisions {
                push(a.lerp(&b, i as f64 / parts));
            }
        }
    }

    origins
}

/// Index builder carrying the sensor and sampling configuration.
#[derive(Clone, Debug, Default)]
pub struct IndexBuilder {
    grid: GridConfig,
    sensor: SensorConfig,
    index: IndexConfig,
}

impl IndexBuilder {
    /// Create a builder.
    pub fn new(sensor: SensorConfig, index: IndexConfig) -> Self {
        Self {
            grid: GridConfig::default(),
            sensor,
            index,
        }
    }

    /// Grid configuration used by [`IndexBuilder::build_from_map`].
    pub fn with_grid_config(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Sensor configuration.
    pub fn sensor_config(&self) -> &SensorConfig {
        &self.sensor
    }

    /// Sampling configuration.
    pub fn index_config(&self) -> &IndexConfig {
        &self.index
    }

    /// Rasterize a full map and index it from its corridor annotations.
    pub fn build_from_map(
        &self,
        annotations: &[Annotation],
    ) -> Result<(SignatureIndex, LabelGrid, GridBounds)> {
        let (grid, bounds) = GridRasterizer::new(self.grid.clone()).rasterize(annotations)?;
        let corridors: Vec<Annotation> = annotations
            .iter()
            .filter(|a| a.is_corridor())
            .cloned()
            .collect();
        let index = self.build(&corridors, &grid, &bounds)?;
        Ok((index, grid, bounds))
    }

    /// Sweep every corridor origin at every heading.
    pub fn build(
        &self,
        corridor_annotations: &[Annotation],
        grid: &LabelGrid,
        bounds: &GridBounds,
    ) -> Result<SignatureIndex> {
        self.index.validate()?;
        let sensor = VisibilitySensor::new(grid, bounds, self.sensor.clone())?;

        let grid_config = GridConfig {
            resolution: bounds.resolution,
            padding: self.grid.padding,
        };
        let mut index = SignatureIndex::new(IndexMetadata::new(
            grid_config,
            self.sensor.clone(),
            &self.index,
        ));

        if corridor_annotations.is_empty() {
            warn!("[IndexBuilder] No corridor annotations, index is empty");
            return Ok(index);
        }

        let origins = collect_origins(corridor_annotations, self.index.edge_subdivisions);
        let headings = self.index.headings();
        index.metadata_mut().origin_count = origins.len();

        info!(
            "[IndexBuilder] Sampling {} origins x {} headings (fov={}, radius={}, parallel={})",
            origins.len(),
            headings.len(),
            self.sensor.fov_degrees,
            self.sensor.max_radius,
            self.index.parallel
        );

        let sweep = |&(x, y): &(i32, i32)| self.sweep_origin(&sensor, x, y, &headings);
        let partials: Vec<(SignatureIndex, usize)> = if self.index.parallel {
            origins.par_iter().map(sweep).collect()
        } else {
            origins.iter().map(sweep).collect()
        };

        // Merging in origin order keeps pose lists identical to a sequential build
        let mut dropped = 0usize;
        for (partial, partial_dropped) in partials {
            index.merge(partial);
            dropped += partial_dropped;
        }

        if dropped > 0 {
            debug!("[IndexBuilder] Dropped {} poses with nothing in view", dropped);
        }
        info!(
            "[IndexBuilder] Built index: {} signatures, {} poses",
            index.len(),
            index.pose_count()
        );

        Ok(index)
    }

    /// Index of one origin's poses, and how many empty poses were dropped.
    fn sweep_origin(
        &self,
        sensor: &VisibilitySensor<'_>,
        x: i32,
        y: i32,
        headings: &[f32],
    ) -> (SignatureIndex, usize) {
        let origin = WorldPoint::new(x as f64, y as f64);
        let mut partial = SignatureIndex::default();
        let mut dropped = 0usize;
        for &heading in headings {
            let signature = sensor.signature(origin, heading as f64);
            if signature.is_empty() && !self.index.retain_empty {
                dropped += 1;
                continue;
            }
            partial.insert(signature, PoseSample::new(x, y, heading));
        }
        (partial, dropped)
    }
}
