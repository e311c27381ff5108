//! Polygon rasterization into a label grid.
//!
//! Each polygon is filled with a scanline pass: for every grid row the edge
//! crossings at the row's center line are computed with
//! [`Polygon::edge_crossing`], sorted, and the cells whose centers fall between
//! crossing pairs are overwritten. This is exactly the even-odd rule of
//! [`Polygon::contains`] evaluated at every cell center:
//!
//! ```text
//!   row center ─────●══════════●────────●═════●──────
//!                   c0         c1       c2    c3
//!   filled:          [c0, c1)            [c2, c3)
//! ```
//!
//! Polygons are processed in input order and later ones overwrite earlier
//! ones, so overlap resolves to the last annotation.

use log::{debug, info, warn};

use crate::core::{Annotation, Polygon, RegionLabel, WorldPoint};
use crate::error::{Error, Result};

use super::bounds::GridBounds;
use super::config::GridConfig;
use super::storage::{LabelGrid, LabelId};

/// Largest grid the rasterizer will allocate (1 GiB of label ids).
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Rasterize annotations with the given resolution and default padding.
///
/// Fails with [`Error::EmptyMap`] when there is no polygon with at least
/// three vertices.
pub fn build_grid(annotations: &[Annotation], resolution: f64) -> Result<(LabelGrid, GridBounds)> {
    GridRasterizer::new(GridConfig::with_resolution(resolution)).rasterize(annotations)
}

/// Converts labeled polygons into a [`LabelGrid`].
#[derive(Clone, Debug, Default)]
pub struct GridRasterizer {
    config: GridConfig,
}

impl GridRasterizer {
    /// Create a rasterizer.
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Grid configuration in use.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Compute padded bounds over every finite vertex of every annotation.
    ///
    /// Degenerate polygons still contribute their vertices, matching how the
    /// map extent is measured by the annotation tool.
    pub fn compute_bounds(&self, annotations: &[Annotation]) -> Option<GridBounds> {
        let mut extent: Option<(WorldPoint, WorldPoint)> = None;
        for p in annotations
            .iter()
            .flat_map(|a| a.polygon.vertices())
            .filter(|p| p.is_finite())
        {
            extent = Some(match extent {
                None => (*p, *p),
                Some((min, max)) => (
                    WorldPoint::new(min.x.min(p.x), min.y.min(p.y)),
                    WorldPoint::new(max.x.max(p.x), max.y.max(p.y)),
                ),
            });
        }
        extent.map(|(min, max)| {
            GridBounds::from_extent(min, max, self.config.padding, self.config.resolution)
        })
    }

    /// Rasterize annotations into a label grid.
    pub fn rasterize(&self, annotations: &[Annotation]) -> Result<(LabelGrid, GridBounds)> {
        self.config.validate()?;

        let usable: Vec<&Annotation> = annotations
            .iter()
            .filter(|a| {
                let finite = a.polygon.vertices().iter().all(WorldPoint::is_finite);
                if !finite {
                    warn!("Skipping annotation {:?}: non-finite vertex", a.label);
                }
                finite && !a.polygon.is_degenerate()
            })
            .collect();

        if usable.is_empty() {
            return Err(Error::EmptyMap(format!(
                "{} annotations, none with at least 3 vertices",
                annotations.len()
            )));
        }

        let bounds = self
            .compute_bounds(annotations)
            .ok_or_else(|| Error::EmptyMap("no finite vertices".to_string()))?;
        match bounds.width.checked_mul(bounds.height) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "{}x{} grid at resolution {} exceeds {} cells; raise grid.resolution",
                    bounds.width, bounds.height, bounds.resolution, MAX_GRID_CELLS
                )));
            }
        }
        let mut grid = LabelGrid::new(bounds.width, bounds.height);

        for annotation in &usable {
            let id = grid.intern(RegionLabel::region(&annotation.kind, &annotation.label));
            fill_polygon(&mut grid, &bounds, &annotation.polygon, id);
        }

        info!(
            "Rasterized {} of {} annotations into {}x{} grid (resolution {})",
            usable.len(),
            annotations.len(),
            bounds.width,
            bounds.height,
            bounds.resolution
        );

        Ok((grid, bounds))
    }
}

/// Fill every cell whose center lies inside `polygon` with `id`.
///
/// Returns the number of cells written.
pub fn fill_polygon(
    grid: &mut LabelGrid,
    bounds: &GridBounds,
    polygon: &Polygon,
    id: LabelId,
) -> usize {
    let Some((poly_min, poly_max)) = polygon.bounds() else {
        return 0;
    };
    if polygon.is_degenerate() {
        return 0;
    }

    let res = bounds.resolution;
    let row_lo = (((poly_min.y - bounds.min.y) / res).floor() as i32 - 1).max(0);
    let row_hi = (((poly_max.y - bounds.min.y) / res).ceil() as i32 + 1).min(bounds.height as i32);

    let mut crossings: Vec<f64> = Vec::with_capacity(polygon.vertices().len());
    let mut written = 0usize;

    for row in row_lo..row_hi {
        let y = bounds.row_center(row);
        crossings.clear();
        crossings.extend(
            polygon
                .edges()
                .filter_map(|(a, b)| Polygon::edge_crossing(a, b, y)),
        );
        if crossings.len() < 2 {
            continue;
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let start = first_column_at_or_after(bounds, pair[0]);
            let end = first_column_at_or_after(bounds, pair[1]);
            if end > start {
                grid.fill_row(row, start, end, id);
                written += (end.min(bounds.width as i32) - start.max(0)).max(0) as usize;
            }
        }
    }

    debug!("Filled {} cells for label id {}", written, id);
    written
}

/// Smallest column whose center is `>= x`.
fn first_column_at_or_after(bounds: &GridBounds, x: f64) -> i32 {
    let estimate = ((x - bounds.min.x) / bounds.resolution - 0.5).ceil();
    // Clamp before the integer cast; only the grid's span matters.
    let mut col = estimate.clamp(-1.0, bounds.width as f64 + 1.0) as i32;
    while bounds.column_center(col) < x && col <= bounds.width as i32 {
        col += 1;
    }
    while col > -1 && bounds.column_center(col - 1) >= x {
        col -= 1;
    }
    col
}
