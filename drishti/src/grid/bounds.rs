//! Grid bounds and map/grid coordinate conversion.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};

/// Extent and resolution of a rasterized grid.
///
/// `min` is the map position of the corner of cell (0, 0). `max` is the padded
/// upper corner of the annotation bounds; the grid covers it with one extra
/// cell so that `max` itself maps inside the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Padded lower corner (map units)
    pub min: WorldPoint,
    /// Padded upper corner (map units)
    pub max: WorldPoint,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Map units per cell
    pub resolution: f64,
}

impl GridBounds {
    /// Bounds covering `[min, max]` expanded by `padding` on every side.
    ///
    /// Dimensions are `floor((max - min) / resolution) + 1`.
    pub fn from_extent(min: WorldPoint, max: WorldPoint, padding: f64, resolution: f64) -> Self {
        let min = WorldPoint::new(min.x - padding, min.y - padding);
        let max = WorldPoint::new(max.x + padding, max.y + padding);
        let width = ((max.x - min.x) / resolution).floor() as usize + 1;
        let height = ((max.y - min.y) / resolution).floor() as usize + 1;
        Self {
            min,
            max,
            width,
            height,
            resolution,
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Convert map coordinates to grid coordinates.
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            ((point.x - self.min.x) / self.resolution).floor() as i32,
            ((point.y - self.min.y) / self.resolution).floor() as i32,
        )
    }

    /// Map position of a cell center.
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(self.column_center(coord.x), self.row_center(coord.y))
    }

    /// Map X of the center of column `x`.
    #[inline]
    pub fn column_center(&self, x: i32) -> f64 {
        self.min.x + (x as f64 + 0.5) * self.resolution
    }

    /// Map Y of the center of row `y`.
    #[inline]
    pub fn row_center(&self, y: i32) -> f64 {
        self.min.y + (y as f64 + 0.5) * self.resolution
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }
}
