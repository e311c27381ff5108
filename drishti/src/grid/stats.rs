//! Label distribution statistics for a rasterized grid.

use std::fmt;

use crate::core::RegionLabel;

use super::bounds::GridBounds;
use super::storage::LabelGrid;

/// Cell count for one label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelCount {
    /// The label
    pub label: RegionLabel,
    /// Number of cells holding it
    pub cells: usize,
    /// Share of the whole grid (0-100)
    pub percentage: f64,
}

/// Summary of a rasterized grid.
#[derive(Clone, Debug)]
pub struct GridStats {
    /// Bounds and resolution
    pub bounds: GridBounds,
    /// Per-label counts, most frequent first (ties by label text)
    pub label_counts: Vec<LabelCount>,
}

impl GridStats {
    /// Compute statistics for a grid.
    pub fn compute(grid: &LabelGrid, bounds: &GridBounds) -> Self {
        let total = grid.cell_count().max(1) as f64;
        let mut label_counts: Vec<LabelCount> = grid
            .count_by_label()
            .into_iter()
            .enumerate()
            .filter(|&(_, cells)| cells > 0)
            .map(|(id, cells)| LabelCount {
                label: grid.label(id as u32).clone(),
                cells,
                percentage: cells as f64 * 100.0 / total,
            })
            .collect();
        label_counts.sort_by(|a, b| {
            b.cells
                .cmp(&a.cells)
                .then_with(|| a.label.to_string().cmp(&b.label.to_string()))
        });

        Self {
            bounds: bounds.clone(),
            label_counts,
        }
    }

    /// Number of distinct labels present in the grid (background included).
    pub fn unique_labels(&self) -> usize {
        self.label_counts.len()
    }

    /// Cells covered by any annotation.
    pub fn labeled_cells(&self) -> usize {
        self.label_counts
            .iter()
            .filter(|c| !c.label.is_background())
            .map(|c| c.cells)
            .sum()
    }
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.bounds;
        writeln!(f, "Grid dimensions: {} x {}", b.width, b.height)?;
        writeln!(f, "Grid resolution: {}", b.resolution)?;
        writeln!(
            f,
            "Coordinate bounds: ({:.1}, {:.1}) to ({:.1}, {:.1})",
            b.min.x, b.min.y, b.max.x, b.max.y
        )?;
        writeln!(f, "Total unique labels: {}", self.unique_labels())?;
        writeln!(f, "Label distribution:")?;
        for count in &self.label_counts {
            writeln!(
                f,
                "  {}: {} cells ({:.2}%)",
                count.label, count.cells, count.percentage
            )?;
        }
        Ok(())
    }
}
