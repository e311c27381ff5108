//! Label grid storage.
//!
//! Cells hold compact ids into a label table instead of owned strings, so a
//! grid over a large venue stays a flat `Vec<u32>`. Id `0` is always
//! [`RegionLabel::Background`].

use std::collections::HashMap;

use crate::core::{GridCoord, RegionLabel};

/// Index into a grid's label table.
pub type LabelId = u32;

/// 2D grid of region labels, row-major.
#[derive(Clone, Debug)]
pub struct LabelGrid {
    cells: Vec<LabelId>,
    labels: Vec<RegionLabel>,
    label_ids: HashMap<RegionLabel, LabelId>,
    width: usize,
    height: usize,
}

impl LabelGrid {
    /// Id of the background label.
    pub const BACKGROUND_ID: LabelId = 0;

    /// Create a grid with every cell set to background.
    pub fn new(width: usize, height: usize) -> Self {
        let mut label_ids = HashMap::new();
        label_ids.insert(RegionLabel::Background, Self::BACKGROUND_ID);
        Self {
            cells: vec![Self::BACKGROUND_ID; width * height],
            labels: vec![RegionLabel::Background],
            label_ids,
            width,
            height,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Label table, indexed by [`LabelId`].
    #[inline]
    pub fn labels(&self) -> &[RegionLabel] {
        &self.labels
    }

    /// Look up a label by id.
    #[inline]
    pub fn label(&self, id: LabelId) -> &RegionLabel {
        &self.labels[id as usize]
    }

    /// Return the id for `label`, adding it to the table if needed.
    pub fn intern(&mut self, label: RegionLabel) -> LabelId {
        if let Some(&id) = self.label_ids.get(&label) {
            return id;
        }
        let id = self.labels.len() as LabelId;
        self.labels.push(label.clone());
        self.label_ids.insert(label, id);
        id
    }

    /// Id of an already interned label.
    pub fn find(&self, label: &RegionLabel) -> Option<LabelId> {
        self.label_ids.get(label).copied()
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Label id at a coordinate, `None` outside the grid.
    #[inline]
    pub fn get_id(&self, coord: GridCoord) -> Option<LabelId> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Label at a coordinate, `None` outside the grid.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<&RegionLabel> {
        self.get_id(coord).map(|id| self.label(id))
    }

    /// Overwrite a horizontal run `[x_start, x_end)` of row `y`.
    ///
    /// The run is clipped to the grid.
    pub fn fill_row(&mut self, y: i32, x_start: i32, x_end: i32, id: LabelId) {
        if y < 0 || y as usize >= self.height {
            return;
        }
        let x0 = x_start.max(0) as usize;
        let x1 = (x_end.max(0) as usize).min(self.width);
        if x0 >= x1 {
            return;
        }
        let row = y as usize * self.width;
        self.cells[row + x0..row + x1].fill(id);
    }

    /// Raw row-major cell ids.
    #[inline]
    pub fn cells(&self) -> &[LabelId] {
        &self.cells
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &RegionLabel)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &id)| {
            let x = (i % self.width) as i32;
            let y = (i / self.width) as i32;
            (GridCoord::new(x, y), self.label(id))
        })
    }

    /// Number of cells per label id (indexed like [`LabelGrid::labels`]).
    pub fn count_by_label(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.labels.len()];
        for &id in &self.cells {
            counts[id as usize] += 1;
        }
        counts
    }
}
