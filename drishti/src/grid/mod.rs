//! Label grid rasterization and ray stepping.
//!
//! The venue map is a list of labeled polygons. This module discretizes it
//! into a [`LabelGrid`] where every cell holds exactly one [`RegionLabel`]
//! (`background` or `kind:name`), plus the [`GridBounds`] record needed to
//! convert between map and grid coordinates.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  Vec<Annotation>     │  polygons in map units
//! └──────────┬───────────┘
//!            │ bounds + padding
//!            ▼
//! ┌──────────────────────┐
//! │    GridRasterizer    │  scanline even-odd fill,
//! │                      │  last writer wins
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │      LabelGrid       │ ◄── │     RadialRay        │
//! │  (u32 ids + table)   │     │ (sensor ray stepping)│
//! └──────────────────────┘     └──────────────────────┘
//! ```
//!
//! ## Coordinate Conversion
//!
//! ```text
//! grid = floor((world - min) / resolution)
//! world(center) = min + (grid + 0.5) * resolution
//! ```
//!
//! The same conversion is used when the index is built and when it is
//! queried.
//!
//! [`RegionLabel`]: crate::core::RegionLabel

mod bounds;
mod config;
pub mod rasterizer;
pub mod raycaster;
mod stats;
mod storage;

pub use bounds::GridBounds;
pub use config::GridConfig;
pub use rasterizer::{GridRasterizer, MAX_GRID_CELLS, build_grid};
pub use raycaster::RadialRay;
pub use stats::{GridStats, LabelCount};
pub use storage::{LabelGrid, LabelId};
