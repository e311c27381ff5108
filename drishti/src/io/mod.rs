//! File formats and export.
//!
//! - **Annotations**: JSON polygon records from the labeling tool
//! - **Index**: versioned JSON document holding the signature index
//! - **SVG**: map rendering with localization candidates
//!
//! ## Building and Loading an Index
//!
//! ```rust,ignore
//! use drishti::io::{load_annotations, save_index, load_index};
//! use std::path::Path;
//!
//! let shops = load_annotations(Path::new("annotations.shop.json"), "shop")?;
//! save_index(&index, Path::new("index.json"))?;
//! let index = load_index(Path::new("index.json"))?;
//! ```
//!
//! ## SVG Visualization
//!
//! ```rust,ignore
//! use drishti::io::{SvgVisualizer, RenderConfig};
//!
//! SvgVisualizer::new(shops, RenderConfig::default())
//!     .with_title("Candidates")
//!     .with_candidates(estimate.candidate_points())
//!     .with_heat_layer()
//!     .save(Path::new("candidates.svg"))?;
//! ```

pub mod annotations;
pub mod index_format;
pub mod svg;

pub use annotations::{UNLABELED, load_annotations, load_map, parse_annotations, read_annotations};
pub use index_format::{INDEX_FORMAT_VERSION, load_index, read_index, save_index, write_index};
pub use svg::{RenderConfig, SvgVisualizer};
