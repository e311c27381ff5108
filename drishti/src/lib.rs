//! # Drishti
//!
//! Camera pose estimation in an annotated indoor venue from the set of shop
//! names visible in a single photo.
//!
//! ## Overview
//!
//! The venue map is a list of labeled polygons (shops and corridors). An
//! offline build discretizes it into a label grid, sweeps a simulated
//! field-of-view sensor from every corridor origin at a fixed set of
//! headings, and records which shops each pose can see. At query time the
//! shops recognized in a photo are normalized into the same canonical form
//! and looked up.
//!
//! ```text
//! annotations ──► GridRasterizer ──► LabelGrid ──► VisibilitySensor
//!                                                        │
//!                                            IndexBuilder (offline)
//!                                                        ▼
//! photo ──► ShopRecognizer ──► Signature ──► SignatureIndex ──► candidates
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::{DrishtiConfig, PoseEstimator};
//! use drishti::io::{load_map, save_index};
//!
//! let config = DrishtiConfig::load_default()?;
//! let map = load_map([(shops_path, "shop"), (corridors_path, "corridor")])?;
//! let (index, _grid, _bounds) = config.index_builder().build_from_map(&map)?;
//! save_index(&index, Path::new("index.json"))?;
//!
//! let estimator = PoseEstimator::new(index);
//! let estimate = estimator.estimate(["Alpha", "Beta"]);
//! println!("{} candidates", estimate.poses().len());
//! ```
//!
//! ## Coordinate System
//!
//! - Map units as given by the annotation tool; grid cell `(0, 0)` covers
//!   the padded minimum corner
//! - Headings in degrees, counter-clockwise from +X
//! - Stored pose positions are truncated to integers

#![warn(missing_docs)]

// Core types
pub mod core;

// Label grid rasterization
pub mod grid;

// Simulated visibility sensor
pub mod sensor;

// Signature index construction
pub mod index;

// Pose lookup
pub mod estimate;

// Unified configuration
pub mod config;

// Annotation, index and SVG files
pub mod io;

// Shop recognition boundary
pub mod recognition;

mod error;

pub use crate::core::{Annotation, GridCoord, PoseSample, RegionLabel, Signature, WorldPoint};
pub use crate::core::normalize_shop_name;

pub use config::{ConfigLoadError, DrishtiConfig};
pub use error::{Error, Result};
pub use estimate::{Estimate, PoseEstimator};
pub use grid::{GridBounds, GridRasterizer, LabelGrid, build_grid};
pub use index::{IndexBuilder, SignatureIndex, build_index};
pub use recognition::{RecognizerConfig, ShopRecognizer};
pub use sensor::{SensorConfig, VisibilitySensor, sample_visible_labels};
