//! Core types for the Drishti library.
//!
//! Map coordinates follow the annotation tool's convention: X grows to the
//! right, Y grows with the annotation's row axis, headings are degrees measured
//! counter-clockwise from +X in that frame.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`WorldPoint`]: Floating-point map coordinates (annotation units)
//! - [`GridCoord`]: Integer cell indices into a [`LabelGrid`](crate::grid::LabelGrid)
//!
//! ### Map Annotations
//! - [`Annotation`]: Labeled polygon with a region kind (`shop`, `corridor`, ...)
//! - [`Polygon`]: Vertex ring with even-odd containment
//!
//! ### Labels and Signatures
//! - [`RegionLabel`]: Cell label, either `background` or `kind:name`
//! - [`Signature`]: Canonical, normalized set of visible shop names
//! - [`normalize_shop_name`]: The one normalization shared by build and query
//!
//! ### Poses
//! - [`PoseSample`]: Integer position plus heading recorded in the index

mod annotation;
mod label;
mod point;
mod pose;

pub use annotation::{Annotation, CORRIDOR_KIND, Polygon, SHOP_KIND};
pub use label::{BACKGROUND, RegionLabel, Signature, normalize_shop_name};
pub use point::{GridCoord, WorldPoint};
pub use pose::PoseSample;
