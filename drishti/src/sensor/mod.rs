//! Simulated bearing-dependent visual sensor.
//!
//! Given a rasterized venue, the [`VisibilitySensor`] answers "which labeled
//! regions can a camera at this position, facing this heading, see?" by
//! casting a fan of rays across the field of view:
//!
//! ```text
//!                 ╱ heading + fov
//!               ╱
//!   origin ●──────────── heading
//!           (N rays evenly spaced in [heading, heading + fov))
//! ```
//!
//! Each ray stops at the first opaque cell it reaches (occlusion); rays that
//! leave the grid or reach the maximum radius contribute nothing. The union of
//! the hit labels is the visibility signature of the pose.

mod config;
mod visibility;

pub use config::{DEFAULT_ANGULAR_SAMPLES, DEFAULT_FOV_DEGREES, DEFAULT_MAX_RADIUS, SensorConfig};
pub use visibility::{VisibilitySensor, sample_visible_labels};
