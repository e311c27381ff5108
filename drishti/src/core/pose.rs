//! Pose samples stored in the signature index.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// A sampled camera pose: integer map position plus heading in degrees.
///
/// Serialized as a `[x, y, heading]` triple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i32, i32, f32)", into = "(i32, i32, f32)")]
pub struct PoseSample {
    /// X position (map units, truncated)
    pub x: i32,
    /// Y position (map units, truncated)
    pub y: i32,
    /// Heading in degrees, counter-clockwise from +X
    pub heading: f32,
}

impl PoseSample {
    /// Create a pose sample.
    #[inline]
    pub const fn new(x: i32, y: i32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    /// Position as a map point.
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x as f64, self.y as f64)
    }
}

impl From<(i32, i32, f32)> for PoseSample {
    fn from((x, y, heading): (i32, i32, f32)) -> Self {
        Self::new(x, y, heading)
    }
}

impl From<PoseSample> for (i32, i32, f32) {
    fn from(pose: PoseSample) -> Self {
        (pose.x, pose.y, pose.heading)
    }
}

impl fmt::Display for PoseSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}°)", self.x, self.y, self.heading)
    }
}
