//! Radial ray stepping for the visibility sensor.
//!
//! A ray is walked in whole grid-cell radius steps from its origin. At step
//! `r` the sampled cell is
//!
//! ```text
//! origin + (round(r · cos θ), round(r · sin θ))
//! ```
//!
//! ```text
//!  r=0   1   2   3   4
//!   ●───●───●───●───●   θ = 0
//!    ╲
//!     ●  r=1, θ = 45°: (round(0.71), round(0.71)) = (1, 1)
//! ```
//!
//! Consecutive steps may land on the same cell at steep angles; the sensor
//! only cares about the first labeled hit, so duplicates are harmless and
//! are not filtered.
//!
//! Rounding is `f64::round` (half away from zero) on both the index-build and
//! query paths. Changing it changes which cells are sampled near polygon
//! boundaries, so it must not differ between the two.

use crate::core::GridCoord;

/// Iterator over the grid cells sampled along one bearing.
#[derive(Clone, Debug)]
pub struct RadialRay {
    origin: GridCoord,
    cos: f64,
    sin: f64,
    step: u32,
    max_radius: u32,
}

impl RadialRay {
    /// Ray from `origin` at `angle_degrees`, sampling radii `0..max_radius`.
    pub fn new(origin: GridCoord, angle_degrees: f64, max_radius: u32) -> Self {
        let theta = angle_degrees.to_radians();
        Self::from_direction(origin, theta.cos(), theta.sin(), max_radius)
    }

    /// Ray with a precomputed direction (`cos θ`, `sin θ`).
    #[inline]
    pub fn from_direction(origin: GridCoord, cos: f64, sin: f64, max_radius: u32) -> Self {
        Self {
            origin,
            cos,
            sin,
            step: 0,
            max_radius,
        }
    }
}

/// Grid offset sampled at radius `r` along direction (`cos`, `sin`).
#[inline]
pub fn radial_offset(r: u32, cos: f64, sin: f64) -> GridCoord {
    let r = r as f64;
    GridCoord::new((r * cos).round() as i32, (r * sin).round() as i32)
}

impl Iterator for RadialRay {
    type Item = GridCoord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.max_radius {
            return None;
        }
        let coord = self.origin + radial_offset(self.step, self.cos, self.sin);
        self.step += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.max_radius - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RadialRay {}
