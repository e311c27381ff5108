//! Labeled polygon annotations.

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Region kind of shop annotations.
pub const SHOP_KIND: &str = "shop";

/// Region kind of corridor annotations (index origins).
pub const CORRIDOR_KIND: &str = "corridor";

/// A simple polygon in map coordinates.
///
/// The ring is implicitly closed: the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<WorldPoint>,
}

impl Polygon {
    /// Create a polygon from its vertex ring.
    pub fn new(vertices: Vec<WorldPoint>) -> Self {
        Self { vertices }
    }

    /// Vertex ring.
    #[inline]
    pub fn vertices(&self) -> &[WorldPoint] {
        &self.vertices
    }

    /// Fewer than three vertices.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Iterate over edges `(a, b)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (WorldPoint, WorldPoint)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<(WorldPoint, WorldPoint)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(min, max), p| {
            (
                WorldPoint::new(min.x.min(p.x), min.y.min(p.y)),
                WorldPoint::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Vertex mean (label anchor for rendering).
    pub fn centroid(&self) -> Option<WorldPoint> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(WorldPoint::ZERO, |acc, p| acc + *p);
        Some(WorldPoint::new(sum.x / n, sum.y / n))
    }

    /// X coordinate where edge `(a, b)` crosses the horizontal line at `y`.
    ///
    /// Half-open rule: an edge crosses when exactly one endpoint lies strictly
    /// above `y`. Shared by [`Polygon::contains`] and the scanline rasterizer so
    /// both classify cell centers identically.
    #[inline]
    pub fn edge_crossing(a: WorldPoint, b: WorldPoint, y: f64) -> Option<f64> {
        if (a.y > y) != (b.y > y) {
            Some(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y))
        } else {
            None
        }
    }

    /// Even-odd point containment. Works for convex and concave rings.
    pub fn contains(&self, point: WorldPoint) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if let Some(x_cross) = Self::edge_crossing(a, b, point.y)
                && point.x < x_cross
            {
                inside = !inside;
            }
        }
        inside
    }
}

/// A labeled polygon from the venue map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Polygon outline
    pub polygon: Polygon,
    /// Display name (e.g. the shop sign text)
    pub label: String,
    /// Region kind (`shop`, `corridor`, ...)
    pub kind: String,
}

impl Annotation {
    /// Create an annotation.
    pub fn new(polygon: Polygon, label: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            polygon,
            label: label.into(),
            kind: kind.into(),
        }
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_points(
        points: &[(f64, f64)],
        label: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        let vertices = points.iter().map(|&(x, y)| WorldPoint::new(x, y)).collect();
        Self::new(Polygon::new(vertices), label, kind)
    }

    /// Annotation marks navigable corridor space.
    #[inline]
    pub fn is_corridor(&self) -> bool {
        self.kind == CORRIDOR_KIND
    }

    /// Composite grid label text, `kind:label`.
    pub fn grid_label(&self) -> String {
        format!("{}:{}", self.kind, self.label)
    }
}
