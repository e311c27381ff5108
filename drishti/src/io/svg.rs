//! SVG rendering of the venue map and localization candidates.
//!
//! The image shows:
//! - Optional label grid background (one rect per labeled cell)
//! - Annotation polygons, colored per label, with centroid labels
//! - Candidate density heat layer (candidates binned into square cells)
//! - Candidate points
//! - Legend

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Annotation, WorldPoint};
use crate::grid::{GridBounds, LabelGrid};

/// Label colors, assigned in first-seen order.
const PALETTE: [&str; 20] = [
    "#1F77B4", "#AEC7E8", "#FF7F0E", "#FFBB78", "#2CA02C", "#98DF8A", "#D62728", "#FF9896",
    "#9467BD", "#C5B0D5", "#8C564B", "#C49C94", "#E377C2", "#F7B6D2", "#7F7F7F", "#C7C7C7",
    "#BCBD22", "#DBDB8D", "#17BECF", "#9EDAE5",
];

/// Fill for corridor polygons.
const CORRIDOR_FILL: &str = "#E4E4E4";

/// Candidate point color.
const CANDIDATE_COLOR: &str = "#D62728";

/// Heat layer color.
const HEAT_COLOR: &str = "#FF5500";

const TITLE_HEIGHT: f64 = 30.0;
const LEGEND_ROW: f64 = 20.0;

/// Rendering configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Pixels per map unit
    pub scale: f64,
    /// Margin around the map (pixels)
    pub padding: f64,
    /// Candidate marker radius (pixels)
    pub point_radius: f64,
    /// Heat layer bin size (map units)
    pub heat_cell_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 4.0,
            padding: 20.0,
            point_radius: 3.0,
            heat_cell_size: 5.0,
        }
    }
}

/// SVG visualization builder
pub struct SvgVisualizer {
    config: RenderConfig,
    annotations: Vec<Annotation>,
    grid: Option<(LabelGrid, GridBounds)>,
    candidates: Vec<WorldPoint>,
    heat: bool,
    title: Option<String>,
}

impl SvgVisualizer {
    /// Create a visualizer for a set of annotation polygons.
    pub fn new(annotations: Vec<Annotation>, config: RenderConfig) -> Self {
        Self {
            config,
            annotations,
            grid: None,
            candidates: Vec::new(),
            heat: false,
            title: None,
        }
    }

    /// Set a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draw the rasterized grid underneath the polygons.
    pub fn with_grid(mut self, grid: LabelGrid, bounds: GridBounds) -> Self {
        self.grid = Some((grid, bounds));
        self
    }

    /// Plot candidate positions.
    pub fn with_candidates(mut self, points: Vec<WorldPoint>) -> Self {
        self.candidates = points;
        self
    }

    /// Also draw a density layer for the candidates.
    pub fn with_heat_layer(mut self) -> Self {
        self.heat = true;
        self
    }

    /// Map extent in map units: grid bounds if present, else all vertices
    /// and candidates.
    fn extent(&self) -> (WorldPoint, WorldPoint) {
        if let Some((_, bounds)) = &self.grid {
            let max = WorldPoint::new(
                bounds.min.x + bounds.width as f64 * bounds.resolution,
                bounds.min.y + bounds.height as f64 * bounds.resolution,
            );
            return (bounds.min, max);
        }

        let mut points = self
            .annotations
            .iter()
            .flat_map(|a| a.polygon.vertices().iter().copied())
            .chain(self.candidates.iter().copied())
            .filter(WorldPoint::is_finite);
        let Some(first) = points.next() else {
            return (WorldPoint::ZERO, WorldPoint::new(1.0, 1.0));
        };
        points.fold((first, first), |(min, max), p| {
            (
                WorldPoint::new(min.x.min(p.x), min.y.min(p.y)),
                WorldPoint::new(max.x.max(p.x), max.y.max(p.y)),
            )
        })
    }

    /// Colors per shop label in first-seen order.
    fn label_colors(&self) -> (Vec<String>, HashMap<String, &'static str>) {
        let mut order = Vec::new();
        let mut colors = HashMap::new();
        let mut assign = |label: String| {
            if !colors.contains_key(&label) {
                colors.insert(label.clone(), PALETTE[order.len() % PALETTE.len()]);
                order.push(label);
            }
        };
        for a in self.annotations.iter().filter(|a| !a.is_corridor()) {
            assign(a.label.clone());
        }
        (order, colors)
    }

    /// Render to an SVG string.
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut svg);
        svg
    }

    /// Save to file.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        let (min, max) = self.extent();
        let scale = self.config.scale;
        let map_width_px = (max.x - min.x).max(0.0) * scale;
        let map_height_px = (max.y - min.y).max(0.0) * scale;

        let (legend_labels, colors) = self.label_colors();
        let legend_rows = legend_labels.len() + usize::from(!self.candidates.is_empty());
        let legend_height = legend_rows as f64 * LEGEND_ROW + 20.0;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { TITLE_HEIGHT } else { 0.0 };
        let width = map_width_px + 2.0 * padding;
        let height = map_height_px + 2.0 * padding + title_height + legend_height;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#FFFFFF"/>"##)?;

        if let Some(title) = &self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                escape_xml(title)
            )?;
        }

        let projector = Projector {
            min,
            scale,
            height_px: map_height_px,
        };
        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )?;

        if let Some((grid, bounds)) = &self.grid {
            self.write_grid(svg, grid, bounds, &projector, &colors)?;
        }
        self.write_polygons(svg, &projector, &colors)?;
        if self.heat {
            self.write_heat(svg, &projector)?;
        }
        self.write_candidates(svg, &projector)?;

        writeln!(svg, "  </g>")?;

        let legend_y = padding + title_height + map_height_px + 10.0;
        self.write_legend(svg, legend_y, &legend_labels, &colors)?;

        writeln!(svg, "</svg>")
    }

    fn write_grid(
        &self,
        svg: &mut String,
        grid: &LabelGrid,
        bounds: &GridBounds,
        projector: &Projector,
        colors: &HashMap<String, &'static str>,
    ) -> fmt::Result {
        let cell_px = bounds.resolution * projector.scale;
        writeln!(svg, r#"    <g id="grid" opacity="0.35">"#)?;
        for (coord, label) in grid.iter() {
            let (Some(kind), Some(name)) = (label.kind(), label.name()) else {
                continue;
            };
            let color = if kind == crate::core::CORRIDOR_KIND {
                CORRIDOR_FILL
            } else {
                colors.get(name).copied().unwrap_or(PALETTE[0])
            };
            let corner = WorldPoint::new(
                bounds.min.x + coord.x as f64 * bounds.resolution,
                bounds.min.y + (coord.y + 1) as f64 * bounds.resolution,
            );
            let (px, py) = projector.project(corner);
            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                px, py, cell_px, cell_px, color
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_polygons(
        &self,
        svg: &mut String,
        projector: &Projector,
        colors: &HashMap<String, &'static str>,
    ) -> fmt::Result {
        writeln!(svg, r#"    <g id="annotations">"#)?;
        for annotation in &self.annotations {
            let vertices = annotation.polygon.vertices();
            if vertices.len() < 3 {
                continue;
            }
            let points: Vec<String> = vertices
                .iter()
                .map(|&v| {
                    let (px, py) = projector.project(v);
                    format!("{:.1},{:.1}", px, py)
                })
                .collect();

            let fill = if annotation.is_corridor() {
                CORRIDOR_FILL
            } else {
                colors.get(&annotation.label).copied().unwrap_or(PALETTE[0])
            };
            writeln!(
                svg,
                r##"      <polygon points="{}" fill="{}" fill-opacity="0.6" stroke="#333" stroke-width="1"/>"##,
                points.join(" "),
                fill
            )?;

            if !annotation.is_corridor()
                && let Some(centroid) = annotation.polygon.centroid()
            {
                let (cx, cy) = projector.project(centroid);
                writeln!(
                    svg,
                    r##"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="9" text-anchor="middle" fill="#222">{}</text>"##,
                    cx,
                    cy,
                    escape_xml(&annotation.label)
                )?;
            }
        }
        writeln!(svg, "    </g>")
    }

    fn write_heat(&self, svg: &mut String, projector: &Projector) -> fmt::Result {
        let cell = self.config.heat_cell_size;
        if self.candidates.is_empty() || !cell.is_finite() || cell <= 0.0 {
            return Ok(());
        }

        let mut bins: HashMap<(i64, i64), usize> = HashMap::new();
        for p in &self.candidates {
            let key = ((p.x / cell).floor() as i64, (p.y / cell).floor() as i64);
            *bins.entry(key).or_default() += 1;
        }
        let peak = bins.values().copied().max().unwrap_or(1) as f64;

        let mut keys: Vec<_> = bins.keys().copied().collect();
        keys.sort_unstable();

        writeln!(svg, r#"    <g id="heat">"#)?;
        let size_px = cell * projector.scale;
        for key in keys {
            let count = bins[&key] as f64;
            let corner = WorldPoint::new(key.0 as f64 * cell, (key.1 + 1) as f64 * cell);
            let (px, py) = projector.project(corner);
            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" opacity="{:.2}"/>"#,
                px,
                py,
                size_px,
                size_px,
                HEAT_COLOR,
                0.15 + 0.6 * count / peak
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_candidates(&self, svg: &mut String, projector: &Projector) -> fmt::Result {
        if self.candidates.is_empty() {
            return Ok(());
        }
        writeln!(svg, r#"    <g id="candidates">"#)?;
        for &p in &self.candidates {
            let (px, py) = projector.project(p);
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1" opacity="0.8"/>"#,
                px, py, self.config.point_radius, CANDIDATE_COLOR
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_legend(
        &self,
        svg: &mut String,
        y_offset: f64,
        labels: &[String],
        colors: &HashMap<String, &'static str>,
    ) -> fmt::Result {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )?;

        let mut entry_y = 15.0;
        for label in labels {
            let color = colors.get(label).copied().unwrap_or(PALETTE[0]);
            writeln!(
                svg,
                r#"    <rect x="20" y="{:.0}" width="12" height="12" fill="{}"/>"#,
                entry_y - 10.0,
                color
            )?;
            writeln!(
                svg,
                r##"    <text x="40" y="{:.0}" fill="#333">{}</text>"##,
                entry_y,
                escape_xml(label)
            )?;
            entry_y += LEGEND_ROW;
        }

        if !self.candidates.is_empty() {
            writeln!(
                svg,
                r#"    <circle cx="26" cy="{:.0}" r="4" fill="{}"/>"#,
                entry_y - 4.0,
                CANDIDATE_COLOR
            )?;
            writeln!(
                svg,
                r##"    <text x="40" y="{:.0}" fill="#333">Candidates ({})</text>"##,
                entry_y,
                self.candidates.len()
            )?;
        }

        writeln!(svg, "  </g>")
    }
}

/// Map → pixel transform with the Y axis flipped.
struct Projector {
    min: WorldPoint,
    scale: f64,
    height_px: f64,
}

impl Projector {
    fn project(&self, p: WorldPoint) -> (f64, f64) {
        (
            (p.x - self.min.x) * self.scale,
            self.height_px - (p.y - self.min.y) * self.scale,
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CORRIDOR_KIND, SHOP_KIND};
    use crate::grid::build_grid;

    fn map() -> Vec<Annotation> {
        vec![
            Annotation::from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], "A&B", SHOP_KIND),
            Annotation::from_points(&[(10.0, 0.0), (20.0, 0.0), (20.0, 10.0)], "Cafe", SHOP_KIND),
            Annotation::from_points(&[(0.0, -5.0), (20.0, -5.0), (20.0, 0.0), (0.0, 0.0)], "hall", CORRIDOR_KIND),
        ]
    }

    #[test]
    fn test_render_basic() {
        let svg = SvgVisualizer::new(map(), RenderConfig::default())
            .with_title("Venue")
            .render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 3);
        assert!(svg.contains("A&amp;B"));
        assert!(svg.contains("Venue"));
        // Corridors are not in the legend
        assert!(!svg.contains(">hall<"));
    }

    #[test]
    fn test_render_candidates_and_heat() {
        let svg = SvgVisualizer::new(map(), RenderConfig::default())
            .with_candidates(vec![WorldPoint::new(1.0, 1.0), WorldPoint::new(2.0, 2.0)])
            .with_heat_layer()
            .render();
        assert_eq!(svg.matches("<circle").count(), 3); // two candidates + legend marker
        assert!(svg.contains(r#"id="heat""#));
        assert!(svg.contains("Candidates (2)"));
    }

    #[test]
    fn test_render_with_grid_background() {
        let (grid, bounds) = build_grid(&map(), 1.0).unwrap();
        let labeled = grid.iter().filter(|(_, l)| !l.is_background()).count();
        let svg = SvgVisualizer::new(map(), RenderConfig::default())
            .with_grid(grid, bounds)
            .render();
        assert!(svg.contains(r#"id="grid""#));
        assert!(svg.matches("<rect").count() >= labeled);
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        SvgVisualizer::new(map(), RenderConfig::default())
            .save(&path)
            .unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
    }

    #[test]
    fn test_empty_map_still_renders() {
        let svg = SvgVisualizer::new(Vec::new(), RenderConfig::default()).render();
        assert!(svg.contains("</svg>"));
    }
}
