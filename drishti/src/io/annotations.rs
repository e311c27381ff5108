//! Annotation file loading.
//!
//! Annotation files are JSON arrays of polygon records:
//!
//! ```json
//! [
//!   { "points": [{"x": 10, "y": 40}, {"x": 30, "y": 40}, {"x": 30, "y": 60}],
//!     "label": "Alpha", "type": "shop" }
//! ]
//! ```
//!
//! `type` is optional and falls back to the file's role (`shop`, `corridor`);
//! `label` falls back to `unlabeled`. Unknown fields are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::core::{Annotation, Polygon, WorldPoint};
use crate::error::Result;

/// Label used when a record has none.
pub const UNLABELED: &str = "unlabeled";

#[derive(Debug, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct RawAnnotation {
    #[serde(default)]
    points: Vec<RawPoint>,
    label: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl RawAnnotation {
    fn into_annotation(self, default_kind: &str) -> Annotation {
        let vertices = self
            .points
            .into_iter()
            .map(|p| WorldPoint::new(p.x, p.y))
            .collect();
        Annotation::new(
            Polygon::new(vertices),
            self.label.unwrap_or_else(|| UNLABELED.to_string()),
            self.kind.unwrap_or_else(|| default_kind.to_string()),
        )
    }
}

/// Parse annotation records from a reader.
pub fn read_annotations<R: Read>(reader: R, default_kind: &str) -> Result<Vec<Annotation>> {
    let raw: Vec<RawAnnotation> = serde_json::from_reader(reader)?;
    Ok(raw
        .into_iter()
        .map(|r| r.into_annotation(default_kind))
        .collect())
}

/// Parse annotation records from a JSON string.
pub fn parse_annotations(json: &str, default_kind: &str) -> Result<Vec<Annotation>> {
    read_annotations(json.as_bytes(), default_kind)
}

/// Load an annotation file.
pub fn load_annotations(path: &Path, default_kind: &str) -> Result<Vec<Annotation>> {
    let file = File::open(path)?;
    let annotations = read_annotations(BufReader::new(file), default_kind)?;
    info!(
        "Loaded {} {} annotations from {}",
        annotations.len(),
        default_kind,
        path.display()
    );
    Ok(annotations)
}

/// Load several annotation files, concatenated in the order given.
///
/// Order matters for rasterization: later polygons win on overlap.
pub fn load_map<'a, I>(sources: I) -> Result<Vec<Annotation>>
where
    I: IntoIterator<Item = (&'a Path, &'a str)>,
{
    let mut all = Vec::new();
    for (path, default_kind) in sources {
        all.extend(load_annotations(path, default_kind)?);
    }
    Ok(all)
}
