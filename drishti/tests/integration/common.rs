//! Shared fixtures.

use drishti::core::{CORRIDOR_KIND, SHOP_KIND};
use drishti::index::IndexConfig;
use drishti::{Annotation, GridBounds, IndexBuilder, LabelGrid, SensorConfig, SignatureIndex};

/// Axis-aligned rectangle annotation.
pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64, label: &str, kind: &str) -> Annotation {
    Annotation::from_points(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)], label, kind)
}

/// Three shops; Alpha and Beta share the edge x = 30, and the corridor
/// vertex (30, 30) sits 10 units below both.
///
/// ```text
///  y=60 ┌───────┬───────┐
///       │ Alpha │ Beta  │
///  y=40 └───────┴───────┘   ┌───────┐
///              ▲            │ Gamma │
///  y=30       (30,30)       │       │
///  y=25   (25,25)─(35,25)   │       │
///  y=20                     └───────┘
///      x=10    x=30    x=50 x=60    x=80
/// ```
pub fn three_shop_map() -> Vec<Annotation> {
    vec![
        rect(10.0, 40.0, 30.0, 60.0, "Alpha", SHOP_KIND),
        rect(30.0, 40.0, 50.0, 60.0, "Beta", SHOP_KIND),
        rect(60.0, 20.0, 80.0, 40.0, "Gamma", SHOP_KIND),
        Annotation::from_points(
            &[(30.0, 30.0), (35.0, 25.0), (25.0, 25.0)],
            "atrium",
            CORRIDOR_KIND,
        ),
    ]
}

/// Corridor annotations of a map.
pub fn corridors(map: &[Annotation]) -> Vec<Annotation> {
    map.iter().filter(|a| a.is_corridor()).cloned().collect()
}

/// Sensor used by the scenario: 30 degree field of view, 50 cell range.
pub fn scenario_sensor() -> SensorConfig {
    SensorConfig::with_fov(30.0, 50)
}

/// Builder used by the scenario: 15 degree heading step.
pub fn scenario_builder(parallel: bool) -> IndexBuilder {
    IndexBuilder::new(
        scenario_sensor(),
        IndexConfig {
            parallel,
            ..IndexConfig::with_heading_step(15.0)
        },
    )
}

/// Build the scenario index with its grid.
pub fn scenario_index() -> (SignatureIndex, LabelGrid, GridBounds) {
    scenario_builder(false)
        .build_from_map(&three_shop_map())
        .expect("scenario map should build")
}
