//! File round trips: annotations in, index out and back, SVG out.

use std::fs;

use drishti::core::{CORRIDOR_KIND, SHOP_KIND};
use drishti::io::{RenderConfig, SvgVisualizer, load_index, load_map, save_index};
use drishti::{DrishtiConfig, Error, PoseEstimator};

use super::common::{scenario_index, three_shop_map};

const SHOPS_JSON: &str = r#"[
    {"points": [{"x": 10, "y": 40}, {"x": 30, "y": 40}, {"x": 30, "y": 60}, {"x": 10, "y": 60}], "label": "Alpha"},
    {"points": [{"x": 30, "y": 40}, {"x": 50, "y": 40}, {"x": 50, "y": 60}, {"x": 30, "y": 60}], "label": "Beta"},
    {"points": [{"x": 60, "y": 20}, {"x": 80, "y": 20}, {"x": 80, "y": 40}, {"x": 60, "y": 40}], "label": "Gamma"}
]"#;

const CORRIDORS_JSON: &str = r#"[
    {"points": [{"x": 30, "y": 30}, {"x": 35, "y": 25}, {"x": 25, "y": 25}], "label": "atrium"}
]"#;

#[test]
fn annotation_files_build_the_same_index_as_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    let shops = dir.path().join("annotations.shop.json");
    let corridors = dir.path().join("annotations.corridor.json");
    fs::write(&shops, SHOPS_JSON).unwrap();
    fs::write(&corridors, CORRIDORS_JSON).unwrap();

    let map = load_map([
        (shops.as_path(), SHOP_KIND),
        (corridors.as_path(), CORRIDOR_KIND),
    ])
    .unwrap();
    assert_eq!(map, three_shop_map());

    let config = DrishtiConfig::from_yaml("sensor:\n  fov_degrees: 30\n").unwrap();
    let (from_files, _, _) = config.index_builder().build_from_map(&map).unwrap();
    let (from_fixture, _, _) = scenario_index();
    assert_eq!(from_files, from_fixture);
}

#[test]
fn saved_index_answers_queries_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.json");
    let (index, _, _) = scenario_index();

    save_index(&index, &path).unwrap();
    let loaded = load_index(&path).unwrap();
    assert_eq!(loaded.metadata(), index.metadata());

    let before = PoseEstimator::new(index).estimate(["alpha", "beta"]);
    let after = PoseEstimator::new(loaded).estimate(["Beta", "Alpha"]);
    assert_eq!(before, after);
}

#[test]
fn unknown_index_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.json");
    fs::write(&path, r#"{"version": 7, "metadata": {}, "entries": []}"#).unwrap();

    assert!(matches!(load_index(&path), Err(Error::IndexFormat(_))));
}

#[test]
fn candidates_render_over_shop_polygons() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("candidates.svg");
    let (index, _, _) = scenario_index();
    let estimate = PoseEstimator::new(index).estimate(["alpha", "beta"]);

    let shops: Vec<_> = three_shop_map()
        .into_iter()
        .filter(|a| !a.is_corridor())
        .collect();
    SvgVisualizer::new(shops, RenderConfig::default())
        .with_title("alpha, beta")
        .with_candidates(estimate.candidate_points())
        .with_heat_layer()
        .save(&path)
        .unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert_eq!(svg.matches("<polygon").count(), 3);
    assert!(svg.contains(r#"id="candidates""#));
    assert!(svg.contains("Gamma"));
}

#[test]
fn shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../configs/drishti.yaml");
    let config = DrishtiConfig::load(&path).unwrap();
    let defaults = DrishtiConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.sensor.to_sensor_config(), defaults.sensor.to_sensor_config());
    assert_eq!(config.grid.to_grid_config(), defaults.grid.to_grid_config());
    assert_eq!(
        config.recognizer.to_recognizer_config(),
        defaults.recognizer.to_recognizer_config()
    );
    assert!(config.index.parallel);
}
