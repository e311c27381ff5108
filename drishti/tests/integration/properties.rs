//! Map-independent properties of rasterization, sensing and indexing.

use drishti::core::{CORRIDOR_KIND, SHOP_KIND};
use drishti::grid::GridRasterizer;
use drishti::index::IndexConfig;
use drishti::{
    Annotation, GridCoord, IndexBuilder, RegionLabel, SensorConfig, Signature, VisibilitySensor,
    WorldPoint, build_grid, normalize_shop_name,
};

use super::common::{corridors, rect, scenario_builder, three_shop_map};

fn concave_polygon() -> Annotation {
    // Comb with three teeth and a notch that crosses cell centers
    Annotation::from_points(
        &[
            (0.3, 0.2),
            (17.7, 0.2),
            (17.7, 11.4),
            (14.1, 11.4),
            (14.1, 4.5),
            (11.2, 4.5),
            (11.2, 9.9),
            (6.6, 9.9),
            (6.6, 4.5),
            (3.5, 4.5),
            (3.5, 13.25),
            (0.3, 13.25),
        ],
        "Comb",
        SHOP_KIND,
    )
}

#[test]
fn rasterized_cells_agree_with_point_in_polygon() {
    let shapes = [
        concave_polygon(),
        Annotation::from_points(&[(2.0, 1.0), (19.5, 7.25), (4.5, 15.0)], "Tri", SHOP_KIND),
    ];
    for resolution in [1.0, 0.5, 0.3] {
        for shape in &shapes {
            let (grid, bounds) = build_grid(std::slice::from_ref(shape), resolution).unwrap();
            for y in 0..bounds.height as i32 {
                for x in 0..bounds.width as i32 {
                    let coord = GridCoord::new(x, y);
                    let center = bounds.grid_to_world(coord);
                    let inside = shape.polygon.contains(center);
                    let labeled = !grid.get(coord).unwrap().is_background();
                    assert_eq!(
                        inside, labeled,
                        "{} at res {} cell {:?} center {:?}",
                        shape.label, resolution, coord, center
                    );
                }
            }
        }
    }
}

#[test]
fn later_polygon_wins_overlap() {
    let map = vec![
        rect(0.0, 0.0, 10.0, 10.0, "First", SHOP_KIND),
        rect(5.0, 5.0, 15.0, 15.0, "Second", SHOP_KIND),
    ];
    let (grid, bounds) = build_grid(&map, 1.0).unwrap();

    let overlap = bounds.world_to_grid(WorldPoint::new(7.5, 7.5));
    let first_only = bounds.world_to_grid(WorldPoint::new(2.5, 2.5));
    assert_eq!(grid.get(overlap), Some(&RegionLabel::region(SHOP_KIND, "Second")));
    assert_eq!(grid.get(first_only), Some(&RegionLabel::region(SHOP_KIND, "First")));

    let reversed: Vec<_> = map.into_iter().rev().collect();
    let (grid, _) = build_grid(&reversed, 1.0).unwrap();
    assert_eq!(grid.get(overlap), Some(&RegionLabel::region(SHOP_KIND, "First")));
}

#[test]
fn nearer_region_occludes_farther_on_same_bearing() {
    let map = vec![
        rect(-2.0, -2.0, 30.0, 2.0, "hall", CORRIDOR_KIND),
        rect(5.0, -1.0, 7.0, 1.0, "Kiosk", SHOP_KIND),
        rect(15.0, -10.0, 20.0, 10.0, "Anchor", SHOP_KIND),
    ];
    let (grid, bounds) = build_grid(&map, 1.0).unwrap();
    let narrow = SensorConfig {
        fov_degrees: 2.0,
        angular_samples: 5,
        ..SensorConfig::with_fov(2.0, 50)
    };
    let sensor = VisibilitySensor::new(&grid, &bounds, narrow).unwrap();

    // Heading 359 sweeps 359..361, straight through the kiosk
    let seen = sensor.sample(WorldPoint::new(0.0, 0.0), 359.0);
    assert!(seen.contains("shop:Kiosk"));
    assert!(!seen.contains("shop:Anchor"));
}

#[test]
fn index_build_is_deterministic() {
    let map = three_shop_map();
    let (a, _, _) = scenario_builder(false).build_from_map(&map).unwrap();
    let (b, _, _) = scenario_builder(false).build_from_map(&map).unwrap();
    let (c, _, _) = scenario_builder(true).build_from_map(&map).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn every_stored_pose_reproduces_its_signature() {
    let map = three_shop_map();
    let builder = IndexBuilder::new(
        SensorConfig::with_fov(60.0, 50),
        IndexConfig {
            edge_subdivisions: 3,
            ..IndexConfig::with_heading_step(7.0)
        },
    );
    let (index, grid, bounds) = builder.build_from_map(&map).unwrap();
    let sensor = VisibilitySensor::new(&grid, &bounds, builder.sensor_config().clone()).unwrap();

    assert!(index.metadata().origin_count > 3);
    for (signature, poses) in index.iter() {
        for pose in poses {
            assert_eq!(&sensor.signature(pose.position(), pose.heading as f64), signature);
        }
    }
}

#[test]
fn query_normalization_matches_build_normalization() {
    let map = vec![
        rect(0.0, 10.0, 10.0, 20.0, "Foo|Bar/", SHOP_KIND),
        rect(-5.0, -5.0, 5.0, 5.0, "hall", CORRIDOR_KIND),
    ];
    let (grid, bounds) = GridRasterizer::default().rasterize(&map).unwrap();
    let index = drishti::build_index(&corridors(&map), &grid, &bounds, 15.0, 90.0, 50).unwrap();

    let observed = Signature::from_labels(["FOO   bar"]);
    assert_eq!(observed.names(), &[normalize_shop_name("shop:Foo|Bar/")]);
    assert!(index.get(&observed).is_some());
}

#[test]
fn normalization_is_idempotent() {
    for raw in ["shop:Foo|Bar/", "  MIXED case  ", "shop: shop:x", "a/b|c", ""] {
        let once = normalize_shop_name(raw);
        assert_eq!(normalize_shop_name(&once), once);
    }
    assert_eq!(normalize_shop_name("shop:Foo|Bar/"), normalize_shop_name("foo bar"));
}
