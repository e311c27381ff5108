//! End-to-end localization on the three-shop venue.

use drishti::recognition::{RecordedRecognizer, ShopRecognizer};
use drishti::{PoseEstimator, PoseSample, Signature, VisibilitySensor, WorldPoint};

use super::common::{scenario_index, scenario_sensor};

#[test]
fn heading_straddling_shop_boundary_sees_both_shops() {
    let (index, grid, bounds) = scenario_index();
    let sensor = VisibilitySensor::new(&grid, &bounds, scenario_sensor()).unwrap();

    let signature = sensor.signature(WorldPoint::new(30.0, 30.0), 75.0);
    assert_eq!(signature, Signature::from_labels(["alpha", "beta"]));

    let poses = index.get(&signature).unwrap();
    assert!(poses.contains(&PoseSample::new(30, 30, 75.0)));
}

#[test]
fn heading_away_from_shops_is_retained_as_empty() {
    let (index, grid, bounds) = scenario_index();
    let sensor = VisibilitySensor::new(&grid, &bounds, scenario_sensor()).unwrap();

    assert!(sensor.signature(WorldPoint::new(30.0, 30.0), 255.0).is_empty());
    let empty = index.get(&Signature::empty()).unwrap();
    assert!(empty.contains(&PoseSample::new(30, 30, 255.0)));
}

#[test]
fn index_covers_every_origin_and_heading() {
    let (index, _, _) = scenario_index();
    // 3 corridor vertices x 24 headings
    assert_eq!(index.metadata().origin_count, 3);
    assert_eq!(index.pose_count(), 72);
}

#[test]
fn recognized_photo_localizes_to_stored_poses() {
    let (index, _, _) = scenario_index();
    let expected = index
        .get(&Signature::from_labels(["alpha", "beta"]))
        .unwrap()
        .to_vec();
    let estimator = PoseEstimator::new(index);

    let recognizer =
        RecordedRecognizer::new(r#"[{"shop_name": "BETA"}, {"shop_name": "shop:Alpha|"}]"#);
    let names = recognizer.detect(b"\xff\xd8", "image/jpeg").unwrap();
    let estimate = estimator.estimate(&names);

    assert!(estimate.is_found());
    assert_eq!(estimate.poses(), expected.as_slice());
    assert!(
        estimate
            .candidate_points()
            .contains(&WorldPoint::new(30.0, 30.0))
    );
}

#[test]
fn unseen_combination_is_not_found() {
    let (index, _, _) = scenario_index();
    let estimate = PoseEstimator::new(index).estimate(["alpha", "gamma", "delta"]);
    assert!(!estimate.is_found());
    assert!(estimate.candidate_points().is_empty());
}

#[test]
fn concurrent_lookups_share_one_index() {
    let (index, _, _) = scenario_index();
    let estimator = PoseEstimator::new(index);

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let estimator = estimator.clone();
                scope.spawn(move || estimator.estimate(["alpha", "beta"]).poses().len())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(counts.iter().all(|&n| n == counts[0] && n > 0));
}
