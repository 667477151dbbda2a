use TrackerLibrary::control::centering::{CenteringController, ControlSettings, MAX_ANGLE, MIN_ANGLE};
use TrackerLibrary::management::utils::bounding_box::BoundingBox;

fn detection(xmin: f32, xmax: f32, confidence: f32) -> BoundingBox {
    BoundingBox::new(xmin, 100.0, xmax, 300.0, "person".to_string(), confidence)
}

fn settings_with_initial_angle(initial_angle: i32) -> ControlSettings {
    ControlSettings {
        initial_angle,
        ..ControlSettings::default()
    }
}

#[test]
fn angle_stays_within_range_for_any_starting_angle() {
    let far_left = [detection(0.0, 20.0, 0.9)];
    let far_right = [detection(620.0, 640.0, 0.9)];
    for start in MIN_ANGLE..=MAX_ANGLE {
        let mut controller = CenteringController::new(settings_with_initial_angle(start));
        let commanded = controller.observe(&far_left).unwrap();
        assert!((MIN_ANGLE..=MAX_ANGLE).contains(&commanded));
        let mut controller = CenteringController::new(settings_with_initial_angle(start));
        let commanded = controller.observe(&far_right).unwrap();
        assert!((MIN_ANGLE..=MAX_ANGLE).contains(&commanded));
    }
}

#[test]
fn nineteen_misses_followed_by_detection_does_not_recenter() {
    let mut controller = CenteringController::new(settings_with_initial_angle(120));
    for _ in 0..19 {
        assert_eq!(controller.observe(&[]), None);
    }
    assert_eq!(controller.angle(), 120);
    assert_eq!(controller.misses(), 19);
    //The detection resets the counter before it can reach the threshold.
    let commanded = controller.observe(&[detection(300.0, 340.0, 0.9)]);
    assert_eq!(commanded, Some(120));
    assert_eq!(controller.misses(), 0);
}

#[test]
fn twentieth_consecutive_miss_recenters_and_resets_counter() {
    let mut controller = CenteringController::new(settings_with_initial_angle(140));
    for _ in 0..19 {
        assert_eq!(controller.observe(&[]), None);
    }
    assert_eq!(controller.observe(&[]), Some(90));
    assert_eq!(controller.angle(), 90);
    assert_eq!(controller.misses(), 0);
}

#[test]
fn dead_band_boundaries_are_inclusive() {
    //Center 320, tolerance 10: midpoints 310 and 330 must not move the servo.
    let mut controller = CenteringController::new(settings_with_initial_angle(90));
    assert_eq!(controller.observe(&[detection(300.0, 320.0, 0.9)]), Some(90));
    assert_eq!(controller.observe(&[detection(320.0, 340.0, 0.9)]), Some(90));
}

#[test]
fn midpoint_left_of_dead_band_increases_angle() {
    let mut controller = CenteringController::new(settings_with_initial_angle(90));
    //Midpoint 309.
    assert_eq!(controller.observe(&[detection(300.0, 318.0, 0.9)]), Some(92));
}

#[test]
fn midpoint_right_of_dead_band_decreases_angle() {
    let mut controller = CenteringController::new(settings_with_initial_angle(90));
    //Midpoint 331.
    assert_eq!(controller.observe(&[detection(322.0, 340.0, 0.9)]), Some(88));
}

#[test]
fn persistent_left_detection_ramps_to_the_clamp() {
    let mut controller = CenteringController::new(settings_with_initial_angle(0));
    let left = [detection(50.0, 150.0, 0.9)];
    for frame in 1..=90 {
        assert_eq!(controller.observe(&left), Some(frame * 2));
    }
    for _ in 0..10 {
        assert_eq!(controller.observe(&left), Some(MAX_ANGLE));
    }
}

#[test]
fn command_is_issued_on_every_detected_frame_even_without_movement() {
    let mut controller = CenteringController::new(settings_with_initial_angle(90));
    let centered = [detection(310.0, 330.0, 0.9)];
    for _ in 0..5 {
        assert_eq!(controller.observe(&centered), Some(90));
    }
}

#[test]
fn twenty_five_frame_scenario_recenters_on_the_last_frame() {
    let mut controller = CenteringController::new(settings_with_initial_angle(90));
    let left = [detection(50.0, 150.0, 0.9)];
    //Frames 1-5: detected left of center, two degrees per frame.
    for frame in 1..=5 {
        assert_eq!(controller.observe(&left), Some(90 + frame * 2));
    }
    assert_eq!(controller.angle(), 100);
    //Frames 6-24: nineteen silent misses.
    for _ in 6..=24 {
        assert_eq!(controller.observe(&[]), None);
        assert_eq!(controller.angle(), 100);
    }
    //Frame 25 is the twentieth consecutive miss.
    assert_eq!(controller.observe(&[]), Some(90));
}

#[test]
fn target_selection_prefers_highest_confidence() {
    let boxes = [
        detection(0.0, 50.0, 0.4),
        detection(200.0, 250.0, 0.8),
        detection(400.0, 450.0, 0.6),
    ];
    let target = CenteringController::select_target(&boxes).unwrap();
    assert_eq!(target.confidence, 0.8);
}

#[test]
fn target_selection_prefers_earlier_box_on_tied_confidence() {
    let boxes = [
        detection(0.0, 50.0, 0.7),
        detection(200.0, 250.0, 0.7),
    ];
    let target = CenteringController::select_target(&boxes).unwrap();
    assert_eq!(target.x_center(), 25.0);
}

#[test]
fn no_target_without_detections() {
    assert!(CenteringController::select_target(&[]).is_none());
}
