use TrackerLibrary::detection::yolo::{decode_predictions, intersection_over_union, suppress_overlaps};
use TrackerLibrary::management::utils::bounding_box::BoundingBox;

const STRIDE: usize = 85;

//One prediction row: [cx, cy, w, h, objectness, class scores...].
fn prediction_row(center_x: f32, center_y: f32, width: f32, height: f32, objectness: f32, class_id: usize, class_score: f32) -> Vec<f32> {
    let mut row = vec![0.0_f32; STRIDE];
    row[0] = center_x;
    row[1] = center_y;
    row[2] = width;
    row[3] = height;
    row[4] = objectness;
    row[5 + class_id] = class_score;
    row
}

fn named_box(xmin: f32, ymin: f32, xmax: f32, ymax: f32, confidence: f32) -> BoundingBox {
    BoundingBox::new(xmin, ymin, xmax, ymax, "person".to_string(), confidence)
}

#[test]
fn decodes_a_confident_prediction_into_pixel_space() {
    let data = prediction_row(320.0, 240.0, 100.0, 200.0, 0.9, 0, 1.0);
    let boxes = decode_predictions(&[1, 1, STRIDE], &data, 0.5, 1.0, 1.0).unwrap();
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].name, "person");
    assert_eq!(boxes[0].xmin, 270.0);
    assert_eq!(boxes[0].xmax, 370.0);
    assert_eq!(boxes[0].ymin, 140.0);
    assert_eq!(boxes[0].ymax, 440.0);
    assert_eq!(boxes[0].x_center(), 320.0);
}

#[test]
fn scales_coordinates_back_to_the_frame() {
    let data = prediction_row(320.0, 320.0, 100.0, 100.0, 1.0, 0, 1.0);
    let boxes = decode_predictions(&[1, 1, STRIDE], &data, 0.5, 0.5, 0.75).unwrap();
    assert_eq!(boxes[0].x_center(), 160.0);
    assert_eq!(boxes[0].width(), 50.0);
    assert_eq!(boxes[0].height(), 75.0);
}

#[test]
fn drops_predictions_below_the_confidence_threshold() {
    let mut data = prediction_row(100.0, 100.0, 50.0, 50.0, 0.4, 0, 1.0);
    data.extend(prediction_row(200.0, 200.0, 50.0, 50.0, 0.9, 0, 0.5));
    let boxes = decode_predictions(&[1, 2, STRIDE], &data, 0.5, 1.0, 1.0).unwrap();
    //0.4 objectness fails the gate; 0.9 * 0.5 fails the combined score.
    assert!(boxes.is_empty());
}

#[test]
fn returns_boxes_sorted_by_descending_confidence() {
    let mut data = prediction_row(100.0, 100.0, 50.0, 50.0, 0.6, 0, 1.0);
    data.extend(prediction_row(300.0, 300.0, 50.0, 50.0, 0.9, 2, 1.0));
    let boxes = decode_predictions(&[1, 2, STRIDE], &data, 0.5, 1.0, 1.0).unwrap();
    assert_eq!(boxes.len(), 2);
    assert!(boxes[0].confidence > boxes[1].confidence);
    assert_eq!(boxes[0].name, "car");
}

#[test]
fn rejects_an_unexpected_output_shape() {
    assert!(decode_predictions(&[1, 1], &[0.0; STRIDE], 0.5, 1.0, 1.0).is_err());
    assert!(decode_predictions(&[1, 2, STRIDE], &[0.0; STRIDE], 0.5, 1.0, 1.0).is_err());
}

#[test]
fn empty_output_decodes_to_no_boxes() {
    let boxes = decode_predictions(&[1, 0, STRIDE], &[], 0.5, 1.0, 1.0).unwrap();
    assert!(boxes.is_empty());
}

#[test]
fn suppression_removes_overlapping_lower_confidence_boxes() {
    let boxes = vec![
        named_box(100.0, 100.0, 200.0, 200.0, 0.9),
        named_box(105.0, 105.0, 205.0, 205.0, 0.8),
        named_box(400.0, 400.0, 500.0, 500.0, 0.7),
    ];
    let kept = suppress_overlaps(boxes, 0.45);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].confidence, 0.9);
    assert_eq!(kept[1].confidence, 0.7);
}

#[test]
fn identical_boxes_have_full_overlap() {
    let first = named_box(10.0, 10.0, 110.0, 110.0, 0.9);
    let second = named_box(10.0, 10.0, 110.0, 110.0, 0.8);
    assert_eq!(intersection_over_union(&first, &second), 1.0);
}

#[test]
fn disjoint_boxes_have_no_overlap() {
    let first = named_box(0.0, 0.0, 50.0, 50.0, 0.9);
    let second = named_box(100.0, 100.0, 150.0, 150.0, 0.8);
    assert_eq!(intersection_over_union(&first, &second), 0.0);
}
