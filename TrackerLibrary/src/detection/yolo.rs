//! YOLO object detection backed by an ONNX session.

use std::path::Path;
use opencv::core::{Mat, Size, Vec3f, CV_32F};
use opencv::imgproc;
use opencv::prelude::*;
use ort::inputs;
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::Tensor;
use crate::management::utils::bounding_box::BoundingBox;
use crate::utils::log_entry::detect::DetectEntry;

pub const COCO_CLASSES: &[&str] = &[
    "person", "bicycle", "car", "motorcycle", "airplane", "bus", "train", "truck", "boat",
    "traffic light", "fire hydrant", "stop sign", "parking meter", "bench", "bird", "cat",
    "dog", "horse", "sheep", "cow", "elephant", "bear", "zebra", "giraffe", "backpack",
    "umbrella", "handbag", "tie", "suitcase", "frisbee", "skis", "snowboard", "sports ball",
    "kite", "baseball bat", "baseball glove", "skateboard", "surfboard", "tennis racket",
    "bottle", "wine glass", "cup", "fork", "knife", "spoon", "bowl", "banana", "apple",
    "sandwich", "orange", "broccoli", "carrot", "hot dog", "pizza", "donut", "cake", "chair",
    "couch", "potted plant", "bed", "dining table", "toilet", "tv", "laptop", "mouse",
    "remote", "keyboard", "cell phone", "microwave", "oven", "toaster", "sink", "refrigerator",
    "book", "clock", "vase", "scissors", "teddy bear", "hair drier", "toothbrush",
];

pub trait DetectionSource: Send {
    fn detect(&mut self, frame: &Mat, confidence: f32) -> Result<Vec<BoundingBox>, DetectEntry>;
}

pub struct YoloDetector {
    session: Session,
    input_size: i32,
    iou_threshold: f32,
}

impl YoloDetector {
    pub fn new(model_path: &Path, input_size: u32, iou_threshold: f32) -> Result<Self, DetectEntry> {
        let session = Session::builder()
            .map_err(|err| DetectEntry::ModelLoadError(model_path.display().to_string(), err.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|err| DetectEntry::ModelLoadError(model_path.display().to_string(), err.to_string()))?
            .commit_from_file(model_path)
            .map_err(|err| DetectEntry::ModelLoadError(model_path.display().to_string(), err.to_string()))?;
        Ok(Self {
            session,
            input_size: input_size as i32,
            iou_threshold,
        })
    }

    //Resize to the model input size, BGR to RGB, [0,1] floats, CHW layout.
    fn preprocess(&self, frame: &Mat) -> Result<Vec<f32>, DetectEntry> {
        let mut resized = Mat::default();
        imgproc::resize(frame, &mut resized, Size::new(self.input_size, self.input_size), 0.0, 0.0, imgproc::INTER_LINEAR)
            .map_err(|err| DetectEntry::PreprocessError(err.to_string()))?;
        let mut rgb = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb, imgproc::COLOR_BGR2RGB, 0)
            .map_err(|err| DetectEntry::PreprocessError(err.to_string()))?;
        let mut scaled = Mat::default();
        rgb.convert_to(&mut scaled, CV_32F, 1.0 / 255.0, 0.0)
            .map_err(|err| DetectEntry::PreprocessError(err.to_string()))?;
        let plane = (self.input_size * self.input_size) as usize;
        let mut tensor = vec![0.0_f32; plane * 3];
        for row in 0..self.input_size {
            for col in 0..self.input_size {
                let pixel = scaled.at_2d::<Vec3f>(row, col)
                    .map_err(|err| DetectEntry::PreprocessError(err.to_string()))?;
                let index = (row * self.input_size + col) as usize;
                tensor[index] = pixel[0];
                tensor[plane + index] = pixel[1];
                tensor[2 * plane + index] = pixel[2];
            }
        }
        Ok(tensor)
    }
}

impl DetectionSource for YoloDetector {
    fn detect(&mut self, frame: &Mat, confidence: f32) -> Result<Vec<BoundingBox>, DetectEntry> {
        let scale_x = frame.cols() as f32 / self.input_size as f32;
        let scale_y = frame.rows() as f32 / self.input_size as f32;
        let tensor = self.preprocess(frame)?;
        let input = Tensor::from_array(([1_usize, 3, self.input_size as usize, self.input_size as usize], tensor))
            .map_err(|err| DetectEntry::InferenceError(err.to_string()))?;
        let outputs = self.session.run(inputs!["images" => input])
            .map_err(|err| DetectEntry::InferenceError(err.to_string()))?;
        if outputs.len() == 0 {
            //No output at all counts as an empty detection result, not an error.
            return Ok(Vec::new());
        }
        let (shape, data) = outputs["output0"].try_extract_tensor::<f32>()
            .map_err(|err| DetectEntry::DecodeError(err.to_string()))?;
        let shape = shape.iter().map(|&dimension| dimension as usize).collect::<Vec<_>>();
        let boxes = decode_predictions(&shape, data, confidence, scale_x, scale_y)?;
        Ok(suppress_overlaps(boxes, self.iou_threshold))
    }
}

//Rows of [cx, cy, w, h, objectness, class scores...], coordinates in model input space.
pub fn decode_predictions(shape: &[usize], data: &[f32], confidence_threshold: f32, scale_x: f32, scale_y: f32) -> Result<Vec<BoundingBox>, DetectEntry> {
    if shape.len() != 3 || shape[0] != 1 {
        return Err(DetectEntry::DecodeError(format!("Unexpected output shape {:?}", shape)));
    }
    let rows = shape[1];
    let stride = shape[2];
    if stride < 6 || data.len() < rows * stride {
        return Err(DetectEntry::DecodeError(format!("Output tensor too small for shape {:?}", shape)));
    }
    let mut boxes = Vec::new();
    for row in 0..rows {
        let prediction = &data[row * stride..(row + 1) * stride];
        let objectness = prediction[4];
        if objectness < confidence_threshold {
            continue;
        }
        let (class_id, class_score) = prediction[5..].iter().enumerate()
            .fold((0_usize, 0.0_f32), |best, (index, &score)| {
                if score > best.1 {
                    (index, score)
                } else {
                    best
                }
            });
        let confidence = objectness * class_score;
        if confidence < confidence_threshold {
            continue;
        }
        let center_x = prediction[0] * scale_x;
        let center_y = prediction[1] * scale_y;
        let half_width = prediction[2] * scale_x / 2.0;
        let half_height = prediction[3] * scale_y / 2.0;
        let name = COCO_CLASSES.get(class_id).unwrap_or(&"object").to_string();
        boxes.push(BoundingBox::new(
            (center_x - half_width).max(0.0),
            (center_y - half_height).max(0.0),
            center_x + half_width,
            center_y + half_height,
            name,
            confidence,
        ));
    }
    boxes.sort_by(|first, second| second.confidence.total_cmp(&first.confidence));
    Ok(boxes)
}

//Greedy non-maximum suppression, boxes already sorted by descending confidence.
pub fn suppress_overlaps(boxes: Vec<BoundingBox>, iou_threshold: f32) -> Vec<BoundingBox> {
    let mut kept: Vec<BoundingBox> = Vec::new();
    for candidate in boxes {
        let overlapped = kept.iter().any(|survivor| intersection_over_union(survivor, &candidate) > iou_threshold);
        if !overlapped {
            kept.push(candidate);
        }
    }
    kept
}

pub fn intersection_over_union(first: &BoundingBox, second: &BoundingBox) -> f32 {
    let xmin = first.xmin.max(second.xmin);
    let ymin = first.ymin.max(second.ymin);
    let xmax = first.xmax.min(second.xmax);
    let ymax = first.ymax.min(second.ymax);
    let intersection = (xmax - xmin).max(0.0) * (ymax - ymin).max(0.0);
    let union = first.area() + second.area() - intersection;
    if union <= 0.0 {
        0.0
    } else {
        intersection / union
    }
}
