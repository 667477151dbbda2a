use uuid::Uuid;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use std::sync::atomic::{AtomicBool, Ordering};
use opencv::core::{Mat, Point, Rect, Scalar};
use opencv::{highgui, imgproc, videoio};
use opencv::prelude::*;
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::utils::log_entry::capture::CaptureEntry;
use crate::actuator::servo::ServoCommander;
use crate::control::centering::{CenteringController, ControlSettings};
use crate::detection::yolo::{DetectionSource, YoloDetector};
use crate::management::utils::bounding_box::BoundingBox;
use crate::management::utils::run_guard::RunGuard;
use crate::management::utils::run_parameters::RunParameters;
use crate::management::utils::run_state::RunState;

pub struct CaptureLoop;

impl CaptureLoop {
    pub fn run(uuid: Uuid, parameters: RunParameters, config: Config, cancel: Arc<AtomicBool>, state: Arc<RunState>, guard: RunGuard) {
        //The guard holds the single run slot until this worker returns.
        let _guard = guard;
        logging_information!("Capture Loop", format!("Run {uuid}: starting with source {source}, confidence {confidence}.", source = parameters.source, confidence = parameters.confidence));
        match Self::process(&parameters, &config, &cancel, &state) {
            Ok(frames) => logging_information!("Capture Loop", format!("Run {uuid}: finished after {frames} frames.")),
            Err(entry) => logging_entry!(entry),
        }
        state.finish();
    }

    fn process(parameters: &RunParameters, config: &Config, cancel: &AtomicBool, state: &RunState) -> Result<u64, LogEntry> {
        let mut servo = ServoCommander::open(&config.serial_port, config.serial_baud_rate, Duration::from_millis(config.serial_timeout))
            .map_err(|entry| error_entry!("Capture Loop", entry))?;
        let mut detector = YoloDetector::new(Path::new(&config.model_path), config.model_input_size, config.iou_threshold)
            .map_err(|entry| error_entry!("Capture Loop", entry))?;
        let mut capture = videoio::VideoCapture::new(parameters.source, videoio::CAP_ANY)
            .map_err(|err| error_entry!("Capture Loop", CaptureEntry::OpenError(parameters.source), err))?;
        let opened = capture.is_opened()
            .map_err(|err| error_entry!("Capture Loop", CaptureEntry::OpenError(parameters.source), err))?;
        if !opened {
            return Err(error_entry!("Capture Loop", CaptureEntry::OpenError(parameters.source)));
        }
        capture.set(videoio::CAP_PROP_FRAME_WIDTH, config.frame_width as f64)
            .map_err(|err| error_entry!("Capture Loop", CaptureEntry::ConfigureError(parameters.source, err.to_string())))?;
        capture.set(videoio::CAP_PROP_FRAME_HEIGHT, config.frame_height as f64)
            .map_err(|err| error_entry!("Capture Loop", CaptureEntry::ConfigureError(parameters.source, err.to_string())))?;
        logging_information!("Capture Loop", format!("Capture source {} opened.", parameters.source));
        let mut controller = CenteringController::new(ControlSettings::from_config(config));
        let result = Self::track(&mut capture, &mut detector, &mut servo, &mut controller, parameters, config, cancel, state);
        let _ = capture.release();
        let _ = highgui::destroy_window(&config.window_title);
        result
    }

    fn track(capture: &mut videoio::VideoCapture, detector: &mut dyn DetectionSource, servo: &mut ServoCommander,
             controller: &mut CenteringController, parameters: &RunParameters, config: &Config,
             cancel: &AtomicBool, state: &RunState) -> Result<u64, LogEntry>
    {
        let mut frames = 0_u64;
        loop {
            if cancel.load(Ordering::Relaxed) {
                logging_information!("Capture Loop", "Stop requested.");
                break;
            }
            let mut frame = Mat::default();
            let grabbed = capture.read(&mut frame)
                .map_err(|err| error_entry!("Capture Loop", CaptureEntry::ReadError(err.to_string())))?;
            if !grabbed || frame.cols() == 0 {
                return Err(error_entry!("Capture Loop", CaptureEntry::EmptyFrame));
            }
            let boxes = detector.detect(&frame, parameters.confidence)
                .map_err(|entry| error_entry!("Capture Loop", entry))?;
            if let Some(angle) = controller.observe(&boxes) {
                servo.send_angle(angle)
                    .map_err(|entry| error_entry!("Capture Loop", entry))?;
                logging_debug!("Capture Loop", format!("Servo angle: {angle}."));
            }
            frames += 1;
            state.record(controller.angle(), controller.misses(), !boxes.is_empty(), frames);
            Self::annotate(&mut frame, controller.angle(), CenteringController::select_target(&boxes))
                .map_err(|err| error_entry!("Capture Loop", CaptureEntry::DisplayError(err.to_string())))?;
            highgui::imshow(&config.window_title, &frame)
                .map_err(|err| error_entry!("Capture Loop", CaptureEntry::DisplayError(err.to_string())))?;
            let key = highgui::wait_key(1)
                .map_err(|err| error_entry!("Capture Loop", CaptureEntry::DisplayError(err.to_string())))?;
            if key == 'q' as i32 || key == 27 {
                logging_information!("Capture Loop", "Quit key pressed.");
                break;
            }
            std::thread::sleep(Duration::from_micros(config.loop_delay));
        }
        Ok(frames)
    }

    fn annotate(frame: &mut Mat, angle: i32, target: Option<&BoundingBox>) -> Result<(), opencv::Error> {
        let color = Scalar::new(0.0, 255.0, 0.0, 0.0);
        imgproc::put_text(frame, &format!("Angle: {angle}"), Point::new(10, 30),
                          imgproc::FONT_HERSHEY_SIMPLEX, 1.0, color, 2, imgproc::LINE_AA, false)?;
        if let Some(target) = target {
            let rect = Rect::new(target.xmin as i32, target.ymin as i32, target.width() as i32, target.height() as i32);
            imgproc::rectangle(frame, rect, color, 2, imgproc::LINE_8, 0)?;
        }
        Ok(())
    }
}
