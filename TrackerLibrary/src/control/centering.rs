use crate::management::utils::bounding_box::BoundingBox;
use crate::utils::config::Config;

pub const MIN_ANGLE: i32 = 0;
pub const MAX_ANGLE: i32 = 180;

#[derive(Debug, Clone, Copy)]
pub struct ControlSettings {
    pub frame_width: i32, //pixels
    pub center_tolerance: i32, //pixels
    pub step_degrees: i32, //degrees per frame
    pub recenter_threshold: u32, //consecutive missed frames
    pub recenter_angle: i32, //degrees
    pub initial_angle: i32, //degrees
}

impl ControlSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            frame_width: config.frame_width as i32,
            center_tolerance: config.center_tolerance as i32,
            step_degrees: config.step_degrees as i32,
            recenter_threshold: config.recenter_threshold,
            recenter_angle: config.recenter_angle as i32,
            initial_angle: config.initial_angle as i32,
        }
    }

    pub fn target_center(&self) -> f32 {
        self.frame_width as f32 / 2.0
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            frame_width: 640,
            center_tolerance: 10,
            step_degrees: 2,
            recenter_threshold: 20,
            recenter_angle: 90,
            initial_angle: 90,
        }
    }
}

pub struct CenteringController {
    settings: ControlSettings,
    angle: i32,
    misses: u32,
}

impl CenteringController {
    pub fn new(settings: ControlSettings) -> Self {
        Self {
            settings,
            angle: settings.initial_angle.clamp(MIN_ANGLE, MAX_ANGLE),
            misses: 0,
        }
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    //Returns the angle to command, or None when no command must be sent this frame.
    pub fn observe(&mut self, boxes: &[BoundingBox]) -> Option<i32> {
        match Self::select_target(boxes) {
            Some(target) => {
                self.misses = 0;
                let center = self.settings.target_center();
                let tolerance = self.settings.center_tolerance as f32;
                let x_center = target.x_center();
                if x_center < center - tolerance {
                    self.angle += self.settings.step_degrees;
                } else if x_center > center + tolerance {
                    self.angle -= self.settings.step_degrees;
                }
                self.angle = self.angle.clamp(MIN_ANGLE, MAX_ANGLE);
                Some(self.angle)
            },
            None => {
                self.misses += 1;
                if self.misses >= self.settings.recenter_threshold {
                    self.misses = 0;
                    self.angle = self.settings.recenter_angle;
                    Some(self.angle)
                } else {
                    None
                }
            },
        }
    }

    //Target selection policy: highest confidence wins, earlier box wins ties.
    pub fn select_target(boxes: &[BoundingBox]) -> Option<&BoundingBox> {
        boxes.iter().reduce(|best, candidate| {
            if candidate.confidence > best.confidence {
                candidate
            } else {
                best
            }
        })
    }
}
