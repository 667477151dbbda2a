use serde::Serialize;
use uuid::Uuid;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU32, AtomicU64, Ordering};
use crate::management::utils::run_parameters::RunParameters;

pub struct RunState {
    running: AtomicBool,
    angle: AtomicI32,
    misses: AtomicU32,
    frames: AtomicU64,
    detected: AtomicBool,
}

impl RunState {
    pub fn new(initial_angle: i32) -> Self {
        Self {
            running: AtomicBool::new(true),
            angle: AtomicI32::new(initial_angle),
            misses: AtomicU32::new(0),
            frames: AtomicU64::new(0),
            detected: AtomicBool::new(false),
        }
    }

    pub fn record(&self, angle: i32, misses: u32, detected: bool, frames: u64) {
        self.angle.store(angle, Ordering::Relaxed);
        self.misses.store(misses, Ordering::Relaxed);
        self.detected.store(detected, Ordering::Relaxed);
        self.frames.store(frames, Ordering::Relaxed);
    }

    pub fn finish(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn angle(&self) -> i32 {
        self.angle.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u32 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn detected(&self) -> bool {
        self.detected.load(Ordering::Relaxed)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct RunStatus {
    pub active: bool,
    pub uuid: Option<Uuid>,
    pub source: Option<i32>,
    pub confidence: Option<f32>,
    pub angle: Option<i32>,
    pub misses: Option<u32>,
    pub frames: Option<u64>,
    pub detected: Option<bool>,
}

impl RunStatus {
    pub fn idle() -> Self {
        Self {
            active: false,
            uuid: None,
            source: None,
            confidence: None,
            angle: None,
            misses: None,
            frames: None,
            detected: None,
        }
    }

    pub fn active(uuid: Uuid, parameters: RunParameters, state: &RunState) -> Self {
        Self {
            active: true,
            uuid: Some(uuid),
            source: Some(parameters.source),
            confidence: Some(parameters.confidence),
            angle: Some(state.angle()),
            misses: Some(state.misses()),
            frames: Some(state.frames()),
            detected: Some(state.detected()),
        }
    }
}
