use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct RunParameters {
    pub source: i32,
    pub confidence: f32,
}

impl RunParameters {
    pub fn new(source: i32, confidence: f32) -> Self {
        Self {
            source,
            confidence,
        }
    }

    pub fn validate(&self) -> bool {
        self.source >= 0 && self.confidence >= 0.0 && self.confidence <= 1.0
    }
}
