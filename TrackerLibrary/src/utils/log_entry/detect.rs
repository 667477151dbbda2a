use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectEntry {
    #[error("Unable to load model {0}: {1}")]
    ModelLoadError(String, String),
    #[error("Unable to preprocess frame: {0}")]
    PreprocessError(String),
    #[error("Inference failed: {0}")]
    InferenceError(String),
    #[error("Unable to decode model output: {0}")]
    DecodeError(String),
}

impl From<DetectEntry> for String {
    #[inline(always)]
    fn from(value: DetectEntry) -> Self {
        value.to_string()
    }
}
