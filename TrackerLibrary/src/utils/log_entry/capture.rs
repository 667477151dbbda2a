use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureEntry {
    #[error("Unable to open capture source {0}")]
    OpenError(i32),
    #[error("Unable to configure capture source {0}: {1}")]
    ConfigureError(i32, String),
    #[error("Unable to read frame from capture source: {0}")]
    ReadError(String),
    #[error("Capture source produced an empty frame")]
    EmptyFrame,
    #[error("Unable to render display window: {0}")]
    DisplayError(String),
}

impl From<CaptureEntry> for String {
    #[inline(always)]
    fn from(value: CaptureEntry) -> Self {
        value.to_string()
    }
}
