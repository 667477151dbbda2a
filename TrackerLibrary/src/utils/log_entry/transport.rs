use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportEntry {
    #[error("Unable to open serial port {0}: {1}")]
    OpenError(String, String),
    #[error("Unable to write to serial port: {0}")]
    WriteError(String),
    #[error("Unable to flush serial port: {0}")]
    FlushError(String),
}

impl From<TransportEntry> for String {
    #[inline(always)]
    fn from(value: TransportEntry) -> Self {
        value.to_string()
    }
}
