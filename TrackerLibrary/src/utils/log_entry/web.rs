use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebEntry {
    #[error("Unable to bind web service to port {0}: {1}")]
    BindError(u16, String),
    #[error("Error while web service running: {0}")]
    ServiceError(String),
}

impl From<WebEntry> for String {
    #[inline(always)]
    fn from(value: WebEntry) -> Self {
        value.to_string()
    }
}
