use std::time::Duration;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("scheme is not supported: {0}")]
    SchemeNotSupported(String),
    #[error("invalid host: {0:?}")]
    InvalidHost(String),
    #[error("credentials must include both username and password")]
    IncompleteCredentials,
    #[error("backend error: {0}")]
    Backend(String),
    #[error("backend did not respond within {0:?}")]
    BackendTimeout(Duration),
    #[error("malformed backend response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
