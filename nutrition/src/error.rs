use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("remote responded with status {0}")]
    Status(StatusCode),

    #[error("remote payload malformed: {0}")]
    Malformed(String),

    #[error("outbound rate limit reached")]
    RateLimited,

    #[error("invalid upload: {0}")]
    InvalidUpload(String),
}

impl RemoteError {
    /// Whether the provider could not be reached or refused to answer, as opposed to answering
    /// with something we could not use.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RemoteError::Unavailable(_) | RemoteError::Status(_) | RemoteError::RateLimited
        )
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Malformed(err.to_string())
    }
}
