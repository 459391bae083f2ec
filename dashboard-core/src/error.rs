use thiserror::Error;

/// Why a weather fetch did not produce a snapshot.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode the weather payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Connection, DNS, timeout or HTTP status failures.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status { .. })
    }

    /// The body arrived but did not match the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}
