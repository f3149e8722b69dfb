use reqwest::StatusCode;
use thiserror::Error;

/// A failed VTEX API call.
#[derive(Debug, Error)]
pub enum VtexError {
    /// The server answered with a non-2xx status.
    #[error("request to {url} returned status {status}")]
    Status { status: StatusCode, url: String },

    /// The app key or token contains bytes not allowed in a header value.
    #[error("credential is not a valid header value: {0}")]
    InvalidCredentials(#[from] reqwest::header::InvalidHeaderValue),

    /// Connection, timeout or body-decoding failure.
    #[error("VTEX request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl VtexError {
    /// The HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            VtexError::Status { status, .. } => Some(*status),
            VtexError::Transport(err) => err.status(),
            VtexError::InvalidCredentials(_) => None,
        }
    }
}
