use thiserror::Error;

/// Centralized error type for tidings-net.
///
/// Transport-level failures only: reaching the server, resolving the name,
/// reading the body. A response with a non-success status is not an error at
/// this layer.
#[derive(Debug, Error, Clone)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("Timeout")]
    Timeout,
}

impl HttpError {
    /// Creates a transport error from a generic message
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a transport error from a reqwest error, classifying timeouts
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(error.to_string())
        }
    }

    /// Checks if this error indicates a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Timeout)
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        Self::from_reqwest(error)
    }
}

pub type HttpResult<T> = Result<T, HttpError>;
