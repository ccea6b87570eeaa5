use thiserror::Error;

/// Domain errors visible to loader callers.
///
/// Deliberately coarse: every transport-level failure is `Connectivity`, and
/// everything that goes wrong after a completed transport (unexpected status,
/// undecodable payload) is `InvalidData`. The underlying causes are not
/// forwarded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    #[error("connectivity")]
    Connectivity,
    #[error("invalid data")]
    InvalidData,
}

pub type FeedResult<T> = Result<T, FeedError>;
