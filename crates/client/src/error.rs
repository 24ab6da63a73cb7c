use thiserror::Error;

/// Transport and decoding failures from the analytics API.
///
/// Everything here reaches the caller untouched: the client performs no
/// retries, and none of these are fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, dropped socket).
    #[error("network error: unable to reach API: {0}")]
    Connectivity(String),

    /// The server answered with a non-success status.
    #[error("API request rejected ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode API response: {0}")]
    Decode(String),
}
