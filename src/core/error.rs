use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Normalization itself never fails on malformed cells; these variants cover
/// usage errors and payloads that cannot be resolved at the entry boundary.
#[derive(Debug, Error)]
pub enum FmpError {
    /// A caller-supplied argument was rejected before any data was touched
    /// (negative precision, duplicate field names).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The payload was not a record or a sequence of records.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// The payload text could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
