//! Error types for the codec crate.

/// Reasons a submission body could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The body was empty or contained only whitespace.
    #[error("empty body")]
    EmptyBody,

    /// The body (or the base64 payload inside it) was not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The body was not valid base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded payload was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was not an object with a string `input` field.
    #[error("missing string field `input`")]
    MissingInput,
}

/// Convenience alias for codec results.
pub type CodecResult<T> = Result<T, CodecError>;
