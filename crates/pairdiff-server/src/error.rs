use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pairdiff_codec::CodecError;

/// Failures starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Client errors returned by the diff endpoints.
///
/// The `Display` text is the message sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submission body could not be decoded.
    #[error("Body must be base64 of {{\"input\":\"...\"}}.")]
    Decode(#[from] CodecError),

    /// The request body could not be read, e.g. it exceeded the size limit.
    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),

    /// The decoded `input` was empty.
    #[error("\"input\" required.")]
    EmptyInput,

    /// A diff was requested before both sides were submitted.
    #[error("Need both sides.")]
    IncompletePair,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Decode(_) | ApiError::EmptyInput | ApiError::IncompletePair => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Decode(cause) => tracing::debug!(%cause, "rejecting undecodable body"),
            other => tracing::debug!(error = %other, "rejecting request"),
        }
        let body = ErrorBody { message: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
