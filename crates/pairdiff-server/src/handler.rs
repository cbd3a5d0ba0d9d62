use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use serde_json::json;

use pairdiff_codec::{decode_payload, CUSTOM_MEDIA_TYPE};
use pairdiff_diff::{compare, DiffResponse};
use pairdiff_store::{PairStore, Side};

use crate::error::ApiError;

/// Bytes escaped when an id is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PairStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PairStore>) -> Self {
        Self { store }
    }
}

/// Body of an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub id: String,
    pub side: Side,
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// POST /v1/diff/:id/left
pub async fn submit_left(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    submit(&state, id, Side::Left, &body?)
}

/// POST /v1/diff/:id/right
pub async fn submit_right(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    submit(&state, id, Side::Right, &body?)
}

/// Decode and validate a submission, then store it. Nothing is written
/// unless the body is valid.
fn submit(state: &AppState, id: String, side: Side, body: &[u8]) -> Result<Response, ApiError> {
    let input = decode_payload(body)?;
    if input.is_empty() {
        return Err(ApiError::EmptyInput);
    }

    let size = input.len();
    state.store.set(&id, side, input);
    tracing::info!(id = %id, %side, size, "accepted submission");

    let location = diff_location(&id);
    let mut response = (StatusCode::ACCEPTED, Json(Ack { id, side })).into_response();
    // Percent-encoded text is visible ASCII, which is always a valid header value.
    if let Ok(location) = HeaderValue::from_str(&location) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    Ok(response)
}

/// Path of the diff resource for `id`.
pub fn diff_location(id: &str) -> String {
    format!("/v1/diff/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// GET /v1/diff/:id
pub async fn get_diff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DiffResponse>, ApiError> {
    let pair = state.store.get_pair(&id);
    let (left, right) = pair.both().ok_or(ApiError::IncompletePair)?;

    let response = compare(left, right);
    tracing::debug!(id = %id, status = ?response.status, "classified pair");
    Ok(Json(response))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "pairdiff",
        "version": env!("CARGO_PKG_VERSION"),
        "accepts": CUSTOM_MEDIA_TYPE,
    }))
}
