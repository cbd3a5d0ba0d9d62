//! HTTP server for pairdiff.
//!
//! Clients submit the left and right side of a pair under a shared id and
//! then ask for the diff:
//!
//! - `POST /v1/diff/:id/left`, `POST /v1/diff/:id/right` -- submit one side
//! - `GET /v1/diff/:id` -- classify the pair once both sides are present
//! - `GET /v1/health`, `GET /v1/info` -- operational endpoints

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody, ServerError, ServerResult};
pub use handler::{Ack, AppState, HealthResponse};
pub use router::build_router;
pub use server::DiffServer;
