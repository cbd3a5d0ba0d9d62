//! Wire codec for pairdiff submissions.
//!
//! A submission body is the base64 encoding of a JSON object
//! `{"input": "<text>"}`, optionally wrapped in one layer of double quotes.
//! This crate turns such a body into the plain `input` string and back.
//!
//! # Key Items
//!
//! - [`decode_payload`] -- raw request body to `input` text
//! - [`encode_payload`] -- `input` text to a request body
//! - [`CUSTOM_MEDIA_TYPE`] -- media type the submission routes declare

pub mod error;
pub mod payload;

pub use error::{CodecError, CodecResult};
pub use payload::{decode_payload, encode_payload, CUSTOM_MEDIA_TYPE};
