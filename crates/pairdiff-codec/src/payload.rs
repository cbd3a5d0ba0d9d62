//! Submission payload decoding and encoding.
//!
//! Decoding steps, in order: UTF-8 text (a leading BOM is dropped),
//! whitespace trim, optional removal of one surrounding pair of double
//! quotes, base64 with embedded whitespace ignored, UTF-8, JSON, and finally
//! lookup of the `input` field (key matched ASCII case-insensitively).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{Map, Value};

use crate::error::{CodecError, CodecResult};

/// Media type the submission routes declare for their raw body.
///
/// Advisory only: the body is always read as text whatever the request's
/// `Content-Type` says.
pub const CUSTOM_MEDIA_TYPE: &str = "application/custom";

const INPUT_FIELD: &str = "input";

const BOM: char = '\u{feff}';

/// Decode a raw submission body into its `input` string.
///
/// The returned string may be empty; rejecting empty input is left to the
/// caller.
pub fn decode_payload(body: &[u8]) -> CodecResult<String> {
    let text = std::str::from_utf8(body)?;
    let text = text.strip_prefix(BOM).unwrap_or(text).trim();
    if text.is_empty() {
        return Err(CodecError::EmptyBody);
    }

    let bytes = STANDARD.decode(without_whitespace(strip_quotes(text)))?;
    let json = std::str::from_utf8(&bytes)?;
    let value: Value = serde_json::from_str(json)?;

    match value {
        Value::Object(map) => extract_input(map),
        _ => Err(CodecError::MissingInput),
    }
}

/// Encode `input` as a submission body accepted by [`decode_payload`].
pub fn encode_payload(input: &str) -> String {
    let json = serde_json::json!({ INPUT_FIELD: input }).to_string();
    STANDARD.encode(json)
}

/// Remove exactly one layer of surrounding double quotes, if present.
fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Wrapped base64 (e.g. 76-column lines) decodes as if on one line.
fn without_whitespace(text: &str) -> Vec<u8> {
    text.bytes().filter(|b| !b.is_ascii_whitespace()).collect()
}

/// An exact `input` key wins; otherwise the first key equal to it ignoring
/// ASCII case, in the map's (sorted) key order.
fn extract_input(mut map: Map<String, Value>) -> CodecResult<String> {
    let value = match map.remove(INPUT_FIELD) {
        Some(value) => value,
        None => map
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(INPUT_FIELD))
            .map(|(_, value)| value)
            .ok_or(CodecError::MissingInput)?,
    };

    match value {
        Value::String(input) => Ok(input),
        _ => Err(CodecError::MissingInput),
    }
}
