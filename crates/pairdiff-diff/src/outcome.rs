//! Classification of a complete pair.

use serde::{Deserialize, Serialize};

use crate::segment::{compute_segments, DiffSegment};

/// Overall verdict for a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffStatus {
    /// Both inputs are equal.
    Equal,
    /// The inputs have different lengths; no segments are computed.
    SizeMismatch,
    /// Same length, different content.
    ContentMismatch,
}

/// Result of comparing the two sides of a pair.
///
/// Which optional fields are present depends on `status`: sizes for
/// [`DiffStatus::SizeMismatch`], segments for
/// [`DiffStatus::ContentMismatch`], neither for [`DiffStatus::Equal`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResponse {
    pub status: DiffStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffs: Option<Vec<DiffSegment>>,
}

impl DiffResponse {
    pub fn equal() -> Self {
        Self {
            status: DiffStatus::Equal,
            message: "inputs were equal".into(),
            left_size: None,
            right_size: None,
            diffs: None,
        }
    }

    pub fn size_mismatch(left_size: usize, right_size: usize) -> Self {
        Self {
            status: DiffStatus::SizeMismatch,
            message: "inputs are of different size".into(),
            left_size: Some(left_size),
            right_size: Some(right_size),
            diffs: None,
        }
    }

    pub fn content_mismatch(diffs: Vec<DiffSegment>) -> Self {
        Self {
            status: DiffStatus::ContentMismatch,
            message: format!("found {} differing segment(s)", diffs.len()),
            left_size: None,
            right_size: None,
            diffs: Some(diffs),
        }
    }

    /// Segments reported, empty unless the content differs.
    pub fn segments(&self) -> &[DiffSegment] {
        self.diffs.as_deref().unwrap_or_default()
    }
}

/// Compare two inputs: equality first, then length, then segment scan.
///
/// Sizes are character counts.
pub fn compare(left: &str, right: &str) -> DiffResponse {
    if left == right {
        return DiffResponse::equal();
    }
    let (left_len, right_len) = (left.chars().count(), right.chars().count());
    if left_len != right_len {
        return DiffResponse::size_mismatch(left_len, right_len);
    }
    DiffResponse::content_mismatch(compute_segments(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_inputs() {
        let resp = compare("hello", "hello");
        assert_eq!(resp.status, DiffStatus::Equal);
        assert_eq!(resp.message, "inputs were equal");
        assert!(resp.segments().is_empty());
        assert_eq!(resp.left_size, None);
    }

    #[test]
    fn size_mismatch_reports_both_lengths() {
        let resp = compare("abc", "abcd");
        assert_eq!(resp.status, DiffStatus::SizeMismatch);
        assert_eq!(resp.left_size, Some(3));
        assert_eq!(resp.right_size, Some(4));
        assert_eq!(resp.diffs, None);
    }

    #[test]
    fn content_mismatch_lists_segments() {
        let resp = compare("abcdef", "abXdZf");
        assert_eq!(resp.status, DiffStatus::ContentMismatch);
        assert_eq!(resp.message, "found 2 differing segment(s)");
        assert_eq!(
            resp.segments(),
            &[DiffSegment::aligned(2, 1), DiffSegment::aligned(4, 1)]
        );
    }

    #[test]
    fn empty_and_non_empty_is_size_mismatch() {
        let resp = compare("", "a");
        assert_eq!(resp.status, DiffStatus::SizeMismatch);
        assert_eq!(resp.left_size, Some(0));
    }

    #[test]
    fn sizes_count_characters() {
        let resp = compare("日本", "abc");
        assert_eq!(resp.status, DiffStatus::SizeMismatch);
        assert_eq!(resp.left_size, Some(2));
        assert_eq!(resp.right_size, Some(3));
    }

    #[test]
    fn same_character_count_is_content_mismatch() {
        let resp = compare("é", "e");
        assert_eq!(resp.status, DiffStatus::ContentMismatch);
        assert_eq!(resp.segments(), &[DiffSegment::aligned(0, 1)]);

        let resp = compare("aéb", "aèb");
        assert_eq!(resp.segments(), &[DiffSegment::aligned(1, 1)]);
    }

    #[test]
    fn equal_json_shape() {
        let json = serde_json::to_value(compare("x", "x")).unwrap();
        assert_eq!(json, json!({ "status": "Equal", "message": "inputs were equal" }));
    }

    #[test]
    fn size_mismatch_json_shape() {
        let json = serde_json::to_value(compare("abc", "abcd")).unwrap();
        assert_eq!(
            json,
            json!({
                "status": "SizeMismatch",
                "message": "inputs are of different size",
                "leftSize": 3,
                "rightSize": 4,
            })
        );
    }

    #[test]
    fn content_mismatch_json_shape() {
        let json = serde_json::to_value(compare("ab", "aX")).unwrap();
        assert_eq!(json["status"], "ContentMismatch");
        assert_eq!(json["diffs"][0]["offsetLeft"], 1);
        assert_eq!(json["diffs"][0]["lengthRight"], 1);
        assert!(json.get("leftSize").is_none());
    }

    #[test]
    fn response_deserializes_back() {
        let resp = compare("abcdef", "abXdZf");
        let text = serde_json::to_string(&resp).unwrap();
        let back: DiffResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(back, resp);
    }
}
