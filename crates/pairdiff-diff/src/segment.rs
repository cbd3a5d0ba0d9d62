//! Segment scan over two equal-length inputs.
//!
//! Positions are character (`char`) offsets. A segment is a maximal run of
//! positions where the inputs disagree; runs separated by even one agreeing
//! position are reported separately.

use serde::{Deserialize, Serialize};

/// A mismatching range of two inputs.
///
/// The scan only runs on equal-length inputs, so the left and right offsets
/// and lengths always coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSegment {
    /// Start of the range in the left input.
    pub offset_left: usize,
    /// Length of the range in the left input.
    pub length_left: usize,
    /// Start of the range in the right input.
    pub offset_right: usize,
    /// Length of the range in the right input.
    pub length_right: usize,
}

impl DiffSegment {
    /// A segment covering the same range on both sides.
    pub fn aligned(offset: usize, length: usize) -> Self {
        Self {
            offset_left: offset,
            length_left: length,
            offset_right: offset,
            length_right: length,
        }
    }
}

/// Compute the mismatching segments of two inputs with the same number of
/// characters, in left-to-right order.
///
/// Callers must check lengths first. Unequal lengths trip a debug assertion;
/// release builds scan only the common prefix.
pub fn compute_segments(left: &str, right: &str) -> Vec<DiffSegment> {
    debug_assert_eq!(
        left.chars().count(),
        right.chars().count(),
        "segments need equal-length inputs"
    );

    let mut segments = Vec::new();
    let mut run_start = None;
    let mut scanned = 0;
    for (pos, (l, r)) in left.chars().zip(right.chars()).enumerate() {
        scanned = pos + 1;
        match (l == r, run_start) {
            (false, None) => run_start = Some(pos),
            (true, Some(start)) => {
                segments.push(DiffSegment::aligned(start, pos - start));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        segments.push(DiffSegment::aligned(start, scanned - start));
    }
    segments
}
