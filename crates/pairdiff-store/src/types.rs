//! Core pair types.

use serde::{Deserialize, Serialize};

/// One half of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Lowercase wire name of this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The values submitted so far for one id.
///
/// `None` means the side was never submitted, which is distinct from an
/// empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pair {
    pub left: Option<String>,
    pub right: Option<String>,
}

impl Pair {
    /// A pair with neither side present.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value for `side`, if submitted.
    pub fn get(&self, side: Side) -> Option<&str> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    /// Replace the value for `side`, leaving the other side alone.
    pub fn set(&mut self, side: Side, value: String) {
        match side {
            Side::Left => self.left = Some(value),
            Side::Right => self.right = Some(value),
        }
    }

    /// Both values, once both sides have been submitted.
    pub fn both(&self) -> Option<(&str, &str)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    pub fn state(&self) -> PairState {
        match (&self.left, &self.right) {
            (None, None) => PairState::Empty,
            (Some(_), None) => PairState::LeftOnly,
            (None, Some(_)) => PairState::RightOnly,
            (Some(_), Some(_)) => PairState::Complete,
        }
    }
}

/// Submission progress of a pair.
///
/// `Empty -> LeftOnly | RightOnly -> Complete`; the two sides may arrive in
/// either order and a pair never moves backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairState {
    Empty,
    LeftOnly,
    RightOnly,
    Complete,
}

impl PairState {
    /// Returns `true` once both sides are present.
    pub fn is_complete(&self) -> bool {
        matches!(self, PairState::Complete)
    }
}
