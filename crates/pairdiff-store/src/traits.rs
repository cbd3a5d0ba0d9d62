use crate::types::{Pair, Side};

/// Keyed storage of left/right pairs.
///
/// All implementations must satisfy these invariants:
/// - Writing one side creates the pair if needed and never alters the
///   other side.
/// - The read-modify-write behind a single write is atomic per id, so
///   concurrent writers to the same id never lose an update.
/// - Writes to different ids are independent.
/// - Reads never fail; an unknown id yields [`Pair::empty`].
pub trait PairStore: Send + Sync {
    /// Store `value` as the left side of `id`.
    fn set_left(&self, id: &str, value: String);

    /// Store `value` as the right side of `id`.
    fn set_right(&self, id: &str, value: String);

    /// Current pair for `id`, or an empty pair if nothing was submitted.
    fn get_pair(&self, id: &str) -> Pair;

    /// Store `value` on the given side of `id`.
    fn set(&self, id: &str, side: Side, value: String) {
        match side {
            Side::Left => self.set_left(id, value),
            Side::Right => self.set_right(id, value),
        }
    }
}
