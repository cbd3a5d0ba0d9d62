//! In-memory pair store for tests and single-process deployments.
//!
//! [`InMemoryPairStore`] spreads pairs over a fixed number of shards, each a
//! `HashMap` behind its own `RwLock`. It implements the full [`PairStore`]
//! trait; all data is lost when the process exits.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;

use parking_lot::RwLock;

use crate::traits::PairStore;
use crate::types::{Pair, Side};

/// Shard count used by [`InMemoryPairStore::new`].
pub const DEFAULT_SHARDS: usize = 16;

type Shard = RwLock<HashMap<String, Pair>>;

/// In-memory, sharded pair store.
///
/// Ids are hashed onto a fixed set of shards, each a `HashMap` behind its
/// own `RwLock`. A side write holds the shard's write lock for the whole
/// read-modify-write, which makes it atomic per id while leaving other
/// shards free. Data is lost when the store is dropped.
pub struct InMemoryPairStore {
    shards: Box<[Shard]>,
    hasher: RandomState,
}

impl InMemoryPairStore {
    /// Create an empty store with [`DEFAULT_SHARDS`] shards.
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Create an empty store with `shards` shards (at least one).
    pub fn with_shards(shards: usize) -> Self {
        let shards = (0..shards.max(1))
            .map(|_| RwLock::new(HashMap::new()))
            .collect();
        Self {
            shards,
            hasher: RandomState::new(),
        }
    }

    /// Number of lock shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Number of ids with at least one side stored.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    /// Returns `true` if no id has been written.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }

    fn shard(&self, id: &str) -> &Shard {
        let index = self.hasher.hash_one(id) as usize % self.shards.len();
        &self.shards[index]
    }

    fn write_side(&self, id: &str, side: Side, value: String) {
        let mut shard = self.shard(id).write();
        match shard.get_mut(id) {
            Some(pair) => pair.set(side, value),
            None => {
                let mut pair = Pair::empty();
                pair.set(side, value);
                shard.insert(id.to_owned(), pair);
            }
        }
        tracing::trace!(id, %side, "stored pair side");
    }
}

impl Default for InMemoryPairStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PairStore for InMemoryPairStore {
    fn set_left(&self, id: &str, value: String) {
        self.write_side(id, Side::Left, value);
    }

    fn set_right(&self, id: &str, value: String) {
        self.write_side(id, Side::Right, value);
    }

    fn get_pair(&self, id: &str) -> Pair {
        self.shard(id).read().get(id).cloned().unwrap_or_default()
    }
}

impl std::fmt::Debug for InMemoryPairStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPairStore")
            .field("shards", &self.shard_count())
            .field("pair_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PairState;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    // -----------------------------------------------------------------------
    // Basic reads and writes
    // -----------------------------------------------------------------------

    #[test]
    fn unknown_id_reads_empty() {
        let store = InMemoryPairStore::new();
        assert_eq!(store.get_pair("nope"), Pair::empty());
        assert!(store.is_empty());
    }

    #[test]
    fn first_write_creates_pair() {
        let store = InMemoryPairStore::new();
        store.set_left("x", "hello".into());

        let pair = store.get_pair("x");
        assert_eq!(pair.left.as_deref(), Some("hello"));
        assert_eq!(pair.right, None);
        assert_eq!(pair.state(), PairState::LeftOnly);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn writing_one_side_keeps_the_other() {
        let store = InMemoryPairStore::new();
        store.set_left("x", "l1".into());
        store.set_right("x", "r1".into());
        store.set_left("x", "l2".into());

        let pair = store.get_pair("x");
        assert_eq!(pair.both(), Some(("l2", "r1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_dispatches_on_side() {
        let store = InMemoryPairStore::new();
        store.set("k", Side::Right, "r".into());
        store.set("k", Side::Left, "l".into());
        assert_eq!(store.get_pair("k").both(), Some(("l", "r")));
    }

    #[test]
    fn ids_are_independent() {
        let store = InMemoryPairStore::new();
        store.set_left("a", "1".into());
        store.set_right("b", "2".into());

        assert_eq!(store.get_pair("a").state(), PairState::LeftOnly);
        assert_eq!(store.get_pair("b").state(), PairState::RightOnly);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn single_shard_still_works() {
        let store = InMemoryPairStore::with_shards(1);
        for i in 0..50 {
            store.set_left(&format!("id-{i}"), i.to_string());
        }
        assert_eq!(store.len(), 50);
        assert_eq!(store.get_pair("id-7").left.as_deref(), Some("7"));
    }

    #[test]
    fn zero_shards_clamped_to_one() {
        let store = InMemoryPairStore::with_shards(0);
        assert_eq!(store.shard_count(), 1);
        store.set_right("x", "v".into());
        assert_eq!(store.get_pair("x").right.as_deref(), Some("v"));
    }

    #[test]
    fn debug_format() {
        let store = InMemoryPairStore::new();
        store.set_left("x", "v".into());
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryPairStore"));
        assert!(debug.contains("pair_count: 1"));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_sides_on_same_id_are_not_lost() {
        for round in 0..32 {
            let store = Arc::new(InMemoryPairStore::new());
            let id = format!("race-{round}");

            let left = {
                let store = Arc::clone(&store);
                let id = id.clone();
                thread::spawn(move || store.set_left(&id, "L".into()))
            };
            let right = {
                let store = Arc::clone(&store);
                let id = id.clone();
                thread::spawn(move || store.set_right(&id, "R".into()))
            };
            left.join().expect("left writer should not panic");
            right.join().expect("right writer should not panic");

            assert_eq!(store.get_pair(&id).both(), Some(("L", "R")));
        }
    }

    #[test]
    fn concurrent_writers_across_ids() {
        let store = Arc::new(InMemoryPairStore::with_shards(4));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100 {
                        let id = format!("id-{i}");
                        if t % 2 == 0 {
                            store.set_left(&id, format!("l{i}"));
                        } else {
                            store.set_right(&id, format!("r{i}"));
                        }
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }

        assert_eq!(store.len(), 100);
        for i in 0..100 {
            let pair = store.get_pair(&format!("id-{i}"));
            assert_eq!(pair.left, Some(format!("l{i}")));
            assert_eq!(pair.right, Some(format!("r{i}")));
        }
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn left_and_right_commute(id in "[a-z0-9]{1,12}", l in any::<String>(), r in any::<String>()) {
            let first = InMemoryPairStore::new();
            first.set_left(&id, l.clone());
            first.set_right(&id, r.clone());

            let second = InMemoryPairStore::new();
            second.set_right(&id, r);
            second.set_left(&id, l);

            prop_assert_eq!(first.get_pair(&id), second.get_pair(&id));
        }
    }
}
