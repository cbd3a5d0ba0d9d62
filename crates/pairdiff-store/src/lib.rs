//! Pair storage for pairdiff.
//!
//! Every caller-supplied id owns one [`Pair`]: an optional left value and an
//! optional right value, each written independently. Pairs are created on
//! first write and live for as long as the store does.
//!
//! # Storage Backends
//!
//! All backends implement the [`PairStore`] trait:
//!
//! - [`InMemoryPairStore`] -- sharded `HashMap` store, one lock per shard
//!
//! # Design Rules
//!
//! 1. Writing one side never touches the other.
//! 2. The read-modify-write of a single id is atomic; concurrent writers
//!    to the same id never lose an update.
//! 3. Writers to ids in different shards never contend.
//! 4. Lookup never fails: an unknown id reads as an empty pair.

pub mod memory;
pub mod traits;
pub mod types;

pub use memory::InMemoryPairStore;
pub use traits::PairStore;
pub use types::{Pair, PairState, Side};
