//! Unordered set stored in a single open-addressing hash table.
//!
//! Collisions are resolved with double hashing and removed values leave tombstones behind so that
//! probe sequences of other values stay intact.

mod probe;
mod set;
mod slot;

pub use self::set::{OpenHashSet, OpenHashSetIntoIter, OpenHashSetIter};
