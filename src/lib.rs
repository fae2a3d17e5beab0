//! Set collections with a shared membership contract.
//!
//! - `avl_tree::AvlSet` keeps its values ordered in a height-balanced binary search tree, so
//!   membership, insertion, removal and minimum/maximum queries take logarithmic time regardless
//!   of insertion order.
//! - `open_addressing::OpenHashSet` stores its values unordered in a double-hashed table.
//!
//! Both implement `Set`; `AvlSet` also implements `SortedSet`.
//!
//! # Examples
//! ```
//! use balanced_sets::{AvlSet, Error};
//!
//! let mut set: AvlSet<u32> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! assert_eq!(set.inorder_traverse(), vec![&1, &3, &4, &5, &7, &8, &9]);
//!
//! assert!(set.remove(&5));
//! assert_eq!(set.first(), Ok(&1));
//!
//! set.clear();
//! assert_eq!(set.last(), Err(Error::EmptyCollection));
//! ```

pub mod avl_tree;
pub mod compare;
pub mod error;
pub mod open_addressing;
pub mod set;

pub use crate::avl_tree::AvlSet;
pub use crate::compare::{Comparator, NaturalOrder};
pub use crate::error::{Error, Result};
pub use crate::open_addressing::OpenHashSet;
pub use crate::set::{Set, SortedSet};
