//! Capabilities shared by the set implementations of this crate.

use crate::error::{Error, Result};

/// An unordered collection of distinct values.
///
/// `AvlSet` and `OpenHashSet` both implement this trait, so code that only needs membership
/// semantics can be written once against `Set<T>`.
///
/// The `try_` methods are the entry points for values that may be absent. They reject `None`
/// with `Error::InvalidArgument` and never touch the set in that case.
///
/// # Examples
/// ```
/// use balanced_sets::{AvlSet, OpenHashSet, Set};
///
/// fn fill<S: Set<u32>>(set: &mut S) {
///     for value in 0..10 {
///         set.insert(value);
///     }
/// }
///
/// let mut tree = AvlSet::new();
/// let mut table = OpenHashSet::new();
/// fill(&mut tree);
/// fill(&mut table);
/// assert_eq!(tree.len(), table.len());
/// ```
pub trait Set<T> {
    /// Returns the number of values in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a value equal to `value` is in the set.
    fn contains(&self, value: &T) -> bool;

    /// Inserts a value. Returns `false` and keeps the stored value if an equal value is already
    /// present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes the value equal to `value`. Returns `false` if no such value is present.
    fn remove(&mut self, value: &T) -> bool;

    /// Like `contains`, but fails with `Error::InvalidArgument` when `value` is `None`.
    fn try_contains(&self, value: Option<&T>) -> Result<bool> {
        value.map(|value| self.contains(value)).ok_or(Error::InvalidArgument)
    }

    /// Like `insert`, but fails with `Error::InvalidArgument` when `value` is `None`.
    fn try_insert(&mut self, value: Option<T>) -> Result<bool> {
        match value {
            Some(value) => Ok(self.insert(value)),
            None => Err(Error::InvalidArgument),
        }
    }

    /// Like `remove`, but fails with `Error::InvalidArgument` when `value` is `None`.
    fn try_remove(&mut self, value: Option<&T>) -> Result<bool> {
        match value {
            Some(value) => Ok(self.remove(value)),
            None => Err(Error::InvalidArgument),
        }
    }
}

/// A set whose values are kept in ascending order.
pub trait SortedSet<T>: Set<T> {
    /// Returns the minimum value, or `Error::EmptyCollection` if the set is empty.
    fn first(&self) -> Result<&T>;

    /// Returns the maximum value, or `Error::EmptyCollection` if the set is empty.
    fn last(&self) -> Result<&T>;

    /// Returns every value of the set in ascending order.
    fn inorder_traverse(&self) -> Vec<&T>;
}
