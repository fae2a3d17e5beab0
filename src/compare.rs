//! Ordering policies used by the sets to compare their elements.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Any closure of the form `Fn(&T, &T) -> Ordering` is a comparator, so a set can be ordered by
/// an arbitrary key without wrapping its elements.
///
/// # Examples
/// ```
/// use balanced_sets::compare::{Comparator, NaturalOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
///
/// let reverse = |a: &u32, b: &u32| b.cmp(a);
/// assert_eq!(reverse.compare(&3, &2), Ordering::Less);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The comparator used when none is supplied. It defers to the `Ord` implementation of `T`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
