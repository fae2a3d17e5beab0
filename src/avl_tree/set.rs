use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::compare::{Comparator, NaturalOrder};
use crate::error::{Error, Result};
use crate::set::{Set, SortedSet};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Values are ordered by a
/// comparator fixed when the set is constructed; `AvlSet::new` uses the `Ord` implementation of
/// the values.
///
/// # Examples
/// ```
/// use balanced_sets::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.first(), Ok(&0));
/// assert_eq!(set.last(), Ok(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct AvlSet<T, C = NaturalOrder> {
    tree: tree::Tree<T>,
    len: usize,
    comparator: C,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Comparator<T>,
{
    /// Constructs a new, empty `AvlSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Ok(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        AvlSet {
            tree: None,
            len: 0,
            comparator,
        }
    }

    /// Inserts a value into the set. Returns `true` if the value was inserted. If an equal value
    /// already exists, the set is left unchanged, the stored value is kept and `false` is
    /// returned.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = tree::insert(self.tree.take(), value, &self.comparator);
        self.tree = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns the stored value, or `None` if no equal value
    /// exists.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let (root, removed) = tree::remove(self.tree.take(), value, &self.comparator);
        self.tree = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value that is equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// set.insert((1, 'a'));
    /// set.insert((1, 'b'));
    /// assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.tree, value, &self.comparator)
    }

    /// Returns the minimum value of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    /// use balanced_sets::Error;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.first(), Err(Error::EmptyCollection));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T> {
        tree::min(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Returns the maximum value of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    /// use balanced_sets::Error;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.last(), Err(Error::EmptyCollection));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.last(), Ok(&3));
    /// ```
    pub fn last(&self) -> Result<&T> {
        tree::max(&self.tree).ok_or(Error::EmptyCollection)
    }
}

impl<T, C> AvlSet<T, C> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the underlying tree. An empty set has a height of zero.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..7).collect();
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns every value of the set in ascending order.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.inorder_traverse(), vec![&1, &2, &3]);
    /// ```
    pub fn inorder_traverse(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        ret.extend(self.iter());
        ret
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, C> Set<T> for AvlSet<T, C>
where
    C: Comparator<T>,
{
    fn len(&self) -> usize {
        AvlSet::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        AvlSet::contains(self, value)
    }

    fn insert(&mut self, value: T) -> bool {
        AvlSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        AvlSet::remove(self, value)
    }
}

impl<T, C> SortedSet<T> for AvlSet<T, C>
where
    C: Comparator<T>,
{
    fn first(&self) -> Result<&T> {
        AvlSet::first(self)
    }

    fn last(&self) -> Result<&T> {
        AvlSet::last(self)
    }

    fn inorder_traverse(&self) -> Vec<&T> {
        AvlSet::inorder_traverse(self)
    }
}

impl<T, C> IntoIterator for AvlSet<T, C> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Box<Node<T>>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = *node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.as_ref() {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C> Extend<T> for AvlSet<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> fmt::Debug for AvlSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::avl_tree::tree;
    use crate::error::Error;
    use crate::set::{Set, SortedSet};

    fn check<T: Ord>(set: &AvlSet<T>) {
        assert_eq!(tree::check_invariants(&set.tree, &set.comparator), set.len());
    }

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_first_last_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.first(), Err(Error::EmptyCollection));
        assert_eq!(set.last(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        check(&set);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_keeps_original() {
        let mut set = AvlSet::with_comparator(|a: &(u32, u32), b: &(u32, u32)| a.0.cmp(&b.0));
        assert!(set.insert((1, 1)));
        assert!(!set.insert((1, 2)));
        assert_eq!(set.get(&(1, 0)), Some(&(1, 1)));
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
        check(&set);
    }

    #[test]
    fn test_remove_missing() {
        let mut set: AvlSet<u32> = (0..10).collect();
        assert!(!set.remove(&10));
        assert_eq!(set.len(), 10);
        check(&set);
    }

    #[test]
    fn test_scenario() {
        let mut set = AvlSet::new();
        for value in &[5, 3, 8, 1, 4, 7, 9] {
            assert!(set.insert(*value));
        }
        assert_eq!(set.len(), 7);
        assert_eq!(set.first(), Ok(&1));
        assert_eq!(set.last(), Ok(&9));
        assert_eq!(set.inorder_traverse(), vec![&1, &3, &4, &5, &7, &8, &9]);

        assert!(set.remove(&5));
        assert_eq!(set.len(), 6);
        assert_eq!(set.inorder_traverse(), vec![&1, &3, &4, &7, &8, &9]);
        assert!(set.height() <= 5);
        check(&set);
    }

    #[test]
    fn test_ascending_run() {
        let mut set = AvlSet::new();
        for value in 1..=1000 {
            assert!(set.insert(value));
        }
        check(&set);
        assert!(set.height() <= 14);
    }

    #[test]
    fn test_remove_min_max() {
        let mut set: AvlSet<u32> = (0..100).collect();
        for value in 0..50 {
            assert!(set.remove(&value));
            assert!(set.remove(&(99 - value)));
            check(&set);
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_comparator() {
        let mut set = AvlSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
        set.extend(vec![1, 5, 3]);
        assert_eq!(set.first(), Ok(&5));
        assert_eq!(set.last(), Ok(&1));
        assert_eq!(set.inorder_traverse(), vec![&5, &3, &1]);
    }

    #[test]
    fn test_try_operations() {
        let mut set = AvlSet::new();
        assert_eq!(set.try_insert(Some(1)), Ok(true));
        assert_eq!(set.try_insert(None), Err(Error::InvalidArgument));
        assert_eq!(set.try_contains(None), Err(Error::InvalidArgument));
        assert_eq!(set.try_remove(None), Err(Error::InvalidArgument));
        assert_eq!(set.len(), 1);
        assert_eq!(set.try_contains(Some(&1)), Ok(true));
        assert_eq!(set.try_remove(Some(&1)), Ok(true));
    }

    #[test]
    fn test_sorted_set() {
        fn ends<S: SortedSet<u32>>(set: &S) -> (u32, u32) {
            (*set.first().unwrap(), *set.last().unwrap())
        }

        let set: AvlSet<u32> = vec![4, 2, 8].into_iter().collect();
        assert_eq!(ends(&set), (2, 8));
        assert_eq!(SortedSet::inorder_traverse(&set), vec![&2, &4, &8]);
    }

    #[test]
    fn test_clear() {
        let mut set: AvlSet<u32> = (0..10).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.first(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_debug() {
        let set: AvlSet<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2}");
    }
}
