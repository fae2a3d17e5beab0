use crate::avl_tree::node::Node;
use crate::compare::Comparator;
use log::trace;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    match node.balance_factor() {
        2 => {
            if let Some(child) = node.right.take() {
                if child.balance_factor() < 0 {
                    trace!("right-left rotation at height {}", node.height);
                    node.right = Some(rotate_right(child));
                } else {
                    trace!("left rotation at height {}", node.height);
                    node.right = Some(child);
                }
            }
            rotate_left(node)
        },
        -2 => {
            if let Some(child) = node.left.take() {
                if child.balance_factor() > 0 {
                    trace!("left-right rotation at height {}", node.height);
                    node.left = Some(rotate_left(child));
                } else {
                    trace!("right rotation at height {}", node.height);
                    node.left = Some(child);
                }
            }
            rotate_right(node)
        },
        _ => node,
    }
}

// Detaches the leftmost node of a non-empty subtree. Returns the rebalanced remainder of the
// subtree and the detached node.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, Box<Node<T>>) {
    match node.left.take() {
        None => (node.right.take(), node),
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(balance(node)), min)
        },
    }
}

/// Inserts `value` into `tree` and returns the new root of the subtree along with whether the
/// value was inserted. If an equal value already exists, the subtree is returned untouched.
pub fn insert<T, C>(tree: Tree<T>, value: T, comparator: &C) -> (Box<Node<T>>, bool)
where
    C: Comparator<T>,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(value)), true),
    };

    let inserted = match comparator.compare(&value, &node.value) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value, comparator);
            node.left = Some(left);
            inserted
        },
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value, comparator);
            node.right = Some(right);
            inserted
        },
        Ordering::Equal => return (node, false),
    };

    (balance(node), inserted)
}

/// Removes the value equal to `value` from `tree` and returns the new root of the subtree along
/// with the removed value, if any.
pub fn remove<T, C>(tree: Tree<T>, value: &T, comparator: &C) -> (Tree<T>, Option<T>)
where
    C: Comparator<T>,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match comparator.compare(value, &node.value) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), value, comparator);
            node.left = left;
            removed
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), value, comparator);
            node.right = right;
            removed
        },
        Ordering::Equal => {
            let Node { value, left, right, .. } = *node;
            let tree = match right {
                None => left,
                Some(right) => {
                    let (right, mut successor) = remove_min(right);
                    trace!("promoting successor into removed node at height {}", successor.height);
                    successor.left = left;
                    successor.right = right;
                    Some(balance(successor))
                },
            };
            return (tree, Some(value));
        },
    };

    match removed {
        Some(_) => (Some(balance(node)), removed),
        None => (Some(node), None),
    }
}

pub fn get<'a, T, C>(tree: &'a Tree<T>, value: &T, comparator: &C) -> Option<&'a T>
where
    C: Comparator<T>,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match comparator.compare(&node.value, value) {
            Ordering::Greater => curr = &node.left,
            Ordering::Less => curr = &node.right,
            Ordering::Equal => return Some(&node.value),
        }
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Asserts ordering, balance and height bookkeeping for every node of `tree`. Returns the number
/// of nodes.
#[cfg(test)]
pub fn check_invariants<T, C>(tree: &Tree<T>, comparator: &C) -> usize
where
    C: Comparator<T>,
{
    fn check<'a, T, C>(
        tree: &'a Tree<T>,
        comparator: &C,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
    ) -> usize
    where
        C: Comparator<T>,
    {
        let node = match tree {
            Some(node) => node,
            None => return 0,
        };
        if let Some(lower) = lower {
            assert_eq!(comparator.compare(lower, &node.value), Ordering::Less);
        }
        if let Some(upper) = upper {
            assert_eq!(comparator.compare(&node.value, upper), Ordering::Less);
        }
        assert_eq!(node.height, 1 + height(&node.left).max(height(&node.right)));
        assert!(node.balance_factor().abs() <= 1);
        1 + check(&node.left, comparator, lower, Some(&node.value))
            + check(&node.right, comparator, Some(&node.value), upper)
    }

    check(tree, comparator, None, None)
}
