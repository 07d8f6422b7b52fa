//! The mutable, unbalanced BST. Nodes live in a generational arena and point
//! at their children by [`NodeId`], so there's no parent pointer and nothing
//! recursive to tear down when the tree is dropped.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(10).insert(5).insert(15);
//! assert_eq!(tree.find(&5).map(|n| *n.value()), Some(5));
//!
//! // Inserting a value that's already present does nothing.
//! tree.insert(5);
//! assert_eq!(tree.len(), 3);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&10), Some(10));
//! assert_eq!(tree.remove(&10), None);
//! ```

use std::fmt;
use std::mem;

use generational_arena::Arena;
use tracing::{debug, instrument, trace, warn};

use crate::error::TreeError;
use crate::node::{Node, NodeId, NodeRef, Side, Slot};
use crate::subtree::Subtree;

/// A Binary Search Tree over values of `T`. Equal values are never stored
/// twice and the tree never rebalances itself, so its shape depends entirely
/// on insertion order.
#[derive(Clone)]
pub struct OrderedTree<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) root: Option<NodeId>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.dfs_in_order()).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A caller-built node waiting to be moved into the arena along with the
/// exclusive bounds its value has to fall between.
struct Pending<T> {
    subtree: Subtree<T>,
    slot: Slot,
    low: Option<NodeId>,
    high: Option<NodeId>,
    depth: usize,
}

/// Heights of every subtree, folded up to the root.
struct HeightSummary {
    /// Height of the whole tree. -1 when empty.
    height: isize,
    /// The largest left/right height difference seen at any node.
    max_skew: usize,
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Builds a tree out of an existing shape, keeping that shape exactly.
    /// Fails if any value is not strictly between the bounds set by its
    /// ancestors (equal values count as out of order).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Subtree, TreeError};
    ///
    /// let good = Subtree::leaf(2).with_left(Subtree::leaf(1));
    /// assert_eq!(OrderedTree::from_root(good).unwrap().dfs_pre_order(), [&2, &1]);
    ///
    /// // 3 is in the left subtree of 2 but it's bigger.
    /// let bad = Subtree::leaf(2).with_left(Subtree::leaf(1).with_right(Subtree::leaf(3)));
    /// assert_eq!(
    ///     OrderedTree::from_root(bad).unwrap_err(),
    ///     TreeError::OutOfOrder { depth: 2 }
    /// );
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn from_root(root: Subtree<T>) -> Result<Self, TreeError>
    where
        T: Ord,
    {
        let mut tree = Self::new();
        let mut pending = vec![Pending {
            subtree: root,
            slot: Slot::Root,
            low: None,
            high: None,
            depth: 0,
        }];

        while let Some(Pending {
            subtree,
            slot,
            low,
            high,
            depth,
        }) = pending.pop()
        {
            let Subtree { value, left, right } = subtree;
            let above_low = low.map_or(true, |low| tree.nodes[low.0].value < value);
            let below_high = high.map_or(true, |high| value < tree.nodes[high.0].value);
            if !above_low || !below_high {
                warn!(depth, "rejecting subtree that breaks BST ordering");
                return Err(TreeError::OutOfOrder { depth });
            }

            let id = tree.alloc(value);
            tree.attach(slot, Some(id));

            if let Some(left) = left {
                pending.push(Pending {
                    subtree: *left,
                    slot: Slot::Child(id, Side::Left),
                    low,
                    high: Some(id),
                    depth: depth + 1,
                });
            }
            if let Some(right) = right {
                pending.push(Pending {
                    subtree: *right,
                    slot: Slot::Child(id, Side::Right),
                    low: Some(id),
                    high,
                    depth: depth + 1,
                });
            }
        }

        debug!(len = tree.len(), "built tree from caller-supplied root");
        Ok(tree)
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| self.node_ref(id))
    }

    /// Looks a node up by handle. Stale handles (their node was removed) give `None`.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.nodes.contains(id.0).then(|| self.node_ref(id))
    }

    /// Inserts `value` as a new leaf. If an equal value is already present
    /// nothing changes. Returns the tree so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(10).insert(5).insert(15).insert(5);
    ///
    /// assert_eq!(tree.bfs(), [&10, &5, &15]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.alloc(value));
            return self;
        };

        loop {
            let node = &self.nodes[current.0];
            let Some(side) = Side::toward(&value, &node.value) else {
                trace!("value already present, ignoring insert");
                return self;
            };
            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let leaf = self.alloc(value);
                    *self.nodes[current.0].child_mut(side) = Some(leaf);
                    return self;
                }
            }
        }
    }

    /// Same as [`insert`][Self::insert] but walks the tree recursively.
    ///
    /// Recursion goes as deep as the tree is tall. The tree doesn't
    /// rebalance, so sorted input makes that as deep as the tree is long.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_recursive(10).insert_recursive(5).insert_recursive(10);
    ///
    /// assert_eq!(tree.dfs_in_order(), [&5, &10]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert_recursive(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        match self.root {
            None => self.root = Some(self.alloc(value)),
            Some(root) => self.insert_below(root, value),
        }
        self
    }

    fn insert_below(&mut self, id: NodeId, value: T)
    where
        T: Ord,
    {
        let node = &self.nodes[id.0];
        let Some(side) = Side::toward(&value, &node.value) else {
            trace!("value already present, ignoring insert");
            return;
        };
        match node.child(side) {
            Some(child) => self.insert_below(child, value),
            None => {
                let leaf = self.alloc(value);
                *self.nodes[id.0].child_mut(side) = Some(leaf);
            }
        }
    }

    /// Potentially finds the node holding `value`. If no node has an equal
    /// value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            match Side::toward(value, &node.value) {
                None => return Some(self.node_ref(id)),
                Some(side) => current = node.child(side),
            }
        }
        None
    }

    /// Same as [`find`][Self::find] but walks the tree recursively. See
    /// [`insert_recursive`][Self::insert_recursive] about recursion depth.
    pub fn find_recursive(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        self.find_below(self.root, value)
    }

    fn find_below(&self, current: Option<NodeId>, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        let id = current?;
        let node = &self.nodes[id.0];
        match Side::toward(value, &node.value) {
            None => Some(self.node_ref(id)),
            Some(side) => self.find_below(node.child(side), value),
        }
    }

    /// Whether an equal value is stored.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes the node holding `value` and returns the value it held. If
    /// the tree has no such value nothing happens and `None` is returned.
    ///
    /// A node with two children isn't freed. Its in-order successor's value
    /// is moved into it and the successor's node is freed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [10, 5, 15, 2, 7, 12].into_iter().collect();
    /// let root = tree.root().unwrap().id();
    ///
    /// assert_eq!(tree.remove(&10), Some(10));
    /// assert_eq!(tree.dfs_in_order(), [&2, &5, &7, &12, &15]);
    ///
    /// // Same node, successor's value.
    /// assert_eq!(tree.get(root).map(|n| *n.value()), Some(12));
    /// ```
    #[instrument(level = "trace", skip_all, fields(len = self.nodes.len()))]
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (target, slot) = self.locate(value)?;
        let node = &self.nodes[target.0];

        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let (successor, successor_slot) =
                    self.leftmost(right, Slot::Child(target, Side::Right));
                let promoted = self.detach(successor, successor_slot)?;
                debug!("promoted in-order successor into node with two children");
                Some(mem::replace(&mut self.nodes[target.0].value, promoted))
            }
            _ => self.detach(target, slot),
        }
    }

    /// Finds the node with the smallest value in the subtree rooted at `start`.
    ///
    /// # Panics
    ///
    /// When `start` isn't a live node of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 5, 15, 12, 20].into_iter().collect();
    /// let right = tree.root().unwrap().right().unwrap().id();
    ///
    /// assert_eq!(tree.find_min(right).value(), &12);
    /// ```
    pub fn find_min(&self, start: NodeId) -> NodeRef<'_, T> {
        assert!(
            self.nodes.contains(start.0),
            "find_min called with a node that isn't in this tree"
        );
        let (min, _) = self.leftmost(start, Slot::Root);
        self.node_ref(min)
    }

    /// The smallest value.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| self.find_min(root).value())
    }

    /// The largest value.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| self.rightmost(root))
    }

    /// The number of edges on the longest path from the root to a leaf.
    /// A lone root has height 0; an empty tree has no height.
    pub fn height(&self) -> Option<usize> {
        usize::try_from(self.heights().height).ok()
    }

    /// Whether, at every node, the heights of the left and right subtrees
    /// differ by at most one. Empty trees are balanced.
    ///
    /// This is recomputed from scratch each call.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [10, 5, 15, 2, 7].into_iter().collect();
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(1).insert(-1);
    /// assert!(!tree.is_balanced());
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn is_balanced(&self) -> bool {
        self.heights().max_skew <= 1
    }

    /// The second largest value, or `None` with fewer than two values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.insert(5).find_second_highest(), None);
    /// assert_eq!(tree.insert(3).find_second_highest(), Some(&3));
    /// assert_eq!(tree.insert(4).find_second_highest(), Some(&4));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut parent = None;
        let mut max = self.root?;
        while let Some(right) = self.nodes[max.0].right {
            parent = Some(max);
            max = right;
        }

        match self.nodes[max.0].left {
            Some(left) => Some(self.rightmost(left)),
            None => parent.map(|parent| &self.nodes[parent.0].value),
        }
    }

    fn node_ref(&self, id: NodeId) -> NodeRef<'_, T> {
        NodeRef::new(id, &self.nodes)
    }

    fn alloc(&mut self, value: T) -> NodeId {
        NodeId(self.nodes.insert(Node::new(value)))
    }

    fn attach(&mut self, slot: Slot, child: Option<NodeId>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Child(parent, side) => *self.nodes[parent.0].child_mut(side) = child,
        }
    }

    /// Finds the node holding `value` and where it's attached.
    fn locate(&self, value: &T) -> Option<(NodeId, Slot)>
    where
        T: Ord,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            let Some(side) = Side::toward(value, &node.value) else {
                return Some((id, slot));
            };
            slot = Slot::Child(id, side);
            current = node.child(side);
        }
        None
    }

    /// Walks left from `start` (attached at `slot`) as far as possible.
    fn leftmost(&self, start: NodeId, slot: Slot) -> (NodeId, Slot) {
        let (mut current, mut slot) = (start, slot);
        while let Some(left) = self.nodes[current.0].left {
            slot = Slot::Child(current, Side::Left);
            current = left;
        }
        (current, slot)
    }

    fn rightmost(&self, start: NodeId) -> &T {
        let mut current = start;
        while let Some(right) = self.nodes[current.0].right {
            current = right;
        }
        &self.nodes[current.0].value
    }

    /// Frees a node with at most one child, splicing that child (if any) into
    /// the node's slot.
    fn detach(&mut self, id: NodeId, slot: Slot) -> Option<T> {
        let node = self.nodes.remove(id.0)?;
        debug_assert!(node.left.is_none() || node.right.is_none());

        let orphan = node.left.or(node.right);
        match orphan {
            Some(_) => trace!("splicing only child into removed node's slot"),
            None => trace!("removing leaf"),
        }
        self.attach(slot, orphan);
        Some(node.value)
    }

    fn heights(&self) -> HeightSummary {
        let mut summary = HeightSummary {
            height: -1,
            max_skew: 0,
        };
        let Some(root) = self.root else {
            return summary;
        };

        // Post-order: a node is expanded once to queue its children and
        // measured the second time it's popped, once both child heights are on
        // `heights`.
        let mut heights: Vec<isize> = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((id, measured)) = stack.pop() {
            let node = &self.nodes[id.0];
            if measured {
                let right = node.right.and_then(|_| heights.pop()).unwrap_or(-1);
                let left = node.left.and_then(|_| heights.pop()).unwrap_or(-1);
                summary.max_skew = summary.max_skew.max(left.abs_diff(right));
                heights.push(left.max(right) + 1);
            } else {
                stack.push((id, true));
                stack.extend(node.right.map(|right| (right, false)));
                stack.extend(node.left.map(|left| (left, false)));
            }
        }

        summary.height = heights.pop().unwrap_or(-1);
        summary
    }
}
