//! Arena-backed nodes and the handles used to refer to them.

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};

/// A handle to a node stored in an [`OrderedTree`][crate::OrderedTree].
///
/// Handles stay valid until the node they name is removed. After that the
/// handle is stale and every lookup through it reports absence, even if the
/// slot has since been reused by a newer node.
///
/// Removing a node with two children overwrites its value with its in-order
/// successor's instead of freeing it, so a handle held for that node keeps
/// working but now names the successor's value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

/// Which child slot of a parent a node hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side `value` belongs on relative to `pivot`, or `None` if they're equal.
    pub(crate) fn toward<T: Ord>(value: &T, pivot: &T) -> Option<Self> {
        match value.cmp(pivot) {
            Ordering::Less => Some(Self::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Self::Right),
        }
    }
}

/// Where a node is attached. The root has no parent so it gets its own variant
/// instead of a parent/side pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Child(NodeId, Side),
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// A fresh node has no children.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A borrowed view of one node in a tree. Obtained from
/// [`OrderedTree::find`][crate::OrderedTree::find] and friends.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree: OrderedTree<_> = [10, 5, 15].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.value(), &10);
/// assert_eq!(root.left().map(|n| *n.value()), Some(5));
/// assert_eq!(root.right().map(|n| *n.value()), Some(15));
/// assert!(root.right().unwrap().is_leaf());
/// ```
pub struct NodeRef<'a, T> {
    id: NodeId,
    node: &'a Node<T>,
    nodes: &'a Arena<Node<T>>,
}

// Manual impls so a `NodeRef` is `Copy` even when `T` isn't.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(id: NodeId, nodes: &'a Arena<Node<T>>) -> Self {
        Self {
            id,
            node: &nodes[id.0],
            nodes,
        }
    }

    /// The handle for this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// The left child, holding a smaller value.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.map(|id| Self::new(id, self.nodes))
    }

    /// The right child, holding a larger value.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.map(|id| Self::new(id, self.nodes))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .finish()
    }
}
