/// An owned, caller-built tree shape that can be turned into an
/// [`OrderedTree`][crate::OrderedTree] with
/// [`OrderedTree::from_root`][crate::OrderedTree::from_root].
///
/// Nothing about a `Subtree` is checked until it's handed to `from_root`.
///
/// # Examples
///
/// ```
/// use ordered_tree::{OrderedTree, Subtree};
///
/// let root = Subtree::leaf(10)
///     .with_left(Subtree::leaf(5))
///     .with_right(Subtree::leaf(15).with_left(Subtree::leaf(12)));
///
/// let tree = OrderedTree::from_root(root).unwrap();
/// assert_eq!(tree.bfs(), [&10, &5, &15, &12]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subtree<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Subtree<T>>>,
    pub(crate) right: Option<Box<Subtree<T>>>,
}

impl<T> Subtree<T> {
    /// A subtree with one node and no children.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Replaces the left child.
    pub fn with_left(self, left: Subtree<T>) -> Self {
        Self {
            left: Some(Box::new(left)),
            ..self
        }
    }

    /// Replaces the right child.
    pub fn with_right(self, right: Subtree<T>) -> Self {
        Self {
            right: Some(Box::new(right)),
            ..self
        }
    }
}
