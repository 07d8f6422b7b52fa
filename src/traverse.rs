//! Whole-tree traversals. Each one materializes every value into a `Vec`.
//! They walk the arena with an explicit stack or queue, so a badly skewed
//! tree can't overflow the call stack.

use std::collections::VecDeque;

use crate::tree::OrderedTree;

impl<T> OrderedTree<T> {
    /// Visits each node, then its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 5, 15, 2, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_pre_order(), [&10, &5, &2, &7, &15]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        let mut stack: Vec<_> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            values.push(&node.value);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        values
    }

    /// Visits the left subtree, then the node, then the right subtree. This
    /// is always ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 5, 15, 2, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_in_order(), [&2, &5, &7, &10, &15]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id.0].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id.0];
            values.push(&node.value);
            current = node.right;
        }
        values
    }

    /// Visits the left subtree, then the right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 5, 15, 2, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_post_order(), [&2, &7, &5, &15, &10]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&T> {
        // Node, right, left is exactly post-order backwards.
        let mut values = Vec::with_capacity(self.len());
        let mut stack: Vec<_> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            values.push(&node.value);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        values.reverse();
        values
    }

    /// Visits nodes level by level, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 5, 15, 2, 7].into_iter().collect();
    /// assert_eq!(tree.bfs(), [&10, &5, &15, &2, &7]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        let mut queue: VecDeque<_> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id.0];
            values.push(&node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }
        values
    }
}
