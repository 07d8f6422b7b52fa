use ordered_tree::{NodeRef, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => {
            tree.insert(x.clone());
            set.insert(x.clone());
            true
        }
        Op::InsertRecursive(x) => {
            tree.insert_recursive(x.clone());
            set.insert(x.clone());
            true
        }
        Op::Remove(x) => tree.remove(x) == set.take(x),
    })
}

/// Every node is strictly between the bounds set by its ancestors.
fn is_ordered<T: Ord>(node: Option<NodeRef<'_, T>>) -> bool {
    let mut stack: Vec<(NodeRef<'_, T>, Option<&T>, Option<&T>)> =
        node.map(|n| (n, None, None)).into_iter().collect();
    while let Some((node, low, high)) = stack.pop() {
        let value = node.value();
        if low.map_or(false, |low| low >= value) || high.map_or(false, |high| value >= high) {
            return false;
        }
        stack.extend(node.left().map(|left| (left, low, Some(value))));
        stack.extend(node.right().map(|right| (right, Some(value), high)));
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && is_ordered(tree.root())
        && tree.len() == set.len()
        && tree.dfs_in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.dfs_in_order().into_iter().eq(expected.iter())
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    fn sorted(mut v: Vec<&i8>) -> Vec<&i8> {
        v.sort_unstable();
        v
    }

    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let in_order = tree.dfs_in_order();
    sorted(tree.dfs_pre_order()) == in_order
        && sorted(tree.dfs_post_order()) == in_order
        && sorted(tree.bfs()) == in_order
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| {
        tree.find(x).map(|n| n.value()) == Some(x)
            && tree.find_recursive(x).map(|n| n.id()) == tree.find(x).map(|n| n.id())
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursive(x).is_none())
}

#[quickcheck]
fn duplicates_leave_shape_alone(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let before: Vec<i8> = tree.bfs().into_iter().copied().collect();

    for x in &xs {
        tree.insert(*x);
        tree.insert_recursive(*x);
    }

    tree.bfs().into_iter().eq(before.iter())
}

#[quickcheck]
fn insert_and_insert_recursive_agree(xs: Vec<i8>) -> bool {
    let iterative: OrderedTree<_> = xs.iter().copied().collect();
    let mut recursive = OrderedTree::new();
    for x in &xs {
        recursive.insert_recursive(*x);
    }

    iterative.bfs() == recursive.bfs()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - drop each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && is_ordered(tree.root())
}

#[quickcheck]
fn remove_shrinks_by_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let before = tree.len();
    let present = tree.contains(&x);

    let removed = tree.remove(&x);
    removed == present.then_some(x) && tree.len() == before - usize::from(present)
}

#[quickcheck]
fn second_highest_matches_sorted(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let in_order = tree.dfs_in_order();
    let expected = in_order.len().checked_sub(2).map(|i| in_order[i]);

    tree.find_second_highest() == expected
}

#[quickcheck]
fn balanced_matches_heights(xs: Vec<i8>) -> bool {
    fn height(node: Option<NodeRef<'_, i8>>) -> isize {
        node.map_or(-1, |n| height(n.left()).max(height(n.right())) + 1)
    }
    fn balanced(node: Option<NodeRef<'_, i8>>) -> bool {
        node.map_or(true, |n| {
            height(n.left()).abs_diff(height(n.right())) <= 1
                && balanced(n.left())
                && balanced(n.right())
        })
    }

    let tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.is_balanced() == balanced(tree.root())
        && tree.height() == usize::try_from(height(tree.root())).ok()
}

#[quickcheck]
fn from_root_round_trips_shape(xs: Vec<i8>) -> bool {
    use ordered_tree::Subtree;

    fn rebuild(node: NodeRef<'_, i8>) -> Subtree<i8> {
        let mut subtree = Subtree::leaf(*node.value());
        if let Some(left) = node.left() {
            subtree = subtree.with_left(rebuild(left));
        }
        if let Some(right) = node.right() {
            subtree = subtree.with_right(rebuild(right));
        }
        subtree
    }

    let tree: OrderedTree<_> = xs.iter().copied().collect();
    match tree.root() {
        None => true,
        Some(root) => OrderedTree::from_root(rebuild(root))
            .map_or(false, |rebuilt| rebuilt.bfs() == tree.bfs()),
    }
}
