use super::node::{NodeId, ROOT_NODE, RouteNode};
use super::route_tree::RouteTree;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// Pre-order walk over the whole tree, children in insertion order.
/// Uses an explicit stack to avoid recursion on deep trees.
#[inline]
pub(super) fn traverse<H, F>(tree: &RouteTree<H>, mut action: F)
where
    F: FnMut(&RouteNode<H>, usize),
{
    let mut stack: Vec<(NodeId, usize)> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push((ROOT_NODE, 0));

    while let Some((id, depth)) = stack.pop() {
        let node = tree.node(id);
        action(node, depth);

        for &child in node.children().iter().rev() {
            stack.push((child, depth + 1));
        }
    }
}
