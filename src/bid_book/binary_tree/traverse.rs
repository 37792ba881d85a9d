use super::{BidTree, Node};
use crate::bid_book::Bid;

/// Whole-tree traversals. Each visits every bid exactly once, handing it to
/// the supplied visitor in the stated order, and leaves the tree untouched.
impl BidTree {
    /// Left subtree, node, right subtree: bids arrive in ascending id order.
    pub fn in_order(&self, mut visit: impl FnMut(&Bid)) {
        Self::in_order_node(self.root.as_deref(), &mut visit);
    }

    /// Node first, then left subtree, then right subtree.
    pub fn pre_order(&self, mut visit: impl FnMut(&Bid)) {
        Self::pre_order_node(self.root.as_deref(), &mut visit);
    }

    /// Left subtree, right subtree, node last.
    pub fn post_order(&self, mut visit: impl FnMut(&Bid)) {
        Self::post_order_node(self.root.as_deref(), &mut visit);
    }

    fn in_order_node(node: Option<&Node>, visit: &mut impl FnMut(&Bid)) {
        if let Some(node) = node {
            Self::in_order_node(node.left.as_deref(), visit);
            visit(&node.bid);
            Self::in_order_node(node.right.as_deref(), visit);
        }
    }

    fn pre_order_node(node: Option<&Node>, visit: &mut impl FnMut(&Bid)) {
        if let Some(node) = node {
            visit(&node.bid);
            Self::pre_order_node(node.left.as_deref(), visit);
            Self::pre_order_node(node.right.as_deref(), visit);
        }
    }

    fn post_order_node(node: Option<&Node>, visit: &mut impl FnMut(&Bid)) {
        if let Some(node) = node {
            Self::post_order_node(node.left.as_deref(), visit);
            Self::post_order_node(node.right.as_deref(), visit);
            visit(&node.bid);
        }
    }
}
