use core::fmt;

use crate::huffman::{HuffmanError, Result};

/// A node of a Huffman tree.
///
/// Leaves carry one symbol. Internal nodes carry no symbol and always own exactly two
/// children. Every node knows the combined frequency of everything beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode<S> {
    Leaf {
        symbol: S,
        freq: u64,
    },
    Internal {
        freq: u64,
        heavier: Box<TreeNode<S>>,
        lighter: Box<TreeNode<S>>,
    },
}

impl<S> TreeNode<S> {
    pub const fn leaf(symbol: S, freq: u64) -> Self {
        TreeNode::Leaf { symbol, freq }
    }

    /// Joins two nodes under a new internal node.
    ///
    /// `first` is the node taken from the queue first and becomes the lighter child; `second`
    /// becomes the heavier child, even when both frequencies are equal.
    pub fn merge(first: Self, second: Self) -> Result<Self> {
        let freq = first.freq().checked_add(second.freq()).ok_or(HuffmanError::FrequencyOverflow)?;
        Ok(TreeNode::Internal {
            freq,
            heavier: Box::new(second),
            lighter: Box::new(first),
        })
    }

    pub const fn freq(&self) -> u64 {
        match self {
            TreeNode::Leaf { freq, .. } | TreeNode::Internal { freq, .. } => *freq,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub const fn symbol(&self) -> Option<&S> {
        match self {
            TreeNode::Leaf { symbol, .. } => Some(symbol),
            TreeNode::Internal { .. } => None,
        }
    }

    pub fn heavier(&self) -> Option<&TreeNode<S>> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Internal { heavier, .. } => Some(heavier),
        }
    }

    pub fn lighter(&self) -> Option<&TreeNode<S>> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Internal { lighter, .. } => Some(lighter),
        }
    }

    /// Number of leaves beneath this node, counting itself if it is one.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::Leaf { .. } => count += 1,
                TreeNode::Internal { heavier, lighter, .. } => {
                    stack.push(heavier);
                    stack.push(lighter);
                }
            }
        }
        count
    }
}

impl<S: fmt::Debug> fmt::Display for TreeNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Leaf { symbol, freq } => write!(f, "[node: freq {}: {:?}]", freq, symbol),
            TreeNode::Internal { freq, .. } => write!(f, "[node: freq {}: ]", freq),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_puts_second_node_on_heavier_side() {
        let node = TreeNode::merge(TreeNode::leaf('a', 2), TreeNode::leaf('b', 2)).unwrap();
        assert_eq!(node.freq(), 4);
        assert!(!node.is_leaf());
        assert_eq!(node.symbol(), None);
        assert_eq!(node.heavier().and_then(TreeNode::symbol), Some(&'b'));
        assert_eq!(node.lighter().and_then(TreeNode::symbol), Some(&'a'));
    }

    #[test]
    fn leaves_have_no_children() {
        let leaf = TreeNode::leaf(7u8, 0);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.freq(), 0);
        assert!(leaf.heavier().is_none());
        assert!(leaf.lighter().is_none());
        assert_eq!(leaf.leaf_count(), 1);
    }

    #[test]
    fn merge_overflow_is_reported() {
        let result = TreeNode::merge(TreeNode::leaf(0u8, u64::MAX), TreeNode::leaf(1u8, 1));
        assert_eq!(result, Err(HuffmanError::FrequencyOverflow));
    }

    #[test]
    fn display_shows_symbol_only_on_leaves() {
        let node = TreeNode::merge(TreeNode::leaf(3u8, 1), TreeNode::leaf(4u8, 5)).unwrap();
        assert_eq!(node.to_string(), "[node: freq 6: ]");
        assert_eq!(node.lighter().unwrap().to_string(), "[node: freq 1: 3]");
        assert_eq!(node.leaf_count(), 2);
    }
}
