use core::fmt;
use core::hash::Hash;
use std::collections::HashSet;

use crate::huffman::heap::MinHeap;
use crate::huffman::node::TreeNode;
use crate::huffman::{HuffmanError, Result};

if_tracing! {
    use tracing::{debug, trace};
}

/// A finished Huffman tree. Always has a root; a one-symbol alphabet yields a lone leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: TreeNode<S>,
}

/// A node waiting in the merge queue, tagged with the order it entered the queue in.
struct Queued<S> {
    node: TreeNode<S>,
    order: usize,
}

/// Lighter nodes first. Equal frequencies fall back to queue order, earliest first.
fn by_freq_then_order<S>(a: &Queued<S>, b: &Queued<S>) -> core::cmp::Ordering {
    a.node.freq().cmp(&b.node.freq()).then(a.order.cmp(&b.order))
}

/// Builds a Huffman tree from `(symbol, count)` entries.
///
/// The two lightest nodes are repeatedly taken from a min-priority queue and joined: the node
/// taken first becomes the lighter child, the node taken second the heavier one. Ties in
/// frequency are broken by queue order. Leaves enter in input order and every merged node
/// enters after all nodes before it, so the same input always gives the same tree.
///
/// # Errors
///
/// * [`HuffmanError::EmptyAlphabet`] if `entries` is empty.
/// * [`HuffmanError::InvalidFrequency`] if a count is negative.
/// * [`HuffmanError::DuplicateSymbol`] if a symbol appears twice.
/// * [`HuffmanError::FrequencyOverflow`] if a count or the total count does not fit in a `u64`.
///
/// Counts may be any integer type convertible to `i128`, `usize` and `u128` included.
pub fn build_tree<S, C, I>(entries: I) -> Result<HuffmanTree<S>>
where
    S: Eq + Hash + Clone + fmt::Debug,
    C: TryInto<i128>,
    I: IntoIterator<Item = (S, C)>,
{
    let mut seen = HashSet::new();
    let mut leaves = vec![];
    for (order, (symbol, count)) in entries.into_iter().enumerate() {
        let count: i128 = count.try_into().map_err(|_| HuffmanError::FrequencyOverflow)?;
        if count < 0 {
            return Err(HuffmanError::InvalidFrequency {
                symbol: format!("{:?}", symbol),
                count,
            });
        }
        let freq = u64::try_from(count).map_err(|_| HuffmanError::FrequencyOverflow)?;
        if !seen.insert(symbol.clone()) {
            return Err(HuffmanError::DuplicateSymbol(format!("{:?}", symbol)));
        }
        leaves.push(Queued {
            node: TreeNode::leaf(symbol, freq),
            order,
        });
    }

    if_tracing! {
        debug!(target: "huffman", symbols = leaves.len(), "tree build start");
    }

    let mut next_order = leaves.len();
    let mut queue = MinHeap::build(leaves, by_freq_then_order);

    let root = loop {
        let Some(first) = queue.extract_min() else {
            return Err(HuffmanError::EmptyAlphabet);
        };
        let Some(second) = queue.extract_min() else {
            break first.node;
        };

        if_tracing! {
            trace!(target: "huffman", lighter = first.node.freq(), heavier = second.node.freq(), "merge");
        }

        let node = TreeNode::merge(first.node, second.node)?;
        queue.insert(Queued { node, order: next_order });
        next_order += 1;
    };

    if_tracing! {
        debug!(target: "huffman", root_freq = root.freq(), nodes = next_order, "tree build complete");
    }

    Ok(HuffmanTree { root })
}

impl<S> HuffmanTree<S> {
    /// See [`build_tree`].
    pub fn build<C, I>(entries: I) -> Result<Self>
    where
        S: Eq + Hash + Clone + fmt::Debug,
        C: TryInto<i128>,
        I: IntoIterator<Item = (S, C)>,
    {
        build_tree(entries)
    }

    pub const fn root(&self) -> &TreeNode<S> {
        &self.root
    }

    pub fn into_root(self) -> TreeNode<S> {
        self.root
    }

    /// Total frequency of all symbols.
    pub const fn total_freq(&self) -> u64 {
        self.root.freq()
    }

    /// Depth of every leaf, heavier subtrees first. The root is at depth 0.
    pub fn leaf_depths(&self) -> Vec<(&S, usize)> {
        let mut depths = vec![];
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                TreeNode::Leaf { symbol, .. } => depths.push((symbol, depth)),
                TreeNode::Internal { heavier, lighter, .. } => {
                    stack.push((lighter, depth + 1));
                    stack.push((heavier, depth + 1));
                }
            }
        }
        depths
    }

    /// Sum of `depth * freq` over every leaf: the number of bits needed to code every
    /// counted symbol occurrence.
    pub fn weighted_path_length(&self) -> u128 {
        let mut total = 0u128;
        let mut stack = vec![(&self.root, 0u128)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                TreeNode::Leaf { freq, .. } => total += depth * u128::from(*freq),
                TreeNode::Internal { heavier, lighter, .. } => {
                    stack.push((lighter, depth + 1));
                    stack.push((heavier, depth + 1));
                }
            }
        }
        total
    }

    pub fn max_depth(&self) -> usize {
        self.leaf_depths().into_iter().map(|(_, depth)| depth).max().unwrap_or(0)
    }
}

impl<S: fmt::Debug> HuffmanTree<S> {
    // lighter side on top, so the drawing reads correctly when turned a quarter clockwise
    fn fmt_node(node: &TreeNode<S>, level: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let TreeNode::Internal { lighter, .. } = node {
            Self::fmt_node(lighter, level + 1, f)?;
        }
        writeln!(f, "{}--{}", "  ".repeat(level), node)?;
        if let TreeNode::Internal { heavier, .. } = node {
            Self::fmt_node(heavier, level + 1, f)?;
        }
        Ok(())
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_node(&self.root, 0, f)
    }
}
