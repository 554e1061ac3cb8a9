//! Huffman tree reconstruction from a header frequency table.

use log::debug;

use crate::header::FreqEntry;
use crate::heap::MinHeap;

/// Huffman tree node.
///
/// Built strictly bottom-up with exclusively owned children, so the
/// structure is always acyclic. The builder fills both child links of every
/// internal node; a `None` link is only ever observed on a corrupt tree and
/// makes the decoder fail rather than panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf wrapping one symbol of the alphabet.
    Leaf {
        /// The symbol byte.
        symbol: u8,
        /// The symbol's declared frequency.
        weight: u64,
    },
    /// An internal merge node.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Child reached by a 0 bit.
        left: Option<Box<Node>>,
        /// Child reached by a 1 bit.
        right: Option<Box<Node>>,
    },
}

impl Node {
    /// Weight of this node.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Build the Huffman tree for a frequency table.
///
/// One leaf is pushed per entry, in table order; the two lightest nodes are
/// then merged repeatedly (first pop becomes the left child) until a single
/// root remains. Entry order matters: together with the heap's tie
/// mechanics it makes the tree a deterministic function of the header.
///
/// A single-entry table yields a bare leaf as the root. An empty table
/// yields `None`.
pub fn build_tree(freqs: &[FreqEntry]) -> Option<Box<Node>> {
    debug!("building huffman tree from {} unique symbols", freqs.len());

    let mut heap = MinHeap::new();
    for entry in freqs {
        heap.push(Box::new(Node::Leaf {
            symbol: entry.symbol,
            weight: u64::from(entry.count),
        }));
    }

    while heap.len() > 1 {
        let a = heap.pop();
        let b = heap.pop();
        let weight = a.weight() + b.weight();
        heap.push(Box::new(Node::Internal {
            weight,
            left: Some(a),
            right: Some(b),
        }));
    }

    if heap.is_empty() {
        None
    } else {
        Some(heap.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(u8, u32)]) -> Vec<FreqEntry> {
        pairs
            .iter()
            .map(|&(symbol, count)| FreqEntry { symbol, count })
            .collect()
    }

    /// Returns (leaf count, internal count); asserts both children of every
    /// internal node are present.
    fn census(node: &Node) -> (usize, usize) {
        match node {
            Node::Leaf { .. } => (1, 0),
            Node::Internal { left, right, .. } => {
                let l = census(left.as_ref().expect("missing left child"));
                let r = census(right.as_ref().expect("missing right child"));
                (l.0 + r.0, l.1 + r.1 + 1)
            }
        }
    }

    #[test]
    fn empty_table_yields_no_tree() {
        assert!(build_tree(&[]).is_none());
    }

    #[test]
    fn single_entry_yields_leaf_root() {
        let root = build_tree(&entries(&[(b'z', 7)])).unwrap();
        assert_eq!(
            *root,
            Node::Leaf {
                symbol: b'z',
                weight: 7
            }
        );
    }

    #[test]
    fn n_leaves_and_n_minus_one_internals() {
        for n in 2..=20u8 {
            let table: Vec<_> = (0..n)
                .map(|i| FreqEntry {
                    symbol: b'a' + i,
                    count: u32::from(i) * 3 + 1,
                })
                .collect();
            let root = build_tree(&table).unwrap();
            let (leaves, internals) = census(&root);
            assert_eq!(leaves, n as usize);
            assert_eq!(internals, n as usize - 1);
        }
    }

    #[test]
    fn root_weight_is_total_count() {
        let root = build_tree(&entries(&[(b'a', 5), (b'b', 2), (b'c', 9)])).unwrap();
        assert_eq!(root.weight(), 16);
        assert!(!root.is_leaf());
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let root = build_tree(&entries(&[(b'a', u32::MAX), (b'b', u32::MAX)])).unwrap();
        assert_eq!(root.weight(), 2 * u64::from(u32::MAX));
    }
}
