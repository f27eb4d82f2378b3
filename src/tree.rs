// src/tree.rs

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::freq::FrequencyTable;
use crate::symbol::Symbol;

/// One node of a Huffman tree. Each internal node exclusively owns its two
/// branches, so the whole tree tears down automatically with its root.
#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        zero: Box<HuffNode>,
        one: Box<HuffNode>,
    },
}

/// Min-heap entry. Ordering is (weight, sequence), reversed so the std
/// max-heap pops the smallest first. Leaves take sequence numbers in
/// ascending symbol order and every merged node takes the next number, so
/// two builds from the same table always pop in the same order and produce
/// the same tree shape. Decompression relies on that: it rebuilds the tree
/// from the persisted table and must get an identical shape.
struct HeapEntry {
    weight: u64,
    seq: u64,
    node: HuffNode,
}

impl Eq for HeapEntry {}
impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior.
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl HuffNode {
    /// Builds the prefix-code tree for `table` by greedily merging the two
    /// lowest entries: the first popped becomes the zero-branch, the second
    /// the one-branch. Returns `None` only for an empty table, which a
    /// well-formed table (always holding pseudo-EOF) never is.
    pub fn build(table: &FrequencyTable) -> Option<HuffNode> {
        let mut heap = BinaryHeap::new();
        let mut seq: u64 = 0;
        for (symbol, weight) in table.iter() {
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffNode::Leaf { symbol, weight },
            });
            seq += 1;
        }

        // A lone leaf cannot be walked bit-by-bit, so a single-entry table
        // (empty source: pseudo-EOF only) gets a synthetic internal root
        // with the leaf on the zero-branch and a clone of it on the
        // one-branch. The lone symbol codes as a single 0 bit.
        if heap.len() == 1 {
            let only = heap.pop()?.node;
            return Some(HuffNode::Internal {
                weight: only.weight() * 2,
                zero: Box::new(only.clone()),
                one: Box::new(only),
            });
        }

        while heap.len() > 1 {
            let a = heap.pop()?;
            let b = heap.pop()?;
            let weight = a.weight + b.weight;
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffNode::Internal {
                    weight,
                    zero: Box::new(a.node),
                    one: Box::new(b.node),
                },
            });
            seq += 1;
        }
        heap.pop().map(|entry| entry.node)
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { zero, one, .. } => zero.leaf_count() + one.leaf_count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { zero, one, .. } => {
                1 + zero.internal_count() + one.internal_count()
            }
        }
    }
}
