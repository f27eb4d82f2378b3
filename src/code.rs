// src/code.rs

use std::collections::HashMap;

use crate::symbol::Symbol;
use crate::tree::HuffNode;

/// Symbol -> code word (bits, most significant first). Built once per
/// compression and thrown away; decoding walks the tree directly.
#[derive(Debug, Clone)]
pub struct CodeTable(HashMap<Symbol, Vec<bool>>);

impl CodeTable {
    /// Walks the tree root-to-leaf, appending 0 for every zero-branch and
    /// 1 for every one-branch. Internal nodes contribute no entry, so the
    /// resulting word set is prefix-free by construction.
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut codes = HashMap::new();
        collect(root, Vec::new(), &mut codes);
        CodeTable(codes)
    }

    pub fn code(&self, symbol: Symbol) -> Option<&[bool]> {
        self.0.get(&symbol).map(|bits| bits.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[bool])> {
        self.0.iter().map(|(&s, bits)| (s, bits.as_slice()))
    }
}

fn collect(node: &HuffNode, prefix: Vec<bool>, codes: &mut HashMap<Symbol, Vec<bool>>) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            // A leaf with an empty prefix cannot happen: single-entry
            // tables are wrapped under a synthetic internal root.
            codes.entry(*symbol).or_insert(prefix);
        }
        HuffNode::Internal { zero, one, .. } => {
            let mut zero_prefix = prefix.clone();
            zero_prefix.push(false);
            collect(zero, zero_prefix, codes);

            let mut one_prefix = prefix;
            one_prefix.push(true);
            collect(one, one_prefix, codes);
        }
    }
}

/// Renders a code word as an ASCII 0/1 string for logs and inspection.
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
