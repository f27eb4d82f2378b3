// src/freq.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Per-symbol occurrence counts for one source. Always holds exactly one
/// `Symbol::PseudoEof` entry with count 1, even for an empty source.
///
/// Backed by a `BTreeMap` so iteration follows the canonical symbol order;
/// the tree builder's tie-break depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable(BTreeMap<Symbol, u64>);

impl FrequencyTable {
    /// Counts every byte of `data` in one linear pass, then appends the
    /// pseudo-EOF entry. No byte value is filtered or special-cased.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = BTreeMap::new();
        for &byte in data {
            *counts.entry(Symbol::Byte(byte)).or_insert(0) += 1;
        }
        counts.insert(Symbol::PseudoEof, 1);
        FrequencyTable(counts)
    }

    pub fn count(&self, symbol: Symbol) -> Option<u64> {
        self.0.get(&symbol).copied()
    }

    /// Number of distinct symbols, pseudo-EOF included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.0.iter().map(|(&s, &c)| (s, c))
    }
}
