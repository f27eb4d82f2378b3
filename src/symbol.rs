// src/symbol.rs

use serde::{Deserialize, Serialize};

/// A value that can appear in a frequency table or a code table: either a
/// real byte from the source alphabet or the synthetic end-of-data marker.
/// Internal tree nodes are a `HuffNode` variant, not a symbol, so there is
/// no "not a char" sentinel to mix up.
///
/// The derived ordering (bytes by value, then `PseudoEof` above all bytes)
/// is the canonical symbol order used for deterministic tree builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Byte(u8),
    PseudoEof,
}

impl From<u8> for Symbol {
    fn from(b: u8) -> Self {
        Symbol::Byte(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_eof_sorts_above_every_byte() {
        assert!(Symbol::Byte(0) < Symbol::PseudoEof);
        assert!(Symbol::Byte(255) < Symbol::PseudoEof);
        assert!(Symbol::Byte(b'a') < Symbol::Byte(b'b'));
    }
}
