// src/codec.rs

use std::io;

use bitstream_io::{BitRead, BitWrite};

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::tree::HuffNode;

/// Encodes `data` against `codes`: the code word of every source byte in
/// stream order, then the pseudo-EOF code word. Returns the logical
/// bit-string of the body (its length is the bit count). Bits are only
/// written to `sink` when `materialize` is true; a false flag computes the
/// string without touching the sink.
pub fn encode<W: BitWrite>(
    data: &[u8],
    codes: &CodeTable,
    sink: &mut W,
    materialize: bool,
) -> Result<String> {
    let mut bits = String::new();

    for &byte in data {
        append_code(Symbol::Byte(byte), codes, sink, materialize, &mut bits)?;
    }
    append_code(Symbol::PseudoEof, codes, sink, materialize, &mut bits)?;

    Ok(bits)
}

fn append_code<W: BitWrite>(
    symbol: Symbol,
    codes: &CodeTable,
    sink: &mut W,
    materialize: bool,
    bits: &mut String,
) -> Result<()> {
    let code = codes
        .code(symbol)
        .ok_or(Error::InconsistentTable(symbol))?;
    for &bit in code {
        bits.push(if bit { '1' } else { '0' });
        if materialize {
            sink.write_bit(bit)?;
        }
    }
    Ok(())
}

/// Decodes one bit at a time against the tree: each bit moves a current
/// node down the zero or one branch; a real leaf emits its byte and resets
/// to the root; the pseudo-EOF leaf ends the stream without emitting.
/// Running out of bits before pseudo-EOF is a corrupted stream, never a
/// silent truncation.
pub fn decode<R: BitRead>(bits: &mut R, root: &HuffNode) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut current = root;

    loop {
        let bit = match bits.read_bit() {
            Ok(bit) => bit,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(Error::CorruptedStream);
            }
            Err(e) => return Err(Error::Io(e)),
        };

        current = match current {
            HuffNode::Internal { zero, one, .. } => {
                if bit {
                    one.as_ref()
                } else {
                    zero.as_ref()
                }
            }
            // A leaf root never descends; only a malformed tree gets here.
            HuffNode::Leaf { .. } => return Err(Error::CorruptedStream),
        };

        match current {
            HuffNode::Leaf {
                symbol: Symbol::PseudoEof,
                ..
            } => return Ok(output),
            HuffNode::Leaf {
                symbol: Symbol::Byte(byte),
                ..
            } => {
                output.push(*byte);
                current = root;
            }
            HuffNode::Internal { .. } => {}
        }
    }
}
