//! # huffpack
//!
//! Lossless Huffman compression of byte sources. A single pre-scan builds
//! a per-symbol frequency table, a deterministic greedy merge turns it
//! into a prefix-code tree, and the bit-packed body is written behind a
//! header carrying the table so decompression can rebuild the same tree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Compress a file to "notes.txt.huf"
//! let bits = huffpack::compress_file(Path::new("notes.txt"))?;
//!
//! // Decompress it back to "notes_unc.txt"
//! let recovered = huffpack::decompress_file(Path::new("notes.txt.huf"))?;
//! # Ok::<(), huffpack::Error>(())
//! ```

pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod freq;
pub mod symbol;
pub mod tree;

pub use code::CodeTable;
pub use container::{compress_bytes, compress_file, decompress_bytes, decompress_file};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use symbol::Symbol;
pub use tree::HuffNode;
