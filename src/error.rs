// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::symbol::Symbol;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read. Nothing is built after
    /// this; the counting pass never runs on a half-open source.
    #[error("cannot open source {}: {}", .path.display(), .source)]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output artifact could not be created or written.
    #[error("cannot write destination {}: {}", .path.display(), .source)]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bit source ran out before a pseudo-EOF leaf was reached.
    /// Decoding never silently truncates.
    #[error("encoded stream ended before the end-of-data marker")]
    CorruptedStream,

    /// A symbol to encode has no entry in the code table. This is a defect
    /// in the build pipeline, not a user error, and is never swallowed.
    #[error("symbol {0:?} missing from code table")]
    InconsistentTable(Symbol),

    /// The artifact header could not be parsed back into a frequency table.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// Decompression was asked for a file without the compression suffix.
    #[error("{} does not carry the .huf suffix", .0.display())]
    NotCompressed(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
