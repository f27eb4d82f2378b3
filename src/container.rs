// src/container.rs

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use bitstream_io::{BigEndian, BitReader, BitWrite, BitWriter};
use tracing::{debug, info};

use crate::code::CodeTable;
use crate::codec;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::symbol::Symbol;
use crate::tree::HuffNode;

/// Suffix carried by every compressed artifact.
pub const COMPRESSED_EXT: &str = "huf";
/// Marker inserted before the original extension on decompression.
const DECOMPRESSED_MARKER: &str = "_unc";

/// Compresses `data` into an artifact: a u32 LE header length, the
/// bincode-serialized frequency table, then the byte-aligned encoded bit
/// body. Returns the artifact and the logical bit-string of the body.
pub fn compress_bytes(data: &[u8]) -> Result<(Vec<u8>, String)> {
    let table = FrequencyTable::from_bytes(data);
    let root = build_tree(&table)?;
    let codes = CodeTable::from_tree(&root);
    debug!(symbols = table.len(), "derived code table");

    let mut body = Vec::new();
    let bits = {
        let mut writer = BitWriter::endian(&mut body, BigEndian);
        let bits = codec::encode(data, &codes, &mut writer, true)?;
        writer.byte_align()?;
        bits
    };

    let header = bincode::serialize(&table)
        .map_err(|e| Error::MalformedHeader(e.to_string()))?;

    let mut artifact = Vec::with_capacity(4 + header.len() + body.len());
    artifact.extend_from_slice(&(header.len() as u32).to_le_bytes());
    artifact.extend_from_slice(&header);
    artifact.extend_from_slice(&body);

    debug!(
        header_bytes = header.len(),
        body_bits = bits.len(),
        "encoded bit body"
    );
    Ok((artifact, bits))
}

/// Parses the artifact header back into a frequency table, rebuilds the
/// tree with the same deterministic builder used at compression time, and
/// decodes the bit body.
pub fn decompress_bytes(artifact: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(artifact);

    let mut len_buf = [0u8; 4];
    cursor
        .read_exact(&mut len_buf)
        .map_err(|_| Error::MalformedHeader("missing header length".to_string()))?;
    let header_len = u32::from_le_bytes(len_buf) as usize;

    let mut header = vec![0u8; header_len];
    cursor
        .read_exact(&mut header)
        .map_err(|_| Error::MalformedHeader("header shorter than declared".to_string()))?;
    let table: FrequencyTable = bincode::deserialize(&header)
        .map_err(|e| Error::MalformedHeader(e.to_string()))?;
    if table.count(Symbol::PseudoEof) != Some(1) {
        return Err(Error::MalformedHeader(
            "frequency table lacks the end-of-data entry".to_string(),
        ));
    }

    let root = build_tree(&table)?;
    let mut reader = BitReader::endian(cursor, BigEndian);
    codec::decode(&mut reader, &root)
}

fn build_tree(table: &FrequencyTable) -> Result<HuffNode> {
    HuffNode::build(table)
        .ok_or_else(|| Error::MalformedHeader("empty frequency table".to_string()))
}

/// Compresses the file at `path` into `path` + ".huf" and returns the
/// logical bit-string of the encoded body for inspection.
pub fn compress_file(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|e| Error::SourceOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (artifact, bits) = compress_bytes(&data)?;

    let out_path = compressed_name(path);
    fs::write(&out_path, &artifact).map_err(|e| Error::DestinationWrite {
        path: out_path.clone(),
        source: e,
    })?;

    info!(
        source = %path.display(),
        artifact = %out_path.display(),
        source_bytes = data.len(),
        artifact_bytes = artifact.len(),
        "compressed"
    );
    Ok(bits)
}

/// Decompresses the `.huf` artifact at `path`, writing the recovered bytes
/// next to it with the "_unc" marker before the original extension
/// ("example.txt.huf" -> "example_unc.txt"). Returns the recovered bytes.
pub fn decompress_file(path: &Path) -> Result<Vec<u8>> {
    let out_path = decompressed_name(path)?;

    let artifact = fs::read(path).map_err(|e| Error::SourceOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let recovered = decompress_bytes(&artifact)?;

    fs::write(&out_path, &recovered).map_err(|e| Error::DestinationWrite {
        path: out_path.clone(),
        source: e,
    })?;

    info!(
        artifact = %path.display(),
        output = %out_path.display(),
        recovered_bytes = recovered.len(),
        "decompressed"
    );
    Ok(recovered)
}

fn compressed_name(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(COMPRESSED_EXT);
    PathBuf::from(name)
}

fn decompressed_name(path: &Path) -> Result<PathBuf> {
    if path.extension().and_then(|e| e.to_str()) != Some(COMPRESSED_EXT) {
        return Err(Error::NotCompressed(path.to_path_buf()));
    }

    // "example.txt.huf" -> "example.txt" -> "example_unc.txt"
    let inner = path.with_extension("");
    let stem = inner
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let out_name = match inner.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{DECOMPRESSED_MARKER}.{ext}"),
        None => format!("{stem}{DECOMPRESSED_MARKER}"),
    };
    Ok(inner.with_file_name(out_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_name_appends_suffix() {
        assert_eq!(
            compressed_name(Path::new("example.txt")),
            PathBuf::from("example.txt.huf")
        );
    }

    #[test]
    fn decompressed_name_inserts_marker_before_extension() {
        assert_eq!(
            decompressed_name(Path::new("example.txt.huf")).unwrap(),
            PathBuf::from("example_unc.txt")
        );
        assert_eq!(
            decompressed_name(Path::new("dir/notes.md.huf")).unwrap(),
            PathBuf::from("dir/notes_unc.md")
        );
        assert_eq!(
            decompressed_name(Path::new("raw.huf")).unwrap(),
            PathBuf::from("raw_unc")
        );
    }

    #[test]
    fn decompressed_name_rejects_other_suffixes() {
        assert!(matches!(
            decompressed_name(Path::new("example.txt")),
            Err(Error::NotCompressed(_))
        ));
    }

    #[test]
    fn artifact_header_precedes_the_body() {
        let (artifact, _) = compress_bytes(b"aaab").unwrap();
        let header_len =
            u32::from_le_bytes([artifact[0], artifact[1], artifact[2], artifact[3]]) as usize;
        let table: FrequencyTable =
            bincode::deserialize(&artifact[4..4 + header_len]).unwrap();
        assert_eq!(table, FrequencyTable::from_bytes(b"aaab"));
        assert!(artifact.len() > 4 + header_len);
    }

    #[test]
    fn truncated_header_is_malformed() {
        let (artifact, _) = compress_bytes(b"aaab").unwrap();
        let err = decompress_bytes(&artifact[..3]).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }
}
