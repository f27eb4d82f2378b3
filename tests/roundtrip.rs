use std::fs;
use std::path::PathBuf;

use huffpack::{compress_bytes, compress_file, decompress_bytes, decompress_file};
use huffpack::{CodeTable, Error, FrequencyTable, HuffNode, Symbol};

fn roundtrip(data: &[u8]) -> Vec<u8> {
    let (artifact, _) = compress_bytes(data).unwrap();
    decompress_bytes(&artifact).unwrap()
}

#[test]
fn roundtrips_plain_text() {
    let data = b"the quick brown fox jumps over the lazy dog";
    assert_eq!(roundtrip(data), data);
}

#[test]
fn roundtrips_empty_source() {
    assert_eq!(roundtrip(b""), b"");
}

#[test]
fn roundtrips_single_repeated_byte() {
    assert_eq!(roundtrip(&[b'x'; 4096]), vec![b'x'; 4096]);
}

#[test]
fn roundtrips_full_byte_range() {
    let data: Vec<u8> = (0..=255u8).cycle().take(2048).collect();
    assert_eq!(roundtrip(&data), data);
}

#[test]
fn roundtrips_binary_with_long_runs() {
    let mut data = vec![0u8; 500];
    data.extend_from_slice(&[0xFF; 300]);
    data.extend(b"interleaved text\n\0\x7F");
    assert_eq!(roundtrip(&data), data);
}

#[test]
fn aaab_scenario_end_to_end() {
    // a:3, b:1, eof:1. The two count-1 leaves merge first, so `a` codes
    // in one bit while b and eof share a two-bit branch: 3*1 + 2 + 2 = 7
    // body bits. Decode must stop at the eof leaf without emitting it.
    let (artifact, bits) = compress_bytes(b"aaab").unwrap();
    assert_eq!(bits.len(), 7);
    assert_eq!(decompress_bytes(&artifact).unwrap(), b"aaab");
}

#[test]
fn empty_source_artifact_decodes_to_zero_bytes() {
    let (artifact, bits) = compress_bytes(b"").unwrap();
    // Only the one-bit eof code word is in the body.
    assert_eq!(bits, "0");
    assert_eq!(decompress_bytes(&artifact).unwrap(), b"");
}

#[test]
fn bit_string_matches_code_table_lengths() {
    let data = b"abracadabra";
    let table = FrequencyTable::from_bytes(data);
    let root = HuffNode::build(&table).unwrap();
    let codes = CodeTable::from_tree(&root);

    let expected: usize = data
        .iter()
        .map(|&b| codes.code(Symbol::Byte(b)).unwrap().len())
        .sum::<usize>()
        + codes.code(Symbol::PseudoEof).unwrap().len();

    let (_, bits) = compress_bytes(data).unwrap();
    assert_eq!(bits.len(), expected);
    assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));
}

#[test]
fn truncated_body_reports_corruption() {
    // Dropping the final body byte removes at least one bit of the eof
    // code word; decode must fail rather than return truncated bytes.
    let (artifact, _) = compress_bytes(b"aaaaab").unwrap();
    let err = decompress_bytes(&artifact[..artifact.len() - 1]).unwrap_err();
    assert!(matches!(err, Error::CorruptedStream));
}

#[test]
fn file_roundtrip_uses_suffix_conventions() {
    let dir = std::env::temp_dir().join(format!("huffpack-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let source = dir.join("sample.txt");
    let data = b"some sample text to squeeze\nwith a second line\n";
    fs::write(&source, data).unwrap();

    let bits = compress_file(&source).unwrap();
    assert!(!bits.is_empty());

    let artifact: PathBuf = dir.join("sample.txt.huf");
    assert!(artifact.exists());

    let recovered = decompress_file(&artifact).unwrap();
    assert_eq!(recovered, data);

    let output = dir.join("sample_unc.txt");
    assert_eq!(fs::read(&output).unwrap(), data);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_source_is_a_source_open_error() {
    let err = compress_file(std::path::Path::new("/definitely/not/here.txt")).unwrap_err();
    assert!(matches!(err, Error::SourceOpen { .. }));
}

#[test]
fn decompressing_a_non_artifact_name_is_rejected() {
    let err = decompress_file(std::path::Path::new("plain.txt")).unwrap_err();
    assert!(matches!(err, Error::NotCompressed(_)));
}

#[test]
fn header_table_survives_the_wire() {
    let data = b"header fidelity check";
    let (artifact, _) = compress_bytes(data).unwrap();
    let header_len = u32::from_le_bytes(artifact[..4].try_into().unwrap()) as usize;
    let table: FrequencyTable = bincode::deserialize(&artifact[4..4 + header_len]).unwrap();
    assert_eq!(table, FrequencyTable::from_bytes(data));
}
