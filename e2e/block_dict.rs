//! E2E Test Suite 02: Dictionary and Chained-Block Decoding
//!
//! - External dictionary decoding (lz4_flex `compress_with_dict` as encoder)
//! - Partial decoding with a dictionary
//! - Back-to-back blocks decoded in place after their predecessor

use lz4dec::block::decompress_api::{
    decompress_safe, decompress_safe_partial_using_dict, decompress_safe_using_dict,
    decompress_safe_with_prefix,
};
use lz4dec::DecompressError;

fn record(i: usize) -> Vec<u8> {
    format!("{{\"id\":{i},\"kind\":\"event\",\"source\":\"sensor-{}\",\"ok\":true}}\n", i % 7)
        .into_bytes()
}

fn records(range: std::ops::Range<usize>) -> Vec<u8> {
    range.flat_map(record).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: dictionary round-trip across dictionary sizes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_dictionary_round_trip_various_sizes() {
    let payload = records(1_000..1_040);
    for dict_len in [1usize, 16, 300, 4_096, 65_536, 100_000] {
        let dict: Vec<u8> = records(0..2_000).into_iter().take(dict_len).collect();
        let compressed = lz4_flex::block::compress_with_dict(&payload, &dict);

        let mut dst = vec![0u8; payload.len()];
        assert_eq!(
            decompress_safe_using_dict(&compressed, &mut dst, &dict),
            Ok(payload.len()),
            "dict_len {dict_len}"
        );
        assert_eq!(dst, payload, "dict_len {dict_len}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: a block that needs its dictionary fails without it
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_dictionary_is_detected() {
    let dict = records(0..50);
    let payload = records(0..50);
    let compressed = lz4_flex::block::compress_with_dict(&payload, &dict);
    let mut dst = vec![0u8; payload.len()];
    assert_eq!(
        decompress_safe(&compressed, &mut dst),
        Err(DecompressError::InvalidBackReference)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: partial decoding with a dictionary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_partial_with_dictionary() {
    let dict = records(0..200);
    let payload = records(150..260);
    let compressed = lz4_flex::block::compress_with_dict(&payload, &dict);
    for target in [0usize, 1, 63, 64, 65, 1_000, payload.len()] {
        let mut dst = vec![0u8; payload.len()];
        assert_eq!(
            decompress_safe_partial_using_dict(&compressed, &mut dst, target, &dict),
            Ok(target)
        );
        assert_eq!(&dst[..target], &payload[..target]);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: chained blocks decoded into one growing buffer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_chained_blocks_in_one_buffer() {
    let chunks: Vec<Vec<u8>> = (0..5).map(|k| records(k * 30..k * 30 + 40)).collect();
    let total: usize = chunks.iter().map(Vec::len).sum();

    let mut buf = vec![0u8; total];
    let mut decoded = 0usize;
    for (k, chunk) in chunks.iter().enumerate() {
        let history = &chunks[..k].concat();
        let compressed = lz4_flex::block::compress_with_dict(chunk, history);
        let end = decoded + chunk.len();
        let written = decompress_safe_with_prefix(&compressed, &mut buf[..end], decoded).unwrap();
        assert_eq!(written, chunk.len(), "block {k}");
        decoded = end;
    }
    assert_eq!(buf, chunks.concat());
}
