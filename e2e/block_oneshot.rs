//! E2E Test Suite 01: Block One-Shot API
//!
//! Decodes blocks produced by an independent encoder (`lz4_flex`) through
//! every crate-root driver and checks that they agree byte for byte:
//! - lz4_decompress_fast (fixed capacity)
//! - lz4_decompress_safe (bounded)
//! - lz4_decompress_safe_partial
//! - lz4_decompress / lz4_decompress_unknownoutputsize (status codes)

use lz4dec::{
    lz4_decompress, lz4_decompress_fast, lz4_decompress_safe, lz4_decompress_safe_partial,
    lz4_decompress_unknownoutputsize,
};

fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut x = seed | 1;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x as u8
        })
        .collect()
}

/// Text-like data: words drawn from a small vocabulary, so matches of many
/// lengths and distances appear.
fn wordy(len: usize, seed: u64) -> Vec<u8> {
    const WORDS: [&[u8]; 8] = [
        b"lz4 ", b"block ", b"decoder ", b"match ", b"literal ", b"offset ", b"token ", b"\n",
    ];
    let picks = pseudo_random(len, seed);
    let mut out = Vec::with_capacity(len + 16);
    let mut i = 0;
    while out.len() < len {
        out.extend_from_slice(WORDS[(picks[i % picks.len()] & 7) as usize]);
        i += 1;
    }
    out.truncate(len);
    out
}

fn corpus() -> Vec<(String, Vec<u8>)> {
    let mut out = Vec::new();
    for len in [0usize, 1, 4, 11, 12, 13, 15, 16, 17, 64, 255, 256, 4_096, 65_536, 200_000] {
        out.push((format!("wordy-{len}"), wordy(len, len as u64 + 3)));
    }
    for len in [13usize, 100, 70_000] {
        out.push((format!("random-{len}"), pseudo_random(len, 42)));
        out.push((format!("zeros-{len}"), vec![0u8; len]));
    }
    // Long runs beyond the 64 KiB window.
    let mut far = pseudo_random(1_000, 9);
    far.extend(vec![b'-'; 70_000]);
    far.extend(pseudo_random(1_000, 9));
    out.push(("far-repeat".to_string(), far));
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: every driver reproduces the original
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_all_drivers_reproduce_original() {
    for (name, original) in corpus() {
        let compressed = lz4_flex::block::compress(&original);

        let mut fixed = vec![0u8; original.len()];
        assert_eq!(
            lz4_decompress_fast(&compressed, &mut fixed),
            Ok(compressed.len()),
            "{name}"
        );
        assert_eq!(fixed, original, "{name}");

        let mut bounded = vec![0u8; original.len() + 64];
        assert_eq!(
            lz4_decompress_safe(&compressed, &mut bounded),
            Ok(original.len()),
            "{name}"
        );
        assert_eq!(&bounded[..original.len()], &original[..], "{name}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: partial decoding yields prefixes of the original
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_partial_decoding_prefixes() {
    let original = wordy(20_000, 77);
    let compressed = lz4_flex::block::compress(&original);
    let mut dst = vec![0u8; original.len()];
    for target in (0..original.len()).step_by(997) {
        assert_eq!(
            lz4_decompress_safe_partial(&compressed, &mut dst, target),
            Ok(target)
        );
        assert_eq!(&dst[..target], &original[..target], "target {target}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: status-code surface mirrors the Result surface
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_status_codes_match_results() {
    for (name, original) in corpus() {
        let compressed = lz4_flex::block::compress(&original);

        let mut dest = vec![0u8; original.len()];
        let mut src_len = usize::MAX;
        assert_eq!(
            lz4_decompress(&compressed, &mut src_len, &mut dest, original.len()),
            0,
            "{name}"
        );
        assert_eq!(src_len, compressed.len(), "{name}");

        let mut dest = vec![0u8; original.len() + 10];
        let mut dest_len = dest.len();
        assert_eq!(
            lz4_decompress_unknownoutputsize(&compressed, &mut dest, &mut dest_len),
            0,
            "{name}"
        );
        assert_eq!(dest_len, original.len(), "{name}");
        assert_eq!(&dest[..dest_len], &original[..], "{name}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: decoding is independent of buffer contents
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_dirty_destination_buffers() {
    let original = wordy(10_000, 5);
    let compressed = lz4_flex::block::compress(&original);
    for fill in [0x00u8, 0xAA, 0xFF] {
        let mut dst = vec![fill; original.len()];
        lz4_decompress_fast(&compressed, &mut dst).unwrap();
        assert_eq!(dst, original, "fill {fill:#04x}");
    }
}
