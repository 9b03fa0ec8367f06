//! E2E Test Suite 06: Error Handling & Edge Cases
//!
//! Malformed blocks must come back as a `DecompressError` (or `-1` from the
//! status-code surface), never as a panic or an out-of-bounds access.
//!
//! Coverage:
//! - One hand-built block per error kind
//! - Truncation and bit-flip sweeps over real blocks
//! - Adversarial inputs from a deterministic generator

use lz4dec::{
    lz4_decompress, lz4_decompress_fast as decompress_exact,
    lz4_decompress_safe as decompress_safe, lz4_decompress_safe_partial as decompress_safe_partial,
    lz4_decompress_safe_using_dict as decompress_safe_using_dict, DecompressError,
};

// ═════════════════════════════════════════════════════════════════════════════
// Test 1: one block per error kind
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_invalid_back_reference_offset_zero() {
    let src = [0x11, b'a', 0x00, 0x00, 0x50, b'1', b'2', b'3', b'4', b'5'];
    let mut dst = [0u8; 64];
    assert_eq!(decompress_safe(&src, &mut dst), Err(DecompressError::InvalidBackReference));
}

#[test]
fn test_invalid_back_reference_before_start() {
    let src = [0x11, b'a', 0x02, 0x00, 0x50, b'1', b'2', b'3', b'4', b'5'];
    let mut dst = [0u8; 64];
    assert_eq!(decompress_safe(&src, &mut dst), Err(DecompressError::InvalidBackReference));
    // The same offset is fine once a dictionary supplies the missing byte.
    assert_eq!(decompress_safe_using_dict(&src, &mut dst, b"z"), Ok(11));
    assert_eq!(&dst[..11], b"azazaz12345");
}

#[test]
fn test_destination_overflow_on_literals() {
    let src = [0x50, b'1', b'2', b'3', b'4', b'5'];
    let mut dst = [0u8; 4];
    assert_eq!(decompress_safe(&src, &mut dst), Err(DecompressError::DestinationOverflow));
    assert_eq!(decompress_exact(&src, &mut dst), Err(DecompressError::DestinationOverflow));
}

#[test]
fn test_input_truncated_inside_length_chain() {
    let src = [0xF0, 0xFF, 0xFF];
    let mut dst = [0u8; 2_000];
    assert_eq!(decompress_safe(&src, &mut dst), Err(DecompressError::InputTruncated));
}

#[test]
fn test_input_truncated_inside_offset() {
    // Fixed mode has no input end to test against, so it reads into the
    // missing offset byte.
    let src = [0x14, b'a', 0x01];
    let mut dst = [0u8; 64];
    assert_eq!(decompress_exact(&src, &mut dst), Err(DecompressError::InputTruncated));
}

#[test]
fn test_malformed_trailing_sequence() {
    // Last literal run followed by stray bytes.
    let src = [0x20, b'A', b'B', 0x00, 0x00];
    let mut dst = [0u8; 64];
    assert_eq!(
        decompress_safe(&src, &mut dst),
        Err(DecompressError::MalformedTrailingSequence)
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 2: status surface collapses every kind to -1
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_status_surface_generic_failure() {
    let bad_blocks: [&[u8]; 3] = [
        &[0x11, b'a', 0x00, 0x00, 0x50, b'1', b'2', b'3', b'4', b'5'],
        &[0xF0, 0xFF],
        &[0x50, b'1', b'2'],
    ];
    for src in bad_blocks {
        let mut dst = [0u8; 64];
        let mut src_len = 7usize;
        assert_eq!(lz4_decompress(src, &mut src_len, &mut dst, 64), -1);
        assert_eq!(src_len, 7);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 3: sweeps over real blocks
// ═════════════════════════════════════════════════════════════════════════════

fn sample() -> Vec<u8> {
    let mut v = b"error handling sweep ".repeat(50);
    v.extend((0..=255u8).cycle().take(600));
    v.extend(vec![b'#'; 300]);
    v
}

#[test]
fn test_every_truncation_point() {
    let original = sample();
    let compressed = lz4_flex::block::compress(&original);
    for cut in 0..compressed.len() {
        let mut dst = vec![0u8; original.len()];
        assert!(decompress_exact(&compressed[..cut], &mut dst).is_err(), "cut {cut}");
        if let Ok(n) = decompress_safe(&compressed[..cut], &mut dst) {
            assert!(n < original.len());
        }
    }
}

#[test]
fn test_every_single_byte_corruption() {
    let original = sample();
    let compressed = lz4_flex::block::compress(&original);
    for i in 0..compressed.len() {
        for value in [0x00u8, 0x0F, 0xF0, 0xFF] {
            let mut src = compressed.clone();
            src[i] = value;
            for cap in [original.len(), original.len() / 2, 16] {
                let mut dst = vec![0u8; cap];
                let _ = decompress_safe(&src, &mut dst);
                let _ = decompress_exact(&src, &mut dst);
                let _ = decompress_safe_partial(&src, &mut dst, cap / 3);
                let _ = decompress_safe_using_dict(&src, &mut dst, b"dictionary");
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 4: adversarial random inputs
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_random_inputs_never_panic() {
    let mut x: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move || {
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    };
    for _ in 0..2_000 {
        let len = (next() % 96) as usize;
        let src: Vec<u8> = (0..len).map(|_| next() as u8).collect();
        let cap = (next() % 512) as usize;
        let mut dst = vec![0u8; cap];
        if let Ok(n) = decompress_safe(&src, &mut dst) {
            assert!(n <= cap);
        }
        if let Ok(n) = decompress_safe_partial(&src, &mut dst, cap / 2) {
            assert!(n <= cap / 2);
        }
        if let Ok(consumed) = decompress_exact(&src, &mut dst) {
            assert!(consumed <= src.len());
        }
    }
}
