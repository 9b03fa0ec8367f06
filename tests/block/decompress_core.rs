// Core decode routine: window layout, prefix and dictionary resolution,
// termination contracts of each mode.

use lz4dec::block::decompress_core::decompress_generic;
use lz4dec::block::{DecodeMode, Decoded, DecompressError};

// token 0x04 (no literals, 8-byte match), offset 5, then "12345"
const SEAM_BLOCK: &[u8] = &[0x04, 0x05, 0x00, 0x50, b'1', b'2', b'3', b'4', b'5'];

// "abc" + match(offset 3, len 9) + "abcab"
const ABC_BLOCK: &[u8] = &[
    0x35, b'a', b'b', b'c', 0x03, 0x00, 0x50, b'a', b'b', b'c', b'a', b'b',
];
const ABC_DECODED: &[u8] = b"abcabcabcabcabcab";

// ─────────────────────────────────────────────────────────────────────────────
// Window layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn start_past_end_is_rejected() {
    let mut dst = [0u8; 32];
    assert_eq!(
        decompress_generic(ABC_BLOCK, &mut dst, 10, 5, DecodeMode::BOUNDED, &[]),
        Err(DecompressError::DestinationOverflow)
    );
}

#[test]
fn end_past_buffer_is_rejected() {
    let mut dst = [0u8; 32];
    assert_eq!(
        decompress_generic(ABC_BLOCK, &mut dst, 0, 33, DecodeMode::BOUNDED, &[]),
        Err(DecompressError::DestinationOverflow)
    );
}

#[test]
fn capacity_below_buffer_length_is_honoured() {
    let mut dst = [0u8; 64];
    assert_eq!(
        decompress_generic(ABC_BLOCK, &mut dst, 0, 16, DecodeMode::BOUNDED, &[]),
        Err(DecompressError::DestinationOverflow)
    );
    let d = decompress_generic(ABC_BLOCK, &mut dst, 0, 17, DecodeMode::BOUNDED, &[]).unwrap();
    assert_eq!(d, Decoded { consumed: 12, written: 17 });
    assert_eq!(&dst[..17], ABC_DECODED);
}

// ─────────────────────────────────────────────────────────────────────────────
// Prefix and dictionary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn match_spanning_dictionary_prefix_and_new_output() {
    let mut dst = [0u8; 15];
    dst[..2].copy_from_slice(b"PQ");
    let d = decompress_generic(SEAM_BLOCK, &mut dst, 2, 15, DecodeMode::BOUNDED, b"xyz").unwrap();
    assert_eq!(d.written, 13);
    assert_eq!(d.consumed, SEAM_BLOCK.len());
    assert_eq!(&dst, b"PQxyzPQxyz12345");
}

#[test]
fn partial_decode_stops_inside_dictionary_match() {
    let mut dst = [0u8; 15];
    dst[..2].copy_from_slice(b"PQ");
    let d = decompress_generic(SEAM_BLOCK, &mut dst, 2, 8, DecodeMode::PARTIAL, b"xyz").unwrap();
    assert_eq!(d.written, 6);
    assert_eq!(&dst[..8], b"PQxyzPQx");
}

#[test]
fn offset_beyond_prefix_and_dictionary_fails() {
    // Offset 6 reaches one byte before the three-byte dictionary.
    let block = [0x04, 0x06, 0x00, 0x50, b'1', b'2', b'3', b'4', b'5'];
    let mut dst = [0u8; 15];
    assert_eq!(
        decompress_generic(&block, &mut dst, 2, 15, DecodeMode::BOUNDED, b"xyz"),
        Err(DecompressError::InvalidBackReference)
    );
}

#[test]
fn offset_into_prefix_needs_no_dictionary() {
    let block = [0x02, 0x02, 0x00, 0x50, b'1', b'2', b'3', b'4', b'5'];
    let mut dst = [0u8; 32];
    dst[..2].copy_from_slice(b"ab");
    let d = decompress_generic(&block, &mut dst, 2, 32, DecodeMode::BOUNDED, &[]).unwrap();
    assert_eq!(d.written, 11);
    assert_eq!(&dst[..13], b"abababab12345");
}

// ─────────────────────────────────────────────────────────────────────────────
// Termination contracts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fixed_mode_stops_at_declared_size() {
    let mut src = ABC_BLOCK.to_vec();
    src.extend_from_slice(&[0xFF; 8]);
    let mut dst = [0u8; 17];
    let d = decompress_generic(&src, &mut dst, 0, 17, DecodeMode::FIXED_OUTPUT, &[]).unwrap();
    assert_eq!(d.consumed, ABC_BLOCK.len());
    assert_eq!(d.written, 17);
}

#[test]
fn fixed_mode_truncated_input_fails() {
    let mut dst = [0u8; 17];
    assert_eq!(
        decompress_generic(&ABC_BLOCK[..9], &mut dst, 0, 17, DecodeMode::FIXED_OUTPUT, &[]),
        Err(DecompressError::InputTruncated)
    );
}

#[test]
fn bounded_mode_final_literals_past_input_end_fail() {
    let mut dst = [0u8; 64];
    assert_eq!(
        decompress_generic(&[0x50, b'a', b'b'], &mut dst, 0, 64, DecodeMode::BOUNDED, &[]),
        Err(DecompressError::InputTruncated)
    );
}

#[test]
fn bounded_mode_cut_block_reads_as_malformed_tail() {
    // Cut after the match: the first literal run now looks like the last one
    // but does not consume the input.
    let mut dst = [0u8; 64];
    assert_eq!(
        decompress_generic(&ABC_BLOCK[..10], &mut dst, 0, 64, DecodeMode::BOUNDED, &[]),
        Err(DecompressError::MalformedTrailingSequence)
    );
}

fn fourteen_literals_then(offset: u16, tail: &[u8]) -> Vec<u8> {
    let mut src = vec![0xE0];
    src.extend_from_slice(b"ABCDEFGHIJKLMN");
    src.extend_from_slice(&offset.to_le_bytes());
    src.extend_from_slice(tail);
    src
}

#[test]
fn bounded_mode_rejects_match_without_literal_tail_at_every_capacity() {
    // The match does not fill the output and only an empty token follows.
    let src = fourteen_literals_then(1, &[0x00]);
    for cap in 18..=128 {
        let mut dst = vec![0u8; cap];
        assert_eq!(
            decompress_generic(&src, &mut dst, 0, cap, DecodeMode::BOUNDED, &[]),
            Err(DecompressError::MalformedTrailingSequence),
            "capacity {cap}"
        );
    }
}

#[test]
fn bounded_mode_accepts_well_formed_block_at_every_capacity() {
    let mut tail = vec![0x80];
    tail.extend_from_slice(b"trailer!");
    let src = fourteen_literals_then(14, &tail);
    for cap in 26..=128 {
        let mut dst = vec![0u8; cap];
        let d = decompress_generic(&src, &mut dst, 0, cap, DecodeMode::BOUNDED, &[]).unwrap();
        assert_eq!(d.consumed, src.len());
        assert_eq!(&dst[..d.written], b"ABCDEFGHIJKLMNABCDtrailer!", "capacity {cap}");
    }
}

#[test]
fn partial_mode_stops_in_literals_and_in_matches() {
    for cap in 0..ABC_DECODED.len() {
        let mut dst = [0u8; 32];
        let d = decompress_generic(ABC_BLOCK, &mut dst, 0, cap, DecodeMode::PARTIAL, &[]).unwrap();
        assert_eq!(d.written, cap, "capacity {cap}");
        assert_eq!(&dst[..cap], &ABC_DECODED[..cap]);
    }
}

#[test]
fn partial_mode_with_ample_capacity_decodes_everything() {
    let mut dst = [0u8; 64];
    let d = decompress_generic(ABC_BLOCK, &mut dst, 0, 64, DecodeMode::PARTIAL, &[]).unwrap();
    assert_eq!(d.written, 17);
}
