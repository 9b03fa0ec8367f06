// Block-format constants, correction tables and mode flags.

use lz4dec::block::types::{
    DecodeMode, DEC64TABLE, INC32TABLE, LASTLITERALS, LZ4_DISTANCE_MAX, MATCH_SAFEGUARD_DISTANCE,
    MFLIMIT, MINMATCH, ML_BITS, ML_MASK, OFFSET_SIZE, RUN_BITS, RUN_MASK, SHORTCUT_MATCH_COPY,
    SHORTCUT_OUTPUT_SLACK, WILDCOPYLENGTH,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn format_constants() {
    assert_eq!(MINMATCH, 4);
    assert_eq!(WILDCOPYLENGTH, 8);
    assert_eq!(LASTLITERALS, 5);
    assert_eq!(MFLIMIT, 12);
    assert_eq!(MATCH_SAFEGUARD_DISTANCE, 12);
    assert_eq!(OFFSET_SIZE, 2);
    assert_eq!(LZ4_DISTANCE_MAX, 65_535);
}

#[test]
fn token_field_widths() {
    assert_eq!(ML_BITS + RUN_BITS, 8);
    assert_eq!(ML_MASK, 15);
    assert_eq!(RUN_MASK, 15);
}

#[test]
fn shortcut_match_covers_every_unextended_length() {
    // Match selector 0..=14 decodes to 4..=18 bytes.
    assert_eq!(SHORTCUT_MATCH_COPY, ML_MASK - 1 + MINMATCH);
    assert_eq!(SHORTCUT_MATCH_COPY, 18);
}

#[test]
fn shortcut_slack_leaves_trailing_literals_clear() {
    // Longest fixed-mode literal copy (8) plus the match copy must still
    // leave LASTLITERALS bytes of output.
    assert!(SHORTCUT_OUTPUT_SLACK >= 8 + SHORTCUT_MATCH_COPY + LASTLITERALS);
}

// ─────────────────────────────────────────────────────────────────────────────
// Correction tables
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn correction_table_values() {
    assert_eq!(INC32TABLE, [0, 1, 2, 1, 0, 4, 4, 4]);
    assert_eq!(DEC64TABLE, [0, 0, 0, -1, -4, 1, 2, 3]);
}

/// Simulate the source/destination walk of the first eight bytes of a
/// small-offset match and return the final distance between them.
fn corrected_distance(offset: usize) -> usize {
    let op = 64usize;
    let mut mp = op - offset;
    mp += INC32TABLE[offset];
    let op = op + 4;
    // The second four-byte copy reads mp..mp+4 and writes op..op+4.
    let mp = mp.wrapping_add_signed(-DEC64TABLE[offset]);
    let op = op + 4;
    op - mp
}

#[test]
fn corrected_distance_is_a_whole_number_of_periods() {
    for offset in 1..8 {
        let distance = corrected_distance(offset);
        assert!(distance >= 8, "offset {offset}: distance {distance}");
        assert_eq!(distance % offset, 0, "offset {offset}: distance {distance}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode modes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mode_flags() {
    assert!(!DecodeMode::FIXED_OUTPUT.end_on_input_size);
    assert!(!DecodeMode::FIXED_OUTPUT.partial_decoding);
    assert!(DecodeMode::BOUNDED.end_on_input_size);
    assert!(!DecodeMode::BOUNDED.partial_decoding);
    assert!(DecodeMode::PARTIAL.end_on_input_size);
    assert!(DecodeMode::PARTIAL.partial_decoding);
}
