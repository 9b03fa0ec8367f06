// Bounds-checked input/output cursors.

use lz4dec::block::cursor::{fits, InputCursor, OutputCursor};
use lz4dec::block::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// fits
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fits_accepts_ranges_ending_at_end() {
    assert!(fits(0, 0, 0));
    assert!(fits(3, 5, 8));
    assert!(!fits(3, 6, 8));
}

#[test]
fn fits_never_wraps() {
    assert!(!fits(usize::MAX, 1, usize::MAX));
    assert!(!fits(1, usize::MAX, usize::MAX));
}

// ─────────────────────────────────────────────────────────────────────────────
// InputCursor
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn input_reads_advance_position() {
    let src = [0x42, 0x34, 0x12, 1, 2, 3];
    let mut input = InputCursor::new(&src);
    assert_eq!(input.read_u8(), Ok(0x42));
    assert_eq!(input.read_le16(), Ok(0x1234));
    assert_eq!(input.position(), 3);
    assert_eq!(input.remaining(), 3);
    assert_eq!(input.window(2), Some(&src[3..5]));
    assert_eq!(input.position(), 3, "window must not consume");
    assert_eq!(input.take(3), Ok(&src[3..]));
    assert!(input.is_exhausted());
}

#[test]
fn input_failed_reads_do_not_move() {
    let src = [7u8];
    let mut input = InputCursor::new(&src);
    assert_eq!(input.read_le16(), Err(DecompressError::InputTruncated));
    assert_eq!(input.take(2), Err(DecompressError::InputTruncated));
    assert_eq!(input.advance(2), Err(DecompressError::InputTruncated));
    assert_eq!(input.window(2), None);
    assert_eq!(input.position(), 0);
    assert_eq!(input.read_u8(), Ok(7));
    assert_eq!(input.read_u8(), Err(DecompressError::InputTruncated));
}

#[test]
fn input_slack_query() {
    let src = [0u8; 17];
    let input = InputCursor::new(&src);
    assert!(input.has_slack(17));
    assert!(!input.has_slack(18));
    assert!(!input.has_slack(usize::MAX));
}

// ─────────────────────────────────────────────────────────────────────────────
// OutputCursor
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn output_window_must_be_inside_buffer() {
    let mut buf = [0u8; 8];
    assert!(OutputCursor::new(&mut buf, 0, 8).is_some());
    assert!(OutputCursor::new(&mut buf, 8, 8).is_some());
    assert!(OutputCursor::new(&mut buf, 0, 9).is_none());
    assert!(OutputCursor::new(&mut buf, 5, 4).is_none());
}

#[test]
fn output_writes_stop_at_capacity() {
    let mut buf = [0u8; 8];
    let mut out = OutputCursor::new(&mut buf, 2, 6).unwrap();
    assert_eq!(out.remaining(), 4);
    assert_eq!(out.write_slice(b"abc"), Ok(()));
    assert_eq!(out.position(), 5);
    assert_eq!(out.write_slice(b"de"), Err(DecompressError::DestinationOverflow));
    assert_eq!(out.write_slice(b"d"), Ok(()));
    assert!(out.is_full());
    assert_eq!(out.end(), 6);
    assert_eq!(&buf, b"\0\0abcd\0\0");
}

#[test]
fn output_window_then_commit() {
    let mut buf = [0u8; 16];
    let mut out = OutputCursor::new(&mut buf, 0, 16).unwrap();
    out.window_mut(8).unwrap().copy_from_slice(b"12345678");
    assert_eq!(out.position(), 0);
    assert_eq!(out.advance(3), Ok(()));
    assert!(out.window_mut(14).is_none());
    assert_eq!(out.advance(14), Err(DecompressError::DestinationOverflow));
    assert_eq!(out.position(), 3);
    assert_eq!(&buf[..8], b"12345678");
}
