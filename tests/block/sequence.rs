// Token reader and variable-length integer decoder.

use lz4dec::block::cursor::InputCursor;
use lz4dec::block::sequence::{literal_length, match_length_field, read_length, read_token, Token};
use lz4dec::block::DecompressError;

#[test]
fn token_nibbles() {
    let mut input = InputCursor::new(&[0x4C]);
    let token = read_token(&mut input).unwrap();
    assert_eq!(token, Token(0x4C));
    assert_eq!(token.literal_selector(), 4);
    assert_eq!(token.match_selector(), 12);
    assert!(!token.has_literal_extension());
    assert!(!token.has_match_extension());
}

#[test]
fn read_token_on_empty_input_is_truncation() {
    let mut input = InputCursor::new(&[]);
    assert_eq!(read_token(&mut input), Err(DecompressError::InputTruncated));
}

#[test]
fn saturated_literal_nibble_reads_extension() {
    // 15 + 0 : a zero extension byte is still required.
    let mut input = InputCursor::new(&[0x00, 0xAB]);
    assert_eq!(literal_length(Token(0xF3), &mut input), Ok(15));
    assert_eq!(input.position(), 1);
}

#[test]
fn match_field_extension() {
    let mut input = InputCursor::new(&[0xFF, 0x01]);
    assert_eq!(match_length_field(Token(0x1F), &mut input), Ok(15 + 255 + 1));
    assert_eq!(input.remaining(), 0);
}

#[test]
fn unsaturated_match_nibble_reads_nothing() {
    let mut input = InputCursor::new(&[0xFF]);
    assert_eq!(match_length_field(Token(0xFE), &mut input), Ok(14));
    assert_eq!(input.position(), 0);
}

#[test]
fn long_chain_of_ff_bytes() {
    let mut bytes = vec![0xFF; 1000];
    bytes.push(0x07);
    let mut input = InputCursor::new(&bytes);
    assert_eq!(read_length(&mut input, 15), Ok(15 + 1000 * 255 + 7));
}

#[test]
fn chain_ending_at_input_end_is_truncation() {
    let bytes = vec![0xFF; 64];
    let mut input = InputCursor::new(&bytes);
    assert_eq!(
        literal_length(Token(0xF0), &mut input),
        Err(DecompressError::InputTruncated)
    );
}

#[test]
fn length_overflow_fails_instead_of_wrapping() {
    let bytes = [0xFF, 0xFF, 0xFF, 0x00];
    let mut input = InputCursor::new(&bytes);
    assert_eq!(
        read_length(&mut input, usize::MAX - 2 * 255),
        Err(DecompressError::LengthOverflow)
    );
}
