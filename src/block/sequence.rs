//! Token reader and variable-length integer decoder.
//!
//! Each sequence starts with a token byte: the high nibble selects the
//! literal-run length, the low nibble the match length.  A saturated nibble
//! (15) is extended by a chain of bytes; every `0xFF` byte continues the
//! chain and the first byte below `0xFF` ends it.

use super::cursor::InputCursor;
use super::error::DecompressError;
use super::types::{ML_BITS, ML_MASK, RUN_MASK};

/// The control byte that opens every sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(pub u8);

impl Token {
    /// Literal-length selector (high nibble).
    #[inline(always)]
    pub fn literal_selector(self) -> usize {
        (self.0 >> ML_BITS) as usize
    }

    /// Match-length selector (low nibble), not yet offset by `MINMATCH`.
    #[inline(always)]
    pub fn match_selector(self) -> usize {
        self.0 as usize & ML_MASK
    }

    #[inline(always)]
    pub fn has_literal_extension(self) -> bool {
        self.literal_selector() == RUN_MASK
    }

    #[inline(always)]
    pub fn has_match_extension(self) -> bool {
        self.match_selector() == ML_MASK
    }
}

#[inline(always)]
pub fn read_token(input: &mut InputCursor<'_>) -> Result<Token, DecompressError> {
    input.read_u8().map(Token)
}

/// Extend `base` with a chain of length bytes.
///
/// Returns `LengthOverflow` when the sum no longer fits in `usize`, and
/// `InputTruncated` when the input ends before the chain terminates.
#[inline(always)]
pub fn read_length(input: &mut InputCursor<'_>, base: usize) -> Result<usize, DecompressError> {
    let mut length = base;
    loop {
        let s = input.read_u8()?;
        length = length
            .checked_add(s as usize)
            .ok_or(DecompressError::LengthOverflow)?;
        if s != 255 {
            return Ok(length);
        }
    }
}

/// Full literal-run length of `token`, reading extension bytes when needed.
#[inline(always)]
pub fn literal_length(
    token: Token,
    input: &mut InputCursor<'_>,
) -> Result<usize, DecompressError> {
    let length = token.literal_selector();
    if token.has_literal_extension() {
        read_length(input, length)
    } else {
        Ok(length)
    }
}

/// Match-length field of `token` before `MINMATCH` is added.
#[inline(always)]
pub fn match_length_field(
    token: Token,
    input: &mut InputCursor<'_>,
) -> Result<usize, DecompressError> {
    let length = token.match_selector();
    if token.has_match_extension() {
        read_length(input, length)
    } else {
        Ok(length)
    }
}
