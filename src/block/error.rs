//! Error type for LZ4 block decompression.

use std::fmt;

/// Errors returned by LZ4 block decompression.
///
/// Every variant is fatal for the block being decoded; the engine never
/// attempts to resynchronise on corrupt input.  Callers that only need a
/// success/failure signal can use the status-code entry points in
/// [`decompress_api`](super::decompress_api), which collapse all variants
/// into `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// A chain of length-extension bytes would overflow `usize`.
    LengthOverflow,
    /// The match offset is 0, or points before the earliest valid byte of
    /// the output (and of the external dictionary, when one is supplied).
    InvalidBackReference,
    /// A copy would write past the output end, or leave no room for the
    /// trailing literals the format requires.
    DestinationOverflow,
    /// The input ends before a token, length extension, literal run or offset
    /// is complete.
    InputTruncated,
    /// The block does not finish with a clean literal-only sequence.
    MalformedTrailingSequence,
}

impl DecompressError {
    /// Short, stable identifier used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            DecompressError::LengthOverflow => "length overflow",
            DecompressError::InvalidBackReference => "invalid back-reference",
            DecompressError::DestinationOverflow => "destination overflow",
            DecompressError::InputTruncated => "input truncated",
            DecompressError::MalformedTrailingSequence => "malformed trailing sequence",
        }
    }
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corrupted LZ4 block: {}", self.as_str())
    }
}

impl std::error::Error for DecompressError {}
