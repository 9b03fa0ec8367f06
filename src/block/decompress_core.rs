//! LZ4 block decompression core engine.
//!
//! One sequence loop serves every entry point.  Its termination contract is
//! selected by [`DecodeMode`]:
//!
//! | Mode              | End of block                                         |
//! |-------------------|------------------------------------------------------|
//! | fixed output      | a literal run lands exactly on the declared size      |
//! | bounded           | the input is consumed exactly by a literal-only run   |
//! | bounded + partial | as bounded, or as soon as the capacity is reached     |
//!
//! # Security boundary
//!
//! Malformed, truncated or adversarial input must return a
//! [`DecompressError`]; it must never panic and never touch memory outside
//! `src`, `dst[..output_end]` and the dictionary.  All accesses go through
//! [`InputCursor`] / [`OutputCursor`], and every fast path is entered only
//! after a slack check on both cursors.

use super::copy::{
    copy_back_reference, copy_literals, copy_literals_exact, try_overcopy_literals,
    try_shortcut_match,
};
use super::cursor::{InputCursor, OutputCursor};
use super::error::DecompressError;
use super::sequence::{literal_length, match_length_field, read_token, Token};
use super::types::{
    DecodeMode, Decoded, Sequence, LASTLITERALS, MFLIMIT, MINMATCH, OFFSET_SIZE,
    SHORTCUT_LITERALS_BOUNDED, SHORTCUT_LITERALS_FIXED, SHORTCUT_LITERAL_COPY_BOUNDED,
    SHORTCUT_LITERAL_COPY_FIXED, SHORTCUT_OUTPUT_SLACK,
};

/// Input that must follow a non-final literal run: an offset, the next token
/// and the block's trailing literals.
const SEQUENCE_TAIL: usize = OFFSET_SIZE + 1 + LASTLITERALS;

/// Outcome of the literal stage of one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralStep {
    /// A back-reference follows.
    MatchFollows { literal_length: usize },
    /// The block ended with this literal run.
    EndOfBlock,
}

/// Outcome of the two-stage shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shortcut {
    NotTaken,
    /// Literals and match both copied.
    Completed,
    /// Literals copied and offset read; the match needs the general path.
    MatchPending { literal_length: usize, offset: u16 },
}

/// Per-call decoder state.  Created fresh for every call and dropped on
/// return; nothing survives between calls.
struct DecodeContext<'a, 'd> {
    input: InputCursor<'a>,
    output: OutputCursor<'d>,
    /// Bytes logically preceding `dst[0]`.
    dict: &'a [u8],
    start: usize,
    mode: DecodeMode,
}

impl<'a, 'd> DecodeContext<'a, 'd> {
    fn run(mut self) -> Result<Decoded, DecompressError> {
        loop {
            if self.input.is_exhausted() {
                self.finish_on_exhausted_input()?;
                break;
            }

            let token = read_token(&mut self.input)?;

            let (literal_length, offset) = match self.try_shortcut(token)? {
                Shortcut::Completed => continue,
                Shortcut::MatchPending {
                    literal_length,
                    offset,
                } => (literal_length, offset),
                Shortcut::NotTaken => match self.decode_literals(token)? {
                    LiteralStep::EndOfBlock => break,
                    LiteralStep::MatchFollows { literal_length } => {
                        (literal_length, self.input.read_le16()?)
                    }
                },
            };

            if offset == 0 {
                return Err(DecompressError::InvalidBackReference);
            }
            let match_length = match_length_field(token, &mut self.input)?
                .checked_add(MINMATCH)
                .ok_or(DecompressError::LengthOverflow)?;

            let sequence = Sequence {
                literal_length,
                match_length,
                offset,
            };
            if self.copy_sequence_match(&sequence)? {
                break;
            }
        }

        Ok(Decoded {
            consumed: self.input.position(),
            written: self.output.position() - self.start,
        })
    }

    /// The input ran out at a sequence boundary.
    fn finish_on_exhausted_input(&self) -> Result<(), DecompressError> {
        if self.input.position() == 0 {
            // Empty block: nothing to decode.
            return if self.mode.end_on_input_size || self.output.is_full() {
                Ok(())
            } else {
                Err(DecompressError::InputTruncated)
            };
        }
        if self.mode.partial_decoding {
            return Ok(());
        }
        if self.mode.end_on_input_size {
            // A match that filled the output exactly is accepted as the end
            // of the block; anything else needed a trailing literal run.
            return if self.output.is_full() {
                Ok(())
            } else {
                Err(DecompressError::MalformedTrailingSequence)
            };
        }
        Err(DecompressError::InputTruncated)
    }

    // ── Two-stage shortcut ────────────────────────────────────────────────────
    //
    // Stage 1 over-copies a short literal run with one fixed-width copy.
    // Stage 2 reads the offset and, for offsets ≥ 8 within the output and a
    // non-extended match length, over-copies the match with one 18-byte copy.
    // The output slack for both stages is checked once on entry.

    fn try_shortcut(&mut self, token: Token) -> Result<Shortcut, DecompressError> {
        let literal_length = token.literal_selector();
        let (max_literals, width, input_slack) = if self.mode.end_on_input_size {
            // Strictly more than the copy width, and at least the literal
            // stage's near-input-end margin so both stages agree on which
            // run is the last one.
            (
                SHORTCUT_LITERALS_BOUNDED,
                SHORTCUT_LITERAL_COPY_BOUNDED,
                (SHORTCUT_LITERAL_COPY_BOUNDED + 1)
                    .max(literal_length + SEQUENCE_TAIL),
            )
        } else {
            (
                SHORTCUT_LITERALS_FIXED,
                SHORTCUT_LITERAL_COPY_FIXED,
                SHORTCUT_LITERAL_COPY_FIXED + OFFSET_SIZE,
            )
        };

        if literal_length > max_literals
            || !self.input.has_slack(input_slack)
            || !self.output.has_slack(SHORTCUT_OUTPUT_SLACK)
        {
            return Ok(Shortcut::NotTaken);
        }

        if !try_overcopy_literals(&mut self.input, &mut self.output, literal_length, width)? {
            return Ok(Shortcut::NotTaken);
        }

        let offset = self.input.read_le16()?;
        let match_length = token.match_selector() + MINMATCH;
        if !token.has_match_extension()
            && try_shortcut_match(&mut self.output, offset as usize, match_length)
        {
            return Ok(Shortcut::Completed);
        }

        Ok(Shortcut::MatchPending {
            literal_length,
            offset,
        })
    }

    // ── Literal stage ─────────────────────────────────────────────────────────

    fn decode_literals(&mut self, token: Token) -> Result<LiteralStep, DecompressError> {
        let length = literal_length(token, &mut self.input)?;

        // Too close to the output end for another match plus trailing
        // literals, or (bounded mode) too close to the input end for an
        // offset, a token and the trailing literals.
        let near_out_end = match length.checked_add(MFLIMIT) {
            Some(n) => n > self.output.remaining(),
            None => true,
        };
        let near_in_end = self.mode.end_on_input_size
            && match length.checked_add(SEQUENCE_TAIL) {
                Some(n) => n > self.input.remaining(),
                None => true,
            };

        if !near_out_end && !near_in_end {
            copy_literals(&mut self.input, &mut self.output, length)?;
            return Ok(LiteralStep::MatchFollows {
                literal_length: length,
            });
        }

        if self.mode.partial_decoding {
            let length = length
                .min(self.input.remaining())
                .min(self.output.remaining());
            copy_literals_exact(&mut self.input, &mut self.output, length)?;
            if self.output.is_full() || self.input.remaining() <= OFFSET_SIZE {
                return Ok(LiteralStep::EndOfBlock);
            }
            return Ok(LiteralStep::MatchFollows {
                literal_length: length,
            });
        }

        if length > self.output.remaining() {
            return Err(DecompressError::DestinationOverflow);
        }

        if self.mode.end_on_input_size {
            // The last sequence must consume the input exactly.
            if length > self.input.remaining() {
                return Err(DecompressError::InputTruncated);
            }
            if length != self.input.remaining() {
                return Err(DecompressError::MalformedTrailingSequence);
            }
        } else if length != self.output.remaining() {
            // Fixed size: the final run has to land on the declared end;
            // short of it there is no room left for another match.
            return Err(DecompressError::DestinationOverflow);
        }

        copy_literals_exact(&mut self.input, &mut self.output, length)?;
        Ok(LiteralStep::EndOfBlock)
    }

    // ── Match stage ───────────────────────────────────────────────────────────

    /// Copy the match of `sequence`.  Returns `true` when decoding is complete.
    fn copy_sequence_match(&mut self, sequence: &Sequence) -> Result<bool, DecompressError> {
        let offset = sequence.offset as usize;
        let reachable = self.output.position().saturating_add(self.dict.len());
        if offset > reachable {
            return Err(DecompressError::InvalidBackReference);
        }

        // Fixed-size decodes keep the last LASTLITERALS bytes for literals.
        let room = if self.mode.end_on_input_size {
            self.output.remaining()
        } else {
            self.output.remaining().saturating_sub(LASTLITERALS)
        };

        let length = if sequence.match_length <= room {
            sequence.match_length
        } else if self.mode.partial_decoding {
            self.output.remaining()
        } else {
            return Err(DecompressError::DestinationOverflow);
        };

        copy_back_reference(&mut self.output, self.dict, offset, length)?;

        Ok(self.mode.partial_decoding && self.output.is_full())
    }
}

/// Core LZ4 block decompression routine.
///
/// | Parameter    | Meaning                                                   |
/// |--------------|-----------------------------------------------------------|
/// | `src`        | Compressed block                                          |
/// | `dst`        | Output buffer; `dst[..start]` is an already-decoded prefix |
/// | `start`      | Where decoding begins in `dst`                            |
/// | `output_end` | Decode capacity, `start ≤ output_end ≤ dst.len()`         |
/// | `mode`       | Termination rules (see module docs)                       |
/// | `dict`       | External dictionary logically preceding `dst[0]`           |
///
/// Back-references may reach into the prefix and, beyond it, into `dict`.
/// Bytes of `dst` between the returned end and `output_end` are unspecified.
pub fn decompress_generic(
    src: &[u8],
    dst: &mut [u8],
    start: usize,
    output_end: usize,
    mode: DecodeMode,
    dict: &[u8],
) -> Result<Decoded, DecompressError> {
    let output =
        OutputCursor::new(dst, start, output_end).ok_or(DecompressError::DestinationOverflow)?;
    let ctx = DecodeContext {
        input: InputCursor::new(src),
        output,
        dict,
        start,
        mode,
    };
    ctx.run()
}
