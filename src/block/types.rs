//! LZ4 block-format constants, overlap-correction tables, and the small value
//! types shared by the decode engine.
//!
//!   - Format constants (`MINMATCH`, `LASTLITERALS`, `MFLIMIT`, …)
//!   - Fast-path slack constants for the two-stage shortcut
//!   - `INC32TABLE` / `DEC64TABLE` correction arrays for offsets below 8
//!   - [`Sequence`], [`DecodeMode`] and [`Decoded`]

// ─────────────────────────────────────────────────────────────────────────────
// Constants — block format
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

/// Wildcard-copy granularity (helpers may write up to this many bytes past the
/// logical end of the copy, always inside the checked slack).
pub const WILDCOPYLENGTH: usize = 8;

/// Last N bytes of a block are always emitted as literals.
pub const LASTLITERALS: usize = 5;

/// The last match of a block must start at least this many bytes before the end.
pub const MFLIMIT: usize = 12;

/// Output distance from the end below which a match is finished by the
/// checked copy rather than by 8-byte steps.
pub const MATCH_SAFEGUARD_DISTANCE: usize = 2 * WILDCOPYLENGTH - MINMATCH;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: usize = (1usize << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: usize = (1usize << RUN_BITS) - 1;

/// Size of the little-endian offset field that follows every non-final literal run.
pub const OFFSET_SIZE: usize = 2;

/// Maximum back-reference distance representable by the offset field.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

// ─────────────────────────────────────────────────────────────────────────────
// Constants — two-stage shortcut
//
// Bounded mode copies 16 literal bytes on behalf of literal runs of 0..=14;
// fixed-size mode cannot rely on an input end and only copies 8 bytes for
// runs of 0..=8.  A shortcut match copies 18 bytes (match selector 0..=14).
// ─────────────────────────────────────────────────────────────────────────────

pub const SHORTCUT_LITERALS_BOUNDED: usize = RUN_MASK - 1;
pub const SHORTCUT_LITERALS_FIXED: usize = 8;
pub const SHORTCUT_LITERAL_COPY_BOUNDED: usize = 16;
pub const SHORTCUT_LITERAL_COPY_FIXED: usize = 8;
pub const SHORTCUT_MATCH_COPY: usize = ML_MASK - 1 + MINMATCH;

/// Output space that must remain before the shortcut may run: the longest
/// shortcut literal run plus the 18-byte match copy, rounded so that a
/// fixed-size decode still keeps `LASTLITERALS` clear after the match.
pub const SHORTCUT_OUTPUT_SLACK: usize = SHORTCUT_LITERALS_BOUNDED + SHORTCUT_MATCH_COPY;

// ─────────────────────────────────────────────────────────────────────────────
// Lookup tables
//
// A match with offset < 8 overlaps its own output inside the first 8-byte
// step.  The first four bytes are copied one at a time; the source index is
// then moved forward by INC32TABLE[offset] so that the next four bytes come
// from a position already holding the repeated pattern, and finally pulled
// back by DEC64TABLE[offset] so the distance between source and destination
// becomes a multiple of `offset` that is at least 8.  After that, plain
// 8-byte steps reproduce the repetition.
//
//   offset  1: distance after correction 8   (pattern a)
//   offset  3: distance after correction 9   (pattern abc)
//   offset  5: distance after correction 10  (pattern abcde)
//   offset  7: distance after correction 14
// ─────────────────────────────────────────────────────────────────────────────

/// Forward correction applied after the first four bytes of a small-offset match.
pub static INC32TABLE: [usize; 8] = [0, 1, 2, 1, 0, 4, 4, 4];

/// Backward correction applied after the first eight bytes of a small-offset match.
pub static DEC64TABLE: [isize; 8] = [0, 0, 0, -1, -4, 1, 2, 3];

// ─────────────────────────────────────────────────────────────────────────────
// Sequence / mode / result values
// ─────────────────────────────────────────────────────────────────────────────

/// One decoded sequence: a literal run followed by a back-reference.
///
/// `match_length` already includes [`MINMATCH`].  The final sequence of a
/// block carries no match and is never materialised as a `Sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    pub literal_length: usize,
    pub match_length: usize,
    pub offset: u16,
}

/// Termination rules for one decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeMode {
    /// `true`: the input range defines the end of the block (bounded driver).
    /// `false`: the caller declares the exact output size and the final
    /// literal run must land exactly on it (fixed-capacity driver).
    pub end_on_input_size: bool,
    /// Stop successfully once the output capacity is reached.
    pub partial_decoding: bool,
}

impl DecodeMode {
    /// Fixed-capacity driver: output size is exact, input end is not trusted.
    pub const FIXED_OUTPUT: Self = Self {
        end_on_input_size: false,
        partial_decoding: false,
    };

    /// Bounded driver: the full block must decode within the capacity.
    pub const BOUNDED: Self = Self {
        end_on_input_size: true,
        partial_decoding: false,
    };

    /// Bounded driver that may stop early at the capacity.
    pub const PARTIAL: Self = Self {
        end_on_input_size: true,
        partial_decoding: true,
    };
}

/// Outcome of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Compressed bytes read.
    pub consumed: usize,
    /// Bytes written after the prefix.
    pub written: usize,
}
