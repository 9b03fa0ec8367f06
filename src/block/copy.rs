//! Literal and match copy primitives.
//!
//! Each copier has two strategies that must produce identical bytes:
//!
//!   - a fixed-width fast path (`try_*`) that over-copies in 8- or 16-byte
//!     steps and only runs after the cursors confirmed the whole width is in
//!     bounds; bytes written past the committed length stay inside that width
//!     and are overwritten by later sequences or left as unspecified tail;
//!   - an exact, byte-accurate path used near the buffer ends.
//!
//! Match copies read from the output itself.  When the offset is smaller than
//! the copy step the source overlaps bytes written by the same match, which
//! is how LZ4 encodes runs; see `INC32TABLE` / `DEC64TABLE` in
//! [`types`](super::types).

use super::cursor::{InputCursor, OutputCursor};
use super::error::DecompressError;
use super::types::{
    DEC64TABLE, INC32TABLE, MATCH_SAFEGUARD_DISTANCE, MINMATCH, SHORTCUT_MATCH_COPY,
    WILDCOPYLENGTH,
};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Copy `src` into `dst` in `WILDCOPYLENGTH` steps.  Both slices have the
/// same length, a multiple of the step.
#[inline(always)]
fn wild_copy8(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst
        .chunks_exact_mut(WILDCOPYLENGTH)
        .zip(src.chunks_exact(WILDCOPYLENGTH))
    {
        d.copy_from_slice(s);
    }
}

#[inline(always)]
fn round_up_to_step(len: usize) -> Option<usize> {
    len.checked_add(WILDCOPYLENGTH - 1)
        .map(|n| n & !(WILDCOPYLENGTH - 1))
}

// ─────────────────────────────────────────────────────────────────────────────
// Literal copier
// ─────────────────────────────────────────────────────────────────────────────

/// Copy `width` bytes from input to output but commit only `len` of them.
///
/// Returns `Ok(false)` without touching either cursor when the slack for the
/// full width is not available.
#[inline(always)]
pub fn try_overcopy_literals(
    input: &mut InputCursor<'_>,
    output: &mut OutputCursor<'_>,
    len: usize,
    width: usize,
) -> Result<bool, DecompressError> {
    debug_assert!(len <= width);
    let Some(src) = input.window(width) else {
        return Ok(false);
    };
    let Some(dst) = output.window_mut(width) else {
        return Ok(false);
    };
    if width % WILDCOPYLENGTH == 0 {
        wild_copy8(dst, src);
    } else {
        dst.copy_from_slice(src);
    }
    input.advance(len)?;
    output.advance(len)?;
    Ok(true)
}

/// Copy exactly `len` literal bytes.
#[inline(always)]
pub fn copy_literals_exact(
    input: &mut InputCursor<'_>,
    output: &mut OutputCursor<'_>,
    len: usize,
) -> Result<(), DecompressError> {
    if !output.has_slack(len) {
        return Err(DecompressError::DestinationOverflow);
    }
    let bytes = input.take(len)?;
    output.write_slice(bytes)
}

/// Copy a literal run, using the wildcopy when both cursors have slack for
/// `len` rounded up to the copy step.
#[inline(always)]
pub fn copy_literals(
    input: &mut InputCursor<'_>,
    output: &mut OutputCursor<'_>,
    len: usize,
) -> Result<(), DecompressError> {
    if let Some(width) = round_up_to_step(len) {
        if try_overcopy_literals(input, output, len, width)? {
            return Ok(());
        }
    }
    copy_literals_exact(input, output, len)
}

// ─────────────────────────────────────────────────────────────────────────────
// Match copier
// ─────────────────────────────────────────────────────────────────────────────

/// Shortcut match copy: 18 bytes in three steps for offsets ≥ 8, committing
/// `len` (≤ 18).  Returns `false` when the shortcut does not apply.
#[inline(always)]
pub fn try_shortcut_match(output: &mut OutputCursor<'_>, offset: usize, len: usize) -> bool {
    debug_assert!(len <= SHORTCUT_MATCH_COPY);
    if offset < WILDCOPYLENGTH || offset > output.pos || !output.has_slack(SHORTCUT_MATCH_COPY) {
        return false;
    }
    let op = output.pos;
    let mp = op - offset;
    let buf = &mut *output.buf;
    // Each step reads bytes at least 8 behind the bytes it writes, so bytes
    // produced by an earlier step are visible to the next.
    buf.copy_within(mp..mp + 8, op);
    buf.copy_within(mp + 8..mp + 16, op + 8);
    buf.copy_within(mp + 16..mp + 18, op + 16);
    output.pos = op + len;
    true
}

/// Fast in-buffer match copy.  Needs `MATCH_SAFEGUARD_DISTANCE` bytes of
/// output slack beyond the match end.
fn try_fast_match(output: &mut OutputCursor<'_>, offset: usize, len: usize) -> bool {
    let Some(guarded) = len.checked_add(MATCH_SAFEGUARD_DISTANCE) else {
        return false;
    };
    if !output.has_slack(guarded) {
        return false;
    }
    let op = output.pos;
    let cpy = op + len;
    let buf = &mut *output.buf;
    let mut mp = op - offset;
    let mut o = op;

    if offset < WILDCOPYLENGTH {
        for k in 0..MINMATCH {
            buf[o + k] = buf[mp + k];
        }
        mp += INC32TABLE[offset];
        buf.copy_within(mp..mp + 4, o + 4);
        mp = mp.wrapping_add_signed(-DEC64TABLE[offset]);
    } else {
        buf.copy_within(mp..mp + WILDCOPYLENGTH, o);
        mp += WILDCOPYLENGTH;
    }
    o += WILDCOPYLENGTH;

    // Source now trails destination by ≥ 8 bytes.
    while o < cpy {
        buf.copy_within(mp..mp + WILDCOPYLENGTH, o);
        o += WILDCOPYLENGTH;
        mp += WILDCOPYLENGTH;
    }
    output.pos = cpy;
    true
}

/// Byte-exact in-buffer match copy.
fn copy_match_checked(output: &mut OutputCursor<'_>, offset: usize, len: usize) {
    let op = output.pos;
    let mp = op - offset;
    let buf = &mut *output.buf;
    if offset >= len {
        buf.copy_within(mp..mp + len, op);
    } else {
        for k in 0..len {
            buf[op + k] = buf[mp + k];
        }
    }
    output.pos = op + len;
}

/// Copy a back-reference lying inside the output buffer (prefix included).
pub fn copy_match(
    output: &mut OutputCursor<'_>,
    offset: usize,
    len: usize,
) -> Result<(), DecompressError> {
    if offset == 0 || offset > output.pos {
        return Err(DecompressError::InvalidBackReference);
    }
    if !output.has_slack(len) {
        return Err(DecompressError::DestinationOverflow);
    }
    if !try_fast_match(output, offset, len) {
        copy_match_checked(output, offset, len);
    }
    Ok(())
}

/// Copy a back-reference that starts inside the external dictionary.
///
/// `dict` logically ends right before `output.buf[0]`.  A match longer than
/// its dictionary part continues from the start of the output buffer, which
/// may overlap the bytes this call is writing.
pub fn copy_match_from_dict(
    output: &mut OutputCursor<'_>,
    dict: &[u8],
    offset: usize,
    len: usize,
) -> Result<(), DecompressError> {
    let op = output.pos;
    if offset <= op {
        return copy_match(output, offset, len);
    }
    let back = offset - op;
    if back > dict.len() {
        return Err(DecompressError::InvalidBackReference);
    }
    if !output.has_slack(len) {
        return Err(DecompressError::DestinationOverflow);
    }

    let dict_from = dict.len() - back;
    if len <= back {
        return output.write_slice(&dict[dict_from..dict_from + len]);
    }

    output.write_slice(&dict[dict_from..])?;
    let rest = len - back;
    let op = output.pos;
    let buf = &mut *output.buf;
    if rest > op {
        for k in 0..rest {
            buf[op + k] = buf[k];
        }
    } else {
        buf.copy_within(0..rest, op);
    }
    output.pos = op + rest;
    Ok(())
}

/// Resolve `offset` against the output buffer and, when it reaches further
/// back, the external dictionary.
#[inline(always)]
pub fn copy_back_reference(
    output: &mut OutputCursor<'_>,
    dict: &[u8],
    offset: usize,
    len: usize,
) -> Result<(), DecompressError> {
    if offset > output.pos {
        copy_match_from_dict(output, dict, offset, len)
    } else {
        copy_match(output, offset, len)
    }
}
