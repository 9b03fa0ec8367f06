//! Public LZ4 block decompression API.
//!
//!   - Fixed-capacity decode: [`decompress_exact`] (exact decoded size known)
//!   - Bounded decode: [`decompress_safe`], [`decompress_safe_partial`]
//!   - Dictionary decode: [`decompress_safe_using_dict`],
//!     [`decompress_safe_partial_using_dict`]
//!   - Chained decode into a buffer holding the previous block:
//!     [`decompress_safe_with_prefix`]
//!   - Status-code surface: [`lz4_decompress`], [`lz4_decompress_unknownoutputsize`]
//!
//! All functions are safe; they share one core routine
//! ([`decompress_generic`]) and differ only in mode flags and window layout.

use super::decompress_core::decompress_generic;
use super::error::DecompressError;
use super::types::DecodeMode;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-capacity driver
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress a block whose decoded size is exactly `dst.len()`.
///
/// The input end is not used to detect the end of the block: decoding stops
/// when the final literal run lands on `dst.len()`, and any bytes after that
/// point in `src` are left unread.
///
/// Returns the number of compressed bytes consumed.
pub fn decompress_exact(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let size = dst.len();
    decompress_generic(src, dst, 0, size, DecodeMode::FIXED_OUTPUT, &[]).map(|d| d.consumed)
}

// ─────────────────────────────────────────────────────────────────────────────
// Bounded driver
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress a full LZ4 block into at most `dst.len()` bytes.
///
/// Returns the number of bytes written into `dst`.
pub fn decompress_safe(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let capacity = dst.len();
    decompress_generic(src, dst, 0, capacity, DecodeMode::BOUNDED, &[]).map(|d| d.written)
}

/// Decompress up to `target_output_size` bytes from an LZ4 block.
///
/// At most `min(target_output_size, dst.len())` bytes are written.  Reaching
/// that limit before the end of the block is success; the bytes produced are
/// exactly the prefix of the full decoded block.
pub fn decompress_safe_partial(
    src: &[u8],
    dst: &mut [u8],
    target_output_size: usize,
) -> Result<usize, DecompressError> {
    let capacity = target_output_size.min(dst.len());
    decompress_generic(src, dst, 0, capacity, DecodeMode::PARTIAL, &[]).map(|d| d.written)
}

/// Decompress a full block whose back-references may reach into `dict`.
///
/// `dict` must be the same data that preceded the block when it was
/// compressed; only its last 64 KiB can ever be referenced.
pub fn decompress_safe_using_dict(
    src: &[u8],
    dst: &mut [u8],
    dict: &[u8],
) -> Result<usize, DecompressError> {
    let capacity = dst.len();
    decompress_generic(src, dst, 0, capacity, DecodeMode::BOUNDED, dict).map(|d| d.written)
}

/// Partial decode with an external dictionary.
pub fn decompress_safe_partial_using_dict(
    src: &[u8],
    dst: &mut [u8],
    target_output_size: usize,
    dict: &[u8],
) -> Result<usize, DecompressError> {
    let capacity = target_output_size.min(dst.len());
    decompress_generic(src, dst, 0, capacity, DecodeMode::PARTIAL, dict).map(|d| d.written)
}

/// Decompress a block directly after previously decoded data.
///
/// `buf[..prefix_len]` holds the output of earlier blocks; the new block is
/// decoded into `buf[prefix_len..]` and may reference the prefix.  Returns
/// the number of bytes written after the prefix.
pub fn decompress_safe_with_prefix(
    src: &[u8],
    buf: &mut [u8],
    prefix_len: usize,
) -> Result<usize, DecompressError> {
    let capacity = buf.len();
    decompress_generic(src, buf, prefix_len, capacity, DecodeMode::BOUNDED, &[]).map(|d| d.written)
}

// ─────────────────────────────────────────────────────────────────────────────
// Status-code surface
//
// A single generic failure signal: 0 on success, -1 on any decode error.
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed-capacity decode of exactly `actual_dest_len` bytes into `dest`.
///
/// On success `*src_len` receives the number of compressed bytes read and
/// `dest[..actual_dest_len]` holds the decoded data.  On failure returns `-1`,
/// leaves `*src_len` untouched, and the contents of `dest` are undefined.
pub fn lz4_decompress(
    src: &[u8],
    src_len: &mut usize,
    dest: &mut [u8],
    actual_dest_len: usize,
) -> i32 {
    let Some(dest) = dest.get_mut(..actual_dest_len) else {
        return -1;
    };
    match decompress_exact(src, dest) {
        Ok(consumed) => {
            *src_len = consumed;
            0
        }
        Err(_) => -1,
    }
}

/// Bounded decode of a whole block into `dest[..*dest_len]`.
///
/// On entry `*dest_len` is the capacity (clamped to `dest.len()`); on success
/// it is overwritten with the number of bytes written.  Returns `-1` on any
/// failure, leaving `*dest_len` untouched.
pub fn lz4_decompress_unknownoutputsize(src: &[u8], dest: &mut [u8], dest_len: &mut usize) -> i32 {
    let capacity = (*dest_len).min(dest.len());
    match decompress_safe(src, &mut dest[..capacity]) {
        Ok(written) => {
            *dest_len = written;
            0
        }
        Err(_) => -1,
    }
}
