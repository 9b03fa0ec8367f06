//! Bounds-checked cursors over the compressed input and the output buffer.
//!
//! Every read or write performed by the decoder goes through one of these
//! two types.  A cursor only advances after its range check succeeded, so an
//! out-of-range access surfaces as a [`DecompressError`] instead of a panic.
//!
//! The "slack" queries (`has_slack`) are the gate for the fixed-width fast
//! paths: a fast copy runs only after the cursor confirmed the full width
//! (not just the committed length) is inside the buffer.

use super::error::DecompressError;

/// Returns `true` when `[pos, pos + len)` lies inside `[.., end)`.
#[inline(always)]
pub fn fits(pos: usize, len: usize, end: usize) -> bool {
    match pos.checked_add(len) {
        Some(stop) => stop <= end,
        None => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputCursor
// ─────────────────────────────────────────────────────────────────────────────

/// Read cursor over an immutable compressed block.
#[derive(Debug, Clone)]
pub struct InputCursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> InputCursor<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.src.len()
    }

    /// `true` when at least `len` bytes can be read from the current position.
    #[inline(always)]
    pub fn has_slack(&self, len: usize) -> bool {
        fits(self.pos, len, self.src.len())
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, DecompressError> {
        let byte = *self
            .src
            .get(self.pos)
            .ok_or(DecompressError::InputTruncated)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a little-endian `u16` (the match offset field).
    #[inline(always)]
    pub fn read_le16(&mut self) -> Result<u16, DecompressError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Consume exactly `len` bytes.
    #[inline(always)]
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecompressError> {
        if !self.has_slack(len) {
            return Err(DecompressError::InputTruncated);
        }
        let bytes = &self.src[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Borrow `len` bytes without consuming them.
    #[inline(always)]
    pub fn window(&self, len: usize) -> Option<&'a [u8]> {
        if self.has_slack(len) {
            Some(&self.src[self.pos..self.pos + len])
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn advance(&mut self, len: usize) -> Result<(), DecompressError> {
        if !self.has_slack(len) {
            return Err(DecompressError::InputTruncated);
        }
        self.pos += len;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OutputCursor
// ─────────────────────────────────────────────────────────────────────────────

/// Write cursor over the caller's destination buffer.
///
/// `buf[..start]` may hold an already-decoded prefix that back-references are
/// allowed to read.  Writes are confined to `buf[pos..end]`, where `end` is
/// the decode capacity (≤ `buf.len()`).
#[derive(Debug)]
pub struct OutputCursor<'a> {
    pub(super) buf: &'a mut [u8],
    pub(super) pos: usize,
    end: usize,
}

impl<'a> OutputCursor<'a> {
    /// Returns `None` when `start > end` or `end > buf.len()`.
    pub fn new(buf: &'a mut [u8], start: usize, end: usize) -> Option<Self> {
        if start > end || end > buf.len() {
            return None;
        }
        Some(Self {
            buf,
            pos: start,
            end,
        })
    }

    /// Absolute write position (prefix included).
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.pos == self.end
    }

    /// `true` when at least `len` bytes can be written from the current position.
    #[inline(always)]
    pub fn has_slack(&self, len: usize) -> bool {
        fits(self.pos, len, self.end)
    }

    /// Append `bytes` exactly.
    #[inline(always)]
    pub fn write_slice(&mut self, bytes: &[u8]) -> Result<(), DecompressError> {
        if !self.has_slack(bytes.len()) {
            return Err(DecompressError::DestinationOverflow);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Mutable view of `len` bytes at the write position, without committing them.
    #[inline(always)]
    pub fn window_mut(&mut self, len: usize) -> Option<&mut [u8]> {
        if self.has_slack(len) {
            Some(&mut self.buf[self.pos..self.pos + len])
        } else {
            None
        }
    }

    /// Commit `len` bytes previously written through [`window_mut`](Self::window_mut).
    #[inline(always)]
    pub fn advance(&mut self, len: usize) -> Result<(), DecompressError> {
        if !self.has_slack(len) {
            return Err(DecompressError::DestinationOverflow);
        }
        self.pos += len;
        Ok(())
    }
}
