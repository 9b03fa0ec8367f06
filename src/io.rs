//! File I/O and block dispatch for the `lz4dec` binary.
//!
//! - [`read_source`] loads a whole input (file or stdin) into memory.
//! - [`decode_block`] runs the driver selected by [`OpMode`] over it.
//! - [`write_sink`] stores the decoded bytes (file or stdout).
//!
//! A raw LZ4 block carries no framing, so the whole block must be in memory
//! before decoding starts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;

use crate::block::decompress_core::decompress_generic;
use crate::block::{DecodeMode, DecompressError};
use crate::cli::op_mode::OpMode;
use crate::debugoutput;

/// Sentinel path: read from standard input / write to standard output.
pub const STDIN_MARK: &str = "-";
pub const STDOUT_MARK: &str = "-";

#[inline]
fn is_stdin(s: &str) -> bool {
    s == STDIN_MARK
}

#[inline]
fn is_stdout(s: &str) -> bool {
    s == STDOUT_MARK
}

/// Read the whole of `path` (or stdin for [`STDIN_MARK`]) into a buffer.
pub fn read_source(path: &str) -> anyhow::Result<Vec<u8>> {
    if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read compressed block from stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("failed to read {path}"))
}

/// Write `data` to `path`, or to stdout when `path` is `None` or [`STDOUT_MARK`].
pub fn write_sink(path: Option<&str>, data: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(p) if !is_stdout(p) => {
            let file = File::create(p).with_context(|| format!("failed to create {p}"))?;
            let mut out = BufWriter::new(file);
            out.write_all(data)
                .and_then(|()| out.flush())
                .with_context(|| format!("failed to write {p}"))
        }
        _ => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(data)
                .and_then(|()| out.flush())
                .context("failed to write decoded data to stdout")
        }
    }
}

/// Result of decoding one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Compressed bytes read from the input.
    pub consumed: usize,
    /// Decoded bytes, trimmed to the number actually produced.
    pub data: Vec<u8>,
}

/// Decode `src` according to `mode`, with `dict` as the external dictionary.
///
/// `dict` is ignored by [`OpMode::Exact`]; the argument parser rejects the
/// combination before it gets here.
pub fn decode_block(src: &[u8], mode: OpMode, dict: &[u8]) -> Result<DecodeOutcome, DecompressError> {
    let (capacity, decode_mode, dict) = match mode {
        OpMode::Exact { size } => (size, DecodeMode::FIXED_OUTPUT, &[][..]),
        OpMode::Bounded { capacity, partial: false } => (capacity, DecodeMode::BOUNDED, dict),
        OpMode::Bounded { capacity, partial: true } => (capacity, DecodeMode::PARTIAL, dict),
    };
    debugoutput!(
        "decode_block: {} input bytes, capacity {}, mode {:?}, dict {} bytes\n",
        src.len(),
        capacity,
        decode_mode,
        dict.len()
    );

    let mut data = vec![0u8; capacity];
    let decoded = decompress_generic(src, &mut data, 0, capacity, decode_mode, dict)?;
    data.truncate(decoded.written);
    Ok(DecodeOutcome {
        consumed: decoded.consumed,
        data,
    })
}
