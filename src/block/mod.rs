//! LZ4 block decompression.
//!
//! This module contains the bounds-checked LZ4 block decode engine.  It is
//! written entirely in safe Rust: input and output are addressed through the
//! cursors in [`cursor`], so corrupt input can only ever produce a
//! [`DecompressError`].

pub mod copy;
pub mod cursor;
pub mod decompress_api;
pub mod decompress_core;
pub mod error;
pub mod sequence;
pub mod types;

// Re-export the most important public API items at the module level.
pub use decompress_api::{
    decompress_exact, decompress_safe, decompress_safe_partial,
    decompress_safe_partial_using_dict, decompress_safe_using_dict, decompress_safe_with_prefix,
    lz4_decompress, lz4_decompress_unknownoutputsize,
};
pub use error::DecompressError;
pub use types::{DecodeMode, Decoded, Sequence, LZ4_DISTANCE_MAX, MINMATCH};
