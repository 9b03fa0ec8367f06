// lz4dec — bounds-checked LZ4 block decompressor

pub mod block;
pub mod cli;
pub mod config;
pub mod io;
pub mod xxhash;

// ── Version constants ─────────────────────────────────────────────────────────
pub const LZ4DEC_VERSION_MAJOR: u32 = 0;
pub const LZ4DEC_VERSION_MINOR: u32 = 3;
pub const LZ4DEC_VERSION_RELEASE: u32 = 0;
pub const LZ4DEC_VERSION_NUMBER: u32 =
    LZ4DEC_VERSION_MAJOR * 100 * 100 + LZ4DEC_VERSION_MINOR * 100 + LZ4DEC_VERSION_RELEASE;
pub const LZ4DEC_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the version number as `major * 10000 + minor * 100 + release`.
pub fn version_number() -> u32 {
    LZ4DEC_VERSION_NUMBER
}

pub fn version_string() -> &'static str {
    LZ4DEC_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::decompress_api::decompress_exact as lz4_decompress_fast;
pub use block::decompress_api::decompress_safe as lz4_decompress_safe;
pub use block::decompress_api::decompress_safe_partial as lz4_decompress_safe_partial;
pub use block::decompress_api::decompress_safe_using_dict as lz4_decompress_safe_using_dict;
pub use block::{lz4_decompress, lz4_decompress_unknownoutputsize, DecompressError};
