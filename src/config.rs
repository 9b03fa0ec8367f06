// config.rs — Compile-time defaults for the lz4dec command-line tool.
//
// The block engine itself has no configuration beyond its call parameters;
// everything here only affects how the CLI sizes buffers and reports.

// Default display level (2 = normal, downgradable with -q).
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Highest display level the CLI honours; further -v flags are ignored.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// Largest expansion an LZ4 block can encode: every extension byte of a
// match length adds 255 output bytes for one input byte.
// Used to size the bounded driver's buffer when no --max-size is given.
pub const MAX_EXPANSION_RATIO: usize = 255;

// Largest output buffer the CLI allocates (256 MiB).  The derived default
// capacity is clamped to it; larger --size, --max-size or LZ4DEC_MAX_SIZE
// values are rejected.
pub const MAX_OUTPUT_CEILING: usize = 1 << 28;

// Environment variable overriding the default bounded capacity.
pub const ENV_MAX_SIZE: &str = "LZ4DEC_MAX_SIZE";

/// Capacity used for the bounded driver when neither `--max-size` nor
/// [`ENV_MAX_SIZE`] is set: the worst-case expansion of `compressed_len`,
/// clamped to [`MAX_OUTPUT_CEILING`].
pub fn default_capacity(compressed_len: usize) -> usize {
    compressed_len
        .saturating_mul(MAX_EXPANSION_RATIO)
        .min(MAX_OUTPUT_CEILING)
}
