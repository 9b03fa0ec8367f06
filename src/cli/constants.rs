// cli/constants.rs — program identity, size multipliers and the display-level
// infrastructure shared by the CLI and the I/O layer.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "lz4dec";

// ── Size multiplier constants ─────────────────────────────────────────────────
pub const KB: u64 = 1 << 10;
pub const MB: u64 = 1 << 20;
pub const GB: u64 = 1 << 30;

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (downgradable); 3 = verbose
// summary; 4 = debug tracing.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, saturating at [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

/// Level resulting from `verbose` `-v` flags and `quiet` `-q` flags applied
/// to the default.
pub fn display_level_for(verbose: u8, quiet: u8) -> u32 {
    DISPLAY_LEVEL_DEFAULT
        .saturating_add(u32::from(verbose))
        .saturating_sub(u32::from(quiet))
        .min(DISPLAY_LEVEL_MAX)
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Debug tracing: active in debug builds at display level 4 only.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if $crate::cli::constants::display_level() >= 4 {
                eprint!($($arg)*);
            }
        }
    };
}
