//! Decode-driver selection and startup defaults for the CLI.
//!
//! - [`OpMode`] — which driver runs and with what output capacity.
//! - [`init_max_size`] — reads the bounded capacity override from the
//!   environment.
//! - [`resolve_op_mode`] — combines parsed arguments, environment and the
//!   input size into an [`OpMode`].

use crate::cli::arg_utils::read_size_from_str;
use crate::cli::args::Args;
use crate::cli::constants::display_level;
use crate::config::{default_capacity, ENV_MAX_SIZE, MAX_OUTPUT_CEILING};

/// Which decode driver the CLI runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Fixed-capacity driver: the decoded size is known to be exactly `size`.
    Exact { size: usize },
    /// Bounded driver: decode at most `capacity` bytes.  With `partial`,
    /// reaching `capacity` before the end of the block is success.
    Bounded { capacity: usize, partial: bool },
}

/// Read the bounded capacity override from `LZ4DEC_MAX_SIZE`.
pub fn init_max_size() -> Option<usize> {
    init_max_size_from(std::env::var(ENV_MAX_SIZE).ok().as_deref())
}

/// Testable core of [`init_max_size`]: parse an optional `LZ4DEC_MAX_SIZE` value.
///
/// Pass `Some(s)` with the raw string, or `None` to simulate the variable being
/// unset.  Invalid values and values above [`MAX_OUTPUT_CEILING`] are
/// reported at display level 2 and ignored.
pub fn init_max_size_from(env_val: Option<&str>) -> Option<usize> {
    let env = env_val?;
    if let Some((val, "")) = read_size_from_str(env) {
        if let Ok(size) = usize::try_from(val) {
            if size <= MAX_OUTPUT_CEILING {
                return Some(size);
            }
        }
    }
    if display_level() >= 2 {
        eprintln!(
            "Ignore environment variable setting {}={}: not a valid size up to {} MiB ",
            ENV_MAX_SIZE,
            env,
            MAX_OUTPUT_CEILING >> 20
        );
    }
    None
}

/// Pick the driver for `args`.
///
/// The bounded capacity comes from `--max-size`, then `env_max_size`, then
/// the worst-case expansion of `compressed_len`.
pub fn resolve_op_mode(args: &Args, env_max_size: Option<usize>, compressed_len: usize) -> OpMode {
    if let Some(size) = args.size {
        return OpMode::Exact { size };
    }
    let capacity = args
        .max_size
        .or(env_max_size)
        .unwrap_or_else(|| default_capacity(compressed_len));
    OpMode::Bounded {
        capacity,
        partial: args.partial,
    }
}
