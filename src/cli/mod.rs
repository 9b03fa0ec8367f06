//! Command-line interface for the `lz4dec` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, size multipliers, and the shared `DISPLAY_LEVEL` atomic with its macros. |
//! | [`arg_utils`] | Size parsing with `K`/`M`/`G` suffixes. |
//! | [`args`]      | `Args` — `clap` definition of the command line. |
//! | [`op_mode`]   | `OpMode` driver selection and the `LZ4DEC_MAX_SIZE` environment override. |
//!
//! Typical call sequence: `parse_args` → `resolve_op_mode` → `io::decode_block`.

pub mod constants;
pub mod arg_utils;
pub mod args;
pub mod op_mode;
