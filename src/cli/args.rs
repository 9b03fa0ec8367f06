//! Command-line argument definitions for `lz4dec`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`, exits on
//! bad usage) and [`parse_args_from`] (takes an explicit iterator, suitable
//! for unit-testing).

use clap::{ArgAction, Parser};

use crate::cli::arg_utils::parse_capacity;
use crate::io::STDIN_MARK;

/// Decode one raw LZ4 block (no frame header).
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "lz4dec", version, about)]
pub struct Args {
    /// Compressed block to read; "-" reads stdin.
    #[arg(value_name = "INPUT", default_value = STDIN_MARK)]
    pub input: String,

    /// Where to write the decoded data; stdout when omitted or "-".
    #[arg(value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Exact decoded size; selects the fixed-capacity driver.
    #[arg(
        short = 's',
        long = "size",
        value_name = "N",
        value_parser = parse_capacity,
        conflicts_with_all = ["max_size", "partial", "dict"]
    )]
    pub size: Option<usize>,

    /// Output capacity for the bounded driver (accepts K/M/G suffixes).
    #[arg(short = 'm', long = "max-size", value_name = "N", value_parser = parse_capacity)]
    pub max_size: Option<usize>,

    /// Stop successfully once the output capacity is reached.
    #[arg(short = 'p', long = "partial")]
    pub partial: bool,

    /// External dictionary that logically precedes the decoded data.
    #[arg(short = 'D', long = "dict", value_name = "FILE")]
    pub dict: Option<String>,

    /// Decode and validate only; write nothing.
    #[arg(short = 't', long = "test", conflicts_with = "output")]
    pub test: bool,

    /// Raise the display level (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Lower the display level (repeatable).
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

/// Parse `std::env::args()`; prints usage and exits on bad usage.
pub fn parse_args() -> Args {
    Args::parse()
}

/// Parse an explicit argument list (first item is the program name).
pub fn parse_args_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args)
}
