//! Binary entry point for the `lz4dec` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] reads the command line into an [`Args`] value.
//! 2. [`run`] loads the input (and dictionary), selects the decode driver,
//!    decodes the block and writes or discards the result.
//! 3. Any error is reported at display level 1 and the process exits with 1.

use anyhow::Context;

use lz4dec::cli::args::{parse_args, Args};
use lz4dec::cli::constants::{display_level_for, set_display_level, PROGRAM_NAME};
use lz4dec::cli::op_mode::{init_max_size, resolve_op_mode, OpMode};
use lz4dec::io::{decode_block, read_source, write_sink};
use lz4dec::xxhash::payload_digest;
use lz4dec::{displaylevel, version_string};

fn run(args: Args) -> anyhow::Result<()> {
    displaylevel!(
        3,
        "*** {} v{} {}-bit, raw LZ4 block decoder ***\n",
        PROGRAM_NAME,
        version_string(),
        usize::BITS
    );

    let src = read_source(&args.input)?;
    let dict = match &args.dict {
        Some(path) => read_source(path).context("failed to load dictionary")?,
        None => Vec::new(),
    };
    let mode = resolve_op_mode(&args, init_max_size(), src.len());
    displaylevel!(4, "{}: {:?}\n", args.input, mode);

    let outcome = decode_block(&src, mode, &dict)
        .with_context(|| format!("{}: cannot decode block", args.input))?;

    if let OpMode::Exact { .. } = mode {
        if outcome.consumed < src.len() {
            displaylevel!(
                2,
                "{}: {} trailing bytes after the block were ignored\n",
                args.input,
                src.len() - outcome.consumed
            );
        }
    }

    if args.test {
        displaylevel!(2, "{}: OK\n", args.input);
    } else {
        write_sink(args.output.as_deref(), &outcome.data)?;
    }

    displaylevel!(
        3,
        "{}: {} bytes -> {} bytes, XXH32 {}\n",
        args.input,
        outcome.consumed,
        outcome.data.len(),
        payload_digest(&outcome.data)
    );
    Ok(())
}

fn main() {
    let args = parse_args();
    set_display_level(display_level_for(args.verbose, args.quiet));

    if let Err(err) = run(args) {
        displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, err);
        std::process::exit(1);
    }
}
