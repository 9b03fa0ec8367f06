// arg_utils.rs — size-argument parsing shared by the command line and the
// LZ4DEC_MAX_SIZE environment variable.

use crate::cli::constants::{GB, KB, MB};
use crate::config::MAX_OUTPUT_CEILING;

/// Parses an unsigned integer from the start of `s`, optionally followed by
/// a size suffix.  Returns `None` if no leading digits are present or the
/// value does not fit in `u64`, or `Some((value, remainder))` where
/// `remainder` is the slice of `s` that was not consumed.
///
/// Recognised suffixes (case-sensitive):
///   `K` / `KB` / `KiB`  → multiply by 1 024
///   `M` / `MB` / `MiB`  → multiply by 1 048 576
///   `G` / `GB` / `GiB`  → multiply by 1 073 741 824
pub fn read_size_from_str(s: &str) -> Option<(u64, &str)> {
    let bytes = s.as_bytes();
    let mut i = 0usize;

    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return None;
    }

    let mut result: u64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        result = result
            .checked_mul(10)?
            .checked_add(u64::from(bytes[i] - b'0'))?;
        i += 1;
    }

    let multiplier = match bytes.get(i) {
        Some(b'K') => KB,
        Some(b'M') => MB,
        Some(b'G') => GB,
        _ => return Some((result, &s[i..])),
    };
    result = result.checked_mul(multiplier)?;
    i += 1;
    if bytes.get(i) == Some(&b'i') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'B') {
        i += 1;
    }

    Some((result, &s[i..]))
}

/// Parse a complete size argument such as `4096`, `64K` or `1MiB`.
///
/// Used as a `clap` value parser: trailing garbage and values that do not
/// fit in `usize` are rejected with a message.
pub fn parse_size(s: &str) -> Result<usize, String> {
    match read_size_from_str(s) {
        Some((value, "")) => {
            usize::try_from(value).map_err(|_| format!("size too large: {s}"))
        }
        Some((_, rest)) => Err(format!("unexpected characters after size: {rest}")),
        None => Err(format!("not a valid size: {s}")),
    }
}

/// [`parse_size`] for output sizes: additionally rejects values above
/// [`MAX_OUTPUT_CEILING`], since the CLI allocates the whole buffer up front.
pub fn parse_capacity(s: &str) -> Result<usize, String> {
    let size = parse_size(s)?;
    if size > MAX_OUTPUT_CEILING {
        return Err(format!(
            "output size {s} exceeds the {} MiB limit",
            MAX_OUTPUT_CEILING >> 20
        ));
    }
    Ok(size)
}
