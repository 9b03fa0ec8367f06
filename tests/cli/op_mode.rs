// Driver selection and the LZ4DEC_MAX_SIZE override.

use lz4dec::cli::args::parse_args_from;
use lz4dec::cli::op_mode::{init_max_size_from, resolve_op_mode, OpMode};
use lz4dec::config::{MAX_EXPANSION_RATIO, MAX_OUTPUT_CEILING};

#[test]
fn env_value_parsing() {
    assert_eq!(init_max_size_from(None), None);
    assert_eq!(init_max_size_from(Some("1M")), Some(1 << 20));
    assert_eq!(init_max_size_from(Some("")), None);
    assert_eq!(init_max_size_from(Some("1M ")), None);
    assert_eq!(init_max_size_from(Some("1G")), None);
}

#[test]
fn explicit_sizes_are_capped_at_the_ceiling() {
    let limit = format!("{}", MAX_OUTPUT_CEILING);
    let above = format!("{}", MAX_OUTPUT_CEILING + 1);
    let args = parse_args_from(["lz4dec", "-m", limit.as_str(), "in"]).unwrap();
    assert_eq!(
        resolve_op_mode(&args, None, 10),
        OpMode::Bounded { capacity: MAX_OUTPUT_CEILING, partial: false }
    );
    assert!(parse_args_from(["lz4dec", "-m", above.as_str(), "in"]).is_err());
    assert!(parse_args_from(["lz4dec", "--size", above.as_str(), "in"]).is_err());
}

#[test]
fn exact_driver_when_size_given() {
    let args = parse_args_from(["lz4dec", "--size", "4KiB", "in"]).unwrap();
    assert_eq!(resolve_op_mode(&args, None, 10), OpMode::Exact { size: 4096 });
}

#[test]
fn bounded_capacity_defaults_to_worst_case_expansion() {
    let args = parse_args_from(["lz4dec", "in"]).unwrap();
    assert_eq!(
        resolve_op_mode(&args, None, 1000),
        OpMode::Bounded { capacity: 1000 * MAX_EXPANSION_RATIO, partial: false }
    );
    assert_eq!(
        resolve_op_mode(&args, None, usize::MAX / 2),
        OpMode::Bounded { capacity: MAX_OUTPUT_CEILING, partial: false }
    );
}

#[test]
fn flag_beats_environment() {
    let args = parse_args_from(["lz4dec", "-m", "10", "in"]).unwrap();
    assert_eq!(
        resolve_op_mode(&args, Some(20), 1000),
        OpMode::Bounded { capacity: 10, partial: false }
    );
    let args = parse_args_from(["lz4dec", "in"]).unwrap();
    assert_eq!(
        resolve_op_mode(&args, Some(20), 1000),
        OpMode::Bounded { capacity: 20, partial: false }
    );
}
