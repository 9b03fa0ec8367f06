// Display-level infrastructure.

use lz4dec::cli::constants::{display_level_for, PROGRAM_NAME};
use lz4dec::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

#[test]
fn program_name() {
    assert_eq!(PROGRAM_NAME, "lz4dec");
}

#[test]
fn default_level_without_flags() {
    assert_eq!(display_level_for(0, 0), DISPLAY_LEVEL_DEFAULT);
}

#[test]
fn verbose_and_quiet_cancel_out() {
    assert_eq!(display_level_for(1, 1), DISPLAY_LEVEL_DEFAULT);
    assert_eq!(display_level_for(3, 3), DISPLAY_LEVEL_DEFAULT);
}

#[test]
fn level_is_bounded_on_both_sides() {
    assert_eq!(display_level_for(u8::MAX, 0), DISPLAY_LEVEL_MAX);
    assert_eq!(display_level_for(0, u8::MAX), 0);
}
