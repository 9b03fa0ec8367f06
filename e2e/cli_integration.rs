// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `lz4dec` binary as a black-box tool using std::process::Command.
// Covers driver selection, stdin/stdout handling, test mode, dictionaries,
// verbosity and exit codes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn lz4dec_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4dec"))
}

fn sample() -> Vec<u8> {
    "Hello, LZ4 block!\n".repeat(300).into_bytes()
}

/// Write `sample()` compressed as a raw block into a fresh TempDir.
fn make_block() -> (TempDir, PathBuf, Vec<u8>) {
    let dir = TempDir::new().unwrap();
    let original = sample();
    let path = dir.path().join("input.lz4b");
    fs::write(&path, lz4_flex::block::compress(&original)).unwrap();
    (dir, path, original)
}

fn arg(p: &Path) -> &str {
    p.to_str().unwrap()
}

// ── 1. Bounded driver (default) ──────────────────────────────────────────────

#[test]
fn test_cli_bounded_decode_to_file() {
    let (dir, input, original) = make_block();
    let output = dir.path().join("out.bin");
    let status = Command::new(lz4dec_bin())
        .args([arg(&input), arg(&output)])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&output).unwrap(), original);
}

// ── 2. Fixed-capacity driver ─────────────────────────────────────────────────

#[test]
fn test_cli_exact_size_decode() {
    let (dir, input, original) = make_block();
    let output = dir.path().join("out.bin");
    let size = original.len().to_string();
    let status = Command::new(lz4dec_bin())
        .args(["-s", &size, arg(&input), arg(&output)])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&output).unwrap(), original);
}

#[test]
fn test_cli_exact_size_one_short_fails() {
    let (dir, input, original) = make_block();
    let output = dir.path().join("out.bin");
    let size = (original.len() - 1).to_string();
    let out = Command::new(lz4dec_bin())
        .args(["--size", &size, arg(&input), arg(&output)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("corrupted LZ4 block"), "stderr: {stderr}");
}

// ── 3. stdin / stdout ────────────────────────────────────────────────────────

#[test]
fn test_cli_stdin_to_stdout() {
    let original = sample();
    let compressed = lz4_flex::block::compress(&original);
    let mut child = Command::new(lz4dec_bin())
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&compressed).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, original);
}

// ── 4. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_test_mode_writes_nothing() {
    let (_dir, input, _original) = make_block();
    let out = Command::new(lz4dec_bin())
        .args(["-t", arg(&input)])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("OK"));
}

#[test]
fn test_cli_test_mode_quiet() {
    let (_dir, input, _original) = make_block();
    let out = Command::new(lz4dec_bin())
        .args(["-t", "-q", arg(&input)])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}

// ── 5. Partial decoding and capacity ─────────────────────────────────────────

#[test]
fn test_cli_partial_decode() {
    let (dir, input, original) = make_block();
    let output = dir.path().join("head.bin");
    let status = Command::new(lz4dec_bin())
        .args(["-p", "-m", "100", arg(&input), arg(&output)])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&output).unwrap(), &original[..100]);
}

#[test]
fn test_cli_capacity_too_small_fails() {
    let (_dir, input, _original) = make_block();
    let status = Command::new(lz4dec_bin())
        .args(["-t", "-q", "-m", "1K", arg(&input)])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_cli_env_capacity_override() {
    let (_dir, input, _original) = make_block();
    let status = Command::new(lz4dec_bin())
        .env("LZ4DEC_MAX_SIZE", "1K")
        .args(["-t", "-q", arg(&input)])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));

    let status = Command::new(lz4dec_bin())
        .env("LZ4DEC_MAX_SIZE", "1M")
        .args(["-t", "-q", arg(&input)])
        .status()
        .unwrap();
    assert!(status.success());
}

// ── 6. Dictionary ────────────────────────────────────────────────────────────

#[test]
fn test_cli_dictionary_decode() {
    let dir = TempDir::new().unwrap();
    let dict = sample();
    let original = b"Hello, LZ4 block!\nand a different tail line\n".repeat(3);
    let input = dir.path().join("dict.lz4b");
    let dict_path = dir.path().join("dict.bin");
    let output = dir.path().join("out.bin");
    fs::write(&input, lz4_flex::block::compress_with_dict(&original, &dict)).unwrap();
    fs::write(&dict_path, &dict).unwrap();

    let status = Command::new(lz4dec_bin())
        .args(["-D", arg(&dict_path), arg(&input), arg(&output)])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&output).unwrap(), original);
}

// ── 7. Verbose report ────────────────────────────────────────────────────────

#[test]
fn test_cli_verbose_reports_digest() {
    let (_dir, input, original) = make_block();
    let out = Command::new(lz4dec_bin())
        .args(["-t", "-v", arg(&input)])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    let digest = format!("{:08X}", xxhash_rust::xxh32::xxh32(&original, 0));
    assert!(stderr.contains(&digest), "stderr: {stderr}");
    assert!(stderr.contains(&format!("{} bytes", original.len())), "stderr: {stderr}");
}

// ── 8. Usage errors ──────────────────────────────────────────────────────────

#[test]
fn test_cli_conflicting_options() {
    let (_dir, input, _original) = make_block();
    let out = Command::new(lz4dec_bin())
        .args(["-s", "10", "-p", arg(&input)])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn test_cli_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.lz4b");
    let out = Command::new(lz4dec_bin())
        .args(["-t", arg(&missing)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.lz4b"));
}
