//! Thin wrapper around the `xxhash-rust` crate providing the XXH32 digest
//! the CLI prints for decoded payloads.

/// Seed used for every digest the CLI reports.
pub const DIGEST_SEED: u32 = 0;

/// One-shot XXH32 hash.
///
/// # Parity vectors
/// * `xxh32_oneshot(b"", 0)` == `0x02CC5D05`
#[inline]
pub fn xxh32_oneshot(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}

/// Digest of a decoded payload, formatted the way the CLI reports it.
pub fn payload_digest(data: &[u8]) -> String {
    format!("{:08X}", xxh32_oneshot(data, DIGEST_SEED))
}
