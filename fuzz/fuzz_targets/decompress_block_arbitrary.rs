#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through every driver.  Errors are expected; what we
    // verify is no panics and that successful decodes agree with each other.

    // Capacity large enough for any block this input could describe, capped
    // so tiny inputs claiming huge output do not OOM the fuzzer.
    let large = data.len().saturating_mul(255).min(1 << 20);

    let mut bounded = vec![0u8; large];
    let full = lz4dec::lz4_decompress_safe(data, &mut bounded);

    for cap in [0usize, 16, 4096, data.len(), large] {
        let mut dst = vec![0u8; cap];
        let _ = lz4dec::lz4_decompress_safe(data, &mut dst);

        // A partial decode is a prefix of the full decode.
        let mut partial = vec![0u8; cap];
        if let (Ok(n), Ok(total)) = (
            lz4dec::lz4_decompress_safe_partial(data, &mut partial, cap),
            full,
        ) {
            assert!(n <= cap);
            let m = n.min(total);
            assert_eq!(&partial[..m], &bounded[..m]);
        }
    }

    // The fixed-size driver, given the size the bounded driver found, must
    // reproduce the same bytes whenever it succeeds.
    if let Ok(total) = full {
        let mut fixed = vec![0u8; total];
        if lz4dec::lz4_decompress_fast(data, &mut fixed).is_ok() {
            assert_eq!(&fixed[..], &bounded[..total]);
        }
    }
});
