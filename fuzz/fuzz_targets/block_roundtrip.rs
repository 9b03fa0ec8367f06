#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Compress with an independent encoder, then decode with both drivers.
    let compressed = lz4_flex::block::compress(data);

    let mut fixed = vec![0u8; data.len()];
    let consumed = lz4dec::lz4_decompress_fast(&compressed, &mut fixed)
        .expect("fixed-size decode of a valid block failed");
    assert_eq!(consumed, compressed.len());
    assert_eq!(fixed, data);

    let mut bounded = vec![0u8; data.len() + 32];
    let written = lz4dec::lz4_decompress_safe(&compressed, &mut bounded)
        .expect("bounded decode of a valid block failed");
    assert_eq!(&bounded[..written], data);
});
