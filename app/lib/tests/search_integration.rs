//! Search behavior through the public API.

use lfind_simd::{
    has_32bit_exact_match, has_8bit_exact_match, has_8bit_le_match, lfind32, lfind32_block_size,
    lfind8, lfind8_le, SearchDispatcher,
};

#[test]
fn test_exact_match_u8_concrete() {
    let values = [1u8, 3, 5, 7, 9, 11, 13, 15];
    assert!(has_8bit_exact_match(5, &values));
    assert!(!has_8bit_exact_match(2, &values));
}

#[test]
fn test_le_match_u8_concrete() {
    let values = [10u8, 30, 50, 70, 90, 110, 130, 150];
    assert!(has_8bit_le_match(25, &values));
    assert!(!has_8bit_le_match(5, &values));
}

#[test]
fn test_exact_match_u32_concrete() {
    assert!(has_32bit_exact_match(0xDEADBEEF, &[0xDEADBEEF]));
    assert!(!has_32bit_exact_match(0xCAFEBABE, &[0xDEADBEEF]));
}

#[test]
fn test_empty_arrays() {
    assert!(!lfind8(0, &[]));
    assert!(!lfind8_le(255, &[]));
    assert!(!lfind32(0, &[]));
}

#[test]
fn test_large_u8_array_every_key() {
    let values: Vec<u8> = (0..10_000u32).map(|i| (i % 256) as u8).collect();
    for key in 0..=255u8 {
        assert!(lfind8(key, &values), "key {}", key);
    }

    let odd: Vec<u8> = (0..10_000u32).map(|i| ((i % 128) * 2 + 1) as u8).collect();
    for key in 0..=255u8 {
        assert_eq!(lfind8(key, &odd), key % 2 == 1, "key {}", key);
        assert_eq!(lfind8_le(key, &odd), key >= 1, "key {}", key);
    }
}

#[test]
fn test_large_u32_array_even_values() {
    let values: Vec<u32> = (0..10_000u32).map(|i| i * 2).collect();
    assert!(lfind32(1000, &values));
    assert!(!lfind32(1001, &values));
    for key in (0..1000u32).step_by(10) {
        assert_eq!(lfind32(key, &values), key % 2 == 0);
    }
    assert!(lfind32(19_998, &values));
    assert!(!lfind32(20_000, &values));
}

#[test]
fn test_first_and_last_for_every_small_size() {
    for size in 1..=64usize {
        let values: Vec<u8> = (0..size).map(|i| i as u8).collect();
        assert!(lfind8(0, &values), "size {}", size);
        assert!(lfind8((size - 1) as u8, &values), "size {}", size);
        assert!(!lfind8(size as u8, &values), "size {}", size);
    }
}

#[test]
fn test_misaligned_bases() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(300).collect();
    let words: Vec<u32> = (0..300u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    let block = lfind32_block_size();

    for offset in 0..block {
        let b = &bytes[offset..offset + 2 * 16 + 1];
        for key in 0..=255u8 {
            assert_eq!(lfind8(key, b), b.contains(&key), "offset {} key {}", offset, key);
            assert_eq!(
                lfind8_le(key, b),
                b.iter().any(|&x| x <= key),
                "offset {} key {}",
                offset,
                key
            );
        }

        let w = &words[offset..offset + 2 * block + 1];
        for &key in w {
            assert!(lfind32(key, w), "offset {} key {:#x}", offset, key);
        }
        assert!(!lfind32(words[offset + 2 * block + 1], w));
    }
}

#[test]
fn test_dispatcher_levels_agree() {
    let native = SearchDispatcher::new();
    let scalar = SearchDispatcher::scalar_only();
    let words: Vec<u32> = (0..257).collect();
    for key in 0..300u32 {
        assert_eq!(native.find_u32(key, &words), scalar.find_u32(key, &words));
    }
}
