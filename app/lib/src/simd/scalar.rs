//! Scalar (non-SIMD) reference scans.
//!
//! These are the trivial one-element-at-a-time searches. The dispatcher
//! uses them when vector backends are disabled, and tests use them as the
//! oracle for the vector kernels.

/// Return true if any element of `base` equals `key`.
pub fn lfind8_scalar(key: u8, base: &[u8]) -> bool {
    base.iter().any(|&x| x == key)
}

/// Return true if any element of `base` is less than or equal to `key`.
pub fn lfind8_le_scalar(key: u8, base: &[u8]) -> bool {
    base.iter().any(|&x| x <= key)
}

/// Return true if any element of `base` equals `key`.
pub fn lfind32_scalar(key: u32, base: &[u32]) -> bool {
    base.iter().any(|&x| x == key)
}
