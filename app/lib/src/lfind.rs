//! Vectorized linear search kernels.
//!
//! Each kernel scans the longest prefix of the slice that is a whole
//! number of vector units with the vector backend, then finishes the
//! remainder one element at a time. The `*_with` variants are generic over
//! the backend; the plain functions use the one compiled into this build.

use crate::simd::{Native32, Native8, Vector32, Vector8};

/// Return true if any element of `base` equals `key`.
///
/// # Example
///
/// ```rust
/// use lfind_simd::lfind8;
///
/// let values = [1u8, 3, 5, 7, 9, 11, 13, 15];
/// assert!(lfind8(5, &values));
/// assert!(!lfind8(2, &values));
/// assert!(!lfind8(5, &[]));
/// ```
#[inline]
pub fn lfind8(key: u8, base: &[u8]) -> bool {
    lfind8_with::<Native8>(key, base)
}

/// Return true if any element of `base` is less than or equal to `key`.
///
/// # Example
///
/// ```rust
/// use lfind_simd::lfind8_le;
///
/// let values = [10u8, 30, 50, 70, 90, 110, 130, 150];
/// assert!(lfind8_le(25, &values));
/// assert!(!lfind8_le(5, &values));
/// ```
#[inline]
pub fn lfind8_le(key: u8, base: &[u8]) -> bool {
    lfind8_le_with::<Native8>(key, base)
}

/// Return true if any element of `base` equals `key`.
///
/// # Example
///
/// ```rust
/// use lfind_simd::lfind32;
///
/// assert!(lfind32(0xDEADBEEF, &[0xDEADBEEF]));
/// assert!(!lfind32(0xCAFEBABE, &[0xDEADBEEF]));
/// ```
#[inline]
pub fn lfind32(key: u32, base: &[u32]) -> bool {
    lfind32_with::<Native32>(key, base)
}

/// [`lfind8`] over an explicit backend.
#[inline]
pub fn lfind8_with<V: Vector8>(key: u8, base: &[u8]) -> bool {
    let nelem = base.len();
    let ptr = base.as_ptr();

    // round down to multiple of vector length
    let tail_idx = nelem & !(V::LANES - 1);

    let mut i = 0;
    while i < tail_idx {
        // Safety: i + LANES <= tail_idx <= nelem
        let chunk = unsafe { V::load(ptr.add(i)) };
        if chunk.has(key) {
            return true;
        }
        i += V::LANES;
    }

    base[tail_idx..].iter().any(|&x| x == key)
}

/// [`lfind8_le`] over an explicit backend.
#[inline]
pub fn lfind8_le_with<V: Vector8>(key: u8, base: &[u8]) -> bool {
    let nelem = base.len();
    let ptr = base.as_ptr();

    let tail_idx = nelem & !(V::LANES - 1);

    let mut i = 0;
    while i < tail_idx {
        // Safety: i + LANES <= tail_idx <= nelem
        let chunk = unsafe { V::load(ptr.add(i)) };
        if chunk.has_le(key) {
            return true;
        }
        i += V::LANES;
    }

    base[tail_idx..].iter().any(|&x| x <= key)
}

/// [`lfind32`] over an explicit backend.
///
/// Each iteration tests a block of four registers: four independent loads
/// and compares, merged with a tree of ORs into a single mask so only one
/// high-bit reduction and branch is paid per block.
#[inline]
pub fn lfind32_with<V: Vector32>(key: u32, base: &[u32]) -> bool {
    let nelem = base.len();
    let ptr = base.as_ptr();

    let keys = V::broadcast(key);
    let nelem_per_vector = V::LANES;
    let nelem_per_iteration = 4 * nelem_per_vector;

    // round down to multiple of elements per iteration
    let tail_idx = nelem & !(nelem_per_iteration - 1);

    let mut i = 0;
    while i < tail_idx {
        // Safety: i + nelem_per_iteration <= tail_idx <= nelem
        let (vals1, vals2, vals3, vals4) = unsafe {
            (
                V::load(ptr.add(i)),
                V::load(ptr.add(i + nelem_per_vector)),
                V::load(ptr.add(i + nelem_per_vector * 2)),
                V::load(ptr.add(i + nelem_per_vector * 3)),
            )
        };

        let result1 = keys.eq(vals1);
        let result2 = keys.eq(vals2);
        let result3 = keys.eq(vals3);
        let result4 = keys.eq(vals4);

        let tmp1 = result1.or(result2);
        let tmp2 = result3.or(result4);
        let result = tmp1.or(tmp2);

        if result.is_highbit_set() {
            return true;
        }
        i += nelem_per_iteration;
    }

    base[tail_idx..].iter().any(|&x| x == key)
}

/// Number of `u32` elements tested per vectorized iteration of [`lfind32`].
pub const fn lfind32_block_size() -> usize {
    4 * <Native32 as Vector32>::LANES
}
