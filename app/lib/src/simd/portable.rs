//! Portable backend built from plain lane arrays.
//!
//! These types mirror a 128-bit register with ordinary integer operations.
//! They are the native backend on targets without SSE2 or NEON (or when
//! the `simd` feature is off) and are compiled everywhere so the kernels
//! can be checked against them.

/// Sixteen 8-bit lanes.
#[derive(Debug, Clone, Copy)]
pub struct U8x16(pub [u8; 16]);

/// Four 32-bit lanes.
#[derive(Debug, Clone, Copy)]
pub struct U32x4(pub [u32; 4]);

const MASK: u8 = 0xFF;

impl super::Vector8 for U8x16 {
    const LANES: usize = 16;

    #[inline(always)]
    unsafe fn load(ptr: *const u8) -> Self {
        Self(ptr.cast::<[u8; 16]>().read_unaligned())
    }

    #[inline(always)]
    fn broadcast(c: u8) -> Self {
        Self([c; 16])
    }

    #[inline(always)]
    fn eq(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| {
            if self.0[i] == other.0[i] {
                MASK
            } else {
                0
            }
        }))
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] | other.0[i]))
    }

    #[inline(always)]
    fn ssub(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].saturating_sub(other.0[i])))
    }

    #[inline(always)]
    fn is_highbit_set(self) -> bool {
        self.0.iter().any(|&lane| lane & 0x80 != 0)
    }
}

impl super::Vector32 for U32x4 {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn load(ptr: *const u32) -> Self {
        Self(ptr.cast::<[u32; 4]>().read_unaligned())
    }

    #[inline(always)]
    fn broadcast(c: u32) -> Self {
        Self([c; 4])
    }

    #[inline(always)]
    fn eq(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| {
            if self.0[i] == other.0[i] {
                u32::MAX
            } else {
                0
            }
        }))
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] | other.0[i]))
    }

    // Byte-wise, like the SIMD backends.
    #[inline(always)]
    fn is_highbit_set(self) -> bool {
        self.0.iter().any(|&lane| lane & 0x8080_8080 != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Vector32, Vector8};
    use super::*;

    #[test]
    fn test_eq_mask() {
        let v = U8x16([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 3]);
        let mask = v.eq(U8x16::broadcast(3));
        let mut expected = [0u8; 16];
        expected[2] = 0xFF;
        expected[15] = 0xFF;
        assert_eq!(mask.0, expected);
    }

    #[test]
    fn test_ssub() {
        let v = U8x16([0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 255]);
        let diff = v.ssub(U8x16::broadcast(20));
        assert_eq!(
            diff.0,
            [0, 0, 0, 0, 0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 235]
        );
    }

    #[test]
    fn test_highbit() {
        assert!(!U8x16([0x7F; 16]).is_highbit_set());
        let mut lanes = [0u8; 16];
        lanes[11] = 0x80;
        assert!(U8x16(lanes).is_highbit_set());
    }

    #[test]
    fn test_unaligned_load() {
        let data: Vec<u8> = (0..40).collect();
        let v = unsafe { U8x16::load(data.as_ptr().add(3)) };
        assert_eq!(v.0[0], 3);
        assert_eq!(v.0[15], 18);

        let words: Vec<u32> = (0..12).collect();
        let bytes = words.as_ptr().cast::<u8>();
        // Offset by one byte to force a misaligned u32 pointer.
        let mut shifted = vec![0u8; 1 + 16];
        unsafe { std::ptr::copy_nonoverlapping(bytes, shifted.as_mut_ptr().add(1), 16) };
        let w = unsafe { U32x4::load(shifted.as_ptr().add(1).cast::<u32>()) };
        assert_eq!(w.0, [0, 1, 2, 3]);
    }

    #[test]
    fn test_u32_highbit_is_bytewise() {
        // Any byte with its high bit set counts, not just bit 31.
        assert!(U32x4([0x0000_0080, 0, 0, 0]).is_highbit_set());
        assert!(U32x4([0, 0, 0, 0x8000_0000]).is_highbit_set());
        assert!(!U32x4([0x7F7F_7F7F; 4]).is_highbit_set());
    }

    #[test]
    fn test_u32_eq_or() {
        let a = U32x4([1, 2, 3, 4]);
        let b = U32x4([5, 6, 7, 8]);
        let key = U32x4::broadcast(6);
        let merged = a.eq(key).or(b.eq(key));
        assert_eq!(merged.0, [0, u32::MAX, 0, 0]);
        assert!(merged.is_highbit_set());
        assert!(!a.eq(key).is_highbit_set());
    }
}
