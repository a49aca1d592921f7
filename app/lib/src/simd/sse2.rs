//! SSE2 backend for x86_64.
//!
//! SSE2 is part of the x86_64 baseline, so these types need no runtime
//! feature check. Both register types wrap the same `__m128i`; the lane
//! width only decides which compare instruction is used.

use std::arch::x86_64::*;

/// Sixteen 8-bit lanes in one `__m128i`.
#[derive(Clone, Copy)]
pub struct U8x16(__m128i);

/// Four 32-bit lanes in one `__m128i`.
#[derive(Clone, Copy)]
pub struct U32x4(__m128i);

impl super::Vector8 for U8x16 {
    const LANES: usize = 16;

    #[inline(always)]
    unsafe fn load(ptr: *const u8) -> Self {
        Self(_mm_loadu_si128(ptr.cast::<__m128i>()))
    }

    #[inline(always)]
    fn broadcast(c: u8) -> Self {
        // Safety: SSE2 is always available on x86_64
        Self(unsafe { _mm_set1_epi8(c as i8) })
    }

    #[inline(always)]
    fn eq(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi8(self.0, other.0) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, other.0) })
    }

    #[inline(always)]
    fn ssub(self, other: Self) -> Self {
        Self(unsafe { _mm_subs_epu8(self.0, other.0) })
    }

    #[inline(always)]
    fn is_highbit_set(self) -> bool {
        unsafe { _mm_movemask_epi8(self.0) != 0 }
    }
}

impl super::Vector32 for U32x4 {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn load(ptr: *const u32) -> Self {
        Self(_mm_loadu_si128(ptr.cast::<__m128i>()))
    }

    #[inline(always)]
    fn broadcast(c: u32) -> Self {
        Self(unsafe { _mm_set1_epi32(c as i32) })
    }

    #[inline(always)]
    fn eq(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi32(self.0, other.0) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, other.0) })
    }

    // x86 has no 32-bit movemask for integer lanes; the byte mask sees the
    // same bit pattern.
    #[inline(always)]
    fn is_highbit_set(self) -> bool {
        unsafe { _mm_movemask_epi8(self.0) != 0 }
    }
}
