//! NEON backend for ARM64.
//!
//! NEON provides 128-bit vectors and is mandatory on ARM64. Unlike x86,
//! the 8-bit and 32-bit lane types are distinct, so the 32-bit high-bit
//! test reinterprets its register as bytes before reducing.

use std::arch::aarch64::*;

/// Sixteen 8-bit lanes.
#[derive(Clone, Copy)]
pub struct U8x16(uint8x16_t);

/// Four 32-bit lanes.
#[derive(Clone, Copy)]
pub struct U32x4(uint32x4_t);

impl super::Vector8 for U8x16 {
    const LANES: usize = 16;

    #[inline(always)]
    unsafe fn load(ptr: *const u8) -> Self {
        Self(vld1q_u8(ptr))
    }

    #[inline(always)]
    fn broadcast(c: u8) -> Self {
        // Safety: NEON is always available on ARM64
        Self(unsafe { vdupq_n_u8(c) })
    }

    #[inline(always)]
    fn eq(self, other: Self) -> Self {
        Self(unsafe { vceqq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self(unsafe { vorrq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn ssub(self, other: Self) -> Self {
        Self(unsafe { vqsubq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn is_highbit_set(self) -> bool {
        unsafe { vmaxvq_u8(self.0) > 0x7F }
    }
}

impl super::Vector32 for U32x4 {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn load(ptr: *const u32) -> Self {
        Self(vld1q_u32(ptr))
    }

    #[inline(always)]
    fn broadcast(c: u32) -> Self {
        Self(unsafe { vdupq_n_u32(c) })
    }

    #[inline(always)]
    fn eq(self, other: Self) -> Self {
        Self(unsafe { vceqq_u32(self.0, other.0) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self(unsafe { vorrq_u32(self.0, other.0) })
    }

    #[inline(always)]
    fn is_highbit_set(self) -> bool {
        unsafe { vmaxvq_u8(vreinterpretq_u8_u32(self.0)) > 0x7F }
    }
}
