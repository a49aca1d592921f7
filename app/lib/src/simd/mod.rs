//! Portable vector layer used by the search kernels.
//!
//! Kernels are written once against the [`Vector8`] and [`Vector32`] traits.
//! Each backend module provides one concrete pair of register types:
//!
//! - **SSE2**: 128-bit vectors on x86_64 (part of the baseline ISA)
//! - **NEON**: 128-bit vectors on ARM64
//! - **Portable**: 16-byte lane arrays, compiled everywhere
//!
//! Exactly one of them is the *native* backend, chosen at build time from
//! `target_arch` (and the `simd` feature). There is no runtime CPU probing;
//! [`SearchDispatcher`] only chooses between the native backend and the
//! plain scalar scan.
//!
//! # Example
//!
//! ```rust
//! use lfind_simd::simd::{Native8, Vector8};
//!
//! let bytes = [7u8; 16];
//! // Safety: `bytes` holds exactly one register worth of lanes.
//! let v = unsafe { Native8::load(bytes.as_ptr()) };
//! assert!(v.has(7));
//! assert!(v.has_le(7));
//! assert!(!v.has_le(6));
//! ```

mod dispatcher;
pub mod portable;
pub mod scalar;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod sse2;

#[cfg(all(feature = "simd", target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;

pub use dispatcher::{BackendInfo, SearchDispatcher, SimdLevel};

/// Width in bytes of one vector register, shared by every backend.
pub const REGISTER_WIDTH: usize = 16;

/// A register of unsigned 8-bit lanes.
///
/// Comparison results are mask vectors (every lane all-ones or all-zeros)
/// of the same type; [`Vector8::is_highbit_set`] is the only reduction to
/// `bool`, so several masks can be OR-ed together and reduced once.
pub trait Vector8: Copy {
    /// Number of 8-bit lanes in one register.
    const LANES: usize;

    /// Load `LANES` bytes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` bytes. No alignment is
    /// required.
    unsafe fn load(ptr: *const u8) -> Self;

    /// Vector with every lane set to `c`.
    fn broadcast(c: u8) -> Self;

    /// Lane-wise equality mask.
    fn eq(self, other: Self) -> Self;

    /// Lane-wise bitwise OR.
    fn or(self, other: Self) -> Self;

    /// Lane-wise unsigned `self - other`, clamped at zero.
    fn ssub(self, other: Self) -> Self;

    /// True if the most significant bit of any lane is set.
    fn is_highbit_set(self) -> bool;

    /// True if any lane equals `c`.
    #[inline(always)]
    fn has(self, c: u8) -> bool {
        self.eq(Self::broadcast(c)).is_highbit_set()
    }

    /// True if any lane is zero.
    #[inline(always)]
    fn has_zero(self) -> bool {
        self.has(0)
    }

    /// True if any lane is less than or equal to `c`.
    ///
    /// There is no unsigned `<=` at byte granularity on every ISA, so lanes
    /// `x <= c` are found as the lanes where `x - c` saturates to zero.
    #[inline(always)]
    fn has_le(self, c: u8) -> bool {
        self.ssub(Self::broadcast(c)).has_zero()
    }
}

/// A register of unsigned 32-bit lanes.
pub trait Vector32: Copy {
    /// Number of 32-bit lanes in one register.
    const LANES: usize;

    /// Load `LANES` words starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` `u32` values. No alignment
    /// is required.
    unsafe fn load(ptr: *const u32) -> Self;

    /// Vector with every lane set to `c`.
    fn broadcast(c: u32) -> Self;

    /// Lane-wise equality mask.
    fn eq(self, other: Self) -> Self;

    /// Lane-wise bitwise OR.
    fn or(self, other: Self) -> Self;

    /// True if the high bit of any *byte* in the register is set.
    ///
    /// Equality lanes are all-ones or all-zeros across their four bytes, so
    /// on a mask this answers "any lane matched" without needing a 32-bit
    /// mask reduction, which not every ISA has.
    fn is_highbit_set(self) -> bool;
}

/// 8-bit register type of the backend compiled into this build.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type Native8 = sse2::U8x16;
/// 32-bit register type of the backend compiled into this build.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type Native32 = sse2::U32x4;
/// Level of the backend compiled into this build.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub const BACKEND: SimdLevel = SimdLevel::Sse2;

/// 8-bit register type of the backend compiled into this build.
#[cfg(all(feature = "simd", target_arch = "aarch64", target_feature = "neon"))]
pub type Native8 = neon::U8x16;
/// 32-bit register type of the backend compiled into this build.
#[cfg(all(feature = "simd", target_arch = "aarch64", target_feature = "neon"))]
pub type Native32 = neon::U32x4;
/// Level of the backend compiled into this build.
#[cfg(all(feature = "simd", target_arch = "aarch64", target_feature = "neon"))]
pub const BACKEND: SimdLevel = SimdLevel::Neon;

/// 8-bit register type of the backend compiled into this build.
#[cfg(not(all(
    feature = "simd",
    any(
        target_arch = "x86_64",
        all(target_arch = "aarch64", target_feature = "neon")
    )
)))]
pub type Native8 = portable::U8x16;
/// 32-bit register type of the backend compiled into this build.
#[cfg(not(all(
    feature = "simd",
    any(
        target_arch = "x86_64",
        all(target_arch = "aarch64", target_feature = "neon")
    )
)))]
pub type Native32 = portable::U32x4;
/// Level of the backend compiled into this build.
#[cfg(not(all(
    feature = "simd",
    any(
        target_arch = "x86_64",
        all(target_arch = "aarch64", target_feature = "neon")
    )
)))]
pub const BACKEND: SimdLevel = SimdLevel::Portable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_register_width() {
        assert_eq!(std::mem::size_of::<Native8>(), REGISTER_WIDTH);
        assert_eq!(std::mem::size_of::<Native32>(), REGISTER_WIDTH);
        assert_eq!(<Native8 as Vector8>::LANES, REGISTER_WIDTH);
        assert_eq!(<Native32 as Vector32>::LANES, REGISTER_WIDTH / 4);
    }

    #[test]
    fn test_backend_is_not_scalar() {
        assert_ne!(BACKEND, SimdLevel::Scalar);
        println!("Native backend: {}", BACKEND);
    }

    #[test]
    fn test_derived_ops_on_native() {
        let mut bytes = [200u8; 16];
        bytes[9] = 0;
        let v = unsafe { Native8::load(bytes.as_ptr()) };
        assert!(v.has_zero());
        assert!(v.has(200));
        assert!(!v.has(199));
        assert!(v.has_le(0));

        let bytes = [200u8; 16];
        let v = unsafe { Native8::load(bytes.as_ptr()) };
        assert!(!v.has_zero());
        assert!(!v.has_le(199));
        assert!(v.has_le(200));
        assert!(v.has_le(255));
    }
}
