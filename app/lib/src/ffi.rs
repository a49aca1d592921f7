//! C ABI for the search kernels.
//!
//! The exported functions take a base pointer plus an element count, the
//! way C callers hold small key arrays.
//!
//! # Safety
//!
//! When `nelem > 0`, `base` must point to `nelem` readable, initialized
//! elements that are not written for the duration of the call. Violating
//! this is undefined behavior and is not detected. When `nelem == 0`,
//! `base` is never read and may be null.
//!
//! # Thread Safety
//!
//! All functions are reentrant and may be called concurrently, including
//! on the same array.
//!
//! # Example (C)
//!
//! ```c
//! #include <stdbool.h>
//! #include <stdint.h>
//! #include <stdio.h>
//!
//! extern bool lfind8(uint8_t key, const uint8_t *base, uint32_t nelem);
//! extern const char *lfind_backend_name(void);
//!
//! int main() {
//!     uint8_t keys[] = {1, 3, 5, 7, 9, 11, 13, 15};
//!     printf("%s: %d\n", lfind_backend_name(), lfind8(5, keys, 8));
//!     return 0;
//! }
//! ```

use std::os::raw::c_char;
use std::slice;

use crate::simd::{SimdLevel, BACKEND, REGISTER_WIDTH};

/// Return true if any of the `nelem` bytes at `base` equals `key`.
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn lfind8(key: u8, base: *const u8, nelem: u32) -> bool {
    if nelem == 0 {
        return false;
    }
    crate::lfind::lfind8(key, slice::from_raw_parts(base, nelem as usize))
}

/// Return true if any of the `nelem` bytes at `base` is less than or equal
/// to `key`.
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn lfind8_le(key: u8, base: *const u8, nelem: u32) -> bool {
    if nelem == 0 {
        return false;
    }
    crate::lfind::lfind8_le(key, slice::from_raw_parts(base, nelem as usize))
}

/// Return true if any of the `nelem` words at `base` equals `key`.
///
/// # Safety
///
/// See the [module documentation](self). `base` must be aligned for
/// `u32`, as any valid `uint32_t *` is; it need not be aligned to the
/// register width.
#[no_mangle]
pub unsafe extern "C" fn lfind32(key: u32, base: *const u32, nelem: u32) -> bool {
    if nelem == 0 {
        return false;
    }
    crate::lfind::lfind32(key, slice::from_raw_parts(base, nelem as usize))
}

/// Name of the backend compiled into this library, as a static
/// NUL-terminated string.
#[no_mangle]
pub extern "C" fn lfind_backend_name() -> *const c_char {
    let name = match BACKEND {
        SimdLevel::Sse2 => c"SSE2",
        SimdLevel::Neon => c"NEON",
        SimdLevel::Portable => c"Portable",
        SimdLevel::Scalar => c"Scalar",
    };
    name.as_ptr()
}

/// Width in bytes of the vector registers used by the kernels.
#[no_mangle]
pub extern "C" fn lfind_register_width() -> u32 {
    REGISTER_WIDTH as u32
}
