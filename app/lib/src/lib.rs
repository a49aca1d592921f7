//! # lfind-simd
//!
//! Vectorized linear search over small unsigned-integer arrays.
//!
//! The library answers three questions about a slice, using 128-bit vector
//! registers for the bulk of the scan:
//!
//! - [`lfind8`]: does any byte equal `key`?
//! - [`lfind8_le`]: is any byte less than or equal to `key`?
//! - [`lfind32`]: does any `u32` equal `key`?
//!
//! They are meant for hot lookup paths over short key arrays, where a few
//! nanoseconds per call matter.
//!
//! ## Features
//!
//! - **One kernel, several backends**: kernels are written against the
//!   [`simd::Vector8`] and [`simd::Vector32`] traits; SSE2 (x86_64), NEON
//!   (ARM64) or a portable backend is chosen at build time
//! - **Unsigned `<=` without unsigned compares**: saturating subtraction
//!   turns `x <= c` into a zero test
//! - **Instruction-level parallelism**: [`lfind32`] tests four registers per
//!   iteration with a single reduction
//! - **No allocation, no shared state**: every search is reentrant
//! - **C ABI**: the `ffi` feature exports `lfind8`, `lfind8_le` and
//!   `lfind32` with pointer + length signatures
//!
//! ## Quick Start
//!
//! ```rust
//! use lfind_simd::{lfind32, lfind8, lfind8_le};
//!
//! let bytes = [1u8, 3, 5, 7, 9, 11, 13, 15];
//! assert!(lfind8(5, &bytes));
//! assert!(!lfind8(2, &bytes));
//!
//! let thresholds = [10u8, 30, 50, 70, 90, 110, 130, 150];
//! assert!(lfind8_le(25, &thresholds));
//! assert!(!lfind8_le(5, &thresholds));
//!
//! assert!(lfind32(0xDEADBEEF, &[0xDEADBEEF]));
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use lfind_simd::{SearchDispatcher, SimdConfig, SimdLevel};
//!
//! // Force the scalar scan, e.g. to compare against the vector kernels.
//! let dispatcher = SearchDispatcher::with_config(SimdConfig::disabled());
//! assert_eq!(dispatcher.level(), SimdLevel::Scalar);
//! assert!(dispatcher.find_u32(7, &[1, 7, 9]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod config;
pub mod error;
pub mod input;
pub mod lfind;
pub mod simd;

// C FFI bindings (optional)
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use config::SimdConfig;
pub use error::{LfindError, Result};
pub use input::{parse_key, read_values, Element, InputFormat};
pub use lfind::{lfind32, lfind32_block_size, lfind8, lfind8_le};
pub use simd::{BackendInfo, SearchDispatcher, SimdLevel};

pub use lfind::lfind32 as has_32bit_exact_match;
pub use lfind::lfind8 as has_8bit_exact_match;
pub use lfind::lfind8_le as has_8bit_le_match;
