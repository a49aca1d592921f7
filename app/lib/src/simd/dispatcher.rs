//! Search dispatcher.
//!
//! Chooses, once, between the vector backend compiled into this build and
//! the scalar scan, according to a [`SimdConfig`]. No CPU features are
//! probed: the native backend is always usable on the target it was built
//! for.

use serde::Serialize;

use super::scalar;
use super::{Native32, Native8, Vector32, Vector8, BACKEND, REGISTER_WIDTH};
use crate::config::SimdConfig;
use crate::error::Result;
use crate::lfind;

/// The search implementation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimdLevel {
    /// SSE2 (128-bit vectors, x86_64).
    Sse2,
    /// NEON (128-bit vectors, ARM64).
    Neon,
    /// Portable 16-byte lane arrays.
    Portable,
    /// Scalar scan (no vectors).
    Scalar,
}

impl SimdLevel {
    /// Register width in bytes, or 0 for the scalar scan.
    pub fn register_width(&self) -> usize {
        match self {
            SimdLevel::Scalar => 0,
            _ => REGISTER_WIDTH,
        }
    }

    /// Elements tested per step of the 8-bit searches.
    pub fn lanes_u8(&self) -> usize {
        match self {
            SimdLevel::Scalar => 1,
            _ => <Native8 as Vector8>::LANES,
        }
    }

    /// 32-bit lanes per register.
    pub fn lanes_u32(&self) -> usize {
        match self {
            SimdLevel::Scalar => 1,
            _ => <Native32 as Vector32>::LANES,
        }
    }

    /// Elements tested per step of the 32-bit search.
    pub fn block_u32(&self) -> usize {
        match self {
            SimdLevel::Scalar => 1,
            _ => lfind::lfind32_block_size(),
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdLevel::Sse2 => write!(f, "SSE2"),
            SimdLevel::Neon => write!(f, "NEON"),
            SimdLevel::Portable => write!(f, "Portable"),
            SimdLevel::Scalar => write!(f, "Scalar"),
        }
    }
}

/// Description of the implementation a dispatcher resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendInfo {
    /// Selected level.
    pub level: SimdLevel,
    /// Level compiled into this build.
    pub native: SimdLevel,
    /// Register width in bytes (0 when scalar).
    pub register_width: usize,
    /// Elements per step for 8-bit searches.
    pub lanes_u8: usize,
    /// 32-bit lanes per register.
    pub lanes_u32: usize,
    /// Elements per step for 32-bit searches.
    pub block_u32: usize,
    /// Target architecture of this build.
    pub target_arch: &'static str,
}

impl BackendInfo {
    fn for_level(level: SimdLevel) -> Self {
        Self {
            level,
            native: BACKEND,
            register_width: level.register_width(),
            lanes_u8: level.lanes_u8(),
            lanes_u32: level.lanes_u32(),
            block_u32: level.block_u32(),
            target_arch: std::env::consts::ARCH,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Routes searches to the native vector kernels or the scalar scan.
///
/// # Example
///
/// ```rust
/// use lfind_simd::simd::{SearchDispatcher, SimdLevel};
///
/// let dispatcher = SearchDispatcher::new();
/// assert_ne!(dispatcher.level(), SimdLevel::Scalar);
/// assert!(dispatcher.find_u8(3, &[1, 2, 3]));
///
/// let scalar = SearchDispatcher::scalar_only();
/// assert!(scalar.find_le_u8(1, &[9, 1, 9]));
/// ```
#[derive(Debug, Clone)]
pub struct SearchDispatcher {
    config: SimdConfig,
    level: SimdLevel,
}

impl SearchDispatcher {
    /// Create a dispatcher that uses the native backend.
    pub fn new() -> Self {
        Self::with_config(SimdConfig::default())
    }

    /// Create a dispatcher with the given configuration.
    pub fn with_config(config: SimdConfig) -> Self {
        let level = Self::select_level(BACKEND, &config);
        Self { config, level }
    }

    /// Create a dispatcher that only uses the scalar scan.
    pub fn scalar_only() -> Self {
        Self::with_config(SimdConfig::disabled())
    }

    fn select_level(native: SimdLevel, config: &SimdConfig) -> SimdLevel {
        match native {
            SimdLevel::Sse2 if config.enable_sse2 => SimdLevel::Sse2,
            SimdLevel::Neon if config.enable_neon => SimdLevel::Neon,
            SimdLevel::Portable if config.enable_portable => SimdLevel::Portable,
            _ => SimdLevel::Scalar,
        }
    }

    /// Get the configuration this dispatcher was built from.
    pub fn config(&self) -> &SimdConfig {
        &self.config
    }

    /// Get the selected level.
    pub fn level(&self) -> SimdLevel {
        self.level
    }

    /// Check if the vector kernels are in use.
    pub fn is_accelerated(&self) -> bool {
        self.level != SimdLevel::Scalar
    }

    /// Describe the selected implementation.
    pub fn info(&self) -> BackendInfo {
        BackendInfo::for_level(self.level)
    }

    /// Return true if any element of `base` equals `key`.
    pub fn find_u8(&self, key: u8, base: &[u8]) -> bool {
        match self.level {
            SimdLevel::Scalar => scalar::lfind8_scalar(key, base),
            _ => lfind::lfind8(key, base),
        }
    }

    /// Return true if any element of `base` is less than or equal to `key`.
    pub fn find_le_u8(&self, key: u8, base: &[u8]) -> bool {
        match self.level {
            SimdLevel::Scalar => scalar::lfind8_le_scalar(key, base),
            _ => lfind::lfind8_le(key, base),
        }
    }

    /// Return true if any element of `base` equals `key`.
    pub fn find_u32(&self, key: u32, base: &[u32]) -> bool {
        match self.level {
            SimdLevel::Scalar => scalar::lfind32_scalar(key, base),
            _ => lfind::lfind32(key, base),
        }
    }
}

impl Default for SearchDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
