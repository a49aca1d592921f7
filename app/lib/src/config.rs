//! Configuration types for the search library.
//!
//! The vector backend is fixed at build time; configuration can only allow
//! or forbid it; when forbidden, searches fall back to the scalar scan.

/// Vector backend configuration.
///
/// Each flag permits one backend. Only the backend compiled into this
/// build ever matters; the flags for the others are kept so a single
/// configuration can be shared across targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimdConfig {
    /// Allow the SSE2 backend (x86_64 only).
    ///
    /// Default: true
    pub enable_sse2: bool,

    /// Allow the NEON backend (ARM64 only).
    ///
    /// Default: true
    pub enable_neon: bool,

    /// Allow the portable lane-array backend (other targets).
    ///
    /// Default: true
    pub enable_portable: bool,
}

impl Default for SimdConfig {
    fn default() -> Self {
        Self {
            enable_sse2: true,
            enable_neon: true,
            enable_portable: true,
        }
    }
}

impl SimdConfig {
    /// Create a new configuration with every backend allowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with every vector backend disabled.
    ///
    /// This forces the scalar scan, which is useful for comparing results
    /// or timings against the vector kernels.
    pub fn disabled() -> Self {
        Self {
            enable_sse2: false,
            enable_neon: false,
            enable_portable: false,
        }
    }

    /// Enable or disable the SSE2 backend.
    pub fn with_sse2(mut self, enable: bool) -> Self {
        self.enable_sse2 = enable;
        self
    }

    /// Enable or disable the NEON backend.
    pub fn with_neon(mut self, enable: bool) -> Self {
        self.enable_neon = enable;
        self
    }

    /// Enable or disable the portable backend.
    pub fn with_portable(mut self, enable: bool) -> Self {
        self.enable_portable = enable;
        self
    }

    /// Check if any vector backend is enabled.
    pub fn is_any_enabled(&self) -> bool {
        self.enable_sse2 || self.enable_neon || self.enable_portable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simd_config_default() {
        let config = SimdConfig::default();
        assert!(config.enable_sse2);
        assert!(config.enable_neon);
        assert!(config.enable_portable);
        assert!(config.is_any_enabled());
    }

    #[test]
    fn test_simd_config_disabled() {
        let config = SimdConfig::disabled();
        assert!(!config.enable_sse2);
        assert!(!config.enable_neon);
        assert!(!config.enable_portable);
        assert!(!config.is_any_enabled());
    }

    #[test]
    fn test_simd_config_builder() {
        let config = SimdConfig::new()
            .with_sse2(false)
            .with_neon(true)
            .with_portable(false);

        assert!(!config.enable_sse2);
        assert!(config.enable_neon);
        assert!(!config.enable_portable);
        assert!(config.is_any_enabled());
    }

    #[test]
    fn test_simd_config_equality() {
        assert_eq!(SimdConfig::new(), SimdConfig::default());
        assert_ne!(SimdConfig::new(), SimdConfig::disabled());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimdConfig>();
    }
}
