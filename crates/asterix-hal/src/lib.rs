//! Platform abstraction trait for Asterix OS
//!
//! The desktop kernel never touches the browser directly. Everything it needs
//! from the host (time, entropy, debug output, viewport size and the small
//! settings store) goes through the [`Platform`] trait so the core can be
//! unit tested without a rendering layer.
//!
//! # Platform Implementations
//!
//! - **WASM**: `Date.now()` for time, `crypto.getRandomValues()` for entropy,
//!   `console.log()` for debug output, `localStorage` for settings
//! - **Mock**: deterministic implementation in `asterix-hal-mock`

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Screen dimensions reported by the host, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    /// Create a new screen size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Platform abstraction trait
///
/// Implementations provide host-specific functionality for:
/// - Wall-clock time
/// - Entropy (random numbers)
/// - Debug output
/// - Viewport dimensions
/// - Persisted key-value settings
///
/// The model is single threaded, so implementations are free to use
/// interior mutability without synchronization.
pub trait Platform: 'static {
    // === Time & Entropy ===

    /// Get wall-clock time in milliseconds since Unix epoch
    ///
    /// On WASM: Uses `Date.now()`
    fn wallclock_ms(&self) -> u64;

    /// Fill buffer with random bytes
    ///
    /// On WASM: Uses `crypto.getRandomValues()`
    ///
    /// # Returns
    /// * `Ok(())` - Buffer filled successfully
    /// * `Err(HalError::NotSupported)` - Entropy source not available
    fn random_bytes(&self, buf: &mut [u8]) -> Result<(), HalError>;

    /// Draw a uniformly distributed `u32`
    fn random_u32(&self) -> Result<u32, HalError> {
        let mut buf = [0u8; 4];
        self.random_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Draw a float in `[0, 1)`
    fn random_unit(&self) -> Result<f32, HalError> {
        // 24 bits fit exactly in an f32 mantissa
        Ok((self.random_u32()? >> 8) as f32 / (1u32 << 24) as f32)
    }

    // === Display ===

    /// Current viewport size, if the host has one
    ///
    /// On WASM: `window.innerWidth` / `window.innerHeight`
    fn viewport(&self) -> Option<ScreenSize>;

    // === Settings storage ===

    /// Read a persisted value
    ///
    /// On WASM: `localStorage.getItem()`
    fn storage_get(&self, key: &str) -> Option<String>;

    /// Persist a value
    ///
    /// On WASM: `localStorage.setItem()`
    fn storage_set(&self, key: &str, value: &str) -> Result<(), HalError>;

    // === Debug ===

    /// Write a debug message to the platform's console/log
    ///
    /// On WASM: Uses `console.log()`
    fn debug_write(&self, msg: &str);
}

/// Platform errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HalError {
    /// Operation not supported on this platform
    NotSupported,
    /// Persistent storage is missing or refused access
    StorageUnavailable,
    /// Storage quota exceeded
    QuotaExceeded,
    /// I/O error
    IoError,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::NotSupported => write!(f, "operation not supported"),
            HalError::StorageUnavailable => write!(f, "storage unavailable"),
            HalError::QuotaExceeded => write!(f, "storage quota exceeded"),
            HalError::IoError => write!(f, "i/o error"),
        }
    }
}
