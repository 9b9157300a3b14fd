//! Mock platform implementation for testing Asterix OS
//!
//! This provides a mock implementation of the [`Platform`] trait that can be
//! used for unit testing the desktop kernel without a browser.

#![no_std]
extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::sync::atomic::{AtomicU64, Ordering};
use asterix_hal::{HalError, Platform, ScreenSize};

/// Mock platform for unit testing
///
/// Provides simulated time, entropy, viewport and storage for testing kernel
/// logic without a real host.
pub struct MockPlatform {
    /// Simulated wall-clock time in milliseconds
    time: AtomicU64,
    /// Captured debug messages
    debug_log: RefCell<Vec<String>>,
    /// xorshift state for deterministic entropy
    random_state: AtomicU64,
    /// Whether `random_bytes` succeeds
    entropy_available: Cell<bool>,
    /// Simulated viewport
    viewport: Cell<Option<ScreenSize>>,
    /// Simulated key-value storage
    storage: RefCell<BTreeMap<String, String>>,
    /// Whether `storage_set` succeeds
    storage_writable: Cell<bool>,
}

impl MockPlatform {
    /// Create a new mock platform with a 1920x1080 viewport
    pub fn new() -> Self {
        Self::with_time(0)
    }

    /// Create a mock platform with a specific starting time
    pub fn with_time(ms: u64) -> Self {
        Self {
            time: AtomicU64::new(ms),
            debug_log: RefCell::new(Vec::new()),
            random_state: AtomicU64::new(12345), // Deterministic seed
            entropy_available: Cell::new(true),
            viewport: Cell::new(Some(ScreenSize::new(1920.0, 1080.0))),
            storage: RefCell::new(BTreeMap::new()),
            storage_writable: Cell::new(true),
        }
    }

    /// Advance the simulated time by the given duration
    pub fn advance_time(&self, ms: u64) {
        self.time.fetch_add(ms, Ordering::SeqCst);
    }

    /// Set the simulated time to a specific value
    pub fn set_time(&self, ms: u64) {
        self.time.store(ms, Ordering::SeqCst);
    }

    /// Get all captured debug messages
    pub fn get_debug_log(&self) -> Vec<String> {
        self.debug_log.borrow().clone()
    }

    /// Clear the debug log
    pub fn clear_debug_log(&self) {
        self.debug_log.borrow_mut().clear();
    }

    /// Check if a specific message was logged
    pub fn has_log_containing(&self, substr: &str) -> bool {
        self.debug_log
            .borrow()
            .iter()
            .any(|msg| msg.contains(substr))
    }

    /// Set the random seed for deterministic testing
    pub fn set_random_seed(&self, seed: u64) {
        // xorshift never leaves zero
        self.random_state.store(seed.max(1), Ordering::SeqCst);
    }

    /// Make the entropy source fail (or recover)
    pub fn set_entropy_available(&self, available: bool) {
        self.entropy_available.set(available);
    }

    /// Change the simulated viewport (`None` = headless)
    pub fn set_viewport(&self, viewport: Option<ScreenSize>) {
        self.viewport.set(viewport);
    }

    /// Make storage writes fail (or recover)
    pub fn set_storage_writable(&self, writable: bool) {
        self.storage_writable.set(writable);
    }

    /// Insert a raw storage value, bypassing the writable flag
    pub fn seed_storage(&self, key: &str, value: &str) {
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of persisted keys
    pub fn storage_len(&self) -> usize {
        self.storage.borrow().len()
    }

    fn next_random(&self) -> u64 {
        let mut x = self.random_state.load(Ordering::SeqCst);
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.random_state.store(x, Ordering::SeqCst);
        x
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    fn wallclock_ms(&self) -> u64 {
        self.time.load(Ordering::SeqCst)
    }

    fn random_bytes(&self, buf: &mut [u8]) -> Result<(), HalError> {
        if !self.entropy_available.get() {
            return Err(HalError::NotSupported);
        }
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_random().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }

    fn viewport(&self) -> Option<ScreenSize> {
        self.viewport.get()
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), HalError> {
        if !self.storage_writable.get() {
            return Err(HalError::StorageUnavailable);
        }
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn debug_write(&self, msg: &str) {
        self.debug_log.borrow_mut().push(msg.to_string());
    }
}
