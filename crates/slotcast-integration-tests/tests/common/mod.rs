//! Shared helpers for integration tests.

use std::sync::{Mutex, MutexGuard};

use slotcast_events::dispose_all;

static DEFAULT_EMITTER_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive access to the default emitter for the duration of a test.
///
/// The default emitter is cleared on acquire and again on drop, so tests
/// that call `dispose_all` do not interfere with each other.
pub struct DefaultEmitterGuard {
    _lock: MutexGuard<'static, ()>,
}

impl DefaultEmitterGuard {
    pub fn acquire() -> Self {
        // A failed test poisons the lock; the next test can still proceed.
        let lock = DEFAULT_EMITTER_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        dispose_all();
        Self { _lock: lock }
    }
}

impl Drop for DefaultEmitterGuard {
    fn drop(&mut self) {
        dispose_all();
    }
}
