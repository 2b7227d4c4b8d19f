//! Callback fixtures for listener tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use slotcast_events::{EventArg, ListenerOptions};

/// Records the arguments of every invocation of its callback.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<Vec<EventArg>>>>,
}

impl CallRecorder {
    /// Create a recorder with no calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener callback that appends its arguments to this recorder.
    ///
    /// # Panics
    ///
    /// The returned callback panics if the internal lock is poisoned.
    #[must_use]
    pub fn callback(&self) -> impl Fn(&[EventArg]) + Send + Sync + use<> {
        let calls = Arc::clone(&self.calls);
        move |args: &[EventArg]| {
            calls.lock().expect("lock poisoned").push(args.to_vec());
        }
    }

    /// All recorded argument lists, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<EventArg>> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    /// Number of recorded invocations.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

/// Counts invocations of its callback.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener callback that increments this counter.
    #[must_use]
    pub fn callback(&self) -> impl Fn(&[EventArg]) + Send + Sync + use<> {
        let count = Arc::clone(&self.count);
        move |_args: &[EventArg]| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Number of invocations so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Options for a once-listener.
#[must_use]
pub fn once_options() -> ListenerOptions {
    ListenerOptions::new().once()
}

/// An event name that no other caller in this process will produce.
///
/// Useful for tests sharing the default emitter.
#[must_use]
pub fn unique_event_name(prefix: &str) -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}#{n}")
}
