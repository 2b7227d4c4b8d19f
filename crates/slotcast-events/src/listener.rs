//! Listener type and registration options.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::args::EventArg;

/// Callback invoked when a listener's event is emitted.
pub type ListenerCallback = Arc<dyn Fn(&[EventArg]) + Send + Sync>;

/// Options controlling how a listener is treated.
///
/// Options are fixed when the listener is registered. Omitting them at
/// registration is the same as passing `ListenerOptions::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    /// Invoke the callback at most once while the listener is registered.
    pub once: bool,
    /// Reserved. Registration always replaces an existing listener.
    pub overwrite: bool,
    /// Reserved. Callbacks always run synchronously on the emitting thread.
    pub background: bool,
}

impl ListenerOptions {
    /// Create options with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            once: false,
            overwrite: false,
            background: false,
        }
    }

    /// Mark the listener as a once-listener.
    #[must_use]
    pub const fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Set the reserved overwrite flag.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the reserved background flag.
    #[must_use]
    pub const fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }
}

/// Unique identifier for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A callback registered under an event name.
///
/// Listeners are created by [`EventEmitter::add_listener`](crate::EventEmitter::add_listener)
/// and handed back as `Arc<Listener>` so callers can inspect them. A handle
/// stays valid after the listener is disposed or replaced, but the listener
/// is no longer reachable through the emitter.
pub struct Listener {
    id: ListenerId,
    name: String,
    callback: ListenerCallback,
    options: ListenerOptions,
    registered_at: DateTime<Utc>,
    has_fired: AtomicBool,
}

impl Listener {
    pub(crate) fn new(name: String, callback: ListenerCallback, options: ListenerOptions) -> Self {
        Self {
            id: ListenerId::new(),
            name,
            callback,
            options,
            registered_at: Utc::now(),
            has_fired: AtomicBool::new(false),
        }
    }

    /// Unique ID of this registration.
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Event name the listener was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options supplied at registration.
    #[must_use]
    pub fn options(&self) -> ListenerOptions {
        self.options
    }

    /// When the listener was registered.
    #[must_use]
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Whether the callback has been invoked at least once.
    ///
    /// Plain listeners set this after each callback returns. Once-listeners
    /// set it just before their callback starts, so a once callback that
    /// inspects its own handle already sees `true`.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.has_fired.load(Ordering::Acquire)
    }

    /// Run the callback unless this is a once-listener that already fired.
    ///
    /// Returns `true` if the callback was invoked.
    pub(crate) fn fire(&self, args: &[EventArg]) -> bool {
        if self.options.once {
            // Claim the single invocation before running so concurrent
            // emitters cannot both get through.
            if self
                .has_fired
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                return false;
            }
            (self.callback)(args);
            return true;
        }

        (self.callback)(args);
        self.has_fired.store(true, Ordering::Release);
        true
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("options", &self.options)
            .field("registered_at", &self.registered_at)
            .field("has_fired", &self.has_fired())
            .finish_non_exhaustive()
    }
}
