//! Named event registry holding one listener per event.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

use crate::args::EventArg;
use crate::error::{EventError, EventResult};
use crate::listener::{Listener, ListenerOptions};

/// Registry mapping event names to a single listener each.
///
/// All methods take `&self`; the map is guarded by an internal lock, so an
/// emitter can be shared across threads. The lock is released before a
/// callback runs, which lets callbacks call back into the same emitter.
#[derive(Default)]
pub struct EventEmitter {
    listeners: RwLock<HashMap<String, Arc<Listener>>>,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.listeners.read().map(|l| l.len()).unwrap_or_default();
        f.debug_struct("EventEmitter")
            .field("listener_count", &count)
            .finish()
    }
}

impl EventEmitter {
    /// Create an empty emitter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Register `callback` under `name`.
    ///
    /// Any listener already registered under `name` is replaced. `None`
    /// options are treated as [`ListenerOptions::default`].
    ///
    /// Returns a handle to the stored listener.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn add_listener<F>(
        &self,
        name: impl Into<String>,
        callback: F,
        options: Option<ListenerOptions>,
    ) -> Arc<Listener>
    where
        F: Fn(&[EventArg]) + Send + Sync + 'static,
    {
        let name = name.into();
        let listener = Arc::new(Listener::new(
            name.clone(),
            Arc::new(callback),
            options.unwrap_or_default(),
        ));

        let replaced = {
            let mut listeners = self.listeners.write().expect("lock poisoned");
            listeners.insert(name, Arc::clone(&listener))
        };

        debug!(
            event = %listener.name(),
            listener_id = %listener.id(),
            once = listener.options().once,
            replaced = replaced.is_some(),
            "Listener registered"
        );

        listener
    }

    /// Remove the listener registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EventNotFound`] if no listener is registered
    /// under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn dispose(&self, name: &str) -> EventResult<()> {
        let removed = {
            let mut listeners = self.listeners.write().expect("lock poisoned");
            listeners.remove(name)
        };

        let listener = removed.ok_or_else(|| EventError::not_found(name))?;
        debug!(event = %name, listener_id = %listener.id(), "Listener disposed");
        Ok(())
    }

    /// Remove every registered listener.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn dispose_all(&self) {
        // Drop the listeners after releasing the lock; a callback's captured
        // state may touch this emitter when it is dropped.
        let drained: Vec<Arc<Listener>> = {
            let mut listeners = self.listeners.write().expect("lock poisoned");
            listeners.drain().map(|(_, listener)| listener).collect()
        };

        debug!(count = drained.len(), "All listeners disposed");
    }

    /// Invoke the listener registered under `name` with `args`.
    ///
    /// The callback runs synchronously on the calling thread. A
    /// once-listener that has already fired is skipped and the call still
    /// succeeds; the listener stays registered until disposed.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EventNotFound`] if no listener is registered
    /// under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned. A panic raised by the
    /// callback propagates to the caller; the lock is not held at that point,
    /// so the emitter stays usable. A once-listener counts as fired as soon
    /// as its callback starts, so one whose callback panicked is skipped by
    /// later emits.
    pub fn emit(&self, name: &str, args: &[EventArg]) -> EventResult<()> {
        let listener = self
            .listener(name)
            .ok_or_else(|| EventError::not_found(name))?;

        if listener.fire(args) {
            trace!(event = %name, arg_count = args.len(), "Event emitted");
        } else {
            trace!(event = %name, "Once listener already fired, skipping");
        }

        Ok(())
    }

    /// Get the listener registered under `name`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn listener(&self, name: &str) -> Option<Arc<Listener>> {
        self.listeners
            .read()
            .expect("lock poisoned")
            .get(name)
            .map(Arc::clone)
    }

    /// Check if a listener is registered under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.listeners.read().expect("lock poisoned").contains_key(name)
    }

    /// Names of all registered events, in no particular order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.listeners
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Get the number of registered listeners.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.read().expect("lock poisoned").len()
    }

    /// Check if the emitter has no listeners.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.read().expect("lock poisoned").is_empty()
    }
}
