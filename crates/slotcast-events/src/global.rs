//! Process-wide default emitter and forwarding free functions.
//!
//! The default emitter is created on first use and lives until the process
//! exits. It is lock-guarded like any other [`EventEmitter`], so the free
//! functions can be called from any thread. Since every caller shares the
//! same name space, libraries should prefer an explicit emitter and leave
//! the default one to applications.

use std::sync::{Arc, LazyLock};

use crate::args::EventArg;
use crate::emitter::EventEmitter;
use crate::error::EventResult;
use crate::listener::{Listener, ListenerOptions};

static DEFAULT_EMITTER: LazyLock<EventEmitter> = LazyLock::new(EventEmitter::new);

/// Get the process-wide default emitter.
#[must_use]
pub fn default_emitter() -> &'static EventEmitter {
    &DEFAULT_EMITTER
}

/// Register a listener on the default emitter.
///
/// See [`EventEmitter::add_listener`].
pub fn add_listener<F>(
    name: impl Into<String>,
    callback: F,
    options: Option<ListenerOptions>,
) -> Arc<Listener>
where
    F: Fn(&[EventArg]) + Send + Sync + 'static,
{
    DEFAULT_EMITTER.add_listener(name, callback, options)
}

/// Remove a listener from the default emitter.
///
/// # Errors
///
/// Returns [`EventError::EventNotFound`](crate::EventError::EventNotFound)
/// if no listener is registered under `name`.
pub fn dispose(name: &str) -> EventResult<()> {
    DEFAULT_EMITTER.dispose(name)
}

/// Remove every listener from the default emitter.
pub fn dispose_all() {
    DEFAULT_EMITTER.dispose_all();
}

/// Emit an event on the default emitter.
///
/// # Errors
///
/// Returns [`EventError::EventNotFound`](crate::EventError::EventNotFound)
/// if no listener is registered under `name`.
pub fn emit(name: &str, args: &[EventArg]) -> EventResult<()> {
    DEFAULT_EMITTER.emit(name, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Unit tests share the default emitter with each other, so each test
    // uses its own event names and never calls `dispose_all`.

    #[test]
    fn test_default_emitter_is_shared() {
        let a = default_emitter();
        let b = default_emitter();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_free_functions_forward_to_default() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let listener = add_listener(
            "global::forward",
            move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            },
            None,
        );
        assert!(default_emitter().contains("global::forward"));
        assert_eq!(
            default_emitter().listener("global::forward").unwrap().id(),
            listener.id()
        );

        emit("global::forward", &[]).unwrap();
        default_emitter().emit("global::forward", &[]).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        dispose("global::forward").unwrap();
        assert!(emit("global::forward", &[]).unwrap_err().is_not_found());
        assert!(dispose("global::forward").unwrap_err().is_not_found());
    }

    #[test]
    fn test_free_function_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        add_listener(
            "global::once",
            move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            },
            Some(ListenerOptions::new().once()),
        );

        for _ in 0..3 {
            emit("global::once", &[]).unwrap();
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);

        dispose("global::once").unwrap();
    }
}
