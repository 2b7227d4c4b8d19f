//! Integration tests for the process-wide default emitter.

mod common;

use std::thread;

use common::DefaultEmitterGuard;
use serde_json::json;
use slotcast_events::{
    EventError, add_listener, args, default_emitter, dispose, dispose_all, emit,
};
use slotcast_test::{CallCounter, CallRecorder, init_test_logging, once_options};

#[test]
fn test_listener_receives_args() {
    let _guard = DefaultEmitterGuard::acquire();
    init_test_logging("slotcast_events=trace");

    let recorder = CallRecorder::new();
    let listener = add_listener("eventArgs", recorder.callback(), Some(once_options()));

    emit("eventArgs", &args![1, 2, 3]).unwrap();

    assert_eq!(recorder.calls(), vec![vec![json!(1), json!(2), json!(3)]]);
    assert_eq!(listener.name(), "eventArgs");
    assert!(listener.options().once);
}

#[test]
fn test_dispose_lifecycle() {
    let _guard = DefaultEmitterGuard::acquire();

    assert!(matches!(
        dispose("undefined1"),
        Err(EventError::EventNotFound { ref name }) if name == "undefined1"
    ));

    add_listener("foo", |_| {}, Some(once_options()));
    assert!(dispose("foo").is_ok());
    assert!(dispose("foo").unwrap_err().is_not_found());
}

#[test]
fn test_once_on_default_emitter() {
    let _guard = DefaultEmitterGuard::acquire();

    let counter = CallCounter::new();
    add_listener("onceTest", counter.callback(), Some(once_options()));

    emit("onceTest", &[]).unwrap();
    emit("onceTest", &[]).unwrap();
    emit("onceTest", &[]).unwrap();

    assert_eq!(counter.count(), 1);
}

#[test]
fn test_dispose_all_clears_default_emitter() {
    let _guard = DefaultEmitterGuard::acquire();

    add_listener("a", |_| {}, None);
    add_listener("b", |_| {}, None);
    assert_eq!(default_emitter().len(), 2);

    dispose_all();

    assert!(default_emitter().is_empty());
    assert!(emit("a", &[]).unwrap_err().is_not_found());
    assert!(emit("b", &[]).unwrap_err().is_not_found());
}

#[test]
fn test_default_emitter_shared_across_threads() {
    let _guard = DefaultEmitterGuard::acquire();

    let counter = CallCounter::new();
    add_listener("threaded", counter.callback(), None);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..25 {
                    emit("threaded", &[]).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.count(), 100);
}

#[test]
fn test_registration_from_other_thread_is_visible() {
    let _guard = DefaultEmitterGuard::acquire();

    let recorder = CallRecorder::new();
    let callback = recorder.callback();

    thread::spawn(move || {
        add_listener("cross", callback, None);
    })
    .join()
    .unwrap();

    emit("cross", &args!["from main"]).unwrap();
    assert_eq!(recorder.calls(), vec![vec![json!("from main")]]);
}
