//! Slotcast Events - single-slot named event emitter.
//!
//! This crate provides:
//! - An `EventEmitter` registry mapping each event name to exactly one listener
//! - Once-listeners that fire at most a single time while registered
//! - A process-wide default emitter reachable through free functions
//!
//! # Architecture
//!
//! Every event name owns one slot. Registering a listener under a name that
//! is already taken replaces the previous listener without complaint.
//! Emitting a name invokes its callback synchronously on the calling thread
//! with the supplied arguments. Arguments are untyped [`EventArg`] values
//! (`serde_json::Value`); the [`args!`] macro builds them from plain
//! expressions.
//!
//! There are two ways to use the emitter:
//!
//! 1. **Explicit instances**: construct an `EventEmitter` and call its methods.
//!
//! 2. **Default instance**: call the free functions [`add_listener`],
//!    [`dispose`], [`dispose_all`] and [`emit`], which all forward to one
//!    shared emitter created on first use.
//!
//! # Example
//!
//! ```rust
//! use slotcast_events::{EventEmitter, ListenerOptions, args};
//!
//! let emitter = EventEmitter::new();
//!
//! let listener = emitter.add_listener(
//!     "greet",
//!     |args| println!("hello {args:?}"),
//!     Some(ListenerOptions::new().once()),
//! );
//! assert_eq!(listener.name(), "greet");
//!
//! emitter.emit("greet", &args!["world", 42]).unwrap();
//! assert!(listener.has_fired());
//!
//! // Once-listeners stay registered but are skipped after the first emit.
//! emitter.emit("greet", &args![]).unwrap();
//!
//! emitter.dispose("greet").unwrap();
//! assert!(emitter.emit("greet", &args![]).is_err());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod args;
mod emitter;
mod error;
mod global;
mod listener;

pub use args::EventArg;
pub use emitter::EventEmitter;
pub use error::{EventError, EventResult};
pub use global::{add_listener, default_emitter, dispose, dispose_all, emit};
pub use listener::{Listener, ListenerCallback, ListenerId, ListenerOptions};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
