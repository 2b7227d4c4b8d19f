//! Slotcast Test - Shared test utilities for slotcast.
//!
//! This crate provides callback recorders and test helpers that can be
//! used across slotcast crates as a dev-dependency.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[cfg(test)]
//! mod tests {
//!     use slotcast_events::{EventEmitter, args};
//!     use slotcast_test::CallRecorder;
//!
//!     #[test]
//!     fn test_greet() {
//!         let emitter = EventEmitter::new();
//!         let recorder = CallRecorder::new();
//!         emitter.add_listener("greet", recorder.callback(), None);
//!
//!         emitter.emit("greet", &args!["hi"]).unwrap();
//!         assert_eq!(recorder.count(), 1);
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
