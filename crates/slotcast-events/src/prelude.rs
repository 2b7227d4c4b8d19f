//! Prelude module - commonly used types for convenient import.
//!
//! Use `use slotcast_events::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use slotcast_events::prelude::*;
//! use slotcast_events::args;
//!
//! # fn main() -> EventResult<()> {
//! let emitter = EventEmitter::new();
//! emitter.add_listener("tick", |_args| {}, None);
//! emitter.emit("tick", &args![1, 2, 3])?;
//! # Ok(())
//! # }
//! ```

// Registry
pub use crate::EventEmitter;

// Listeners
pub use crate::{EventArg, Listener, ListenerCallback, ListenerId, ListenerOptions};

// Errors
pub use crate::{EventError, EventResult};

// Default emitter
pub use crate::{add_listener, default_emitter, dispose, dispose_all, emit};
