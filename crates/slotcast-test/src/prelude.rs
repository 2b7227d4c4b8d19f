//! Prelude module - commonly used test utilities for convenient import.
//!
//! Use `use slotcast_test::prelude::*;` in test modules.

// Callback fixtures
pub use crate::fixtures::{CallCounter, CallRecorder, once_options, unique_event_name};

// Harness helpers
pub use crate::harness::{init_test_logging, toml_file};
