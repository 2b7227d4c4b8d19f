//! Cross-crate integration tests for slotcast. See `tests/`.
