//! Config files and log capture for tests.

use std::io::Write;

use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

/// Write `content` to a fresh `.toml` file, removed when the handle drops.
///
/// # Panics
///
/// Panics if the temporary file cannot be created or written.
#[must_use]
pub fn toml_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("slotcast-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

/// Route `tracing` output through the test harness's captured writer.
///
/// `RUST_LOG` wins over `default_filter` when it is set. Only the first
/// call in a test binary installs anything.
pub fn init_test_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
