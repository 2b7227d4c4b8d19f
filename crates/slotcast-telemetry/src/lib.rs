//! Slotcast Telemetry - Logging setup for applications built on slotcast.
//!
//! `slotcast-events` only emits `tracing` records; this crate is the
//! optional piece that installs a subscriber for them. A [`LogConfig`] can be
//! built in code, read from TOML, or derived from `SLOTCAST_LOG_LEVEL` and
//! `SLOTCAST_LOG_FORMAT`, which fill settings the file leaves unset.
//!
//! # Example
//!
//! ```rust,no_run
//! use slotcast_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), slotcast_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("slotcast_events=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("Logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod config;
mod error;
mod logging;

pub use config::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, apply_env_fallbacks, collect_env_vars};
pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    FileLogConfig, FileRotation, LogConfig, LogFormat, LogTarget, setup_default_logging,
    setup_logging,
};
