//! Loading `LogConfig` from TOML with environment variable fallbacks.
//!
//! Env vars are **fallback**, not override: they only fill fields that the
//! TOML document left unset.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{TelemetryError, TelemetryResult};
use crate::logging::LogConfig;

/// Env var supplying the log level when the config does not set one.
pub const ENV_LOG_LEVEL: &str = "SLOTCAST_LOG_LEVEL";

/// Env var supplying the log format when the config does not set one.
pub const ENV_LOG_FORMAT: &str = "SLOTCAST_LOG_FORMAT";

/// Mapping from environment variable name to top-level config key.
struct EnvMapping {
    var_name: &'static str,
    field: &'static str,
}

const ENV_MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        var_name: ENV_LOG_LEVEL,
        field: "level",
    },
    EnvMapping {
        var_name: ENV_LOG_FORMAT,
        field: "format",
    },
];

/// Collect the `SLOTCAST_*` variables from the process environment.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("SLOTCAST_"))
        .collect()
}

/// Fill keys missing from `table` with values from `env_vars`.
///
/// Returns the number of env vars applied.
pub fn apply_env_fallbacks<S: BuildHasher>(
    table: &mut toml::Table,
    env_vars: &HashMap<String, String, S>,
) -> usize {
    let mut count: usize = 0;

    for mapping in ENV_MAPPINGS {
        if table.contains_key(mapping.field) {
            continue;
        }

        if let Some(val) = env_vars.get(mapping.var_name) {
            debug!(
                var = mapping.var_name,
                field = mapping.field,
                "applying env var fallback"
            );
            table.insert(
                mapping.field.to_owned(),
                toml::Value::String(val.trim().to_lowercase()),
            );
            count = count.saturating_add(1);
        }
    }

    count
}

fn parse_table(input: &str, path: &str) -> TelemetryResult<toml::Table> {
    toml::from_str(input).map_err(|e| TelemetryError::ParseError {
        path: path.to_owned(),
        source: e,
    })
}

fn deserialize_table(table: toml::Table, path: &str) -> TelemetryResult<LogConfig> {
    LogConfig::deserialize(toml::Value::Table(table)).map_err(|e| TelemetryError::ParseError {
        path: path.to_owned(),
        source: e,
    })
}

impl LogConfig {
    /// Parse a TOML document, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::ParseError`] if the document is not valid
    /// TOML or does not describe a `LogConfig`.
    pub fn from_toml_str(input: &str) -> TelemetryResult<Self> {
        deserialize_table(parse_table(input, "<inline>")?, "<inline>")
    }

    /// Parse a TOML document, filling unset fields from `env_vars`.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::ParseError`] if the document or an applied
    /// env value is invalid.
    pub fn from_toml_str_with_env<S: BuildHasher>(
        input: &str,
        env_vars: &HashMap<String, String, S>,
    ) -> TelemetryResult<Self> {
        let mut table = parse_table(input, "<inline>")?;
        apply_env_fallbacks(&mut table, env_vars);
        deserialize_table(table, "<inline>")
    }

    /// Load a config file, filling unset fields from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::IoError`] if the file cannot be read and
    /// [`TelemetryError::ParseError`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> TelemetryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let input = std::fs::read_to_string(path)?;

        let mut table = parse_table(&input, &path_str)?;
        let applied = apply_env_fallbacks(&mut table, &collect_env_vars());
        debug!(path = %path_str, env_fallbacks = applied, "Loaded log config");

        deserialize_table(table, &path_str)
    }

    /// Build a config from defaults plus the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::ParseError`] if an env value is invalid,
    /// e.g. an unknown `SLOTCAST_LOG_FORMAT`.
    pub fn from_env() -> TelemetryResult<Self> {
        Self::from_toml_str_with_env("", &collect_env_vars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{FileRotation, LogFormat, LogTarget};
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = LogConfig::from_toml_str("").unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_full_document() {
        let input = r#"
            level = "debug"
            format = "json"
            timestamps = false
            directives = ["slotcast_events=trace"]

            [target]
            file = "/var/log/slotcast"

            [file]
            prefix = "emitter"
            rotation = "hourly"
            max_files = 7
        "#;

        let config = LogConfig::from_toml_str(input).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.timestamps);
        assert_eq!(config.directives, vec!["slotcast_events=trace"]);
        assert_eq!(
            config.target,
            LogTarget::File(PathBuf::from("/var/log/slotcast"))
        );
        assert_eq!(config.file.prefix, "emitter");
        assert_eq!(config.file.rotation, FileRotation::Hourly);
        assert_eq!(config.file.max_files, 7);
    }

    #[test]
    fn test_invalid_toml() {
        let err = LogConfig::from_toml_str("level = ").unwrap_err();
        assert!(matches!(err, TelemetryError::ParseError { ref path, .. } if path == "<inline>"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = LogConfig::from_toml_str(r#"format = "xml""#).unwrap_err();
        assert!(matches!(err, TelemetryError::ParseError { .. }));
    }

    #[test]
    fn test_env_fallback_fills_unset_fields() {
        let vars = env(&[(ENV_LOG_LEVEL, "trace"), (ENV_LOG_FORMAT, "Compact")]);
        let config = LogConfig::from_toml_str_with_env("", &vars).unwrap();

        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_env_fallback_does_not_override_file() {
        let vars = env(&[(ENV_LOG_LEVEL, "trace")]);
        let config = LogConfig::from_toml_str_with_env(r#"level = "warn""#, &vars).unwrap();
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn test_apply_env_fallbacks_count() {
        let mut table = toml::Table::new();
        table.insert("format".to_string(), toml::Value::String("json".into()));

        let vars = env(&[(ENV_LOG_LEVEL, "debug"), (ENV_LOG_FORMAT, "pretty")]);
        let applied = apply_env_fallbacks(&mut table, &vars);

        assert_eq!(applied, 1);
        assert_eq!(table["level"].as_str(), Some("debug"));
        assert_eq!(table["format"].as_str(), Some("json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.toml");
        std::fs::write(&path, "level = \"error\"\nformat = \"compact\"\n").unwrap();

        let config = LogConfig::load(&path).unwrap();
        assert_eq!(config.level, "error");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_from_env_matches_collected_vars() {
        let expected = LogConfig::from_toml_str_with_env("", &collect_env_vars());
        let actual = LogConfig::from_env();
        match (expected, actual) {
            (Ok(expected), Ok(actual)) => assert_eq!(expected, actual),
            (Err(_), Err(_)) => {},
            (expected, actual) => panic!("diverged: {expected:?} vs {actual:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LogConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TelemetryError::IoError(_)));
    }
}
