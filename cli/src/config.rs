//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use ballot_connectivity::ConnectivityConfig;
use ballot_types::BallotError;
use ballot_utils::LogFormat;

/// Settings for the `ballot` binary.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command-line
/// flags and environment variables override individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Staged-transition delays for `ballot connectivity`.
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, BallotError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BallotError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, BallotError> {
        toml::from_str(s).map_err(|e| BallotError::Config(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            connectivity: ConnectivityConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = CliConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.connectivity.reconnect_delay_ms, 1500);
        assert_eq!(config.connectivity.settle_delay_ms, 2000);
    }

    #[test]
    fn nested_connectivity_table() {
        let toml = r#"
            log_format = "json"

            [connectivity]
            reconnect_delay_ms = 500
        "#;
        let config = CliConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.connectivity.reconnect_delay_ms, 500);
        assert_eq!(config.connectivity.settle_delay_ms, 2000);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_level = \"debug\"").expect("write");
        let config = CliConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = CliConfig::from_toml_file(Path::new("/nonexistent/ballot.toml"));
        assert!(matches!(result, Err(BallotError::Config(_))));
    }
}
