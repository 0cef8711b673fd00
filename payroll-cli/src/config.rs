//! TOML configuration for the `payroll-tax` binary.
//!
//! Every key is optional; an absent file means defaults.
//!
//! ```toml
//! [logging]
//! level = "debug"          # any EnvFilter directive
//! file = "payroll.log"     # append-mode log file
//! stdout = true            # console logging (written to stderr)
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive. When unset, `RUST_LOG` applies, then `info`.
    pub level: Option<String>,
    /// Log file to append to, in addition to the console.
    pub file: Option<PathBuf>,
    /// Console logging on or off. File logging is unaffected.
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            stdout: true,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.logging.stdout);
    }

    #[test]
    fn logging_section_is_parsed() {
        let config = Config::from_toml_str(
            r#"
[logging]
level = "debug"
file = "payroll.log"
stdout = false
"#,
        )
        .unwrap();

        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("payroll.log")));
        assert!(!config.logging.stdout);
    }

    #[test]
    fn partial_logging_section_keeps_other_defaults() {
        let config = Config::from_toml_str("[logging]\nlevel = \"warn\"\n").unwrap();

        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert!(config.logging.file.is_none());
        assert!(config.logging.stdout);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Config::from_toml_str("[logging]\ncolour = true\n");

        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = Config::load(Path::new("/nonexistent/payroll.toml")).unwrap_err();

        assert!(error.to_string().contains("/nonexistent/payroll.toml"));
    }
}
