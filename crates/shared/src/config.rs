//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// `chrono` format string used to display period bounds in report headers.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional `tally.toml` file and environment.
    ///
    /// Environment variables use the `TALLY` prefix with `__` separators,
    /// e.g. `TALLY__REPORT__DATE_FORMAT=%d/%m/%Y`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("tally").required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
