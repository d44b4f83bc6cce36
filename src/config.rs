//! Configuration types for spotwatch

use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Monitor loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Page to scrape
    pub url: String,

    /// Seconds between cycles
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Bounded wait for the price containers to appear
    #[serde(default = "default_render_wait")]
    pub render_wait_secs: u64,

    /// Settle delay after the containers appear
    #[serde(default = "default_settle")]
    pub settle_secs: u64,

    /// WebDriver endpoint the browser session is acquired from
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

fn default_refresh_interval() -> u64 {
    60
}
fn default_render_wait() -> u64 {
    15
}
fn default_settle() -> u64 {
    2
}
fn default_webdriver_url() -> String {
    "http://localhost:9515".to_string()
}

/// Threshold alert configuration
///
/// A missing threshold disables that commodity's alert; a missing recipient
/// disables alerting entirely. Neither is a startup fault.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertsConfig {
    pub recipient: Option<String>,
    pub gold_threshold: Option<Decimal>,
    pub silver_threshold: Option<Decimal>,
}

/// Mail relay configuration (credentials come from the environment)
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}
fn default_smtp_port() -> u16 {
    587
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
        }
    }
}

/// Read API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [monitor]
            url = "https://auragold.in"
            refresh_interval_secs = 60
            render_wait_secs = 15
            settle_secs = 2
            webdriver_url = "http://localhost:9515"

            [alerts]
            recipient = "ops@example.com"
            gold_threshold = 5000
            silver_threshold = 100

            [mail]
            smtp_host = "smtp.gmail.com"
            smtp_port = 587

            [server]
            bind_addr = "0.0.0.0:5000"

            [telemetry]
            log_level = "info"
            log_format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.monitor.url, "https://auragold.in");
        assert_eq!(config.monitor.refresh_interval_secs, 60);
        assert_eq!(config.alerts.gold_threshold, Some(dec!(5000)));
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let toml = r#"
            [monitor]
            url = "https://auragold.in"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.monitor.refresh_interval_secs, 60);
        assert_eq!(config.monitor.render_wait_secs, 15);
        assert_eq!(config.monitor.settle_secs, 2);
        assert_eq!(config.monitor.webdriver_url, "http://localhost:9515");
        assert_eq!(config.mail.smtp_port, 587);
        assert_eq!(config.server.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_thresholds_deserialize_as_disabled() {
        let toml = r#"
            [monitor]
            url = "https://auragold.in"

            [alerts]
            recipient = "ops@example.com"
            gold_threshold = 5000
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.alerts.gold_threshold, Some(dec!(5000)));
        assert!(config.alerts.silver_threshold.is_none());
    }

    #[test]
    fn test_decimal_threshold_from_float() {
        let toml = r#"
            [monitor]
            url = "https://auragold.in"

            [alerts]
            silver_threshold = 112.50
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.alerts.silver_threshold, Some(dec!(112.50)));
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(include_str!("../config.toml.example")).unwrap();
        assert_eq!(config.monitor.url, "https://auragold.in");
        assert!(config.alerts.gold_threshold.is_some());
    }
}
