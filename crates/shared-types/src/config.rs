use serde::{Deserialize, Serialize};

/// Simulated network delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatencyConfig {
    #[serde(default = "default_delay_ms")]
    pub sign_in_ms: u64,
    #[serde(default = "default_delay_ms")]
    pub load_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            sign_in_ms: default_delay_ms(),
            load_ms: default_delay_ms(),
        }
    }
}

/// Where file-backed session storage lives (CLI only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_session_dir")]
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: default_session_dir(),
        }
    }
}

/// Log filter and output format for the native binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section is optional so a missing or partial file still yields
/// the stock one-second delays.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_session_dir() -> String {
    ".dms-session".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}
