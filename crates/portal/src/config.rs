use shared_types::AppConfig;
use std::sync::OnceLock;
use std::time::Duration;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `.env` and `config.toml`, apply environment overrides and store the
/// result in the global `OnceLock`. Only the first call has any effect.
///
/// A missing or unparseable file falls back to the stock defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        config
    })
}

/// Parse config text, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Overlay environment variables on top of file values.
///
/// `RUST_LOG` replaces the log filter, `DMS_SESSION_DIR` the session
/// directory, `DMS_SIGN_IN_MS` and `DMS_LOAD_MS` the simulated delays.
/// Non-numeric delay values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(filter) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
        config.logging.filter = filter;
    }
    if let Some(dir) = lookup("DMS_SESSION_DIR").filter(|v| !v.trim().is_empty()) {
        config.session.dir = dir;
    }
    if let Some(ms) = lookup("DMS_SIGN_IN_MS").and_then(|v| parse_millis("DMS_SIGN_IN_MS", &v)) {
        config.latency.sign_in_ms = ms;
    }
    if let Some(ms) = lookup("DMS_LOAD_MS").and_then(|v| parse_millis("DMS_LOAD_MS", &v)) {
        config.latency.load_ms = ms;
    }
}

fn parse_millis(key: &str, value: &str) -> Option<u64> {
    match value.trim().parse() {
        Ok(ms) => Some(ms),
        Err(e) => {
            eprintln!("[config] Ignoring {key}={value}: {e}");
            None
        }
    }
}

pub fn sign_in_delay(config: &AppConfig) -> Duration {
    Duration::from_millis(config.latency.sign_in_ms)
}

pub fn load_delay(config: &AppConfig) -> Duration {
    Duration::from_millis(config.latency.load_ms)
}
