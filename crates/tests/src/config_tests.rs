use pretty_assertions::assert_eq;
use portal::config::{apply_env_overrides, load_delay, parse_config, sign_in_delay};
use shared_types::AppConfig;
use std::time::Duration;

#[test]
fn sample_config_parses() {
    let config = parse_config(
        r#"
        [latency]
        sign_in_ms = 250
        load_ms = 500

        [session]
        dir = "/tmp/dms"

        [logging]
        filter = "portal=debug"
        json = true
        "#,
    );

    assert_eq!(sign_in_delay(&config), Duration::from_millis(250));
    assert_eq!(load_delay(&config), Duration::from_millis(500));
    assert_eq!(config.session.dir, "/tmp/dms");
    assert!(config.logging.json);
}

#[test]
fn empty_config_is_all_defaults() {
    let config = parse_config("");
    assert_eq!(config, AppConfig::default());
    assert_eq!(sign_in_delay(&config), Duration::from_secs(1));
}

#[test]
fn config_serializes_back_to_toml() {
    let config = AppConfig::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(parse_config(&text), config);
}

#[test]
fn session_dir_override() {
    let mut config = AppConfig::default();
    apply_env_overrides(&mut config, |key| {
        (key == "DMS_SESSION_DIR").then(|| "/var/tmp/dms".to_string())
    });
    assert_eq!(config.session.dir, "/var/tmp/dms");
    assert_eq!(config.logging.filter, "info");
}
