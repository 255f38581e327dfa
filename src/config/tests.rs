use std::time::Duration;

use super::*;

fn settings_from(raw: RawSettings) -> Settings {
    Settings::from_raw(raw).expect("settings should validate")
}

#[test]
fn defaults_apply_when_nothing_is_configured() {
    let settings = settings_from(RawSettings::default());

    assert_eq!(settings.server.addr.port(), 5000);
    assert_eq!(settings.upstream.base_url, "https://api.notion.com/v1");
    assert_eq!(settings.cache.list_ttl, Duration::from_secs(30 * 60));
    assert_eq!(settings.cache.post_ttl, Duration::from_secs(2 * 60 * 60));
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert_eq!(settings.logging.format, LogFormat::Compact);
    assert_eq!(settings.http.environment, "development");
    assert!(!settings.http.allowed_origins.is_empty());
}

#[test]
fn cli_overrides_win_over_raw_values() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(6000);
    raw.logging.level = Some("warn".to_string());

    let overrides = ServeOverrides {
        server_port: Some(7000),
        log_level: Some("debug".to_string()),
        log_json: Some(true),
        ..ServeOverrides::default()
    };
    raw.apply_overrides(&overrides);

    let settings = settings_from(raw);
    assert_eq!(settings.server.addr.port(), 7000);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn invalid_host_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.host = Some("not-an-ip".to_string());

    let err = Settings::from_raw(raw).expect_err("host should fail to parse");
    assert!(matches!(err, LoadError::Invalid { key: "server.host", .. }));
}

#[test]
fn zero_ttl_is_rejected() {
    let mut raw = RawSettings::default();
    raw.cache.list_ttl_secs = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero ttl should fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "cache.list_ttl_secs",
            ..
        }
    ));
}
