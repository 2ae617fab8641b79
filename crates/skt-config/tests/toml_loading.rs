//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    providers::{Format, Serialized, Toml},
    Figment, Jail,
};
use pretty_assertions::assert_eq;
use skt_config::{ConfigError, SktConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://skills.example.com/api/"
timeout_secs = 3
user_agent = "tests/1.0"

[ui]
debounce_ms = 150
toast_ttl_secs = 8
log_limit = 50

[theme]
preference_file = "./theme.json"
"#,
        )?;

        let config: SktConfig = Figment::from(Serialized::defaults(SktConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.normalized_base_url(), "https://skills.example.com/api");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.user_agent, "tests/1.0");
        assert_eq!(config.ui.debounce_ms, 150);
        assert_eq!(config.ui.toast_ttl_secs, 8);
        assert_eq!(config.ui.log_limit, 50);
        assert_eq!(config.theme.preference_file, "./theme.json");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[ui]\nlog_limit = 5\n")?;

        let config: SktConfig = Figment::from(Serialized::defaults(SktConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.ui.log_limit, 5);
        assert_eq!(config.ui.debounce_ms, 300);
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000/api");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".skilltrack")?;
        jail.create_file(
            ".skilltrack/config.toml",
            "[api]\nbase_url = \"http://localhost:8080/api\"\n",
        )?;

        let config = SktConfig::load(None).expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".skilltrack")?;
        jail.create_file(".skilltrack/config.toml", "[ui]\nlog_limit = 30\n")?;
        jail.create_file("custom.toml", "[ui]\nlog_limit = 40\n")?;

        let config = SktConfig::load(Some(std::path::Path::new("custom.toml"))).expect("loads");
        assert_eq!(config.ui.log_limit, 40);
        Ok(())
    });
}

#[test]
fn invalid_values_are_reported_by_field() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[ui]\ndebounce_ms = 0\n")?;

        let err = SktConfig::load(Some(std::path::Path::new("bad.toml"))).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "ui.debounce_ms"
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", "[ui\nlog_limit = \n")?;

        let err = SktConfig::load(Some(std::path::Path::new("broken.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
