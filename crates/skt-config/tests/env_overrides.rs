use figment::Jail;
use skt_config::SktConfig;

#[test]
fn env_vars_map_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("SKT_API__BASE_URL", "https://env.example.com/api");
        jail.set_env("SKT_UI__DEBOUNCE_MS", "120");

        let config = SktConfig::load(None).expect("config loads");
        assert_eq!(config.api.base_url, "https://env.example.com/api");
        assert_eq!(config.ui.debounce_ms, 120);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".skilltrack")?;
        jail.create_file(".skilltrack/config.toml", "[ui]\nlog_limit = 30\n")?;
        jail.set_env("SKT_UI__LOG_LIMIT", "10");

        let config = SktConfig::load(None).expect("config loads");
        assert_eq!(config.ui.log_limit, 10);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "SKT_UI__TOAST_TTL_SECS=9\n")?;

        let config = SktConfig::load_with_dotenv(None).expect("config loads");
        assert_eq!(config.ui.toast_ttl_secs, 9);
        Ok(())
    });
}
