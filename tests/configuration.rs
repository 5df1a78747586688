//! Tests for configuration system

use foodgram::config::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(Some("config/default.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.shopping_list.title, "Shopping list");
    assert_eq!(config.shopping_list.font_path, "assets/fonts/DejaVuSans.ttf");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = Config::load(Some("config/does-not-exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.auth.jwt_lifetime_seconds, 86400);
    assert_eq!(config.logging.format, "pretty");
    assert_eq!(config.shopping_list.title, "Shopping list");
}

#[test]
fn test_default_font_exists() {
    let config = Config::load(Some("config/default.toml".to_string()))
        .expect("Failed to load config");

    let font = foodgram_shopping::FontHandle::load(&config.shopping_list.font_path)
        .expect("Bundled font should load");
    assert_eq!(font.name(), "DejaVuSans");
}
