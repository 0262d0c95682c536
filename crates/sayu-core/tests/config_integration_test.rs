use sayu_core::{ConfigError, ConfigManager, SayuConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[server]
port = 4100

[auth]
jwt_secret = "integration-secret"
api_keys = ["sayu_integration_key"]
monthly_quota = 25

[rate_limit]
public_per_window = 5

[cache]
warmup_on_start = false
"#,
    )
    .unwrap();

    let manager = ConfigManager::load_from(&path).unwrap();
    let config = manager.config();
    assert_eq!(config.server.port, 4100);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.auth.monthly_quota, 25);
    assert_eq!(config.rate_limit.public_per_window, 5);
    assert_eq!(config.rate_limit.api_key_per_window, 1_000);
    assert!(!config.cache.warmup_on_start);
    assert_eq!(manager.config_path(), Some(path.as_path()));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").unwrap();
    let err = ConfigManager::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_default_config_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    ConfigManager::create_default_config(&path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: SayuConfig = toml::from_str(&raw).unwrap();
    assert_eq!(parsed.server.port, SayuConfig::default().server.port);
    assert!(ConfigManager::validate_config(&parsed).is_ok());
}
