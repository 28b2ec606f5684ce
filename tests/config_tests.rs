// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use transgate::config::{present, AppConfig};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert!(config.server.workers >= 1);
    assert_eq!(config.gateway.timeout_seconds, 15);
    assert_eq!(config.gateway.max_retries, 0);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.performance.max_body_bytes, 1024 * 1024);
    assert_eq!(
        config.providers.deepl.endpoint,
        "https://api-free.deepl.com/v2/translate"
    );
    assert_eq!(config.providers.tencent.region, "ap-guangzhou");
    assert!(config.providers.deepl.api_key.is_none());
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[server]
port = 8088

[gateway]
timeout_seconds = 5
max_retries = 2

[providers.deepl]
api_key = "deepl-test-key:fx"
endpoint = "https://api.deepl.com/v2/translate"

[providers.bing]
key = "bing-test-key"
region = "westeurope"
"#,
    );

    let config = AppConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 8088);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.gateway.timeout_seconds, 5);
    assert_eq!(config.gateway.max_retries, 2);
    assert_eq!(
        present(&config.providers.deepl.api_key).map(|s| s.expose()),
        Some("deepl-test-key:fx")
    );
    assert_eq!(
        config.providers.deepl.endpoint,
        "https://api.deepl.com/v2/translate"
    );
    assert_eq!(config.providers.bing.region.as_deref(), Some("westeurope"));
    // Untouched sections keep their defaults.
    assert_eq!(
        config.providers.youdao.endpoint,
        "https://openapi.youdao.com/api"
    );
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = AppConfig::load_from(Some(Path::new("/nonexistent/transgate/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_invalid_value_is_an_error() {
    let file = write_config("[server]\nport = \"not a number\"\n");
    assert!(AppConfig::load_from(Some(file.path())).is_err());
}

#[test]
fn test_to_toml_redacts_secrets() {
    let file = write_config(
        r#"
[providers.youdao]
app_key = "visible-app-key"
app_secret = "hidden-app-secret"
"#,
    );
    let config = AppConfig::load_from(Some(file.path())).unwrap();
    let rendered = config.to_toml().unwrap();

    assert!(rendered.contains("[REDACTED]"));
    assert!(!rendered.contains("visible-app-key"));
    assert!(!rendered.contains("hidden-app-secret"));
    assert!(rendered.contains("openapi.youdao.com"));
}

#[test]
fn test_timeout_has_a_floor() {
    let mut config = AppConfig::default();
    config.gateway.timeout_seconds = 0;
    assert_eq!(config.gateway.timeout().as_secs(), 1);
}
