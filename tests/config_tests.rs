use pretty_assertions::assert_eq;
use sports_model_service::config;
use tempfile::TempDir;

async fn load_fixture(contents: &str) -> sports_model_service::Result<config::Config> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    tokio::fs::write(&path, contents).await.unwrap();
    config::load_from(&path.to_string_lossy()).await
}

#[tokio::test]
async fn test_load_full_config() {
    let config = load_fixture(
        r#"
server:
  host: 127.0.0.1
  port: 9100
  logs:
    level: debug
"#,
    )
    .await
    .unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.logs.level, "debug");
}

#[tokio::test]
async fn test_partial_config_fills_defaults() {
    let config = load_fixture(
        r#"
server:
  port: 9100
"#,
    )
    .await
    .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.logs.level, "info");
}

#[tokio::test]
async fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.yaml");

    let config = config::load_from(&path.to_string_lossy()).await.unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.logs.level, "info");
}

#[tokio::test]
async fn test_malformed_yaml_is_an_error() {
    let result = load_fixture("server: [not a mapping").await;

    assert!(result.is_err());
}
