use super::mocks::RecordingConversationLog;
use axum::Router;
use dummy_backend::{
    Result,
    config::{Config, LogFormat, LogsConfig, ServerConfig},
    server,
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec![],
            logs: LogsConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
            },
        },
    }
}

/// Build the production router around a recording conversation log
pub fn create_test_app() -> (Router, RecordingConversationLog) {
    create_test_app_with_log(RecordingConversationLog::new())
}

pub fn create_test_app_with_log(
    log: RecordingConversationLog,
) -> (Router, RecordingConversationLog) {
    let config = create_test_config();
    let app = server::router(&config.server, Arc::new(log.clone())).unwrap();
    (app, log)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8000
  allowed_origins:
    - "http://localhost:3000"
  logs:
    level: "debug"
    format: "pretty"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "invalid-host"
  port: 8000
"#;
