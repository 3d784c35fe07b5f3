//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（`HERALD_` 前缀）
//! 2. 配置文件（herald.toml）
//! 3. 旧版环境变量（`BOT_TOKEN`、`PORT`）
//! 4. 默认值

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File};
use reqwest::Url;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["herald", "herald.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `HERALD_DISCORD__TOKEN=...`
/// - `HERALD_SERVER__PORT=8080`
/// - `HERALD_TTS__LANG=de`
/// - `BOT_TOKEN=...` / `PORT=3000`（旧版变量名，优先级低于配置文件）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("tts.host", "https://translate.google.com")?
        .set_default("tts.lang", "en")?
        .set_default("tts.slow", false)?
        .set_default("tts.timeout_secs", 30)?
        .set_default("storage.staging_dir", "Music")?
        .set_default("log.level", "info")?;

    builder = apply_legacy_env(builder, |key| std::env::var(key).ok())?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 例如: HERALD_DISCORD__TOKEN=...
    builder = builder.add_source(
        Environment::with_prefix("HERALD")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 旧版变量作为默认值覆盖，配置文件和 `HERALD_` 变量仍可覆盖它们
fn apply_legacy_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = lookup("BOT_TOKEN").filter(|t| !t.is_empty()) {
        builder = builder.set_default("discord.token", token)?;
    }

    if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::ValidationError(format!("Invalid PORT: {}", port)))?;
        builder = builder.set_default("server.port", i64::from(port))?;
    }

    Ok(builder)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.discord.token.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Discord token is required (HERALD_DISCORD__TOKEN or BOT_TOKEN)".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    match Url::parse(&config.tts.host) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => {
            return Err(ConfigError::ValidationError(format!(
                "TTS host must be an http(s) URL: {}",
                config.tts.host
            )));
        }
    }

    if config.tts.lang.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS language cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Discord Token: {}", config.discord.redacted_token());
    tracing::info!("Liveness Server: {}", config.server.addr());
    tracing::info!("TTS Host: {}", config.tts.host);
    tracing::info!("TTS Language: {}", config.tts.lang);
    tracing::info!("TTS Slow: {}", config.tts.slow);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("Staging Directory: {:?}", config.storage.staging_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.discord.token = "test-token".to_string();
        config
    }

    fn build_with_legacy(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("discord.token", "")?;
        let builder = apply_legacy_env(builder, |key| vars.get(key).cloned())?;
        builder
            .build()?
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_token() {
        let config = AppConfig::default();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_tts_host() {
        let mut config = valid_config();
        config.tts.host = "not a url".to_string();
        assert!(validate_config(&config).is_err());

        config.tts.host = "ftp://translate.google.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_lang() {
        let mut config = valid_config();
        config.tts.lang = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_legacy_env_applied() {
        let config = build_with_legacy(&[("BOT_TOKEN", "legacy-token"), ("PORT", "8081")])
            .unwrap();
        assert_eq!(config.discord.token, "legacy-token");
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_legacy_env_absent_keeps_defaults() {
        let config = build_with_legacy(&[]).unwrap();
        assert!(config.discord.token.is_empty());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_legacy_invalid_port() {
        assert!(matches!(
            build_with_legacy(&[("PORT", "eighty")]),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("herald.toml");
        std::fs::write(
            &path,
            r#"
[discord]
token = "file-token"

[tts]
lang = "de"
slow = true

[storage]
staging_dir = "/tmp/herald"
"#,
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.tts.lang, "de");
        assert!(config.tts.slow);
        assert_eq!(config.tts.host, "https://translate.google.com");
        assert_eq!(
            config.storage.staging_dir,
            std::path::PathBuf::from("/tmp/herald")
        );
    }
}
