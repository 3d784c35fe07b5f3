//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::announcement::SpeechOptions;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Discord 配置
    #[serde(default)]
    pub discord: DiscordConfig,

    /// 存活探针服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 暂存目录配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// Discord 配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordConfig {
    /// Bot token（必填）
    #[serde(default)]
    pub token: String,
}

impl DiscordConfig {
    /// 打印用，只保留末尾 4 个字符
    pub fn redacted_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TTS 配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 合成服务地址
    #[serde(default = "default_tts_host")]
    pub host: String,

    /// 语言代码
    #[serde(default = "default_lang")]
    pub lang: String,

    /// 慢速朗读
    #[serde(default)]
    pub slow: bool,

    /// 下载超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_host() -> String {
    "https://translate.google.com".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_tts_timeout() -> u64 {
    30
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            host: default_tts_host(),
            lang: default_lang(),
            slow: false,
            timeout_secs: default_tts_timeout(),
        }
    }
}

impl TtsConfig {
    pub fn speech_options(&self) -> SpeechOptions {
        SpeechOptions {
            lang: self.lang.clone(),
            slow: self.slow,
            host: self.host.clone(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频暂存目录
    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,
}

fn default_staging_dir() -> PathBuf {
    PathBuf::from("Music")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            staging_dir: default_staging_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
