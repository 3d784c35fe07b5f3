//! TTS Engine Port - 语音合成 URL 生成抽象
//!
//! 合成服务只需要构造一个可直接下载的音频 URL，无需认证

use thiserror::Error;

use crate::domain::announcement::AnnouncementRequest;

/// TTS 错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TtsError {
    #[error("Text is empty")]
    EmptyText,

    #[error("Text too long: {len} characters (max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Invalid TTS host: {0}")]
    InvalidHost(String),
}

/// TTS Engine Port
///
/// 把播报请求转换为可下载的合成音频地址
pub trait TtsEnginePort: Send + Sync {
    fn audio_url(&self, request: &AnnouncementRequest) -> Result<String, TtsError>;
}
