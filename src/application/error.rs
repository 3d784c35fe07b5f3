//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, FetchError, TtsError, VoiceGatewayError};
use crate::domain::playback::PlaybackStateError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 状态无效
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 外部服务错误（语音合成 / 音频下载）
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 语音连接错误
    #[error("Voice connection error: {0}")]
    VoiceError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<FetchError> for ApplicationError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Io(msg) => Self::StorageError(msg),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        Self::StorageError(err.to_string())
    }
}

impl From<VoiceGatewayError> for ApplicationError {
    fn from(err: VoiceGatewayError) -> Self {
        Self::VoiceError(err.to_string())
    }
}

impl From<PlaybackStateError> for ApplicationError {
    fn from(err: PlaybackStateError) -> Self {
        Self::InvalidState(err.to_string())
    }
}
