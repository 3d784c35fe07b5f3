//! Audio Fetcher Port - 音频下载抽象

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 下载错误
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(String),
}

/// Audio Fetcher Port
#[async_trait]
pub trait AudioFetcherPort: Send + Sync {
    /// 以流的方式下载 `url`，原样写入 `dest`，返回写入的字节数
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}
