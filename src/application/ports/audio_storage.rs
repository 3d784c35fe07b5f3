//! Audio Storage Port - 出站端口
//!
//! 定义合成音频暂存区的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::playback::AudioArtifact;

/// 暂存区错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Storage Port - 出站端口
///
/// 每次播报分配一个独立文件：先写入 `.part`，写完后 commit 为正式文件
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 分配新的暂存文件（尚未落盘）
    fn allocate(&self) -> AudioArtifact;

    /// 下载过程中使用的临时路径
    fn partial_path(&self, artifact: &AudioArtifact) -> PathBuf;

    /// 确保暂存目录存在
    async fn prepare(&self) -> Result<(), AudioStorageError>;

    /// 将临时文件转为正式文件
    async fn commit(&self, artifact: &AudioArtifact) -> Result<(), AudioStorageError>;

    /// 检查正式文件是否存在
    async fn exists(&self, artifact: &AudioArtifact) -> bool;

    /// 删除正式文件和临时文件
    ///
    /// 返回是否确实删除了文件；文件本就不存在不算错误
    async fn discard(&self, artifact: &AudioArtifact) -> Result<bool, AudioStorageError>;
}
