//! File Storage - 文件系统音频暂存区实现
//!
//! 实现 AudioStoragePort trait
//!
//! 目录布局: `<base_dir>/tts-audio-<uuid>.mp3`

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort};
use crate::domain::playback::{ArtifactId, AudioArtifact};

const FILE_PREFIX: &str = "tts-audio";
const FILE_EXTENSION: &str = "mp3";
const PARTIAL_SUFFIX: &str = "part";

/// 文件系统音频暂存区
pub struct FileAudioStorage {
    /// 暂存目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的暂存区（目录在首次使用时创建）
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// 获取暂存目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn artifact_path(&self, id: ArtifactId) -> PathBuf {
        self.base_dir
            .join(format!("{}-{}.{}", FILE_PREFIX, id, FILE_EXTENSION))
    }

    async fn remove_if_exists(path: &Path) -> Result<bool, AudioStorageError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AudioStorageError::IoError(e.to_string())),
        }
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn allocate(&self) -> AudioArtifact {
        let id = ArtifactId::new();
        AudioArtifact::new(id, self.artifact_path(id))
    }

    fn partial_path(&self, artifact: &AudioArtifact) -> PathBuf {
        let mut path = artifact.path().as_os_str().to_owned();
        path.push(".");
        path.push(PARTIAL_SUFFIX);
        PathBuf::from(path)
    }

    async fn prepare(&self) -> Result<(), AudioStorageError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))
    }

    async fn commit(&self, artifact: &AudioArtifact) -> Result<(), AudioStorageError> {
        let partial = self.partial_path(artifact);

        fs::rename(&partial, artifact.path())
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    AudioStorageError::FileNotFound(partial.display().to_string())
                }
                _ => AudioStorageError::IoError(e.to_string()),
            })?;

        tracing::debug!(
            artifact = %artifact.id(),
            path = %artifact.path().display(),
            "Staged audio committed"
        );

        Ok(())
    }

    async fn exists(&self, artifact: &AudioArtifact) -> bool {
        fs::try_exists(artifact.path()).await.unwrap_or(false)
    }

    async fn discard(&self, artifact: &AudioArtifact) -> Result<bool, AudioStorageError> {
        let partial_removed = Self::remove_if_exists(&self.partial_path(artifact)).await?;
        let removed = Self::remove_if_exists(artifact.path()).await?;

        if removed || partial_removed {
            tracing::debug!(artifact = %artifact.id(), "Deleted staged audio");
        }

        Ok(removed || partial_removed)
    }
}
