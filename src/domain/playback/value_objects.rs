//! Playback Context - Value Objects

use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// 暂存音频标识（每次播报唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtifactId(Uuid);

impl ArtifactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArtifactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 暂存的合成音频文件
///
/// 不变量:
/// - 从交接到删除期间只归 PlaybackController 所有
/// - 文件名由 id 派生，不同播报之间不会互相覆盖
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    id: ArtifactId,
    path: PathBuf,
}

impl AudioArtifact {
    pub fn new(id: ArtifactId, path: PathBuf) -> Self {
        Self { id, path }
    }

    pub fn id(&self) -> ArtifactId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 播放标识
///
/// 空闲信号携带该 id，过期或重复的信号不会拆除其它播放
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackId(Uuid);

impl PlaybackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlaybackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlaybackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 频道占用情况（只读视图）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Unoccupied,
    Occupied,
}

impl Occupancy {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied)
    }
}
