//! Playback Commands - 播放控制命令

use crate::domain::playback::{AudioArtifact, PlaybackId};
use crate::domain::presence::ChannelRef;

/// 在目标频道播放暂存的音频
#[derive(Debug, Clone)]
pub struct PlayAnnouncementCommand {
    pub channel: ChannelRef,
    pub artifact: AudioArtifact,
}

/// 播放结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// 已连接并开始播放
    Played(PlaybackId),
    /// 频道被占用，请求被丢弃（不排队）
    Dropped,
}

/// 一次清理的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub playback_id: PlaybackId,
    pub channel: ChannelRef,
    /// 暂存文件已删除（或本就不存在）
    pub artifact_removed: bool,
    /// 语音连接已断开
    pub disconnected: bool,
    /// 播放时长（毫秒）
    pub elapsed_ms: i64,
}

/// 空闲信号处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdleOutcome {
    Cleaned(CleanupReport),
    /// 信号不属于当前播放（重复或过期）
    Stale,
}
