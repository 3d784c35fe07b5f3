//! Voice Gateway Port - 语音连接抽象
//!
//! 平台的语音连接 / 播放引擎，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::playback::PlaybackId;
use crate::domain::presence::{ChannelRef, GuildId};

/// 语音连接错误
#[derive(Debug, Error)]
pub enum VoiceGatewayError {
    #[error("Failed to join voice channel {channel}: {reason}")]
    Connect { channel: ChannelRef, reason: String },

    #[error("No voice connection for guild {0}")]
    NotConnected(GuildId),

    #[error("Failed to start playback: {0}")]
    Play(String),

    #[error("Failed to leave voice channel: {0}")]
    Disconnect(String),

    #[error("Invalid platform id: {0}")]
    InvalidId(u64),
}

/// 空闲信号：播放引擎报告当前音频已播完
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleSignal {
    pub playback_id: PlaybackId,
}

/// 空闲通知器
///
/// 交给播放引擎，在曲目结束（或出错）时发送一次 IdleSignal
#[derive(Debug, Clone)]
pub struct IdleNotifier {
    playback_id: PlaybackId,
    sender: mpsc::Sender<IdleSignal>,
}

impl IdleNotifier {
    pub fn new(playback_id: PlaybackId, sender: mpsc::Sender<IdleSignal>) -> Self {
        Self {
            playback_id,
            sender,
        }
    }

    pub fn playback_id(&self) -> PlaybackId {
        self.playback_id
    }

    pub async fn notify(&self) {
        let signal = IdleSignal {
            playback_id: self.playback_id,
        };
        if self.sender.send(signal).await.is_err() {
            tracing::warn!(playback_id = %self.playback_id, "Idle worker stopped, signal dropped");
        }
    }
}

/// Voice Gateway Port
#[async_trait]
pub trait VoiceGatewayPort: Send + Sync {
    /// 加入语音频道
    async fn connect(&self, channel: &ChannelRef) -> Result<(), VoiceGatewayError>;

    /// 在已建立的连接上播放本地音频文件
    async fn play(
        &self,
        channel: &ChannelRef,
        audio_path: &Path,
        notifier: IdleNotifier,
    ) -> Result<(), VoiceGatewayError>;

    /// 断开该 guild 的语音连接
    async fn disconnect(&self, guild_id: GuildId) -> Result<(), VoiceGatewayError>;
}
