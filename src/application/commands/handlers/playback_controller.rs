//! Playback Controller
//!
//! 持有频道占用状态机，负责 连接 → 播放 → 清理。
//!
//! 状态保存在 `tokio::sync::Mutex` 中，连接和清理期间持锁：
//! - `play` 使用 `try_lock`，锁被占用即视为频道占用，请求直接丢弃（不排队、不等待）
//! - `handle_idle` 等待锁，保证清理完成前不会建立新连接
//!
//! 只读的占用视图单独保存在 `occupied` 中，只在持有状态锁时更新，
//! 读取它不会与 `play` 争抢状态锁。

use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::application::commands::playback_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStoragePort, IdleNotifier, IdleSignal, VoiceGatewayPort};
use crate::domain::playback::{AudioArtifact, Occupancy, PlaybackId, PlaybackState};
use crate::domain::presence::GuildId;

pub struct PlaybackController {
    state: Mutex<PlaybackState>,
    occupied: AtomicBool,
    voice_gateway: Arc<dyn VoiceGatewayPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
    idle_sender: mpsc::Sender<IdleSignal>,
}

impl PlaybackController {
    pub fn new(
        voice_gateway: Arc<dyn VoiceGatewayPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        idle_sender: mpsc::Sender<IdleSignal>,
    ) -> Self {
        Self {
            state: Mutex::new(PlaybackState::Unoccupied),
            occupied: AtomicBool::new(false),
            voice_gateway,
            audio_storage,
            idle_sender,
        }
    }

    /// 当前占用情况（只读）
    pub fn occupancy(&self) -> Occupancy {
        if self.occupied.load(Ordering::Acquire) {
            Occupancy::Occupied
        } else {
            Occupancy::Unoccupied
        }
    }

    /// 播放一条暂存的播报
    pub async fn play(&self, cmd: PlayAnnouncementCommand) -> Result<PlayOutcome, ApplicationError> {
        let PlayAnnouncementCommand { channel, artifact } = cmd;

        let mut state = match self.state.try_lock() {
            Ok(state) if !state.occupancy().is_occupied() => state,
            _ => {
                tracing::info!(
                    channel = %channel,
                    artifact = %artifact.id(),
                    "Voice channel occupied, announcement dropped"
                );
                self.discard_artifact(&artifact).await;
                return Ok(PlayOutcome::Dropped);
            }
        };

        if !self.audio_storage.exists(&artifact).await {
            tracing::error!(path = %artifact.path().display(), "Audio file not found");
            return Err(ApplicationError::not_found(
                "Audio file",
                artifact.path().display().to_string(),
            ));
        }

        state.begin_connect(channel, artifact.clone())?;
        self.occupied.store(true, Ordering::Release);
        tracing::debug!(channel = %channel, "Joining voice channel");

        if let Err(e) = self.voice_gateway.connect(&channel).await {
            tracing::error!(channel = %channel, error = %e, "Failed to join voice channel");
            // 超时的 join 可能已经注册了连接
            self.leave_channel(channel.guild_id).await;
            let pending = state.abort();
            self.occupied.store(false, Ordering::Release);
            self.discard_artifact(&pending?.artifact).await;
            return Err(e.into());
        }

        let playback_id = PlaybackId::new();
        let notifier = IdleNotifier::new(playback_id, self.idle_sender.clone());

        if let Err(e) = self
            .voice_gateway
            .play(&channel, artifact.path(), notifier)
            .await
        {
            tracing::error!(channel = %channel, error = %e, "Failed to start playback");
            self.leave_channel(channel.guild_id).await;
            let pending = state.abort();
            self.occupied.store(false, Ordering::Release);
            self.discard_artifact(&pending?.artifact).await;
            return Err(e.into());
        }

        state.start_playing(playback_id)?;

        tracing::info!(
            playback_id = %playback_id,
            channel = %channel,
            artifact = %artifact.id(),
            "Playing announcement"
        );

        Ok(PlayOutcome::Played(playback_id))
    }

    /// 处理播放引擎的空闲信号：删除文件、断开连接、恢复 Unoccupied
    ///
    /// 每个步骤失败都只记录日志，清理总会走完
    pub async fn handle_idle(&self, signal: IdleSignal) -> Result<IdleOutcome, ApplicationError> {
        let mut state = self.state.lock().await;

        let active = match state.finish(signal.playback_id) {
            Ok(active) => active,
            Err(_) => {
                tracing::debug!(playback_id = %signal.playback_id, "Ignoring stale idle signal");
                return Ok(IdleOutcome::Stale);
            }
        };

        let artifact_removed = match self.audio_storage.discard(&active.artifact).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(
                    artifact = %active.artifact.id(),
                    error = %e,
                    "Failed to delete staged audio"
                );
                false
            }
        };

        let disconnected = self.leave_channel(active.channel.guild_id).await;
        self.occupied.store(false, Ordering::Release);

        let report = CleanupReport {
            playback_id: active.playback_id,
            channel: active.channel,
            artifact_removed,
            disconnected,
            elapsed_ms: (Utc::now() - active.started_at).num_milliseconds(),
        };

        tracing::info!(
            playback_id = %report.playback_id,
            elapsed_ms = report.elapsed_ms,
            artifact_removed,
            disconnected,
            "Finished playing audio"
        );

        Ok(IdleOutcome::Cleaned(report))
    }

    /// 断开失败只记录日志
    async fn leave_channel(&self, guild_id: GuildId) -> bool {
        match self.voice_gateway.disconnect(guild_id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(guild_id = %guild_id, error = %e, "Failed to leave voice channel");
                false
            }
        }
    }

    async fn discard_artifact(&self, artifact: &AudioArtifact) {
        if let Err(e) = self.audio_storage.discard(artifact).await {
            tracing::warn!(artifact = %artifact.id(), error = %e, "Failed to delete staged audio");
        }
    }
}
