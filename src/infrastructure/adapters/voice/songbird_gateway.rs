//! Songbird Voice Gateway - 基于 songbird 的语音连接与播放
//!
//! 实现 VoiceGatewayPort trait
//!
//! - connect: `Songbird::join`
//! - play: `Call::play_input(File)`，曲目 End / Error 事件发送空闲信号
//! - disconnect: `Songbird::remove`

use async_trait::async_trait;
use serenity::model::id::{ChannelId as SerenityChannelId, GuildId as SerenityGuildId};
use songbird::events::{Event, EventContext, EventHandler as SongbirdEventHandler, TrackEvent};
use songbird::input::File as SongbirdFile;
use songbird::Songbird;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{IdleNotifier, VoiceGatewayError, VoiceGatewayPort};
use crate::domain::presence::{ChannelRef, GuildId};

fn guild_id(id: GuildId) -> Result<SerenityGuildId, VoiceGatewayError> {
    if id.get() == 0 {
        return Err(VoiceGatewayError::InvalidId(id.get()));
    }
    Ok(SerenityGuildId::new(id.get()))
}

fn channel_id(channel: &ChannelRef) -> Result<SerenityChannelId, VoiceGatewayError> {
    let id = channel.channel_id.get();
    if id == 0 {
        return Err(VoiceGatewayError::InvalidId(id));
    }
    Ok(SerenityChannelId::new(id))
}

/// 曲目结束 / 出错时发送空闲信号
struct TrackIdleHandler {
    notifier: IdleNotifier,
}

#[async_trait]
impl SongbirdEventHandler for TrackIdleHandler {
    async fn act(&self, _ctx: &EventContext<'_>) -> Option<Event> {
        tracing::debug!(playback_id = %self.notifier.playback_id(), "Track went idle");
        self.notifier.notify().await;
        None
    }
}

/// Songbird 语音网关
pub struct SongbirdVoiceGateway {
    manager: Arc<Songbird>,
}

impl SongbirdVoiceGateway {
    pub fn new(manager: Arc<Songbird>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl VoiceGatewayPort for SongbirdVoiceGateway {
    async fn connect(&self, channel: &ChannelRef) -> Result<(), VoiceGatewayError> {
        let guild = guild_id(channel.guild_id)?;
        let target = channel_id(channel)?;

        self.manager
            .join(guild, target)
            .await
            .map_err(|e| VoiceGatewayError::Connect {
                channel: *channel,
                reason: e.to_string(),
            })?;

        tracing::info!(channel = %channel, "Joined voice channel");
        Ok(())
    }

    async fn play(
        &self,
        channel: &ChannelRef,
        audio_path: &Path,
        notifier: IdleNotifier,
    ) -> Result<(), VoiceGatewayError> {
        let guild = guild_id(channel.guild_id)?;
        let call_lock = self
            .manager
            .get(guild)
            .ok_or(VoiceGatewayError::NotConnected(channel.guild_id))?;

        let mut call = call_lock.lock().await;
        let input = SongbirdFile::new(audio_path.to_path_buf());
        let track = call.play_input(input.into());

        for event in [TrackEvent::End, TrackEvent::Error] {
            track
                .add_event(
                    Event::Track(event),
                    TrackIdleHandler {
                        notifier: notifier.clone(),
                    },
                )
                .map_err(|e| VoiceGatewayError::Play(e.to_string()))?;
        }

        tracing::debug!(
            channel = %channel,
            path = %audio_path.display(),
            "Started playing audio in voice channel"
        );
        Ok(())
    }

    async fn disconnect(&self, guild: GuildId) -> Result<(), VoiceGatewayError> {
        self.manager
            .remove(guild_id(guild)?)
            .await
            .map_err(|e| VoiceGatewayError::Disconnect(e.to_string()))?;

        tracing::info!(guild_id = %guild, "Left voice channel");
        Ok(())
    }
}
