//! Discord Event Handler
//!
//! 把 serenity 的 voice state 转换成领域快照，交给 VoiceUpdateHandler。
//! 网关回调是 fire-and-forget，这里只记录日志，错误不外抛。

use async_trait::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::Ready;
use serenity::model::voice::VoiceState;
use std::sync::Arc;

use crate::application::{VoiceUpdateCommand, VoiceUpdateHandler, WatchOutcome};
use crate::domain::presence::{ChannelId, GuildId, MemberId, VoiceSnapshot};

/// serenity 事件处理器
pub struct VoiceEventHandler {
    watcher: Arc<VoiceUpdateHandler>,
}

impl VoiceEventHandler {
    pub fn new(watcher: Arc<VoiceUpdateHandler>) -> Self {
        Self { watcher }
    }
}

/// 成员显示名：服务器昵称 > 全局名 > 用户名，缓存缺失时走 HTTP
async fn display_name(ctx: &Context, state: &VoiceState) -> String {
    if let Some(member) = &state.member {
        return member.display_name().to_string();
    }

    match state.user_id.to_user(ctx).await {
        Ok(user) => user.global_name.clone().unwrap_or(user.name),
        Err(e) => {
            tracing::warn!(user_id = %state.user_id, error = %e, "Failed to fetch user");
            state.user_id.to_string()
        }
    }
}

async fn snapshot(ctx: &Context, state: &VoiceState) -> VoiceSnapshot {
    VoiceSnapshot::new(
        MemberId::new(state.user_id.get()),
        display_name(ctx, state).await,
        state.guild_id.map(|id| GuildId::new(id.get())),
        state.channel_id.map(|id| ChannelId::new(id.get())),
    )
}

#[async_trait]
impl EventHandler for VoiceEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(guilds = ready.guilds.len(), "Logged in as {}!", ready.user.tag());
    }

    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        let bot_id = MemberId::new(ctx.cache.current_user().id.get());

        // bot 自身的事件不需要解析显示名
        if new.user_id.get() == bot_id.get() {
            return;
        }

        let previous = match &old {
            Some(state) => Some(snapshot(&ctx, state).await),
            None => None,
        };
        let current = snapshot(&ctx, &new).await;

        let cmd = VoiceUpdateCommand {
            bot_id,
            previous,
            current,
        };

        match self.watcher.handle(cmd).await {
            Ok(WatchOutcome::Announced(response)) => {
                tracing::debug!(
                    channel = %response.channel,
                    outcome = ?response.outcome,
                    "Announcement handled"
                );
            }
            Ok(WatchOutcome::Ignored(_)) => {}
            Err(e) => {
                tracing::error!(
                    user_id = %new.user_id,
                    error = %e,
                    "Error announcing TTS"
                );
            }
        }
    }
}
