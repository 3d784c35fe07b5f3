//! Announce Commands - 播报命令

use crate::application::commands::PlayOutcome;
use crate::domain::presence::{ChannelRef, VoiceChangeEvent};

/// 为一次加入 / 离开事件播报
#[derive(Debug, Clone)]
pub struct AnnounceCommand {
    pub event: VoiceChangeEvent,
}

/// 播报响应
#[derive(Debug, Clone)]
pub struct AnnounceResponse {
    pub sentence: String,
    pub channel: ChannelRef,
    pub outcome: PlayOutcome,
}
