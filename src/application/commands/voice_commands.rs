//! Voice Commands - voice state 变更命令

use crate::application::commands::AnnounceResponse;
use crate::domain::presence::{IgnoreReason, MemberId, VoiceSnapshot};

/// 处理一次 voice state 更新
#[derive(Debug, Clone)]
pub struct VoiceUpdateCommand {
    /// bot 自身的身份，用于过滤自触发事件
    pub bot_id: MemberId,
    /// 变更前的快照（平台缓存缺失时为空）
    pub previous: Option<VoiceSnapshot>,
    pub current: VoiceSnapshot,
}

/// 处理结果
#[derive(Debug, Clone)]
pub enum WatchOutcome {
    Ignored(IgnoreReason),
    Announced(AnnounceResponse),
}
