//! Presence Context - Value Objects

use std::fmt;

/// 成员唯一标识（平台用户 ID）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(u64);

impl MemberId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 服务器（Guild）标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuildId(u64);

impl GuildId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 语音频道标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(u64);

impl ChannelId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 频道引用 - 建立语音连接所需的 (guild, channel) 对
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelRef {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
}

impl ChannelRef {
    pub fn new(guild_id: GuildId, channel_id: ChannelId) -> Self {
        Self {
            guild_id,
            channel_id,
        }
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.guild_id, self.channel_id)
    }
}

/// 语音状态快照
///
/// 平台无关的 voice state 视图：成员当前所在的语音频道（可能为空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSnapshot {
    pub member_id: MemberId,
    pub display_name: String,
    pub guild_id: Option<GuildId>,
    pub channel_id: Option<ChannelId>,
}

impl VoiceSnapshot {
    pub fn new(
        member_id: MemberId,
        display_name: impl Into<String>,
        guild_id: Option<GuildId>,
        channel_id: Option<ChannelId>,
    ) -> Self {
        Self {
            member_id,
            display_name: display_name.into(),
            guild_id,
            channel_id,
        }
    }

    /// 成员在该快照中所在的频道
    ///
    /// 没有 guild 的频道无法建立连接，视为不存在
    pub fn channel(&self) -> Option<ChannelRef> {
        match (self.guild_id, self.channel_id) {
            (Some(guild_id), Some(channel_id)) => Some(ChannelRef::new(guild_id, channel_id)),
            _ => None,
        }
    }
}

/// 成员动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAction {
    Joined,
    Left,
}

impl VoiceAction {
    /// 播报语句中使用的动作词
    pub fn label(&self) -> &'static str {
        match self {
            Self::Joined => "joined",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for VoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 语音变更事件
///
/// 每次收到 voice state 更新时派生，立即消费，不持久化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChangeEvent {
    pub member_id: MemberId,
    pub display_name: String,
    pub previous: Option<ChannelRef>,
    pub current: Option<ChannelRef>,
    pub action: VoiceAction,
}

impl VoiceChangeEvent {
    /// 播报的目标频道：加入取新频道，离开取旧频道
    pub fn target_channel(&self) -> Option<ChannelRef> {
        match self.action {
            VoiceAction::Joined => self.current,
            VoiceAction::Left => self.previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_channel_requires_guild() {
        let snapshot = VoiceSnapshot::new(MemberId::new(1), "Ana", None, Some(ChannelId::new(9)));
        assert!(snapshot.channel().is_none());

        let snapshot = VoiceSnapshot::new(
            MemberId::new(1),
            "Ana",
            Some(GuildId::new(7)),
            Some(ChannelId::new(9)),
        );
        assert_eq!(
            snapshot.channel(),
            Some(ChannelRef::new(GuildId::new(7), ChannelId::new(9)))
        );
    }

    #[test]
    fn test_action_label() {
        assert_eq!(VoiceAction::Joined.label(), "joined");
        assert_eq!(VoiceAction::Left.to_string(), "left");
    }
}
