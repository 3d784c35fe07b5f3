//! Voice State Classifier
//!
//! 将 (旧快照, 新快照) 分类为加入 / 离开事件

use super::value_objects::{MemberId, VoiceAction, VoiceChangeEvent, VoiceSnapshot};

/// 忽略原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// 事件由 bot 自己触发
    SelfEvent,
    /// 在两个频道之间移动
    ChannelMove,
    /// 频道未变化（静音、闭麦等）
    NoChannelChange,
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Change(VoiceChangeEvent),
    Ignored(IgnoreReason),
}

/// 分类一次 voice state 变化
///
/// 规则:
/// - 任一侧成员是 bot 自身 → 忽略
/// - 旧频道为空、新频道存在 → Joined（目标 = 新频道）
/// - 旧频道存在、新频道为空 → Left（目标 = 旧频道）
/// - 其它（频道间移动、仅静音变化）→ 忽略
pub fn classify(
    bot_id: MemberId,
    previous: Option<&VoiceSnapshot>,
    current: &VoiceSnapshot,
) -> Classification {
    if current.member_id == bot_id || previous.map_or(false, |p| p.member_id == bot_id) {
        return Classification::Ignored(IgnoreReason::SelfEvent);
    }

    let old_channel = previous.and_then(VoiceSnapshot::channel);
    let new_channel = current.channel();

    let (action, source) = match (old_channel, new_channel) {
        (None, Some(_)) => (VoiceAction::Joined, current),
        (Some(_), None) => (VoiceAction::Left, previous.unwrap_or(current)),
        (Some(old), Some(new)) if old != new => {
            return Classification::Ignored(IgnoreReason::ChannelMove)
        }
        _ => return Classification::Ignored(IgnoreReason::NoChannelChange),
    };

    Classification::Change(VoiceChangeEvent {
        member_id: source.member_id,
        display_name: source.display_name.clone(),
        previous: old_channel,
        current: new_channel,
        action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presence::{ChannelId, ChannelRef, GuildId};

    const BOT: u64 = 1;
    const GUILD: u64 = 100;

    fn snapshot(member: u64, channel: Option<u64>) -> VoiceSnapshot {
        VoiceSnapshot::new(
            MemberId::new(member),
            "Ana",
            Some(GuildId::new(GUILD)),
            channel.map(ChannelId::new),
        )
    }

    fn channel(id: u64) -> ChannelRef {
        ChannelRef::new(GuildId::new(GUILD), ChannelId::new(id))
    }

    #[test]
    fn test_join_targets_new_channel() {
        let old = snapshot(42, None);
        let new = snapshot(42, Some(10));

        match classify(MemberId::new(BOT), Some(&old), &new) {
            Classification::Change(event) => {
                assert_eq!(event.action, VoiceAction::Joined);
                assert_eq!(event.target_channel(), Some(channel(10)));
                assert_eq!(event.display_name, "Ana");
            }
            other => panic!("expected join, got {:?}", other),
        }
    }

    #[test]
    fn test_join_without_cached_previous_state() {
        let new = snapshot(42, Some(10));

        match classify(MemberId::new(BOT), None, &new) {
            Classification::Change(event) => {
                assert_eq!(event.action, VoiceAction::Joined);
                assert_eq!(event.previous, None);
            }
            other => panic!("expected join, got {:?}", other),
        }
    }

    #[test]
    fn test_leave_targets_previous_channel() {
        let old = snapshot(42, Some(10));
        let new = snapshot(42, None);

        match classify(MemberId::new(BOT), Some(&old), &new) {
            Classification::Change(event) => {
                assert_eq!(event.action, VoiceAction::Left);
                assert_eq!(event.target_channel(), Some(channel(10)));
                assert_eq!(event.current, None);
            }
            other => panic!("expected leave, got {:?}", other),
        }
    }

    #[test]
    fn test_bot_events_are_ignored_for_every_transition() {
        let transitions = [
            (None, Some(10)),
            (Some(10), None),
            (Some(10), Some(11)),
            (Some(10), Some(10)),
        ];

        for (before, after) in transitions {
            let old = snapshot(BOT, before);
            let new = snapshot(BOT, after);
            assert_eq!(
                classify(MemberId::new(BOT), Some(&old), &new),
                Classification::Ignored(IgnoreReason::SelfEvent)
            );
        }
    }

    #[test]
    fn test_channel_move_is_ignored() {
        let old = snapshot(42, Some(10));
        let new = snapshot(42, Some(11));

        assert_eq!(
            classify(MemberId::new(BOT), Some(&old), &new),
            Classification::Ignored(IgnoreReason::ChannelMove)
        );
    }

    #[test]
    fn test_mute_only_change_is_ignored() {
        let old = snapshot(42, Some(10));
        let new = snapshot(42, Some(10));

        assert_eq!(
            classify(MemberId::new(BOT), Some(&old), &new),
            Classification::Ignored(IgnoreReason::NoChannelChange)
        );
    }

    #[test]
    fn test_channel_without_guild_is_not_announced() {
        let new = VoiceSnapshot::new(MemberId::new(42), "Ana", None, Some(ChannelId::new(10)));

        assert_eq!(
            classify(MemberId::new(BOT), None, &new),
            Classification::Ignored(IgnoreReason::NoChannelChange)
        );
    }
}
