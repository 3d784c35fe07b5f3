//! Presence Context - 语音在线状态上下文
//!
//! 职责:
//! - voice state 快照建模
//! - 加入 / 离开事件分类

mod classifier;
mod value_objects;

pub use classifier::{classify, Classification, IgnoreReason};
pub use value_objects::{
    ChannelId, ChannelRef, GuildId, MemberId, VoiceAction, VoiceChangeEvent, VoiceSnapshot,
};
