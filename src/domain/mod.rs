//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Presence Context: voice state 快照与加入/离开分类
//! - Announcement Context: 播报语句与合成参数
//! - Playback Context: 频道占用状态机

pub mod announcement;
pub mod playback;
pub mod presence;
