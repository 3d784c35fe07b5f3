//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理 voice state 更新、播报、播放

mod announce_commands;
mod playback_commands;
mod voice_commands;

pub mod handlers;

pub use announce_commands::*;
pub use playback_commands::*;
pub use voice_commands::*;
