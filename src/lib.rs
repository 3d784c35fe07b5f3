//! Herald - Discord 语音频道进出播报机器人
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Presence Context: 语音状态变更分类（加入 / 离开 / 忽略）
//! - Announcement Context: 播报文本与语音参数
//! - Playback Context: 播放状态机（Unoccupied / Connecting / Playing）
//!
//! 应用层 (application/):
//! - Ports: TtsEngine, AudioFetcher, AudioStorage, VoiceGateway
//! - Commands: VoiceUpdate, Announce, PlaybackController
//! - Queries: Occupancy
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Google TTS, reqwest 下载, 文件暂存, songbird 语音
//! - Discord: serenity 事件处理与客户端构建
//! - HTTP: 存活探针
//! - Worker: IdleWorker 播放结束清理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod testing;

pub use config::{load_config, AppConfig};
