//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、AudioFetcher、AudioStorage、VoiceGateway）
//! - commands: CQRS 命令及处理器（监听、播报、播放控制）
//! - queries: CQRS 查询及处理器（占用状态）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    AnnounceCommand,
    AnnounceResponse,
    CleanupReport,
    IdleOutcome,
    PlayAnnouncementCommand,
    PlayOutcome,
    VoiceUpdateCommand,
    WatchOutcome,
    // Handlers
    handlers::{AnnounceHandler, PlaybackController, VoiceUpdateHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Audio fetcher
    AudioFetcherPort,
    FetchError,
    // Audio storage
    AudioStorageError,
    AudioStoragePort,
    // TTS engine
    TtsEnginePort,
    TtsError,
    // Voice gateway
    IdleNotifier,
    IdleSignal,
    VoiceGatewayError,
    VoiceGatewayPort,
};

pub use queries::{handlers::GetOccupancyHandler, GetOccupancyQuery};
