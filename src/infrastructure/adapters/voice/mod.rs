//! Voice Adapter - 平台语音连接实现

mod songbird_gateway;

pub use songbird_gateway::SongbirdVoiceGateway;
