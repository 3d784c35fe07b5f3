//! TTS Adapter - 语音合成 URL 生成实现

mod google_tts_client;

pub use google_tts_client::*;
