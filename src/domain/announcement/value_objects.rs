//! Announcement Context - Value Objects

use crate::domain::presence::{VoiceAction, VoiceChangeEvent};

/// 语音合成参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechOptions {
    /// 语言代码
    pub lang: String,
    /// 是否慢速
    pub slow: bool,
    /// 合成服务地址
    pub host: String,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            slow: false,
            host: "https://translate.google.com".to_string(),
        }
    }
}

/// 播报请求
///
/// 只在构建语音 URL 期间存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementRequest {
    pub text: String,
    pub options: SpeechOptions,
}

impl AnnouncementRequest {
    pub fn new(text: impl Into<String>, options: SpeechOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// 由语音变更事件生成播报
    pub fn for_event(event: &VoiceChangeEvent, options: SpeechOptions) -> Self {
        Self::new(compose_sentence(&event.display_name, event.action), options)
    }
}

/// `"{name} has {action} the voice channel"`
pub fn compose_sentence(name: &str, action: VoiceAction) -> String {
    format!("{} has {} the voice channel", name, action.label())
}
