//! Announcement Context - 播报上下文
//!
//! 职责:
//! - 播报语句组装
//! - 语音合成参数

mod value_objects;

pub use value_objects::{compose_sentence, AnnouncementRequest, SpeechOptions};
