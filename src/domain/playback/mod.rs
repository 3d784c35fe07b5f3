//! Playback Context - 播放限界上下文
//!
//! 职责:
//! - 频道占用状态机（取代全局布尔标志）
//! - 暂存音频与播放标识

mod errors;
mod state;
mod value_objects;

pub use errors::PlaybackStateError;
pub use state::{ActivePlayback, PendingPlayback, PlaybackState};
pub use value_objects::{ArtifactId, AudioArtifact, Occupancy, PlaybackId};
