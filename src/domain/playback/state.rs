//! Playback Context - 状态机
//!
//! Unoccupied → Connecting → Playing → Unoccupied
//!
//! 只有这三个状态：没有暂停、音量、队列。

use chrono::{DateTime, Utc};

use super::{AudioArtifact, Occupancy, PlaybackId, PlaybackStateError};
use crate::domain::presence::ChannelRef;

/// 正在连接的播放
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPlayback {
    pub channel: ChannelRef,
    pub artifact: AudioArtifact,
}

/// 正在进行的播放
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePlayback {
    pub playback_id: PlaybackId,
    pub channel: ChannelRef,
    pub artifact: AudioArtifact,
    pub started_at: DateTime<Utc>,
}

/// 播放状态
///
/// 不变量:
/// - 同一时刻最多一个语音连接
/// - 只能通过下列转换函数修改
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Unoccupied,
    Connecting(PendingPlayback),
    Playing(ActivePlayback),
}

impl PlaybackState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unoccupied => "unoccupied",
            Self::Connecting(_) => "connecting",
            Self::Playing(_) => "playing",
        }
    }

    /// Connecting 和 Playing 都视为占用
    pub fn occupancy(&self) -> Occupancy {
        match self {
            Self::Unoccupied => Occupancy::Unoccupied,
            Self::Connecting(_) | Self::Playing(_) => Occupancy::Occupied,
        }
    }

    #[cfg(test)]
    pub fn active_playback(&self) -> Option<&ActivePlayback> {
        match self {
            Self::Playing(active) => Some(active),
            _ => None,
        }
    }

    /// Unoccupied → Connecting
    pub fn begin_connect(
        &mut self,
        channel: ChannelRef,
        artifact: AudioArtifact,
    ) -> Result<(), PlaybackStateError> {
        match self {
            Self::Unoccupied => {
                *self = Self::Connecting(PendingPlayback { channel, artifact });
                Ok(())
            }
            other => Err(PlaybackStateError::InvalidTransition {
                from: other.name(),
                to: "connecting",
            }),
        }
    }

    /// Connecting → Unoccupied（连接或启动播放失败）
    pub fn abort(&mut self) -> Result<PendingPlayback, PlaybackStateError> {
        match std::mem::take(self) {
            Self::Connecting(pending) => Ok(pending),
            other => {
                let from = other.name();
                *self = other;
                Err(PlaybackStateError::InvalidTransition {
                    from,
                    to: "unoccupied",
                })
            }
        }
    }

    /// Connecting → Playing
    pub fn start_playing(&mut self, playback_id: PlaybackId) -> Result<(), PlaybackStateError> {
        match std::mem::take(self) {
            Self::Connecting(pending) => {
                *self = Self::Playing(ActivePlayback {
                    playback_id,
                    channel: pending.channel,
                    artifact: pending.artifact,
                    started_at: Utc::now(),
                });
                Ok(())
            }
            other => {
                let from = other.name();
                *self = other;
                Err(PlaybackStateError::InvalidTransition {
                    from,
                    to: "playing",
                })
            }
        }
    }

    /// Playing → Unoccupied（收到空闲信号）
    ///
    /// 只接受与当前播放相同的 id，因此每次播放只会结束一次
    pub fn finish(&mut self, playback_id: PlaybackId) -> Result<ActivePlayback, PlaybackStateError> {
        match std::mem::take(self) {
            Self::Playing(active) if active.playback_id == playback_id => Ok(active),
            other => {
                *self = other;
                Err(PlaybackStateError::StalePlayback(playback_id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::playback::ArtifactId;
    use crate::domain::presence::{ChannelId, GuildId};
    use std::path::PathBuf;

    fn channel() -> ChannelRef {
        ChannelRef::new(GuildId::new(1), ChannelId::new(2))
    }

    fn artifact() -> AudioArtifact {
        AudioArtifact::new(ArtifactId::new(), PathBuf::from("/tmp/tts-audio.mp3"))
    }

    #[test]
    fn test_full_lifecycle() {
        let mut state = PlaybackState::default();
        assert_eq!(state.occupancy(), Occupancy::Unoccupied);

        state.begin_connect(channel(), artifact()).unwrap();
        assert_eq!(state.name(), "connecting");
        assert!(state.occupancy().is_occupied());

        let id = PlaybackId::new();
        state.start_playing(id).unwrap();
        assert_eq!(state.active_playback().map(|a| a.playback_id), Some(id));
        assert!(state.occupancy().is_occupied());

        let finished = state.finish(id).unwrap();
        assert_eq!(finished.channel, channel());
        assert_eq!(state, PlaybackState::Unoccupied);
    }

    #[test]
    fn test_cannot_connect_while_occupied() {
        let mut state = PlaybackState::default();
        state.begin_connect(channel(), artifact()).unwrap();

        let err = state.begin_connect(channel(), artifact()).unwrap_err();
        assert_eq!(
            err,
            PlaybackStateError::InvalidTransition {
                from: "connecting",
                to: "connecting"
            }
        );
        assert_eq!(state.name(), "connecting");
    }

    #[test]
    fn test_abort_returns_pending_artifact() {
        let mut state = PlaybackState::default();
        let staged = artifact();
        state.begin_connect(channel(), staged.clone()).unwrap();

        let pending = state.abort().unwrap();
        assert_eq!(pending.artifact, staged);
        assert_eq!(state, PlaybackState::Unoccupied);
    }

    #[test]
    fn test_finish_runs_once() {
        let mut state = PlaybackState::default();
        state.begin_connect(channel(), artifact()).unwrap();
        let id = PlaybackId::new();
        state.start_playing(id).unwrap();

        assert!(state.finish(id).is_ok());
        assert_eq!(
            state.finish(id).unwrap_err(),
            PlaybackStateError::StalePlayback(id)
        );
    }

    #[test]
    fn test_stale_signal_keeps_current_playback() {
        let mut state = PlaybackState::default();
        state.begin_connect(channel(), artifact()).unwrap();
        let id = PlaybackId::new();
        state.start_playing(id).unwrap();

        let stale = PlaybackId::new();
        assert!(state.finish(stale).is_err());
        assert_eq!(state.active_playback().map(|a| a.playback_id), Some(id));
    }
}
