//! Playback Context - Errors

use thiserror::Error;

use super::PlaybackId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackStateError {
    #[error("Invalid playback transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Stale idle signal for playback {0}")]
    StalePlayback(PlaybackId),
}
