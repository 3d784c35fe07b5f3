//! Voice Update Handler - 成员语音状态监听

use std::sync::Arc;

use crate::application::commands::announce_commands::AnnounceCommand;
use crate::application::commands::handlers::AnnounceHandler;
use crate::application::commands::voice_commands::*;
use crate::application::error::ApplicationError;
use crate::domain::presence::{classify, Classification};

/// VoiceUpdate Handler - 分类 voice state 变化并触发播报
pub struct VoiceUpdateHandler {
    announce_handler: Arc<AnnounceHandler>,
}

impl VoiceUpdateHandler {
    pub fn new(announce_handler: Arc<AnnounceHandler>) -> Self {
        Self { announce_handler }
    }

    pub async fn handle(&self, cmd: VoiceUpdateCommand) -> Result<WatchOutcome, ApplicationError> {
        match classify(cmd.bot_id, cmd.previous.as_ref(), &cmd.current) {
            Classification::Ignored(reason) => {
                tracing::trace!(
                    member_id = %cmd.current.member_id,
                    reason = ?reason,
                    "Voice state update ignored"
                );
                Ok(WatchOutcome::Ignored(reason))
            }
            Classification::Change(event) => {
                tracing::debug!(
                    member_id = %event.member_id,
                    action = %event.action,
                    "Voice state change detected"
                );
                let response = self
                    .announce_handler
                    .handle(AnnounceCommand { event })
                    .await?;
                Ok(WatchOutcome::Announced(response))
            }
        }
    }
}
