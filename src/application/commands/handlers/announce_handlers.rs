//! Announce Handler - 组装播报语句、下载合成音频、交给播放控制器

use std::sync::Arc;

use crate::application::commands::announce_commands::*;
use crate::application::commands::handlers::PlaybackController;
use crate::application::commands::playback_commands::{PlayAnnouncementCommand, PlayOutcome};
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioFetcherPort, AudioStoragePort, TtsEnginePort};
use crate::application::queries::handlers::GetOccupancyHandler;
use crate::application::queries::GetOccupancyQuery;
use crate::domain::announcement::{AnnouncementRequest, SpeechOptions};

pub struct AnnounceHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    audio_fetcher: Arc<dyn AudioFetcherPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
    playback: Arc<PlaybackController>,
    occupancy: GetOccupancyHandler,
    speech_options: SpeechOptions,
}

impl AnnounceHandler {
    pub fn new(
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_fetcher: Arc<dyn AudioFetcherPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        playback: Arc<PlaybackController>,
        speech_options: SpeechOptions,
    ) -> Self {
        Self {
            tts_engine,
            audio_fetcher,
            audio_storage,
            occupancy: GetOccupancyHandler::new(playback.clone()),
            playback,
            speech_options,
        }
    }

    pub async fn handle(&self, cmd: AnnounceCommand) -> Result<AnnounceResponse, ApplicationError> {
        let channel = cmd
            .event
            .target_channel()
            .ok_or_else(|| ApplicationError::validation("Voice change event has no target channel"))?;

        let request = AnnouncementRequest::for_event(&cmd.event, self.speech_options.clone());

        tracing::info!(
            member_id = %cmd.event.member_id,
            channel = %channel,
            "{}",
            request.text
        );

        // 控制器会再次检查；这里提前返回只是为了省掉下载
        if self.occupancy.handle(GetOccupancyQuery).is_occupied() {
            tracing::info!(channel = %channel, "Voice channel occupied, announcement dropped");
            return Ok(AnnounceResponse {
                sentence: request.text,
                channel,
                outcome: PlayOutcome::Dropped,
            });
        }

        let url = self.tts_engine.audio_url(&request)?;

        self.audio_storage.prepare().await?;
        let artifact = self.audio_storage.allocate();
        let partial = self.audio_storage.partial_path(&artifact);

        let staged = async {
            let bytes = self.audio_fetcher.download(&url, &partial).await?;
            self.audio_storage.commit(&artifact).await?;
            Ok::<u64, ApplicationError>(bytes)
        }
        .await;

        let bytes = match staged {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "Failed to stage announcement audio");
                if let Err(discard_err) = self.audio_storage.discard(&artifact).await {
                    tracing::warn!(error = %discard_err, "Failed to delete partial audio");
                }
                return Err(e);
            }
        };

        tracing::debug!(
            artifact = %artifact.id(),
            size = bytes,
            "Announcement audio staged"
        );

        let outcome = self
            .playback
            .play(PlayAnnouncementCommand { channel, artifact })
            .await?;

        Ok(AnnounceResponse {
            sentence: request.text,
            channel,
            outcome,
        })
    }
}
