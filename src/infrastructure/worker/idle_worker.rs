//! Idle Worker - 播放结束后的清理任务

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::{IdleOutcome, IdleSignal, PlaybackController};

/// 空闲 Worker
///
/// 从队列消费播放引擎发出的空闲信号，驱动 PlaybackController 清理
pub struct IdleWorker {
    queue_receiver: mpsc::Receiver<IdleSignal>,
    controller: Arc<PlaybackController>,
}

impl IdleWorker {
    pub fn new(
        queue_receiver: mpsc::Receiver<IdleSignal>,
        controller: Arc<PlaybackController>,
    ) -> Self {
        Self {
            queue_receiver,
            controller,
        }
    }

    /// 启动 Worker，收到关闭信号后退出
    ///
    /// PlaybackController 自己持有发送端，队列不会因发送端全部释放而关闭，
    /// 所以必须由调用方提供关闭信号。
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: std::future::Future<Output = ()> + Send,
    {
        tracing::info!("IdleWorker started");
        tokio::pin!(shutdown);

        loop {
            let signal = tokio::select! {
                _ = &mut shutdown => break,
                signal = self.queue_receiver.recv() => match signal {
                    Some(signal) => signal,
                    None => break,
                },
            };

            match self.controller.handle_idle(signal).await {
                Ok(IdleOutcome::Cleaned(report)) => {
                    if !report.artifact_removed || !report.disconnected {
                        tracing::warn!(
                            playback_id = %report.playback_id,
                            artifact_removed = report.artifact_removed,
                            disconnected = report.disconnected,
                            "Cleanup finished with errors"
                        );
                    }
                }
                Ok(IdleOutcome::Stale) => {}
                Err(e) => {
                    tracing::error!(
                        playback_id = %signal.playback_id,
                        error = %e,
                        "Failed to handle idle signal"
                    );
                }
            }
        }

        tracing::info!("IdleWorker stopped");
    }
}
