//! 测试用的端口实现

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, Notify};

use crate::application::ports::{
    AudioFetcherPort, AudioStorageError, AudioStoragePort, FetchError, IdleNotifier, IdleSignal,
    TtsEnginePort, TtsError, VoiceGatewayError, VoiceGatewayPort,
};
use crate::domain::announcement::AnnouncementRequest;
use crate::domain::playback::AudioArtifact;
use crate::domain::presence::{ChannelRef, GuildId};

/// 记录所有调用的语音网关
#[derive(Default)]
pub struct FakeVoiceGateway {
    pub connects: Mutex<Vec<ChannelRef>>,
    pub plays: Mutex<Vec<(ChannelRef, PathBuf)>>,
    pub disconnects: Mutex<Vec<GuildId>>,
    pub notifiers: Mutex<Vec<IdleNotifier>>,
    /// 设置后 connect 会等待通知再返回
    pub connect_gate: Mutex<Option<Arc<Notify>>>,
    pub fail_connect: AtomicBool,
    pub fail_play: AtomicBool,
    pub fail_disconnect: AtomicBool,
}

impl FakeVoiceGateway {
    pub fn connect_count(&self) -> usize {
        self.connects.lock().unwrap().len()
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.lock().unwrap().len()
    }

    pub fn last_notifier(&self) -> Option<IdleNotifier> {
        self.notifiers.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl VoiceGatewayPort for FakeVoiceGateway {
    async fn connect(&self, channel: &ChannelRef) -> Result<(), VoiceGatewayError> {
        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(VoiceGatewayError::Connect {
                channel: *channel,
                reason: "gateway unavailable".to_string(),
            });
        }
        self.connects.lock().unwrap().push(*channel);
        let gate = self.connect_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(())
    }

    async fn play(
        &self,
        channel: &ChannelRef,
        audio_path: &Path,
        notifier: IdleNotifier,
    ) -> Result<(), VoiceGatewayError> {
        if self.fail_play.load(Ordering::SeqCst) {
            return Err(VoiceGatewayError::Play("decoder failure".to_string()));
        }
        self.plays
            .lock()
            .unwrap()
            .push((*channel, audio_path.to_path_buf()));
        self.notifiers.lock().unwrap().push(notifier);
        Ok(())
    }

    async fn disconnect(&self, guild_id: GuildId) -> Result<(), VoiceGatewayError> {
        self.disconnects.lock().unwrap().push(guild_id);
        if self.fail_disconnect.load(Ordering::SeqCst) {
            return Err(VoiceGatewayError::Disconnect("already gone".to_string()));
        }
        Ok(())
    }
}

/// 删除总是失败的暂存区（包装真实实现）
pub struct FailingDiscardStorage<S> {
    pub inner: S,
}

#[async_trait]
impl<S: AudioStoragePort> AudioStoragePort for FailingDiscardStorage<S> {
    fn allocate(&self) -> AudioArtifact {
        self.inner.allocate()
    }

    fn partial_path(&self, artifact: &AudioArtifact) -> PathBuf {
        self.inner.partial_path(artifact)
    }

    async fn prepare(&self) -> Result<(), AudioStorageError> {
        self.inner.prepare().await
    }

    async fn commit(&self, artifact: &AudioArtifact) -> Result<(), AudioStorageError> {
        self.inner.commit(artifact).await
    }

    async fn exists(&self, artifact: &AudioArtifact) -> bool {
        self.inner.exists(artifact).await
    }

    async fn discard(&self, _artifact: &AudioArtifact) -> Result<bool, AudioStorageError> {
        Err(AudioStorageError::IoError("permission denied".to_string()))
    }
}

/// 返回固定地址的 TTS 引擎，并记录收到的文本
#[derive(Default)]
pub struct FakeTtsEngine {
    pub texts: Mutex<Vec<String>>,
}

impl TtsEnginePort for FakeTtsEngine {
    fn audio_url(&self, request: &AnnouncementRequest) -> Result<String, TtsError> {
        self.texts.lock().unwrap().push(request.text.clone());
        Ok(format!("http://tts.test/{}", self.texts.lock().unwrap().len()))
    }
}

/// 把固定字节写入目标路径的下载器
#[derive(Default)]
pub struct FakeAudioFetcher {
    pub urls: Mutex<Vec<String>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl AudioFetcherPort for FakeAudioFetcher {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        self.urls.lock().unwrap().push(url.to_string());
        if self.fail.load(Ordering::SeqCst) {
            // 模拟写了一半后断开
            tokio::fs::write(dest, b"ID3")
                .await
                .map_err(|e| FetchError::Io(e.to_string()))?;
            return Err(FetchError::Network("connection reset".to_string()));
        }
        let data = b"ID3 fake mp3 data";
        tokio::fs::write(dest, data)
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;
        Ok(data.len() as u64)
    }
}

pub fn idle_channel() -> (mpsc::Sender<IdleSignal>, mpsc::Receiver<IdleSignal>) {
    mpsc::channel(8)
}
