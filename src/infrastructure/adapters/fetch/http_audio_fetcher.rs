//! HTTP Audio Fetcher - 流式下载合成音频
//!
//! 实现 AudioFetcherPort trait，响应体原样写入本地文件

use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::Client;
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::io::StreamReader;

use crate::application::ports::{AudioFetcherPort, FetchError};

/// HTTP 下载器配置
#[derive(Debug, Clone)]
pub struct HttpAudioFetcherConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpAudioFetcherConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpAudioFetcherConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 音频下载器
pub struct HttpAudioFetcher {
    client: Client,
}

impl HttpAudioFetcher {
    /// 创建新的下载器
    pub fn new(config: HttpAudioFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

fn map_reqwest_error(e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Network(format!("Cannot connect to TTS service: {}", e))
    } else {
        FetchError::Network(e.to_string())
    }
}

/// 复制过程中的 IO 错误可能来自网络流，也可能来自磁盘
fn map_copy_error(e: io::Error) -> FetchError {
    match e
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<reqwest::Error>())
    {
        Some(network) => map_reqwest_error(network),
        None => FetchError::Io(e.to_string()),
    }
}

#[async_trait]
impl AudioFetcherPort for HttpAudioFetcher {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        tracing::debug!(url = %url, dest = %dest.display(), "Downloading TTS audio");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let stream = response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
        let reader = StreamReader::new(stream);
        tokio::pin!(reader);

        let mut file = File::create(dest)
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;

        let written = tokio::io::copy(&mut reader, &mut file)
            .await
            .map_err(map_copy_error)?;

        file.flush()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;

        tracing::debug!(size = written, "TTS audio downloaded");

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tempfile::tempdir;
    use tokio::net::TcpListener;

    const AUDIO: &[u8] = b"ID3\x03\x00fake mp3 frames";

    async fn serve() -> String {
        let app = Router::new()
            .route("/translate_tts", get(|| async { AUDIO }))
            .route(
                "/broken",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
            );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_config_builder() {
        let config = HttpAudioFetcherConfig::default().with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_download_writes_body_verbatim() {
        let base = serve().await;
        let dir = tempdir().unwrap();
        let dest = dir.path().join("tts-audio.mp3.part");

        let fetcher = HttpAudioFetcher::new(HttpAudioFetcherConfig::default()).unwrap();
        let written = fetcher
            .download(&format!("{}/translate_tts?q=hi", base), &dest)
            .await
            .unwrap();

        assert_eq!(written, AUDIO.len() as u64);
        assert_eq!(tokio::fs::read(&dest).await.unwrap(), AUDIO);
    }

    #[tokio::test]
    async fn test_download_rejects_error_status() {
        let base = serve().await;
        let dir = tempdir().unwrap();
        let dest = dir.path().join("tts-audio.mp3.part");

        let fetcher = HttpAudioFetcher::new(HttpAudioFetcherConfig::default()).unwrap();
        let err = fetcher
            .download(&format!("{}/broken", base), &dest)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status(503)));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_download_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dir = tempdir().unwrap();
        let fetcher = HttpAudioFetcher::new(HttpAudioFetcherConfig::default()).unwrap();
        let err = fetcher
            .download(&format!("http://{}/translate_tts", addr), &dir.path().join("a.part"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
    }
}
