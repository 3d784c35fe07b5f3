//! Google TTS Client - 构造 Google Translate TTS 音频地址
//!
//! 实现 TtsEnginePort trait，只生成 URL，不发请求
//!
//! 外部 TTS API:
//! GET {host}/translate_tts?ie=UTF-8&q=...&tl=en&total=1&idx=0&textlen=..&client=tw-ob&prev=input&ttsspeed=1
//! Response: audio/mpeg binary

use reqwest::Url;

use crate::application::ports::{TtsEnginePort, TtsError};
use crate::domain::announcement::AnnouncementRequest;

/// 单次请求允许的最大文本长度（字符）
pub const MAX_TEXT_LEN: usize = 200;

const NORMAL_SPEED: &str = "1";
const SLOW_SPEED: &str = "0.24";

/// Google TTS 客户端
#[derive(Debug, Clone, Default)]
pub struct GoogleTtsClient;

impl GoogleTtsClient {
    pub fn new() -> Self {
        Self
    }

    fn endpoint(host: &str) -> Result<Url, TtsError> {
        let url = Url::parse(&format!("{}/translate_tts", host.trim_end_matches('/')))
            .map_err(|e| TtsError::InvalidHost(format!("{}: {}", host, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(TtsError::InvalidHost(format!(
                "{}: unsupported scheme {}",
                host, other
            ))),
        }
    }
}

impl TtsEnginePort for GoogleTtsClient {
    fn audio_url(&self, request: &AnnouncementRequest) -> Result<String, TtsError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TtsError::EmptyText);
        }

        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(TtsError::TextTooLong {
                len,
                max: MAX_TEXT_LEN,
            });
        }

        let options = &request.options;
        let textlen = len.to_string();
        let speed = if options.slow { SLOW_SPEED } else { NORMAL_SPEED };

        let mut url = Self::endpoint(&options.host)?;
        url.query_pairs_mut()
            .append_pair("ie", "UTF-8")
            .append_pair("q", text)
            .append_pair("tl", &options.lang)
            .append_pair("total", "1")
            .append_pair("idx", "0")
            .append_pair("textlen", &textlen)
            .append_pair("client", "tw-ob")
            .append_pair("prev", "input")
            .append_pair("ttsspeed", speed);

        tracing::debug!(url = %url, "TTS audio url built");

        Ok(url.into())
    }
}
