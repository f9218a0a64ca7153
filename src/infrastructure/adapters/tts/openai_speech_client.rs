//! OpenAI Speech Client - 调用 OpenAI 语音合成接口
//!
//! 实现 SpeechClientPort trait，通过 HTTP 调用外部合成服务
//!
//! 外部接口:
//! POST {base_url}/v1/audio/speech
//! Request: {"model": "...", "input": "...", "voice": "...", "response_format": "mp3", "speed": 1.0}  (JSON, Bearer 认证)
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechClientPort, SpeechError, SpeechRequest};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechHttpRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
    speed: f32,
}

/// OpenAI 语音客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiSpeechClientConfig {
    /// 合成服务基础 URL
    pub base_url: String,
    /// API 凭证
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl OpenAiSpeechClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 120,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI 语音客户端
///
/// 每次调用合成一个文本块；不重试，失败原样上抛给装配器
pub struct OpenAiSpeechClient {
    client: Client,
    config: OpenAiSpeechClientConfig,
}

impl OpenAiSpeechClient {
    /// 创建新的语音客户端
    pub fn new(config: OpenAiSpeechClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成接口 URL
    fn speech_url(&self) -> String {
        format!("{}/v1/audio/speech", self.config.base_url)
    }
}

#[async_trait]
impl SpeechClientPort for OpenAiSpeechClient {
    async fn synthesize_chunk(&self, request: SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let body = SpeechHttpRequest {
            model: &request.model,
            input: &request.text,
            voice: &request.voice,
            response_format: "mp3",
            speed: request.speed,
        };

        tracing::debug!(
            url = %self.speech_url(),
            text_len = request.text.chars().count(),
            voice = %request.voice,
            model = %request.model,
            "Sending speech synthesis request"
        );

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::NetworkError(format!("Cannot connect to speech service: {}", e))
                } else {
                    SpeechError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpeechError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::debug!(audio_size = audio.len(), "Speech synthesis completed");

        Ok(audio)
    }
}
