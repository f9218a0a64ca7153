//! Speech Client Port - 语音合成服务抽象
//!
//! 定义外部文本转语音服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 语音合成请求（对应一个文本块）
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要合成的文本，长度由调用方保证不超过服务上限
    pub text: String,
    /// 音色标识
    pub voice: String,
    /// 模型标识
    pub model: String,
    /// 语速
    pub speed: f32,
}

/// Speech Client Port
///
/// 外部语音合成服务的抽象接口，每次调用合成一个文本块；
/// 不做重试，失败原样上抛
#[async_trait]
pub trait SpeechClientPort: Send + Sync {
    /// 合成一个文本块，返回编码后的 MP3 音频字节
    async fn synthesize_chunk(&self, request: SpeechRequest) -> Result<Vec<u8>, SpeechError>;
}
