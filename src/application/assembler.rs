//! Speech Assembler - 按块合成并拼接整段音频
//!
//! 将文本切块后逐块调用合成服务，把返回的音频字节依序拼接。
//! 块间严格顺序 await：保持朗读顺序，也把服务限流的影响限制在单个请求内，
//! 代价是总耗时随块数线性增长。任一块失败立即中止整个操作，不写部分结果，不重试。

use std::sync::Arc;

use crate::application::ports::{SpeechClientPort, SpeechError, SpeechRequest};
use crate::domain::chunk_text;

/// 合成参数
#[derive(Debug, Clone)]
pub struct SpeechParams {
    pub voice: String,
    pub model: String,
    pub speed: f32,
}

/// Speech Assembler
///
/// MP3 段在相同参数下可直接首尾拼接，块之间不需要任何边界元数据
pub struct SpeechAssembler {
    client: Arc<dyn SpeechClientPort>,
    /// 单块字符数上限，取值在服务端硬上限之下留出安全余量
    chunk_limit: usize,
}

impl SpeechAssembler {
    pub fn new(client: Arc<dyn SpeechClientPort>, chunk_limit: usize) -> Self {
        Self {
            client,
            chunk_limit,
        }
    }

    /// 合成整段文本，返回拼接后的音频字节
    pub async fn synthesize(
        &self,
        text: &str,
        params: &SpeechParams,
    ) -> Result<Vec<u8>, SpeechError> {
        let chunks = chunk_text(text, self.chunk_limit);

        tracing::debug!(
            chunk_count = chunks.len(),
            voice = %params.voice,
            model = %params.model,
            "Synthesizing text in chunks"
        );

        let mut combined = Vec::new();
        for chunk in chunks {
            let audio = self
                .client
                .synthesize_chunk(SpeechRequest {
                    text: chunk,
                    voice: params.voice.clone(),
                    model: params.model.clone(),
                    speed: params.speed,
                })
                .await?;
            combined.extend_from_slice(&audio);
        }

        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeSpeechClient;

    fn params() -> SpeechParams {
        SpeechParams {
            voice: "alloy".to_string(),
            model: "tts-1".to_string(),
            speed: 1.0,
        }
    }

    #[tokio::test]
    async fn test_concatenates_chunks_in_order() {
        let client = Arc::new(FakeSpeechClient::new());
        let assembler = SpeechAssembler::new(client.clone(), 7);

        let audio = assembler.synthesize("aaa bbb ccc", &params()).await.unwrap();

        // 两个块按阅读顺序拼接
        assert_eq!(client.calls(), vec!["aaa bbb", "ccc"]);
        let expected = [
            FakeSpeechClient::audio_for("aaa bbb", "alloy", "tts-1"),
            FakeSpeechClient::audio_for("ccc", "alloy", "tts-1"),
        ]
        .concat();
        assert_eq!(audio, expected);
    }

    #[tokio::test]
    async fn test_short_text_is_single_call() {
        let client = Arc::new(FakeSpeechClient::new());
        let assembler = SpeechAssembler::new(client.clone(), 100);

        assembler.synthesize("  hello   world ", &params()).await.unwrap();

        // 归一化后的文本整体作为一个块
        assert_eq!(client.calls(), vec!["hello world"]);
    }

    #[tokio::test]
    async fn test_chunk_failure_aborts_whole_operation() {
        // 第二块失败：整个合成失败，后续块不再调用
        let client = Arc::new(FakeSpeechClient::failing_after(1));
        let assembler = SpeechAssembler::new(client.clone(), 5);

        let result = assembler.synthesize("aaa bbb ccc", &params()).await;

        assert!(result.is_err());
        assert_eq!(client.calls().len(), 2);
    }
}
