//! Fake Speech Client - 用于测试的合成客户端
//!
//! 不访问外部服务：按请求参数确定性地生成字节，可注入失败，
//! 并记录收到的文本块供断言调用顺序

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{SpeechClientPort, SpeechError, SpeechRequest};

/// Fake Speech Client
pub struct FakeSpeechClient {
    /// 已收到的文本块（按调用顺序）
    calls: Mutex<Vec<String>>,
    call_count: AtomicUsize,
    /// 前 N 次调用成功，之后全部失败；None 表示永不失败
    fail_after: Option<usize>,
}

impl FakeSpeechClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            fail_after: None,
        }
    }

    /// 前 `n` 次调用成功，之后全部失败
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::new()
        }
    }

    /// 某个请求对应的确定性音频字节，测试据此断言拼接结果
    pub fn audio_for(text: &str, voice: &str, model: &str) -> Vec<u8> {
        format!("[{}|{}|{}]", voice, model, text).into_bytes()
    }

    /// 已收到的文本块（按调用顺序）
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl Default for FakeSpeechClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechClientPort for FakeSpeechClient {
    async fn synthesize_chunk(&self, request: SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let call_index = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(request.text.clone());

        if let Some(allowed) = self.fail_after {
            if call_index >= allowed {
                return Err(SpeechError::ServiceError("injected failure".to_string()));
            }
        }

        Ok(Self::audio_for(&request.text, &request.voice, &request.model))
    }
}
