//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，HTTP 层据此映射状态码

use thiserror::Error;

use crate::application::ports::{ExtractError, SpeechError, StoreError};

/// 应用层错误
///
/// 校验错误在任何外部调用之前产生；上游错误不重试、消息原样透传
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求校验失败（缺少必填字段、可提取文本为空等）
    #[error("{0}")]
    Validation(String),

    /// 引用的资源不存在
    #[error("{0}")]
    NotFound(String),

    /// 上游协作方失败（文本提取或语音合成）
    #[error("{0}")]
    Upstream(String),

    /// 清单或音频文件存储失败
    #[error("{0}")]
    Store(String),

    /// 其他内部错误
    #[error("{0}")]
    Internal(String),
}

impl ApplicationError {
    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 创建资源不存在错误
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<ExtractError> for ApplicationError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::NotFound(_) => Self::NotFound("Chapter file not found".to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
