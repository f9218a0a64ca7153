//! Text Extractor Port - 文档文本提取抽象
//!
//! 把文档文件转为纯文本的外部协作方接口

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 文本提取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Unreadable document: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Text Extractor Port
#[async_trait]
pub trait TextExtractorPort: Send + Sync {
    /// 提取文档的纯文本内容
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}
