//! Chapter Query Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::TextExtractorPort;
use crate::application::queries::{GetChapterText, ListChapters};

/// 章节文档的扩展名（大小写不敏感匹配）
const CHAPTER_EXTENSION: &str = ".docx";

/// ListChapters Handler - 列出章节目录下的文档文件名
pub struct ListChaptersHandler {
    chapters_dir: PathBuf,
}

impl ListChaptersHandler {
    pub fn new(chapters_dir: PathBuf) -> Self {
        Self { chapters_dir }
    }

    /// 目录缺失时返回空列表而不是错误；结果按名称排序保证稳定
    pub async fn handle(&self, _query: ListChapters) -> Result<Vec<String>, ApplicationError> {
        let mut read_dir = match tokio::fs::read_dir(&self.chapters_dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ApplicationError::internal(format!(
                    "Failed to list chapters: {}",
                    e
                )))
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| ApplicationError::internal(format!("Failed to list chapters: {}", e)))?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.to_lowercase().ends_with(CHAPTER_EXTENSION) {
                names.push(name);
            }
        }
        names.sort();

        Ok(names)
    }
}

/// GetChapterText Handler - 读取章节纯文本
pub struct GetChapterTextHandler {
    chapters_dir: PathBuf,
    extractor: Arc<dyn TextExtractorPort>,
}

impl GetChapterTextHandler {
    pub fn new(chapters_dir: PathBuf, extractor: Arc<dyn TextExtractorPort>) -> Self {
        Self {
            chapters_dir,
            extractor,
        }
    }

    pub async fn handle(&self, query: GetChapterText) -> Result<String, ApplicationError> {
        let chapter_path = self.chapters_dir.join(&query.name);
        if !chapter_path.exists() {
            return Err(ApplicationError::not_found("Chapter file not found"));
        }

        let text = self.extractor.extract_text(&chapter_path).await?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        let handler = ListChaptersHandler::new(dir.path().join("does-not-exist"));

        let names = handler.handle(ListChapters).await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_lists_only_docx_files_sorted() {
        let dir = tempdir().unwrap();
        for name in ["b.docx", "a.DOCX", "notes.txt", "c.docx.bak"] {
            tokio::fs::write(dir.path().join(name), b"x").await.unwrap();
        }

        let handler = ListChaptersHandler::new(dir.path().to_path_buf());
        let names = handler.handle(ListChapters).await.unwrap();

        // 大小写不敏感的后缀过滤，其余文件忽略
        assert_eq!(names, vec!["a.DOCX", "b.docx"]);
    }

    #[tokio::test]
    async fn test_missing_chapter_is_not_found() {
        use crate::infrastructure::adapters::DocxTextExtractor;

        let dir = tempdir().unwrap();
        let handler = GetChapterTextHandler::new(
            dir.path().to_path_buf(),
            Arc::new(DocxTextExtractor::new()),
        );

        let result = handler
            .handle(GetChapterText {
                name: "missing.docx".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
