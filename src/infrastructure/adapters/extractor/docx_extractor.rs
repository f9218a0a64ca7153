//! Docx Text Extractor - 从 .docx 文档提取纯文本
//!
//! 实现 TextExtractorPort trait
//!
//! .docx 是一个 zip 容器，正文在 word/document.xml：
//! 文本位于 <w:t> 节点，段落（</w:p>）与换行符（<w:br/>）处补换行

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::application::ports::{ExtractError, TextExtractorPort};

/// Docx 文本提取器
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// 同步提取（zip 读取是阻塞 IO，异步入口放入 spawn_blocking）
fn extract_docx_text(path: &Path) -> Result<String, ExtractError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ExtractError::NotFound(path.display().to_string()),
        _ => ExtractError::IoError(e.to_string()),
    })?;

    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| ExtractError::Malformed(format!("Not a docx archive: {}", e)))?;

    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Malformed(format!("Missing word/document.xml: {}", e)))?;

    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::IoError(e.to_string()))?;

    read_document_text(&xml)
}

/// 扫描 document.xml，收集文本节点
fn read_document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
            Ok(Event::Text(t)) if in_text_run => {
                let value = t
                    .unescape()
                    .map_err(|e| ExtractError::Malformed(format!("Invalid document XML: {}", e)))?;
                text.push_str(&value);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractError::Malformed(format!(
                    "Invalid document XML: {}",
                    e
                )))
            }
        }
    }

    Ok(text)
}

#[async_trait]
impl TextExtractorPort for DocxTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || extract_docx_text(&path))
            .await
            .map_err(|e| ExtractError::IoError(format!("Extraction task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    /// 构造一个只含 word/document.xml 的最小 docx
    fn write_docx(path: &Path, document_xml: &str) {
        let file = std::fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }

    const SAMPLE_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Second</w:t></w:r><w:r><w:t xml:space="preserve"> half.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>line two.</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[tokio::test]
    async fn test_extracts_paragraph_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ch1.docx");
        write_docx(&path, SAMPLE_DOCUMENT);

        let extractor = DocxTextExtractor::new();
        let text = extractor.extract_text(&path).await.unwrap();

        // 同段相邻文本连续，段落之间换行
        assert!(text.contains("First paragraph.\n"));
        assert!(text.contains("Second half.\n"));
        assert!(text.contains("Line one\nline two."));
    }

    #[tokio::test]
    async fn test_unescapes_xml_entities() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ch2.docx");
        write_docx(
            &path,
            r#"<w:document xmlns:w="ns"><w:body><w:p><w:r><w:t>Tom &amp; Jerry &lt;3</w:t></w:r></w:p></w:body></w:document>"#,
        );

        let extractor = DocxTextExtractor::new();
        let text = extractor.extract_text(&path).await.unwrap();
        assert!(text.contains("Tom & Jerry <3"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let extractor = DocxTextExtractor::new();

        let result = extractor.extract_text(&dir.path().join("missing.docx")).await;
        assert!(matches!(result, Err(ExtractError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_non_archive_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let extractor = DocxTextExtractor::new();
        let result = extractor.extract_text(&path).await;
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_archive_without_document_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        writer.finish().unwrap();

        let extractor = DocxTextExtractor::new();
        let result = extractor.extract_text(&path).await;
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }
}
