//! Extractor Adapter - 文档文本提取实现

mod docx_extractor;

pub use docx_extractor::DocxTextExtractor;
