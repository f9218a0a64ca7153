//! Chapter Queries

/// 列出章节目录下的全部文档
#[derive(Debug, Clone)]
pub struct ListChapters;

/// 读取指定章节的纯文本
#[derive(Debug, Clone)]
pub struct GetChapterText {
    /// 章节文件名（含扩展名）
    pub name: String,
}
