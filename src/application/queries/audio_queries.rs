//! Audio Queries

/// 按存储顺序列出清单全部记录
#[derive(Debug, Clone)]
pub struct ListAudios;
