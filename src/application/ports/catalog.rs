//! Audio Catalog Port - 音频清单存储抽象
//!
//! 清单是系统唯一的持久状态：一个有序的 AudioEntry 集合
//! 底层存储只允许目录组件本身写入

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 清单存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 一条已生成音频的记录
///
/// `audio_url` 在整个清单中唯一；记录创建后不可变，
/// 更新以 remove + 重新 append 表达
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioEntry {
    /// 音频访问路径（唯一键），形如 /audio/<file>.mp3
    pub audio_url: String,
    /// 来源章节文件名；试听消息使用保留标签
    pub chapter: String,
    /// 音色标识
    pub voice: String,
    /// 模型标识
    pub model: String,
    /// 创建时间（Unix 毫秒），需要按新旧排序的消费方自行倒序
    pub created_at: i64,
}

/// Audio Catalog Port
#[async_trait]
pub trait AudioCatalogPort: Send + Sync {
    /// 幂等初始化：目录与空清单不存在时创建，已存在时绝不覆盖
    async fn ensure_initialized(&self) -> Result<(), StoreError>;

    /// 追加一条记录到清单末尾
    async fn append(&self, entry: AudioEntry) -> Result<(), StoreError>;

    /// 按存储顺序返回全部记录；清单缺失或损坏时视为空
    async fn list(&self) -> Result<Vec<AudioEntry>, StoreError>;

    /// 删除所有 `audio_url` 匹配的记录；无匹配时为无操作而非错误
    async fn remove(&self, audio_url: &str) -> Result<(), StoreError>;
}
