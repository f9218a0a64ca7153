//! JSON Manifest Store - 音频清单的 JSON 文件存储实现
//!
//! 实现 AudioCatalogPort trait
//!
//! 整个清单是一个 JSON 数组文件，每次变更整读整写（无增量追加格式）。
//! 写入方用进程内互斥锁串行化，避免并发读改写互相覆盖；
//! 读取不加锁，清单缺失或损坏时降级为空清单而不是报错

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::application::ports::{AudioCatalogPort, AudioEntry, StoreError};

/// 清单文件名
const MANIFEST_FILE_NAME: &str = "manifest.json";

/// JSON 清单存储
pub struct JsonManifestStore {
    /// 清单文件路径（音频目录下的 manifest.json）
    manifest_path: PathBuf,
    /// 写入串行化锁
    write_lock: Mutex<()>,
}

impl JsonManifestStore {
    pub fn new(audio_dir: impl AsRef<Path>) -> Self {
        Self {
            manifest_path: audio_dir.as_ref().join(MANIFEST_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// 读取当前清单；文件缺失或无法解析时视为空清单
    async fn read_entries(&self) -> Vec<AudioEntry> {
        match fs::read(&self.manifest_path).await {
            Ok(raw) => serde_json::from_slice(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %self.manifest_path.display(),
                    error = %e,
                    "Manifest unparsable, treating as empty"
                );
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    /// 整体重写清单文件
    async fn write_entries(&self, entries: &[AudioEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        fs::write(&self.manifest_path, json)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl AudioCatalogPort for JsonManifestStore {
    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.manifest_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::IoError(e.to_string()))?;
        }
        if fs::try_exists(&self.manifest_path).await.unwrap_or(false) {
            return Ok(());
        }
        self.write_entries(&[]).await
    }

    async fn append(&self, entry: AudioEntry) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await;
        entries.push(entry);
        self.write_entries(&entries).await
    }

    async fn list(&self) -> Result<Vec<AudioEntry>, StoreError> {
        Ok(self.read_entries().await)
    }

    async fn remove(&self, audio_url: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await;
        entries.retain(|entry| entry.audio_url != audio_url);
        self.write_entries(&entries).await
    }
}
