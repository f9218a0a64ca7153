//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioCatalogPort, AudioEntry};
use crate::application::queries::ListAudios;

/// ListAudios Handler - 清单全量列表
pub struct ListAudiosHandler {
    catalog: Arc<dyn AudioCatalogPort>,
}

impl ListAudiosHandler {
    pub fn new(catalog: Arc<dyn AudioCatalogPort>) -> Self {
        Self { catalog }
    }

    /// 返回存储顺序（磁盘插入顺序）；需要按新旧排序的消费方自行处理
    pub async fn handle(&self, _query: ListAudios) -> Result<Vec<AudioEntry>, ApplicationError> {
        self.catalog.ensure_initialized().await?;
        let entries = self.catalog.list().await?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::manifest::JsonManifestStore;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_lists_entries_in_storage_order() {
        let dir = tempdir().unwrap();
        let catalog = Arc::new(JsonManifestStore::new(dir.path()));

        for (i, name) in ["first", "second", "third"].iter().enumerate() {
            catalog
                .append(AudioEntry {
                    audio_url: format!("/audio/{}.mp3", name),
                    chapter: "ch1.docx".to_string(),
                    voice: "alloy".to_string(),
                    model: "tts-1".to_string(),
                    created_at: i as i64,
                })
                .await
                .unwrap();
        }

        let handler = ListAudiosHandler::new(catalog);
        let entries = handler.handle(ListAudios).await.unwrap();

        let urls: Vec<&str> = entries.iter().map(|e| e.audio_url.as_str()).collect();
        assert_eq!(urls, vec!["/audio/first.mp3", "/audio/second.mp3", "/audio/third.mp3"]);
    }

    #[tokio::test]
    async fn test_initializes_store_on_first_listing() {
        let dir = tempdir().unwrap();
        let audio_dir = dir.path().join("audio");
        let catalog = Arc::new(JsonManifestStore::new(&audio_dir));

        let handler = ListAudiosHandler::new(catalog);
        let entries = handler.handle(ListAudios).await.unwrap();

        assert!(entries.is_empty());
        assert!(audio_dir.join("manifest.json").exists());
    }
}
