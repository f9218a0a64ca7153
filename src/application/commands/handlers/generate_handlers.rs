//! Generate Command Handlers - 音频生成
//!
//! 两条生成路径共用同一套合成与落盘逻辑：
//! 章节生成先经文本提取，试听生成直接用给定消息

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::assembler::{SpeechAssembler, SpeechParams};
use crate::application::commands::{GenerateAudio, GenerateTestAudio};
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioCatalogPort, AudioEntry, TextExtractorPort};

/// 未指定模型时的默认值
pub const DEFAULT_MODEL: &str = "tts-1";

/// 未指定语速时的默认值
pub const DEFAULT_SPEED: f32 = 1.0;

/// 试听记录在清单中使用的保留章节标签，与任何真实章节文件名可区分
pub const TEST_CHAPTER_LABEL: &str = "Test Message";

/// 未提供试听消息时使用的固定占位句
pub const DEFAULT_TEST_MESSAGE: &str = "This is a test for Nick";

/// 文件名中的来源段：小写化，非 [a-z0-9-_] 的连续字符折叠为单个下划线
fn sanitize_base_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_replaced = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            out.push(ch.to_ascii_lowercase());
            last_was_replaced = false;
        } else if !last_was_replaced {
            out.push('_');
            last_was_replaced = true;
        }
    }
    out
}

/// 落盘并登记一条生成结果
///
/// 文件名由净化后的来源名、音色、模型与创建时间组成，避免碰撞；
/// 写文件失败或清单追加失败都让本次请求失败（不留半成品记录）
async fn persist_audio(
    audio_dir: &Path,
    catalog: &Arc<dyn AudioCatalogPort>,
    base_name: &str,
    chapter: &str,
    voice: &str,
    model: &str,
    audio: Vec<u8>,
) -> Result<AudioEntry, ApplicationError> {
    catalog.ensure_initialized().await?;

    let created_at = Utc::now().timestamp_millis();
    let file_name = format!("{}_{}_{}_{}.mp3", base_name, voice, model, created_at);
    let output_path = audio_dir.join(&file_name);

    tokio::fs::write(&output_path, &audio)
        .await
        .map_err(|e| ApplicationError::Store(format!("Failed to write audio file: {}", e)))?;

    let entry = AudioEntry {
        audio_url: format!("/audio/{}", file_name),
        chapter: chapter.to_string(),
        voice: voice.to_string(),
        model: model.to_string(),
        created_at,
    };
    catalog.append(entry.clone()).await?;

    Ok(entry)
}

// ============================================================================
// GenerateAudio
// ============================================================================

/// GenerateAudio Handler - 为一章文档生成音频
pub struct GenerateAudioHandler {
    chapters_dir: PathBuf,
    audio_dir: PathBuf,
    extractor: Arc<dyn TextExtractorPort>,
    assembler: Arc<SpeechAssembler>,
    catalog: Arc<dyn AudioCatalogPort>,
}

impl GenerateAudioHandler {
    pub fn new(
        chapters_dir: PathBuf,
        audio_dir: PathBuf,
        extractor: Arc<dyn TextExtractorPort>,
        assembler: Arc<SpeechAssembler>,
        catalog: Arc<dyn AudioCatalogPort>,
    ) -> Self {
        Self {
            chapters_dir,
            audio_dir,
            extractor,
            assembler,
            catalog,
        }
    }

    pub async fn handle(&self, command: GenerateAudio) -> Result<AudioEntry, ApplicationError> {
        let chapter_path = self.chapters_dir.join(&command.chapter_name);
        if !chapter_path.exists() {
            return Err(ApplicationError::not_found("Chapter file not found"));
        }

        let text = self.extractor.extract_text(&chapter_path).await?;
        if text.trim().is_empty() {
            return Err(ApplicationError::validation("Chapter has no readable text"));
        }

        let model = command.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let params = SpeechParams {
            voice: command.voice.clone(),
            model: model.clone(),
            speed: command.speed.unwrap_or(DEFAULT_SPEED),
        };
        let audio = self.assembler.synthesize(&text, &params).await?;

        let base_name = Path::new(&command.chapter_name)
            .file_stem()
            .map(|stem| sanitize_base_name(&stem.to_string_lossy()))
            .unwrap_or_else(|| "chapter".to_string());

        let entry = persist_audio(
            &self.audio_dir,
            &self.catalog,
            &base_name,
            &command.chapter_name,
            &command.voice,
            &model,
            audio,
        )
        .await?;

        tracing::info!(
            chapter = %entry.chapter,
            voice = %entry.voice,
            model = %entry.model,
            audio_url = %entry.audio_url,
            "Chapter audio generated"
        );

        Ok(entry)
    }
}

// ============================================================================
// GenerateTestAudio
// ============================================================================

/// GenerateTestAudio Handler - 生成试听音频
pub struct GenerateTestAudioHandler {
    audio_dir: PathBuf,
    assembler: Arc<SpeechAssembler>,
    catalog: Arc<dyn AudioCatalogPort>,
}

impl GenerateTestAudioHandler {
    pub fn new(
        audio_dir: PathBuf,
        assembler: Arc<SpeechAssembler>,
        catalog: Arc<dyn AudioCatalogPort>,
    ) -> Self {
        Self {
            audio_dir,
            assembler,
            catalog,
        }
    }

    pub async fn handle(&self, command: GenerateTestAudio) -> Result<AudioEntry, ApplicationError> {
        let message = command
            .message
            .unwrap_or_else(|| DEFAULT_TEST_MESSAGE.to_string());
        if message.trim().is_empty() {
            return Err(ApplicationError::validation("Message has no readable text"));
        }

        let model = command.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let params = SpeechParams {
            voice: command.voice.clone(),
            model: model.clone(),
            speed: command.speed.unwrap_or(DEFAULT_SPEED),
        };
        let audio = self.assembler.synthesize(&message, &params).await?;

        let entry = persist_audio(
            &self.audio_dir,
            &self.catalog,
            "test",
            TEST_CHAPTER_LABEL,
            &command.voice,
            &model,
            audio,
        )
        .await?;

        tracing::info!(
            voice = %entry.voice,
            model = %entry.model,
            audio_url = %entry.audio_url,
            "Test audio generated"
        );

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeSpeechClient;
    use crate::infrastructure::persistence::manifest::JsonManifestStore;
    use tempfile::tempdir;

    fn test_handler(
        audio_dir: &Path,
    ) -> (GenerateTestAudioHandler, Arc<FakeSpeechClient>, Arc<JsonManifestStore>) {
        let client = Arc::new(FakeSpeechClient::new());
        let assembler = Arc::new(SpeechAssembler::new(client.clone(), 3900));
        let catalog = Arc::new(JsonManifestStore::new(audio_dir));
        let handler =
            GenerateTestAudioHandler::new(audio_dir.to_path_buf(), assembler, catalog.clone());
        (handler, client, catalog)
    }

    #[test]
    fn test_sanitize_base_name() {
        assert_eq!(sanitize_base_name("Chapter One"), "chapter_one");
        assert_eq!(sanitize_base_name("ch1"), "ch1");
        assert_eq!(sanitize_base_name("a  &&  b-c_d"), "a_b-c_d");
        assert_eq!(sanitize_base_name("第1章"), "_1_");
    }

    #[tokio::test]
    async fn test_generate_test_uses_defaults_and_sentinel() {
        let dir = tempdir().unwrap();
        let (handler, client, catalog) = test_handler(dir.path());

        let entry = handler
            .handle(GenerateTestAudio {
                voice: "alloy".to_string(),
                model: None,
                speed: None,
                message: None,
            })
            .await
            .unwrap();

        // 未给模型与消息：模型取默认值，合成文本为固定占位句
        assert_eq!(entry.model, DEFAULT_MODEL);
        assert_eq!(entry.chapter, TEST_CHAPTER_LABEL);
        assert_eq!(client.calls(), vec![DEFAULT_TEST_MESSAGE]);

        // 音频文件已落盘，清单中有这条记录
        let file_name = entry.audio_url.trim_start_matches("/audio/");
        assert!(dir.path().join(file_name).exists());
        assert!(catalog.list().await.unwrap().contains(&entry));
    }

    #[tokio::test]
    async fn test_generate_test_rejects_blank_message() {
        let dir = tempdir().unwrap();
        let (handler, client, _) = test_handler(dir.path());

        let result = handler
            .handle(GenerateTestAudio {
                voice: "alloy".to_string(),
                model: None,
                speed: None,
                message: Some("   ".to_string()),
            })
            .await;

        // 校验失败发生在任何外部调用之前
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_synthesis_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let client = Arc::new(FakeSpeechClient::failing_after(0));
        let assembler = Arc::new(SpeechAssembler::new(client, 3900));
        let catalog = Arc::new(JsonManifestStore::new(dir.path()));
        let handler =
            GenerateTestAudioHandler::new(dir.path().to_path_buf(), assembler, catalog.clone());

        let result = handler
            .handle(GenerateTestAudio {
                voice: "alloy".to_string(),
                model: None,
                speed: None,
                message: None,
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::Upstream(_))));
        // 失败时不写文件、不登记清单
        assert!(catalog.list().await.unwrap().is_empty());
        assert!(!dir.path().join("manifest.json").exists());
    }
}
