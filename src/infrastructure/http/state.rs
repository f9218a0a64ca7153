//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    // Command handlers
    DeleteAudioHandler, GenerateAudioHandler, GenerateTestAudioHandler,
    // Query handlers
    GetChapterTextHandler, ListAudiosHandler, ListChaptersHandler,
    // Ports
    AudioCatalogPort, SpeechAssembler, SpeechClientPort, TextExtractorPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub generate_handler: GenerateAudioHandler,
    pub generate_test_handler: GenerateTestAudioHandler,
    pub delete_audio_handler: DeleteAudioHandler,

    // ========== Query Handlers ==========
    pub list_chapters_handler: ListChaptersHandler,
    pub get_chapter_text_handler: GetChapterTextHandler,
    pub list_audios_handler: ListAudiosHandler,
}

impl AppState {
    /// 创建应用状态
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        chapters_dir: PathBuf,
        public_dir: PathBuf,
        audio_dir: PathBuf,
        extractor: Arc<dyn TextExtractorPort>,
        speech_client: Arc<dyn SpeechClientPort>,
        catalog: Arc<dyn AudioCatalogPort>,
        chunk_limit: usize,
    ) -> Self {
        let assembler = Arc::new(SpeechAssembler::new(speech_client, chunk_limit));

        Self {
            // Command handlers
            generate_handler: GenerateAudioHandler::new(
                chapters_dir.clone(),
                audio_dir.clone(),
                extractor.clone(),
                assembler.clone(),
                catalog.clone(),
            ),
            generate_test_handler: GenerateTestAudioHandler::new(
                audio_dir.clone(),
                assembler,
                catalog.clone(),
            ),
            delete_audio_handler: DeleteAudioHandler::new(public_dir, audio_dir, catalog.clone()),

            // Query handlers
            list_chapters_handler: ListChaptersHandler::new(chapters_dir.clone()),
            get_chapter_text_handler: GetChapterTextHandler::new(chapters_dir, extractor),
            list_audios_handler: ListAudiosHandler::new(catalog),
        }
    }
}
