//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechClient、TextExtractor、AudioCatalog）
//! - assembler: 按块合成并拼接音频
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod assembler;
pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use assembler::{SpeechAssembler, SpeechParams};

pub use commands::{
    // Commands
    DeleteAudio,
    GenerateAudio,
    GenerateTestAudio,
    // Handlers
    handlers::{
        DeleteAudioHandler, GenerateAudioHandler, GenerateTestAudioHandler, DEFAULT_MODEL,
        DEFAULT_SPEED, DEFAULT_TEST_MESSAGE, TEST_CHAPTER_LABEL,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Catalog
    AudioCatalogPort,
    AudioEntry,
    StoreError,
    // Speech client
    SpeechClientPort,
    SpeechError,
    SpeechRequest,
    // Text extractor
    ExtractError,
    TextExtractorPort,
};

pub use queries::{
    // Queries
    GetChapterText,
    ListAudios,
    ListChapters,
    // Handlers
    handlers::{GetChapterTextHandler, ListAudiosHandler, ListChaptersHandler},
};
