//! Command Handlers 实现

mod delete_handlers;
mod generate_handlers;

pub use delete_handlers::DeleteAudioHandler;
pub use generate_handlers::{
    GenerateAudioHandler, GenerateTestAudioHandler, DEFAULT_MODEL, DEFAULT_SPEED,
    DEFAULT_TEST_MESSAGE, TEST_CHAPTER_LABEL,
};
