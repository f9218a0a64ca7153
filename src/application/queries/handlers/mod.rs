//! Query Handlers 实现

mod audio_handlers;
mod chapter_handlers;

pub use audio_handlers::ListAudiosHandler;
pub use chapter_handlers::{GetChapterTextHandler, ListChaptersHandler};
