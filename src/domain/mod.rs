//! Domain Layer - 领域层
//!
//! 纯逻辑：文本分块器

mod chunker;

pub use chunker::{chunk_text, DEFAULT_CHUNK_LIMIT};
