//! HTTP Handlers

mod audios;
mod chapters;
mod generate;
mod ping;

pub use audios::*;
pub use chapters::*;
pub use generate::*;
pub use ping::*;

use super::error::ApiError;

/// 未知 /api 路径统一返回 JSON 404，避免客户端收到 HTML 错误页
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound("API route not found".to_string())
}
