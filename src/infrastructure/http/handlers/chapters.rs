//! Chapter HTTP Handlers

use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use crate::application::{GetChapterText, ListChapters};
use crate::infrastructure::http::dto::{ChapterTextQuery, ChapterTextResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出章节目录下的全部文档文件名
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.list_chapters_handler.handle(ListChapters).await?;
    Ok(Json(names))
}

/// 读取指定章节的纯文本
pub async fn get_chapter_text(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChapterTextQuery>,
) -> Result<Json<ChapterTextResponse>, ApiError> {
    let name = query
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("name is required".to_string()))?;

    let text = state
        .get_chapter_text_handler
        .handle(GetChapterText { name })
        .await?;

    Ok(Json(ChapterTextResponse { text }))
}
