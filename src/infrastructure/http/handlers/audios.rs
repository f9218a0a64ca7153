//! Audio HTTP Handlers

use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use crate::application::{AudioEntry, DeleteAudio, ListAudios};
use crate::infrastructure::http::dto::{DeleteAudioQuery, DeleteAudioResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 清单全量列表（存储顺序）
pub async fn list_audios(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AudioEntry>>, ApiError> {
    let entries = state.list_audios_handler.handle(ListAudios).await?;
    Ok(Json(entries))
}

/// 删除一条音频：先删文件（带路径包含检查），再清理清单
pub async fn delete_audio(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeleteAudioQuery>,
) -> Result<Json<DeleteAudioResponse>, ApiError> {
    let audio_url = query
        .audio_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("audioUrl is required".to_string()))?;

    state
        .delete_audio_handler
        .handle(DeleteAudio { audio_url })
        .await?;

    Ok(Json(DeleteAudioResponse { success: true }))
}
