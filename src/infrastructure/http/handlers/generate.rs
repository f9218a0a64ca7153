//! Generate HTTP Handlers

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::application::{AudioEntry, GenerateAudio, GenerateTestAudio};
use crate::infrastructure::http::dto::{GenerateRequest, GenerateTestRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 为一章文档生成音频，成功时返回新建的清单记录
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<AudioEntry>, ApiError> {
    let chapter_name = request.chapter_name.filter(|name| !name.is_empty());
    let voice = request.voice.filter(|voice| !voice.is_empty());
    let (chapter_name, voice) = match (chapter_name, voice) {
        (Some(chapter_name), Some(voice)) => (chapter_name, voice),
        _ => {
            return Err(ApiError::BadRequest(
                "chapterName and voice are required".to_string(),
            ))
        }
    };

    let entry = state
        .generate_handler
        .handle(GenerateAudio {
            chapter_name,
            voice,
            model: request.model,
            speed: request.speed,
        })
        .await?;

    Ok(Json(entry))
}

/// 用试听消息生成音频
pub async fn generate_test(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateTestRequest>,
) -> Result<Json<AudioEntry>, ApiError> {
    let voice = request
        .voice
        .filter(|voice| !voice.is_empty())
        .ok_or_else(|| ApiError::BadRequest("voice is required".to_string()))?;

    let entry = state
        .generate_test_handler
        .handle(GenerateTestAudio {
            voice,
            model: request.model,
            speed: request.speed,
            message: request.message,
        })
        .await?;

    Ok(Json(entry))
}
