//! Data Transfer Objects
//!
//! 请求/响应的显式记录类型；必填字段在 handler 里校验，
//! 缺失时返回 400 而不是反序列化错误

use serde::{Deserialize, Serialize};

// ============================================================================
// Chapter DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChapterTextQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChapterTextResponse {
    pub text: String,
}

// ============================================================================
// Generate DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub chapter_name: Option<String>,
    pub voice: Option<String>,
    pub model: Option<String>,
    pub speed: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestRequest {
    pub voice: Option<String>,
    pub model: Option<String>,
    pub speed: Option<f32>,
    pub message: Option<String>,
}

// ============================================================================
// Audio DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAudioQuery {
    pub audio_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteAudioResponse {
    pub success: bool,
}
