//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping            GET     健康检查
//! - /api/chapters        GET     列出章节文档
//! - /api/chapter-text    GET     读取章节纯文本 (?name=<file>)
//! - /api/audios          GET     清单全量列表
//! - /api/generate        POST    为章节生成音频
//! - /api/generate-test   POST    生成试听音频
//! - /api/audio           DELETE  删除音频 (?audioUrl=<url>)
//!
//! 其余 /api 路径返回 JSON 404；非 /api 路径由服务器回退到静态文件服务

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/chapters", get(handlers::list_chapters))
        .route("/chapter-text", get(handlers::get_chapter_text))
        .route("/audios", get(handlers::list_audios))
        .route("/generate", post(handlers::generate))
        .route("/generate-test", post(handlers::generate_test))
        .route("/audio", delete(handlers::delete_audio))
        .fallback(handlers::api_not_found)
}
