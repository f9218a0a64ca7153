//! Lector - 章节朗读服务

use std::sync::Arc;

use lector::application::AudioCatalogPort;
use lector::config::{load_config, print_config};
use lector::infrastructure::adapters::{
    DocxTextExtractor, OpenAiSpeechClient, OpenAiSpeechClientConfig,
};
use lector::infrastructure::http::{AppState, HttpServer, ServerConfig};
use lector::infrastructure::JsonManifestStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    // 合成凭证缺失会在这里失败，进程拒绝启动
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},lector={},tower_http=info",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Lector - 章节朗读服务");
    print_config(&config);

    // 确保数据目录存在
    tokio::fs::create_dir_all(&config.storage.chapters_dir).await?;
    tokio::fs::create_dir_all(&config.storage.audio_dir).await?;

    // 创建语音合成客户端
    let speech_config = OpenAiSpeechClientConfig::new(config.synthesis.api_key.clone())
        .with_base_url(config.synthesis.base_url.clone())
        .with_timeout(config.synthesis.timeout_secs);
    let speech_client = Arc::new(OpenAiSpeechClient::new(speech_config)?);

    // 创建文档文本提取器
    let extractor = Arc::new(DocxTextExtractor::new());

    // 创建 JSON 清单存储并初始化
    let catalog = Arc::new(JsonManifestStore::new(&config.storage.audio_dir));
    catalog.ensure_initialized().await?;

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        config.storage.chapters_dir.clone(),
        config.storage.public_dir.clone(),
        config.storage.audio_dir.clone(),
        extractor,
        speech_client,
        catalog,
        config.synthesis.chunk_limit,
    );

    let server = HttpServer::new(server_config, state, config.storage.public_dir.clone());

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
