//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `LECTOR_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `LECTOR_SERVER__PORT=8080`
/// - `LECTOR_SYNTHESIS__API_KEY=sk-...`
/// - `LECTOR_STORAGE__CHAPTERS_DIR=/data/chapters`
///
/// 合成凭证未配置时回退到约定的 `OPENAI_API_KEY` 环境变量；
/// 仍为空则校验失败，进程拒绝启动
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("synthesis.api_key", "")?
        .set_default("synthesis.base_url", "https://api.openai.com")?
        .set_default("synthesis.timeout_secs", 120)?
        .set_default("synthesis.chunk_limit", 3900)?
        .set_default("storage.chapters_dir", "chapters")?
        .set_default("storage.public_dir", "public")?
        .set_default("storage.audio_dir", "public/audio")?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: LECTOR_，层级分隔符: __ (双下划线)
    // 例如: LECTOR_SYNTHESIS__API_KEY=sk-...
    builder = builder.add_source(
        Environment::with_prefix("LECTOR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 凭证回退到约定环境变量
    if app_config.synthesis.api_key.is_empty() {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            app_config.synthesis.api_key = key;
        }
    }

    // 7. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 合成凭证必填
    if config.synthesis.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesis API key is required (set LECTOR_SYNTHESIS__API_KEY or OPENAI_API_KEY)"
                .to_string(),
        ));
    }

    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证合成服务 URL
    if config.synthesis.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesis base URL cannot be empty".to_string(),
        ));
    }

    // 验证块长上限
    if config.synthesis.chunk_limit == 0 {
        return Err(ConfigError::ValidationError(
            "Chunk limit must be positive".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志；不输出凭证）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Synthesis URL: {}", config.synthesis.base_url);
    tracing::info!("Synthesis Timeout: {}s", config.synthesis.timeout_secs);
    tracing::info!("Chunk Limit: {} chars", config.synthesis.chunk_limit);
    tracing::info!("Chapters Directory: {:?}", config.storage.chapters_dir);
    tracing::info!("Public Directory: {:?}", config.storage.public_dir);
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> AppConfig {
        let mut config = AppConfig::default();
        config.synthesis.api_key = "sk-test".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&config_with_key()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = config_with_key();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = config_with_key();
        config.synthesis.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_chunk_limit() {
        let mut config = config_with_key();
        config.synthesis.chunk_limit = 0;
        assert!(validate_config(&config).is_err());
    }
}
