//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音合成配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            synthesis: SynthesisConfig::default(),
            storage: StorageConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// API 凭证；必填，未配置时进程拒绝启动
    #[serde(default)]
    pub api_key: String,

    /// 合成服务基础 URL
    #[serde(default = "default_synthesis_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_synthesis_timeout")]
    pub timeout_secs: u64,

    /// 单块字符数上限（服务端硬上限之下的安全余量）
    #[serde(default = "default_chunk_limit")]
    pub chunk_limit: usize,
}

fn default_synthesis_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_synthesis_timeout() -> u64 {
    120
}

fn default_chunk_limit() -> usize {
    crate::domain::DEFAULT_CHUNK_LIMIT
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_synthesis_base_url(),
            timeout_secs: default_synthesis_timeout(),
            chunk_limit: default_chunk_limit(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 章节文档目录
    #[serde(default = "default_chapters_dir")]
    pub chapters_dir: PathBuf,

    /// 静态文件根目录
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// 生成音频目录（清单文件也在这里）
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_chapters_dir() -> PathBuf {
    PathBuf::from("chapters")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("public/audio")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            chapters_dir: default_chapters_dir(),
            public_dir: default_public_dir(),
            audio_dir: default_audio_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
