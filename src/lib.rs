//! Lector - 章节朗读服务
//!
//! 把本地 .docx 章节经第三方语音合成接口转成整章音频，
//! 用 JSON 清单记录生成结果，并提供浏览/生成/删除的 HTTP 接口
//!
//! 架构设计: Hexagonal Architecture + CQRS
//!
//! 领域层 (domain/):
//! - 文本分块器：按字符上限切分整章文本
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechClient, TextExtractor, AudioCatalog）
//! - Assembler: 按块顺序合成并拼接音频
//! - Commands/Queries: CQRS 命令与查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态文件服务
//! - Adapters: OpenAI 合成客户端、Fake 合成客户端、docx 文本提取
//! - Persistence: JSON 清单存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
