//! Delete Command Handlers - 音频删除
//!
//! 删除前必须通过路径包含检查：目标解析结果必须落在受管音频目录内，
//! 防止构造的相对路径删掉任意文件

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::application::commands::DeleteAudio;
use crate::application::error::ApplicationError;
use crate::application::ports::AudioCatalogPort;

/// 词法规范化：不触达文件系统，仅消解 `.` 与 `..` 组件
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// DeleteAudio Handler - 删除音频文件并从清单移除
pub struct DeleteAudioHandler {
    public_dir: PathBuf,
    audio_dir: PathBuf,
    catalog: Arc<dyn AudioCatalogPort>,
}

impl DeleteAudioHandler {
    pub fn new(public_dir: PathBuf, audio_dir: PathBuf, catalog: Arc<dyn AudioCatalogPort>) -> Self {
        Self {
            public_dir,
            audio_dir,
            catalog,
        }
    }

    pub async fn handle(&self, command: DeleteAudio) -> Result<(), ApplicationError> {
        // audio_url 以站点根为基准（/audio/...），映射到 public 目录下
        let relative = command.audio_url.trim_start_matches('/');
        let target = normalize_lexically(&self.public_dir.join(relative));
        let audio_root = normalize_lexically(&self.audio_dir);

        // 包含检查先于任何文件系统删除
        if !target.starts_with(&audio_root) {
            return Err(ApplicationError::validation("Invalid audio path"));
        }

        match tokio::fs::remove_file(&target).await {
            Ok(()) => {}
            // 文件已不存在：仍然继续清理清单
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ApplicationError::Store(format!(
                    "Failed to delete audio file: {}",
                    e
                )));
            }
        }

        self.catalog.remove(&command.audio_url).await?;

        tracing::info!(audio_url = %command.audio_url, "Audio deleted");

        Ok(())
    }
}
