//! Audio Commands

/// 为一章文档生成音频
#[derive(Debug, Clone)]
pub struct GenerateAudio {
    /// 章节文件名（含扩展名）
    pub chapter_name: String,
    pub voice: String,
    /// 缺省使用默认模型
    pub model: Option<String>,
    /// 缺省使用默认语速
    pub speed: Option<f32>,
}

/// 用试听消息生成音频
#[derive(Debug, Clone)]
pub struct GenerateTestAudio {
    pub voice: String,
    pub model: Option<String>,
    pub speed: Option<f32>,
    /// 缺省使用固定的占位句
    pub message: Option<String>,
}

/// 删除一条已生成的音频
#[derive(Debug, Clone)]
pub struct DeleteAudio {
    /// 清单中的唯一键，形如 /audio/<file>.mp3
    pub audio_url: String,
}
