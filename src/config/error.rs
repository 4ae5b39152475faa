// ==========================================
// 钢板质量证明书校验 - 配置文件错误
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("读取配置文件失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置项无效: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
