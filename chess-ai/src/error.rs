//! 错误类型定义

use thiserror::Error;

/// AI 配置错误
#[derive(Error, Debug)]
pub enum AiError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置值无效
    #[error("Invalid AI config: {reason}")]
    InvalidConfig { reason: String },

    /// 未知难度
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// AI 操作结果类型
pub type Result<T> = std::result::Result<T, AiError>;
