//! 错误类型定义

use thiserror::Error;

use crate::moves::Move;

/// 国际象棋规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChessError {
    /// 无效的格子
    #[error("Invalid square: {name}")]
    InvalidSquare { name: String },

    /// 无效的走法
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// 无效的 FEN 字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },

    /// 没有可以悔棋的走法
    #[error("No move to undo")]
    NothingToUndo,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, ChessError>;
