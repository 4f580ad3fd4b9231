//! 对局状态

use serde::{Deserialize, Serialize};

use crate::piece::Color;

/// 和棋原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    /// 逼和（无子可动且未被将军）
    Stalemate,
    /// 双方子力都不足以将死
    InsufficientMaterial,
    /// 同一局面出现三次
    ThreefoldRepetition,
    /// 五十回合无吃子、无兵步
    FiftyMoveRule,
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 对局进行中
    Ongoing,
    /// 将死
    Checkmate {
        /// 获胜方
        winner: Color,
    },
    /// 和棋
    Draw(DrawReason),
}

impl GameStatus {
    /// 是否已终局
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// 获胜方（和棋或未结束时为 None）
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}
