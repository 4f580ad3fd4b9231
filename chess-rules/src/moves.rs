//! 走法定义

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece::{Color, Piece, PieceKind, Square};

/// 走法
///
/// 王车易位记为王横移两格（e1g1、e1c1、e8g8、e8c8）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始格
    pub from: Square,
    /// 目标格
    pub to: Square,
    /// 升变棋子（如果有）
    pub promotion: Option<PieceKind>,
    /// 被吃的棋子（如果有，吃过路兵时为对方的兵）
    pub captured: Option<Piece>,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            captured: None,
        }
    }

    /// 创建升变走法
    pub fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
            captured: None,
        }
    }

    /// 是否吃子
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// 是否升变
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// 起点、终点、升变均相同（忽略吃子信息）
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_fen_char(Color::Black))?;
        }
        Ok(())
    }
}
