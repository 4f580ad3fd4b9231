//! 局面抽象
//!
//! 搜索核心只通过该 trait 访问规则引擎：走法生成、就地走子与悔棋、终局判定、
//! 读取棋子。实现方必须保证 `apply_move` 与 `undo_move` 互为精确逆操作。

use std::fmt::Debug;

use crate::piece::{Color, Piece, PieceKind, Square};

/// 可搜索的局面
pub trait GamePosition {
    /// 走法类型
    type Move: Copy + PartialEq + Debug;

    /// 当前走子方的全部合法走法（当且仅当没有合法走法时为空）
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// 就地执行一步走法（调用方保证走法合法）
    fn apply_move(&mut self, mv: Self::Move);

    /// 撤销最近一次 `apply_move`，恢复完全相同的内部状态
    fn undo_move(&mut self);

    /// 当前走子方是否被将死
    fn is_checkmate(&self) -> bool;

    /// 是否和棋（逼和、子力不足、三次重复、五十步规则）
    fn is_draw(&self) -> bool;

    /// 是否终局
    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// 当前走子方
    fn side_to_move(&self) -> Color;

    /// 指定格子上的棋子
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// 走法的升变棋子（非升变走法为 None）
    fn promotion_of(&self, _mv: &Self::Move) -> Option<PieceKind> {
        None
    }
}
