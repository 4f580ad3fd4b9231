//! 国际象棋规则库
//!
//! 包含:
//! - 棋子、格子、走法等核心数据结构
//! - 局面抽象 (GamePosition trait)，供 AI 搜索使用
//! - 基于 cozy-chess 的对局实现：合法走法、走子与悔棋、终局判定
//! - FEN 格式

mod error;
mod fen;
mod game;
mod moves;
mod piece;
mod position;
mod status;

pub use error::{ChessError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use game::Game;
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind, Square, BOARD_SIZE, SQUARE_COUNT};
pub use position::GamePosition;
pub use status::{DrawReason, GameStatus};
