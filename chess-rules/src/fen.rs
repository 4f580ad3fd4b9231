//! FEN 格式解析和生成
//!
//! 国际象棋 FEN 格式：
//! `<棋盘> <走子方> <易位权> <过路兵格> <半回合计数> <回合数>`
//!
//! 示例：
//! `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1`

use crate::error::{ChessError, Result};
use crate::game::Game;

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为对局
    pub fn parse(fen: &str) -> Result<Game> {
        if fen.trim().is_empty() {
            return Err(ChessError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            });
        }
        Game::from_fen(fen)
    }

    /// 将对局当前局面转换为 FEN 字符串
    pub fn to_string(game: &Game) -> String {
        game.to_fen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::GamePosition;

    #[test]
    fn test_parse_initial() {
        let game = Fen::parse(INITIAL_FEN).unwrap();
        assert_eq!(game, Game::new());
        assert_eq!(Fen::to_string(&game), INITIAL_FEN);
    }

    #[test]
    fn test_parse_after_move() {
        let mut game = Game::new();
        let e4 = game
            .legal_moves()
            .into_iter()
            .find(|m| m.to_string() == "e2e4")
            .unwrap();
        game.play(e4).unwrap();

        let parsed = Fen::parse(&Fen::to_string(&game)).unwrap();
        assert_eq!(parsed.side_to_move(), game.side_to_move());
        assert_eq!(parsed.legal_moves().len(), 20);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            Fen::parse("   "),
            Err(ChessError::InvalidFen {
                reason: "Empty FEN string".to_string()
            })
        );
    }

    #[test]
    fn test_parse_invalid_rows() {
        assert!(Fen::parse("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
    }
}
