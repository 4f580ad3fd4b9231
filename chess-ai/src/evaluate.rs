//! 局面评估函数

use chess_rules::{Color, GamePosition, Piece, PieceKind, Square};

/// 评估分数（百分兵为单位，正值对白方有利）
pub type Score = i32;

/// 将死分值（白方将死对方为 +INFINITY，被将死为 -INFINITY）
pub const INFINITY: Score = i32::MAX;

/// 和棋分值
pub const DRAW_SCORE: Score = 0;

/// 局面评估接口（白方视角）
pub trait Evaluate<P: GamePosition> {
    fn evaluate(&self, position: &P) -> Score;
}

/// 评估器：子力 + 位置分
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

/// 棋子位置分值表（白方视角，黑方需要上下镜像）
/// 按棋盘书写顺序排列：第一行是第 8 行，索引为 (7 - rank) * 8 + file
mod position_tables {
    #[rustfmt::skip]
    pub const PAWN: [i32; 64] = [
         0,  0,  0,  0,  0,  0,  0,  0,
        50, 50, 50, 50, 50, 50, 50, 50,
        10, 10, 20, 30, 30, 20, 10, 10,
         5,  5, 10, 25, 25, 10,  5,  5,
         0,  0,  0, 20, 20,  0,  0,  0,
         5, -5,-10,  0,  0,-10, -5,  5,
         5, 10, 10,-20,-20, 10, 10,  5,
         0,  0,  0,  0,  0,  0,  0,  0,
    ];

    #[rustfmt::skip]
    pub const KNIGHT: [i32; 64] = [
        -50,-40,-30,-30,-30,-30,-40,-50,
        -40,-20,  0,  0,  0,  0,-20,-40,
        -30,  0, 10, 15, 15, 10,  0,-30,
        -30,  5, 15, 20, 20, 15,  5,-30,
        -30,  0, 15, 20, 20, 15,  0,-30,
        -30,  5, 10, 15, 15, 10,  5,-30,
        -40,-20,  0,  5,  5,  0,-20,-40,
        -50,-40,-30,-30,-30,-30,-40,-50,
    ];

    #[rustfmt::skip]
    pub const BISHOP: [i32; 64] = [
        -20,-10,-10,-10,-10,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5, 10, 10,  5,  0,-10,
        -10,  5,  5, 10, 10,  5,  5,-10,
        -10,  0, 10, 10, 10, 10,  0,-10,
        -10, 10, 10, 10, 10, 10, 10,-10,
        -10,  5,  0,  0,  0,  0,  5,-10,
        -20,-10,-10,-10,-10,-10,-10,-20,
    ];

    #[rustfmt::skip]
    pub const ROOK: [i32; 64] = [
         0,  0,  0,  0,  0,  0,  0,  0,
         5, 10, 10, 10, 10, 10, 10,  5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
         0,  0,  0,  5,  5,  0,  0,  0,
    ];

    #[rustfmt::skip]
    pub const QUEEN: [i32; 64] = [
        -20,-10,-10, -5, -5,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5,  5,  5,  5,  0,-10,
         -5,  0,  5,  5,  5,  5,  0, -5,
          0,  0,  5,  5,  5,  5,  0, -5,
        -10,  5,  5,  5,  5,  5,  0,-10,
        -10,  0,  5,  0,  0,  0,  0,-10,
        -20,-10,-10, -5, -5,-10,-10,-20,
    ];

    #[rustfmt::skip]
    pub const KING: [i32; 64] = [
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -20,-30,-30,-40,-40,-30,-30,-20,
        -10,-20,-20,-20,-20,-20,-20,-10,
         20, 20,  0,  0,  0,  0, 20, 20,
         20, 30, 10,  0,  0, 10, 30, 20,
    ];
}

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// 评估单个棋子的价值（包括位置分）
    fn evaluate_piece(square: Square, piece: Piece) -> i32 {
        piece.value() + Self::position_bonus(square, piece)
    }

    /// 获取位置加成分
    fn position_bonus(square: Square, piece: Piece) -> i32 {
        let index = match piece.color {
            Color::White => square.flip_rank().to_index(),
            // 黑方镜像（第 8 行对应白方第 1 行）
            Color::Black => square.to_index(),
        };

        let table = match piece.kind {
            PieceKind::Pawn => &position_tables::PAWN,
            PieceKind::Knight => &position_tables::KNIGHT,
            PieceKind::Bishop => &position_tables::BISHOP,
            PieceKind::Rook => &position_tables::ROOK,
            PieceKind::Queen => &position_tables::QUEEN,
            PieceKind::King => &position_tables::KING,
        };
        table[index]
    }

    /// 快速评估（仅计算子力差）
    pub fn material<P: GamePosition>(position: &P) -> Score {
        let mut score = 0;
        for square in Square::all() {
            if let Some(piece) = position.piece_at(square) {
                match piece.color {
                    Color::White => score += piece.value(),
                    Color::Black => score -= piece.value(),
                }
            }
        }
        score
    }
}

impl<P: GamePosition> Evaluate<P> for Evaluator {
    /// 评估局面（白方视角，正值对白方有利）
    fn evaluate(&self, position: &P) -> Score {
        if position.is_checkmate() {
            return match position.side_to_move() {
                Color::White => -INFINITY,
                Color::Black => INFINITY,
            };
        }

        if position.is_draw() {
            return DRAW_SCORE;
        }

        let mut score = 0;
        for square in Square::all() {
            if let Some(piece) = position.piece_at(square) {
                let piece_score = Self::evaluate_piece(square, piece);
                match piece.color {
                    Color::White => score += piece_score,
                    Color::Black => score -= piece_score,
                }
            }
        }
        score
    }
}
