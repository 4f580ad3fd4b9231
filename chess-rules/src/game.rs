//! 对局状态与规则判定
//!
//! 走法生成交给 `cozy-chess`，这里负责类型转换、悔棋栈和终局分类。

use cozy_chess::{Board, Color as EngineColor, Move as EngineMove, Piece as EnginePiece};
use tracing::warn;

use crate::error::{ChessError, Result};
use crate::moves::Move;
use crate::piece::{Color, Piece, PieceKind, Square};
use crate::position::GamePosition;
use crate::status::{DrawReason, GameStatus};

/// 五十回合规则对应的半回合数
const FIFTY_MOVE_HALFMOVES: u8 = 100;

/// 判定重复和棋所需的出现次数
const REPETITION_LIMIT: usize = 3;

/// 一局棋（当前局面 + 历史，用于悔棋和重复局面判定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// 当前局面
    board: Board,
    /// 每一步之前的局面
    history: Vec<Board>,
    /// 已走的棋
    moves: Vec<Move>,
}

impl Game {
    /// 创建初始局面
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// 从 FEN 创建（不含历史）
    pub fn from_fen(fen: &str) -> Result<Self> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| ChessError::InvalidFen {
            reason: format!("{:?}", e),
        })?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// 当前局面的 FEN
    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    /// 已走的半回合数
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// 已走的棋
    pub fn move_history(&self) -> &[Move] {
        &self.moves
    }

    /// 当前走子方是否被将军
    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// 执行走法（检查合法性）
    pub fn play(&mut self, mv: Move) -> Result<()> {
        let legal = self
            .legal_moves()
            .into_iter()
            .find(|candidate| candidate.same_squares(&mv))
            .ok_or(ChessError::IllegalMove { mv })?;
        self.apply_move(legal);
        Ok(())
    }

    /// 撤销最近一步
    pub fn undo(&mut self) -> Result<Move> {
        let last = self.moves.last().copied().ok_or(ChessError::NothingToUndo)?;
        self.undo_move();
        Ok(last)
    }

    /// 对局状态（将死优先于和棋）
    pub fn status(&self) -> GameStatus {
        if self.is_checkmate() {
            return GameStatus::Checkmate {
                winner: self.side_to_move().opponent(),
            };
        }
        match self.draw_reason() {
            Some(reason) => GameStatus::Draw(reason),
            None => GameStatus::Ongoing,
        }
    }

    /// 和棋原因（不是和棋时为 None）
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if !self.is_check() && !self.has_legal_moves() {
            Some(DrawReason::Stalemate)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.board.halfmove_clock() >= FIFTY_MOVE_HALFMOVES {
            Some(DrawReason::FiftyMoveRule)
        } else {
            None
        }
    }

    fn has_legal_moves(&self) -> bool {
        let mut found = false;
        self.board.generate_moves(|piece_moves| {
            found = piece_moves.into_iter().next().is_some();
            found
        });
        found
    }

    /// 只剩王，或王加一个轻子，或所有象都在同色格
    fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy = board.pieces(EnginePiece::Pawn)
            | board.pieces(EnginePiece::Rook)
            | board.pieces(EnginePiece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = board.pieces(EnginePiece::Knight);
        let bishops = board.pieces(EnginePiece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let mut shades = bishops.into_iter().map(|sq| square_from_engine(sq).is_light());
        let first = shades.next();
        shades.all(|shade| Some(shade) == first)
    }

    fn is_threefold_repetition(&self) -> bool {
        let hash = self.board.hash();
        let earlier = self.history.iter().filter(|board| board.hash() == hash).count();
        earlier + 1 >= REPETITION_LIMIT
    }

    /// 把引擎走法转换为对外走法（补充吃子信息，易位改写为王走两格）
    fn describe(&self, mv: EngineMove) -> Move {
        let board = &self.board;
        let us = board.side_to_move();
        let moving = board.piece_on(mv.from);
        let from = square_from_engine(mv.from);
        let to = square_from_engine(mv.to);

        // 易位在引擎里是“王吃己方车”
        if moving == Some(EnginePiece::King) && board.color_on(mv.to) == Some(us) {
            let file = if to.file > from.file { 6 } else { 2 };
            return Move::new(from, Square::new_unchecked(file, from.rank));
        }

        let captured = match (board.piece_on(mv.to), board.color_on(mv.to)) {
            (Some(piece), Some(color)) => Some(Piece::new(kind_from_engine(piece), color_from_engine(color))),
            _ if moving == Some(EnginePiece::Pawn) && from.file != to.file => Some(Piece::new(
                PieceKind::Pawn,
                color_from_engine(us).opponent(),
            )),
            _ => None,
        };

        Move {
            from,
            to,
            promotion: mv.promotion.map(kind_from_engine),
            captured,
        }
    }

    /// 把对外走法转换回引擎走法
    fn to_engine(&self, mv: Move) -> EngineMove {
        let from = square_to_engine(mv.from);
        let mut to = square_to_engine(mv.to);

        let king_move = self.board.piece_on(from) == Some(EnginePiece::King);
        if king_move && mv.from.file.abs_diff(mv.to.file) == 2 {
            let rook_file = if mv.to.file > mv.from.file { 7 } else { 0 };
            to = square_to_engine(Square::new_unchecked(rook_file, mv.from.rank));
        }

        EngineMove {
            from,
            to,
            promotion: mv.promotion.map(kind_to_engine),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl GamePosition for Game {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves.into_iter().map(|mv| self.describe(mv)));
            false
        });
        moves
    }

    fn apply_move(&mut self, mv: Move) {
        let engine_move = self.to_engine(mv);
        self.history.push(self.board.clone());
        self.board.play_unchecked(engine_move);
        self.moves.push(mv);
    }

    fn undo_move(&mut self) {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                self.moves.pop();
            }
            None => warn!("undo_move called with no move to undo"),
        }
    }

    fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    fn side_to_move(&self) -> Color {
        color_from_engine(self.board.side_to_move())
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let engine_square = square_to_engine(square);
        let kind = self.board.piece_on(engine_square)?;
        let color = self.board.color_on(engine_square)?;
        Some(Piece::new(kind_from_engine(kind), color_from_engine(color)))
    }

    fn promotion_of(&self, mv: &Move) -> Option<PieceKind> {
        mv.promotion
    }
}

fn color_from_engine(color: EngineColor) -> Color {
    match color {
        EngineColor::White => Color::White,
        EngineColor::Black => Color::Black,
    }
}

fn kind_from_engine(piece: EnginePiece) -> PieceKind {
    match piece {
        EnginePiece::Pawn => PieceKind::Pawn,
        EnginePiece::Knight => PieceKind::Knight,
        EnginePiece::Bishop => PieceKind::Bishop,
        EnginePiece::Rook => PieceKind::Rook,
        EnginePiece::Queen => PieceKind::Queen,
        EnginePiece::King => PieceKind::King,
    }
}

fn kind_to_engine(kind: PieceKind) -> EnginePiece {
    match kind {
        PieceKind::Pawn => EnginePiece::Pawn,
        PieceKind::Knight => EnginePiece::Knight,
        PieceKind::Bishop => EnginePiece::Bishop,
        PieceKind::Rook => EnginePiece::Rook,
        PieceKind::Queen => EnginePiece::Queen,
        PieceKind::King => EnginePiece::King,
    }
}

fn square_from_engine(square: cozy_chess::Square) -> Square {
    Square::new_unchecked(square.file() as u8, square.rank() as u8)
}

fn square_to_engine(square: Square) -> cozy_chess::Square {
    cozy_chess::Square::index(square.to_index())
}
