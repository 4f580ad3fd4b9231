//! 国际象棋 AI 引擎
//!
//! 包含:
//! - 棋局评估函数（子力 + 位置分值表）
//! - Minimax + Alpha-Beta 搜索
//! - 按难度选择走法（简单难度带随机走子）
//! - 难度配置（JSON 文件）

mod config;
mod engine;
mod error;
mod evaluate;
mod search;

pub use config::{AiConfig, Difficulty, EASY_RANDOM_MOVE_CHANCE};
pub use engine::{select_move, AiEngine};
pub use error::{AiError, Result};
pub use evaluate::{Evaluate, Evaluator, Score, DRAW_SCORE, INFINITY};
pub use search::Searcher;
