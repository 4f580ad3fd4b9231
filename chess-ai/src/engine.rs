//! AI 引擎：按难度选择走法

use chess_rules::{Color, GamePosition};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::config::{AiConfig, Difficulty};
use crate::error::Result;
use crate::evaluate::{Evaluator, Score, INFINITY};
use crate::search::{candidate_moves, Searcher};

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    evaluator: Evaluator,
    nodes_searched: u64,
    last_score: Option<Score>,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    ///
    /// 配置先经过 [`AiConfig::validate`]，深度为 0 或随机概率越界时返回错误。
    pub fn new(config: AiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::with_config(AiConfig::from_difficulty(difficulty))
    }

    fn with_config(config: AiConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(),
            nodes_searched: 0,
            last_score: None,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 选择走法（每次调用重新抽取随机数）
    pub fn select_move<P: GamePosition>(&mut self, position: &mut P) -> Option<P::Move> {
        self.select_move_with_rng(position, &mut rand::thread_rng())
    }

    /// 选择走法
    ///
    /// 返回时 `position` 与调用前完全相同；没有合法走法时返回 None。
    pub fn select_move_with_rng<P, R>(&mut self, position: &mut P, rng: &mut R) -> Option<P::Move>
    where
        P: GamePosition,
        R: Rng,
    {
        self.nodes_searched = 0;
        self.last_score = None;

        let mut moves = candidate_moves(position);
        if moves.is_empty() {
            debug!("没有合法走法");
            return None;
        }

        // 简单难度：一定概率不搜索，直接随机走子
        let chance = self.config.random_move_chance;
        if chance > 0.0 && rng.gen::<f64>() < chance {
            let mv = moves.choose(rng).copied();
            info!(difficulty = %self.config.difficulty, "随机走子: {:?}", mv);
            return mv;
        }

        // 打乱顺序，让同分走法之间有变化
        moves.shuffle(rng);

        let depth = self.config.max_depth;
        let maximizing = position.side_to_move() == Color::White;
        debug!(
            difficulty = %self.config.difficulty,
            depth,
            candidates = moves.len(),
            "AI 开始搜索"
        );

        let mut searcher = Searcher::new(&self.evaluator);
        let mut best: Option<(P::Move, Score)> = None;

        for mv in moves {
            position.apply_move(mv);

            // 一步将死直接选中；更深的搜索里强制将死同样是 ±INFINITY，无法区分快慢
            if position.is_checkmate() {
                position.undo_move();
                let score = if maximizing { INFINITY } else { -INFINITY };
                best = Some((mv, score));
                break;
            }

            let score = searcher.search(
                position,
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                !maximizing,
            );
            position.undo_move();

            // 同分保留先出现的走法
            let better = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if better {
                best = Some((mv, score));
            }
        }

        self.nodes_searched = searcher.nodes();
        let (best_move, best_score) = best?;
        self.last_score = Some(best_score);
        debug!(
            score = best_score,
            nodes = self.nodes_searched,
            "AI 搜索完成: {:?}",
            best_move
        );

        Some(best_move)
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 上一次搜索选中走法的分数（随机走子时为 None）
    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }
}

/// 按难度为当前走子方选择一步棋
pub fn select_move<P: GamePosition>(position: &mut P, difficulty: Difficulty) -> Option<P::Move> {
    AiEngine::from_difficulty(difficulty).select_move(position)
}
