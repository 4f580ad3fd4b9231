//! 搜索
//!
//! 实现 Minimax + Alpha-Beta 剪枝（固定深度，无置换表）

use chess_rules::{GamePosition, PieceKind};

use crate::evaluate::{Evaluate, Score, INFINITY};

/// 搜索器
///
/// 在局面上就地走子、递归、悔棋；返回时局面与调用前完全相同。
pub struct Searcher<'a, E> {
    evaluator: &'a E,
    nodes: u64,
}

impl<'a, E> Searcher<'a, E> {
    /// 创建新的搜索器
    pub fn new(evaluator: &'a E) -> Self {
        Self { evaluator, nodes: 0 }
    }

    /// 已访问的节点数
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Alpha-Beta 搜索
    ///
    /// `maximizing` 为真时当前层取最大值（白方视角）。
    pub fn search<P>(
        &mut self,
        position: &mut P,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score
    where
        P: GamePosition,
        E: Evaluate<P>,
    {
        self.nodes += 1;

        // 到达深度限制或终局，返回评估值
        if depth == 0 || position.is_game_over() {
            return self.evaluator.evaluate(position);
        }

        let moves = candidate_moves(position);

        // 无子可动但未判定终局，直接静态评估
        if moves.is_empty() {
            return self.evaluator.evaluate(position);
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in moves {
                position.apply_move(mv);
                let score = self.search(position, depth - 1, alpha, beta, false);
                position.undo_move();

                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // Beta 剪枝
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in moves {
                position.apply_move(mv);
                let score = self.search(position, depth - 1, alpha, beta, true);
                position.undo_move();

                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // Alpha 剪枝
                }
            }
            best
        }
    }
}

/// 参与搜索的走法：升变只考虑升后
pub(crate) fn candidate_moves<P: GamePosition>(position: &P) -> Vec<P::Move> {
    let mut moves = position.legal_moves();
    moves.retain(|mv| matches!(position.promotion_of(mv), None | Some(PieceKind::Queen)));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Evaluator;
    use chess_rules::{Color, Game, Piece, Square};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// 合成博弈树节点：每个节点都有静态分
    #[derive(Debug, Clone)]
    struct Node {
        value: Score,
        children: Vec<Node>,
    }

    impl Node {
        fn leaf(value: Score) -> Self {
            Self { value, children: Vec::new() }
        }

        fn branch(value: Score, children: Vec<Node>) -> Self {
            Self { value, children }
        }

        fn random(rng: &mut ChaCha8Rng, depth: u8) -> Self {
            let value = rng.gen_range(-100..=100);
            if depth == 0 {
                return Self::leaf(value);
            }
            let width = rng.gen_range(0..=4);
            let children = (0..width).map(|_| Self::random(rng, depth - 1)).collect();
            Self::branch(value, children)
        }
    }

    /// 在合成树上行走的局面，走法为子节点下标
    struct TreePosition<'t> {
        root: &'t Node,
        path: Vec<usize>,
    }

    impl<'t> TreePosition<'t> {
        fn new(root: &'t Node) -> Self {
            Self { root, path: Vec::new() }
        }

        fn current(&self) -> &'t Node {
            self.path.iter().fold(self.root, |node, &i| &node.children[i])
        }
    }

    impl GamePosition for TreePosition<'_> {
        type Move = usize;

        fn legal_moves(&self) -> Vec<usize> {
            (0..self.current().children.len()).collect()
        }

        fn apply_move(&mut self, mv: usize) {
            self.path.push(mv);
        }

        fn undo_move(&mut self) {
            self.path.pop();
        }

        fn is_checkmate(&self) -> bool {
            false
        }

        fn is_draw(&self) -> bool {
            false
        }

        fn side_to_move(&self) -> Color {
            if self.path.len() % 2 == 0 {
                Color::White
            } else {
                Color::Black
            }
        }

        fn piece_at(&self, _square: Square) -> Option<Piece> {
            None
        }
    }

    /// 合成树的评估：直接读取节点静态分
    struct NodeValue;

    impl Evaluate<TreePosition<'_>> for NodeValue {
        fn evaluate(&self, position: &TreePosition<'_>) -> Score {
            position.current().value
        }
    }

    /// 不剪枝的 Minimax，作为对照
    fn minimax(position: &mut TreePosition<'_>, depth: u8, maximizing: bool) -> Score {
        let moves = position.legal_moves();
        if depth == 0 || moves.is_empty() {
            return position.current().value;
        }
        let scores = moves.into_iter().map(|mv| {
            position.apply_move(mv);
            let score = minimax(position, depth - 1, !maximizing);
            position.undo_move();
            score
        });
        let scores: Vec<Score> = scores.collect();
        if maximizing {
            scores.into_iter().max().unwrap_or(-INFINITY)
        } else {
            scores.into_iter().min().unwrap_or(INFINITY)
        }
    }

    fn count_nodes(node: &Node, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }
        1 + node
            .children
            .iter()
            .map(|child| count_nodes(child, depth - 1))
            .sum::<u64>()
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_1234);
        for _ in 0..200 {
            let tree = Node::random(&mut rng, 5);
            for depth in 0..=5 {
                for maximizing in [true, false] {
                    let mut position = TreePosition::new(&tree);
                    let expected = minimax(&mut position, depth, maximizing);

                    let mut searcher = Searcher::new(&NodeValue);
                    let actual = searcher.search(&mut position, depth, -INFINITY, INFINITY, maximizing);

                    assert_eq!(actual, expected, "depth={} maximizing={}", depth, maximizing);
                    assert!(position.path.is_empty());
                    assert!(searcher.nodes() <= count_nodes(&tree, depth));
                }
            }
        }
    }

    #[test]
    fn test_pruning_skips_nodes() {
        // 第二个分支的第一个叶子 (1) 已经比第一个分支的结果 (3) 差，其余叶子被剪掉
        let tree = Node::branch(
            0,
            vec![
                Node::branch(0, vec![Node::leaf(3), Node::leaf(5)]),
                Node::branch(0, vec![Node::leaf(1), Node::leaf(9), Node::leaf(9)]),
            ],
        );
        let mut position = TreePosition::new(&tree);
        let mut searcher = Searcher::new(&NodeValue);
        let score = searcher.search(&mut position, 2, -INFINITY, INFINITY, true);

        assert_eq!(score, 3);
        assert_eq!(minimax(&mut position, 2, true), 3);
        assert!(searcher.nodes() < count_nodes(&tree, 2), "应该发生剪枝");
    }

    #[test]
    fn test_empty_moves_fall_back_to_evaluation() {
        let tree = Node::leaf(42);
        let mut position = TreePosition::new(&tree);
        let mut searcher = Searcher::new(&NodeValue);
        assert_eq!(searcher.search(&mut position, 3, -INFINITY, INFINITY, true), 42);
        assert_eq!(searcher.search(&mut position, 3, -INFINITY, INFINITY, false), 42);
    }

    #[test]
    fn test_depth_zero_is_evaluation() {
        let evaluator = Evaluator::new();
        for fen in [
            chess_rules::INITIAL_FEN,
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 0 5",
            "6k1/5ppp/8/8/8/2Q5/5PPP/6K1 b - - 3 30",
        ] {
            let mut game = Game::from_fen(fen).unwrap();
            let expected = evaluator.evaluate(&game);
            let mut searcher = Searcher::new(&evaluator);
            for maximizing in [true, false] {
                assert_eq!(
                    searcher.search(&mut game, 0, -INFINITY, INFINITY, maximizing),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_search_restores_position() {
        let evaluator = Evaluator::new();
        let mut game = Game::from_fen("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 0 5")
            .unwrap();
        let before = game.clone();
        for depth in 0..=3 {
            let mut searcher = Searcher::new(&evaluator);
            searcher.search(&mut game, depth, -INFINITY, INFINITY, true);
            assert_eq!(game, before, "depth {} 搜索后局面应该不变", depth);
        }
    }

    #[test]
    fn test_search_finds_mate_score() {
        let evaluator = Evaluator::new();
        // 白方 Ra8 一步将死
        let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut searcher = Searcher::new(&evaluator);
        assert_eq!(searcher.search(&mut game, 1, -INFINITY, INFINITY, true), INFINITY);
    }

    #[test]
    fn test_candidate_moves_only_queen_promotions() {
        let game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let promotions: Vec<_> = candidate_moves(&game)
            .into_iter()
            .filter(|mv| mv.is_promotion())
            .collect();
        assert_eq!(promotions.len(), 1);
        assert_eq!(promotions[0].promotion, Some(PieceKind::Queen));
    }
}
