//! AI 自我对弈
//!
//! 运行方式:
//! ```bash
//! cargo run -p chess-ai --example self_play -- hard
//! RUST_LOG=chess_ai=debug cargo run -p chess-ai --example self_play -- easy medium
//! ```

use chess_ai::{AiEngine, Difficulty};
use chess_rules::{Color, Game, GamePosition, GameStatus};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 超过这个半回合数直接结束
const MAX_PLIES: usize = 200;

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("self_play=info".parse()?))
        .init();

    let mut args = std::env::args().skip(1);
    let white: Difficulty = args.next().as_deref().unwrap_or("medium").parse()?;
    let black: Difficulty = match args.next() {
        Some(name) => name.parse()?,
        None => white,
    };

    let mut white_ai = AiEngine::from_difficulty(white);
    let mut black_ai = AiEngine::from_difficulty(black);
    let mut game = Game::new();

    println!("=== 自我对弈: 白方 {} vs 黑方 {} ===\n", white, black);

    while !game.status().is_over() && game.ply_count() < MAX_PLIES {
        let side = game.side_to_move();
        let engine = match side {
            Color::White => &mut white_ai,
            Color::Black => &mut black_ai,
        };

        let Some(mv) = engine.select_move(&mut game) else {
            break;
        };
        game.play(mv)?;

        let number = game.ply_count().div_ceil(2);
        match side {
            Color::White => print!("{}. {} ", number, mv),
            Color::Black => println!("{}", mv),
        }
        info!(nodes = engine.nodes_searched(), score = ?engine.last_score(), "{:?} 走 {}", side, mv);
    }

    println!("\n");
    match game.status() {
        GameStatus::Checkmate { winner } => println!("结果: {:?} 胜（将死）", winner),
        GameStatus::Draw(reason) => println!("结果: 和棋（{:?}）", reason),
        GameStatus::Ongoing => println!("结果: 达到 {} 半回合上限", MAX_PLIES),
    }
    println!("终局 FEN: {}", game.to_fen());

    Ok(())
}
