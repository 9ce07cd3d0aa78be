//! Tippy self-play
//!
//! Pits two configured engines against each other from an empty board and
//! prints the final position.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use tippy::board::DEFAULT_BOARD_SIZE;
use tippy::{Engine, EngineConfig, GameState, Player, StrategyKind, TippyState};

/// Let two Tippy engines play each other
#[derive(Parser, Debug)]
#[command(name = "tippy")]
#[command(about = "Self-play for the Tippy game engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Strategy for the first player (X)
    #[arg(long)]
    p1: Option<StrategyKind>,

    /// Strategy for the second player (O)
    #[arg(long)]
    p2: Option<StrategyKind>,

    /// Plies searched below each root move by the myopic strategy
    #[arg(long)]
    depth: Option<u32>,

    /// Tie-breaking seed; P2 uses seed + 1
    #[arg(long)]
    seed: Option<u64>,

    /// TOML engine config used for anything not given on the command line
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn base_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn player_config(
        base: &EngineConfig,
        strategy: Option<StrategyKind>,
        seed_offset: u64,
    ) -> EngineConfig {
        EngineConfig {
            strategy: strategy.unwrap_or(base.strategy),
            depth: base.depth,
            seed: base.seed.map(|s| s.wrapping_add(seed_offset)),
        }
    }
}

#[instrument(skip_all, fields(size = state.board_size()))]
fn play(
    mut state: TippyState,
    p1: &mut Engine<TippyState>,
    p2: &mut Engine<TippyState>,
) -> Result<TippyState> {
    let mut ply = 0u32;
    while !state.is_over() {
        let player = state.next_player();
        let engine = match player {
            Player::P1 => &mut *p1,
            Player::P2 => &mut *p2,
        };
        let result = engine
            .suggest(&state)
            .with_context(|| format!("{} failed to move", player))?;
        ply += 1;
        info!(
            ply,
            %player,
            strategy = %result.strategy,
            best_move = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            "played"
        );
        state = state.apply_move(&result.best_move)?;
    }
    Ok(state)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let base = cli.base_config()?;
    let p1_config = Cli::player_config(&base, cli.p1, 0);
    let p2_config = Cli::player_config(&base, cli.p2, 1);
    info!(p1 = %p1_config.strategy, p2 = %p2_config.strategy, size = cli.size, "starting self-play");

    let mut p1 = Engine::new(p1_config);
    let mut p2 = Engine::new(p2_config);
    let start = TippyState::new(Player::P1, cli.size)?;
    let end = play(start, &mut p1, &mut p2)?;

    println!("{}", end.board());
    if end.winner(Player::P1) {
        println!("winner: {} ({})", Player::P1, p1.strategy_kind());
    } else if end.winner(Player::P2) {
        println!("winner: {} ({})", Player::P2, p2.strategy_kind());
    } else {
        println!("draw");
    }
    Ok(())
}
