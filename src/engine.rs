//! Move-suggestion engine
//!
//! Wraps one configured [`Strategy`] and adds timing plus a uniform result
//! type, so callers pick a strategy by name instead of by type.
//!
//! # Example
//!
//! ```
//! use tippy::{Engine, EngineConfig, StrategyKind};
//! use tippy::state::{Player, TippyState};
//!
//! let config = EngineConfig::new(StrategyKind::Myopic).with_seed(3);
//! let mut engine = Engine::new(config);
//!
//! let state = TippyState::new(Player::P1, 3).unwrap();
//! let result = engine.suggest(&state).unwrap();
//! println!("{} (score {}, {}ms)", result.best_move, result.score, result.time_ms);
//! ```

use std::time::Instant;

use tracing::{info, instrument};

use crate::config::{EngineConfig, StrategyKind};
use crate::search::{
    AlphaBeta, MemoizedMinimax, Minimax, MyopicMinimax, SearchError, Strategy,
};
use crate::state::GameState;

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult<M> {
    pub best_move: M,
    /// Score of the move for the player who makes it
    pub score: f64,
    /// Strategy that produced the move
    pub strategy: StrategyKind,
    /// States scored during the search
    pub nodes: u64,
    /// Wall-clock time of the search in milliseconds
    pub time_ms: u64,
}

/// A configured strategy ready to suggest moves.
///
/// The strategy lives as long as the engine, so a memoizing engine keeps
/// its cache across calls.
pub struct Engine<S: GameState> {
    strategy: Box<dyn Strategy<S>>,
    config: EngineConfig,
}

impl<S: GameState + 'static> Engine<S> {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let strategy: Box<dyn Strategy<S>> = match (config.strategy, config.seed) {
            (StrategyKind::Minimax, Some(seed)) => Box::new(Minimax::with_seed(seed)),
            (StrategyKind::Minimax, None) => Box::new(Minimax::new()),
            (StrategyKind::Memoize, Some(seed)) => Box::new(MemoizedMinimax::<S>::with_seed(seed)),
            (StrategyKind::Memoize, None) => Box::new(MemoizedMinimax::<S>::new()),
            (StrategyKind::Myopic, Some(seed)) => {
                Box::new(MyopicMinimax::with_seed(seed).with_depth(config.depth))
            }
            (StrategyKind::Myopic, None) => Box::new(MyopicMinimax::new().with_depth(config.depth)),
            (StrategyKind::Pruning, Some(seed)) => Box::new(AlphaBeta::with_seed(seed)),
            (StrategyKind::Pruning, None) => Box::new(AlphaBeta::new()),
        };
        Self { strategy, config }
    }
}

impl<S: GameState> Engine<S> {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.config.strategy
    }

    /// Search `state` and report the chosen move with statistics
    #[instrument(skip_all, fields(strategy = %self.config.strategy, player = %state.next_player()))]
    pub fn suggest(&mut self, state: &S) -> Result<MoveResult<S::Move>, SearchError> {
        let start = Instant::now();
        let result = self.strategy.search(state)?;
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            best_move = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "move suggested"
        );
        Ok(MoveResult {
            best_move: result.best_move,
            score: result.score,
            strategy: self.config.strategy,
            nodes: result.nodes,
            time_ms,
        })
    }

    /// Search `state` and return only the chosen move
    pub fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        self.suggest(state).map(|result| result.best_move)
    }
}

impl<S: GameState + 'static> Default for Engine<S> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: GameState> std::fmt::Debug for Engine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("strategy", &self.strategy.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Player, TippyMove, TippyState};
    use strum::IntoEnumIterator;

    fn winnable() -> TippyState {
        TippyState::parse(Player::P1, &["X O _", "X X O", "_ _ O"]).unwrap()
    }

    #[test]
    fn test_every_strategy_takes_the_win() {
        for kind in StrategyKind::iter() {
            let mut engine = Engine::new(EngineConfig::new(kind).with_seed(1));
            let result = engine.suggest(&winnable()).unwrap();
            assert_eq!(result.best_move, TippyMove::new(2, 1), "{}", kind);
            assert_eq!(result.score, 1.0);
            assert_eq!(result.strategy, kind);
        }
    }

    #[test]
    fn test_strategy_names_match_kinds() {
        for kind in StrategyKind::iter() {
            let engine: Engine<TippyState> = Engine::new(EngineConfig::new(kind));
            assert_eq!(engine.strategy.name(), kind.to_string());
            assert_eq!(engine.strategy_kind(), kind);
        }
    }

    #[test]
    fn test_game_over_is_an_error() {
        let state = TippyState::parse(Player::P1, &["X O X", "X O O", "O X X"]).unwrap();
        let mut engine = Engine::default();
        assert_eq!(engine.suggest(&state), Err(SearchError::GameOver));
    }

    #[test]
    fn test_suggest_move_is_legal() {
        let state = TippyState::new(Player::P1, 4).unwrap();
        let mut engine = Engine::new(EngineConfig::new(StrategyKind::Myopic).with_depth(1));
        let mv = engine.suggest_move(&state).unwrap();
        assert!(state.possible_next_moves().contains(&mv));
    }

    #[test]
    fn test_seeded_engines_agree() {
        let state = TippyState::parse(Player::P2, &["_ _ _", "_ X _", "_ _ _"]).unwrap();
        let config = EngineConfig::new(StrategyKind::Memoize).with_seed(17);
        let a = Engine::new(config.clone()).suggest_move(&state).unwrap();
        let b = Engine::new(config).suggest_move(&state).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_names_strategy() {
        let engine: Engine<TippyState> = Engine::new(EngineConfig::new(StrategyKind::Minimax));
        assert!(format!("{:?}", engine).contains("minimax"));
    }
}
