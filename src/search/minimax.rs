//! Exhaustive negamax
//!
//! Scores every reachable state down to the end of the game. Exact, and
//! exponential in the number of plies left.

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, instrument};

use crate::state::GameState;

use super::{search_root, SearchError, SearchResult, Strategy, TieBreaker};

/// Game-theoretic value of `state` for its player to move: -1, 0 or 1.
///
/// A finished state scores its `outcome`; any other state scores the best
/// negated value among its children. `nodes` is bumped once per state.
pub fn negamax<S: GameState>(state: &S, nodes: &mut u64) -> Result<i32, SearchError> {
    *nodes += 1;
    if state.is_over() {
        return Ok(state.outcome()?.value());
    }
    let mut best: Option<i32> = None;
    for mv in state.possible_next_moves() {
        let child = state.apply_move(&mv)?;
        let score = -negamax(&child, nodes)?;
        best = Some(best.map_or(score, |b| b.max(score)));
    }
    best.ok_or(SearchError::NoLegalMoves)
}

/// Full-depth negamax with random tie-breaking at the root.
#[derive(Debug, Clone)]
pub struct Minimax<R = SmallRng> {
    tie: TieBreaker<R>,
    nodes: u64,
}

impl Minimax<SmallRng> {
    pub fn new() -> Self {
        Self::with_tie_breaker(TieBreaker::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_tie_breaker(TieBreaker::seeded(seed))
    }
}

impl Default for Minimax<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Minimax<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_tie_breaker(TieBreaker::new(rng))
    }

    fn with_tie_breaker(tie: TieBreaker<R>) -> Self {
        Self { tie, nodes: 0 }
    }

    /// Exact value of `state` for its player to move
    pub fn value<S: GameState>(&mut self, state: &S) -> Result<i32, SearchError> {
        negamax(state, &mut self.nodes)
    }
}

impl<S: GameState, R: Rng> Strategy<S> for Minimax<R> {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip_all, fields(strategy = "minimax"))]
    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>, SearchError> {
        let Self { tie, nodes } = self;
        *nodes = 0;
        let (best_move, score, best_moves) =
            search_root(state, tie, |child| negamax(child, nodes).map(f64::from))?;

        debug!(%best_move, score, ties = best_moves.len(), nodes = *nodes, "minimax decision");
        Ok(SearchResult {
            best_move,
            score,
            best_moves,
            nodes: *nodes,
        })
    }
}
