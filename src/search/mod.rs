//! Search module for Tippy AI
//!
//! Contains:
//! - Exhaustive negamax (`Minimax`)
//! - Negamax with a per-instance score cache (`MemoizedMinimax`)
//! - Depth-limited negamax falling back to the heuristic (`MyopicMinimax`)
//! - Negamax with alpha-beta pruning (`AlphaBeta`)
//!
//! Every strategy scores each root move from the mover's point of view and
//! picks uniformly at random among the moves tied for the best score.

pub mod alphabeta;
pub mod cache;
pub mod memo;
pub mod minimax;
pub mod myopic;

use derive_more::{Display, Error};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::state::{GameError, GameState};

pub use alphabeta::{AlphaBeta, PruneStats};
pub use cache::{CacheStats, ScoreCache};
pub use memo::MemoizedMinimax;
pub use minimax::Minimax;
pub use myopic::{MyopicMinimax, DEFAULT_MYOPIC_DEPTH};

/// Errors raised while choosing a move
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// Asked for a move in a finished game
    #[display("game is already over")]
    GameOver,
    /// The state offers nothing to play
    #[display("no legal moves available")]
    NoLegalMoves,
    /// A state operation failed during expansion
    #[display("game state error: {_0}")]
    Game(#[error(source)] GameError),
}

impl From<GameError> for SearchError {
    fn from(err: GameError) -> Self {
        SearchError::Game(err)
    }
}

/// Search result containing the chosen move and the tie set it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Move picked from `best_moves`
    pub best_move: M,
    /// Score of the best moves, relative to the player to move
    pub score: f64,
    /// Every root move that reached `score`, in move-generation order
    pub best_moves: Vec<M>,
    /// States scored during the call
    pub nodes: u64,
}

/// A move-selection policy.
pub trait Strategy<S: GameState> {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Score the root moves of `state` and pick one of the best.
    ///
    /// Fails with [`SearchError::GameOver`] on a finished game and with
    /// [`SearchError::NoLegalMoves`] when nothing can be played.
    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>, SearchError>;

    /// Suggest a strong move for the player to move
    fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        self.search(state).map(|result| result.best_move)
    }
}

/// Uniform random choice among equally scored moves.
///
/// Owns its random source so tests can pin the choice with a seed.
#[derive(Debug, Clone)]
pub struct TieBreaker<R = SmallRng> {
    rng: R,
}

impl TieBreaker<SmallRng> {
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TieBreaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick among the top-scoring moves.
    ///
    /// Returns the chosen move, the best score and every move tied at it,
    /// or `None` if `scored` is empty.
    pub fn pick<M: Clone>(&mut self, scored: Vec<(M, f64)>) -> Option<(M, f64, Vec<M>)> {
        let best = scored
            .iter()
            .map(|&(_, score)| score)
            .fold(f64::NEG_INFINITY, f64::max);
        let best_moves: Vec<M> = scored
            .into_iter()
            .filter(|&(_, score)| score == best)
            .map(|(mv, _)| mv)
            .collect();
        let chosen = best_moves.choose(&mut self.rng)?.clone();
        Some((chosen, best, best_moves))
    }
}

/// Shared root loop: score every legal move as `-child_value(child)` and
/// let `tie` choose among the best.
///
/// `child_value` reports the child's score from the child's mover's side.
pub(crate) fn search_root<S, R, F>(
    state: &S,
    tie: &mut TieBreaker<R>,
    mut child_value: F,
) -> Result<(S::Move, f64, Vec<S::Move>), SearchError>
where
    S: GameState,
    R: Rng,
    F: FnMut(&S) -> Result<f64, SearchError>,
{
    if state.is_over() {
        return Err(SearchError::GameOver);
    }
    let moves = state.possible_next_moves();
    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let child = state.apply_move(&mv)?;
        let score = -child_value(&child)?;
        scored.push((mv, score));
    }
    tie.pick(scored).ok_or(SearchError::NoLegalMoves)
}
