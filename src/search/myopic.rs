//! Depth-limited ("myopic") negamax
//!
//! Searches a fixed number of plies below each root move, then falls back
//! to the state's `rough_outcome`. Bounded cost, no optimality guarantee.

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, instrument};

use crate::state::GameState;

use super::{search_root, SearchError, SearchResult, Strategy, TieBreaker};

/// Plies searched below each root move when nothing else is configured
pub const DEFAULT_MYOPIC_DEPTH: u32 = 3;

/// Negamax value of `state` with `depth` plies left.
///
/// Finished states always score their exact `outcome`; unfinished states
/// at depth zero score their `rough_outcome`.
pub fn negamax_limited<S: GameState>(
    state: &S,
    depth: u32,
    nodes: &mut u64,
) -> Result<f64, SearchError> {
    *nodes += 1;
    if state.is_over() {
        return Ok(state.outcome()?.as_f64());
    }
    if depth == 0 {
        return Ok(state.rough_outcome());
    }
    let mut best: Option<f64> = None;
    for mv in state.possible_next_moves() {
        let child = state.apply_move(&mv)?;
        let score = -negamax_limited(&child, depth - 1, nodes)?;
        best = Some(best.map_or(score, |b| b.max(score)));
    }
    best.ok_or(SearchError::NoLegalMoves)
}

/// Depth-limited negamax with random tie-breaking at the root.
#[derive(Debug, Clone)]
pub struct MyopicMinimax<R = SmallRng> {
    tie: TieBreaker<R>,
    depth: u32,
    nodes: u64,
}

impl MyopicMinimax<SmallRng> {
    pub fn new() -> Self {
        Self::with_tie_breaker(TieBreaker::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_tie_breaker(TieBreaker::seeded(seed))
    }
}

impl Default for MyopicMinimax<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MyopicMinimax<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_tie_breaker(TieBreaker::new(rng))
    }

    fn with_tie_breaker(tie: TieBreaker<R>) -> Self {
        Self {
            tie,
            depth: DEFAULT_MYOPIC_DEPTH,
            nodes: 0,
        }
    }

    /// Set the plies searched below each root move
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Estimated value of `state` with `depth` plies left
    pub fn value<S: GameState>(&mut self, state: &S, depth: u32) -> Result<f64, SearchError> {
        negamax_limited(state, depth, &mut self.nodes)
    }
}

impl<S: GameState, R: Rng> Strategy<S> for MyopicMinimax<R> {
    fn name(&self) -> &'static str {
        "myopic"
    }

    #[instrument(skip_all, fields(strategy = "myopic", depth = self.depth))]
    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>, SearchError> {
        let Self { tie, depth, nodes } = self;
        *nodes = 0;
        let depth = *depth;
        let (best_move, score, best_moves) =
            search_root(state, tie, |child| negamax_limited(child, depth, nodes))?;

        debug!(%best_move, score, ties = best_moves.len(), nodes = *nodes, "myopic decision");
        Ok(SearchResult {
            best_move,
            score,
            best_moves,
            nodes: *nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax::negamax;
    use crate::state::{Player, TippyMove, TippyState};

    #[test]
    fn test_default_depth() {
        assert_eq!(MyopicMinimax::with_seed(0).depth(), 3);
        assert_eq!(MyopicMinimax::with_seed(0).with_depth(5).depth(), 5);
    }

    #[test]
    fn test_depth_zero_uses_heuristic() {
        let state = TippyState::parse(Player::P1, &["_ X _", "O X X", "O O _"]).unwrap();
        let mut nodes = 0;
        assert_eq!(negamax_limited(&state, 0, &mut nodes).unwrap(), 1.0);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_terminal_beats_heuristic() {
        let state = TippyState::parse(Player::P1, &["X O X", "O O X", "O _ X"]).unwrap();
        let mut nodes = 0;
        assert_eq!(negamax_limited(&state, 0, &mut nodes).unwrap(), -1.0);
    }

    #[test]
    fn test_deep_enough_matches_exhaustive() {
        let state = TippyState::parse(Player::P2, &["X _ O", "_ X _", "_ _ X"]).unwrap();
        let mut nodes = 0;
        let exact = negamax(&state, &mut nodes).unwrap();
        // 5 empty cells: depth 5 always reaches the end of the game
        let mut limited_nodes = 0;
        let limited = negamax_limited(&state, 5, &mut limited_nodes).unwrap();
        assert_eq!(limited, f64::from(exact));
    }

    #[test]
    fn test_scores_stay_in_range() {
        let state = TippyState::new(Player::P1, 4).unwrap();
        let mut strategy = MyopicMinimax::with_seed(11).with_depth(1);
        let result = strategy.search(&state).unwrap();
        assert!((-1.0..=1.0).contains(&result.score));
        assert_eq!(result.nodes, 16 + 16 * 15);
    }

    #[test]
    fn test_takes_immediate_win() {
        let state = TippyState::parse(Player::P1, &["X O _", "X X O", "_ _ O"]).unwrap();
        let mut strategy = MyopicMinimax::with_seed(4);
        let result = strategy.search(&state).unwrap();
        assert_eq!(result.score, 1.0);
        assert!(result.best_moves.contains(&TippyMove::new(2, 1)));
    }
}
