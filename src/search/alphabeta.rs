//! Negamax with alpha-beta pruning
//!
//! Gives the same root scores as [`super::minimax`] for every move tied for
//! the best, while skipping subtrees that cannot change the decision.
//!
//! # Example
//!
//! ```
//! use tippy::search::{AlphaBeta, Strategy};
//! use tippy::state::{Player, TippyState};
//!
//! let state = TippyState::parse(Player::P1, &["X O _", "X X O", "_ _ O"]).unwrap();
//! let mut searcher = AlphaBeta::with_seed(7);
//! let result = searcher.search(&state).unwrap();
//! assert_eq!(result.score, 1.0);
//! assert_eq!(result.best_move.to_string(), "Place at row 2, column 1");
//! ```

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, instrument};

use crate::state::{GameState, Outcome};

use super::{search_root, SearchError, SearchResult, Strategy, TieBreaker};

/// Counters for one pruned search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PruneStats {
    /// States visited
    pub nodes: u64,
    /// Beta cutoffs (fail-high)
    pub cutoffs: u64,
}

/// Fail-hard negamax over the window `[alpha, beta]`.
///
/// The result is exact when it lies strictly inside the window. Otherwise
/// it is a bound: `<= alpha` means the state is worth at most `alpha`,
/// `>= beta` means at least `beta`.
pub fn negamax_pruned<S: GameState>(
    state: &S,
    alpha: i32,
    beta: i32,
    stats: &mut PruneStats,
) -> Result<i32, SearchError> {
    stats.nodes += 1;
    if state.is_over() {
        return Ok(state.outcome()?.value());
    }
    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut best = alpha;
    for mv in moves {
        let child = state.apply_move(&mv)?;
        let score = -negamax_pruned(&child, -beta, -best, stats)?;
        if score > best {
            best = score;
            if best >= beta {
                stats.cutoffs += 1;
                return Ok(best);
            }
        }
    }
    Ok(best)
}

/// Alpha-beta negamax with random tie-breaking at the root.
#[derive(Debug, Clone)]
pub struct AlphaBeta<R = SmallRng> {
    tie: TieBreaker<R>,
    stats: PruneStats,
}

impl AlphaBeta<SmallRng> {
    pub fn new() -> Self {
        Self::with_tie_breaker(TieBreaker::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_tie_breaker(TieBreaker::seeded(seed))
    }
}

impl Default for AlphaBeta<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AlphaBeta<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_tie_breaker(TieBreaker::new(rng))
    }

    fn with_tie_breaker(tie: TieBreaker<R>) -> Self {
        Self {
            tie,
            stats: PruneStats::default(),
        }
    }

    /// Value of `state` searched over `[alpha, beta]`.
    ///
    /// With the full window `[-1, 1]` this is the exact negamax value.
    pub fn value<S: GameState>(
        &mut self,
        state: &S,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchError> {
        negamax_pruned(state, alpha, beta, &mut self.stats)
    }

    /// Counters from the last `search` plus any `value` calls since
    pub fn stats(&self) -> PruneStats {
        self.stats
    }
}

impl<S: GameState, R: Rng> Strategy<S> for AlphaBeta<R> {
    fn name(&self) -> &'static str {
        "pruning"
    }

    #[instrument(skip_all, fields(strategy = "pruning"))]
    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>, SearchError> {
        let Self { tie, stats } = self;
        *stats = PruneStats::default();

        // Root scores at or below `floor` cannot be among the best. Keeping
        // it one below the best so far scores every tied move exactly.
        let mut floor = Outcome::Lose.value() - 1;
        let win = Outcome::Win.value();
        let (best_move, score, best_moves) = search_root(state, tie, |child| {
            let child_value = negamax_pruned(child, -win, -floor, stats)?;
            floor = floor.max(-child_value - 1);
            Ok(f64::from(child_value))
        })?;

        debug!(
            %best_move,
            score,
            ties = best_moves.len(),
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "pruned decision"
        );
        Ok(SearchResult {
            best_move,
            score,
            best_moves,
            nodes: stats.nodes,
        })
    }
}
