//! Memoized negamax
//!
//! Same recursion as [`super::minimax`], but every scored state is stored
//! in a [`ScoreCache`] owned by the strategy. The cache survives between
//! calls, so a long game gets cheaper as more positions are seen.

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, instrument};

use crate::state::GameState;

use super::{search_root, CacheStats, ScoreCache, SearchError, SearchResult, Strategy, TieBreaker};

/// Negamax that consults and fills `cache`.
///
/// A cached key returns immediately; otherwise the state is scored exactly
/// as in [`super::minimax::negamax`] and stored if absent.
pub fn negamax_cached<S: GameState>(
    state: &S,
    cache: &mut ScoreCache<S::Key>,
    nodes: &mut u64,
) -> Result<i32, SearchError> {
    let key = state.key();
    if let Some(score) = cache.probe(&key) {
        return Ok(score);
    }
    *nodes += 1;

    let score = if state.is_over() {
        state.outcome()?.value()
    } else {
        let mut best: Option<i32> = None;
        for mv in state.possible_next_moves() {
            let child = state.apply_move(&mv)?;
            let score = -negamax_cached(&child, cache, nodes)?;
            best = Some(best.map_or(score, |b| b.max(score)));
        }
        best.ok_or(SearchError::NoLegalMoves)?
    };

    cache.insert_if_absent(key, score);
    Ok(score)
}

/// Exhaustive negamax with a private state-to-score cache.
///
/// The cache belongs to this instance alone; two instances never share
/// entries. Not safe for concurrent use without outside locking.
#[derive(Debug, Clone)]
pub struct MemoizedMinimax<S: GameState, R = SmallRng> {
    cache: ScoreCache<S::Key>,
    tie: TieBreaker<R>,
    nodes: u64,
}

impl<S: GameState> MemoizedMinimax<S, SmallRng> {
    pub fn new() -> Self {
        Self::with_tie_breaker(TieBreaker::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_tie_breaker(TieBreaker::seeded(seed))
    }
}

impl<S: GameState> Default for MemoizedMinimax<S, SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState, R: Rng> MemoizedMinimax<S, R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_tie_breaker(TieBreaker::new(rng))
    }

    fn with_tie_breaker(tie: TieBreaker<R>) -> Self {
        Self {
            cache: ScoreCache::new(),
            tie,
            nodes: 0,
        }
    }

    /// Exact value of `state` for its player to move, filling the cache
    pub fn value(&mut self, state: &S) -> Result<i32, SearchError> {
        negamax_cached(state, &mut self.cache, &mut self.nodes)
    }

    pub fn cache(&self) -> &ScoreCache<S::Key> {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Forget every cached score
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl<S: GameState, R: Rng> Strategy<S> for MemoizedMinimax<S, R> {
    fn name(&self) -> &'static str {
        "memoize"
    }

    #[instrument(skip_all, fields(strategy = "memoize"))]
    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>, SearchError> {
        let Self { cache, tie, nodes } = self;
        *nodes = 0;
        let (best_move, score, best_moves) = search_root(state, tie, |child| {
            negamax_cached(child, cache, nodes).map(f64::from)
        })?;
        // The root itself is now solved too
        cache.insert_if_absent(state.key(), score as i32);

        let stats = cache.stats();
        debug!(
            %best_move,
            score,
            ties = best_moves.len(),
            nodes = *nodes,
            entries = stats.entries,
            hit_rate = stats.hit_rate(),
            "memoized decision"
        );
        Ok(SearchResult {
            best_move,
            score,
            best_moves,
            nodes: *nodes,
        })
    }
}
