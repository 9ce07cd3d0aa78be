//! Game-state abstraction consumed by the search engine
//!
//! Any two-player, perfect-information game plugs into the strategies in
//! [`crate::search`] by implementing [`GameState`]. [`TippyState`] is the
//! one implementation shipped here.

pub mod tippy;

use std::fmt;
use std::hash::Hash;
use std::ops::Neg;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::board::Mark;

pub use tippy::{TippyMove, TippyState};

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[display("p1")]
    P1,
    #[display("p2")]
    P2,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// The mark this player writes on the board
    #[inline]
    pub fn mark(self) -> Mark {
        match self {
            Player::P1 => Mark::X,
            Player::P2 => Mark::O,
        }
    }
}

/// Final result of a game, relative to the player about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Outcome {
    #[display("lose")]
    Lose = -1,
    #[display("draw")]
    Draw = 0,
    #[display("win")]
    Win = 1,
}

impl Outcome {
    /// Integer score: -1, 0 or 1
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }
}

impl Neg for Outcome {
    type Output = Outcome;

    fn neg(self) -> Outcome {
        match self {
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Lose,
        }
    }
}

/// Errors raised by game-state operations
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The move is not among the legal moves of the state
    #[display("illegal move: {mv}")]
    IllegalMove { mv: String },
    /// `outcome` was asked of a game still in progress
    #[display("outcome requested before the game is over")]
    NotOver,
    /// Board side outside the supported range
    #[display("unsupported board size {size} (expected 1..={max})")]
    InvalidBoardSize { size: usize, max: usize },
    /// Explicit board rows that do not form a square
    #[display("malformed board: {reason}")]
    MalformedBoard { reason: String },
}

/// One ply of a two-player game.
///
/// States are immutable: `apply_move` returns a fresh child and never
/// touches `self`, so a state can be shared freely between strategies.
/// All scores are relative to [`GameState::next_player`].
pub trait GameState: Clone + fmt::Display {
    /// A single legal action
    type Move: Clone + PartialEq + fmt::Debug + fmt::Display;
    /// Collision-free canonical form used as a cache key
    type Key: Clone + Eq + Hash;

    /// The player about to move
    fn next_player(&self) -> Player;

    /// True iff the game has ended; fixed when the state is built
    fn is_over(&self) -> bool;

    /// Result for `next_player`.
    ///
    /// Returns [`GameError::NotOver`] when the game is still in progress.
    fn outcome(&self) -> Result<Outcome, GameError>;

    /// Fast static estimate in `[-1.0, 1.0]` for `next_player`
    fn rough_outcome(&self) -> f64;

    /// All legal moves in a deterministic order
    fn possible_next_moves(&self) -> Vec<Self::Move>;

    /// The state reached by playing `mv`.
    ///
    /// Returns [`GameError::IllegalMove`] if `mv` is not legal here.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self, GameError>;

    /// Canonical cache key (player to move plus position)
    fn key(&self) -> Self::Key;
}
