//! Tippy game state
//!
//! Players alternately mark an empty cell of an N×N board. P1 writes `X`,
//! P2 writes `O`; owning an S or Z tetromino wins.

use std::fmt;

use crate::board::{Board, Mark, Pos, MAX_BOARD_SIZE};
use crate::eval::evaluate;
use crate::rules::{check_winner, has_won};

use super::{GameError, GameState, Outcome, Player};

/// Claim one empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TippyMove {
    pub pos: Pos,
}

impl TippyMove {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self {
            pos: Pos::new(row, col),
        }
    }
}

impl From<Pos> for TippyMove {
    fn from(pos: Pos) -> Self {
        Self { pos }
    }
}

impl fmt::Display for TippyMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Place at row {}, column {}", self.pos.row, self.pos.col)
    }
}

/// One ply of a Tippy game.
///
/// `over` is computed once in the constructor. Equality and hashing cover
/// the board and the player to move, so a state is its own cache key.
#[derive(Debug, Clone)]
pub struct TippyState {
    board: Board,
    next_player: Player,
    over: bool,
}

impl TippyState {
    /// Empty board of the given side with `first` to move
    pub fn new(first: Player, size: usize) -> Result<Self, GameError> {
        let board = Board::new(size).ok_or(GameError::InvalidBoardSize {
            size,
            max: MAX_BOARD_SIZE,
        })?;
        Ok(Self::from_board(first, board))
    }

    /// Build a state from explicit rows of marks.
    ///
    /// Rows must form a non-empty square no larger than [`MAX_BOARD_SIZE`].
    pub fn from_rows(next_player: Player, rows: &[Vec<Mark>]) -> Result<Self, GameError> {
        let size = rows.len();
        let mut board = Board::new(size).ok_or(GameError::InvalidBoardSize {
            size,
            max: MAX_BOARD_SIZE,
        })?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GameError::MalformedBoard {
                    reason: format!("row {} has {} cells, expected {}", r, row.len(), size),
                });
            }
            for (c, &mark) in row.iter().enumerate() {
                if mark != Mark::Empty {
                    board.place(Pos::new(r as u8, c as u8), mark);
                }
            }
        }
        Ok(Self::from_board(next_player, board))
    }

    /// Parse rows written with `X`, `O` and `_` (spaces ignored), e.g. `"X _ O"`.
    pub fn parse(next_player: Player, rows: &[&str]) -> Result<Self, GameError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for row in rows {
            let mut marks = Vec::with_capacity(row.len());
            for ch in row.chars().filter(|c| !c.is_whitespace()) {
                marks.push(match ch {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    '_' | '.' => Mark::Empty,
                    other => {
                        return Err(GameError::MalformedBoard {
                            reason: format!("unexpected cell symbol {:?}", other),
                        })
                    }
                });
            }
            parsed.push(marks);
        }
        Self::from_rows(next_player, &parsed)
    }

    fn from_board(next_player: Player, board: Board) -> Self {
        let over = check_winner(&board).is_some() || board.is_full();
        Self {
            board,
            next_player,
            over,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// True iff `player` owns a winning shape
    #[inline]
    pub fn winner(&self, player: Player) -> bool {
        has_won(&self.board, player.mark())
    }

    /// Whether `mv` is one of the legal moves of this state
    #[inline]
    pub fn is_legal(&self, mv: &TippyMove) -> bool {
        self.board.is_empty(mv.pos)
    }
}

impl PartialEq for TippyState {
    fn eq(&self, other: &Self) -> bool {
        self.next_player == other.next_player && self.board == other.board
    }
}

impl Eq for TippyState {}

impl std::hash::Hash for TippyState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.next_player.hash(state);
        self.board.hash(state);
    }
}

impl GameState for TippyState {
    type Move = TippyMove;
    type Key = TippyState;

    #[inline]
    fn next_player(&self) -> Player {
        self.next_player
    }

    #[inline]
    fn is_over(&self) -> bool {
        self.over
    }

    fn outcome(&self) -> Result<Outcome, GameError> {
        if !self.over {
            return Err(GameError::NotOver);
        }
        Ok(if self.winner(self.next_player) {
            Outcome::Win
        } else if self.winner(self.next_player.opponent()) {
            Outcome::Lose
        } else {
            Outcome::Draw
        })
    }

    fn rough_outcome(&self) -> f64 {
        evaluate(&self.board, self.next_player.mark())
    }

    fn possible_next_moves(&self) -> Vec<TippyMove> {
        self.board.empty_positions().map(TippyMove::from).collect()
    }

    fn apply_move(&self, mv: &TippyMove) -> Result<Self, GameError> {
        if !self.is_legal(mv) {
            return Err(GameError::IllegalMove { mv: mv.to_string() });
        }
        let mut board = self.board.clone();
        board.place(mv.pos, self.next_player.mark());
        Ok(Self::from_board(self.next_player.opponent(), board))
    }

    fn key(&self) -> TippyState {
        self.clone()
    }
}

impl fmt::Display for TippyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "next player: {}", self.next_player)?;
        writeln!(f, "current game state:")?;
        write!(f, "{}", self.board)
    }
}
