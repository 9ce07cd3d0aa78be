//! Square board holding one bitboard per mark

use std::fmt;

use super::bitboard::Bitboard;
use super::{Mark, Pos, MAX_BOARD_SIZE};

/// N×N Tippy board.
///
/// Cells are only ever filled, never cleared: the game has no captures and
/// no undo, so a board only grows by one mark per ply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// X marks (first player)
    x: Bitboard,
    /// O marks (second player)
    o: Bitboard,
}

impl Board {
    /// Empty board with the given side.
    ///
    /// Returns `None` when `size` is zero or exceeds [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Option<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return None;
        }
        Some(Self {
            size: size as u8,
            x: Bitboard::new(),
            o: Bitboard::new(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size() && (pos.col as usize) < self.size()
    }

    /// Get mark at position. Off-board positions read as `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if !self.contains(pos) {
            return Mark::Empty;
        }
        let idx = pos.to_index(self.size());
        if self.x.get(idx) {
            Mark::X
        } else if self.o.get(idx) {
            Mark::O
        } else {
            Mark::Empty
        }
    }

    /// Check if position is on the board and unmarked
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.get(pos) == Mark::Empty
    }

    /// Place a mark. The caller guarantees the cell is on the board and empty.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.is_empty(pos));
        let idx = pos.to_index(self.size());
        match mark {
            Mark::X => self.x.set(idx),
            Mark::O => self.o.set(idx),
            Mark::Empty => {}
        }
    }

    /// Get bitboard for a mark (returns None for Empty)
    #[inline]
    pub fn marks(&self, mark: Mark) -> Option<&Bitboard> {
        match mark {
            Mark::X => Some(&self.x),
            Mark::O => Some(&self.o),
            Mark::Empty => None,
        }
    }

    /// Positions holding the given mark, row-major
    pub fn positions_of(&self, mark: Mark) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size();
        self.marks(mark)
            .into_iter()
            .flat_map(|bb| bb.iter_ones())
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Empty positions, row-major
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size();
        (0..size * size)
            .filter(move |&idx| !self.x.get(idx) && !self.o.get(idx))
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() as usize == self.size() * self.size()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                write!(f, "{} ", self.get(Pos::new(row, col)).symbol())?;
            }
        }
        Ok(())
    }
}
