//! Win condition checking for Tippy
//!
//! A player wins by owning all four cells of an S or Z tetromino anywhere
//! on the board. Shapes are matched from interior anchor cells only.

use crate::board::{Board, Mark, Pos};
use crate::eval::WIN_PATTERNS;

/// Find the cells of a winning shape owned by `mark`, if any.
///
/// Scans interior anchors in row-major order and returns the first match
/// as `[anchor, a, b, c]`.
pub fn find_win_shape(board: &Board, mark: Mark) -> Option<[Pos; 4]> {
    if mark == Mark::Empty {
        return None;
    }
    let size = board.size();
    for anchor in board.positions_of(mark) {
        if !anchor.is_interior(size) {
            continue;
        }
        for pattern in WIN_PATTERNS {
            let mut cells = [anchor; 4];
            let mut owned = true;
            for (slot, &(dr, dc)) in pattern.iter().enumerate() {
                // Interior anchors keep every offset on the board
                match anchor.offset(dr, dc, size) {
                    Some(p) if board.get(p) == mark => cells[slot + 1] = p,
                    _ => {
                        owned = false;
                        break;
                    }
                }
            }
            if owned {
                return Some(cells);
            }
        }
    }
    None
}

/// Check if `mark` owns a winning shape
#[inline]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    find_win_shape(board, mark).is_some()
}

/// The mark owning a winning shape, if any.
///
/// Legal play stops at the first win, so at most one side can ever
/// qualify on a reachable board; X is reported first otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O].into_iter().find(|&m| has_won(board, m))
}
