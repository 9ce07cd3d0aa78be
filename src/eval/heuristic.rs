//! Threat-count heuristic for Tippy positions
//!
//! Provides the cheap static estimate used when search is cut off before
//! the game ends. It compares:
//! - threats the side to move can convert on its very next ply
//! - double threats the opponent has already built, which one block cannot stop

use crate::board::{Board, Mark, Pos};

use super::patterns::{completions, ARM_PAIRS};

/// Threat tallies for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreatCount {
    /// Empty cells that would complete a shape for the side to move
    pub mover: u32,
    /// Opponent L-trominoes with both completions still open
    pub opponent: u32,
}

/// Count threats on `board` from the point of view of `mover`.
///
/// Every owned cell is treated as the corner of up to four L-trominoes,
/// edge cells included: the completed shape still has an interior middle
/// cell whenever all four of its cells are on the board. An L owned by the
/// mover scores one per empty completion cell; an L owned by the opponent
/// scores one only if both completion cells are empty.
#[must_use]
pub fn count_threats(board: &Board, mover: Mark) -> ThreatCount {
    let opponent = mover.opponent();
    let mut count = ThreatCount::default();

    for owner in [mover, opponent] {
        for corner in board.positions_of(owner) {
            for (u, v) in ARM_PAIRS {
                if !owns(board, corner, u, owner) || !owns(board, corner, v, owner) {
                    continue;
                }
                let open = completions(u, v)
                    .into_iter()
                    .filter(|&c| is_open(board, corner, c))
                    .count() as u32;
                if owner == mover {
                    count.mover += open;
                } else if open == 2 {
                    count.opponent += 1;
                }
            }
        }
    }

    count
}

/// Estimate the position for `mover`: `1.0` when the mover holds more
/// threats, `-1.0` when the opponent does, `0.0` on a tie.
#[must_use]
pub fn evaluate(board: &Board, mover: Mark) -> f64 {
    let threats = count_threats(board, mover);
    match threats.mover.cmp(&threats.opponent) {
        std::cmp::Ordering::Greater => 1.0,
        std::cmp::Ordering::Less => -1.0,
        std::cmp::Ordering::Equal => 0.0,
    }
}

#[inline]
fn owns(board: &Board, corner: Pos, (dr, dc): (i32, i32), mark: Mark) -> bool {
    corner
        .offset(dr, dc, board.size())
        .is_some_and(|p| board.get(p) == mark)
}

#[inline]
fn is_open(board: &Board, corner: Pos, (dr, dc): (i32, i32)) -> bool {
    corner
        .offset(dr, dc, board.size())
        .is_some_and(|p| board.is_empty(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                board.place(Pos::new(r as u8, c as u8), mark);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_is_even() {
        let board = Board::new(3).unwrap();
        assert_eq!(count_threats(&board, Mark::X), ThreatCount::default());
        assert_eq!(evaluate(&board, Mark::X), 0.0);
    }

    #[test]
    fn test_mover_with_open_completions_is_winning() {
        let board = board_from(&["_X_", "OXX", "OO_"]);
        let threats = count_threats(&board, Mark::X);
        assert_eq!(threats.mover, 2);
        assert_eq!(threats.opponent, 0);
        assert_eq!(evaluate(&board, Mark::X), 1.0);
    }

    #[test]
    fn test_single_opponent_threat_is_blockable() {
        let board = board_from(&["OXO", "XXX", "OO_"]);
        let threats = count_threats(&board, Mark::O);
        assert_eq!(threats.opponent, 0);
        assert_eq!(evaluate(&board, Mark::O), 0.0);
    }

    #[test]
    fn test_opponent_double_threat_is_losing() {
        let board = board_from(&["XO_", "OOX", "__X"]);
        let threats = count_threats(&board, Mark::X);
        assert_eq!(threats.mover, 0);
        assert_eq!(threats.opponent, 1);
        assert_eq!(evaluate(&board, Mark::X), -1.0);
    }

    #[test]
    fn test_evaluation_flips_with_perspective() {
        let board = board_from(&["_X_", "OXX", "OO_"]);
        // X has an L at (1,1) with both completions open: a double threat against O
        assert_eq!(evaluate(&board, Mark::O), -1.0);
    }

    #[test]
    fn test_edge_corner_threat_counts_for_mover() {
        // X wins at (1,2): L with its corner on the top edge at (0,1)
        let board = board_from(&["XX_", "_X_", "OOO"]);
        assert_eq!(
            count_threats(&board, Mark::X),
            ThreatCount {
                mover: 1,
                opponent: 0
            }
        );
        assert_eq!(evaluate(&board, Mark::X), 1.0);
    }

    #[test]
    fn test_edge_corners_on_larger_board() {
        // X: L cornered at (3,1) on the bottom edge, open at (2,2).
        // O: L cornered at (0,1) on the top edge, open at (1,2).
        let board = board_from(&["OO__", "_O__", "_X__", "XX__"]);
        assert_eq!(
            count_threats(&board, Mark::X),
            ThreatCount {
                mover: 1,
                opponent: 0
            }
        );
        assert_eq!(
            count_threats(&board, Mark::O),
            ThreatCount {
                mover: 1,
                opponent: 0
            }
        );
    }

    #[test]
    fn test_edge_corner_never_doubles() {
        // Completions of an L sit on opposite sides of its corner, so one
        // falls off the board when the corner is on the edge
        let board = board_from(&["____", "X___", "XX__", "____"]);
        assert_eq!(count_threats(&board, Mark::X).mover, 1);
        assert_eq!(count_threats(&board, Mark::O).opponent, 0);
        assert_eq!(evaluate(&board, Mark::O), 0.0);
    }
}
