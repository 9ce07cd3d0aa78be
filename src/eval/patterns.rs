//! Shape tables for Tippy
//!
//! Every winning shape is an S or Z tetromino. Anchoring a shape at one of
//! its two middle cells gives eight oriented offset sets; an anchor must be
//! an interior cell so that all offsets stay on the board.

/// (row, col) offset from an anchor cell
pub type Offset = (i32, i32);

/// The three non-anchor cells of each winning shape, relative to the anchor.
pub const WIN_PATTERNS: [[Offset; 3]; 8] = [
    // Vertical, anchor in the right column
    [(0, -1), (1, 0), (-1, -1)],
    [(0, -1), (-1, 0), (1, -1)],
    // Vertical, anchor in the left column
    [(-1, 0), (0, 1), (1, 1)],
    [(-1, 1), (0, 1), (1, 0)],
    // Horizontal, anchor in the top row
    [(-1, 0), (-1, 1), (0, -1)],
    [(1, 0), (1, 1), (0, -1)],
    // Horizontal, anchor in the bottom row
    [(-1, 0), (-1, -1), (0, 1)],
    [(1, 0), (1, -1), (0, 1)],
];

/// Orthogonal arm pairs `(u, v)` around an L-tromino corner: N/E, E/S, S/W, W/N.
///
/// An L made of a corner `a` and arms `a + u`, `a + v` extends to exactly two
/// winning shapes, completed at `a + v - u` and `a + u - v`.
pub const ARM_PAIRS: [(Offset, Offset); 4] = [
    ((-1, 0), (0, 1)),
    ((0, 1), (1, 0)),
    ((1, 0), (0, -1)),
    ((0, -1), (-1, 0)),
];

/// The two cells that complete the L with arms `u` and `v` into a winning shape.
#[inline]
pub const fn completions(u: Offset, v: Offset) -> [Offset; 2] {
    [(v.0 - u.0, v.1 - u.1), (u.0 - v.0, u.1 - v.1)]
}
