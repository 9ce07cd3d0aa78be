//! Game rules for Tippy
//!
//! Players alternately mark any empty cell; the first to own an S or Z
//! tetromino wins. A full board with no shape is a draw.

pub mod win;

pub use win::{check_winner, find_win_shape, has_won};
