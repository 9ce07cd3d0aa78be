//! Tippy game engine
//!
//! Tippy is played on an N×N board: two players alternately claim empty
//! cells, and the first to own an S- or Z-shaped tetromino wins. A full
//! board without such a shape is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Shape tables and the static heuristic
//! - [`state`]: The [`GameState`] contract and the Tippy state
//! - [`search`]: Negamax strategies (exhaustive, memoized, depth-limited, alpha-beta)
//! - [`config`]: Strategy selection and TOML loading
//! - [`engine`]: Configured strategy with timing
//!
//! # Quick Start
//!
//! ```
//! use tippy::{Engine, EngineConfig, StrategyKind};
//! use tippy::state::{GameState, Player, TippyState};
//!
//! let mut state = TippyState::new(Player::P1, 3).unwrap();
//! let mut engine = Engine::new(EngineConfig::new(StrategyKind::Pruning).with_seed(1));
//!
//! while !state.is_over() {
//!     let mv = engine.suggest_move(&state).unwrap();
//!     state = state.apply_move(&mv).unwrap();
//! }
//! println!("{}", state);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod state;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, MAX_BOARD_SIZE};
pub use config::{ConfigError, EngineConfig, StrategyKind};
pub use engine::{Engine, MoveResult};
pub use search::{SearchError, SearchResult, Strategy};
pub use state::{GameError, GameState, Outcome, Player, TippyMove, TippyState};
