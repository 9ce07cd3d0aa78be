//! Evaluation module for Tippy
//!
//! Contains the winning shape tables and the static threat heuristic.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{count_threats, evaluate, ThreatCount};
pub use patterns::{completions, Offset, ARM_PAIRS, WIN_PATTERNS};
