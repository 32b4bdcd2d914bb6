//! Wordle solving algorithms
//!
//! Candidate filtering, entropy and statistical scoring, and the guess selector
//! that combines them under a [`SolverConfig`].

pub mod config;
mod engine;
pub mod entropy;
pub mod filter;
pub mod lookahead;
pub mod phase;
pub mod scoring;
mod session;
pub mod statistical;

pub use config::{ConfigError, Fallback, Preset, ScoringStrategy, SolverConfig, SolverConfigBuilder};
pub use engine::{EngineError, OPENING_BOOK, Recommendation, Solver, Suggestion, select_next_guess};
pub use filter::{filter_candidates, is_consistent, refine_candidates};
pub use phase::Phase;
pub use scoring::{ScoredGuess, score};
pub use session::{Session, SessionState};
pub use statistical::LetterStats;
