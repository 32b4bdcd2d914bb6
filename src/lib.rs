//! Wordle Helper
//!
//! A Wordle solving engine: a duplicate-aware feedback simulator, candidate
//! filtering, entropy and letter-frequency scoring, and a guess selector with
//! endgame rules and bounded-latency fallbacks.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{GuessRecord, Pattern, Word};
//! use wordle_helper::solver::{Solver, SolverConfig, Suggestion};
//!
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("erase").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "YXYYX");
//!
//! let pool: Vec<Word> = ["crane", "slate", "trace", "grate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let solver = Solver::new(&pool, &pool, SolverConfig::default()).unwrap();
//! let history = [GuessRecord::new(Word::new("crane").unwrap(), "YGGXG".parse().unwrap()).unwrap()];
//!
//! match solver.next_guess(&history).unwrap() {
//!     Suggestion::Guess(rec) => assert_eq!(rec.word.text(), "TRACE"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// String-level operations for host processes
pub mod api;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
