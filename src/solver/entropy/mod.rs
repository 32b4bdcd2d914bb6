//! Entropy-based guess evaluation
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, group_by_pattern, shannon_entropy,
};
