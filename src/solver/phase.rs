//! Selection phases
//!
//! The selector picks its tactic from how many candidates remain and how many
//! turns are left.

use super::config::SolverConfig;
use std::fmt;

/// The tactic used for one selection
///
/// Classification uses cascading checks:
/// ```text
/// candidates == 1                          → SingleCandidate
/// one turn left                            → LastTurn
/// candidates <= endgame_threshold          → Endgame
/// no guesses yet and opening book enabled  → Opening
/// candidates <= candidate_pool_cap         → Full
/// else                                     → Degraded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// First guess taken from the opening book
    Opening,
    /// Exactly one candidate left, guess it
    SingleCandidate,
    /// Final turn, only candidates can still win
    LastTurn,
    /// Few candidates: rank the candidates only
    Endgame,
    /// Score the whole guess pool with the configured strategy
    Full,
    /// Candidate pool above the cap: configured fallback
    Degraded,
}

impl Phase {
    /// Classify a selection
    ///
    /// `turns_taken` is the history length and must be below `max_guesses`.
    #[must_use]
    pub const fn classify(
        config: &SolverConfig,
        num_candidates: usize,
        turns_taken: usize,
        has_opening: bool,
    ) -> Self {
        if num_candidates == 1 {
            Self::SingleCandidate
        } else if turns_taken + 1 >= config.max_guesses() {
            Self::LastTurn
        } else if num_candidates <= config.endgame_threshold() {
            Self::Endgame
        } else if turns_taken == 0 && has_opening {
            Self::Opening
        } else if num_candidates <= config.candidate_pool_cap() {
            Self::Full
        } else {
            Self::Degraded
        }
    }

    /// Whether the phase restricts guesses to the candidates
    #[must_use]
    pub const fn candidates_only(self) -> bool {
        matches!(self, Self::SingleCandidate | Self::LastTurn | Self::Endgame)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::SingleCandidate => "single candidate",
            Self::LastTurn => "last turn",
            Self::Endgame => "endgame",
            Self::Full => "full",
            Self::Degraded => "degraded",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
