//! Solver configuration
//!
//! `SolverConfig` is an immutable, validated value object. It is produced by
//! [`SolverConfigBuilder::build`], which rejects invalid values up front so the
//! selector never sees them. [`Preset`] names the stock value sets.

use crate::core::{DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How guesses are scored against the remaining candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringStrategy {
    /// Shannon entropy of the feedback distribution (expected bits of information)
    Entropy,
    /// Letter-frequency heuristic, cheaper than entropy
    Statistical,
}

/// Degradation path when the candidate pool is larger than `candidate_pool_cap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// Rank the guess pool statistically, then score only the top
    /// `max_candidates_scored` guesses with entropy
    Prefilter,
    /// Score the whole guess pool with the statistical heuristic only
    Statistical,
}

/// Named configuration value sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Tight caps, early exit and a wall-clock budget for interactive use
    ///
    /// The 150 ms budget cuts scans short on slow machines, so the chosen word
    /// can vary with timing. Clear it with
    /// [`SolverConfigBuilder::time_budget`]`(None)` for reproducible results.
    Fast,
    /// Default: full entropy over moderate pools, fully deterministic
    Balanced,
    /// High-accuracy mode: large caps, candidate preference and one ply of look-ahead
    Reference,
}

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("candidate pool cap must be at least 1")]
    ZeroCandidatePoolCap,
    #[error("endgame threshold must be at least 1")]
    ZeroEndgameThreshold,
    #[error("max candidates scored must be at least 1")]
    ZeroMaxCandidatesScored,
    #[error("max guesses must be at least 1")]
    ZeroMaxGuesses,
    #[error("look-ahead depth {0} is not supported (use 0 or 1)")]
    UnsupportedLookahead(u8),
    #[error("look-ahead width must be at least 1 when look-ahead is enabled")]
    ZeroLookaheadWidth,
    #[error("candidate epsilon must be a finite non-negative number, got {0}")]
    InvalidEpsilon(f64),
    #[error("early exit entropy must be a finite positive number, got {0}")]
    InvalidEarlyExit(f64),
    #[error("time budget must be non-zero")]
    ZeroTimeBudget,
    #[error("word length must be between 1 and {}, got {0}", MAX_WORD_LENGTH)]
    InvalidWordLength(usize),
    #[error("unknown preset '{0}' (expected fast, balanced or reference)")]
    UnknownPreset(String),
    #[error("unknown strategy '{0}' (expected entropy or statistical)")]
    UnknownStrategy(String),
}

/// Immutable solver settings
///
/// Governs selection policy only; the selector's structure is the same for every value.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    word_length: usize,
    strategy: ScoringStrategy,
    candidate_pool_cap: usize,
    endgame_threshold: usize,
    max_candidates_scored: usize,
    fallback: Fallback,
    lookahead_depth: u8,
    lookahead_width: usize,
    candidate_epsilon: f64,
    max_guesses: usize,
    use_opening_book: bool,
    early_exit_entropy: Option<f64>,
    time_budget: Option<Duration>,
    parallel: bool,
}

impl SolverConfig {
    /// Start a builder from the `Balanced` preset
    #[must_use]
    pub fn builder() -> SolverConfigBuilder {
        Preset::Balanced.builder()
    }

    /// Start a builder from this configuration's values
    #[must_use]
    pub fn to_builder(&self) -> SolverConfigBuilder {
        SolverConfigBuilder {
            config: self.clone(),
        }
    }

    /// Letters per word
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Scoring strategy used when the candidate pool is within the cap
    #[must_use]
    pub const fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    /// Candidate pool size above which the degradation path is taken
    #[must_use]
    pub const fn candidate_pool_cap(&self) -> usize {
        self.candidate_pool_cap
    }

    /// Candidate count at or below which guesses come straight from the candidates
    #[must_use]
    pub const fn endgame_threshold(&self) -> usize {
        self.endgame_threshold
    }

    /// Number of guesses refined with entropy on the prefilter path
    #[must_use]
    pub const fn max_candidates_scored(&self) -> usize {
        self.max_candidates_scored
    }

    /// Degradation path for oversize candidate pools
    #[must_use]
    pub const fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Look-ahead plies (0 or 1)
    #[must_use]
    pub const fn lookahead_depth(&self) -> u8 {
        self.lookahead_depth
    }

    /// Top-ranked guesses re-examined by the look-ahead
    #[must_use]
    pub const fn lookahead_width(&self) -> usize {
        self.lookahead_width
    }

    /// Score window within which a candidate word beats a non-candidate
    #[must_use]
    pub const fn candidate_epsilon(&self) -> f64 {
        self.candidate_epsilon
    }

    /// Turn budget of a game
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Whether a fresh game opens from the opening book
    #[must_use]
    pub const fn use_opening_book(&self) -> bool {
        self.use_opening_book
    }

    /// Entropy at which scanning stops early
    #[must_use]
    pub const fn early_exit_entropy(&self) -> Option<f64> {
        self.early_exit_entropy
    }

    /// Wall-clock budget for one selection
    #[must_use]
    pub const fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    /// Whether scoring runs on the rayon thread pool
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Preset::Balanced.config()
    }
}

/// Builder for [`SolverConfig`]
#[derive(Debug, Clone)]
pub struct SolverConfigBuilder {
    config: SolverConfig,
}

impl SolverConfigBuilder {
    #[must_use]
    pub const fn word_length(mut self, word_length: usize) -> Self {
        self.config.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn strategy(mut self, strategy: ScoringStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn candidate_pool_cap(mut self, cap: usize) -> Self {
        self.config.candidate_pool_cap = cap;
        self
    }

    #[must_use]
    pub const fn endgame_threshold(mut self, threshold: usize) -> Self {
        self.config.endgame_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn max_candidates_scored(mut self, max: usize) -> Self {
        self.config.max_candidates_scored = max;
        self
    }

    #[must_use]
    pub const fn fallback(mut self, fallback: Fallback) -> Self {
        self.config.fallback = fallback;
        self
    }

    #[must_use]
    pub const fn lookahead_depth(mut self, depth: u8) -> Self {
        self.config.lookahead_depth = depth;
        self
    }

    #[must_use]
    pub const fn lookahead_width(mut self, width: usize) -> Self {
        self.config.lookahead_width = width;
        self
    }

    #[must_use]
    pub const fn candidate_epsilon(mut self, epsilon: f64) -> Self {
        self.config.candidate_epsilon = epsilon;
        self
    }

    #[must_use]
    pub const fn max_guesses(mut self, max_guesses: usize) -> Self {
        self.config.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn use_opening_book(mut self, enabled: bool) -> Self {
        self.config.use_opening_book = enabled;
        self
    }

    #[must_use]
    pub const fn early_exit_entropy(mut self, bits: Option<f64>) -> Self {
        self.config.early_exit_entropy = bits;
        self
    }

    #[must_use]
    pub const fn time_budget(mut self, budget: Option<Duration>) -> Self {
        self.config.time_budget = budget;
        self
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Validate and freeze the configuration
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn build(self) -> Result<SolverConfig, ConfigError> {
        let c = self.config;

        if !(1..=MAX_WORD_LENGTH).contains(&c.word_length) {
            return Err(ConfigError::InvalidWordLength(c.word_length));
        }
        if c.candidate_pool_cap == 0 {
            return Err(ConfigError::ZeroCandidatePoolCap);
        }
        if c.endgame_threshold == 0 {
            return Err(ConfigError::ZeroEndgameThreshold);
        }
        if c.max_candidates_scored == 0 {
            return Err(ConfigError::ZeroMaxCandidatesScored);
        }
        if c.max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        if c.lookahead_depth > 1 {
            return Err(ConfigError::UnsupportedLookahead(c.lookahead_depth));
        }
        if c.lookahead_depth == 1 && c.lookahead_width == 0 {
            return Err(ConfigError::ZeroLookaheadWidth);
        }
        if !c.candidate_epsilon.is_finite() || c.candidate_epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(c.candidate_epsilon));
        }
        if let Some(bits) = c.early_exit_entropy
            && (!bits.is_finite() || bits <= 0.0)
        {
            return Err(ConfigError::InvalidEarlyExit(bits));
        }
        if c.time_budget.is_some_and(|budget| budget.is_zero()) {
            return Err(ConfigError::ZeroTimeBudget);
        }

        Ok(c)
    }
}

impl Preset {
    /// Every preset, in display order
    pub const ALL: [Self; 3] = [Self::Fast, Self::Balanced, Self::Reference];

    /// Preset name as accepted by `FromStr`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Reference => "reference",
        }
    }

    /// The preset's value set
    #[must_use]
    pub const fn config(self) -> SolverConfig {
        match self {
            Self::Fast => SolverConfig {
                word_length: DEFAULT_WORD_LENGTH,
                strategy: ScoringStrategy::Entropy,
                candidate_pool_cap: 100,
                endgame_threshold: 3,
                max_candidates_scored: 100,
                fallback: Fallback::Prefilter,
                lookahead_depth: 0,
                lookahead_width: 0,
                candidate_epsilon: 0.05,
                max_guesses: 6,
                use_opening_book: true,
                early_exit_entropy: Some(5.0),
                time_budget: Some(Duration::from_millis(150)),
                parallel: true,
            },
            Self::Balanced => SolverConfig {
                word_length: DEFAULT_WORD_LENGTH,
                strategy: ScoringStrategy::Entropy,
                candidate_pool_cap: 500,
                endgame_threshold: 2,
                max_candidates_scored: 300,
                fallback: Fallback::Prefilter,
                lookahead_depth: 0,
                lookahead_width: 0,
                candidate_epsilon: 0.05,
                max_guesses: 6,
                use_opening_book: true,
                early_exit_entropy: None,
                time_budget: None,
                parallel: true,
            },
            Self::Reference => SolverConfig {
                word_length: DEFAULT_WORD_LENGTH,
                strategy: ScoringStrategy::Entropy,
                candidate_pool_cap: 2500,
                endgame_threshold: 2,
                max_candidates_scored: 1000,
                fallback: Fallback::Prefilter,
                lookahead_depth: 1,
                lookahead_width: 10,
                candidate_epsilon: 0.1,
                max_guesses: 6,
                use_opening_book: true,
                early_exit_entropy: None,
                time_budget: None,
                parallel: true,
            },
        }
    }

    /// Start a builder from the preset's values
    #[must_use]
    pub const fn builder(self) -> SolverConfigBuilder {
        SolverConfigBuilder {
            config: self.config(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "balanced" | "default" => Ok(Self::Balanced),
            "reference" | "accurate" => Ok(Self::Reference),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Entropy => "entropy",
            Self::Statistical => "statistical",
        })
    }
}

impl FromStr for ScoringStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entropy" => Ok(Self::Entropy),
            "statistical" | "stats" | "frequency" => Ok(Self::Statistical),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for preset in Preset::ALL {
            let built = preset.builder().build();
            assert_eq!(built, Ok(preset.config()), "{preset}");
        }
    }

    #[test]
    fn default_is_balanced() {
        assert_eq!(SolverConfig::default(), Preset::Balanced.config());
        assert_eq!(SolverConfig::default().word_length(), 5);
    }

    #[test]
    fn rejects_zero_caps() {
        assert_eq!(
            SolverConfig::builder().candidate_pool_cap(0).build(),
            Err(ConfigError::ZeroCandidatePoolCap)
        );
        assert_eq!(
            SolverConfig::builder().endgame_threshold(0).build(),
            Err(ConfigError::ZeroEndgameThreshold)
        );
        assert_eq!(
            SolverConfig::builder().max_candidates_scored(0).build(),
            Err(ConfigError::ZeroMaxCandidatesScored)
        );
        assert_eq!(
            SolverConfig::builder().max_guesses(0).build(),
            Err(ConfigError::ZeroMaxGuesses)
        );
    }

    #[test]
    fn rejects_bad_lookahead() {
        assert_eq!(
            SolverConfig::builder().lookahead_depth(2).build(),
            Err(ConfigError::UnsupportedLookahead(2))
        );
        assert_eq!(
            SolverConfig::builder()
                .lookahead_depth(1)
                .lookahead_width(0)
                .build(),
            Err(ConfigError::ZeroLookaheadWidth)
        );
    }

    #[test]
    fn rejects_bad_floats_and_budgets() {
        assert!(matches!(
            SolverConfig::builder().candidate_epsilon(-0.1).build(),
            Err(ConfigError::InvalidEpsilon(_))
        ));
        assert!(matches!(
            SolverConfig::builder().candidate_epsilon(f64::NAN).build(),
            Err(ConfigError::InvalidEpsilon(_))
        ));
        assert!(matches!(
            SolverConfig::builder().early_exit_entropy(Some(0.0)).build(),
            Err(ConfigError::InvalidEarlyExit(_))
        ));
        assert_eq!(
            SolverConfig::builder()
                .time_budget(Some(Duration::ZERO))
                .build(),
            Err(ConfigError::ZeroTimeBudget)
        );
        assert_eq!(
            SolverConfig::builder().word_length(0).build(),
            Err(ConfigError::InvalidWordLength(0))
        );
    }

    #[test]
    fn only_fast_preset_is_timed() {
        let timed: Vec<Preset> = Preset::ALL
            .into_iter()
            .filter(|p| p.config().time_budget().is_some())
            .collect();
        assert_eq!(timed, [Preset::Fast]);
        assert!(Preset::Fast.builder().time_budget(None).build().unwrap().time_budget().is_none());
    }

    #[test]
    fn builder_overrides_preset_values() {
        let config = Preset::Reference
            .builder()
            .strategy(ScoringStrategy::Statistical)
            .endgame_threshold(4)
            .build()
            .unwrap();

        assert_eq!(config.strategy(), ScoringStrategy::Statistical);
        assert_eq!(config.endgame_threshold(), 4);
        assert_eq!(config.lookahead_depth(), 1);

        let again = config.to_builder().build().unwrap();
        assert_eq!(again, config);
    }

    #[test]
    fn names_parse() {
        assert_eq!("FAST".parse::<Preset>(), Ok(Preset::Fast));
        assert_eq!("reference".parse::<Preset>(), Ok(Preset::Reference));
        assert!(matches!(
            "turbo".parse::<Preset>(),
            Err(ConfigError::UnknownPreset(_))
        ));
        assert_eq!(
            "stats".parse::<ScoringStrategy>(),
            Ok(ScoringStrategy::Statistical)
        );
        assert!("minimax".parse::<ScoringStrategy>().is_err());
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
    }
}
