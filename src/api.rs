//! String-level operations for host processes
//!
//! Everything here takes and returns plain strings: words as letters in any case,
//! feedback as one `G`/`Y`/`X` symbol per letter. Input is validated once at this
//! boundary and converted to the typed core.

use crate::core::{GuessRecord, Pattern, Word};
use crate::solver::{
    ConfigError, EngineError, Preset, ScoringStrategy, Solver, SolverConfig, Suggestion,
    filter_candidates,
};

/// Feedback code for `guess` played against `target`
///
/// # Errors
/// Returns an error if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_helper::api::simulate_guess_pattern;
///
/// assert_eq!(simulate_guess_pattern("speed", "erase").unwrap(), "YXYYX");
/// ```
pub fn simulate_guess_pattern(guess: &str, target: &str) -> Result<String, EngineError> {
    let guess = Word::parse(guess)?;
    let target = Word::with_length(target, guess.length())?;
    Ok(Pattern::calculate(&guess, &target).to_string())
}

/// Words from `words` consistent with every `(guess, code)` pair, in input order
///
/// # Errors
/// Returns an error for an invalid word or code, or when lengths disagree.
pub fn filter_words(
    words: &[impl AsRef<str>],
    history: &[(impl AsRef<str>, impl AsRef<str>)],
) -> Result<Vec<String>, EngineError> {
    let history = parse_history(history)?;
    let length = history
        .first()
        .map_or_else(|| infer_length(words), |r| Ok(r.guess().length()))?;
    let pool = parse_words(words, length)?;

    Ok(filter_candidates(&pool, &history)
        .into_iter()
        .map(|w| w.text().to_string())
        .collect())
}

/// Best next guess for the history under `config`
///
/// # Errors
/// Returns an error for empty pools or malformed words, codes or lengths.
pub fn get_best_guess(
    answers: &[impl AsRef<str>],
    guesses: &[impl AsRef<str>],
    history: &[(impl AsRef<str>, impl AsRef<str>)],
    config: &SolverConfig,
) -> Result<Suggestion, EngineError> {
    let answers = parse_words(answers, config.word_length())?;
    let guesses = parse_words(guesses, config.word_length())?;
    let history = parse_history(history)?;

    Solver::new(&answers, &guesses, config.clone())?.next_guess(&history)
}

/// The stock presets with their value sets
#[must_use]
pub fn configuration_presets() -> Vec<(Preset, SolverConfig)> {
    Preset::ALL.iter().map(|&p| (p, p.config())).collect()
}

/// Build a configuration from a preset name and an optional strategy override
///
/// # Errors
/// Returns an error for an unknown preset or strategy name.
pub fn set_configuration(
    preset: &str,
    strategy: Option<&str>,
) -> Result<SolverConfig, ConfigError> {
    let mut builder = preset.parse::<Preset>()?.builder();
    if let Some(name) = strategy {
        builder = builder.strategy(name.parse::<ScoringStrategy>()?);
    }
    builder.build()
}

/// Whether `word` is a valid word present in `pool`
#[must_use]
pub fn is_valid_word(word: &str, pool: &[Word]) -> bool {
    Word::parse(word).is_ok_and(|w| pool.contains(&w))
}

fn parse_words(words: &[impl AsRef<str>], length: usize) -> Result<Vec<Word>, EngineError> {
    words
        .iter()
        .map(|w| Word::with_length(w.as_ref(), length).map_err(EngineError::from))
        .collect()
}

fn infer_length(words: &[impl AsRef<str>]) -> Result<usize, EngineError> {
    match words.first() {
        Some(first) => Ok(Word::parse(first.as_ref())?.length()),
        None => Ok(0),
    }
}

/// Parse `(guess, code)` pairs; every guess must share the first guess's length
fn parse_history(
    history: &[(impl AsRef<str>, impl AsRef<str>)],
) -> Result<Vec<GuessRecord>, EngineError> {
    let records = history
        .iter()
        .map(|(guess, code)| -> Result<GuessRecord, EngineError> {
            let guess = Word::parse(guess.as_ref())?;
            let pattern = Pattern::parse(code.as_ref(), guess.length())?;
            GuessRecord::new(guess, pattern).map_err(EngineError::from)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(first) = records.first() {
        let expected = first.guess().length();
        if let Some(record) = records.iter().find(|r| r.guess().length() != expected) {
            return Err(EngineError::LengthMismatch {
                what: "guess",
                text: record.guess().text().to_string(),
                expected,
                actual: record.guess().length(),
            });
        }
    }
    Ok(records)
}
