//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, gray)
//! - 1 = Present (letter in word, wrong position, yellow)
//! - 2 = Correct (letter in correct position, green)
//!
//! The pattern is stored as a single `u32` code where each position contributes
//! digit × 3^position, together with the puzzle length it was produced for.

use super::Word;
use super::word::{ALPHABET_SIZE, MAX_WORD_LENGTH, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Per-letter feedback
///
/// The derived ordering (Correct > Present > Absent) is only meaningful for display;
/// the engine treats the states as an unordered tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Base-3 digit used in the pattern code
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Compact feedback symbol: `G`, `Y` or `X`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Colored square for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `X`/`x`/`-`/`_`/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for malformed feedback codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("feedback '{code}' has {actual} positions, expected {expected}")]
    InvalidLength {
        code: String,
        expected: usize,
        actual: usize,
    },
    #[error("feedback '{code}' contains unknown symbol {symbol:?} (use G, Y or X)")]
    InvalidSymbol { code: String, symbol: char },
    #[error("feedback must have between 1 and {} positions, got {0}", MAX_WORD_LENGTH)]
    UnsupportedLength(usize),
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// All-correct pattern for a puzzle of `length` letters
    ///
    /// # Panics
    /// Panics in debug mode if `length` is zero or above `MAX_WORD_LENGTH`
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        debug_assert!((1..=MAX_WORD_LENGTH).contains(&length));
        let code = (0..length).fold(0, |acc, i| acc + 2 * 3u32.pow(i as u32));
        Self {
            code,
            len: length as u8,
        }
    }

    /// Build a pattern from explicit per-position states
    ///
    /// # Errors
    /// Returns `PatternError::UnsupportedLength` for an empty or oversize slice.
    pub fn from_states(states: &[LetterState]) -> Result<Self, PatternError> {
        if states.is_empty() || states.len() > MAX_WORD_LENGTH {
            return Err(PatternError::UnsupportedLength(states.len()));
        }
        Ok(Self::encode(states))
    }

    fn encode(states: &[LetterState]) -> Self {
        let mut code = 0u32;
        let mut multiplier = 1u32;
        for state in states {
            code += state.digit() * multiplier;
            multiplier *= 3;
        }
        Self {
            code,
            len: states.len() as u8,
        }
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.len as usize
    }

    /// Check if this is a perfect match (all correct)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::perfect(self.length())
    }

    /// Feedback at one position
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[must_use]
    pub fn state_at(self, position: usize) -> LetterState {
        assert!(position < self.length(), "position out of range");
        LetterState::from_digit(self.code / 3u32.pow(position as u32) % 3)
    }

    /// Iterate feedback from the first to the last position
    pub fn states(self) -> impl Iterator<Item = LetterState> {
        let mut val = self.code;
        (0..self.length()).map(move |_| {
            let state = LetterState::from_digit(val % 3);
            val /= 3;
            state
        })
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the answer's letter pool
    /// 2. Second pass: mark present-but-misplaced letters from what remains in the pool
    /// 3. Encode as base-3 number
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Word, Pattern};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "YXYYX");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.length(), answer.length(), "word lengths differ");

        let guess_bytes = guess.as_bytes();
        let answer_bytes = answer.as_bytes();
        let mut result = [LetterState::Absent; MAX_WORD_LENGTH];
        let mut available: [u8; ALPHABET_SIZE] = *answer.letter_counts();

        // Greens must be consumed before any yellow is considered
        for (i, (&g, &a)) in guess_bytes.iter().zip(answer_bytes).enumerate() {
            if g == a {
                result[i] = LetterState::Correct;
                available[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess_bytes.iter().enumerate() {
            if result[i] == LetterState::Correct {
                continue;
            }
            let slot = &mut available[letter_index(g)];
            if *slot > 0 {
                result[i] = LetterState::Present;
                *slot -= 1;
            }
        }

        Self::encode(&result[..guess.length()])
    }

    /// Count the number of correct (green) squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.states().filter(|&s| s == LetterState::Correct).count()
    }

    /// Count the number of present (yellow) squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.states().filter(|&s| s == LetterState::Present).count()
    }

    /// Parse a feedback code that must have exactly `length` positions
    ///
    /// # Errors
    /// Returns `PatternError` on a length mismatch or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GX", 5).unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩⬜", 5).unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYG", 5).is_err());
    /// ```
    pub fn parse(code: &str, length: usize) -> Result<Self, PatternError> {
        let pattern: Self = code.parse()?;
        if pattern.length() != length {
            return Err(PatternError::InvalidLength {
                code: code.trim().to_string(),
                expected: length,
                actual: pattern.length(),
            });
        }
        Ok(pattern)
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.states().map(LetterState::emoji).collect()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let states = code
            .chars()
            .map(|ch| {
                LetterState::from_symbol(ch).ok_or_else(|| PatternError::InvalidSymbol {
                    code: code.to_string(),
                    symbol: ch,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_states(&states)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn simulate(guess: &str, answer: &str) -> String {
        let guess = Word::parse(guess).unwrap();
        let answer = Word::parse(answer).unwrap();
        Pattern::calculate(&guess, &answer).to_string()
    }

    #[test_case("speed", "erase", "YXYYX" ; "speed vs erase never double counts e")]
    #[test_case("robot", "floor", "YYXGX" ; "green o consumes before yellow o")]
    #[test_case("crane", "slate", "XXGXG" ; "classic crane slate")]
    #[test_case("crane", "crate", "GGGXG" ; "single miss")]
    #[test_case("crane", "trace", "YGGXG" ; "end to end fixture")]
    #[test_case("eerie", "there", "YXYXG" ; "three e guess against two e answer")]
    #[test_case("geese", "eerie", "XGYXG" ; "surplus e stays absent")]
    #[test_case("llama", "hello", "YYXXX" ; "two l both present")]
    #[test_case("abbey", "kebab", "YYGYX" ; "duplicates on both sides")]
    #[test_case("zzzzz", "pizza", "XXGGX" ; "greens exhaust the pool")]
    #[test_case("abcde", "fghij", "XXXXX" ; "all absent")]
    fn duplicate_letter_fixtures(guess: &str, answer: &str, expected: &str) {
        assert_eq!(simulate(guess, answer), expected);
    }

    #[test]
    fn pattern_code_encoding() {
        // S(Y)=1, P(X)=0, E(Y)=1, E(Y)=1, D(X)=0
        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        let p = Pattern::calculate(&Word::new("speed").unwrap(), &Word::new("erase").unwrap());
        assert_eq!(p.code(), 37);
        assert_eq!(p.count_greens(), 0);
        assert_eq!(p.count_yellows(), 3);
    }

    #[test]
    fn pattern_perfect_constant() {
        let perfect = Pattern::perfect(5);
        assert_eq!(perfect.code(), 242);
        assert!(perfect.is_perfect());
        assert_eq!(perfect.count_greens(), 5);
        assert!(!Pattern::parse("GGGGX", 5).unwrap().is_perfect());
    }

    #[test]
    fn pattern_self_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "speed", "planet", "ab"] {
            let w = Word::parse(word).unwrap();
            assert!(Pattern::calculate(&w, &w).is_perfect(), "{word}");
        }
    }

    #[test]
    fn pattern_states_round_trip_through_display() {
        let p = Pattern::parse("gyx_-", 5).unwrap();
        assert_eq!(p.to_string(), "GYXXX");
        assert_eq!(p.state_at(0), LetterState::Correct);
        assert_eq!(p.state_at(1), LetterState::Present);
        assert_eq!(p.state_at(4), LetterState::Absent);
        assert_eq!(p.to_emoji(), "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn pattern_parse_errors() {
        assert!(matches!(
            Pattern::parse("GYGGYX", 5),
            Err(PatternError::InvalidLength { actual: 6, .. })
        ));
        assert!(matches!(
            Pattern::parse("GQGGY", 5),
            Err(PatternError::InvalidSymbol { symbol: 'Q', .. })
        ));
        assert_eq!(
            "".parse::<Pattern>(),
            Err(PatternError::UnsupportedLength(0))
        );
    }

    #[test]
    fn pattern_equality_includes_length() {
        let four = Pattern::parse("XXXX", 4).unwrap();
        let five = Pattern::parse("XXXXX", 5).unwrap();
        assert_eq!(four.code(), five.code());
        assert_ne!(four, five);
    }

    #[test]
    fn letter_state_display_order() {
        assert!(LetterState::Correct > LetterState::Present);
        assert!(LetterState::Present > LetterState::Absent);
    }
}
