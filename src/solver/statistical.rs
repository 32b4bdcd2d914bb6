//! Letter-frequency scoring
//!
//! A cheap stand-in for entropy: a guess scores well when its letters are common
//! among the candidates, in the positions where they are common, without repeats.
//! The tables are built once per candidate set and then queried per guess.

use crate::core::{ALPHABET_SIZE, Word};

/// Weight of the "letter appears somewhere" term
const PRESENCE_WEIGHT: f64 = 0.6;
/// Weight of the "letter appears at this position" term
const POSITION_WEIGHT: f64 = 0.4;
/// Bonus scaled by the share of distinct letters in the guess
const UNIQUENESS_BONUS: f64 = 0.1;

/// Letter frequency tables over a candidate set
#[derive(Debug, Clone)]
pub struct LetterStats {
    /// Candidates containing each letter at least once
    presence: [u32; ALPHABET_SIZE],
    /// Candidates with each letter at each position
    positional: Vec<[u32; ALPHABET_SIZE]>,
    total: usize,
}

impl LetterStats {
    /// Count letter occurrences across the candidates
    #[must_use]
    pub fn new(candidates: &[&Word]) -> Self {
        let length = candidates.first().map_or(0, |w| w.length());
        let mut presence = [0u32; ALPHABET_SIZE];
        let mut positional = vec![[0u32; ALPHABET_SIZE]; length];

        for candidate in candidates {
            for (slot, &count) in presence.iter_mut().zip(candidate.letter_counts()) {
                if count > 0 {
                    *slot += 1;
                }
            }
            for (table, &letter) in positional.iter_mut().zip(candidate.as_bytes()) {
                table[usize::from(letter - b'A')] += 1;
            }
        }

        Self {
            presence,
            positional,
            total: candidates.len(),
        }
    }

    /// Number of candidates the tables were built from
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Share of candidates containing `letter`
    #[must_use]
    pub fn presence_rate(&self, letter: u8) -> f64 {
        if self.total == 0 || !letter.is_ascii_uppercase() {
            return 0.0;
        }
        f64::from(self.presence[usize::from(letter - b'A')]) / self.total as f64
    }

    /// Share of candidates with `letter` at `position`
    #[must_use]
    pub fn position_rate(&self, position: usize, letter: u8) -> f64 {
        if self.total == 0 || !letter.is_ascii_uppercase() {
            return 0.0;
        }
        self.positional.get(position).map_or(0.0, |table| {
            f64::from(table[usize::from(letter - b'A')]) / self.total as f64
        })
    }

    /// Heuristic desirability of `guess`, higher is better
    ///
    /// Weighted mix of positional frequency (per position) and presence frequency
    /// (per distinct letter, so repeats earn nothing twice), plus a bonus for the
    /// share of distinct letters. Ranges over `[0, 1 + UNIQUENESS_BONUS]`.
    #[must_use]
    pub fn score(&self, guess: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let length = guess.length() as f64;

        let positional: f64 = guess
            .as_bytes()
            .iter()
            .enumerate()
            .map(|(i, &letter)| self.position_rate(i, letter))
            .sum();

        let presence: f64 = guess
            .letter_counts()
            .iter()
            .zip(b'A'..=b'Z')
            .filter(|&(&count, _)| count > 0)
            .map(|(_, letter)| self.presence_rate(letter))
            .sum();

        let uniqueness = guess.distinct_letters() as f64 / length;

        POSITION_WEIGHT * positional / length
            + PRESENCE_WEIGHT * presence / length
            + UNIQUENESS_BONUS * uniqueness
    }
}
