//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback patterns the guess can produce
    pub partitions: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.len() < 2 {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_helper::core::Pattern;
/// use wordle_helper::solver::entropy::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert("XXXXX".parse::<Pattern>().unwrap(), 25);
/// uniform.insert("YXXXX".parse::<Pattern>().unwrap(), 25);
/// uniform.insert("GXXXX".parse::<Pattern>().unwrap(), 25);
/// uniform.insert("XYXXX".parse::<Pattern>().unwrap(), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    // Sorted so the float sum does not depend on map iteration order
    let mut counts: Vec<usize> = pattern_counts.values().copied().filter(|&c| c > 0).collect();
    counts.sort_unstable();

    let entropy: f64 = counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single bucket sums to -0.0
    entropy.max(0.0)
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
        partitions: pattern_counts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(code: &str) -> Pattern {
        code.parse().unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(pattern("XXXXX"), 1);
        counts.insert(pattern("YXXXX"), 1);
        counts.insert(pattern("GXXXX"), 1);
        counts.insert(pattern("XYXXX"), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(pattern("XXXXX"), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < f64::EPSILON);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        uniform.insert(pattern("XXXXX"), 25);
        uniform.insert(pattern("YXXXX"), 25);
        uniform.insert(pattern("GXXXX"), 25);
        uniform.insert(pattern("XYXXX"), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(pattern("XXXXX"), 97);
        skewed.insert(pattern("YXXXX"), 1);
        skewed.insert(pattern("GXXXX"), 1);
        skewed.insert(pattern("XYXXX"), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_bounded_by_log2_candidates() {
        let pool = words(&[
            "crane", "slate", "trace", "grate", "irate", "crate", "plate", "speed", "erase",
            "robot", "floor", "eerie", "there", "geese", "abbey", "kebab",
        ]);
        let refs: Vec<&Word> = pool.iter().collect();
        let bound = (refs.len() as f64).log2();

        for guess in &pool {
            let entropy = calculate_entropy(guess, &refs);
            assert!(entropy >= 0.0, "{guess}: {entropy}");
            assert!(entropy <= bound + 1e-12, "{guess}: {entropy} > {bound}");
        }
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!(calculate_entropy(&guess, &refs).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!((calculate_entropy(&guess, &refs) - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_degenerate_pools() {
        let guess = Word::new("crane").unwrap();
        let single = [Word::new("crane").unwrap()];
        let single_refs: Vec<&Word> = single.iter().collect();

        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
        assert!(calculate_entropy(&guess, &single_refs).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_match_partitions() {
        let guess = Word::new("crane").unwrap();
        // SLATE and PLATE share XXGXG, CRATE is GGGXG
        let candidates = words(&["slate", "plate", "crate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let metrics = calculate_metrics(&guess, &refs);
        assert_eq!(metrics.partitions, 2);
        assert_eq!(metrics.max_partition, 2);
        // (2/3)*2 + (1/3)*1 = 5/3
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 1e-9);
        assert!((metrics.entropy - calculate_entropy(&guess, &refs)).abs() < 1e-12);
    }

    #[test]
    fn metrics_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.partitions, 0);
    }

    #[test]
    fn group_by_pattern_counts_everything() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "crate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let groups = group_by_pattern(&guess, &refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values().sum::<usize>(), 2);
    }
}
