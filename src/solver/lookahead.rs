//! One ply of look-ahead
//!
//! Re-scores a shortlist of entropy leaders by the information they gain now plus
//! the best information obtainable on the following turn, averaged over the
//! feedback they may receive:
//!
//! ```text
//! value(g) = H(g) + Σ_B P(B) · max_{g2} H(g2 | B)
//! ```
//!
//! `g2` ranges over the shortlist and the bucket's own words. Buckets that are
//! already resolved (a single word left) contribute nothing.

use super::entropy::calculate_entropy;
use super::scoring::ScoredGuess;
use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Re-score `shortlist` (entropy-scored guesses) with one ply of look-ahead
///
/// The returned guesses keep their candidate flags; only scores change.
#[must_use]
pub fn refine<'a>(shortlist: &[ScoredGuess<'a>], candidates: &[&Word]) -> Vec<ScoredGuess<'a>> {
    let followups: Vec<&Word> = shortlist.iter().map(|s| s.word).collect();

    shortlist
        .iter()
        .map(|entry| {
            let future = expected_followup(entry.word, candidates, &followups);
            log::trace!(
                "look-ahead {}: {:.4} now + {:.4} next",
                entry.word,
                entry.score,
                future
            );
            ScoredGuess {
                score: entry.score + future,
                ..*entry
            }
        })
        .collect()
}

/// Expected best next-turn entropy after playing `guess`
fn expected_followup(guess: &Word, candidates: &[&Word], followups: &[&Word]) -> f64 {
    let total = candidates.len() as f64;
    if total == 0.0 {
        return 0.0;
    }

    let mut buckets: Vec<(Pattern, Vec<&Word>)> = partition(guess, candidates).into_iter().collect();
    // Fixed summation order
    buckets.sort_unstable_by_key(|(pattern, _)| pattern.code());

    buckets
        .iter()
        .filter(|(pattern, bucket)| bucket.len() > 1 && !pattern.is_perfect())
        .map(|(_, bucket)| {
            let best = followups
                .iter()
                .chain(bucket.iter())
                .map(|g2| calculate_entropy(g2, bucket))
                .fold(0.0, f64::max);
            bucket.len() as f64 / total * best
        })
        .sum()
}

fn partition<'w>(guess: &Word, candidates: &[&'w Word]) -> FxHashMap<Pattern, Vec<&'w Word>> {
    let mut buckets: FxHashMap<Pattern, Vec<&'w Word>> = FxHashMap::default();
    for &candidate in candidates {
        buckets
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(candidate);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn resolved_buckets_add_nothing() {
        // CRANE splits these three into singletons
        let pool = words(&["slate", "crate", "zzzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("crane").unwrap();

        assert!(expected_followup(&guess, &refs, &[&guess]).abs() < f64::EPSILON);
    }

    #[test]
    fn unresolved_bucket_adds_followup_information() {
        // ZZZZZ learns nothing; any bucket word then splits the four apart
        let pool = words(&["slate", "crate", "grate", "plate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let probe = Word::new("zzzzz").unwrap();

        let shortlist = [ScoredGuess {
            word: &probe,
            score: 0.0,
            is_candidate: false,
        }];
        let refined = refine(&shortlist, &refs);

        assert_eq!(refined.len(), 1);
        assert!(refined[0].score > 0.0);
        assert!(refined[0].score <= (refs.len() as f64).log2() + 1e-12);
    }

    #[test]
    fn refine_keeps_flags_and_order() {
        let pool = words(&["crane", "slate", "trace", "grate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let shortlist: Vec<ScoredGuess> = pool
            .iter()
            .map(|w| ScoredGuess {
                word: w,
                score: calculate_entropy(w, &refs),
                is_candidate: true,
            })
            .collect();

        let refined = refine(&shortlist, &refs);
        for (before, after) in shortlist.iter().zip(&refined) {
            assert_eq!(before.word, after.word);
            assert!(after.is_candidate);
            assert!(after.score >= before.score);
        }
    }
}
