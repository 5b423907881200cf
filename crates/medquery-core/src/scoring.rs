//! String similarity scoring on a 0 - 100 integer scale.
//!
//! Two interchangeable metrics:
//! - [`IndelRatio`]: `2 * LCS / (len_a + len_b)`, the ratio used by
//!   python-Levenshtein and fuzzywuzzy's `ratio`
//! - [`LevenshteinRatio`]: `1 - distance / max_len` via strsim
//!
//! Scores are case-sensitive. Callers lowercase first.

use strsim::normalized_levenshtein;

/// A pure, symmetric similarity metric. 100 means identical.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &str) -> u8 + Send + Sync,
{
    fn score(&self, a: &str, b: &str) -> u8 {
        self(a, b)
    }
}

/// Indel similarity ratio based on the longest common subsequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl SimilarityScorer for IndelRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let total = a.len() + b.len();
        if total == 0 {
            return 100;
        }

        let lcs = longest_common_subsequence(&a, &b);
        round_half_even(200 * lcs, total)
    }
}

/// Normalized Levenshtein similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl SimilarityScorer for LevenshteinRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        (normalized_levenshtein(a, b) * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Length of the longest common subsequence, two-row DP.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `num / den` rounded to the nearest integer, ties to even.
fn round_half_even(num: usize, den: usize) -> u8 {
    let quotient = num / den;
    let twice_rem = 2 * (num % den);
    let rounded = if twice_rem > den || (twice_rem == den && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(IndelRatio.score("aspirin", "aspirin"), 100);
        assert_eq!(LevenshteinRatio.score("aspirin", "aspirin"), 100);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(IndelRatio.score("", ""), 100);
        assert_eq!(IndelRatio.score("", "cough"), 0);
        assert_eq!(IndelRatio.score("cough", ""), 0);
        assert_eq!(LevenshteinRatio.score("", ""), 100);
    }

    #[test]
    fn test_known_ratios() {
        // LCS "remed" = 5, total 14 -> 71.43
        assert_eq!(IndelRatio.score("remedy", "remedies"), 71);
        // LCS 7, total 20 -> exactly 70
        assert_eq!(IndelRatio.score("abcdefg", "abcdefgxyzuvw"), 70);
        // LCS 4, total 10 -> exactly 80
        assert_eq!(IndelRatio.score("abcd", "abcdxy"), 80);
        assert_eq!(IndelRatio.score("abc", "xyz"), 0);
    }

    #[test]
    fn test_minor_edits_score_high() {
        assert!(IndelRatio.score("headache", "headahce") > 80);
        assert!(IndelRatio.score("ibuprofen", "ibuprofin") > 80);
        assert!(LevenshteinRatio.score("ibuprofen", "ibuprofin") > 80);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(IndelRatio.score("Aspirin", "aspirin") < 100);
    }

    #[test]
    fn test_round_half_even() {
        // 12.5 -> 12, 13.5 -> 14
        assert_eq!(round_half_even(25, 2), 12);
        assert_eq!(round_half_even(27, 2), 14);
        assert_eq!(round_half_even(200, 16), 12);
    }

    #[test]
    fn test_closure_scorer() {
        let fixed = |_: &str, _: &str| 42u8;
        assert_eq!(fixed.score("a", "b"), 42);
    }

    #[test]
    fn test_unicode_counts_chars() {
        assert_eq!(IndelRatio.score("fièvre", "fièvre"), 100);
        assert_eq!(IndelRatio.score("é", "e"), 0);
    }
}
