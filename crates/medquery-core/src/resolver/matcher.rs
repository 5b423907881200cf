//! Best-record lookup by fuzzy name matching.
//!
//! Two passes over the records:
//! 1. Phrase pass: the whole lowercased query against each lowercased name.
//! 2. Token pass, only when the phrase pass stays below the threshold: each
//!    normalized query token against each name.
//!
//! The running best is replaced only by a strictly higher score, so ties go
//! to whichever candidate was seen first (phrase pass before token pass, then
//! record order). A result is returned only if its score is strictly above
//! the threshold.

use tracing::debug;

use crate::models::{HasDisplayName, MatchResult};
use crate::scoring::SimilarityScorer;

use super::TextNormalizer;

/// Fuzzy matcher over any record list.
pub struct Matcher<'a> {
    scorer: &'a dyn SimilarityScorer,
    normalizer: &'a TextNormalizer,
    threshold: u8,
}

struct Best<'r, R> {
    record: Option<&'r R>,
    score: u8,
}

impl<'r, R> Best<'r, R> {
    fn offer(&mut self, record: &'r R, score: u8) {
        if score > self.score {
            self.score = score;
            self.record = Some(record);
        }
    }
}

impl<'a> Matcher<'a> {
    /// Create a new matcher.
    pub fn new(
        scorer: &'a dyn SimilarityScorer,
        normalizer: &'a TextNormalizer,
        threshold: u8,
    ) -> Self {
        Self {
            scorer,
            normalizer,
            threshold,
        }
    }

    /// Find the best record by its display name.
    pub fn find_best<R>(&self, query: &str, records: &[R]) -> Option<MatchResult<R>>
    where
        R: HasDisplayName + Clone,
    {
        self.find_best_by(query, records, |r| r.display_name())
    }

    /// Find the best record using an explicit name extractor.
    pub fn find_best_by<R, F>(&self, query: &str, records: &[R], name_of: F) -> Option<MatchResult<R>>
    where
        R: Clone,
        F: Fn(&R) -> &str,
    {
        let names: Vec<String> = records.iter().map(|r| name_of(r).to_lowercase()).collect();
        let mut best = Best {
            record: None,
            score: 0,
        };

        let query_lower = query.to_lowercase();
        for (record, name) in records.iter().zip(&names) {
            best.offer(record, self.scorer.score(&query_lower, name));
        }
        debug!(score = best.score, "Phrase pass complete");

        if best.score < self.threshold {
            let tokens = self.normalizer.normalize(query);
            for (record, name) in records.iter().zip(&names) {
                for token in &tokens {
                    best.offer(record, self.scorer.score(token, name));
                }
            }
            debug!(score = best.score, tokens = tokens.len(), "Token pass complete");
        }

        match best.record {
            Some(record) if best.score > self.threshold => Some(MatchResult {
                record: record.clone(),
                score: best.score,
            }),
            _ => None,
        }
    }
}
