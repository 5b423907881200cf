//! Query intent classification.
//!
//! Checks run in order and stop at the first hit:
//! 1. Whole query vs symptom keywords
//! 2. Whole query vs medicine keywords
//! 3. Each token vs symptom keywords, then each token vs medicine keywords
//!
//! A keyword hit needs a score strictly above the intent threshold.

use tracing::debug;

use crate::models::Intent;
use crate::scoring::SimilarityScorer;

use super::{KeywordSet, TextNormalizer};

/// Routes a query to the medicine or symptom catalog.
pub struct IntentClassifier<'a> {
    scorer: &'a dyn SimilarityScorer,
    normalizer: &'a TextNormalizer,
    medicine_keywords: &'a KeywordSet,
    symptom_keywords: &'a KeywordSet,
    threshold: u8,
}

impl<'a> IntentClassifier<'a> {
    /// Create a new classifier.
    pub fn new(
        scorer: &'a dyn SimilarityScorer,
        normalizer: &'a TextNormalizer,
        medicine_keywords: &'a KeywordSet,
        symptom_keywords: &'a KeywordSet,
        threshold: u8,
    ) -> Self {
        Self {
            scorer,
            normalizer,
            medicine_keywords,
            symptom_keywords,
            threshold,
        }
    }

    /// Classify a raw query.
    pub fn classify(&self, query: &str) -> Intent {
        let normalized = self.normalizer.apply_compound_phrases(query);
        self.classify_normalized(&normalized)
    }

    /// Classify a query that already had compound phrases applied.
    pub fn classify_normalized(&self, normalized: &str) -> Intent {
        let lower = normalized.to_lowercase();

        if self.any_hit(&lower, self.symptom_keywords) {
            debug!("Phrase-level symptom keyword hit");
            return Intent::Symptom;
        }
        if self.any_hit(&lower, self.medicine_keywords) {
            debug!("Phrase-level medicine keyword hit");
            return Intent::Medicine;
        }

        let tokens = self.normalizer.normalize(normalized);
        let intent = if tokens.iter().any(|t| self.any_hit(t, self.symptom_keywords)) {
            Intent::Symptom
        } else if tokens.iter().any(|t| self.any_hit(t, self.medicine_keywords)) {
            Intent::Medicine
        } else {
            Intent::Ambiguous
        };
        debug!(?intent, tokens = tokens.len(), "Token-level classification");
        intent
    }

    fn any_hit(&self, text: &str, keywords: &KeywordSet) -> bool {
        keywords
            .iter()
            .any(|keyword| self.scorer.score(text, keyword) > self.threshold)
    }
}
