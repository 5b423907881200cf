//! Query resolver for medicine and symptom questions.
//!
//! Pipeline: Compound Phrases → Intent Classification → Catalog Matching → Reply

mod classifier;
mod lexicon;
mod matcher;
mod normalizer;

pub use classifier::*;
pub use lexicon::*;
pub use matcher::*;
pub use normalizer::*;

use tracing::{debug, warn};

use crate::catalog::{CompoundPhraseTable, ReferenceCatalog};
use crate::config::MatchConfig;
use crate::models::{
    Intent, MatchResult, MedicineRecord, SymptomRecord, CLARIFICATION_MESSAGE, MEDICINE_NOT_FOUND,
    SYMPTOM_NOT_FOUND,
};
use crate::scoring::SimilarityScorer;

/// Main entry point that answers free-text queries.
///
/// Holds only read-only state; every call allocates its own scratch data, so
/// a shared `&Responder` can serve concurrent callers.
pub struct Responder {
    catalog: ReferenceCatalog,
    normalizer: TextNormalizer,
    scorer: Box<dyn SimilarityScorer>,
    medicine_keywords: KeywordSet,
    symptom_keywords: KeywordSet,
    config: MatchConfig,
}

impl Responder {
    /// Create a responder with the default keyword sets.
    pub fn new(catalog: ReferenceCatalog, phrases: CompoundPhraseTable, config: MatchConfig) -> Self {
        let scorer = config.scorer.build();
        Self {
            catalog,
            normalizer: TextNormalizer::new(phrases),
            scorer,
            medicine_keywords: KeywordSet::medicine(),
            symptom_keywords: KeywordSet::symptom(),
            config,
        }
    }

    /// Replace the scorer chosen by the config.
    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replace the intent keyword sets.
    pub fn with_keywords(mut self, medicine: KeywordSet, symptom: KeywordSet) -> Self {
        self.medicine_keywords = medicine;
        self.symptom_keywords = symptom;
        self
    }

    /// Answer a query with a formatted reply.
    pub fn respond(&self, query: &str) -> String {
        let query = self.bound(query);
        let normalized = self.normalizer.apply_compound_phrases(query);

        let intent = self.classifier().classify_normalized(&normalized);
        debug!(?intent, "Query classified");

        match intent {
            Intent::Symptom => self
                .lookup_symptom(&normalized)
                .map(|m| m.render())
                .unwrap_or_else(|| SYMPTOM_NOT_FOUND.to_string()),
            Intent::Medicine => self
                .lookup_medicine(&normalized)
                .map(|m| m.render())
                .unwrap_or_else(|| MEDICINE_NOT_FOUND.to_string()),
            Intent::Ambiguous => CLARIFICATION_MESSAGE.to_string(),
        }
    }

    /// Classify a raw query.
    pub fn classify(&self, query: &str) -> Intent {
        self.classifier().classify(self.bound(query))
    }

    /// Look up a medicine and format the reply.
    pub fn medicine_info(&self, query: &str) -> String {
        self.find_medicine(query)
            .map(|m| m.render())
            .unwrap_or_else(|| MEDICINE_NOT_FOUND.to_string())
    }

    /// Look up a symptom and format the reply.
    pub fn symptom_info(&self, query: &str) -> String {
        self.find_symptom(query)
            .map(|m| m.render())
            .unwrap_or_else(|| SYMPTOM_NOT_FOUND.to_string())
    }

    /// Best medicine match above the threshold.
    pub fn find_medicine(&self, query: &str) -> Option<MatchResult<MedicineRecord>> {
        self.lookup_medicine(self.bound(query))
    }

    /// Best symptom match above the threshold.
    pub fn find_symptom(&self, query: &str) -> Option<MatchResult<SymptomRecord>> {
        self.lookup_symptom(self.bound(query))
    }

    /// Get the normalizer for direct access.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Get the catalog for direct access.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Get the thresholds and limits in effect.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    // Callers pass text that has already been through `bound`.
    fn lookup_medicine(&self, query: &str) -> Option<MatchResult<MedicineRecord>> {
        let result = self.matcher().find_best(query, self.catalog.medicines());
        debug!(found = result.is_some(), score = ?result.as_ref().map(|m| m.score), "Medicine lookup");
        result
    }

    fn lookup_symptom(&self, query: &str) -> Option<MatchResult<SymptomRecord>> {
        let result = self.matcher().find_best(query, self.catalog.symptoms());
        debug!(found = result.is_some(), score = ?result.as_ref().map(|m| m.score), "Symptom lookup");
        result
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher::new(
            self.scorer.as_ref(),
            &self.normalizer,
            self.config.match_threshold,
        )
    }

    fn classifier(&self) -> IntentClassifier<'_> {
        IntentClassifier::new(
            self.scorer.as_ref(),
            &self.normalizer,
            &self.medicine_keywords,
            &self.symptom_keywords,
            self.config.intent_threshold,
        )
    }

    /// Truncate overlong input on a char boundary.
    fn bound<'q>(&self, query: &'q str) -> &'q str {
        match query.char_indices().nth(self.config.max_query_chars) {
            Some((cut, _)) => {
                warn!(
                    limit = self.config.max_query_chars,
                    "Query truncated to character limit"
                );
                &query[..cut]
            }
            None => query,
        }
    }
}
