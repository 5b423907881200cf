//! MedQuery Core Library
//!
//! Answers free-text questions about medicines and symptoms by fuzzy matching
//! against a fixed reference catalog.
//!
//! # Architecture
//!
//! ```text
//! Query → Compound Phrases → Intent Classifier ──┬── Symptom  → Matcher(symptoms)  → Reply
//!                                                ├── Medicine → Matcher(medicines) → Reply
//!                                                └── Ambiguous → Clarification
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Read-only reference tables and their JSON loaders
//! - [`models`]: Domain types (MedicineRecord, SymptomRecord, Intent, MatchResult)
//! - [`resolver`]: Text normalizer, matcher, intent classifier and the responder
//! - [`scoring`]: 0 - 100 similarity metrics
//! - [`config`]: Thresholds and scorer selection

pub mod catalog;
pub mod config;
pub mod models;
pub mod resolver;
pub mod scoring;

use std::path::Path;

// Re-export commonly used types
pub use catalog::{CatalogError, CompoundPhraseTable, ReferenceCatalog};
pub use config::{ConfigError, MatchConfig, ScorerKind};
pub use models::{HasDisplayName, Intent, MatchResult, MedicineRecord, SymptomRecord};
pub use resolver::{IntentClassifier, KeywordSet, Matcher, Responder, TextNormalizer};
pub use scoring::{IndelRatio, LevenshteinRatio, SimilarityScorer};

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum MedQueryError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Load both reference files and build a ready responder.
///
/// Fails if either file is missing or malformed; no partial catalog is ever
/// returned.
pub fn load_responder<P, Q>(
    medical_data: P,
    compound_phrases: Q,
    config: MatchConfig,
) -> Result<Responder, MedQueryError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    config.validate()?;
    let catalog = ReferenceCatalog::from_json_file(medical_data)?;
    let phrases = CompoundPhraseTable::from_json_file(compound_phrases)?;
    Ok(Responder::new(catalog, phrases, config))
}
