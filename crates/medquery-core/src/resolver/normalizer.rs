//! Query text normalizer.
//!
//! Handles:
//! - Compound phrase substitution (high blood pressure→hypertension)
//! - Unicode word tokenization and lowercasing, with apostrophes as breaks
//! - Noun lemmatization (tablets→tablet, does→doe)
//! - Stopword and non-alphanumeric token removal, after lemmatization

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::catalog::CompoundPhraseTable;

use super::lexicon::{Lemmatizer, SuffixLemmatizer, ENGLISH_STOPWORDS};

/// Normalizer for free-text queries.
pub struct TextNormalizer {
    phrases: CompoundPhraseTable,
    lemmatizer: Box<dyn Lemmatizer>,
    stopwords: HashSet<&'static str>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(CompoundPhraseTable::default())
    }
}

impl TextNormalizer {
    /// Create a normalizer with the default lemmatizer and stopword list.
    pub fn new(phrases: CompoundPhraseTable) -> Self {
        Self::with_lemmatizer(phrases, Box::new(SuffixLemmatizer::new()))
    }

    /// Create a normalizer with a custom lemmatizer.
    pub fn with_lemmatizer(phrases: CompoundPhraseTable, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            phrases,
            lemmatizer,
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Rewrite compound phrases only.
    pub fn apply_compound_phrases(&self, raw: &str) -> String {
        self.phrases.apply(raw)
    }

    /// Full normalization: phrase substitution, then [`tokenize`](Self::tokenize).
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        self.tokenize(&self.apply_compound_phrases(raw))
    }

    /// Lowercase, split on word boundaries, lemmatize, and drop stopwords
    /// and tokens that are not purely alphanumeric.
    ///
    /// Stopwords are checked against the lemma only, so "does" survives as
    /// "doe".
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        lower
            .unicode_words()
            .flat_map(|word| word.split(is_apostrophe))
            .filter(|word| !word.is_empty() && word.chars().all(char::is_alphanumeric))
            .map(|word| self.lemmatizer.lemmatize(word))
            .filter(|lemma| !self.stopwords.contains(lemma.as_str()))
            .collect()
    }

    /// The phrase table in use.
    pub fn phrases(&self) -> &CompoundPhraseTable {
        &self.phrases
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}
