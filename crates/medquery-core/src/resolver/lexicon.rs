//! Static word lists: stopwords, intent keywords, and noun lemmatization rules.

use std::collections::HashSet;

/// Standard English stopword list (NLTK corpus).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Words that characterize a medicine query.
pub const MEDICINE_KEYWORDS: &[&str] = &[
    "medicine",
    "medication",
    "drug",
    "treatment",
    "prescription",
    "pill",
    "tablet",
    "capsule",
    "syrup",
    "ointment",
    "inhaler",
    "injection",
    "dose",
    "dosage",
    "pharmaceutical",
    "therapy",
    "antibiotic",
    "painkiller",
    "vaccine",
];

/// Words that characterize a symptom query.
pub const SYMPTOM_KEYWORDS: &[&str] = &[
    "symptom",
    "pain",
    "condition",
    "illness",
    "discomfort",
    "ache",
    "ailment",
    "disorder",
    "syndrome",
    "disease",
    "infection",
    "inflammation",
    "fever",
    "cough",
    "headache",
    "nausea",
    "fatigue",
    "dizziness",
    "rash",
    "swelling",
    "remedy",
    "cure",
];

/// Fixed set of anchor words for one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Default medicine keywords.
    pub fn medicine() -> Self {
        Self::new(MEDICINE_KEYWORDS.iter().copied())
    }

    /// Default symptom keywords.
    pub fn symptom() -> Self {
        Self::new(SYMPTOM_KEYWORDS.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Reduces a lowercase word to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Rule-based noun lemmatizer using WordNet's plural detachment rules.
///
/// Without a dictionary to confirm candidates, each word takes the single
/// most specific rule, and words that only look plural are listed in
/// `invariant` so they pass through unchanged.
pub struct SuffixLemmatizer {
    irregular: Vec<(&'static str, &'static str)>,
    invariant: HashSet<&'static str>,
}

impl Default for SuffixLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixLemmatizer {
    pub fn new() -> Self {
        Self {
            irregular: Self::default_irregular(),
            invariant: Self::default_invariant(),
        }
    }

    fn default_irregular() -> Vec<(&'static str, &'static str)> {
        vec![
            ("children", "child"),
            ("men", "man"),
            ("women", "woman"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("mice", "mouse"),
            ("lice", "louse"),
            ("geese", "goose"),
            ("oxen", "ox"),
            ("diagnoses", "diagnosis"),
            ("prognoses", "prognosis"),
            ("analyses", "analysis"),
            ("crises", "crisis"),
            ("bacteria", "bacterium"),
            ("fungi", "fungus"),
            ("stimuli", "stimulus"),
            ("vertebrae", "vertebra"),
            ("knives", "knife"),
            ("leaves", "leaf"),
            ("halves", "half"),
            ("lives", "life"),
            // WordNet knows "wa", "ha" and "u" as nouns
            ("was", "wa"),
            ("has", "ha"),
            ("us", "u"),
        ]
    }

    fn default_invariant() -> HashSet<&'static str> {
        [
            "diabetes", "measles", "mumps", "herpes", "rabies", "scabies", "shingles", "rickets",
            "hives", "lens", "news", "series", "species", "means", "physics", "aids", "tetanus",
            "mucus", "sinus", "virus", "stress", "pus", "gas", "yes", "ourselves", "yourselves",
            "themselves",
        ]
        .into_iter()
        .collect()
    }
}

impl Lemmatizer for SuffixLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some((_, lemma)) = self.irregular.iter().find(|(plural, _)| *plural == word) {
            return (*lemma).to_string();
        }
        if self.invariant.contains(word)
            || word.chars().count() <= 3
            || !word.chars().all(char::is_alphabetic)
        {
            return word.to_string();
        }

        let strip = |n: usize| word[..word.len() - n].to_string();

        if word.ends_with("ies") && word.len() >= 5 {
            return format!("{}y", strip(3));
        }
        if word.ends_with("sses") || word.ends_with("shes") || word.ends_with("xes") {
            return strip(2);
        }
        if word.ends_with("ches") {
            // "aches" -> "ache", "branches" -> "branch"
            let before = word[..word.len() - 4].chars().last();
            return match before {
                Some(c) if "aeiou".contains(c) => strip(1),
                _ => strip(2),
            };
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }
        if word.ends_with('s') {
            return strip(1);
        }
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = SuffixLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("tablets"), "tablet");
        assert_eq!(lemmatizer.lemmatize("remedies"), "remedy");
        assert_eq!(lemmatizer.lemmatize("headaches"), "headache");
        assert_eq!(lemmatizer.lemmatize("aches"), "ache");
        assert_eq!(lemmatizer.lemmatize("diseases"), "disease");
        assert_eq!(lemmatizer.lemmatize("doses"), "dose");
        assert_eq!(lemmatizer.lemmatize("rashes"), "rash");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("branches"), "branch");
        assert_eq!(lemmatizer.lemmatize("glasses"), "glass");
    }

    #[test]
    fn test_singulars_unchanged() {
        let lemmatizer = SuffixLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("headache"), "headache");
        assert_eq!(lemmatizer.lemmatize("illness"), "illness");
        assert_eq!(lemmatizer.lemmatize("dizziness"), "dizziness");
        assert_eq!(lemmatizer.lemmatize("arthritis"), "arthritis");
        assert_eq!(lemmatizer.lemmatize("virus"), "virus");
        assert_eq!(lemmatizer.lemmatize("diabetes"), "diabetes");
        assert_eq!(lemmatizer.lemmatize("gas"), "gas");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = SuffixLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("teeth"), "tooth");
        assert_eq!(lemmatizer.lemmatize("diagnoses"), "diagnosis");
    }

    #[test]
    fn test_function_words_follow_noun_rules() {
        let lemmatizer = SuffixLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("does"), "doe");
        assert_eq!(lemmatizer.lemmatize("was"), "wa");
        assert_eq!(lemmatizer.lemmatize("us"), "u");
        assert_eq!(lemmatizer.lemmatize("this"), "this");
        assert_eq!(lemmatizer.lemmatize("themselves"), "themselves");
    }

    #[test]
    fn test_non_alphabetic_untouched() {
        let lemmatizer = SuffixLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("b12s"), "b12s");
    }

    #[test]
    fn test_keyword_sets() {
        let medicine_set = KeywordSet::medicine();
        let symptom_set = KeywordSet::symptom();
        let medicine: Vec<&str> = medicine_set.iter().collect();
        let symptom: Vec<&str> = symptom_set.iter().collect();

        assert_eq!(medicine.len(), 19);
        assert_eq!(symptom.len(), 22);
        assert!(symptom.contains(&"remedy"));
        assert!(medicine.contains(&"tablet"));
    }

    #[test]
    fn test_stopwords_has_no_duplicates() {
        let set: HashSet<&str> = ENGLISH_STOPWORDS.iter().copied().collect();
        assert_eq!(set.len(), ENGLISH_STOPWORDS.len());
    }
}
