//! Property tests for scorers and phrase substitution.

use medquery_core::{CompoundPhraseTable, IndelRatio, LevenshteinRatio, SimilarityScorer};
use proptest::prelude::*;

fn scorers() -> Vec<Box<dyn SimilarityScorer>> {
    vec![Box::new(IndelRatio), Box::new(LevenshteinRatio)]
}

proptest! {
    #[test]
    fn score_identity(s in "\\PC{0,24}") {
        for scorer in scorers() {
            prop_assert_eq!(scorer.score(&s, &s), 100);
        }
    }

    #[test]
    fn score_symmetric(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        for scorer in scorers() {
            prop_assert_eq!(scorer.score(&a, &b), scorer.score(&b, &a));
        }
    }

    #[test]
    fn score_in_range(a in "[a-z ]{0,24}", b in "[a-z ]{0,24}") {
        for scorer in scorers() {
            prop_assert!(scorer.score(&a, &b) <= 100);
        }
    }

    #[test]
    fn phrase_substitution_is_idempotent(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "high", "blood", "pressure", "sore", "throat", "my", "is", "hypertension",
            ]),
            0..12,
        )
    ) {
        let table = CompoundPhraseTable::from_pairs([
            ("high blood pressure", "hypertension"),
            ("sore throat", "pharyngitis"),
        ])
        .unwrap();
        let text = words.join(" ");

        let once = table.apply(&text);
        prop_assert_eq!(table.apply(&once), once.clone());
        prop_assert!(!once.contains("high blood pressure"));
    }
}
