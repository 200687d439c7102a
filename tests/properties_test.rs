// Property tests for index construction and matching
use proptest::prelude::*;
use solace::{CorpusIndex, Document, Matcher};

fn arb_document() -> impl Strategy<Value = Document> {
    (
        "[a-c가나]{1,8}",
        "[a-c가나 ]{0,24}",
        prop::collection::vec("[a-c가나]{1,4}", 0..3),
    )
        .prop_map(|(title, content, keywords)| {
            Document::new("doc", "test", title, content).with_keywords(keywords)
        })
}

fn arb_corpus() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(arb_document(), 1..8)
}

proptest! {
    #[test]
    fn test_build_keeps_every_document(corpus in arb_corpus()) {
        let len = corpus.len();
        let index = CorpusIndex::build(corpus).unwrap();
        prop_assert_eq!(index.len(), len);
    }

    #[test]
    fn test_document_vectors_are_unit_or_zero(corpus in arb_corpus()) {
        let index = CorpusIndex::build(corpus).unwrap();
        for (_, vector) in index.iter() {
            let norm = vector.norm();
            prop_assert!(vector.is_zero() || (norm - 1.0).abs() < 1e-6, "norm {}", norm);
        }
    }

    #[test]
    fn test_matches_respect_bounds_and_order(
        corpus in arb_corpus(),
        query in "[a-d가나다 ]{0,20}",
        top_k in 0usize..6,
        threshold in 0.0f64..=1.0,
    ) {
        let index = CorpusIndex::build(corpus).unwrap();
        let matcher = Matcher::new(&index);
        let matches = matcher.find_best_matches(&query, top_k, threshold);

        prop_assert!(matches.len() <= top_k);
        for m in &matches {
            prop_assert!(m.score >= threshold);
            prop_assert!((0.0..=1.0).contains(&m.score));
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }

        let again = matcher.find_best_matches(&query, top_k, threshold);
        prop_assert_eq!(matches, again);
    }

    #[test]
    fn test_empty_query_never_matches_above_zero(
        corpus in arb_corpus(),
        threshold in 0.001f64..=1.0,
    ) {
        let index = CorpusIndex::build(corpus).unwrap();
        let matcher = Matcher::new(&index);
        prop_assert!(matcher.find_best_matches("", 3, threshold).is_empty());
    }

    #[test]
    fn test_own_feature_text_reaches_the_maximum(corpus in arb_corpus(), pick in any::<prop::sample::Index>()) {
        let position = pick.index(corpus.len());
        let text = corpus[position].feature_text();
        let index = CorpusIndex::build(corpus).unwrap();
        let matcher = Matcher::new(&index);

        let scores = matcher.scores(&text);
        prop_assert!((scores[position] - 1.0).abs() < 1e-9);
        let best = scores.iter().cloned().fold(0.0f64, f64::max);
        prop_assert!(scores[position] >= best - 1e-9);
    }
}
