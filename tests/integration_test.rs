// Integration tests for solace
use solace::prelude::*;
use solace::BoxError;
use std::path::PathBuf;

fn sample_corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_answers.json")
}

fn sample_index() -> CorpusIndex {
    load_index(sample_corpus_path()).unwrap()
}

fn career_romance() -> Vec<Document> {
    vec![
        Document::new("A", "career", "Career doubts", "I don't know which job to choose")
            .with_keywords(["career", "job"]),
        Document::new("B", "romance", "Breakup", "My partner and I broke up and it hurts")
            .with_keywords(["breakup", "romance"]),
    ]
}

#[test]
fn test_sample_corpus_loads() {
    let index = sample_index();
    assert_eq!(index.len(), 8);
    assert_eq!(index.document(0).unwrap().id, "LOVE001");
    for position in 0..index.len() {
        let norm = index.vector(position).unwrap().norm();
        assert!((norm - 1.0).abs() < 1e-6, "document {position} has norm {norm}");
    }
}

#[test]
fn test_korean_questions_find_their_category() {
    let index = sample_index();
    let matcher = Matcher::new(&index);

    let cases = [
        ("남자친구와 헤어져서 너무 힘들어요", "LOVE001"),
        ("진로를 어떻게 정해야 할지 모르겠어요", "CAREER001"),
        ("매일 걱정이 많고 불안해요", "ANXIETY001"),
        ("친구를 사귀고 싶은데 방법을 모르겠어요", "REL002"),
        ("친구와 다퉜어요", "REL001"),
        ("부모님과 자주 싸워요", "FAMILY001"),
        ("시험 공부에 집중이 안 돼요", "STUDY001"),
    ];

    for (question, expected) in cases {
        let matches = matcher.find_best_matches(question, 3, 0.1);
        assert!(!matches.is_empty(), "no match for {question}");
        assert_eq!(matches[0].document.id, expected, "wrong best match for {question}");
    }
}

#[test]
fn test_default_threshold_filters_weak_matches() {
    let index = sample_index();
    let matcher = Matcher::new(&index);

    let matches = matcher.search("시험 공부에 집중이 안 돼요");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].document.id, "STUDY001");

    // Best score for this one sits below the default floor of 0.3.
    assert!(matcher.search("친구와 다퉜어요").is_empty());
}

#[test]
fn test_career_example_ordering() {
    let index = CorpusIndex::build(career_romance()).unwrap();
    let matcher = Matcher::new(&index);
    let matches = matcher.find_best_matches("I'm anxious about choosing a career", 2, 0.0);

    let ids: Vec<&str> = matches.iter().map(|m| m.document.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert!(matches[0].score > matches[1].score);
}

#[test]
fn test_empty_query_yields_no_match() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    for threshold in [0.01, 0.3, 1.0] {
        assert!(matcher.find_best_matches("", 3, threshold).is_empty());
    }
}

#[test]
fn test_out_of_vocabulary_query() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    assert!(matcher.scores("hello world").iter().all(|&s| s == 0.0));
    assert!(matcher.find_best_matches("hello world", 3, 0.1).is_empty());
}

#[test]
fn test_feature_text_query_scores_one() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    for (position, doc) in index.documents().iter().enumerate() {
        let matches = matcher.find_best_matches(&doc.feature_text(), 1, 0.0);
        assert_eq!(matches[0].position, position);
        assert!((matches[0].score - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    let query = "친구를 사귀고 싶은데 방법을 모르겠어요";
    let first = matcher.find_best_matches(query, 5, 0.0);
    let second = matcher.find_best_matches(query, 5, 0.0);
    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }
}

#[test]
fn test_concurrent_queries_share_index() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    let questions = ["매일 걱정이 많고 불안해요", "진로를 어떻게 정해야 할지 모르겠어요"];
    let expected: Vec<_> = questions
        .iter()
        .map(|q| matcher.find_best_matches(q, 3, 0.0))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = questions
            .iter()
            .map(|q| scope.spawn(move || matcher.find_best_matches(q, 3, 0.0)))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });

    assert_eq!(matcher.find_best_matches_batch(&questions, 3, 0.0), expected);
}

#[test]
fn test_empty_corpus_fails() {
    assert!(matches!(CorpusIndex::build(Vec::new()), Err(Error::EmptyCorpus)));
    assert!(matches!(
        parse_corpus(r#"{"answers": []}"#).map(CorpusIndex::build),
        Ok(Err(Error::EmptyCorpus))
    ));
}

#[test]
fn test_missing_corpus_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_index(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_match_summary_for_sample() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    let summary = match_summary(&matcher.search("매일 걱정이 많고 불안해요"));
    assert!(summary.starts_with("Found 1 similar answer(s):"));
    assert!(summary.contains("1. [불안] 매일 걱정과 불안이 많을 때 (similarity: "));
}

struct Canned;

impl AnswerGenerator for Canned {
    fn generate(&self, prompt: &Prompt) -> std::result::Result<String, BoxError> {
        if prompt.user.contains("[Reference 1]") {
            Ok("참고 답변을 바탕으로 한 답변이에요. 😊".to_string())
        } else {
            Ok("일반 답변이에요.".to_string())
        }
    }
}

#[test]
fn test_counselor_grounded_and_fallback() {
    let index = sample_index();
    let counselor = Counselor::new(Matcher::new(&index), Canned);

    let grounded = counselor.consult("매일 걱정이 많고 불안해요").unwrap();
    assert!(grounded.grounded);
    assert_eq!(grounded.matches[0].document.id, "ANXIETY001");
    assert_eq!(grounded.answer, "참고 답변을 바탕으로 한 답변이에요.");

    let fallback = counselor.consult("hello world").unwrap();
    assert!(!fallback.grounded);
    assert_eq!(fallback.answer, "일반 답변이에요.");
}
