use textsearch_core::{Analyzer, Document, QueryError, Searcher, StopWords};

fn searcher(docs: &[(&str, &str)]) -> Searcher {
    let analyzer = Analyzer::with_stop_words(StopWords::from_words(["на", "у", "и", "но"]));
    Searcher::build(analyzer, docs.iter().map(|&(id, text)| Document::new(id, text)))
}

#[test]
fn finds_the_cat() {
    let s = searcher(&[("doc1.txt", "кот сидит на окне"), ("doc2.txt", "собака лежит у двери")]);
    let results = s.search("кот").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, "doc1.txt");
    assert!(results[0].score > 0.0);
    assert_eq!(results[1].doc_id, "doc2.txt");
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn inflected_query_matches_stem() {
    let s = searcher(&[
        ("a.txt", "собака лежит у двери"),
        ("b.txt", "собаки лают на котов"),
        ("c.txt", "кот сидит"),
    ]);
    let results = s.search("Собаку").unwrap();
    assert_eq!(results[2].doc_id, "c.txt");
    assert_eq!(results[2].score, 0.0);
    // Both dog documents score 1.0 on a single-stem query and tie on id.
    assert_eq!(results[0].doc_id, "a.txt");
    assert_eq!(results[1].doc_id, "b.txt");
    assert!((results[0].score - 1.0).abs() < 1e-12);
}

#[test]
fn descending_scores() {
    let s = searcher(&[
        ("x.txt", "кот кот кот собака"),
        ("y.txt", "кот собака собака собака"),
        ("z.txt", "лес"),
    ]);
    let results = s.search("кот кот собака").unwrap();
    assert_eq!(results[0].doc_id, "x.txt");
    assert_eq!(results[1].doc_id, "y.txt");
    assert!(results[0].score > results[1].score);
    assert!(results.iter().all(|r| (0.0..=1.0 + 1e-12).contains(&r.score)));
}

#[test]
fn rejects_stop_word_queries() {
    let s = searcher(&[("doc1.txt", "кот сидит на окне")]);
    assert_eq!(s.search("и"), Err(QueryError::OnlyStopWords));
    assert_eq!(s.search("на, но 1"), Err(QueryError::OnlyStopWords));
    assert_eq!(s.search(""), Err(QueryError::Empty));
    assert_eq!(s.search("  "), Err(QueryError::Empty));
}

#[test]
fn unknown_words_score_zero() {
    let s = searcher(&[("doc1.txt", "кот сидит"), ("doc2.txt", "собака лежит")]);
    let results = s.search("жираф").unwrap();
    assert!(results.iter().all(|r| r.score == 0.0));
    assert_eq!(results[0].doc_id, "doc1.txt");
}

#[test]
fn stem_in_every_document_has_no_weight() {
    let s = searcher(&[("doc1.txt", "кот сидит"), ("doc2.txt", "кот лежит")]);
    assert_eq!(s.index().idf("кот"), 0.0);
    let results = s.search("кот").unwrap();
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn empty_corpus_returns_nothing() {
    let s = searcher(&[]);
    assert!(s.search("кот").unwrap().is_empty());
}
