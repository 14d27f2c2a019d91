use crate::index::{frequency_table, CorpusIndex, DocId, WeightVector};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Stem -> `query_count * idf`.
pub type QueryVector = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub doc_id: DocId,
    pub score: f64,
}

/// Descending score, ties broken by ascending document id.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

/// Cosine similarity over the query's stems only; 0.0 when either side has no weight.
pub fn cosine(doc: &WeightVector, query: &QueryVector) -> f64 {
    let mut dot = 0.0;
    let mut doc_norm = 0.0;
    let mut query_norm = 0.0;
    for (stem, q_w) in query {
        let d_w = doc.get(stem).copied().unwrap_or(0.0);
        dot += d_w * q_w;
        doc_norm += d_w * d_w;
        query_norm += q_w * q_w;
    }
    let norms = doc_norm.sqrt() * query_norm.sqrt();
    if norms > 0.0 { dot / norms } else { 0.0 }
}

impl CorpusIndex {
    /// Weights query stems with the corpus idf. Stems unknown to the corpus weigh 0.
    pub fn query_vector<I, S>(&self, stems: I) -> QueryVector
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        frequency_table(stems)
            .into_iter()
            .map(|(stem, count)| {
                let w = f64::from(count) * self.idf(&stem);
                (stem, w)
            })
            .collect()
    }

    /// Scores every document and orders them with [`compare_results`].
    pub fn rank(&self, query: &QueryVector) -> Vec<ScoredResult> {
        let mut scored: Vec<ScoredResult> = self
            .documents()
            .iter()
            .map(|doc| ScoredResult { doc_id: doc.id.clone(), score: cosine(&doc.weights, query) })
            .collect();
        scored.sort_by(compare_results);
        scored
    }
}
