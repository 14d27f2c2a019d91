use crate::analyzer::Analyzer;
use crate::error::QueryError;
use crate::index::{CorpusIndex, Document};
use crate::rank::ScoredResult;

/// A search session: one analyzer and the index it built.
#[derive(Debug, Clone)]
pub struct Searcher {
    analyzer: Analyzer,
    index: CorpusIndex,
}

impl Searcher {
    pub fn build<I>(analyzer: Analyzer, docs: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let index = CorpusIndex::build(docs, &analyzer);
        Self { analyzer, index }
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn is_valid_query(&self, query: &str) -> bool {
        self.analyzer.is_valid_query(query)
    }

    /// Every document, best first. Invalid queries are rejected without scoring.
    pub fn search(&self, query: &str) -> Result<Vec<ScoredResult>, QueryError> {
        if query.trim().is_empty() {
            return Err(QueryError::Empty);
        }
        if !self.is_valid_query(query) {
            return Err(QueryError::OnlyStopWords);
        }
        let terms = self.analyzer.terms(query);
        tracing::debug!(query, ?terms, "searching");
        let vector = self.index.query_vector(terms);
        Ok(self.index.rank(&vector))
    }
}
