//! Russian full-text search core: stemming, tf-idf indexing and cosine ranking.

pub mod alphabet;
pub mod analyzer;
pub mod error;
pub mod index;
pub mod rank;
pub mod search;
pub mod stemmer;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use error::QueryError;
pub use index::{CorpusIndex, DocId, Document, FrequencyTable, IndexedDocument, WeightVector};
pub use rank::{compare_results, cosine, QueryVector, ScoredResult};
pub use search::Searcher;
pub use stemmer::{EndingTables, Stemmer};
pub use tokenizer::{tokenize, StopWords, Tokenizer};
