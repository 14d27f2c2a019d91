use thiserror::Error;

/// Reasons a query is rejected before any scoring happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,

    #[error("query consists only of stop-words")]
    OnlyStopWords,
}
