use crate::analyzer::Analyzer;
use std::collections::HashMap;

pub type DocId = String;
/// Stem -> occurrences.
pub type FrequencyTable = HashMap<String, u32>;
/// Stem -> tf-idf weight.
pub type WeightVector = HashMap<String, f64>;

/// Raw input: an identifier (usually the file path) and its full text.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

#[derive(Debug, Clone)]
pub struct IndexedDocument {
    pub id: DocId,
    pub frequencies: FrequencyTable,
    pub weights: WeightVector,
}

/// Per-document stem statistics for a whole corpus. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    docs: Vec<IndexedDocument>,
    df: HashMap<String, u32>,
}

pub fn frequency_table<I, S>(stems: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = FrequencyTable::new();
    for stem in stems {
        *table.entry(stem.into()).or_insert(0) += 1;
    }
    table
}

impl CorpusIndex {
    pub fn new() -> Self { Self::default() }

    pub fn build<I>(docs: I, analyzer: &Analyzer) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let tables = docs.into_iter().map(|doc| {
            let frequencies = frequency_table(analyzer.terms(&doc.text));
            tracing::debug!(doc = %doc.id, stems = frequencies.len(), "analyzed document");
            (doc.id, frequencies)
        });
        Self::from_frequency_tables(tables)
    }

    /// Weights every table against corpus-wide document frequencies.
    pub fn from_frequency_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (DocId, FrequencyTable)>,
    {
        let tables: Vec<(DocId, FrequencyTable)> = tables.into_iter().collect();
        let mut df: HashMap<String, u32> = HashMap::new();
        for (_, frequencies) in &tables {
            for stem in frequencies.keys() {
                *df.entry(stem.clone()).or_insert(0) += 1;
            }
        }

        let mut index = Self { docs: Vec::with_capacity(tables.len()), df };
        let num_docs = tables.len();
        for (id, frequencies) in tables {
            let total: u32 = frequencies.values().sum();
            let weights: WeightVector = frequencies
                .iter()
                .map(|(stem, &count)| {
                    let tf = f64::from(count) / f64::from(total);
                    (stem.clone(), tf * index.idf_for(stem, num_docs))
                })
                .collect();
            index.docs.push(IndexedDocument { id, frequencies, weights });
        }
        tracing::info!(num_docs, num_stems = index.df.len(), "corpus index built");
        index
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.docs
    }

    pub fn document_frequency(&self, stem: &str) -> u32 {
        self.df.get(stem).copied().unwrap_or(0)
    }

    /// `ln(N / df)`; zero for a stem no document contains.
    pub fn idf(&self, stem: &str) -> f64 {
        self.idf_for(stem, self.docs.len())
    }

    fn idf_for(&self, stem: &str, num_docs: usize) -> f64 {
        match self.document_frequency(stem) {
            0 => 0.0,
            df => (num_docs as f64 / f64::from(df)).ln(),
        }
    }
}
