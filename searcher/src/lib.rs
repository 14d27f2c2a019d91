use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use textsearch_core::{Analyzer, Document, ScoredResult, Searcher, StopWords};
use walkdir::WalkDir;

pub const PROMPT: &str = "Search for: ";
pub const INVALID_QUERY: &str = "Query must not be empty or consist only of stop-words";

#[derive(Debug, Clone)]
pub struct Config {
    pub corpus: PathBuf,
    pub stopwords: PathBuf,
    pub extension: String,
    /// Print at most this many results per query.
    pub limit: Option<usize>,
    pub json: bool,
}

impl Config {
    pub fn new(corpus: impl Into<PathBuf>, stopwords: impl Into<PathBuf>) -> Self {
        Self { corpus: corpus.into(), stopwords: stopwords.into(), extension: "txt".into(), limit: None, json: false }
    }
}

/// Read every `*.{extension}` file directly inside `dir`, sorted by path.
///
/// Unreadable files are skipped with a warning; invalid UTF-8 is replaced.
pub fn load_corpus(dir: &Path, extension: &str) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        anyhow::bail!("corpus directory {} does not exist", dir.display());
    }
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let p = entry.path();
        if entry.file_type().is_file() && p.extension().and_then(|s| s.to_str()) == Some(extension) {
            files.push(p.to_path_buf());
        }
    }
    files.sort();

    let docs = read_documents(files);
    tracing::info!(dir = %dir.display(), num_docs = docs.len(), "loaded corpus");
    Ok(docs)
}

/// Read each file into a [`Document`] keyed by its path, skipping the ones that fail.
pub fn read_documents<I>(files: I) -> Vec<Document>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut docs = Vec::new();
    for file in files {
        match fs::read(&file) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                docs.push(Document::new(file.to_string_lossy(), text));
            }
            Err(err) => tracing::warn!(file = %file.display(), %err, "skipping unreadable file"),
        }
    }
    docs
}

pub fn load_stop_words(path: &Path) -> Result<StopWords> {
    let f = File::open(path).with_context(|| format!("opening stop-word list {}", path.display()))?;
    let stop_words = StopWords::from_reader(BufReader::new(f))
        .with_context(|| format!("reading stop-word list {}", path.display()))?;
    tracing::info!(path = %path.display(), count = stop_words.len(), "loaded stop-words");
    Ok(stop_words)
}

/// File name without its directory, falling back to the whole id.
pub fn display_name(doc_id: &str) -> &str {
    Path::new(doc_id).file_name().and_then(|n| n.to_str()).unwrap_or(doc_id)
}

pub struct Session {
    config: Config,
    searcher: Searcher,
}

impl Session {
    /// Load stop-words and the corpus, then build the index once.
    pub fn open(config: Config) -> Result<Self> {
        let stop_words = load_stop_words(&config.stopwords)?;
        let docs = load_corpus(&config.corpus, &config.extension)?;
        let searcher = Searcher::build(Analyzer::with_stop_words(stop_words), docs);
        Ok(Self { config, searcher })
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Run one query and print its results, or the validation message.
    pub fn answer<W: Write>(&self, query: &str, out: &mut W) -> Result<()> {
        match self.searcher.search(query) {
            Ok(results) => self.print_results(&results, out),
            Err(err) => {
                tracing::debug!(%err, "rejected query");
                writeln!(out, "{INVALID_QUERY}")?;
                Ok(())
            }
        }
    }

    /// Prompt, read a line, answer it; until the input ends.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily rather than ending the loop.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.answer(line.trim_end_matches(|c: char| c == '\n' || c == '\r'), out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn print_results<W: Write>(&self, results: &[ScoredResult], out: &mut W) -> Result<()> {
        let limit = self.config.limit.unwrap_or(results.len());
        let shown = results.iter().take(limit);
        if self.config.json {
            let hits: Vec<ScoredResult> = shown
                .map(|r| ScoredResult { doc_id: display_name(&r.doc_id).to_string(), score: r.score })
                .collect();
            writeln!(out, "{}", serde_json::to_string(&hits)?)?;
            return Ok(());
        }
        writeln!(out, "Results in {}:", self.config.corpus.display())?;
        for r in shown {
            writeln!(out, "File: {}\nRelevance: {}\n", display_name(&r.doc_id), r.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_directories() {
        assert_eq!(display_name("/tmp/corpus/doc1.txt"), "doc1.txt");
        assert_eq!(display_name("doc2.txt"), "doc2.txt");
        assert_eq!(display_name(""), "");
    }
}
