use anyhow::Result;
use clap::Parser;
use searcher::{Config, Session};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Rank plain-text documents against free-text Russian queries", long_about = None)]
struct Args {
    /// Directory holding the documents (not searched recursively)
    #[arg(default_value = ".")]
    corpus: PathBuf,
    /// Stop-word list, one word per line [env: SEARCH_STOPWORDS]
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Only index files with this extension
    #[arg(long, default_value = "txt")]
    extension: String,
    /// Show at most this many results per query
    #[arg(long)]
    limit: Option<usize>,
    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Answer a single query and exit
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let stopwords = args
        .stopwords
        .or_else(|| std::env::var("SEARCH_STOPWORDS").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data/stopwords.txt"));
    let config = Config { corpus: args.corpus, stopwords, extension: args.extension, limit: args.limit, json: args.json };
    let session = Session::open(config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.query {
        Some(q) => session.answer(&q, &mut out)?,
        None => session.run(io::stdin().lock(), &mut out)?,
    }
    out.flush()?;
    Ok(())
}
