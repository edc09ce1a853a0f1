use crate::{JsonLinesSink, SearchServer, WriterSink};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `query: {docid: D, hitcount: H} ...`
    Text,
    /// One JSON object per query
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "docsearch")]
#[command(about = "Answer queries against an in-memory term-frequency index", long_about = None)]
pub struct Config {
    /// Document base, one document per line
    #[arg(long)]
    pub docs: PathBuf,
    /// Queries, one per line (defaults to stdin)
    #[arg(long)]
    pub queries: Option<PathBuf>,
    /// Where to write result rows (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Result row format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(f))
}

/// Load the document base, then answer the query stream. Returns the number
/// of queries answered.
pub fn run(config: &Config) -> Result<usize> {
    let server = SearchServer::new();
    server.update_document_base_from_reader(open(&config.docs)?)?;

    let queries: Box<dyn BufRead> = match &config.queries {
        Some(path) => Box::new(open(path)?),
        None => Box::new(io::stdin().lock()),
    };
    let out: Box<dyn Write> = match &config.output {
        Some(path) => {
            let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match config.format {
        Format::Text => server.add_queries_stream(queries, &mut WriterSink::new(out)),
        Format::Json => server.add_queries_stream(queries, &mut JsonLinesSink::new(out)),
    }
}
