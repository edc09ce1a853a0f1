use anyhow::{Context, Result};
use docsearch_core::{Hit, InvertedIndex, Ranker, SearchResult};
use parking_lot::RwLock;
use std::io::{self, BufRead};
use std::sync::Arc;

pub mod cli;
pub mod sink;
pub mod timing;

pub use sink::{JsonLinesSink, LineSink, WriterSink};
use timing::LogDuration;

/// Answers queries against the current document base.
///
/// The index is held as an immutable `Arc` snapshot. Updates build a new
/// index without holding the lock and only take the write guard to swap the
/// pointer; each query clones the current `Arc` and runs against it, so
/// concurrent queries never block each other and a query never sees a mix of
/// two document bases.
pub struct SearchServer {
    index: RwLock<Arc<InvertedIndex>>,
}

impl Default for SearchServer {
    fn default() -> Self { Self::new() }
}

impl SearchServer {
    /// Server with an empty document base.
    pub fn new() -> Self {
        Self { index: RwLock::new(Arc::new(InvertedIndex::new())) }
    }

    pub fn with_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let server = Self::new();
        server.update_document_base(documents);
        server
    }

    /// Replace the document base. Document ids restart at 0.
    pub fn update_document_base<I, S>(&self, documents: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _t = LogDuration::new("update_document_base");
        let fresh = Arc::new(InvertedIndex::build(documents));
        let (num_docs, num_terms) = (fresh.doc_count(), fresh.term_count());

        let old = std::mem::replace(&mut *self.index.write(), fresh);
        // last reference to a large index is released outside the lock
        drop(old);

        tracing::info!(num_docs, num_terms, "document base updated");
    }

    /// Read newline-delimited documents and replace the document base with them.
    pub fn update_document_base_from_reader<R: BufRead>(&self, reader: R) -> Result<()> {
        let docs = read_lines(reader)
            .collect::<io::Result<Vec<String>>>()
            .context("reading document base")?;
        self.update_document_base(docs);
        Ok(())
    }

    /// The current index. Holding it keeps that version alive across updates.
    pub fn snapshot(&self) -> Arc<InvertedIndex> {
        Arc::clone(&*self.index.read())
    }

    pub fn answer(&self, query: &str) -> Vec<Hit> {
        docsearch_core::answer(&self.snapshot(), query)
    }

    /// Answer each query line in order, writing one row per query to `sink`.
    /// Each query runs against the index current when it is reached.
    /// Returns the number of queries answered.
    pub fn add_queries_stream<R, S>(&self, queries: R, sink: &mut S) -> Result<usize>
    where
        R: BufRead,
        S: LineSink + ?Sized,
    {
        let _t = LogDuration::new("add_queries_stream");
        let mut ranker = Ranker::new();
        let mut answered = 0usize;

        for line in read_lines(queries) {
            let query = line.context("reading query stream")?;
            let index = self.snapshot();
            let hits = ranker.answer(&index, &query);
            sink.write_result(&SearchResult { query: &query, hits: &hits })
                .with_context(|| format!("writing result for query {answered}"))?;
            answered += 1;
        }
        sink.flush().context("flushing result sink")?;

        tracing::info!(queries = answered, "query stream answered");
        Ok(answered)
    }
}

/// Newline-delimited lines with a trailing `\r` removed. Invalid UTF-8 is
/// replaced per line (U+FFFD), so one bad line does not end the stream.
fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        let mut bytes = line?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    })
}
