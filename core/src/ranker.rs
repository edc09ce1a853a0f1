//! Query answering: hit-count accumulation and top-k selection.
//!
//! Scores are raw hit counts summed over the distinct query terms. Results are
//! ordered by hit count descending, then document id ascending.

use crate::index::{DocId, Hit, HitCount, InvertedIndex};
use crate::tokenizer::tokenize;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Number of documents returned per query.
pub const TOP_K: usize = 5;

/// Reusable scratch space for answering queries.
///
/// Holds a dense accumulator indexed by document id plus the list of ids
/// touched by the current query. Only touched slots are zeroed afterwards, so
/// per-query cost is proportional to the postings read, not to the number of
/// documents. One ranker per thread; it adapts when used with a different
/// index.
#[derive(Debug, Default)]
pub struct Ranker {
    counts: Vec<HitCount>,
    touched: Vec<DocId>,
}

impl Ranker {
    pub fn new() -> Self { Self::default() }

    /// Top [`TOP_K`] documents for `query`. Repeated query terms count once.
    pub fn answer(&mut self, index: &InvertedIndex, query: &str) -> Vec<Hit> {
        // counts is all zeros here, so resizing keeps it clean
        self.counts.resize(index.doc_count() as usize, 0);

        let mut terms: Vec<Cow<'_, str>> = tokenize(query).collect();
        terms.sort_unstable();
        terms.dedup();

        for term in &terms {
            for hit in index.lookup(term) {
                let slot = &mut self.counts[hit.doc_id as usize];
                if *slot == 0 {
                    self.touched.push(hit.doc_id);
                }
                *slot += hit.hit_count;
            }
        }

        let mut hits: Vec<Hit> = self
            .touched
            .iter()
            .map(|&doc_id| Hit { doc_id, hit_count: self.counts[doc_id as usize] })
            .collect();

        for &doc_id in &self.touched {
            self.counts[doc_id as usize] = 0;
        }
        self.touched.clear();

        top_k(&mut hits, TOP_K);
        hits
    }
}

/// One-off query without keeping scratch space around.
pub fn answer(index: &InvertedIndex, query: &str) -> Vec<Hit> {
    Ranker::new().answer(index, query)
}

fn rank_order(a: &Hit, b: &Hit) -> Ordering {
    b.hit_count.cmp(&a.hit_count).then(a.doc_id.cmp(&b.doc_id))
}

/// Keep the best `k` hits, sorted.
fn top_k(hits: &mut Vec<Hit>, k: usize) {
    if k == 0 {
        hits.clear();
        return;
    }
    if hits.len() > k {
        hits.select_nth_unstable_by(k - 1, rank_order);
        hits.truncate(k);
    }
    hits.sort_unstable_by(rank_order);
}
