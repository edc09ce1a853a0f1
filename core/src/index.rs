use crate::tokenizer::tokenize;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

pub type DocId = u32;
pub type HitCount = u32;

/// One posting: how many times a term occurs in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hit {
    #[serde(rename = "docid")]
    pub doc_id: DocId,
    #[serde(rename = "hitcount")]
    pub hit_count: HitCount,
}

/// Term -> postings map built from one batch of documents.
///
/// Immutable once built. Postings for a term are in document order; ranking
/// happens at query time.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Hit>>,
    num_docs: u32,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Build an index where document id is the position in `documents`.
    pub fn build<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut postings: HashMap<String, Vec<Hit>> = HashMap::new();
        let mut num_docs: u32 = 0;

        for doc in documents {
            let doc_id: DocId = num_docs;
            num_docs += 1;

            let mut tf_counts: HashMap<Cow<'_, str>, HitCount> = HashMap::new();
            for term in tokenize(doc.as_ref()) {
                *tf_counts.entry(term).or_insert(0) += 1;
            }

            for (term, hit_count) in tf_counts {
                let hit = Hit { doc_id, hit_count };
                match postings.get_mut(&*term) {
                    Some(plist) => plist.push(hit),
                    None => {
                        postings.insert(term.into_owned(), vec![hit]);
                    }
                }
            }
        }

        tracing::debug!(num_docs, num_terms = postings.len(), "built inverted index");
        Self { postings, num_docs }
    }

    /// Postings for `term`; empty when the term occurs in no document.
    /// The term must already be normalized (lowercase).
    pub fn lookup(&self, term: &str) -> &[Hit] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn doc_count(&self) -> u32 { self.num_docs }

    pub fn term_count(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.num_docs == 0 }
}
