use crate::index::Hit;
use serde::Serialize;
use std::fmt::{self, Write};

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{docid: {}, hitcount: {}}}", self.doc_id, self.hit_count)
    }
}

/// `<query>: {docid: D, hitcount: H} ...`, or `<query>:` when nothing matched.
/// The query is echoed verbatim.
pub fn format_row(query: &str, hits: &[Hit]) -> String {
    let mut row = String::with_capacity(query.len() + 1 + hits.len() * 28);
    row.push_str(query);
    row.push(':');
    for hit in hits {
        // writing into a String cannot fail
        let _ = write!(row, " {hit}");
    }
    row
}

/// One answered query, as emitted by the JSON lines output.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub query: &'a str,
    pub hits: &'a [Hit],
}

impl fmt::Display for SearchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_row(self.query, self.hits))
    }
}
