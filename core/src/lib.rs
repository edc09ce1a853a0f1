pub mod index;
pub mod ranker;
pub mod serp;
pub mod tokenizer;

pub use index::{DocId, Hit, HitCount, InvertedIndex};
pub use ranker::{answer, Ranker, TOP_K};
pub use serp::{format_row, SearchResult};
