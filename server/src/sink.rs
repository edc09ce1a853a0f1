//! Destinations for answered queries.

use docsearch_core::SearchResult;
use std::io::{self, Write};

/// Something that accepts result rows, one line at a time.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write one answered query. Defaults to the text row format.
    fn write_result(&mut self, result: &SearchResult<'_>) -> io::Result<()> {
        self.write_line(&result.to_string())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn write_result(&mut self, result: &SearchResult<'_>) -> io::Result<()> {
        (**self).write_result(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Newline-terminated text rows on any writer.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self { Self { out } }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// One JSON object per answered query: `{"query": .., "hits": [{"docid": .., "hitcount": ..}]}`.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self { Self { out } }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> LineSink for JsonLinesSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")
    }

    fn write_result(&mut self, result: &SearchResult<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, result)?;
        self.out.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_core::Hit;

    #[test]
    fn writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        let hits = [Hit { doc_id: 1, hit_count: 1 }];
        sink.write_result(&SearchResult { query: "wall", hits: &hits }).unwrap();
        sink.write_result(&SearchResult { query: "all", hits: &[] }).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "wall: {docid: 1, hitcount: 1}\nall:\n");
    }

    #[test]
    fn json_sink_emits_one_object_per_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let hits = [Hit { doc_id: 3, hit_count: 4 }, Hit { doc_id: 0, hit_count: 1 }];
        sink.write_result(&SearchResult { query: "is", hits: &hits }).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "{\"query\":\"is\",\"hits\":[{\"docid\":3,\"hitcount\":4},{\"docid\":0,\"hitcount\":1}]}\n"
        );
    }

    #[test]
    fn vec_sink_collects_rows_through_mut_ref() {
        fn emit<S: LineSink>(mut sink: S) {
            sink.write_result(&SearchResult { query: "rock", hits: &[] }).unwrap();
        }
        let mut rows: Vec<String> = Vec::new();
        emit(&mut rows);
        assert_eq!(rows, ["rock:"]);
    }
}
