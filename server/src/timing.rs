use std::time::{Duration, Instant};

/// Logs how long a scope took when dropped.
///
/// ```
/// let _t = docsearch_server::timing::LogDuration::new("rebuild");
/// // ... work ...
/// ```
pub struct LogDuration {
    label: &'static str,
    start: Instant,
}

impl LogDuration {
    pub fn new(label: &'static str) -> Self {
        Self { label, start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration { self.start.elapsed() }
}

impl Drop for LogDuration {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::info!(label = self.label, elapsed_ms = elapsed.as_millis() as u64, took_s = elapsed.as_secs_f64(), "finished");
    }
}
