use std::time::{Duration, Instant};

/// Wall-clock timer for a single start/stop interval.
#[derive(Debug, Clone, Default)]
pub struct StopWatch {
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl StopWatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.elapsed = started_at.elapsed();
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time between the last start/stop pair, as `"<n> ms"`.
    pub fn display(&self) -> String {
        format!("{} ms", self.elapsed.as_millis())
    }
}
