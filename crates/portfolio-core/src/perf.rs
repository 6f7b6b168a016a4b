//! Lightweight timing of named operations.
//!
//! ```ignore
//! let _timing = Timing::start("firestore list reviews");
//! // ... work ...
//! // elapsed time is logged at debug level when `_timing` drops
//! ```

use std::time::{Duration, Instant};

/// Logs the elapsed time of an operation when dropped.
#[derive(Debug)]
pub struct Timing {
    label: String,
    started: Instant,
    finished: bool,
}

impl Timing {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
            finished: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the clock now and return the measured duration.
    pub fn finish(mut self) -> Duration {
        self.finished = true;
        let elapsed = self.elapsed();
        report(&self.label, elapsed);
        elapsed
    }
}

impl Drop for Timing {
    fn drop(&mut self) {
        if !self.finished {
            report(&self.label, self.elapsed());
        }
    }
}

fn report(label: &str, elapsed: Duration) {
    tracing::debug!(
        operation = label,
        elapsed_ms = elapsed.as_millis() as u64,
        "{} took {:.2}ms",
        label,
        elapsed.as_secs_f64() * 1000.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_returns_elapsed() {
        let timing = Timing::start("noop");
        std::thread::sleep(Duration::from_millis(2));
        assert!(timing.finish() >= Duration::from_millis(2));
    }
}
