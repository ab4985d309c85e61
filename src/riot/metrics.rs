use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Simple counter used to log the amount of Riot API requests performed.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    count: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            count: AtomicU64::new(0),
        })
    }

    pub fn inc(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Log one summary line at the end of a run.
    pub fn log_summary(&self) {
        let total = self.count();
        let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
        let avg = if elapsed_min > 0.0 {
            total as f64 / elapsed_min
        } else {
            0.0
        };
        tracing::info!("{} requests executed (avg {:.2} req/min)", total, avg);
    }
}
