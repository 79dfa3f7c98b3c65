use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out appointment ids based on the creation time in unix milliseconds,
/// bumped past the previous id when two requests land in the same millisecond.
#[derive(Debug, Default)]
pub struct AppointmentIdGenerator {
    last: AtomicI64,
}

impl AppointmentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> i64 {
        self.next_after(chrono::Utc::now().timestamp_millis())
    }

    fn next_after(&self, now_ms: i64) -> i64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(prev + 1);
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}
