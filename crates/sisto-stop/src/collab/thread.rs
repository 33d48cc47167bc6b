use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use super::ThreadRegistry;

/// Lock-free record of the thread ID of the most recent stopping event.
#[derive(Debug, Default)]
pub struct LastEventThread {
    thread_id: AtomicU64,

    /// Set once the first thread ID is stored, never cleared.
    recorded: AtomicBool,
}

impl LastEventThread {
    /// Creates a new [LastEventThread] with no recorded thread.
    pub const fn new() -> Self {
        Self {
            thread_id: AtomicU64::new(0),
            recorded: AtomicBool::new(false),
        }
    }

    /// Records the given thread as the origin of the next stopping event.
    pub fn record(&self, thread_id: u64) {
        self.thread_id.store(thread_id, Ordering::Release);
        self.recorded.store(true, Ordering::Release);
    }

    /// Returns the recorded thread ID, if any.
    pub fn get(&self) -> Option<u64> {
        self.recorded
            .load(Ordering::Acquire)
            .then(|| self.thread_id.load(Ordering::Acquire))
    }
}

impl ThreadRegistry for LastEventThread {
    type Thread = u64;

    fn last_event_thread(&self) -> Option<u64> {
        self.get()
    }
}
