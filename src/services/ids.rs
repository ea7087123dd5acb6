//! Unique identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter producing lowercase hexadecimal ids.
///
/// Safe to share between threads: every call to [`next_id`](Self::next_id)
/// observes a distinct counter value.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Counter starting at zero; the first id is `"1"`.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Counter starting at `seed`; the first id is `seed + 1`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            counter: AtomicU64::new(seed),
        }
    }

    /// Increment the counter and format the new value as hex.
    pub fn next_id(&self) -> String {
        let id = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        tracing::trace!(id, "generated identifier");
        format!("{id:x}")
    }

    /// Last value handed out.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
