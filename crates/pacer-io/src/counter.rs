//! Shared byte counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pacer_types::Countable;

/// A cloneable handle to a shared byte count.
///
/// Every clone observes the same count, so one handle can live inside a
/// reader or writer while another is given to a sampler.
#[derive(Debug, Clone, Default)]
pub struct ByteCounter {
    bytes: Arc<AtomicU64>,
}

impl ByteCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` bytes to the count.
    pub fn add(&self, n: u64) {
        self.bytes.fetch_add(n, Ordering::Relaxed);
    }

    /// Returns the number of bytes counted so far.
    #[must_use]
    pub fn bytes(&self) -> u64 {
        self.bytes.load(Ordering::Relaxed)
    }
}

impl Countable for ByteCounter {
    fn count(&self) -> u64 {
        self.bytes()
    }
}
