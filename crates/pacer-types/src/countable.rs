//! The counting capability observed by samplers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Something that can report a cumulative count.
///
/// For byte-counting readers and writers this is the number of bytes moved
/// so far. Implementations must be cheap, free of side effects and safe to
/// call while the counted operation is running on another task.
pub trait Countable {
    /// Returns the current cumulative count.
    fn count(&self) -> u64;
}

impl Countable for AtomicU64 {
    fn count(&self) -> u64 {
        self.load(Ordering::Relaxed)
    }
}

impl<T: Countable + ?Sized> Countable for &T {
    fn count(&self) -> u64 {
        (**self).count()
    }
}

impl<T: Countable + ?Sized> Countable for Arc<T> {
    fn count(&self) -> u64 {
        (**self).count()
    }
}

impl<T: Countable + ?Sized> Countable for Box<T> {
    fn count(&self) -> u64 {
        (**self).count()
    }
}
