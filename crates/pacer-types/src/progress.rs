//! Progress snapshot type.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

/// A moment of progress.
///
/// A `Progress` is taken by a sampler at one tick and handed to the consumer
/// by value. The size is fixed for the whole sampler run. The estimated
/// completion time is only present once the sampler has an estimation anchor
/// (the first tick that observed activity) and a later tick to extrapolate
/// from.
///
/// # Zero size
///
/// A zero target size is treated as an already finished transfer:
/// [`percent`](Self::percent) reports 100 and [`is_complete`](Self::is_complete)
/// is true regardless of the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    count: u64,
    size: u64,
    estimated: Option<Instant>,
}

impl Progress {
    /// Creates a snapshot without a completion estimate.
    #[must_use]
    pub const fn new(count: u64, size: u64) -> Self {
        Self {
            count,
            size,
            estimated: None,
        }
    }

    /// Returns this snapshot with the given estimated completion instant.
    #[must_use]
    pub const fn with_estimate(mut self, estimated: Instant) -> Self {
        self.estimated = Some(estimated);
        self
    }

    /// Returns the number of units read or written so far.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the total number of units expected.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns true once any units have been observed.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.count > 0
    }

    /// Returns true when the count has reached the size.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.count >= self.size
    }

    /// Calculates the percentage complete.
    ///
    /// Returns 0 before anything has been counted and exactly 100 when the
    /// count equals the size. A count past the size yields a value above 100.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.size == 0 {
            return 100.0;
        }
        if self.count == 0 {
            return 0.0;
        }
        if self.count == self.size {
            return 100.0;
        }
        100.0 * self.count as f64 / self.size as f64
    }

    /// Returns the estimated completion instant, if one has been computed.
    #[must_use]
    pub const fn estimated(&self) -> Option<Instant> {
        self.estimated
    }

    /// Returns the estimated completion as a wall-clock time.
    ///
    /// The conversion is made against the current clocks, so two calls may
    /// differ by the drift between the monotonic and the system clock.
    #[must_use]
    pub fn estimated_at(&self) -> Option<DateTime<Utc>> {
        let estimated = self.estimated?;
        let now = Instant::now();
        let wall = Utc::now();

        if estimated >= now {
            let ahead = chrono::Duration::from_std(estimated - now).ok()?;
            wall.checked_add_signed(ahead)
        } else {
            let behind = chrono::Duration::from_std(now - estimated).ok()?;
            wall.checked_sub_signed(behind)
        }
    }

    /// Returns the time left until the estimated completion.
    ///
    /// This is computed from the current time on every call. Returns `None`
    /// when no estimate exists yet, and zero once the estimate has passed.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.estimated
            .map(|estimated| estimated.saturating_duration_since(Instant::now()))
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.count, self.size, self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_not_started() {
        let progress = Progress::new(0, 100);
        assert!(!progress.is_started());
        assert!(!progress.is_complete());
        assert_relative_eq!(progress.percent(), 0.0);
        assert!(progress.estimated().is_none());
        assert!(progress.remaining().is_none());
        assert!(progress.estimated_at().is_none());
    }

    #[test]
    fn test_partial_percent() {
        let progress = Progress::new(25, 100);
        assert!(progress.is_started());
        assert!(!progress.is_complete());
        assert_relative_eq!(progress.percent(), 25.0);

        let progress = Progress::new(1, 3);
        assert_relative_eq!(progress.percent(), 100.0 / 3.0, epsilon = 1e-9);
        assert!(progress.percent() > 0.0 && progress.percent() < 100.0);
    }

    #[test]
    fn test_complete() {
        let progress = Progress::new(100, 100);
        assert!(progress.is_complete());
        assert_relative_eq!(progress.percent(), 100.0);

        let overshoot = Progress::new(150, 100);
        assert!(overshoot.is_complete());
        assert_relative_eq!(overshoot.percent(), 150.0);
    }

    #[test]
    fn test_zero_size() {
        let progress = Progress::new(0, 0);
        assert!(!progress.is_started());
        assert!(progress.is_complete());
        assert_relative_eq!(progress.percent(), 100.0);
        assert!(progress.percent().is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Progress::new(50, 200).to_string(), "50/200 (25.0%)");
        assert_eq!(Progress::new(0, 0).to_string(), "0/0 (100.0%)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_recomputed_on_read() {
        let estimated = Instant::now() + Duration::from_secs(10);
        let progress = Progress::new(10, 100).with_estimate(estimated);

        assert_eq!(progress.estimated(), Some(estimated));
        assert_eq!(progress.remaining(), Some(Duration::from_secs(10)));

        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(progress.remaining(), Some(Duration::from_secs(6)));

        tokio::time::advance(Duration::from_secs(20)).await;
        assert_eq!(progress.remaining(), Some(Duration::ZERO));
    }

    #[tokio::test(start_paused = true)]
    async fn test_estimated_at_in_future() {
        let progress =
            Progress::new(10, 100).with_estimate(Instant::now() + Duration::from_secs(3600));
        let at = progress.estimated_at().unwrap();
        let ahead = at - Utc::now();

        assert!(ahead > chrono::Duration::minutes(59));
        assert!(ahead <= chrono::Duration::minutes(60));
    }
}
