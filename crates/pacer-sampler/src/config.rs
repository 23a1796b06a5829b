//! Sampler configuration.

use std::time::Duration;

use pacer_types::{PacerError, Result};

/// Configuration for a progress sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Time between two observations of the counter.
    pub interval: Duration,
    /// Total number of units the transfer is expected to move.
    pub size: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            size: 0,
        }
    }
}

impl SamplerConfig {
    /// Default sampling interval (1 second).
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// Creates a configuration for a transfer of `size` units sampled every `interval`.
    #[must_use]
    pub const fn new(size: u64, interval: Duration) -> Self {
        Self { interval, size }
    }

    /// Returns this configuration with a different sampling interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Returns this configuration with a different target size.
    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Checks that the configuration can drive a sampler.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidInterval`] if the interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(PacerError::InvalidInterval);
        }
        Ok(())
    }
}
