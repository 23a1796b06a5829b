//! Periodic progress sampling.
//!
//! A sampler watches a [`Countable`] at a fixed interval and turns each
//! observation into a [`Progress`] snapshot. The first observation with a
//! non-zero count becomes the estimation anchor; every later observation
//! extrapolates the completion time linearly from that anchor.

use std::time::Duration;

use futures::stream::{self, Stream};
use pacer_types::{Countable, Progress, Result};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::SamplerConfig;

/// Samples a counter against a known total size.
#[derive(Debug)]
pub struct Sampler<C> {
    cancel: CancellationToken,
    counter: C,
    size: u64,
    interval: Duration,
}

impl<C: Countable> Sampler<C> {
    /// Creates a sampler for `counter`, which is expected to reach `size`.
    ///
    /// The first observation happens one `interval` after the stream is first
    /// polled. Cancelling `cancel` ends the stream at the next tick boundary.
    #[must_use]
    pub fn new(cancel: CancellationToken, counter: C, size: u64, interval: Duration) -> Self {
        Self {
            cancel,
            counter,
            size,
            interval,
        }
    }

    /// Creates a sampler from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(
        cancel: CancellationToken,
        counter: C,
        config: SamplerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(cancel, counter, config.size, config.interval))
    }

    /// Returns the target size.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the sampling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the token that cancels this sampler.
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Turns the sampler into a stream of snapshots.
    ///
    /// The stream is driven by its consumer: the interval timer is only armed
    /// when the next snapshot is requested, so a slow consumer delays ticks
    /// rather than losing them. The stream ends right after the first
    /// complete snapshot, or without a further snapshot once the token is
    /// cancelled.
    pub fn into_stream(self) -> impl Stream<Item = Progress> {
        let state = SamplerState {
            sampler: self,
            anchor: None,
            last_count: 0,
            done: false,
        };

        stream::unfold(state, |mut state| async move {
            if state.done {
                return None;
            }

            let cancelled = tokio::select! {
                biased;
                () = state.sampler.cancel.cancelled() => true,
                () = tokio::time::sleep(state.sampler.interval) => false,
            };
            if cancelled {
                tracing::debug!(
                    count = state.last_count,
                    size = state.sampler.size,
                    "progress sampling cancelled"
                );
                return None;
            }

            let progress = state.observe(Instant::now());
            if progress.is_complete() {
                tracing::debug!(
                    count = progress.count(),
                    size = progress.size(),
                    "transfer complete, closing progress stream"
                );
                state.done = true;
            }
            Some((progress, state))
        })
    }
}

/// Creates a stream of progress snapshots for `counter` reaching `size`.
///
/// Shorthand for [`Sampler::new`] followed by [`Sampler::into_stream`].
pub fn progress_stream<C: Countable>(
    cancel: CancellationToken,
    counter: C,
    size: u64,
    interval: Duration,
) -> impl Stream<Item = Progress> {
    Sampler::new(cancel, counter, size, interval).into_stream()
}

/// Extrapolates the completion instant of a linear transfer.
///
/// `started` is the instant the transfer was first seen moving and `now`
/// the instant `count` of `size` units were observed. Returns `None` when
/// there is nothing to extrapolate from (zero count or zero size) or when
/// the projection does not fit in an [`Instant`].
#[must_use]
pub fn estimate_completion(started: Instant, now: Instant, count: u64, size: u64) -> Option<Instant> {
    if count == 0 || size == 0 {
        return None;
    }

    let ratio = count as f64 / size as f64;
    let elapsed = now.saturating_duration_since(started);
    let projected = Duration::try_from_secs_f64(elapsed.as_secs_f64() / ratio).ok()?;
    started.checked_add(projected)
}

/// Per-run state owned by the sampling stream.
struct SamplerState<C> {
    sampler: Sampler<C>,
    anchor: Option<Instant>,
    last_count: u64,
    done: bool,
}

impl<C: Countable> SamplerState<C> {
    /// Reads the counter and builds the snapshot for this tick.
    fn observe(&mut self, now: Instant) -> Progress {
        let count = self.sampler.counter.count();
        let size = self.sampler.size;

        if count < self.last_count {
            tracing::warn!(
                previous = self.last_count,
                count,
                "counter moved backwards, estimate may be unreliable"
            );
        }
        self.last_count = count;

        let progress = Progress::new(count, size);
        let Some(started) = self.anchor else {
            if progress.is_started() {
                tracing::debug!(count, size, "transfer started, anchoring estimate");
                self.anchor = Some(now);
            }
            return progress;
        };

        let progress = estimate_completion(started, now, count, size)
            .map_or(progress, |estimated| progress.with_estimate(estimated));
        tracing::trace!(count, size, percent = progress.percent(), "progress sampled");
        progress
    }
}
