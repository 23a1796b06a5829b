//! Background sampling task.

use std::pin::{Pin, pin};
use std::task::{Context, Poll};
use std::time::Duration;

use futures::stream::{Stream, StreamExt};
use pacer_types::{Countable, Progress};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::Sampler;

/// Receiving end of a sampler running on its own task.
///
/// The sampling task takes the next snapshot only after the consumer has
/// received the previous one, so a slow consumer delays ticks and always
/// gets a fresh reading. The task stops
/// once the transfer completes, the token is cancelled, or the ticker is
/// dropped.
#[derive(Debug)]
pub struct ProgressTicker {
    rx: mpsc::Receiver<Progress>,
    task: JoinHandle<()>,
}

impl ProgressTicker {
    /// Spawns a sampler for `counter` reaching `size`, ticking every `interval`.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn<C>(cancel: CancellationToken, counter: C, size: u64, interval: Duration) -> Self
    where
        C: Countable + Send + 'static,
    {
        Self::from_sampler(Sampler::new(cancel, counter, size, interval))
    }

    /// Spawns an already configured sampler.
    #[must_use]
    pub fn from_sampler<C>(sampler: Sampler<C>) -> Self
    where
        C: Countable + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);
        let cancel = sampler.cancellation_token().clone();
        let task = tokio::spawn(forward(sampler.into_stream(), tx, cancel));
        Self { rx, task }
    }

    /// Waits for the next snapshot.
    ///
    /// Returns `None` once the transfer is complete or sampling was cancelled.
    pub async fn recv(&mut self) -> Option<Progress> {
        self.rx.recv().await
    }
}

impl Stream for ProgressTicker {
    type Item = Progress;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Moves snapshots from the sampling stream into the channel.
///
/// A slot is reserved before the next snapshot is requested, so the
/// interval timer is only armed once the consumer has taken the previous
/// snapshot.
async fn forward(
    snapshots: impl Stream<Item = Progress>,
    tx: mpsc::Sender<Progress>,
    cancel: CancellationToken,
) {
    let mut snapshots = pin!(snapshots);

    loop {
        let permit = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            permit = tx.reserve() => match permit {
                Ok(permit) => permit,
                Err(_) => {
                    tracing::debug!("progress receiver dropped, stopping sampler");
                    break;
                }
            },
        };

        let Some(progress) = snapshots.next().await else {
            break;
        };
        permit.send(progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_ticker_runs_to_completion() {
        let counter = Arc::new(AtomicU64::new(0));
        let mut ticker = ProgressTicker::spawn(
            CancellationToken::new(),
            Arc::clone(&counter),
            100,
            Duration::from_millis(10),
        );

        let first = ticker.recv().await.unwrap();
        assert!(!first.is_started());

        counter.store(40, Ordering::Relaxed);
        let progress = ticker.recv().await.unwrap();
        assert_eq!(progress.count(), 40);
        assert!(progress.estimated().is_none());

        counter.store(100, Ordering::Relaxed);
        let mut last = progress;
        while let Some(next) = ticker.recv().await {
            last = next;
        }
        assert!(last.is_complete());
        assert_eq!(last.count(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_consumer_gets_fresh_snapshot() {
        let start = tokio::time::Instant::now();
        let counter = Arc::new(AtomicU64::new(0));
        let mut ticker = ProgressTicker::spawn(
            CancellationToken::new(),
            Arc::clone(&counter),
            100,
            Duration::from_millis(10),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        counter.store(50, Ordering::Relaxed);

        // Taken at 10ms and held until the consumer asked for it.
        let first = ticker.recv().await.unwrap();
        assert_eq!(first.count(), 0);

        // Sampled one interval after the first was handed over.
        let second = ticker.recv().await.unwrap();
        assert_eq!(second.count(), 50);
        assert_eq!(start.elapsed(), Duration::from_millis(110));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_cancel() {
        let cancel = CancellationToken::new();
        let counter = Arc::new(AtomicU64::new(10));
        let ticker =
            ProgressTicker::spawn(cancel.clone(), counter, 100, Duration::from_millis(10));

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(35)).await;
            trigger.cancel();
        });

        let snapshots: Vec<Progress> = ticker.collect().await;
        assert_eq!(snapshots.len(), 3);
        assert!(snapshots.iter().all(|p| p.count() == 10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_from_sampler() {
        let counter = Arc::new(AtomicU64::new(8));
        let sampler = Sampler::new(CancellationToken::new(), counter, 8, Duration::from_secs(1));
        let snapshots: Vec<Progress> = ProgressTicker::from_sampler(sampler).collect().await;

        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].is_complete());
    }
}
